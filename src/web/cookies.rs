//! Session and flash cookie handling.

use axum::http::{
    HeaderMap, HeaderValue,
    header::{COOKIE, InvalidHeaderValue},
};

/// Cookie holding the backend-issued access token.
pub const SESSION_COOKIE: &str = "sb-access-token";

/// Cookie holding a one-shot [`Notice`].
pub const FLASH_COOKIE: &str = "flash";

/// Backend access tokens expire after an hour.
const SESSION_MAX_AGE_SECONDS: u64 = 3600;
const FLASH_MAX_AGE_SECONDS: u64 = 60;

/// Extracts a cookie value from the request headers.
///
/// Handles multiple `Cookie` headers and multiple cookies per header.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|cookie_header| cookie_header.to_str().ok())
        .find_map(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(key), Some(value)) if key == name => Some(value.to_string()),
                    _ => None,
                }
            })
        })
}

/// Transient notification carried across one redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    SignedIn,
    SignedOut,
    SignOutFailed,
}

impl Notice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignedIn => "signed_in",
            Self::SignedOut => "signed_out",
            Self::SignOutFailed => "sign_out_failed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "signed_in" => Some(Self::SignedIn),
            "signed_out" => Some(Self::SignedOut),
            "sign_out_failed" => Some(Self::SignOutFailed),
            _ => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::SignedIn => "Welcome back!",
            Self::SignedOut => "You have been signed out.",
            Self::SignOutFailed => "We could not sign you out. Please try again.",
        }
    }

    /// Toast flavour: `success` or `error`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SignedIn | Self::SignedOut => "success",
            Self::SignOutFailed => "error",
        }
    }
}

/// Builds `Set-Cookie` values with consistent attributes.
#[derive(Debug, Clone, Copy)]
pub struct CookiePolicy {
    secure: bool,
}

impl CookiePolicy {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    fn build(&self, name: &str, value: &str, max_age: u64) -> Result<HeaderValue, InvalidHeaderValue> {
        let mut cookie = format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}");
        if self.secure {
            cookie.push_str("; Secure");
        }
        HeaderValue::from_str(&cookie)
    }

    pub fn session(&self, access_token: &str) -> Result<HeaderValue, InvalidHeaderValue> {
        self.build(SESSION_COOKIE, access_token, SESSION_MAX_AGE_SECONDS)
    }

    pub fn clear_session(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        self.build(SESSION_COOKIE, "", 0)
    }

    pub fn flash(&self, notice: Notice) -> Result<HeaderValue, InvalidHeaderValue> {
        self.build(FLASH_COOKIE, notice.as_str(), FLASH_MAX_AGE_SECONDS)
    }

    pub fn clear_flash(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        self.build(FLASH_COOKIE, "", 0)
    }
}
