//! Navigation destinations produced by the surfaces.

/// A page the portal can send the user to.
///
/// Only [`Route::Landing`], [`Route::Dashboard`] and [`Route::SignIn`] are
/// served by this crate; the rest are link targets owned by other surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    SignIn,
    Register,
    Dashboard,
    TicketList,
    TicketDetail(String),
    TicketCreate,
    Admin,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::SignIn => "/auth/sign-in".to_string(),
            Self::Register => "/auth/register".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::TicketList => "/tickets".to_string(),
            Self::TicketDetail(id) => format!("/tickets/{id}"),
            Self::TicketCreate => "/tickets/new".to_string(),
            Self::Admin => "/admin".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Landing.path(), "/");
        assert_eq!(Route::SignIn.path(), "/auth/sign-in");
        assert_eq!(Route::Register.path(), "/auth/register");
        assert_eq!(Route::Dashboard.path(), "/dashboard");
        assert_eq!(Route::TicketList.path(), "/tickets");
        assert_eq!(Route::TicketCreate.path(), "/tickets/new");
        assert_eq!(Route::Admin.path(), "/admin");
    }

    #[test]
    fn test_ticket_detail_is_parameterized_by_id() {
        assert_eq!(
            Route::TicketDetail("9f1c".to_string()).path(),
            "/tickets/9f1c"
        );
    }
}
