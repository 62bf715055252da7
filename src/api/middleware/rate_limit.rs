//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::KeyExtractor,
};

/// Creates a rate limiter for credential submission.
///
/// # Limits
///
/// - **Rate**: one request replenished every 6 seconds
/// - **Burst**: 5 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Pass [`tower_governor::key_extractor::PeerIpKeyExtractor`] to key on the
/// socket peer address, or
/// [`tower_governor::key_extractor::SmartIpKeyExtractor`] when running behind a
/// trusted proxy that sets `X-Forwarded-For` / `X-Real-IP`.
///
/// # Example
///
/// ```rust,ignore
/// let submit = post(sign_in_handler).layer(rate_limit::layer(PeerIpKeyExtractor));
/// ```
pub fn layer<K: KeyExtractor>(
    key_extractor: K,
) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_second(6)
            .burst_size(5)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
