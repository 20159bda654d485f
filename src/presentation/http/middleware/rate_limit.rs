// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type PublicWriteLimiter = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Seconds before one more anonymous submission is allowed per client.
const REPLENISH_SECONDS: u64 = 6;
const BURST: u32 = 5;

/// Limiter for anonymous write endpoints (comments, contact form), keyed on
/// the forwarded client address. `None` if the quota is rejected by the
/// builder, in which case the routes are served unlimited.
pub fn public_write_limiter() -> Option<PublicWriteLimiter> {
    static LIMITER: OnceLock<Option<PublicWriteLimiter>> = OnceLock::new();

    LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REPLENISH_SECONDS);
            builder.burst_size(BURST);
            let Some(config) = builder.key_extractor(SmartIpKeyExtractor).finish() else {
                tracing::error!("invalid rate limit quota; public writes are unthrottled");
                return None;
            };
            Some(GovernorLayer::new(config))
        })
        .clone()
}
