//! Deep-link delivery core for the AppLink shell.
//! This crate is the single source of truth for the bridge contract.

pub mod bootstrap;
pub mod bridge;
pub mod logging;
pub mod model;

pub use bootstrap::{
    BootstrapConfig, BootstrapError, BootstrapResult, Renderer, DEFAULT_API_BASE_URL,
};
pub use bridge::channel::{
    MethodCall, MethodOutcome, EVENT_CHANNEL, METHOD_CHANNEL, METHOD_GET_INITIAL_LINK,
};
pub use bridge::subscriber::{EventSink, SubscriberSlot, SubscriptionState};
pub use bridge::{DeepLinkBridge, DeliveryOutcome};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::LinkEvent;
pub use model::launch::{BrowsingActivity, LaunchContext, BROWSING_WEB_ACTIVITY};
pub use model::link::DeepLink;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
