//! Launch metadata shapes and initial-link capture.
//!
//! # Responsibility
//! - Model the launch-time metadata the host hands over at process start.
//! - Pick the deep link out of it with a fixed precedence.
//!
//! # Invariants
//! - A direct URL field always wins over an activity payload.
//! - Only browsing-web activities contribute a webpage URL.
//! - Absence of a link is a normal outcome, never an error.
//!
//! # See also
//! - docs/architecture/deeplink-contract.md

use crate::model::link::DeepLink;
use serde::{Deserialize, Serialize};

/// Activity type reported for web-browsing continuations (universal links).
pub const BROWSING_WEB_ACTIVITY: &str = "browsing_web";

/// Continuation payload delivered when the app is entered through a web URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowsingActivity {
    /// Platform activity discriminator; only [`BROWSING_WEB_ACTIVITY`]
    /// activities carry a link.
    pub activity_type: String,
    /// Web URL of the page that triggered the continuation, when present.
    pub webpage_url: Option<String>,
}

impl BrowsingActivity {
    /// Builds a browsing-web activity for the given webpage URL.
    pub fn browsing_web(webpage_url: impl Into<String>) -> Self {
        Self {
            activity_type: BROWSING_WEB_ACTIVITY.to_string(),
            webpage_url: Some(webpage_url.into()),
        }
    }

    /// Returns the continuation's deep link, if this activity can carry one.
    pub fn deep_link(&self) -> Option<DeepLink> {
        if self.activity_type != BROWSING_WEB_ACTIVITY {
            return None;
        }
        self.webpage_url.as_deref().and_then(DeepLink::from_raw)
    }
}

/// Launch metadata snapshot taken at process start.
///
/// Both fields may be absent; a launch without a deep link is the common
/// case, not a degenerate one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchContext {
    /// Direct URL field set for custom-scheme launches.
    pub url: Option<String>,
    /// Activity continuation set for universal-link launches.
    pub activity: Option<BrowsingActivity>,
}

impl LaunchContext {
    /// A launch that carried no link metadata at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A custom-scheme launch.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            activity: None,
        }
    }

    /// A universal-link launch.
    pub fn with_activity(activity: BrowsingActivity) -> Self {
        Self {
            url: None,
            activity: Some(activity),
        }
    }

    /// Captures the launch deep link.
    ///
    /// The direct URL field wins over the activity payload even when both
    /// are present; an empty context yields `None`.
    pub fn deep_link(&self) -> Option<DeepLink> {
        if let Some(link) = self.url.as_deref().and_then(DeepLink::from_raw) {
            return Some(link);
        }
        self.activity.as_ref().and_then(BrowsingActivity::deep_link)
    }
}

#[cfg(test)]
mod tests {
    use super::{BrowsingActivity, LaunchContext, BROWSING_WEB_ACTIVITY};

    #[test]
    fn direct_url_wins_over_activity_payload() {
        let context = LaunchContext {
            url: Some("myapp://product/42".to_string()),
            activity: Some(BrowsingActivity::browsing_web("https://example.com/product/42")),
        };
        let link = context.deep_link().expect("direct URL should capture");
        assert_eq!(link.as_str(), "myapp://product/42");
    }

    #[test]
    fn activity_payload_is_the_fallback() {
        let context =
            LaunchContext::with_activity(BrowsingActivity::browsing_web("https://example.com/p"));
        let link = context.deep_link().expect("web activity should capture");
        assert_eq!(link.as_str(), "https://example.com/p");
    }

    #[test]
    fn empty_context_captures_nothing() {
        assert!(LaunchContext::empty().deep_link().is_none());
    }

    #[test]
    fn blank_direct_url_falls_through_to_activity() {
        let context = LaunchContext {
            url: Some("  ".to_string()),
            activity: Some(BrowsingActivity::browsing_web("https://example.com/q")),
        };
        let link = context.deep_link().expect("fallback should capture");
        assert_eq!(link.as_str(), "https://example.com/q");
    }

    #[test]
    fn non_web_activity_carries_no_link() {
        let context = LaunchContext::with_activity(BrowsingActivity {
            activity_type: "handoff".to_string(),
            webpage_url: Some("https://example.com/ignored".to_string()),
        });
        assert!(context.deep_link().is_none());
    }

    #[test]
    fn browsing_web_constructor_sets_discriminator() {
        let activity = BrowsingActivity::browsing_web("https://example.com");
        assert_eq!(activity.activity_type, BROWSING_WEB_ACTIVITY);
    }
}
