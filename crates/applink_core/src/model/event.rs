//! Runtime link-event shapes and normalization.
//!
//! # Responsibility
//! - Model the OS re-entry callbacks that can carry a deep link while the
//!   process is already running.
//! - Normalize all of them into one `Option<DeepLink>` outcome.
//!
//! # Invariants
//! - Normalization is total: every variant maps to a link or to `None`.
//! - No variant-specific delivery path exists downstream of this type.

use crate::model::launch::BrowsingActivity;
use crate::model::link::DeepLink;

/// One OS re-entry notification observed while the process is alive.
///
/// The variants mirror the three distinct host callbacks. Consumers go
/// through [`LinkEvent::deep_link`] instead of matching variants, so every
/// entry point shares the same delivery path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkEvent {
    /// The running app was targeted by a new launch request. The URL may be
    /// absent: hosts deliver this callback for link-less relaunches too.
    Relaunch { url: Option<String> },
    /// A custom-scheme URL was opened while the app was in front.
    OpenUrl { url: String },
    /// A web-browsing continuation arrived for the running app.
    WebActivity { activity: BrowsingActivity },
}

impl LinkEvent {
    /// Extracts the event's deep link, if it carries one.
    pub fn deep_link(&self) -> Option<DeepLink> {
        match self {
            Self::Relaunch { url } => url.as_deref().and_then(DeepLink::from_raw),
            Self::OpenUrl { url } => DeepLink::from_raw(url.as_str()),
            Self::WebActivity { activity } => activity.deep_link(),
        }
    }

    /// Stable source label used in structured log lines.
    pub fn source(&self) -> &'static str {
        match self {
            Self::Relaunch { .. } => "relaunch",
            Self::OpenUrl { .. } => "open_url",
            Self::WebActivity { .. } => "web_activity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LinkEvent;
    use crate::model::launch::BrowsingActivity;

    #[test]
    fn relaunch_without_url_normalizes_to_none() {
        assert!(LinkEvent::Relaunch { url: None }.deep_link().is_none());
    }

    #[test]
    fn relaunch_with_url_normalizes_to_link() {
        let event = LinkEvent::Relaunch {
            url: Some("myapp://cart".to_string()),
        };
        assert_eq!(event.deep_link().expect("should carry link").as_str(), "myapp://cart");
    }

    #[test]
    fn open_url_normalizes_to_link() {
        let event = LinkEvent::OpenUrl {
            url: "myapp://cart".to_string(),
        };
        assert_eq!(event.deep_link().expect("should carry link").as_str(), "myapp://cart");
    }

    #[test]
    fn non_web_activity_normalizes_to_none() {
        let event = LinkEvent::WebActivity {
            activity: BrowsingActivity {
                activity_type: "handoff".to_string(),
                webpage_url: Some("https://example.com".to_string()),
            },
        };
        assert!(event.deep_link().is_none());
    }

    #[test]
    fn source_labels_are_stable() {
        assert_eq!(LinkEvent::Relaunch { url: None }.source(), "relaunch");
        let event = LinkEvent::OpenUrl {
            url: "myapp://x".to_string(),
        };
        assert_eq!(event.source(), "open_url");
    }
}
