//! Request/response contract for the bridge channel pair.
//!
//! # Responsibility
//! - Name both bridge channels.
//! - Shape the single recognized request and its reply.
//!
//! # Invariants
//! - `getInitialLink` is the only recognized method name.
//! - Rejection of other names is a protocol outcome, never a runtime fault.

use crate::model::link::DeepLink;

/// Request/response channel name.
pub const METHOD_CHANNEL: &str = "applink/deeplink";
/// Publish/subscribe channel name.
pub const EVENT_CHANNEL: &str = "applink/deeplink_stream";
/// The single recognized request on [`METHOD_CHANNEL`].
pub const METHOD_GET_INITIAL_LINK: &str = "getInitialLink";

/// One incoming request on the request/response channel.
///
/// The contract carries no request arguments, so the method name is the
/// whole call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    pub method: String,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
        }
    }

    /// The one recognized request.
    pub fn get_initial_link() -> Self {
        Self::new(METHOD_GET_INITIAL_LINK)
    }
}

/// Channel-level reply to a [`MethodCall`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodOutcome {
    /// Reply to `getInitialLink`; `None` when the launch carried no link.
    InitialLink(Option<DeepLink>),
    /// The request name is not part of the contract. Caller-visible and
    /// non-fatal.
    NotImplemented { method: String },
}

impl MethodOutcome {
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::{MethodCall, MethodOutcome, METHOD_GET_INITIAL_LINK};

    #[test]
    fn recognized_request_builder_uses_contract_name() {
        assert_eq!(MethodCall::get_initial_link().method, METHOD_GET_INITIAL_LINK);
    }

    #[test]
    fn not_implemented_is_observable() {
        let outcome = MethodOutcome::NotImplemented {
            method: "doSomethingElse".to_string(),
        };
        assert!(outcome.is_not_implemented());
        assert!(!MethodOutcome::InitialLink(None).is_not_implemented());
    }
}
