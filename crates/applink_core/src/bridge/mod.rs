//! Deep-link bridge facade.
//!
//! # Responsibility
//! - Own the initial-link slot and the subscriber slot.
//! - Tie launch capture, method dispatch and live delivery together.
//!
//! # Invariants
//! - The initial-link slot is written at most once per bridge lifetime.
//! - Live links are forwarded synchronously or dropped, never queued.
//!
//! # See also
//! - docs/architecture/deeplink-contract.md

pub mod channel;
pub mod subscriber;

use crate::bridge::channel::{MethodCall, MethodOutcome, METHOD_GET_INITIAL_LINK};
use crate::bridge::subscriber::{EventSink, SubscriberSlot, SubscriptionState};
use crate::model::event::LinkEvent;
use crate::model::launch::LaunchContext;
use crate::model::link::DeepLink;
use log::{debug, info, warn};
use std::sync::{Arc, OnceLock};

/// Delivery result for one runtime link event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The link reached the current subscriber.
    Forwarded,
    /// The event carried no link after normalization.
    DroppedNoLink,
    /// No subscriber was registered when the link arrived.
    DroppedNoSubscriber,
}

/// Process-facing deep-link bridge.
///
/// One instance lives for the whole process; the FFI layer owns it and the
/// host shells feed it. All operations are synchronous and non-blocking.
#[derive(Default)]
pub struct DeepLinkBridge {
    initial_link: OnceLock<Option<DeepLink>>,
    subscriber: SubscriberSlot,
}

impl DeepLinkBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the launch deep link and seals the initial-link slot.
    ///
    /// The first call decides the slot contents for the bridge lifetime,
    /// even when the outcome is "no link". Later calls are ignored and
    /// return whatever the first call stored.
    pub fn record_launch(&self, context: &LaunchContext) -> Option<DeepLink> {
        let mut sealed_now = false;
        let stored = self.initial_link.get_or_init(|| {
            sealed_now = true;
            context.deep_link()
        });
        if sealed_now {
            info!(
                "event=launch_captured module=bridge status=ok has_link={}",
                stored.is_some()
            );
        } else {
            warn!("event=launch_ignored module=bridge status=ok reason=slot_sealed");
        }
        stored.clone()
    }

    /// Returns the captured initial link.
    ///
    /// `None` both before launch capture and when the launch carried no
    /// link; callers cannot tell the two apart, by contract.
    pub fn initial_link(&self) -> Option<DeepLink> {
        self.initial_link.get().cloned().flatten()
    }

    /// Serves one request on the request/response channel.
    pub fn handle_method_call(&self, call: &MethodCall) -> MethodOutcome {
        match call.method.as_str() {
            METHOD_GET_INITIAL_LINK => MethodOutcome::InitialLink(self.initial_link()),
            other => {
                debug!("event=method_rejected module=bridge status=rejected method={other}");
                MethodOutcome::NotImplemented {
                    method: other.to_string(),
                }
            }
        }
    }

    /// Event-channel `onListen`: registers the sole live-link subscriber.
    ///
    /// A prior subscriber, if any, is displaced without notification.
    pub fn subscribe(&self, sink: Arc<dyn EventSink>) {
        let replaced = self.subscriber.subscribe(sink);
        info!("event=stream_subscribed module=bridge status=ok replaced={replaced}");
    }

    /// Event-channel `onCancel`: clears the subscriber, if any.
    pub fn unsubscribe(&self) {
        self.subscriber.unsubscribe();
        info!("event=stream_cancelled module=bridge status=ok");
    }

    pub fn subscription_state(&self) -> SubscriptionState {
        self.subscriber.state()
    }

    /// Normalizes one runtime event and forwards its link, if anyone listens.
    ///
    /// Events that normalize to no link are dropped before the subscriber
    /// slot is consulted. Link values never reach the log, only presence.
    pub fn dispatch(&self, event: &LinkEvent) -> DeliveryOutcome {
        let Some(link) = event.deep_link() else {
            debug!(
                "event=link_dropped module=bridge status=ok source={} reason=no_link",
                event.source()
            );
            return DeliveryOutcome::DroppedNoLink;
        };
        if self.subscriber.forward(link) {
            debug!(
                "event=link_forwarded module=bridge status=ok source={}",
                event.source()
            );
            DeliveryOutcome::Forwarded
        } else {
            debug!(
                "event=link_dropped module=bridge status=ok source={} reason=no_subscriber",
                event.source()
            );
            DeliveryOutcome::DroppedNoSubscriber
        }
    }

    /// Ends the live feed for process teardown.
    ///
    /// The current subscriber, if any, receives an explicit end-of-stream
    /// signal before the slot is cleared.
    pub fn shutdown(&self) {
        self.subscriber.close();
        info!("event=bridge_shutdown module=bridge status=ok");
    }
}
