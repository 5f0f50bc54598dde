//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `applink_core` linkage.
//! - Walk the bridge contract once with a stdout sink.

use applink_core::{
    DeepLink, DeepLinkBridge, EventSink, LaunchContext, LinkEvent, MethodCall, MethodOutcome,
};
use std::sync::Arc;

struct StdoutSink;

impl EventSink for StdoutSink {
    fn success(&self, link: DeepLink) {
        println!("live link={link}");
    }

    fn end_of_stream(&self) {
        println!("live stream closed");
    }
}

fn main() {
    println!("applink_core ping={}", applink_core::ping());
    println!("applink_core version={}", applink_core::core_version());

    let bridge = DeepLinkBridge::new();
    bridge.record_launch(&LaunchContext::with_url("applink://probe/launch"));
    match bridge.handle_method_call(&MethodCall::get_initial_link()) {
        MethodOutcome::InitialLink(link) => {
            println!("initial link={}", link.map(|l| l.into_string()).unwrap_or_default())
        }
        MethodOutcome::NotImplemented { method } => println!("rejected method={method}"),
    }

    bridge.subscribe(Arc::new(StdoutSink));
    bridge.dispatch(&LinkEvent::OpenUrl {
        url: "applink://probe/live".to_string(),
    });
    bridge.shutdown();
}
