//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the bridge channel pair to Dart via FRB.
//! - Give the native shells their event entry points into the shared bridge.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The process owns exactly one bridge instance.
//!
//! # See also
//! - docs/architecture/deeplink-contract.md

use applink_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    BrowsingActivity, DeepLink, DeepLinkBridge, DeliveryOutcome, EventSink, LaunchContext,
    LinkEvent, MethodCall, MethodOutcome,
};
use std::sync::{Arc, OnceLock};

static BRIDGE: OnceLock<DeepLinkBridge> = OnceLock::new();

/// Returns the process-global bridge shared by Dart and the native shells.
#[flutter_rust_bridge::frb(ignore)]
pub fn bridge() -> &'static DeepLinkBridge {
    BRIDGE.get_or_init(DeepLinkBridge::new)
}

/// Event-channel `onListen` for the embedder. The generated stream glue
/// implements [`EventSink`] over its Dart sink and registers it here; a
/// prior sink is displaced, last registration wins.
#[flutter_rust_bridge::frb(ignore)]
pub fn attach_link_sink(sink: Arc<dyn EventSink>) {
    bridge().subscribe(sink);
}

/// Ends the live-link feed at process teardown, signalling end-of-stream
/// to the current subscriber.
#[flutter_rust_bridge::frb(ignore)]
pub fn close_link_stream() {
    bridge().shutdown();
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Launch metadata snapshot as delivered by the host shells.
pub struct FfiLaunchContext {
    /// Direct URL field for custom-scheme launches.
    pub url: Option<String>,
    /// Activity discriminator for continuation launches.
    pub activity_type: Option<String>,
    /// Webpage URL inside the continuation payload.
    pub webpage_url: Option<String>,
}

impl FfiLaunchContext {
    fn into_context(self) -> LaunchContext {
        let Self {
            url,
            activity_type,
            webpage_url,
        } = self;
        LaunchContext {
            url,
            activity: activity_type.map(|activity_type| BrowsingActivity {
                activity_type,
                webpage_url,
            }),
        }
    }
}

/// Reply envelope for raw request/response dispatch.
pub struct FfiMethodReply {
    /// Whether the request name was recognized.
    pub ok: bool,
    /// Initial link payload; meaningful only when `ok`.
    pub link: Option<String>,
    /// Human-readable diagnostics for rejected requests.
    pub message: String,
}

/// Records the launch metadata into the initial-link slot.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - First call per process seals the slot; later calls are no-ops that
///   return the sealed value.
/// - Never panics; absence of a link is a normal `None`.
#[flutter_rust_bridge::frb(sync)]
pub fn handle_launch(context: FfiLaunchContext) -> Option<String> {
    bridge()
        .record_launch(&context.into_context())
        .map(DeepLink::into_string)
}

/// Returns the deep link the process was launched with, if any.
///
/// # FFI contract
/// - Sync call, non-blocking slot read.
/// - Never panics; `None` both before launch capture and for link-less
///   launches.
#[flutter_rust_bridge::frb(sync)]
pub fn get_initial_link() -> Option<String> {
    match bridge().handle_method_call(&MethodCall::get_initial_link()) {
        MethodOutcome::InitialLink(link) => link.map(DeepLink::into_string),
        MethodOutcome::NotImplemented { .. } => None,
    }
}

/// Dispatches a raw request name through the request/response channel.
///
/// Exists for the shell's channel shim; `getInitialLink` is the only
/// recognized name, anything else comes back rejected.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; rejection is a reply, not an exception.
#[flutter_rust_bridge::frb(sync)]
pub fn invoke_method(method: String) -> FfiMethodReply {
    match bridge().handle_method_call(&MethodCall::new(method)) {
        MethodOutcome::InitialLink(link) => FfiMethodReply {
            ok: true,
            link: link.map(DeepLink::into_string),
            message: String::new(),
        },
        MethodOutcome::NotImplemented { method } => FfiMethodReply {
            ok: false,
            link: None,
            message: format!("method not implemented: {method}"),
        },
    }
}

/// Host entry point: the running app was targeted by a new launch request.
///
/// # FFI contract
/// - Sync call, non-blocking forward-or-drop.
/// - Never panics; returns whether the link reached a subscriber.
#[flutter_rust_bridge::frb(sync)]
pub fn on_relaunch(url: Option<String>) -> bool {
    dispatch(LinkEvent::Relaunch { url })
}

/// Host entry point: a custom-scheme URL was opened while running.
///
/// # FFI contract
/// - Sync call, non-blocking forward-or-drop.
/// - Never panics; returns whether the link reached a subscriber.
#[flutter_rust_bridge::frb(sync)]
pub fn on_open_url(url: String) -> bool {
    dispatch(LinkEvent::OpenUrl { url })
}

/// Host entry point: a web-browsing continuation arrived while running.
///
/// # FFI contract
/// - Sync call, non-blocking forward-or-drop.
/// - Never panics; non-web activity types never forward.
#[flutter_rust_bridge::frb(sync)]
pub fn on_web_activity(activity_type: String, webpage_url: Option<String>) -> bool {
    dispatch(LinkEvent::WebActivity {
        activity: BrowsingActivity {
            activity_type,
            webpage_url,
        },
    })
}

/// Event-channel `onCancel`: stops live-link delivery.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Idempotent; never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn cancel_link_stream() {
    bridge().unsubscribe();
}

fn dispatch(event: LinkEvent) -> bool {
    matches!(bridge().dispatch(&event), DeliveryOutcome::Forwarded)
}
