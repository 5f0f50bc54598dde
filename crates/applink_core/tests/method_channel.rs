use applink_core::{
    BrowsingActivity, DeepLinkBridge, LaunchContext, MethodCall, MethodOutcome,
    METHOD_GET_INITIAL_LINK,
};

fn initial_link_reply(bridge: &DeepLinkBridge) -> Option<String> {
    match bridge.handle_method_call(&MethodCall::get_initial_link()) {
        MethodOutcome::InitialLink(link) => link.map(|l| l.into_string()),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn custom_scheme_launch_is_served_back() {
    let bridge = DeepLinkBridge::new();
    bridge.record_launch(&LaunchContext::with_url("myapp://product/42"));

    assert_eq!(
        initial_link_reply(&bridge).as_deref(),
        Some("myapp://product/42")
    );
}

#[test]
fn universal_link_launch_is_served_back() {
    let bridge = DeepLinkBridge::new();
    bridge.record_launch(&LaunchContext::with_activity(BrowsingActivity::browsing_web(
        "https://example.com/product/42",
    )));

    assert_eq!(
        initial_link_reply(&bridge).as_deref(),
        Some("https://example.com/product/42")
    );
}

#[test]
fn linkless_launch_is_served_as_empty() {
    let bridge = DeepLinkBridge::new();
    bridge.record_launch(&LaunchContext::empty());

    assert_eq!(initial_link_reply(&bridge), None);
}

#[test]
fn query_before_launch_capture_is_empty() {
    let bridge = DeepLinkBridge::new();
    assert_eq!(initial_link_reply(&bridge), None);
}

#[test]
fn unknown_request_is_rejected_not_answered() {
    let bridge = DeepLinkBridge::new();
    bridge.record_launch(&LaunchContext::with_url("myapp://product/42"));

    let outcome = bridge.handle_method_call(&MethodCall::new("doSomethingElse"));
    assert_eq!(
        outcome,
        MethodOutcome::NotImplemented {
            method: "doSomethingElse".to_string()
        }
    );
}

#[test]
fn recognized_method_name_is_part_of_the_contract() {
    assert_eq!(METHOD_GET_INITIAL_LINK, "getInitialLink");
}
