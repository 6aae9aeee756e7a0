//! Dispatch tests.
//!
//! Installed operations are forwarded verbatim; missing ones return their
//! documented default without reaching the backend.

use uictl::{Capabilities, ControlTree, NativeHandle, WidgetKind};
use uictl_test_utils::{MockBackend, MockContext, MockControl, MockOp};

fn tree() -> ControlTree<MockBackend> {
    ControlTree::new(MockContext::new())
}

#[test]
fn test_installed_operations_are_forwarded() {
    let mut tree = tree();
    let button = MockControl::button(tree.context(), "ok");
    let raw = button.raw_handle();
    let button = tree.alloc(button).unwrap();

    assert_eq!(tree.handle(button), raw);
    assert!(tree.visible(button));
    assert!(tree.enabled(button));
    assert!(!tree.toplevel(button));

    tree.hide(button);
    assert!(!tree.visible(button));
    tree.show(button);
    assert!(tree.visible(button));

    tree.disable(button);
    assert!(!tree.enabled(button));
    tree.enable(button);
    assert!(tree.enabled(button));

    let ctx = tree.context();
    assert_eq!(ctx.count(MockOp::Show), 1);
    assert_eq!(ctx.count(MockOp::Hide), 1);
    assert_eq!(ctx.count(MockOp::Enable), 1);
    assert_eq!(ctx.count(MockOp::Disable), 1);
}

#[test]
fn test_missing_operations_return_defaults_without_side_effects() {
    let mut tree = tree();
    let window = MockControl::window(tree.context(), "bare")
        .with_capabilities(Capabilities::empty());
    let window = tree.alloc(window).unwrap();
    let group = tree.alloc(MockControl::group(tree.context(), "g")).unwrap();
    tree.context().clear_calls();

    assert_eq!(tree.handle(window), NativeHandle::NULL);
    assert!(!tree.toplevel(window));
    assert!(!tree.visible(window));
    assert!(!tree.enabled(window));
    assert_eq!(tree.parent(window), None);

    tree.show(window);
    tree.hide(window);
    tree.enable(window);
    tree.disable(window);

    // Parenting is not installed: accepted and ignored.
    assert!(tree.set_parent(window, Some(group)).is_ok());
    assert_eq!(tree.parent(window), None);
    assert!(tree.children(group).is_empty());

    // Destroy is not installed: the control stays alive.
    assert!(tree.destroy(window).is_ok());
    assert!(tree.contains(window));

    assert!(tree.context().calls().is_empty());
}

#[test]
fn test_partial_capabilities() {
    let mut tree = tree();
    let label = MockControl::new(tree.context(), WidgetKind::Label, "label")
        .without(Capabilities::ENABLE | Capabilities::DISABLE);
    let label = tree.alloc(label).unwrap();

    tree.disable(label);
    assert!(tree.enabled(label));
    assert_eq!(tree.context().count(MockOp::Disable), 0);
    assert_eq!(tree.context().count(MockOp::Enabled), 1);

    assert!(tree.capabilities(label).contains(Capabilities::SHOW));
    assert!(!tree.capabilities(label).contains(Capabilities::ENABLE));
}

#[test]
fn test_stale_ids_fall_back_to_defaults() {
    let mut tree = tree();
    let button = tree.alloc(MockControl::button(tree.context(), "b")).unwrap();
    tree.destroy(button).unwrap();
    tree.context().clear_calls();

    assert!(!tree.contains(button));
    assert_eq!(tree.handle(button), NativeHandle::NULL);
    assert!(!tree.enabled(button));
    assert_eq!(tree.parent(button), None);
    tree.show(button);
    assert!(tree.context().calls().is_empty());
    assert!(tree.capabilities(button).is_empty());
}

#[test]
fn test_typed_access() {
    let mut tree = tree();
    let button = tree.alloc(MockControl::button(tree.context(), "typed")).unwrap();

    assert_eq!(tree.kind(button), Some(WidgetKind::Button));
    assert_eq!(tree.get::<MockControl>(button).map(|c| c.name()), Some("typed"));
    assert!(tree.expect_kind(button, WidgetKind::Button).is_ok());

    let err = tree.expect_kind(button, WidgetKind::Label).unwrap_err();
    assert!(err.is_user_bug());
}

#[test]
fn test_after_alloc() {
    let mut tree = tree();
    let window = tree.alloc(MockControl::window(tree.context(), "w")).unwrap();

    let header = tree.header(window).unwrap();
    assert_eq!(header.signature(), uictl::CONTROL_SIGNATURE);
    assert_eq!(header.os(), uictl::OsSignature::Unix);
    assert_eq!(header.kind(), WidgetKind::Window);
    assert_eq!(tree.parent(window), None);
    assert!(tree.toplevel(window));
    assert!(!tree.visible(window));
    assert_eq!(tree.len(), 1);
}
