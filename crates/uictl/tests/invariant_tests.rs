//! Parent/child invariant tests.
//!
//! Every rejected request must leave the tree exactly as it was.

use uictl::{
    BugPolicy, Config, ControlError, ControlHeader, ControlTree, ImplBug, OsSignature, UserBug,
    WidgetKind,
};
use uictl_test_utils::{MockBackend, MockContext, MockControl, MockOp};

fn tree() -> ControlTree<MockBackend> {
    ControlTree::new(MockContext::new())
}

#[test]
fn test_toplevel_cannot_be_parented() {
    let mut tree = tree();
    let outer = tree.alloc(MockControl::window(tree.context(), "outer")).unwrap();
    let inner = tree.alloc(MockControl::window(tree.context(), "inner")).unwrap();

    let err = tree.set_parent(inner, Some(outer)).unwrap_err();
    assert_eq!(
        err,
        ControlError::UserBug(UserBug::ToplevelParent { control: inner })
    );
    assert_eq!(tree.parent(inner), None);
    assert!(tree.children(outer).is_empty());
}

#[test]
fn test_reparent_requires_detach() {
    let mut tree = tree();
    let first = tree.alloc(MockControl::window(tree.context(), "first")).unwrap();
    let second = tree.alloc(MockControl::window(tree.context(), "second")).unwrap();
    let button = tree.alloc(MockControl::button(tree.context(), "b")).unwrap();

    tree.set_parent(button, Some(first)).unwrap();
    let err = tree.set_parent(button, Some(second)).unwrap_err();
    assert_eq!(
        err,
        ControlError::UserBug(UserBug::AlreadyParented {
            control: button,
            current: first,
            requested: second,
        })
    );

    assert_eq!(tree.parent(button), Some(first));
    assert_eq!(tree.children(first), &[button]);
    assert!(tree.children(second).is_empty());

    tree.set_parent(button, None).unwrap();
    tree.set_parent(button, Some(second)).unwrap();
    assert_eq!(tree.parent(button), Some(second));
    assert!(tree.children(first).is_empty());
}

#[test]
fn test_double_unparent_is_impl_bug() {
    let mut tree = tree();
    let button = tree.alloc(MockControl::button(tree.context(), "b")).unwrap();

    let err = tree.set_parent(button, None).unwrap_err();
    assert!(err.is_impl_bug());
    assert_eq!(
        err,
        ControlError::ImplBug(ImplBug::DoubleUnparent { control: button })
    );
    assert_eq!(tree.context().count(MockOp::SetParent(None)), 0);
}

#[test]
fn test_verify_without_committing() {
    let mut tree = tree();
    let window = tree.alloc(MockControl::window(tree.context(), "w")).unwrap();
    let button = tree.alloc(MockControl::button(tree.context(), "b")).unwrap();

    assert!(tree.verify_set_parent(button, Some(window)).is_ok());
    assert_eq!(tree.parent(button), None);
    assert!(tree.verify_set_parent(button, None).unwrap_err().is_impl_bug());
}

#[test]
fn test_cycles_are_rejected() {
    let mut tree = tree();
    let outer = tree.alloc(MockControl::group(tree.context(), "outer")).unwrap();
    let inner = tree.alloc(MockControl::group(tree.context(), "inner")).unwrap();

    tree.set_parent(inner, Some(outer)).unwrap();
    let err = tree.set_parent(outer, Some(inner)).unwrap_err();
    assert_eq!(
        err,
        ControlError::UserBug(UserBug::ParentCycle {
            control: outer,
            requested: inner,
        })
    );

    let err = tree.set_parent(outer, Some(outer)).unwrap_err();
    assert!(matches!(err, ControlError::UserBug(UserBug::ParentCycle { .. })));
    assert_eq!(tree.parent(outer), None);
}

#[test]
fn test_parent_must_be_container() {
    let mut tree = tree();
    let label = tree
        .alloc(MockControl::new(tree.context(), WidgetKind::Label, "l"))
        .unwrap();
    let button = tree.alloc(MockControl::button(tree.context(), "b")).unwrap();

    let err = tree.set_parent(button, Some(label)).unwrap_err();
    assert_eq!(
        err,
        ControlError::UserBug(UserBug::NotAContainer {
            control: button,
            requested: label,
            kind: WidgetKind::Label,
        })
    );
}

#[test]
fn test_destroy_while_parented_keeps_everything() {
    let mut tree = tree();
    let window = tree.alloc(MockControl::window(tree.context(), "w")).unwrap();
    let button = tree.alloc(MockControl::button(tree.context(), "b")).unwrap();
    tree.set_parent(button, Some(window)).unwrap();

    let err = tree.destroy(button).unwrap_err();
    assert_eq!(
        err,
        ControlError::UserBug(UserBug::DestroyWhileParented {
            control: button,
            parent: window,
        })
    );
    assert!(tree.contains(button));
    assert_eq!(tree.context().count(MockOp::Destroy), 0);

    let err = tree.free(button).unwrap_err();
    assert!(err.is_user_bug());
    assert!(tree.contains(button));
}

#[test]
fn test_free_releases_slot_only() {
    let mut tree = tree();
    let button = tree.alloc(MockControl::button(tree.context(), "b")).unwrap();

    tree.free(button).unwrap();
    assert!(!tree.contains(button));
    assert_eq!(tree.context().count(MockOp::Destroy), 0);

    let err = tree.free(button).unwrap_err();
    assert_eq!(
        err,
        ControlError::UserBug(UserBug::StaleControl { control: button })
    );
}

#[test]
fn test_free_with_children_is_rejected() {
    let mut tree = tree();
    let window = tree.alloc(MockControl::window(tree.context(), "w")).unwrap();
    let button = tree.alloc(MockControl::button(tree.context(), "b")).unwrap();
    tree.set_parent(button, Some(window)).unwrap();

    let err = tree.free(window).unwrap_err();
    assert_eq!(
        err,
        ControlError::UserBug(UserBug::FreeWithChildren {
            control: window,
            children: 1,
        })
    );
    assert!(tree.contains(window));
}

#[test]
fn test_bad_signature_is_rejected() {
    let mut tree = tree();
    let header = ControlHeader::alloc(OsSignature::Unix, WidgetKind::Button, "uiButton")
        .with_raw_signature(0xdeadbeef);
    let control = MockControl::button(tree.context(), "corrupt").with_header(header);

    let err = tree.alloc(control).unwrap_err();
    assert!(matches!(
        err,
        ControlError::ImplBug(ImplBug::BadSignature { found: 0xdeadbeef, .. })
    ));
    assert!(tree.is_empty());
}

#[test]
fn test_foreign_backend_is_rejected() {
    let mut tree = tree();
    let header = ControlHeader::alloc(OsSignature::Windows, WidgetKind::Button, "uiButton");
    let control = MockControl::button(tree.context(), "foreign").with_header(header);

    let err = tree.alloc(control).unwrap_err();
    assert_eq!(
        err,
        ControlError::ImplBug(ImplBug::ForeignBackend {
            expected: OsSignature::Unix,
            found: OsSignature::Windows,
        })
    );
}

#[test]
fn test_stale_parent_is_rejected() {
    let mut tree = tree();
    let group = tree.alloc(MockControl::group(tree.context(), "g")).unwrap();
    let button = tree.alloc(MockControl::button(tree.context(), "b")).unwrap();
    tree.destroy(group).unwrap();

    let err = tree.set_parent(button, Some(group)).unwrap_err();
    assert_eq!(
        err,
        ControlError::UserBug(UserBug::StaleControl { control: group })
    );
}

#[test]
#[should_panic(expected = "You cannot give a toplevel uiControl a parent")]
fn test_abort_policy_panics() {
    let config = Config::default().with_bug_policy(BugPolicy::Abort);
    let mut tree = ControlTree::<MockBackend>::with_config(MockContext::new(), &config);
    let outer = tree.alloc(MockControl::window(tree.context(), "outer")).unwrap();
    let inner = tree.alloc(MockControl::window(tree.context(), "inner")).unwrap();

    let _ = tree.set_parent(inner, Some(outer));
}

#[test]
fn test_error_messages_carry_ids() {
    let mut tree = tree();
    let window = tree.alloc(MockControl::window(tree.context(), "w")).unwrap();
    let first = tree.alloc(MockControl::group(tree.context(), "g")).unwrap();
    let button = tree.alloc(MockControl::button(tree.context(), "b")).unwrap();
    tree.set_parent(button, Some(first)).unwrap();

    let message = tree
        .set_parent(button, Some(window))
        .unwrap_err()
        .to_string();
    assert!(message.contains(&button.to_string()));
    assert!(message.contains(&first.to_string()));
    assert!(message.contains(&window.to_string()));
}
