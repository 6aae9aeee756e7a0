//! End-to-end tree scenarios: parenting, teardown and ancestor-aware state.

use uictl::{ControlId, ControlTree, NativeHandle, WidgetKind};
use uictl_test_utils::{MockBackend, MockContext, MockControl, MockOp};

fn tree() -> ControlTree<MockBackend> {
    ControlTree::new(MockContext::new())
}

#[test]
fn test_window_and_button() {
    let mut tree = tree();
    let window = tree.alloc(MockControl::window(tree.context(), "w")).unwrap();
    let button = tree.alloc(MockControl::button(tree.context(), "b")).unwrap();
    assert!(tree.toplevel(window));
    assert!(!tree.toplevel(button));

    tree.set_parent(button, Some(window)).unwrap();
    assert_eq!(tree.parent(button), Some(window));

    let err = tree.set_parent(window, Some(button)).unwrap_err();
    assert!(err.is_user_bug());
    assert_eq!(tree.parent(window), None);
}

#[test]
fn test_destroy_after_detach() {
    let mut tree = tree();
    let window = tree.alloc(MockControl::window(tree.context(), "w")).unwrap();
    let button = tree.alloc(MockControl::button(tree.context(), "b")).unwrap();
    tree.set_parent(button, Some(window)).unwrap();

    assert!(tree.destroy(button).unwrap_err().is_user_bug());
    assert!(tree.contains(button));

    tree.set_parent(button, None).unwrap();
    tree.destroy(button).unwrap();
    assert!(!tree.contains(button));
    assert!(tree.children(window).is_empty());
    assert_eq!(tree.context().destroyed(), vec!["b".to_string()]);
}

#[test]
fn test_disabled_group_disables_descendants() {
    let mut tree = tree();
    let root = tree.alloc(MockControl::window(tree.context(), "root")).unwrap();
    let group = tree.alloc(MockControl::group(tree.context(), "group")).unwrap();
    let button = tree.alloc(MockControl::button(tree.context(), "button")).unwrap();
    tree.set_parent(group, Some(root)).unwrap();
    tree.set_parent(button, Some(group)).unwrap();

    tree.disable(group);

    assert!(tree.enabled(button));
    assert!(!tree.enabled_to_user(button));
    assert!(!tree.enabled_to_user(group));
    assert!(tree.enabled_to_user(root));

    tree.enable(group);
    assert!(tree.enabled_to_user(button));
}

/// Root window followed by `depth` nested groups.
fn chain(tree: &mut ControlTree<MockBackend>, depth: usize) -> Vec<ControlId> {
    let root = tree.alloc(MockControl::window(tree.context(), "root")).unwrap();
    let mut ids = vec![root];
    for level in 0..depth {
        let group = tree
            .alloc(MockControl::group(tree.context(), format!("level{level}")))
            .unwrap();
        tree.set_parent(group, ids.last().copied()).unwrap();
        ids.push(group);
    }
    ids
}

#[test]
fn test_enabled_to_user_over_all_chains() {
    for depth in 0..5 {
        for disabled in 0u32..(1 << (depth + 1)) {
            let mut tree = tree();
            let ids = chain(&mut tree, depth);
            for (bit, id) in ids.iter().enumerate() {
                if disabled & (1 << bit) != 0 {
                    tree.disable(*id);
                }
            }

            let leaf = *ids.last().unwrap();
            assert_eq!(
                tree.enabled_to_user(leaf),
                disabled == 0,
                "depth {depth}, disabled mask {disabled:#b}"
            );
        }
    }
}

#[test]
fn test_enabled_to_user_after_detach() {
    let mut tree = tree();
    let window = tree.alloc(MockControl::window(tree.context(), "w")).unwrap();
    let button = tree.alloc(MockControl::button(tree.context(), "b")).unwrap();
    tree.set_parent(button, Some(window)).unwrap();
    tree.disable(window);

    assert!(!tree.enabled_to_user(button));
    // The window stays disabled, but the button is its own root once detached.
    tree.set_parent(button, None).unwrap();
    assert!(tree.enabled_to_user(button));
}

#[test]
fn test_subtree_destroy_releases_each_handle_once() {
    let mut tree = tree();
    let window = tree.alloc(MockControl::window(tree.context(), "window")).unwrap();
    let group = tree.alloc(MockControl::group(tree.context(), "group")).unwrap();
    let tab = tree
        .alloc(MockControl::new(tree.context(), WidgetKind::Tab, "tab"))
        .unwrap();
    tree.set_parent(group, Some(window)).unwrap();
    tree.set_parent(tab, Some(window)).unwrap();

    let mut leaves = Vec::new();
    for (i, parent) in [group, group, tab].into_iter().enumerate() {
        let button = tree
            .alloc(MockControl::button(tree.context(), format!("button{i}")))
            .unwrap();
        tree.set_parent(button, Some(parent)).unwrap();
        leaves.push(button);
    }

    let handles: Vec<NativeHandle> = tree
        .ids()
        .map(|id| tree.get::<MockControl>(id).unwrap().raw_handle())
        .collect();
    assert_eq!(handles.len(), 6);
    assert_eq!(tree.context().live_handles(), 6);

    tree.destroy(window).unwrap();

    assert!(tree.is_empty());
    assert_eq!(tree.context().count(MockOp::Destroy), 6);
    assert_eq!(tree.context().live_handles(), 0);
    for handle in handles {
        assert_eq!(tree.context().release_count(handle), 1, "handle {handle}");
    }

    // Children are torn down before their parents.
    let destroyed = tree.context().destroyed();
    let position = |name: &str| destroyed.iter().position(|n| n == name).unwrap();
    assert!(position("button0") < position("group"));
    assert!(position("button2") < position("tab"));
    assert!(position("group") < position("window"));
    assert_eq!(destroyed.last().map(String::as_str), Some("window"));

    for leaf in leaves {
        assert!(!tree.contains(leaf));
    }
}

#[test]
fn test_native_parent_hook() {
    let mut tree = tree();
    let window = MockControl::window(tree.context(), "w");
    let window_handle = window.raw_handle();
    let window = tree.alloc(window).unwrap();
    let button = tree.alloc(MockControl::button(tree.context(), "b")).unwrap();

    tree.set_parent(button, Some(window)).unwrap();
    assert_eq!(
        tree.get::<MockControl>(button).unwrap().native_parent(),
        Some(window_handle)
    );
    assert_eq!(tree.context().count(MockOp::SetParent(Some(window_handle))), 1);

    tree.set_parent(button, None).unwrap();
    assert_eq!(tree.get::<MockControl>(button).unwrap().native_parent(), None);
    assert_eq!(tree.context().count(MockOp::SetParent(None)), 1);
}

#[test]
fn test_slot_reuse_does_not_revive_ids() {
    let mut tree = tree();
    let first = tree.alloc(MockControl::button(tree.context(), "first")).unwrap();
    tree.destroy(first).unwrap();
    let second = tree.alloc(MockControl::button(tree.context(), "second")).unwrap();

    assert_ne!(first, second);
    assert!(!tree.contains(first));
    assert_eq!(tree.get::<MockControl>(second).map(|c| c.name()), Some("second"));
    assert!(tree.get::<MockControl>(first).is_none());
}
