//! Recording mock of the Android view bridge.

use parking_lot::Mutex;
use uictl::WidgetKind;
use uictl_android::{Gravity, TextAlign, ViewBridge, ViewRef, view_class};
use uictl_core::alloc::HashMap;

/// Records a bridge call for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeCall {
    NewGlobalRef { local: ViewRef, global: ViewRef },
    DeleteGlobalRef(ViewRef),
    CreateView(WidgetKind),
    SetEnabled(ViewRef, bool),
    SetVisible(ViewRef, bool),
    AddView { parent: ViewRef, child: ViewRef },
    RemoveView { parent: ViewRef, child: ViewRef },
    OpenPopup(ViewRef),
    SetContentView(ViewRef),
    SetGravity(ViewRef, Gravity),
    SetTextAlignment(ViewRef, TextAlign),
    SetAttr { view: ViewRef, name: String, value: String },
    Toast(String),
    AddActionIcon { id: String, title: String },
    DestroyView(ViewRef),
}

#[derive(Default)]
struct BridgeState {
    next_ref: usize,
    /// Class hierarchy per view, local and global refs alike
    classes: HashMap<ViewRef, Vec<&'static str>>,
    ids: HashMap<String, ViewRef>,
    layouts: HashMap<String, ViewRef>,
    strings: HashMap<String, String>,
    /// Delete count per global reference ever created
    global_refs: HashMap<ViewRef, usize>,
}

impl BridgeState {
    fn fresh(&mut self, classes: Vec<&'static str>) -> ViewRef {
        self.next_ref += 1;
        let view = ViewRef(0x7f00_0000 + self.next_ref);
        self.classes.insert(view, classes);
        view
    }
}

/// Mock implementation of [`ViewBridge`] for testing.
///
/// Views are plain numbers carrying a class hierarchy, and every global
/// reference is tracked so tests can assert that each one is deleted
/// exactly once.
#[derive(Default)]
pub struct MockViewBridge {
    calls: Mutex<Vec<BridgeCall>>,
    state: Mutex<BridgeState>,
}

impl MockViewBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a local view reference with the given class hierarchy,
    /// most derived class first.
    pub fn add_view_with_classes(&self, classes: &[&'static str]) -> ViewRef {
        self.state.lock().fresh(classes.to_vec())
    }

    /// Make `view` discoverable through `find_view_by_id`.
    pub fn register_id(&self, id: &str, view: ViewRef) {
        self.state.lock().ids.insert(id.to_string(), view);
    }

    /// Make `view` the root returned when inflating `name`.
    pub fn register_layout(&self, name: &str, view: ViewRef) {
        self.state.lock().layouts.insert(name.to_string(), view);
    }

    pub fn set_string(&self, name: &str, value: &str) {
        self.state
            .lock()
            .strings
            .insert(name.to_string(), value.to_string());
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<BridgeCall> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Count recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&BridgeCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| pred(call)).count()
    }

    /// Global references created and not deleted yet.
    pub fn live_global_refs(&self) -> usize {
        self.state
            .lock()
            .global_refs
            .values()
            .filter(|deletes| **deletes == 0)
            .count()
    }

    /// Global references deleted more than once.
    pub fn double_deletes(&self) -> usize {
        self.state
            .lock()
            .global_refs
            .values()
            .filter(|deletes| **deletes > 1)
            .count()
    }

    pub fn global_refs_created(&self) -> usize {
        self.state.lock().global_refs.len()
    }

    /// How often `view` was passed to `delete_global_ref`.
    pub fn delete_count(&self, view: ViewRef) -> usize {
        self.state
            .lock()
            .global_refs
            .get(&view)
            .copied()
            .unwrap_or(0)
    }

    fn record(&self, call: BridgeCall) {
        self.calls.lock().push(call);
    }
}

impl ViewBridge for MockViewBridge {
    fn new_global_ref(&self, view: ViewRef) -> ViewRef {
        let global = {
            let mut state = self.state.lock();
            let classes = state.classes.get(&view).cloned().unwrap_or_default();
            let global = state.fresh(classes);
            state.global_refs.insert(global, 0);
            global
        };
        self.record(BridgeCall::NewGlobalRef {
            local: view,
            global,
        });
        global
    }

    fn delete_global_ref(&self, view: ViewRef) {
        *self.state.lock().global_refs.entry(view).or_insert(0) += 1;
        self.record(BridgeCall::DeleteGlobalRef(view));
    }

    fn create_view(&self, kind: WidgetKind) -> Option<ViewRef> {
        self.record(BridgeCall::CreateView(kind));
        Some(self.add_view_with_classes(&[view_class(kind), "android/view/View"]))
    }

    fn find_view_by_id(&self, id: &str) -> Option<ViewRef> {
        self.state.lock().ids.get(id).copied()
    }

    fn inflate_layout(&self, name: &str) -> Option<ViewRef> {
        self.state.lock().layouts.get(name).copied()
    }

    fn is_instance_of(&self, view: ViewRef, class: &str) -> bool {
        self.state
            .lock()
            .classes
            .get(&view)
            .is_some_and(|classes| classes.iter().any(|c| *c == class))
    }

    fn set_enabled(&self, view: ViewRef, enabled: bool) {
        self.record(BridgeCall::SetEnabled(view, enabled));
    }

    fn set_visible(&self, view: ViewRef, visible: bool) {
        self.record(BridgeCall::SetVisible(view, visible));
    }

    fn add_view(&self, parent: ViewRef, child: ViewRef) {
        self.record(BridgeCall::AddView { parent, child });
    }

    fn remove_view(&self, parent: ViewRef, child: ViewRef) {
        self.record(BridgeCall::RemoveView { parent, child });
    }

    fn open_popup(&self, view: ViewRef) {
        self.record(BridgeCall::OpenPopup(view));
    }

    fn set_content_view(&self, view: ViewRef) {
        self.record(BridgeCall::SetContentView(view));
    }

    fn set_gravity(&self, view: ViewRef, gravity: Gravity) {
        self.record(BridgeCall::SetGravity(view, gravity));
    }

    fn set_text_alignment(&self, view: ViewRef, align: TextAlign) {
        self.record(BridgeCall::SetTextAlignment(view, align));
    }

    fn set_attr(&self, view: ViewRef, name: &str, value: &str) {
        self.record(BridgeCall::SetAttr {
            view,
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    fn show_toast(&self, text: &str) {
        self.record(BridgeCall::Toast(text.to_string()));
    }

    fn add_action_icon(&self, id: &str, title: &str) {
        self.record(BridgeCall::AddActionIcon {
            id: id.to_string(),
            title: title.to_string(),
        });
    }

    fn localized_string(&self, name: &str) -> Option<String> {
        self.state.lock().strings.get(name).cloned()
    }

    fn destroy_view(&self, view: ViewRef) {
        self.record(BridgeCall::DestroyView(view));
    }
}
