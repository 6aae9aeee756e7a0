//! Android controls.

use crate::Android;
use crate::bridge::{ViewBridge, ViewRef};
use crate::context::AndroidContext;
use tracing::trace;
use uictl::{Backend, Capabilities, Control, ControlHeader, NativeHandle, WidgetKind};

/// Global references owned by one control.
///
/// Each reference is released exactly once: [`NativeRefs::release_all`]
/// drains the ledger.
#[derive(Debug, Default)]
pub struct NativeRefs {
    refs: Vec<ViewRef>,
}

impl NativeRefs {
    pub fn track(&mut self, view: ViewRef) {
        if !self.refs.contains(&view) {
            self.refs.push(view);
        }
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Delete every tracked reference. Returns how many were released.
    pub fn release_all(&mut self, bridge: &dyn ViewBridge) -> usize {
        let count = self.refs.len();
        for view in self.refs.drain(..) {
            bridge.delete_global_ref(view);
        }
        count
    }
}

/// Classes checked when adopting an existing view, most derived first.
const VIEW_KINDS: [(&str, WidgetKind); 11] = [
    ("android/widget/CheckBox", WidgetKind::Checkbox),
    ("android/widget/Button", WidgetKind::Button),
    ("android/widget/EditText", WidgetKind::Entry),
    ("android/widget/SeekBar", WidgetKind::Slider),
    ("android/widget/ProgressBar", WidgetKind::ProgressBar),
    ("android/widget/Spinner", WidgetKind::Combobox),
    ("android/widget/ScrollView", WidgetKind::Scroll),
    ("android/widget/TabHost", WidgetKind::Tab),
    ("android/widget/RadioGroup", WidgetKind::RadioButtons),
    ("android/widget/LinearLayout", WidgetKind::Box),
    ("android/widget/TextView", WidgetKind::Label),
];

/// Widget kind of an existing view. Unknown views are treated as labels.
pub fn infer_kind(bridge: &dyn ViewBridge, view: ViewRef) -> WidgetKind {
    VIEW_KINDS
        .iter()
        .find(|(class, _)| bridge.is_instance_of(view, class))
        .map(|(_, kind)| *kind)
        .unwrap_or(WidgetKind::Label)
}

/// A control backed by an Android `View`.
#[derive(Debug)]
pub struct AndroidControl {
    header: ControlHeader,
    view: ViewRef,
    request_width: i16,
    request_height: i16,
    is_activity: bool,
    visible: bool,
    enabled: bool,
    attached_to: Option<ViewRef>,
    refs: NativeRefs,
}

impl AndroidControl {
    /// Wrap `local_view`. The control takes its own global reference.
    pub fn new(ctx: &AndroidContext, kind: WidgetKind, local_view: ViewRef) -> Self {
        let view = ctx.bridge().new_global_ref(local_view);
        let mut refs = NativeRefs::default();
        refs.track(view);
        Self {
            header: ControlHeader::alloc(Android::OS, kind, kind.name()),
            view,
            request_width: -1,
            request_height: -1,
            is_activity: false,
            visible: kind != WidgetKind::Window,
            enabled: true,
            attached_to: None,
            refs,
        }
    }

    pub fn view(&self) -> ViewRef {
        self.view
    }

    pub fn kind(&self) -> WidgetKind {
        self.header.kind()
    }

    pub fn is_activity(&self) -> bool {
        self.is_activity
    }

    pub(crate) fn mark_activity(&mut self) {
        self.is_activity = true;
    }

    /// Requested layout size; `-1` means wrap content.
    pub fn request_size(&self) -> (i16, i16) {
        (self.request_width, self.request_height)
    }

    pub fn set_request_size(&mut self, width: i16, height: i16) {
        self.request_width = width;
        self.request_height = height;
    }

    /// Hand another global reference to this control; it is released on destroy.
    pub fn track_ref(&mut self, view: ViewRef) {
        self.refs.track(view);
    }

    pub fn tracked_refs(&self) -> usize {
        self.refs.len()
    }

    /// View this control is attached to natively, if any.
    pub fn attached_to(&self) -> Option<ViewRef> {
        self.attached_to
    }
}

impl Control<Android> for AndroidControl {
    fn header(&self) -> &ControlHeader {
        &self.header
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }

    fn handle(&self, _ctx: &AndroidContext) -> NativeHandle {
        NativeHandle(self.view.0)
    }

    fn set_parent(&mut self, ctx: &AndroidContext, parent: Option<NativeHandle>) {
        if let Some(old) = self.attached_to.take() {
            ctx.bridge().remove_view(old, self.view);
        }
        if let Some(parent) = parent {
            let parent = ViewRef(parent.0);
            ctx.bridge().add_view(parent, self.view);
            self.attached_to = Some(parent);
        }
    }

    fn toplevel(&self, _ctx: &AndroidContext) -> bool {
        self.kind() == WidgetKind::Window || self.is_activity
    }

    fn visible(&self, _ctx: &AndroidContext) -> bool {
        self.visible
    }

    fn show(&mut self, ctx: &AndroidContext) {
        if self.kind() == WidgetKind::Window {
            ctx.bridge().open_popup(self.view);
        } else {
            ctx.bridge().set_visible(self.view, true);
        }
        self.visible = true;
    }

    fn hide(&mut self, ctx: &AndroidContext) {
        ctx.bridge().set_visible(self.view, false);
        self.visible = false;
    }

    fn enabled(&self, _ctx: &AndroidContext) -> bool {
        self.enabled
    }

    fn enable(&mut self, ctx: &AndroidContext) {
        ctx.bridge().set_enabled(self.view, true);
        self.enabled = true;
    }

    fn disable(&mut self, ctx: &AndroidContext) {
        ctx.bridge().set_enabled(self.view, false);
        self.enabled = false;
    }

    fn destroy(&mut self, ctx: &AndroidContext) {
        ctx.bridge().destroy_view(self.view);
        self.attached_to = None;
        let released = self.refs.release_all(ctx.bridge());
        trace!(view = %self.view, released, "android view destroyed");
    }
}
