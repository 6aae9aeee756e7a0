//! Recording mock backend for the generic control tree.

use parking_lot::Mutex;
use uictl::{
    Backend, Capabilities, Control, ControlHeader, NativeHandle, OsSignature, WidgetKind,
};
use uictl_core::alloc::HashMap;

/// Backend marker for [`MockControl`].
pub struct MockBackend;

impl Backend for MockBackend {
    const OS: OsSignature = OsSignature::Unix;
    type Context = MockContext;
}

/// Operation observed by the mock backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockOp {
    Handle,
    SetParent(Option<NativeHandle>),
    Toplevel,
    Visible,
    Show,
    Hide,
    Enabled,
    Enable,
    Disable,
    Destroy,
}

/// A recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub control: String,
    pub op: MockOp,
}

/// Context for [`MockBackend`]: hands out native handles and records calls.
pub struct MockContext {
    calls: Mutex<Vec<MockCall>>,
    next_handle: Mutex<usize>,
    /// Release count per handle ever handed out
    releases: Mutex<HashMap<NativeHandle, usize>>,
}

impl Default for MockContext {
    fn default() -> Self {
        Self::new()
    }
}

impl MockContext {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_handle: Mutex::new(0x1000),
            releases: Mutex::new(HashMap::new()),
        }
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Number of calls matching `op`.
    pub fn count(&self, op: MockOp) -> usize {
        self.calls.lock().iter().filter(|call| call.op == op).count()
    }

    /// Controls whose `destroy` ran, in order.
    pub fn destroyed(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.op == MockOp::Destroy)
            .map(|call| call.control.clone())
            .collect()
    }

    /// How often `handle` was released.
    pub fn release_count(&self, handle: NativeHandle) -> usize {
        self.releases.lock().get(&handle).copied().unwrap_or(0)
    }

    /// Handles that were handed out and not released yet.
    pub fn live_handles(&self) -> usize {
        self.releases.lock().values().filter(|count| **count == 0).count()
    }

    fn record(&self, control: &str, op: MockOp) {
        self.calls.lock().push(MockCall {
            control: control.to_string(),
            op,
        });
    }

    fn acquire(&self) -> NativeHandle {
        let mut next = self.next_handle.lock();
        let handle = NativeHandle(*next);
        *next += 0x10;
        self.releases.lock().insert(handle, 0);
        handle
    }

    fn release(&self, handle: NativeHandle) {
        *self.releases.lock().entry(handle).or_insert(0) += 1;
    }
}

/// Configurable control for [`MockBackend`].
///
/// Every operation is installed by default; use
/// [`MockControl::without`] to model a backend that leaves some out.
pub struct MockControl {
    header: ControlHeader,
    capabilities: Capabilities,
    name: String,
    handle: NativeHandle,
    toplevel: bool,
    visible: bool,
    enabled: bool,
    native_parent: Option<NativeHandle>,
}

impl MockControl {
    pub fn new(ctx: &MockContext, kind: WidgetKind, name: impl Into<String>) -> Self {
        Self {
            header: ControlHeader::alloc(MockBackend::OS, kind, kind.name()),
            capabilities: Capabilities::all(),
            name: name.into(),
            handle: ctx.acquire(),
            toplevel: kind == WidgetKind::Window,
            visible: kind != WidgetKind::Window,
            enabled: true,
            native_parent: None,
        }
    }

    pub fn window(ctx: &MockContext, name: impl Into<String>) -> Self {
        Self::new(ctx, WidgetKind::Window, name)
    }

    pub fn button(ctx: &MockContext, name: impl Into<String>) -> Self {
        Self::new(ctx, WidgetKind::Button, name)
    }

    pub fn group(ctx: &MockContext, name: impl Into<String>) -> Self {
        Self::new(ctx, WidgetKind::Group, name)
    }

    /// Remove operations from the installed set.
    pub fn without(mut self, capabilities: Capabilities) -> Self {
        self.capabilities.remove(capabilities);
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Replace the header, e.g. to hand the tree a corrupt or foreign one.
    pub fn with_header(mut self, header: ControlHeader) -> Self {
        self.header = header;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_handle(&self) -> NativeHandle {
        self.handle
    }

    /// Native parent reported through the last `set_parent` hook.
    pub fn native_parent(&self) -> Option<NativeHandle> {
        self.native_parent
    }
}

impl Control<MockBackend> for MockControl {
    fn header(&self) -> &ControlHeader {
        &self.header
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn handle(&self, ctx: &MockContext) -> NativeHandle {
        ctx.record(&self.name, MockOp::Handle);
        self.handle
    }

    fn set_parent(&mut self, ctx: &MockContext, parent: Option<NativeHandle>) {
        ctx.record(&self.name, MockOp::SetParent(parent));
        self.native_parent = parent;
    }

    fn toplevel(&self, ctx: &MockContext) -> bool {
        ctx.record(&self.name, MockOp::Toplevel);
        self.toplevel
    }

    fn visible(&self, ctx: &MockContext) -> bool {
        ctx.record(&self.name, MockOp::Visible);
        self.visible
    }

    fn show(&mut self, ctx: &MockContext) {
        ctx.record(&self.name, MockOp::Show);
        self.visible = true;
    }

    fn hide(&mut self, ctx: &MockContext) {
        ctx.record(&self.name, MockOp::Hide);
        self.visible = false;
    }

    fn enabled(&self, ctx: &MockContext) -> bool {
        ctx.record(&self.name, MockOp::Enabled);
        self.enabled
    }

    fn enable(&mut self, ctx: &MockContext) {
        ctx.record(&self.name, MockOp::Enable);
        self.enabled = true;
    }

    fn disable(&mut self, ctx: &MockContext) {
        ctx.record(&self.name, MockOp::Disable);
        self.enabled = false;
    }

    fn destroy(&mut self, ctx: &MockContext) {
        ctx.record(&self.name, MockOp::Destroy);
        ctx.release(self.handle);
    }
}
