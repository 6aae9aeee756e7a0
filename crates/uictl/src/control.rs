//! The control contract.
//!
//! A backend implements [`Control`] once per widget type it supports. The
//! trait stands in for a table of optional operations: [`Control::capabilities`]
//! says which entries are installed, and the dispatch layer in
//! [`ControlTree`](crate::ControlTree) never calls an operation whose bit is
//! missing. Every method also carries the documented safe default, so an
//! implementor only overrides what it really supports.

use crate::signature::{CONTROL_SIGNATURE, OsSignature, WidgetKind};
use bitflags::bitflags;
use std::any::Any;
use std::fmt;

/// Opaque, pointer-sized reference to a backend's native object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NativeHandle(pub usize);

impl NativeHandle {
    pub const NULL: NativeHandle = NativeHandle(0);

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

bitflags! {
    /// Operations a control has installed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u16 {
        const HANDLE = 1 << 0;
        /// Tree-managed `parent`/`set_parent`. The backend hook is told about
        /// every committed change.
        const PARENT = 1 << 1;
        const TOPLEVEL = 1 << 2;
        const VISIBLE = 1 << 3;
        const SHOW = 1 << 4;
        const HIDE = 1 << 5;
        const ENABLED = 1 << 6;
        const ENABLE = 1 << 7;
        const DISABLE = 1 << 8;
        const DESTROY = 1 << 9;
    }
}

/// A platform backend.
pub trait Backend: Sized + 'static {
    /// Tag stamped into every control this backend allocates.
    const OS: OsSignature;

    /// Explicit context handed to every operation, instead of ambient globals.
    type Context: 'static;
}

/// Identity header every control embeds.
///
/// The only way to obtain one is [`ControlHeader::alloc`], which stamps the
/// class-wide signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlHeader {
    signature: u32,
    os: OsSignature,
    kind: WidgetKind,
    type_name: String,
}

impl ControlHeader {
    /// Allocate a header for a control of `kind` created by backend `os`.
    pub fn alloc(os: OsSignature, kind: WidgetKind, type_name: impl Into<String>) -> Self {
        Self {
            signature: CONTROL_SIGNATURE,
            os,
            kind,
            type_name: type_name.into(),
        }
    }

    /// Header whose class signature is `signature`. Only useful for
    /// exercising the signature check.
    #[doc(hidden)]
    pub fn with_raw_signature(mut self, signature: u32) -> Self {
        self.signature = signature;
        self
    }

    pub fn signature(&self) -> u32 {
        self.signature
    }

    pub fn is_valid(&self) -> bool {
        self.signature == CONTROL_SIGNATURE
    }

    pub fn os(&self) -> OsSignature {
        self.os
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// Base trait for all controls of backend `B`.
///
/// Read-only operations take `&self`, mutating ones `&mut self`; all of them
/// receive the backend context explicitly.
pub trait Control<B: Backend>: Any {
    fn header(&self) -> &ControlHeader;

    /// Installed operations. Anything not listed falls back to its default.
    fn capabilities(&self) -> Capabilities;

    /// Native object backing this control. Valid until the control is destroyed.
    fn handle(&self, _ctx: &B::Context) -> NativeHandle {
        NativeHandle::NULL
    }

    /// Called after the tree committed a parent change. `parent` is the new
    /// parent's native handle, `None` when the control was detached.
    fn set_parent(&mut self, _ctx: &B::Context, _parent: Option<NativeHandle>) {}

    fn toplevel(&self, _ctx: &B::Context) -> bool {
        false
    }

    fn visible(&self, _ctx: &B::Context) -> bool {
        false
    }

    fn show(&mut self, _ctx: &B::Context) {}

    fn hide(&mut self, _ctx: &B::Context) {}

    fn enabled(&self, _ctx: &B::Context) -> bool {
        false
    }

    fn enable(&mut self, _ctx: &B::Context) {}

    fn disable(&mut self, _ctx: &B::Context) {}

    /// Release every backend resource owned by this control.
    ///
    /// Called at most once, before the control's slot is freed. Children have
    /// already been destroyed when this runs.
    fn destroy(&mut self, _ctx: &B::Context) {}
}
