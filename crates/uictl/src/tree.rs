//! Control tree: ownership, allocation and the dispatch surface.
//!
//! The tree owns every control in a generational arena. Parents own their
//! children by id; each child keeps a non-owning back-reference to its
//! parent. All structural changes go through the tree so both sides of a
//! link always change together.

use crate::control::{Backend, Capabilities, Control, ControlHeader, NativeHandle};
use crate::error::{ControlError, ControlResult, ImplBug, UserBug};
use crate::signature::WidgetKind;
use std::any::Any;
use std::fmt;
use tracing::{debug, error, trace, warn};
use uictl_core::alloc::{IndexSlot, SlotArena};
use uictl_core::config::{BugPolicy, Config};
use uictl_core::profiling::{profile_function, profile_scope};

/// Generational id of a control in a [`ControlTree`].
///
/// Ids are `Copy` and never alias: once a control is destroyed its id stops
/// resolving, even if the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(IndexSlot);

impl ControlId {
    pub fn slot(self) -> IndexSlot {
        self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.0.index(), self.0.generation())
    }
}

struct Node<B: Backend> {
    control: Box<dyn Control<B>>,
    parent: Option<ControlId>,
    children: Vec<ControlId>,
}

impl<B: Backend> Node<B> {
    fn has(&self, capability: Capabilities) -> bool {
        self.control.capabilities().contains(capability)
    }
}

/// Arena of controls for backend `B`, plus the backend context.
pub struct ControlTree<B: Backend> {
    nodes: SlotArena<Node<B>>,
    context: B::Context,
    bug_policy: BugPolicy,
}

impl<B: Backend> ControlTree<B> {
    pub fn new(context: B::Context) -> Self {
        Self::with_config(context, &Config::default())
    }

    pub fn with_config(context: B::Context, config: &Config) -> Self {
        Self {
            nodes: SlotArena::new(),
            context,
            bug_policy: config.bug_policy,
        }
    }

    pub fn context(&self) -> &B::Context {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut B::Context {
        &mut self.context
    }

    pub fn bug_policy(&self) -> BugPolicy {
        self.bug_policy
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.nodes.contains(id.0)
    }

    /// Ids of all live controls.
    pub fn ids(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.nodes.iter().map(|(slot, _)| ControlId(slot))
    }

    // -- allocation ------------------------------------------------------

    /// Take ownership of a freshly built control.
    ///
    /// The control starts unparented. Its header must carry the class
    /// signature and this backend's OS tag.
    pub fn alloc<C: Control<B>>(&mut self, control: C) -> ControlResult<ControlId> {
        let header = control.header();
        if !header.is_valid() {
            return Err(self.report(ImplBug::BadSignature {
                found: header.signature(),
                type_name: header.type_name().to_string(),
            }));
        }
        if header.os() != B::OS {
            return Err(self.report(ImplBug::ForeignBackend {
                expected: B::OS,
                found: header.os(),
            }));
        }

        let kind = header.kind();
        let id = ControlId(self.nodes.insert(Node {
            control: Box::new(control),
            parent: None,
            children: Vec::new(),
        }));
        debug!(control = %id, %kind, "allocated control");
        Ok(id)
    }

    /// Release a control without running its `destroy` operation.
    ///
    /// The control must be unparented and childless. Backend resources are
    /// not touched; use [`ControlTree::destroy`] for a full teardown.
    pub fn free(&mut self, id: ControlId) -> ControlResult<()> {
        let Some(node) = self.nodes.get(id.0) else {
            return Err(self.report(UserBug::StaleControl { control: id }));
        };
        if let Some(parent) = node.parent {
            return Err(self.report(UserBug::DestroyWhileParented {
                control: id,
                parent,
            }));
        }
        if !node.children.is_empty() {
            let children = node.children.len();
            return Err(self.report(UserBug::FreeWithChildren {
                control: id,
                children,
            }));
        }

        self.nodes.remove(id.0);
        debug!(control = %id, "freed control");
        Ok(())
    }

    // -- typed access ----------------------------------------------------

    pub fn header(&self, id: ControlId) -> Option<&ControlHeader> {
        self.nodes.get(id.0).map(|node| node.control.header())
    }

    pub fn kind(&self, id: ControlId) -> Option<WidgetKind> {
        self.header(id).map(ControlHeader::kind)
    }

    /// Installed operations, empty for stale ids.
    pub fn capabilities(&self, id: ControlId) -> Capabilities {
        self.nodes
            .get(id.0)
            .map(|node| node.control.capabilities())
            .unwrap_or(Capabilities::empty())
    }

    /// Fail with a user bug unless `id` is a live control of `expected` kind.
    pub fn expect_kind(&self, id: ControlId, expected: WidgetKind) -> ControlResult<()> {
        match self.kind(id) {
            Some(actual) if actual == expected => Ok(()),
            Some(actual) => Err(self.report(UserBug::WrongKind {
                control: id,
                expected,
                actual,
            })),
            None => Err(self.report(UserBug::StaleControl { control: id })),
        }
    }

    /// Borrow the concrete control type behind `id`.
    pub fn get<T: Control<B>>(&self, id: ControlId) -> Option<&T> {
        let control: &dyn Control<B> = &*self.nodes.get(id.0)?.control;
        let any: &dyn Any = control;
        any.downcast_ref::<T>()
    }

    pub fn get_mut<T: Control<B>>(&mut self, id: ControlId) -> Option<&mut T> {
        let control: &mut dyn Control<B> = &mut *self.nodes.get_mut(id.0)?.control;
        let any: &mut dyn Any = control;
        any.downcast_mut::<T>()
    }

    /// Children of `id` in attach order. Empty for stale ids.
    pub fn children(&self, id: ControlId) -> &[ControlId] {
        self.nodes
            .get(id.0)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    // -- dispatch --------------------------------------------------------

    pub fn handle(&self, id: ControlId) -> NativeHandle {
        self.query(id, Capabilities::HANDLE, "handle", NativeHandle::NULL, |c, ctx| {
            c.handle(ctx)
        })
    }

    /// Current parent, `None` when detached or when parenting is not installed.
    pub fn parent(&self, id: ControlId) -> Option<ControlId> {
        let node = self.lookup(id, "parent")?;
        if node.has(Capabilities::PARENT) {
            node.parent
        } else {
            None
        }
    }

    /// Attach `id` to `parent`, or detach it with `None`.
    ///
    /// The change is validated by [`ControlTree::verify_set_parent`] first;
    /// on error nothing changes. A control without the `PARENT` capability
    /// ignores the call.
    pub fn set_parent(&mut self, id: ControlId, parent: Option<ControlId>) -> ControlResult<()> {
        profile_function!();
        let Some(node) = self.nodes.get(id.0) else {
            return Err(self.report(UserBug::StaleControl { control: id }));
        };
        if !node.has(Capabilities::PARENT) {
            trace!(control = %id, "set_parent not installed");
            return Ok(());
        }

        self.verify_set_parent(id, parent)?;

        let native_parent = match parent {
            Some(new_parent) => {
                self.link(id, new_parent);
                Some(self.handle(new_parent))
            }
            None => {
                self.unlink(id)?;
                None
            }
        };

        if let Some(node) = self.nodes.get_mut(id.0) {
            node.control.set_parent(&self.context, native_parent);
        }
        trace!(control = %id, parent = ?parent, "parent changed");
        Ok(())
    }

    pub fn toplevel(&self, id: ControlId) -> bool {
        self.query(id, Capabilities::TOPLEVEL, "toplevel", false, |c, ctx| {
            c.toplevel(ctx)
        })
    }

    pub fn visible(&self, id: ControlId) -> bool {
        self.query(id, Capabilities::VISIBLE, "visible", false, |c, ctx| {
            c.visible(ctx)
        })
    }

    pub fn show(&mut self, id: ControlId) {
        self.apply(id, Capabilities::SHOW, "show", |c, ctx| c.show(ctx));
    }

    pub fn hide(&mut self, id: ControlId) {
        self.apply(id, Capabilities::HIDE, "hide", |c, ctx| c.hide(ctx));
    }

    pub fn enabled(&self, id: ControlId) -> bool {
        self.query(id, Capabilities::ENABLED, "enabled", false, |c, ctx| {
            c.enabled(ctx)
        })
    }

    pub fn enable(&mut self, id: ControlId) {
        self.apply(id, Capabilities::ENABLE, "enable", |c, ctx| c.enable(ctx));
    }

    pub fn disable(&mut self, id: ControlId) {
        self.apply(id, Capabilities::DISABLE, "disable", |c, ctx| c.disable(ctx));
    }

    /// Destroy `id` and everything below it.
    ///
    /// The control must be unparented. Descendants are torn down first; each
    /// control's `destroy` operation runs exactly once and its slot is
    /// released right after. Without the `DESTROY` capability this is a
    /// no-op.
    pub fn destroy(&mut self, id: ControlId) -> ControlResult<()> {
        profile_function!();
        let Some(node) = self.nodes.get(id.0) else {
            return Err(self.report(UserBug::StaleControl { control: id }));
        };
        if !node.has(Capabilities::DESTROY) {
            trace!(control = %id, "destroy not installed");
            return Ok(());
        }
        if let Some(parent) = node.parent {
            return Err(self.report(UserBug::DestroyWhileParented {
                control: id,
                parent,
            }));
        }

        // Pre-order walk, torn down in reverse so children go before parents.
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            order.push(current);
            stack.extend(self.children(current).iter().copied());
        }

        profile_scope!("teardown");
        for current in order.into_iter().rev() {
            let Some(mut node) = self.nodes.remove(current.0) else {
                continue;
            };
            if node.has(Capabilities::DESTROY) {
                node.control.destroy(&self.context);
            }
            debug!(control = %current, kind = %node.control.header().kind(), "destroyed control");
        }
        Ok(())
    }

    // -- internals -------------------------------------------------------

    /// Ancestors of `id`, nearest first, following stored links.
    pub fn ancestors(&self, id: ControlId) -> impl Iterator<Item = ControlId> + '_ {
        std::iter::successors(self.nodes.get(id.0).and_then(|n| n.parent), |current| {
            self.nodes.get(current.0).and_then(|n| n.parent)
        })
    }

    fn lookup(&self, id: ControlId, op: &'static str) -> Option<&Node<B>> {
        let node = self.nodes.get(id.0);
        if node.is_none() {
            warn!(control = %id, op, "operation on a destroyed control");
        }
        node
    }

    fn query<R>(
        &self,
        id: ControlId,
        capability: Capabilities,
        op: &'static str,
        default: R,
        f: impl FnOnce(&dyn Control<B>, &B::Context) -> R,
    ) -> R {
        match self.lookup(id, op) {
            Some(node) if node.has(capability) => f(&*node.control, &self.context),
            _ => default,
        }
    }

    fn apply(
        &mut self,
        id: ControlId,
        capability: Capabilities,
        op: &'static str,
        f: impl FnOnce(&mut dyn Control<B>, &B::Context),
    ) {
        match self.nodes.get_mut(id.0) {
            Some(node) if node.has(capability) => f(&mut *node.control, &self.context),
            Some(_) => {}
            None => warn!(control = %id, op, "operation on a destroyed control"),
        }
    }

    fn link(&mut self, child: ControlId, parent: ControlId) {
        if let Some(node) = self.nodes.get_mut(child.0) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(child);
        }
    }

    fn unlink(&mut self, child: ControlId) -> ControlResult<()> {
        let Some(parent) = self.nodes.get_mut(child.0).and_then(|n| n.parent.take()) else {
            return Err(self.report(ImplBug::DoubleUnparent { control: child }));
        };
        let removed = self.nodes.get_mut(parent.0).and_then(|node| {
            let pos = node.children.iter().position(|c| *c == child)?;
            Some(node.children.remove(pos))
        });
        if removed.is_none() {
            return Err(self.report(ImplBug::BrokenLink {
                control: child,
                parent,
            }));
        }
        Ok(())
    }

    /// Log a detected bug and apply the configured [`BugPolicy`].
    ///
    /// Backends route their own misuse checks through here so every bug is
    /// reported the same way.
    #[track_caller]
    pub fn report(&self, bug: impl Into<ControlError>) -> ControlError {
        let bug = bug.into();
        error!("{}", bug);
        if self.bug_policy == BugPolicy::Abort {
            panic!("{}", bug);
        }
        bug
    }
}
