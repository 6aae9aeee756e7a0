//! Android-specific operations on a control tree.

use crate::Android;
use crate::bridge::{Gravity, TextAlign, ViewRef};
use crate::control::{AndroidControl, infer_kind};
use crate::error::{AndroidError, AndroidResult};
use tracing::{debug, info};
use uictl::{ControlId, ControlTree, UserBug, WidgetKind};

/// Extension points of the Android backend.
pub trait AndroidTree {
    /// Create a fresh view of `kind` and wrap it in a control.
    fn new_control(&mut self, kind: WidgetKind) -> AndroidResult<ControlId>;

    fn new_scroll(&mut self) -> AndroidResult<ControlId> {
        self.new_control(WidgetKind::Scroll)
    }

    /// Replace the single child of a scroll control. `None` clears it.
    fn scroll_set_child(
        &mut self,
        scroll: ControlId,
        child: Option<ControlId>,
    ) -> AndroidResult<()>;

    /// Wrap an existing view, inferring the widget kind from its class.
    fn control_from_view(&mut self, view: ViewRef) -> AndroidResult<ControlId>;

    /// Wrap the view with resource id `id` (`R.id.*`).
    fn control_from_id(&mut self, id: &str) -> AndroidResult<ControlId>;

    /// Inflate the layout `name` (`R.layout.*`) and wrap its root view.
    fn expand_control(&mut self, name: &str) -> AndroidResult<ControlId>;

    /// Make `control` the activity's content view. It becomes toplevel.
    fn set_content(&mut self, control: ControlId) -> AndroidResult<()>;

    /// Center the control within its parent.
    fn center(&mut self, control: ControlId) -> AndroidResult<()>;

    /// Forward an attribute to the view by name.
    fn set_attr(&mut self, control: ControlId, name: &str, value: &str) -> AndroidResult<()>;

    fn label_alignment(&mut self, label: ControlId, align: TextAlign) -> AndroidResult<()>;

    /// Child of a box at `index`, in attach order.
    fn box_child(&self, container: ControlId, index: usize) -> AndroidResult<Option<ControlId>>;

    /// The view behind `control`.
    fn view_of(&self, control: ControlId) -> AndroidResult<ViewRef>;
}

impl AndroidTree for ControlTree<Android> {
    fn new_control(&mut self, kind: WidgetKind) -> AndroidResult<ControlId> {
        let local = self
            .context()
            .bridge()
            .create_view(kind)
            .ok_or(AndroidError::ViewCreation { kind })?;
        let control = AndroidControl::new(self.context(), kind, local);
        Ok(self.alloc(control)?)
    }

    fn scroll_set_child(
        &mut self,
        scroll: ControlId,
        child: Option<ControlId>,
    ) -> AndroidResult<()> {
        self.expect_kind(scroll, WidgetKind::Scroll)?;
        if let Some(child) = child {
            if self.children(scroll) == [child] {
                return Ok(());
            }
            // Validate before the current child is detached.
            self.verify_set_parent(child, Some(scroll))?;
        }
        let previous = self.children(scroll).to_vec();
        for old in previous {
            self.set_parent(old, None)?;
        }
        if let Some(child) = child {
            self.set_parent(child, Some(scroll))?;
        }
        Ok(())
    }

    fn control_from_view(&mut self, view: ViewRef) -> AndroidResult<ControlId> {
        let kind = infer_kind(self.context().bridge(), view);
        let control = AndroidControl::new(self.context(), kind, view);
        let id = self.alloc(control)?;
        debug!(%view, %kind, control = %id, "adopted existing view");
        Ok(id)
    }

    fn control_from_id(&mut self, id: &str) -> AndroidResult<ControlId> {
        let view = self
            .context()
            .bridge()
            .find_view_by_id(id)
            .ok_or_else(|| AndroidError::ViewNotFound { id: id.to_string() })?;
        self.control_from_view(view)
    }

    fn expand_control(&mut self, name: &str) -> AndroidResult<ControlId> {
        let view = self
            .context()
            .bridge()
            .inflate_layout(name)
            .ok_or_else(|| AndroidError::LayoutNotFound {
                name: name.to_string(),
            })?;
        self.control_from_view(view)
    }

    fn set_content(&mut self, control: ControlId) -> AndroidResult<()> {
        let view = self.view_of(control)?;
        if let Some(parent) = self.parent(control) {
            return Err(self
                .report(UserBug::ContentWhileParented { control, parent })
                .into());
        }
        self.context().bridge().set_content_view(view);
        if let Some(android) = self.get_mut::<AndroidControl>(control) {
            android.mark_activity();
        }
        info!(control = %control, %view, "activity content set");
        Ok(())
    }

    fn center(&mut self, control: ControlId) -> AndroidResult<()> {
        let view = self.view_of(control)?;
        self.context().bridge().set_gravity(view, Gravity::Center);
        Ok(())
    }

    fn set_attr(&mut self, control: ControlId, name: &str, value: &str) -> AndroidResult<()> {
        let view = self.view_of(control)?;
        self.context().bridge().set_attr(view, name, value);
        Ok(())
    }

    fn label_alignment(&mut self, label: ControlId, align: TextAlign) -> AndroidResult<()> {
        self.expect_kind(label, WidgetKind::Label)?;
        let view = self.view_of(label)?;
        self.context().bridge().set_text_alignment(view, align);
        Ok(())
    }

    fn box_child(&self, container: ControlId, index: usize) -> AndroidResult<Option<ControlId>> {
        self.expect_kind(container, WidgetKind::Box)?;
        Ok(self.children(container).get(index).copied())
    }

    fn view_of(&self, control: ControlId) -> AndroidResult<ViewRef> {
        match self.get::<AndroidControl>(control) {
            Some(android) => Ok(android.view()),
            None => Err(self.report(UserBug::StaleControl { control }).into()),
        }
    }
}
