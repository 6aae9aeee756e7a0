//! Parent/child invariant checks and ancestor-aware queries.

use crate::control::Backend;
use crate::error::{ControlResult, ImplBug, UserBug};
use crate::tree::{ControlId, ControlTree};
use uictl_core::profiling::profile_function;

impl<B: Backend> ControlTree<B> {
    /// Check that `control` may be attached to `parent` (or detached, for `None`).
    ///
    /// Rejections, in order:
    /// - toplevel controls never get a parent (user bug)
    /// - an attached control must be detached before it is attached again (user bug)
    /// - detaching a control that has no parent (implementation bug)
    /// - the new parent must be live, a container, and not `control` or one
    ///   of its descendants (user bug)
    pub fn verify_set_parent(
        &self,
        control: ControlId,
        parent: Option<ControlId>,
    ) -> ControlResult<()> {
        if !self.contains(control) {
            return Err(self.report(UserBug::StaleControl { control }));
        }
        if self.toplevel(control) {
            return Err(self.report(UserBug::ToplevelParent { control }));
        }

        let current = self.parent(control);
        let requested = match (parent, current) {
            (Some(requested), Some(current)) => {
                return Err(self.report(UserBug::AlreadyParented {
                    control,
                    current,
                    requested,
                }));
            }
            (None, None) => return Err(self.report(ImplBug::DoubleUnparent { control })),
            (None, Some(_)) => return Ok(()),
            (Some(requested), None) => requested,
        };

        let Some(kind) = self.kind(requested) else {
            return Err(self.report(UserBug::StaleControl { control: requested }));
        };
        if requested == control || self.ancestors(requested).any(|a| a == control) {
            return Err(self.report(UserBug::ParentCycle { control, requested }));
        }
        if !kind.is_container() {
            return Err(self.report(UserBug::NotAContainer {
                control,
                requested,
                kind,
            }));
        }
        Ok(())
    }

    /// Whether the user can interact with `control`: it and every ancestor
    /// up to its root report enabled.
    pub fn enabled_to_user(&self, control: ControlId) -> bool {
        profile_function!();
        let mut current = Some(control);
        while let Some(id) = current {
            if !self.enabled(id) {
                return false;
            }
            current = self.parent(id);
        }
        true
    }
}
