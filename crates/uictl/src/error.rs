//! Error types for the control layer.
//!
//! Two categories, kept apart so a report says who has to fix it:
//! - [`UserBug`]: the application misused the API.
//! - [`ImplBug`]: a backend broke an internal invariant.

use crate::signature::{OsSignature, WidgetKind};
use crate::tree::ControlId;
use std::fmt;

/// Misuse of the control API by application code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserBug {
    /// A toplevel control was given a parent.
    ToplevelParent { control: ControlId },

    /// The control already has a parent; it must be detached first.
    AlreadyParented {
        control: ControlId,
        current: ControlId,
        requested: ControlId,
    },

    /// Destroy or free was requested while the control is still parented.
    DestroyWhileParented {
        control: ControlId,
        parent: ControlId,
    },

    /// A parented control was made the activity content; detach it first.
    ContentWhileParented {
        control: ControlId,
        parent: ControlId,
    },

    /// Free was requested while children are still attached.
    FreeWithChildren { control: ControlId, children: usize },

    /// The requested parent is the control itself or one of its descendants.
    ParentCycle {
        control: ControlId,
        requested: ControlId,
    },

    /// The requested parent cannot hold children.
    NotAContainer {
        control: ControlId,
        requested: ControlId,
        kind: WidgetKind,
    },

    /// A kind-specific operation was applied to the wrong kind of control.
    WrongKind {
        control: ControlId,
        expected: WidgetKind,
        actual: WidgetKind,
    },

    /// The id refers to a control that was destroyed or never existed.
    StaleControl { control: ControlId },
}

impl fmt::Display for UserBug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserBug::ToplevelParent { control } => write!(
                f,
                "You cannot give a toplevel uiControl a parent. (control: {})",
                control
            ),
            UserBug::AlreadyParented {
                control,
                current,
                requested,
            } => write!(
                f,
                "You cannot give a uiControl a parent while it already has one. \
                 (control: {}; current parent: {}; new parent: {})",
                control, current, requested
            ),
            UserBug::DestroyWhileParented { control, parent } => write!(
                f,
                "You cannot destroy a uiControl while it still has a parent. \
                 (control: {}; parent: {})",
                control, parent
            ),
            UserBug::ContentWhileParented { control, parent } => write!(
                f,
                "You cannot make a uiControl the activity content while it still has a parent. \
                 (control: {}; parent: {})",
                control, parent
            ),
            UserBug::FreeWithChildren { control, children } => write!(
                f,
                "You cannot free a uiControl that still owns {} children; destroy it instead. \
                 (control: {})",
                children, control
            ),
            UserBug::ParentCycle { control, requested } => write!(
                f,
                "You cannot make a uiControl a descendant of itself. \
                 (control: {}; new parent: {})",
                control, requested
            ),
            UserBug::NotAContainer {
                control,
                requested,
                kind,
            } => write!(
                f,
                "You cannot give a uiControl a parent of kind {}, which holds no children. \
                 (control: {}; new parent: {})",
                kind, control, requested
            ),
            UserBug::WrongKind {
                control,
                expected,
                actual,
            } => write!(
                f,
                "This operation needs a {} but was given a {}. (control: {})",
                expected, actual, control
            ),
            UserBug::StaleControl { control } => write!(
                f,
                "You cannot use a uiControl after it was destroyed. (control: {})",
                control
            ),
        }
    }
}

/// Internal consistency violation inside a backend or the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImplBug {
    /// Detaching a control that has no parent.
    DoubleUnparent { control: ControlId },

    /// A header without the class signature reached the tree.
    BadSignature { found: u32, type_name: String },

    /// A control allocated by another backend was handed to this tree.
    ForeignBackend {
        expected: OsSignature,
        found: OsSignature,
    },

    /// Parent and child links disagree.
    BrokenLink {
        control: ControlId,
        parent: ControlId,
    },
}

impl fmt::Display for ImplBug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImplBug::DoubleUnparent { control } => {
                write!(f, "attempt to double unparent uiControl {}", control)
            }
            ImplBug::BadSignature { found, type_name } => write!(
                f,
                "memory block for {} is not a uiControl (signature {:#010x})",
                type_name, found
            ),
            ImplBug::ForeignBackend { expected, found } => write!(
                f,
                "uiControl allocated by the {} backend handed to the {} backend",
                found, expected
            ),
            ImplBug::BrokenLink { control, parent } => write!(
                f,
                "uiControl {} points at parent {} which does not list it as a child",
                control, parent
            ),
        }
    }
}

/// Errors raised by the control layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    UserBug(UserBug),
    ImplBug(ImplBug),
}

impl ControlError {
    pub fn is_user_bug(&self) -> bool {
        matches!(self, ControlError::UserBug(_))
    }

    pub fn is_impl_bug(&self) -> bool {
        matches!(self, ControlError::ImplBug(_))
    }
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::UserBug(bug) => write!(f, "[uictl] {}", bug),
            ControlError::ImplBug(bug) => {
                write!(f, "[uictl] {} (this is a bug in the backend)", bug)
            }
        }
    }
}

impl std::error::Error for ControlError {}

impl From<UserBug> for ControlError {
    fn from(bug: UserBug) -> Self {
        ControlError::UserBug(bug)
    }
}

impl From<ImplBug> for ControlError {
    fn from(bug: ImplBug) -> Self {
        ControlError::ImplBug(bug)
    }
}

pub type ControlResult<T> = Result<T, ControlError>;
