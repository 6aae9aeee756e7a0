use std::fmt;
use uictl::{ControlError, WidgetKind};

/// Errors raised by the Android adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AndroidError {
    /// No view carries the requested resource id.
    ViewNotFound { id: String },

    /// The requested layout could not be inflated.
    LayoutNotFound { name: String },

    /// The view system refused to create a view.
    ViewCreation { kind: WidgetKind },

    /// The control layer rejected the request.
    Control(ControlError),
}

impl fmt::Display for AndroidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AndroidError::ViewNotFound { id } => write!(f, "No view with id: {}", id),
            AndroidError::LayoutNotFound { name } => write!(f, "Layout not found: {}", name),
            AndroidError::ViewCreation { kind } => {
                write!(f, "Failed to create a view for {}", kind)
            }
            AndroidError::Control(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for AndroidError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AndroidError::Control(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ControlError> for AndroidError {
    fn from(value: ControlError) -> Self {
        Self::Control(value)
    }
}

pub type AndroidResult<T> = Result<T, AndroidError>;
