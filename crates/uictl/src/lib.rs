//! uictl - the backend-agnostic control layer of a native GUI toolkit.
//!
//! Every platform backend plugs its widgets into the same contract:
//! - [`Control`]: the capability trait a backend implements per widget type
//! - [`ControlHeader`]: identity tags stamped at allocation
//! - [`ControlTree`]: owns controls, dispatches operations, and enforces the
//!   parent/child invariants before a backend sees a structural change
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut tree = ControlTree::<MyBackend>::new(context);
//! let window = tree.alloc(MyWindow::new())?;
//! let button = tree.alloc(MyButton::new("OK"))?;
//!
//! tree.set_parent(button, Some(window))?;
//! assert_eq!(tree.parent(button), Some(window));
//! assert!(tree.set_parent(window, Some(button)).is_err());
//!
//! tree.set_parent(button, None)?;
//! tree.destroy(button)?;
//! ```

pub mod control;
pub mod error;
pub mod signature;
pub mod tree;
mod verify;

pub use control::{Backend, Capabilities, Control, ControlHeader, NativeHandle};
pub use error::{ControlError, ControlResult, ImplBug, UserBug};
pub use signature::{CONTROL_SIGNATURE, OsSignature, WidgetKind};
pub use tree::{ControlId, ControlTree};

pub use uictl_core::config::{BugPolicy, Config};
