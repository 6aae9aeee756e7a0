//! Test utilities for the uictl control layer.
//!
//! - `MockBackend` / `MockControl`: a recording backend for exercising the
//!   generic tree without a native toolkit (requires `mock` feature)
//! - `MockViewBridge`: a recording Android view bridge that keeps a ledger of
//!   global references (requires `mock` feature)
//!
//! Mocks record through `parking_lot::Mutex`, so operations that only get a
//! shared context reference can still be observed by the test.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use uictl::{ControlTree, WidgetKind};
//! use uictl_test_utils::{MockBackend, MockContext, MockControl, MockOp};
//!
//! let mut tree = ControlTree::<MockBackend>::new(MockContext::new());
//! let window = MockControl::window(tree.context(), "main");
//! let window = tree.alloc(window).unwrap();
//!
//! tree.show(window);
//! assert_eq!(tree.context().count(MockOp::Show), 1);
//! # }
//! ```

#[cfg(feature = "mock")]
pub mod mock_backend;
#[cfg(feature = "mock")]
pub mod mock_bridge;

#[cfg(feature = "mock")]
pub use mock_backend::*;
#[cfg(feature = "mock")]
pub use mock_bridge::*;
