//! uictl Android backend.
//!
//! Implements the control contract on top of Android views. All access to
//! the Java side goes through a [`ViewBridge`] owned by the
//! [`AndroidContext`], which the control tree passes into every operation.
//!
//! ```rust,ignore
//! use uictl_android::{AndroidTree, init};
//!
//! let mut tree = init(jni_bridge);
//! let scroll = tree.new_scroll()?;
//! let label = tree.control_from_id("greeting")?;
//! tree.scroll_set_child(scroll, Some(label))?;
//! tree.set_content(scroll)?;
//! tree.context().toast(format_args!("Hello from {}", "uictl"));
//! ```

pub mod bridge;
pub mod context;
pub mod control;
pub mod error;
pub mod tree_ext;

pub use bridge::{Gravity, TextAlign, ViewBridge, ViewRef, view_class};
pub use context::AndroidContext;
pub use control::{AndroidControl, NativeRefs, infer_kind};
pub use error::{AndroidError, AndroidResult};
pub use tree_ext::AndroidTree;

use uictl::{Backend, ControlTree, OsSignature};
use uictl_core::config::Config;

/// Backend marker for Android.
pub struct Android;

impl Backend for Android {
    const OS: OsSignature = OsSignature::Android;
    type Context = AndroidContext;
}

/// Bind the backend to the current activity through `bridge`.
pub fn init(bridge: impl ViewBridge + 'static) -> ControlTree<Android> {
    init_with_config(bridge, &Config::default())
}

pub fn init_with_config(bridge: impl ViewBridge + 'static, config: &Config) -> ControlTree<Android> {
    tracing::info!("android backend initialized");
    ControlTree::with_config(AndroidContext::new(bridge), config)
}
