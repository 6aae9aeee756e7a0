//! Explicit backend context: the view bridge and the action-bar registry.

use crate::bridge::ViewBridge;
use indexmap::IndexMap;
use std::fmt;
use tracing::{debug, warn};

struct IconAction {
    title: String,
    callback: Box<dyn FnMut()>,
}

/// Context handed to every Android control operation.
pub struct AndroidContext {
    bridge: Box<dyn ViewBridge>,
    icons: IndexMap<String, IconAction>,
}

impl AndroidContext {
    pub fn new(bridge: impl ViewBridge + 'static) -> Self {
        Self {
            bridge: Box::new(bridge),
            icons: IndexMap::new(),
        }
    }

    pub fn bridge(&self) -> &dyn ViewBridge {
        &*self.bridge
    }

    /// Show a standard Android toast.
    ///
    /// Accepts anything displayable, including `format_args!`.
    pub fn toast(&self, message: impl fmt::Display) {
        self.bridge.show_toast(&message.to_string());
    }

    /// Localized string resource by name.
    pub fn localized(&self, name: &str) -> Option<String> {
        self.bridge.localized_string(name)
    }

    /// Add an icon to the action bar. Registering an id again replaces the
    /// previous callback but keeps the icon's position.
    pub fn screen_add_icon(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        callback: impl FnMut() + 'static,
    ) {
        let id = id.into();
        let title = title.into();
        self.bridge.add_action_icon(&id, &title);
        debug!(%id, %title, "action bar icon registered");
        self.icons.insert(
            id,
            IconAction {
                title,
                callback: Box::new(callback),
            },
        );
    }

    /// Run the callback of the icon `id`, as the event loop does on a tap.
    ///
    /// Returns `false` if no icon with that id exists.
    pub fn activate_icon(&mut self, id: &str) -> bool {
        match self.icons.get_mut(id) {
            Some(action) => {
                (action.callback)();
                true
            }
            None => {
                warn!(%id, "tap on unknown action bar icon");
                false
            }
        }
    }

    /// Registered icons as `(id, title)` in registration order.
    pub fn icons(&self) -> impl Iterator<Item = (&str, &str)> {
        self.icons
            .iter()
            .map(|(id, action)| (id.as_str(), action.title.as_str()))
    }
}
