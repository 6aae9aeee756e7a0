//! The boundary between the adapter and the Android view system.
//!
//! A JNI implementation of [`ViewBridge`] owns the `JNIEnv` and activity
//! object; the adapter itself never reaches for global JNI state. Every
//! method is synchronous and runs on the UI thread.

use std::fmt;
use std::sync::Arc;
use uictl::WidgetKind;

/// Opaque reference to a Java `View` (local or global JNI reference).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewRef(pub usize);

impl fmt::Display for ViewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view@{:#x}", self.0)
    }
}

/// Text alignment of a label, numbered like `uiDrawTextAlign`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left = 0,
    Center = 1,
    Right = 2,
}

impl TextAlign {
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(TextAlign::Left),
            1 => Some(TextAlign::Center),
            2 => Some(TextAlign::Right),
            _ => None,
        }
    }
}

/// Layout gravity applied to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gravity {
    Center,
    CenterHorizontal,
    CenterVertical,
}

/// Java class each widget kind is backed by.
pub fn view_class(kind: WidgetKind) -> &'static str {
    match kind {
        WidgetKind::Box | WidgetKind::Form | WidgetKind::Grid | WidgetKind::Group => {
            "android/widget/LinearLayout"
        }
        WidgetKind::Button | WidgetKind::ColorButton | WidgetKind::FontButton => {
            "android/widget/Button"
        }
        WidgetKind::Checkbox => "android/widget/CheckBox",
        WidgetKind::Combobox | WidgetKind::EditableCombobox => "android/widget/Spinner",
        WidgetKind::DateTimePicker => "android/widget/DatePicker",
        WidgetKind::Entry | WidgetKind::MultilineEntry | WidgetKind::Spinbox => {
            "android/widget/EditText"
        }
        WidgetKind::Label => "android/widget/TextView",
        WidgetKind::ProgressBar => "android/widget/ProgressBar",
        WidgetKind::RadioButtons => "android/widget/RadioGroup",
        WidgetKind::Scroll => "android/widget/ScrollView",
        WidgetKind::Separator | WidgetKind::Area => "android/view/View",
        WidgetKind::Slider => "android/widget/SeekBar",
        WidgetKind::Tab => "android/widget/TabHost",
        WidgetKind::Table => "android/widget/TableLayout",
        WidgetKind::Window => "android/widget/PopupWindow",
    }
}

/// Operations the adapter needs from the Android view system.
pub trait ViewBridge {
    /// Promote a local reference to a global one owned by the caller.
    fn new_global_ref(&self, view: ViewRef) -> ViewRef;

    fn delete_global_ref(&self, view: ViewRef);

    /// Create a view for `kind`. Returns a local reference.
    fn create_view(&self, kind: WidgetKind) -> Option<ViewRef>;

    /// Look up a view by resource id name (`R.id.*`). Returns a local reference.
    fn find_view_by_id(&self, id: &str) -> Option<ViewRef>;

    /// Inflate a layout by resource name (`R.layout.*`). Returns a local reference.
    fn inflate_layout(&self, name: &str) -> Option<ViewRef>;

    fn is_instance_of(&self, view: ViewRef, class: &str) -> bool;

    fn set_enabled(&self, view: ViewRef, enabled: bool);

    fn set_visible(&self, view: ViewRef, visible: bool);

    fn add_view(&self, parent: ViewRef, child: ViewRef);

    fn remove_view(&self, parent: ViewRef, child: ViewRef);

    fn open_popup(&self, view: ViewRef);

    fn set_content_view(&self, view: ViewRef);

    fn set_gravity(&self, view: ViewRef, gravity: Gravity);

    fn set_text_alignment(&self, view: ViewRef, align: TextAlign);

    /// Forward an attribute by name. Parsing `value` is up to the Java side.
    fn set_attr(&self, view: ViewRef, name: &str, value: &str);

    fn show_toast(&self, text: &str);

    fn add_action_icon(&self, id: &str, title: &str);

    /// Localized string resource (`R.string.*`).
    fn localized_string(&self, name: &str) -> Option<String>;

    /// Detach the view from the hierarchy and drop its native state.
    fn destroy_view(&self, view: ViewRef);
}

impl<T: ViewBridge + ?Sized> ViewBridge for Arc<T> {
    fn new_global_ref(&self, view: ViewRef) -> ViewRef {
        (**self).new_global_ref(view)
    }

    fn delete_global_ref(&self, view: ViewRef) {
        (**self).delete_global_ref(view)
    }

    fn create_view(&self, kind: WidgetKind) -> Option<ViewRef> {
        (**self).create_view(kind)
    }

    fn find_view_by_id(&self, id: &str) -> Option<ViewRef> {
        (**self).find_view_by_id(id)
    }

    fn inflate_layout(&self, name: &str) -> Option<ViewRef> {
        (**self).inflate_layout(name)
    }

    fn is_instance_of(&self, view: ViewRef, class: &str) -> bool {
        (**self).is_instance_of(view, class)
    }

    fn set_enabled(&self, view: ViewRef, enabled: bool) {
        (**self).set_enabled(view, enabled)
    }

    fn set_visible(&self, view: ViewRef, visible: bool) {
        (**self).set_visible(view, visible)
    }

    fn add_view(&self, parent: ViewRef, child: ViewRef) {
        (**self).add_view(parent, child)
    }

    fn remove_view(&self, parent: ViewRef, child: ViewRef) {
        (**self).remove_view(parent, child)
    }

    fn open_popup(&self, view: ViewRef) {
        (**self).open_popup(view)
    }

    fn set_content_view(&self, view: ViewRef) {
        (**self).set_content_view(view)
    }

    fn set_gravity(&self, view: ViewRef, gravity: Gravity) {
        (**self).set_gravity(view, gravity)
    }

    fn set_text_alignment(&self, view: ViewRef, align: TextAlign) {
        (**self).set_text_alignment(view, align)
    }

    fn set_attr(&self, view: ViewRef, name: &str, value: &str) {
        (**self).set_attr(view, name, value)
    }

    fn show_toast(&self, text: &str) {
        (**self).show_toast(text)
    }

    fn add_action_icon(&self, id: &str, title: &str) {
        (**self).add_action_icon(id, title)
    }

    fn localized_string(&self, name: &str) -> Option<String> {
        (**self).localized_string(name)
    }

    fn destroy_view(&self, view: ViewRef) {
        (**self).destroy_view(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_align_from_raw() {
        assert_eq!(TextAlign::from_raw(0), Some(TextAlign::Left));
        assert_eq!(TextAlign::from_raw(2), Some(TextAlign::Right));
        assert_eq!(TextAlign::from_raw(3), None);
        assert_eq!(TextAlign::Center as i32, 1);
    }

    #[test]
    fn test_every_kind_has_a_class() {
        for kind in WidgetKind::ALL {
            assert!(view_class(kind).starts_with("android/"));
        }
    }
}
