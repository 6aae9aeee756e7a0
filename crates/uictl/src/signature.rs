//! Signature registry.
//!
//! Every control carries three tags: the class-wide [`CONTROL_SIGNATURE`],
//! the [`OsSignature`] of the backend that created it, and the
//! [`WidgetKind`] it implements. The numeric values are four-character codes
//! and are shared by every backend.

use std::fmt;

/// Stamped into every control header. "uiCo".
pub const CONTROL_SIGNATURE: u32 = 0x7569436F;

/// Identity of the platform backend that created a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsSignature {
    Android,
    Darwin,
    Unix,
    Windows,
}

impl OsSignature {
    pub const ALL: [OsSignature; 4] = [
        OsSignature::Android,
        OsSignature::Darwin,
        OsSignature::Unix,
        OsSignature::Windows,
    ];

    pub const fn signature(self) -> u32 {
        match self {
            OsSignature::Android => 0x416E6472,
            OsSignature::Darwin => 0x44617277,
            OsSignature::Unix => 0x556E6978,
            OsSignature::Windows => 0x4D53576E,
        }
    }

    pub fn from_signature(signature: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|os| os.signature() == signature)
    }
}

impl fmt::Display for OsSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OsSignature::Android => "android",
            OsSignature::Darwin => "darwin",
            OsSignature::Unix => "unix",
            OsSignature::Windows => "windows",
        };
        f.write_str(name)
    }
}

/// Concrete widget kind of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Area,
    Box,
    Button,
    Checkbox,
    ColorButton,
    Combobox,
    DateTimePicker,
    EditableCombobox,
    Entry,
    FontButton,
    Form,
    Grid,
    Group,
    Label,
    MultilineEntry,
    ProgressBar,
    RadioButtons,
    Scroll,
    Separator,
    Slider,
    Spinbox,
    Tab,
    Table,
    Window,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 24] = [
        WidgetKind::Area,
        WidgetKind::Box,
        WidgetKind::Button,
        WidgetKind::Checkbox,
        WidgetKind::ColorButton,
        WidgetKind::Combobox,
        WidgetKind::DateTimePicker,
        WidgetKind::EditableCombobox,
        WidgetKind::Entry,
        WidgetKind::FontButton,
        WidgetKind::Form,
        WidgetKind::Grid,
        WidgetKind::Group,
        WidgetKind::Label,
        WidgetKind::MultilineEntry,
        WidgetKind::ProgressBar,
        WidgetKind::RadioButtons,
        WidgetKind::Scroll,
        WidgetKind::Separator,
        WidgetKind::Slider,
        WidgetKind::Spinbox,
        WidgetKind::Tab,
        WidgetKind::Table,
        WidgetKind::Window,
    ];

    pub const fn signature(self) -> u32 {
        match self {
            WidgetKind::Area => 0x41726561,
            WidgetKind::Box => 0x426F784C,
            WidgetKind::Button => 0x42746F6E,
            WidgetKind::Checkbox => 0x43686B62,
            WidgetKind::ColorButton => 0x436F6C42,
            WidgetKind::Combobox => 0x436F6D62,
            WidgetKind::DateTimePicker => 0x44545069,
            WidgetKind::EditableCombobox => 0x45644362,
            WidgetKind::Entry => 0x456E7472,
            WidgetKind::FontButton => 0x466F6E42,
            WidgetKind::Form => 0x466F726D,
            WidgetKind::Grid => 0x47726964,
            WidgetKind::Group => 0x47727062,
            WidgetKind::Label => 0x4C61626C,
            WidgetKind::MultilineEntry => 0x4D6C6E45,
            WidgetKind::ProgressBar => 0x50426172,
            WidgetKind::RadioButtons => 0x5264696F,
            WidgetKind::Scroll => 0x5363726C,
            WidgetKind::Separator => 0x53657061,
            WidgetKind::Slider => 0x536C6964,
            WidgetKind::Spinbox => 0x5370696E,
            WidgetKind::Tab => 0x54616273,
            WidgetKind::Table => 0x5461626C,
            WidgetKind::Window => 0x57696E64,
        }
    }

    pub fn from_signature(signature: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.signature() == signature)
    }

    /// Toolkit-level type name, used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            WidgetKind::Area => "uiArea",
            WidgetKind::Box => "uiBox",
            WidgetKind::Button => "uiButton",
            WidgetKind::Checkbox => "uiCheckbox",
            WidgetKind::ColorButton => "uiColorButton",
            WidgetKind::Combobox => "uiCombobox",
            WidgetKind::DateTimePicker => "uiDateTimePicker",
            WidgetKind::EditableCombobox => "uiEditableCombobox",
            WidgetKind::Entry => "uiEntry",
            WidgetKind::FontButton => "uiFontButton",
            WidgetKind::Form => "uiForm",
            WidgetKind::Grid => "uiGrid",
            WidgetKind::Group => "uiGroup",
            WidgetKind::Label => "uiLabel",
            WidgetKind::MultilineEntry => "uiMultilineEntry",
            WidgetKind::ProgressBar => "uiProgressBar",
            WidgetKind::RadioButtons => "uiRadioButtons",
            WidgetKind::Scroll => "uiScroll",
            WidgetKind::Separator => "uiSeparator",
            WidgetKind::Slider => "uiSlider",
            WidgetKind::Spinbox => "uiSpinbox",
            WidgetKind::Tab => "uiTab",
            WidgetKind::Table => "uiTable",
            WidgetKind::Window => "uiWindow",
        }
    }

    /// Whether controls of this kind can hold children.
    pub const fn is_container(self) -> bool {
        match self {
            WidgetKind::Box
            | WidgetKind::Form
            | WidgetKind::Grid
            | WidgetKind::Group
            | WidgetKind::Scroll
            | WidgetKind::Tab
            | WidgetKind::Window => true,
            WidgetKind::Area
            | WidgetKind::Button
            | WidgetKind::Checkbox
            | WidgetKind::ColorButton
            | WidgetKind::Combobox
            | WidgetKind::DateTimePicker
            | WidgetKind::EditableCombobox
            | WidgetKind::Entry
            | WidgetKind::FontButton
            | WidgetKind::Label
            | WidgetKind::MultilineEntry
            | WidgetKind::ProgressBar
            | WidgetKind::RadioButtons
            | WidgetKind::Separator
            | WidgetKind::Slider
            | WidgetKind::Spinbox
            | WidgetKind::Table => false,
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const fn registry_is_collision_free() -> bool {
    let kinds = WidgetKind::ALL;
    let mut i = 0;
    while i < kinds.len() {
        let sig = kinds[i].signature();
        if sig == CONTROL_SIGNATURE {
            return false;
        }
        let mut j = i + 1;
        while j < kinds.len() {
            if sig == kinds[j].signature() {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

static_assertions::const_assert!(registry_is_collision_free());
