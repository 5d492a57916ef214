//! Wire names and default label keys for the built-in toolbar features.

pub const UNDO_REDO: &str = "undoRedo";
pub const ZOOM: &str = "zoom";
pub const EDIT: &str = "edit";
pub const INSERT: &str = "insert";
pub const LAYOUT: &str = "layout";
pub const RESIZE: &str = "resize";
pub const PREVIEW: &str = "preview";

/// Suffix appended to a feature name to form its editor option key (`zoomEnabled`).
pub const OPTION_SUFFIX: &str = "Enabled";

// Label keys handed to the translator. Untranslated keys render as empty labels.
pub const LABEL_UNDO: &str = "undo";
pub const LABEL_REDO: &str = "redo";
pub const LABEL_ZOOM_IN: &str = "zoom in";
pub const LABEL_ZOOM_OUT: &str = "zoom out";
pub const LABEL_EDIT: &str = "Edit blocks";
pub const LABEL_INSERT: &str = "Add blocks";
pub const LABEL_LAYOUT: &str = "Move blocks";
pub const LABEL_RESIZE: &str = "Resize blocks";
pub const LABEL_PREVIEW: &str = "Preview page";

/// Accessible label of the drawer toggle button.
pub const LABEL_OPEN_DRAWER: &str = "open drawer";
