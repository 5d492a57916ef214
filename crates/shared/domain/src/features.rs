use crate::constants::{
    EDIT, INSERT, LABEL_EDIT, LABEL_INSERT, LABEL_LAYOUT, LABEL_PREVIEW, LABEL_REDO,
    LABEL_RESIZE, LABEL_UNDO, LABEL_ZOOM_IN, LABEL_ZOOM_OUT, LAYOUT, OPTION_SUFFIX, PREVIEW,
    RESIZE, UNDO_REDO, ZOOM,
};
use bitflags::bitflags;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// A built-in toolbar feature.
///
/// Declaration order is the toolbar priority order; [`Feature::iter`] walks it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    UndoRedo,
    Zoom,
    Edit,
    Insert,
    Layout,
    Resize,
    Preview,
}

impl Feature {
    /// The camelCase wire name (`undoRedo`, `zoom`, ...).
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The editor option key that enables this feature (`undoRedoEnabled`, ...).
    #[must_use]
    pub const fn option_key(self) -> &'static str {
        match self {
            Self::UndoRedo => "undoRedoEnabled",
            Self::Zoom => "zoomEnabled",
            Self::Edit => "editEnabled",
            Self::Insert => "insertEnabled",
            Self::Layout => "layoutEnabled",
            Self::Resize => "resizeEnabled",
            Self::Preview => "previewEnabled",
        }
    }

    /// Untranslated label keys, one per button the feature renders.
    #[must_use]
    pub const fn label_keys(self) -> &'static [&'static str] {
        match self {
            Self::UndoRedo => &[LABEL_UNDO, LABEL_REDO],
            Self::Zoom => &[LABEL_ZOOM_IN, LABEL_ZOOM_OUT],
            Self::Edit => &[LABEL_EDIT],
            Self::Insert => &[LABEL_INSERT],
            Self::Layout => &[LABEL_LAYOUT],
            Self::Resize => &[LABEL_RESIZE],
            Self::Preview => &[LABEL_PREVIEW],
        }
    }

    #[must_use]
    pub const fn flag(self) -> FeatureToggleSet {
        match self {
            Self::UndoRedo => FeatureToggleSet::UNDO_REDO,
            Self::Zoom => FeatureToggleSet::ZOOM,
            Self::Edit => FeatureToggleSet::EDIT,
            Self::Insert => FeatureToggleSet::INSERT,
            Self::Layout => FeatureToggleSet::LAYOUT,
            Self::Resize => FeatureToggleSet::RESIZE,
            Self::Preview => FeatureToggleSet::PREVIEW,
        }
    }

    /// Resolves either a feature name (`zoom`) or its option key (`zoomEnabled`).
    #[must_use]
    pub fn lookup(key: &str) -> Option<Self> {
        let name = key.strip_suffix(OPTION_SUFFIX).unwrap_or(key);
        match name {
            UNDO_REDO => Some(Self::UndoRedo),
            ZOOM => Some(Self::Zoom),
            EDIT => Some(Self::Edit),
            INSERT => Some(Self::Insert),
            LAYOUT => Some(Self::Layout),
            RESIZE => Some(Self::Resize),
            PREVIEW => Some(Self::Preview),
            _ => None,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// The set of enabled built-in features. Absent bits mean "disabled".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct FeatureToggleSet: u8 {
        const UNDO_REDO = 1 << 0;
        const ZOOM = 1 << 1;
        const EDIT = 1 << 2;
        const INSERT = 1 << 3;
        const LAYOUT = 1 << 4;
        const RESIZE = 1 << 5;
        const PREVIEW = 1 << 6;

        const ALL = Self::UNDO_REDO.bits()
            | Self::ZOOM.bits()
            | Self::EDIT.bits()
            | Self::INSERT.bits()
            | Self::LAYOUT.bits()
            | Self::RESIZE.bits()
            | Self::PREVIEW.bits();
    }
}

impl FeatureToggleSet {
    #[must_use]
    pub const fn is_enabled(self, feature: Feature) -> bool {
        self.contains(feature.flag())
    }

    /// Returns a copy with `feature` switched on or off.
    #[must_use]
    pub fn with(mut self, feature: Feature, enabled: bool) -> Self {
        self.set(feature.flag(), enabled);
        self
    }

    /// Enabled features in toolbar priority order.
    pub fn features(self) -> impl Iterator<Item = Feature> {
        Feature::iter().filter(move |feature| self.is_enabled(*feature))
    }

    /// Builds a set from `(name, enabled)` pairs in any order.
    ///
    /// Keys may be feature names or option keys; unknown keys are ignored and
    /// a later pair for the same feature wins.
    pub fn from_toggles<K, I>(toggles: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, bool)>,
    {
        toggles.into_iter().fold(Self::empty(), |set, (key, enabled)| {
            Feature::lookup(key.as_ref()).map_or(set, |feature| set.with(feature, enabled))
        })
    }
}

impl From<Feature> for FeatureToggleSet {
    fn from(feature: Feature) -> Self {
        feature.flag()
    }
}

impl FromIterator<Feature> for FeatureToggleSet {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), |set, feature| set | feature.flag())
    }
}

impl From<&str> for FeatureToggleSet {
    fn from(s: &str) -> Self {
        match s {
            "all" | "*" => Self::ALL,
            other => Feature::lookup(other).map_or_else(Self::empty, Feature::flag),
        }
    }
}

impl Serialize for FeatureToggleSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.bits().count_ones() as usize))?;
        for feature in self.features() {
            seq.serialize_element(feature.name())?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for FeatureToggleSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NamesVisitor;

        impl<'de> Visitor<'de> for NamesVisitor {
            type Value = FeatureToggleSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of feature names")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut set = FeatureToggleSet::empty();
                while let Some(name) = seq.next_element::<String>()? {
                    set |= FeatureToggleSet::from(name.as_str());
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(NamesVisitor)
    }
}
