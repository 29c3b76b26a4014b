use crate::catalog::Catalog;
use std::sync::OnceLock;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The Restructured Clinical scales shipped with the crate.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
pub enum KnownScale {
    RCd,
    RC1,
    RC2,
    RC3,
}

impl KnownScale {
    /// The psychological construct the scale measures.
    pub fn construct(&self) -> &'static str {
        match self {
            Self::RCd => "Demoralization",
            Self::RC1 => "Somatic Complaints",
            Self::RC2 => "Low Positive Emotions",
            Self::RC3 => "Cynicism",
        }
    }
}

/// Raw band/narrative document for the built-in RC scales, in the same
/// shape the loaders accept.
pub const RC_SCALES_JSON: &str = include_str!("../data/rc_scales.json");

static RC_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// The validated catalog over the embedded RC table. Built on first use,
/// then shared read-only for the rest of the process.
pub fn rc_catalog() -> &'static Catalog {
    RC_CATALOG.get_or_init(|| {
        Catalog::from_json_str(RC_SCALES_JSON).expect("embedded RC scale table is well-formed")
    })
}

/// True when every [`KnownScale`] code is present in `catalog`.
pub fn covers_known_scales(catalog: &Catalog) -> bool {
    KnownScale::iter().all(|s| catalog.contains(&s.to_string()))
}
