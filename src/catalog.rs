use crate::error::{SbResult, ScalebookError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// One entry of the raw source document:
/// `{ "range": [low, high], "interpretation": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBand {
    pub range: [i32; 2],
    pub interpretation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawScale {
    pub ranges: Vec<RawBand>,
}

/// The full source document: scale code -> band list.
pub type RawDocument = BTreeMap<String, RawScale>;

/// A closed score interval carrying its narrative text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    pub low: i32,
    pub high: i32,
    pub text: String,
}

impl Band {
    pub fn contains(&self, score: i32) -> bool {
        self.low <= score && score <= self.high
    }
}

/// A single scale's validated band table, sorted, contiguous and
/// non-overlapping. Bands jointly cover `floor()..=ceiling()`.
#[derive(Debug, Clone)]
pub struct ScaleEntry {
    code: String,
    bands: Vec<Band>,
}

impl ScaleEntry {
    fn from_raw(code: &str, raw: RawScale) -> SbResult<Self> {
        let malformed = |detail: String| ScalebookError::MalformedTable {
            scale: code.to_string(),
            detail,
        };

        if raw.ranges.is_empty() {
            return Err(malformed("empty range list".into()));
        }

        let mut bands = Vec::with_capacity(raw.ranges.len());
        for entry in raw.ranges {
            let [low, high] = entry.range;
            if low > high {
                return Err(malformed(format!("reversed bounds [{}, {}]", low, high)));
            }
            if entry.interpretation.trim().is_empty() {
                return Err(malformed(format!(
                    "blank interpretation for [{}, {}]",
                    low, high
                )));
            }
            bands.push(Band {
                low,
                high,
                text: entry.interpretation,
            });
        }

        for pair in bands.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.low <= prev.high {
                return Err(malformed(format!(
                    "[{}, {}] overlaps or precedes [{}, {}]",
                    next.low, next.high, prev.low, prev.high
                )));
            }
            if next.low > prev.high + 1 {
                return Err(malformed(format!(
                    "gap between [{}, {}] and [{}, {}]",
                    prev.low, prev.high, next.low, next.high
                )));
            }
        }

        Ok(Self {
            code: code.to_string(),
            bands,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Lowest valid score for this scale.
    pub fn floor(&self) -> i32 {
        self.bands[0].low
    }

    /// Highest valid score for this scale.
    pub fn ceiling(&self) -> i32 {
        self.bands[self.bands.len() - 1].high
    }

    fn band_for(&self, score: i32) -> SbResult<&Band> {
        if score < self.floor() || score > self.ceiling() {
            return Err(ScalebookError::InvalidScore {
                scale: self.code.clone(),
                score,
                floor: self.floor(),
                ceiling: self.ceiling(),
            });
        }

        // Bands are sorted and contiguous, so the first band whose high
        // bound reaches the score is the unique match.
        let idx = self.bands.partition_point(|b| b.high < score);
        Ok(&self.bands[idx])
    }
}

/// The validated, immutable set of all scale tables. Built once via one of
/// the constructors, then read-only for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    scales: BTreeMap<String, ScaleEntry>,
}

impl Catalog {
    /// Validates the raw document and builds the catalog. All-or-nothing:
    /// any invariant violation in any scale rejects the whole document.
    pub fn from_raw(raw: RawDocument) -> SbResult<Self> {
        let mut scales = BTreeMap::new();
        for (code, raw_scale) in raw {
            let entry = ScaleEntry::from_raw(&code, raw_scale)?;
            debug!(
                "Scale {}: {} bands covering {}..={}",
                code,
                entry.bands.len(),
                entry.floor(),
                entry.ceiling()
            );
            scales.insert(code, entry);
        }

        info!("Catalog built: {} scales", scales.len());
        Ok(Self { scales })
    }

    pub fn from_json_str(content: &str) -> SbResult<Self> {
        let raw: RawDocument = serde_json::from_str(content)?;
        Self::from_raw(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> SbResult<Self> {
        let raw: RawDocument = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SbResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Returns the narrative for `score` on the given scale, exactly as
    /// authored. Pure read; the catalog is never mutated by lookups.
    pub fn resolve(&self, code: &str, score: i32) -> SbResult<&str> {
        self.resolve_band(code, score).map(|b| b.text.as_str())
    }

    /// Same lookup as [`resolve`](Self::resolve), but returns the whole
    /// matched band so callers can report its bounds.
    pub fn resolve_band(&self, code: &str, score: i32) -> SbResult<&Band> {
        self.entry(code)?.band_for(score)
    }

    /// Resolves a whole score profile in caller order, failing fast on the
    /// first unknown scale or out-of-domain score.
    pub fn resolve_profile<'a, I>(&self, scores: I) -> SbResult<Vec<(String, &str)>>
    where
        I: IntoIterator<Item = (&'a str, i32)>,
    {
        let mut lines = Vec::new();
        for (code, score) in scores {
            lines.push((code.to_string(), self.resolve(code, score)?));
        }
        Ok(lines)
    }

    pub fn entry(&self, code: &str) -> SbResult<&ScaleEntry> {
        self.scales
            .get(code)
            .ok_or_else(|| ScalebookError::UnknownScale(code.to_string()))
    }

    /// The `(floor, ceiling)` score domain of a scale, for upstream
    /// validation of scoring-engine output.
    pub fn domain(&self, code: &str) -> SbResult<(i32, i32)> {
        let entry = self.entry(code)?;
        Ok((entry.floor(), entry.ceiling()))
    }

    /// Known scale codes, in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.scales.keys().map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.scales.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}
