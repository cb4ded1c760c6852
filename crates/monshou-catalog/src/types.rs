//! Catalog value types.
//!
//! The store file is a single JSON array of records; [`Catalog`] is the
//! in-memory form, passed by value through the builder passes so
//! persistence stays an explicit step at the end of a run.

use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// Field names match the store file exactly. The three `*Ja` fields are a
/// wholly optional secondary-language mirror; they survive load/persist
/// round trips but are never required for correctness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconRecord {
    /// Stable identifier, `icon-NNNNN`. Assigned once, never reused.
    pub id: String,
    /// Human-readable title derived from the pattern family.
    pub title: String,
    /// Human-readable description.
    pub description: String,
    /// Serialized markup, canonical `viewBox="0 0 24 24"`.
    pub svg: String,
    /// Cached structural fingerprint of `svg` at creation time. A cache of
    /// a derived value: recomputed and compared, never trusted, whenever
    /// uniqueness is re-verified.
    pub hash: String,
    /// Category labels.
    pub tags: Vec<String>,
    /// Single classification label.
    pub category: String,
    /// Japanese mirror of `title`.
    #[serde(rename = "titleJa", default, skip_serializing_if = "Option::is_none")]
    pub title_ja: Option<String>,
    /// Japanese mirror of `description`.
    #[serde(
        rename = "descriptionJa",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description_ja: Option<String>,
    /// Japanese mirror of `tags`.
    #[serde(rename = "tagsJa", default, skip_serializing_if = "Option::is_none")]
    pub tags_ja: Option<Vec<String>>,
}

/// The `icon-NNNNN` identifier for a 1-based ordinal.
#[must_use]
pub fn icon_id(ordinal: usize) -> String {
    format!("icon-{ordinal:05}")
}

/// The ordered record collection, the system's sole data artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(Vec<IconRecord>);

impl Catalog {
    /// Create a catalog from records, preserving their order.
    #[must_use]
    pub const fn new(records: Vec<IconRecord>) -> Self {
        Self(records)
    }

    /// Number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the catalog has no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All records, in order.
    #[must_use]
    pub fn records(&self) -> &[IconRecord] {
        &self.0
    }

    /// Mutable access for the fix pass, the only record mutation in the
    /// system.
    pub(crate) fn records_mut(&mut self) -> &mut [IconRecord] {
        &mut self.0
    }

    /// Append a record.
    pub fn push(&mut self, record: IconRecord) {
        self.0.push(record);
    }

    /// Consume the catalog, yielding its records.
    #[must_use]
    pub fn into_records(self) -> Vec<IconRecord> {
        self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn icon_ids_are_zero_padded_to_five_digits() {
        assert_eq!(icon_id(1), "icon-00001");
        assert_eq!(icon_id(42), "icon-00042");
        assert_eq!(icon_id(10_000), "icon-10000");
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let record = IconRecord {
            id: icon_id(1),
            title: "Star 1".into(),
            description: "A star motif".into(),
            svg: "<svg/>".into(),
            hash: "0".repeat(16),
            tags: vec!["star".into()],
            category: "geometric".into(),
            title_ja: None,
            description_ja: None,
            tags_ja: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("titleJa"));
        assert!(!json.contains("descriptionJa"));
        assert!(!json.contains("tagsJa"));
    }

    #[test]
    fn optional_fields_round_trip_when_present() {
        let record = IconRecord {
            id: icon_id(2),
            title: "Wave 2".into(),
            description: "A wave motif".into(),
            svg: "<svg/>".into(),
            hash: "f".repeat(16),
            tags: vec!["wave".into()],
            category: "organic".into(),
            title_ja: Some("波 2".into()),
            description_ja: Some("波のモチーフ".into()),
            tags_ja: Some(vec!["波".into()]),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: IconRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn catalog_serializes_as_a_bare_array() {
        let catalog = Catalog::default();
        assert_eq!(serde_json::to_string(&catalog).unwrap(), "[]");
    }

    #[test]
    fn records_without_ja_fields_parse() {
        let json = r#"[{"id":"icon-00001","title":"T","description":"D","svg":"<svg/>","hash":"abc","tags":["t"],"category":"c"}]"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.records()[0].title_ja.is_none());
    }
}
