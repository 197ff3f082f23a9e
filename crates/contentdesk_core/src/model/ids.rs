//! Record identity and loosely typed references between records.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Primary id of every stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Picks the id for a new record.
///
/// The creation timestamp is used unless a record in the same list already
/// holds it, in which case the id becomes `max + 1`.
pub fn next_record_id(existing: impl IntoIterator<Item = RecordId>, now_ms: i64) -> RecordId {
    let mut max = None;
    let mut collides = false;
    for id in existing {
        collides |= id.0 == now_ms;
        max = max.max(Some(id.0));
    }
    match (collides, max) {
        (true, Some(max)) => RecordId(max.saturating_add(1)),
        _ => RecordId(now_ms),
    }
}

/// Reference to another record's id, kept in whatever JSON shape it was
/// stored with.
///
/// Form submissions store references as strings (`"3"`) while seeded data
/// stores numbers (`3`). Lookups choose explicitly between `loose_eq`
/// (numeric coercion) and `strict_eq` (type and value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForeignKey {
    Number(i64),
    Text(String),
}

impl ForeignKey {
    /// Matches after coercing a textual reference to a number.
    ///
    /// Blank text coerces to `0`; non-numeric text never matches.
    pub fn loose_eq(&self, id: RecordId) -> bool {
        match self {
            Self::Number(value) => *value == id.0,
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return id.0 == 0;
                }
                trimmed
                    .parse::<f64>()
                    .map(|value| value == id.0 as f64)
                    .unwrap_or(false)
            }
        }
    }

    /// Matches only numeric references with the same value.
    pub fn strict_eq(&self, id: RecordId) -> bool {
        matches!(self, Self::Number(value) if *value == id.0)
    }
}

impl Default for ForeignKey {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<RecordId> for ForeignKey {
    fn from(value: RecordId) -> Self {
        Self::Number(value.0)
    }
}

impl Display for ForeignKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{next_record_id, ForeignKey, RecordId};

    #[test]
    fn next_id_uses_timestamp_unless_taken() {
        assert_eq!(next_record_id([RecordId(1), RecordId(2)], 500), RecordId(500));
        assert_eq!(
            next_record_id([RecordId(500), RecordId(900)], 500),
            RecordId(901)
        );
        assert_eq!(next_record_id([], 42), RecordId(42));
    }

    #[test]
    fn loose_match_coerces_numeric_text() {
        assert!(ForeignKey::Text("3".to_string()).loose_eq(RecordId(3)));
        assert!(ForeignKey::Text(" 3 ".to_string()).loose_eq(RecordId(3)));
        assert!(ForeignKey::Number(3).loose_eq(RecordId(3)));
        assert!(!ForeignKey::Text("three".to_string()).loose_eq(RecordId(3)));
    }

    #[test]
    fn strict_match_rejects_textual_reference() {
        assert!(ForeignKey::Number(3).strict_eq(RecordId(3)));
        assert!(!ForeignKey::Text("3".to_string()).strict_eq(RecordId(3)));
    }

    #[test]
    fn deserializes_both_reference_shapes() {
        let keys: Vec<ForeignKey> = serde_json::from_str(r#"[1, "2", ""]"#).unwrap();
        assert_eq!(
            keys,
            vec![
                ForeignKey::Number(1),
                ForeignKey::Text("2".to_string()),
                ForeignKey::Text(String::new())
            ]
        );
    }
}
