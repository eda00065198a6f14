use serde::Serialize;

/// A character exactly as the catalog delivered it
pub type CharacterRecord = serde_json::Value;

/// A record that passed both filters, paired with its height in centimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub record: &'a CharacterRecord,
    pub height_cm: u64,
}

/// Filter arguments for one selection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionCriteria {
    pub gender: String,
    pub requires_work: bool,
}

impl SelectionCriteria {
    pub fn new(gender: impl Into<String>, requires_work: bool) -> Self {
        Self {
            gender: gender.into(),
            requires_work,
        }
    }
}

/// Outcome of a selection run.
///
/// `FetchFailed` and `NoMatch` both mean "absent" to callers that only want
/// an `Option`; they stay separate here for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Selection {
    FetchFailed { reason: String },
    NoMatch,
    Found { record: CharacterRecord, height_cm: u64 },
}

impl Selection {
    pub fn into_record(self) -> Option<CharacterRecord> {
        match self {
            Selection::Found { record, .. } => Some(record),
            Selection::FetchFailed { .. } | Selection::NoMatch => None,
        }
    }
}

/// Summary of how usable a catalog snapshot is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub measurable: usize,
    pub employed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_selection_serializes_with_outcome_tag() {
        let found = Selection::Found {
            record: json!({ "name": "Ymir" }),
            height_cm: 30480,
        };
        assert_eq!(
            serde_json::to_value(&found).unwrap(),
            json!({ "outcome": "found", "record": { "name": "Ymir" }, "height_cm": 30480 })
        );
        assert_eq!(
            serde_json::to_value(Selection::NoMatch).unwrap(),
            json!({ "outcome": "no_match" })
        );
    }

    #[test]
    fn test_into_record_only_for_found() {
        assert!(Selection::NoMatch.into_record().is_none());
        assert!(Selection::FetchFailed { reason: "timeout".into() }.into_record().is_none());
        let found = Selection::Found { record: json!({}), height_cm: 1 };
        assert_eq!(found.into_record(), Some(json!({})));
    }
}
