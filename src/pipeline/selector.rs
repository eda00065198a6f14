//! Filter-and-select over raw catalog records.
//!
//! Every field read is an optional lookup with a default, so a malformed
//! record can only ever be excluded, never abort the run.

use tracing::debug;

use crate::constants::{
    APPEARANCE_FIELD, CENTIMETRE_SUFFIX, GENDER_FIELD, HEIGHT_FIELD, METRIC_HEIGHT_INDEX,
    NO_OCCUPATION, OCCUPATION_FIELD, WORK_FIELD,
};
use crate::types::{Candidate, CatalogStats, CharacterRecord};

/// Look up `section.field` as a string, treating anything else as absent.
fn nested_str<'a>(record: &'a CharacterRecord, section: &str, field: &str) -> Option<&'a str> {
    record.get(section)?.get(field)?.as_str()
}

/// `appearance.gender`, empty when missing or not a string
pub fn extract_gender(record: &CharacterRecord) -> &str {
    nested_str(record, APPEARANCE_FIELD, GENDER_FIELD).unwrap_or("")
}

/// `work.occupation` with surrounding whitespace removed, empty when missing
pub fn extract_occupation(record: &CharacterRecord) -> &str {
    nested_str(record, WORK_FIELD, OCCUPATION_FIELD)
        .unwrap_or("")
        .trim()
}

/// Height in centimetres from the second entry of `appearance.height`.
pub fn extract_height_cm(record: &CharacterRecord) -> Option<u64> {
    let metric = record
        .get(APPEARANCE_FIELD)?
        .get(HEIGHT_FIELD)?
        .as_array()?
        .get(METRIC_HEIGHT_INDEX)?
        .as_str()?;
    parse_height_cm(metric)
}

/// Parse `"<integer> cm"`; a bare integer is accepted as well.
pub fn parse_height_cm(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix(CENTIMETRE_SUFFIX).unwrap_or(trimmed);
    number.trim().parse::<u64>().ok()
}

pub fn has_occupation(occupation: &str) -> bool {
    !occupation.is_empty() && occupation != NO_OCCUPATION
}

pub fn matches_gender(record: &CharacterRecord, gender: &str) -> bool {
    extract_gender(record).to_lowercase() == gender.to_lowercase()
}

pub fn matches_work(record: &CharacterRecord, requires_work: bool) -> bool {
    has_occupation(extract_occupation(record)) == requires_work
}

/// Records passing both filters with a measurable height, in input order.
pub fn collect_candidates<'a>(
    records: &'a [CharacterRecord],
    gender: &str,
    requires_work: bool,
) -> Vec<Candidate<'a>> {
    let mut candidates = Vec::new();

    for (index, record) in records.iter().enumerate() {
        if !matches_gender(record, gender) {
            continue;
        }
        if !matches_work(record, requires_work) {
            continue;
        }
        match extract_height_cm(record) {
            Some(height_cm) => candidates.push(Candidate { record, height_cm }),
            None => debug!(index, "Skipping record without a measurable height"),
        }
    }

    candidates
}

/// Tallest candidate; on equal heights the earliest one wins.
pub fn tallest<'a>(candidates: &[Candidate<'a>]) -> Option<Candidate<'a>> {
    candidates.iter().copied().fold(None, |best, candidate| match best {
        Some(current) if current.height_cm >= candidate.height_cm => Some(current),
        _ => Some(candidate),
    })
}

/// Tallest record matching `gender` (case-insensitive) and the work filter.
///
/// With `requires_work` set, only records with a concrete occupation qualify;
/// without it, only records whose occupation is empty, missing or `"-"`.
pub fn select_tallest<'a>(
    records: &'a [CharacterRecord],
    gender: &str,
    requires_work: bool,
) -> Option<&'a CharacterRecord> {
    tallest(&collect_candidates(records, gender, requires_work)).map(|c| c.record)
}

pub fn catalog_stats(records: &[CharacterRecord]) -> CatalogStats {
    records.iter().fold(CatalogStats::default(), |mut stats, record| {
        stats.total += 1;
        if extract_height_cm(record).is_some() {
            stats.measurable += 1;
        }
        if has_occupation(extract_occupation(record)) {
            stats.employed += 1;
        }
        stats
    })
}
