//! Checks that every quiz option can actually match decks in the catalog.

use serde::Serialize;
use std::fmt;

use crate::models::{Deck, TagList};
use crate::quiz::questions::{
    quick_select_label, ARCHETYPE_OPTIONS, CREATURE_QUICK_SELECTS, SKIP_ANSWER, VIBE_OPTIONS,
};
use crate::quiz::quick_select_creatures;
use crate::synonyms::{do_archetypes_match, do_creature_types_match, do_vibes_match};

/// Vibe and archetype options matching fewer decks than this are flagged.
pub const MIN_DECKS_PER_OPTION: usize = 5;
/// Creature quick-selects matching fewer decks than this are flagged.
pub const MIN_DECKS_PER_CREATURE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationStatus {
    Error,
    Warning,
    Ok,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub category: String,
    pub option: String,
    pub match_count: usize,
    pub status: ValidationStatus,
    pub message: String,
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.category, self.option, self.message)
    }
}

/// Results ordered errors first, then warnings, then passing options.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        self.results
            .iter()
            .any(|r| r.status == ValidationStatus::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationResult> {
        self.with_status(ValidationStatus::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationResult> {
        self.with_status(ValidationStatus::Warning)
    }

    pub fn passed(&self) -> impl Iterator<Item = &ValidationResult> {
        self.with_status(ValidationStatus::Ok)
    }

    fn with_status(&self, status: ValidationStatus) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(move |r| r.status == status)
    }
}

fn status_for(count: usize, minimum: usize) -> ValidationStatus {
    if count == 0 {
        ValidationStatus::Error
    } else if count < minimum {
        ValidationStatus::Warning
    } else {
        ValidationStatus::Ok
    }
}

fn count_matching<F>(decks: &[Deck], tags: impl Fn(&Deck) -> &TagList, matches: F) -> usize
where
    F: Fn(&str) -> bool,
{
    decks
        .iter()
        .filter(|&deck| tags(deck).iter().any(|tag| matches(tag.as_str())))
        .count()
}

fn option_result(
    category: &str,
    option: &str,
    option_id: &str,
    what: &str,
    count: usize,
    minimum: usize,
) -> ValidationResult {
    let status = status_for(count, minimum);
    let message = match status {
        ValidationStatus::Error => format!("ZERO decks match \"{}\"{}", option_id, what),
        ValidationStatus::Warning => format!(
            "Only {} deck(s) match - consider if this is enough",
            count
        ),
        ValidationStatus::Ok => format!("{} decks found", count),
    };
    ValidationResult {
        category: category.to_string(),
        option: option.to_string(),
        match_count: count,
        status,
        message,
    }
}

/// Count the decks each vibe, creature quick-select and archetype option
/// would match.
pub fn validate_quiz_options(decks: &[Deck]) -> ValidationReport {
    let mut results = Vec::new();

    for option in VIBE_OPTIONS {
        let count = count_matching(decks, |d| &d.tags.aesthetic_vibe, |tag| {
            do_vibes_match(option.id, tag)
        });
        results.push(option_result(
            "vibes",
            option.title,
            option.id,
            " vibe",
            count,
            MIN_DECKS_PER_OPTION,
        ));
    }

    for (vibe, quick_selects) in CREATURE_QUICK_SELECTS {
        let category = format!("{} creatures", vibe);
        for quick_select in quick_selects.iter().filter(|q| **q != SKIP_ANSWER) {
            let creatures = quick_select_creatures(quick_select);
            let count = count_matching(decks, |d| &d.tags.creature_types, |tag| {
                creatures.iter().any(|c| do_creature_types_match(c, tag))
            });
            results.push(option_result(
                &category,
                quick_select_label(quick_select),
                &creatures.join(" & "),
                "",
                count,
                MIN_DECKS_PER_CREATURE,
            ));
        }
    }

    for option in ARCHETYPE_OPTIONS {
        let count = count_matching(decks, |d| &d.tags.archetype, |tag| {
            do_archetypes_match(option.id, tag)
        });
        results.push(option_result(
            "archetypes",
            option.title,
            option.id,
            " archetype",
            count,
            MIN_DECKS_PER_OPTION,
        ));
    }

    // Stable, so options keep their vocabulary order within a status.
    results.sort_by_key(|r| r.status);

    let report = ValidationReport { results };
    tracing::info!(
        checked = report.results.len(),
        errors = report.errors().count(),
        warnings = report.warnings().count(),
        "validated quiz options"
    );
    report
}
