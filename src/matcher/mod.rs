//! Deck matching: scores every precon against a user's quiz preferences.
//!
//! Scoring is a weighted sum over overlapping tag categories (vibe, creature
//! type, theme, archetype), plus power-level and color bonuses on the power
//! path and an onboarding bonus on the franchise path. Each result also gets a
//! tie-breaker (tag coverage, recency and random jitter) that only affects
//! ordering; match percentages are computed from the raw score alone.
//!
//! The jitter keeps repeated visits from showing an identical list. Pass a
//! seeded RNG to [`match_precons_with_rng`] for reproducible output.

pub mod scoring;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{BASE_GAME_IP, MAX_RESULTS};
use crate::models::Deck;
use crate::parser::parse_custom_input;
use crate::quiz::{PathType, UserPreferences};
use crate::synonyms::{normalize_archetype, normalize_creature_type, normalize_theme, normalize_vibe};
use scoring::{
    creature_multi_bonus, power_level_points, score_category, COLOR_SUBSET_BONUS,
    FRANCHISE_POINTS, ONBOARDING_BONUS, ONBOARDING_POWER_LEVELS, SHARED_COLOR_POINTS,
};

/// Tie-breaker weight per populated tag category.
const TAG_CATEGORY_WEIGHT: f64 = 0.5;
/// Release years at or before this add no recency weight.
const RECENCY_BASE_YEAR: u16 = 2010;
const RECENCY_WEIGHT_PER_YEAR: f64 = 0.1;
/// Upper bound (exclusive) of the random jitter.
const JITTER_MAX: f64 = 2.0;

/// Franchise selections that mean "no crossover, just regular Magic".
const BASE_GAME_SELECTIONS: [&str; 3] = ["original", "skip", BASE_GAME_IP];

// ---------------------------------------------------------------------------
// MatchResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub deck: Deck,
    /// Sum of preference points; the basis for `match_percentage`.
    pub raw_score: u32,
    /// `raw_score` plus the tie-breaker; results are sorted by this.
    pub sort_score: f64,
    pub match_percentage: u8,
    pub reasons: Vec<String>,
}

// ---------------------------------------------------------------------------
// Wanted tokens
// ---------------------------------------------------------------------------

/// Normalized, deduplicated tokens gathered from explicit answers and any
/// free text.
#[derive(Debug, Default)]
struct Wanted {
    vibes: Vec<String>,
    creatures: Vec<String>,
    themes: Vec<String>,
    ips: Vec<String>,
    archetype: Option<String>,
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !value.is_empty() && !list.contains(&value) {
        list.push(value);
    }
}

impl Wanted {
    fn from_preferences(prefs: &UserPreferences) -> Self {
        let mut wanted = Wanted::default();

        if let Some(vibe) = &prefs.vibe {
            push_unique(&mut wanted.vibes, normalize_vibe(vibe));
        }
        for creature in &prefs.creature_types {
            push_unique(&mut wanted.creatures, normalize_creature_type(creature));
        }

        if let Some(text) = prefs.custom_text.as_deref().filter(|t| !t.trim().is_empty()) {
            let parsed = parse_custom_input(text);
            for vibe in &parsed.vibes {
                push_unique(&mut wanted.vibes, normalize_vibe(vibe));
            }
            for creature in &parsed.creature_types {
                push_unique(&mut wanted.creatures, normalize_creature_type(creature));
            }
            for theme in &parsed.themes {
                push_unique(&mut wanted.themes, normalize_theme(theme));
            }
            for ip in parsed.ips {
                push_unique(&mut wanted.ips, ip);
            }
        }

        wanted.archetype = prefs
            .archetype
            .as_deref()
            .map(normalize_archetype)
            .filter(|a| !a.is_empty());

        wanted
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Score and rank decks with the thread-local RNG supplying the jitter.
pub fn match_precons(decks: &[Deck], prefs: &UserPreferences, path: PathType) -> Vec<MatchResult> {
    match_precons_with_rng(decks, prefs, path, &mut rand::thread_rng())
}

/// Score and rank decks using `rng` for the tie-breaker jitter.
///
/// Returns at most 15 results, best first. An empty deck list (or a franchise
/// filter that removes every deck) yields an empty vector.
pub fn match_precons_with_rng<R: Rng>(
    decks: &[Deck],
    prefs: &UserPreferences,
    path: PathType,
    rng: &mut R,
) -> Vec<MatchResult> {
    let wanted = Wanted::from_preferences(prefs);

    let mut results: Vec<MatchResult> = candidates(decks, prefs, path)
        .map(|deck| {
            let (raw_score, reasons) = score_deck(deck, &wanted, prefs, path);
            let sort_score = f64::from(raw_score) + tie_breaker(deck, rng);
            MatchResult {
                deck: deck.clone(),
                raw_score,
                sort_score,
                match_percentage: 0,
                reasons,
            }
        })
        .collect();

    let max_raw = results.iter().map(|r| r.raw_score).max().unwrap_or(0);
    for result in &mut results {
        result.match_percentage = match_percentage(result.raw_score, max_raw);
    }

    results.sort_by(|a, b| b.sort_score.total_cmp(&a.sort_score));
    results.truncate(MAX_RESULTS);

    tracing::debug!(
        path = %path,
        candidates = decks.len(),
        returned = results.len(),
        max_raw,
        "matched precons"
    );

    results
}

/// Percentage of the best raw score, rounded and capped at 100.
///
/// Returns 0 when no candidate scored any points.
pub fn match_percentage(raw_score: u32, max_raw: u32) -> u8 {
    if max_raw == 0 {
        return 0;
    }
    let pct = (100.0 * f64::from(raw_score) / f64::from(max_raw)).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Ordering-only addend: tag coverage, recency and jitter in `[0, 2)`.
pub fn tie_breaker<R: Rng>(deck: &Deck, rng: &mut R) -> f64 {
    let coverage = deck.tags.populated_categories() as f64 * TAG_CATEGORY_WEIGHT;
    let recency = f64::from(deck.year.saturating_sub(RECENCY_BASE_YEAR)) * RECENCY_WEIGHT_PER_YEAR;
    let jitter = rng.gen_range(0.0..JITTER_MAX);
    coverage + recency + jitter
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Decks eligible for scoring; the franchise path is a hard filter.
fn candidates<'a>(
    decks: &'a [Deck],
    prefs: &'a UserPreferences,
    path: PathType,
) -> impl Iterator<Item = &'a Deck> + 'a {
    let franchise = match (path, prefs.selected_ip.as_deref()) {
        (PathType::PopCulture, Some(ip)) if BASE_GAME_SELECTIONS.contains(&ip) => Some(BASE_GAME_IP),
        (PathType::PopCulture, Some(ip)) => Some(ip),
        _ => None,
    };
    decks
        .iter()
        .filter(move |deck| franchise.map_or(true, |ip| deck.ip == ip))
}

fn score_deck(
    deck: &Deck,
    wanted: &Wanted,
    prefs: &UserPreferences,
    path: PathType,
) -> (u32, Vec<String>) {
    let tags = &deck.tags;
    let mut score = 0u32;
    let mut reasons = Vec::new();

    for vibe in &wanted.vibes {
        let hit = score_category(vibe, &tags.aesthetic_vibe, normalize_vibe, false);
        score += hit.points;
        if hit.primary {
            reasons.push(format!("Perfect {} vibe", vibe));
        }
    }

    let mut creature_matches = 0usize;
    for creature in &wanted.creatures {
        let hit = score_category(creature, &tags.creature_types, normalize_creature_type, true);
        score += hit.points;
        if hit.matched() {
            creature_matches += 1;
        }
        if hit.primary {
            reasons.push(format!("Focuses on {}s", creature));
        }
    }
    score += creature_multi_bonus(creature_matches);

    for theme in &wanted.themes {
        let hit = score_category(theme, &tags.themes, normalize_theme, false);
        score += hit.points;
        if hit.primary {
            reasons.push(format!("Built around {}", theme));
        }
    }

    if wanted.ips.iter().any(|ip| *ip == deck.ip) {
        score += FRANCHISE_POINTS;
    }

    match path {
        PathType::Power => {
            if let Some(archetype) = &wanted.archetype {
                let hit = score_category(archetype, &tags.archetype, normalize_archetype, true);
                score += hit.points;
                if hit.primary {
                    reasons.push(format!("{} strategy", capitalize(archetype)));
                }
            }
            if let (Some(level), Some(range)) = (tags.power_level, prefs.power_level_range) {
                score += power_level_points(level, range);
            }
            score += color_points(deck, prefs);
        }
        PathType::PopCulture => {
            if tags
                .power_level
                .is_some_and(|level| ONBOARDING_POWER_LEVELS.contains(&level))
            {
                score += ONBOARDING_BONUS;
            }
        }
        PathType::Vibes => {}
    }

    if let Some(level) = tags.power_level {
        reasons.push(format!("Power level {}/10", level));
    }
    reasons.push(format!(
        "{} to play",
        tags.complexity.as_deref().unwrap_or("moderate")
    ));

    (score, reasons)
}

fn color_points(deck: &Deck, prefs: &UserPreferences) -> u32 {
    if prefs.colors.is_empty() {
        return 0;
    }
    let shared = deck
        .colors
        .iter()
        .filter(|c| prefs.colors.contains(c))
        .count() as u32;
    let mut points = shared * SHARED_COLOR_POINTS;
    if !deck.colors.is_empty() && shared as usize == deck.colors.len() {
        points += COLOR_SUBSET_BONUS;
    }
    points
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
