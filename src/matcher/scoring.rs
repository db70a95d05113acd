//! Point values and per-category scoring against a deck's `TagList`.

use crate::models::TagList;

pub const PRIMARY_POINTS: u32 = 10;
pub const SECONDARY_POINTS: u32 = 7;
pub const BOTH_LISTS_BONUS: u32 = 3;

pub const FUZZY_PRIMARY_POINTS: u32 = 5;
pub const FUZZY_SECONDARY_POINTS: u32 = 3;
/// Minimum normalized Levenshtein similarity for a fuzzy tag hit.
pub const FUZZY_THRESHOLD: f64 = 0.8;

pub const CREATURE_PAIR_BONUS: u32 = 5;
pub const CREATURE_TRIPLE_BONUS: u32 = 10;

pub const FRANCHISE_POINTS: u32 = 10;

pub const POWER_EXACT_POINTS: u32 = 8;
pub const POWER_ADJACENT_POINTS: u32 = 4;
pub const SHARED_COLOR_POINTS: u32 = 3;
pub const COLOR_SUBSET_BONUS: u32 = 5;

/// Power levels treated as the ideal onboarding range on the franchise path.
pub const ONBOARDING_POWER_LEVELS: [u8; 2] = [6, 7];
pub const ONBOARDING_BONUS: u32 = 5;

pub type Normalizer = fn(&str) -> String;

/// Outcome of scoring one wanted token against one tag category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryScore {
    pub points: u32,
    pub primary: bool,
    pub secondary: bool,
    pub fuzzy: bool,
}

impl CategoryScore {
    pub fn matched(&self) -> bool {
        self.primary || self.secondary || self.fuzzy
    }
}

fn contains(list: &[String], wanted: &str, normalize: Normalizer) -> bool {
    list.iter().any(|tag| normalize(tag) == wanted)
}

fn best_similarity(list: &[String], wanted: &str, normalize: Normalizer) -> f64 {
    list.iter()
        .map(|tag| strsim::normalized_levenshtein(&normalize(tag), wanted))
        .fold(0.0, f64::max)
}

/// Score a normalized `wanted` token against a category.
///
/// Exact (post-normalization) hits earn primary/secondary points plus a bonus
/// when both lists hit. With `fuzzy` set and no exact hit, the closest tag by
/// Levenshtein ratio earns the smaller fuzzy points instead.
pub fn score_category(
    wanted: &str,
    tags: &TagList,
    normalize: Normalizer,
    fuzzy: bool,
) -> CategoryScore {
    let mut score = CategoryScore {
        primary: contains(&tags.primary, wanted, normalize),
        secondary: contains(&tags.secondary, wanted, normalize),
        ..Default::default()
    };

    if score.primary {
        score.points += PRIMARY_POINTS;
    }
    if score.secondary {
        score.points += SECONDARY_POINTS;
    }
    if score.primary && score.secondary {
        score.points += BOTH_LISTS_BONUS;
    }

    if fuzzy && !score.primary && !score.secondary {
        if best_similarity(&tags.primary, wanted, normalize) >= FUZZY_THRESHOLD {
            score.points += FUZZY_PRIMARY_POINTS;
            score.fuzzy = true;
        } else if best_similarity(&tags.secondary, wanted, normalize) >= FUZZY_THRESHOLD {
            score.points += FUZZY_SECONDARY_POINTS;
            score.fuzzy = true;
        }
    }

    score
}

/// Bonus for several wanted creature types landing on the same deck.
pub fn creature_multi_bonus(matched: usize) -> u32 {
    match matched {
        0 | 1 => 0,
        2 => CREATURE_PAIR_BONUS,
        _ => CREATURE_TRIPLE_BONUS,
    }
}

/// Points for a deck's power level against an inclusive preferred range.
pub fn power_level_points(level: u8, (min, max): (u8, u8)) -> u32 {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    if (min..=max).contains(&level) {
        POWER_EXACT_POINTS
    } else if level.saturating_add(1) == min || level == max.saturating_add(1) {
        POWER_ADJACENT_POINTS
    } else {
        0
    }
}
