//! Quiz answers and the preference object the matcher scores against.

pub mod questions;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinderError;
use crate::models::Color;
use crate::synonyms::normalize_creature_type;
use questions::{
    creature_quick_selects, power_level_range, quick_select_label, ARCHETYPE_QUESTION_ID,
    COLORS_QUESTION_ID, CREATURE_QUESTION_ID, POWER_LEVEL_QUESTION_ID, SKIP_ANSWER,
    VIBE_QUESTION_ID,
};

// ---------------------------------------------------------------------------
// PathType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PathType {
    #[default]
    Vibes,
    Power,
    PopCulture,
}

impl FromStr for PathType {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vibes" => Ok(PathType::Vibes),
            "power" => Ok(PathType::Power),
            "pop_culture" => Ok(PathType::PopCulture),
            other => Err(FinderError::InvalidArgument(format!(
                "Unknown quiz path: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PathType::Vibes => "vibes",
            PathType::Power => "power",
            PathType::PopCulture => "pop_culture",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// QuizAnswer
// ---------------------------------------------------------------------------

/// A single answer id, or several for checkbox questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multi(Vec<String>),
}

impl AnswerValue {
    pub fn values(&self) -> Vec<&str> {
        match self {
            AnswerValue::Single(s) => vec![s.as_str()],
            AnswerValue::Multi(v) => v.iter().map(String::as_str).collect(),
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            AnswerValue::Single(s) => Some(s.as_str()),
            AnswerValue::Multi(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    pub question_id: String,
    pub answer_id: AnswerValue,
}

impl QuizAnswer {
    pub fn single(question_id: &str, answer: &str) -> Self {
        Self {
            question_id: question_id.to_string(),
            answer_id: AnswerValue::Single(answer.to_string()),
        }
    }

    pub fn multi(question_id: &str, answers: &[&str]) -> Self {
        Self {
            question_id: question_id.to_string(),
            answer_id: AnswerValue::Multi(answers.iter().map(|a| a.to_string()).collect()),
        }
    }
}

fn find_answer<'a>(answers: &'a [QuizAnswer], question_id: &str) -> Option<&'a QuizAnswer> {
    answers.iter().find(|a| a.question_id == question_id)
}

// ---------------------------------------------------------------------------
// UserPreferences
// ---------------------------------------------------------------------------

/// Everything the matcher knows about what the user wants.
///
/// Which fields are populated depends on the quiz path; every field is
/// optional and an empty object is a valid input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub vibe: Option<String>,
    #[serde(default)]
    pub creature_types: Vec<String>,
    pub custom_text: Option<String>,
    pub archetype: Option<String>,
    /// Inclusive `(min, max)` power level.
    pub power_level_range: Option<(u8, u8)>,
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(rename = "selectedIP")]
    pub selected_ip: Option<String>,
}

impl UserPreferences {
    pub fn is_empty(&self) -> bool {
        self.vibe.is_none()
            && self.creature_types.is_empty()
            && self.custom_text.is_none()
            && self.archetype.is_none()
            && self.power_level_range.is_none()
            && self.colors.is_empty()
            && self.selected_ip.is_none()
    }

    /// Build preferences from the answers collected on a quiz path.
    ///
    /// `selected_ip` is only kept on the pop-culture path.
    pub fn from_answers(path: PathType, answers: &[QuizAnswer], selected_ip: Option<&str>) -> Self {
        let mut prefs = UserPreferences::default();

        if let Some(vibe) = find_answer(answers, VIBE_QUESTION_ID).and_then(|a| a.answer_id.as_single()) {
            prefs.vibe = Some(vibe.to_string());
        }

        if let Some(answer) = find_answer(answers, CREATURE_QUESTION_ID) {
            match &answer.answer_id {
                AnswerValue::Multi(selected) => {
                    for value in selected {
                        push_creature(&mut prefs.creature_types, value);
                    }
                }
                AnswerValue::Single(value) if value != SKIP_ANSWER && !value.trim().is_empty() => {
                    let quick_selects = prefs
                        .vibe
                        .as_deref()
                        .map(creature_quick_selects)
                        .unwrap_or(&[]);
                    if quick_selects.contains(&value.as_str()) {
                        for creature in quick_select_creatures(value) {
                            if !prefs.creature_types.contains(&creature) {
                                prefs.creature_types.push(creature);
                            }
                        }
                    } else {
                        prefs.custom_text = Some(value.clone());
                    }
                }
                AnswerValue::Single(_) => {}
            }
        }

        if let Some(archetype) =
            find_answer(answers, ARCHETYPE_QUESTION_ID).and_then(|a| a.answer_id.as_single())
        {
            prefs.archetype = Some(archetype.to_string());
        }

        if let Some(option) =
            find_answer(answers, POWER_LEVEL_QUESTION_ID).and_then(|a| a.answer_id.as_single())
        {
            prefs.power_level_range = power_level_range(option);
        }

        if let Some(answer) = find_answer(answers, COLORS_QUESTION_ID) {
            for value in answer.answer_id.values() {
                if let Ok(color) = value.parse::<Color>() {
                    if !prefs.colors.contains(&color) {
                        prefs.colors.push(color);
                    }
                }
            }
        }

        if path == PathType::PopCulture {
            prefs.selected_ip = selected_ip.map(str::to_string);
        }

        prefs
    }
}

fn push_creature(list: &mut Vec<String>, value: &str) {
    let creature = normalize_creature_type(value);
    if !creature.is_empty() && !list.contains(&creature) {
        list.push(creature);
    }
}

/// Canonical creature types named by a quick-select answer.
///
/// The label (text before `" ("`) is split on `&` and the last word of each
/// part is normalized, dropping duplicates: `"Ghosts & Spirits (...)"` yields
/// `["spirit"]`, `"Legendary Heroes (...)"` yields `["hero"]`.
pub fn quick_select_creatures(quick_select: &str) -> Vec<String> {
    let mut creatures = Vec::new();
    for part in quick_select_label(quick_select).split('&') {
        if let Some(word) = part.split_whitespace().last() {
            push_creature(&mut creatures, word);
        }
    }
    creatures
}

/// The free text the user typed into the creature question, if any.
///
/// Quick-select answers and the skip answer are not custom text.
pub fn detect_custom_text(answers: &[QuizAnswer]) -> Option<String> {
    UserPreferences::from_answers(PathType::Vibes, answers, None).custom_text
}
