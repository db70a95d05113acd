//! LLM-generated flavor text for match results.
//!
//! Two enrichments: a one-line intro per top match, and a short playful
//! interpretation of a free-text search shown while results load. Both are
//! best effort; callers show plain deck data when either fails.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::config::{LLM_GATEWAY_URL, LLM_MODEL};
use crate::error::{FinderError, Result};
use crate::matcher::MatchResult;
use crate::models::Deck;
use crate::quiz::{PathType, UserPreferences};

/// Number of top matches that get an intro line.
pub const INTRO_DECK_COUNT: usize = 3;

pub const DEFAULT_INTERPRETATION: &str = "Let's find your perfect deck!";

const INTRO_SYSTEM_PROMPT: &str = "You generate fun, personalized one-liner connections between user preferences and MTG decks. Always return valid JSON arrays.";
const INTERPRETATION_SYSTEM_PROMPT: &str = "You are a fun, enthusiastic assistant that creates playful interpretations of user searches.";

const CUSTOM_TEXT_EXAMPLES: &str = r#"Examples for custom text:
- For "rick and morty meets redwall" + Bloomburrow deck: "Chaotic woodland creatures = Rick's energy + Redwall vibes!"
- For "kitties, furbies, puppies" + squirrel deck: "Squirrels are basically fuzzy critters - close enough to furbies!"
- For "spooky but cute" + ghost deck: "Ghosts are spooky, and these ones are adorably ethereal!""#;

const BUTTON_EXAMPLES: &str = r#"Examples for button selections:
- User picked cute + squirrels: "You wanted cute squirrels - this is THE deck!"
- User picked creepy + vampires: "Classic creepy vampires, just like you asked!"
- User picked chaos archetype: "Maximum chaos, exactly what you're looking for!""#;

/// Input for [`FlavorClient::generate_deck_intros`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckIntroRequest {
    /// The top matches, best first. Only the first [`INTRO_DECK_COUNT`] are used.
    pub matches: Vec<Deck>,
    #[serde(default)]
    pub user_preferences: UserPreferences,
    #[serde(default)]
    pub path_type: PathType,
    pub custom_text: Option<String>,
    #[serde(default)]
    pub is_custom_input: bool,
}

impl DeckIntroRequest {
    pub fn from_matches(matches: &[MatchResult], prefs: &UserPreferences, path: PathType) -> Self {
        let custom_text = prefs.custom_text.clone().filter(|t| !t.trim().is_empty());
        Self {
            matches: matches
                .iter()
                .take(INTRO_DECK_COUNT)
                .map(|m| m.deck.clone())
                .collect(),
            user_preferences: prefs.clone(),
            path_type: path,
            is_custom_input: custom_text.is_some(),
            custom_text,
        }
    }

    fn custom_text(&self) -> Option<&str> {
        if !self.is_custom_input {
            return None;
        }
        self.custom_text.as_deref().filter(|t| !t.trim().is_empty())
    }

    fn user_context(&self) -> String {
        if let Some(text) = self.custom_text() {
            return format!("The user entered custom text: \"{}\"", text);
        }

        let prefs = &self.user_preferences;
        let mut context = String::new();
        match self.path_type {
            PathType::Vibes => {
                if let Some(vibe) = &prefs.vibe {
                    context.push_str(&format!("Vibe: {}. ", vibe));
                }
                if !prefs.creature_types.is_empty() {
                    context.push_str(&format!(
                        "Creature type: {}. ",
                        prefs.creature_types.join(", ")
                    ));
                }
            }
            PathType::Power => {
                if let Some(archetype) = &prefs.archetype {
                    context.push_str(&format!("Archetype: {}. ", archetype));
                }
                if let Some((min, max)) = prefs.power_level_range {
                    context.push_str(&format!("Power level: {}-{}. ", min, max));
                }
            }
            PathType::PopCulture => {}
        }
        context
    }
}

fn join_or_na<'a>(values: impl Iterator<Item = &'a String>) -> String {
    let joined = values.map(String::as_str).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "N/A".to_string()
    } else {
        joined
    }
}

fn describe_deck(index: usize, deck: &Deck) -> String {
    format!(
        "Deck {}: {}\n- Commander: {}\n- Themes: {}\n- Creature types: {}\n- Aesthetic: {}\n- IP: {}",
        index + 1,
        deck.name,
        deck.commander,
        join_or_na(deck.tags.themes.iter()),
        join_or_na(deck.tags.creature_types.primary.iter()),
        join_or_na(deck.tags.aesthetic_vibe.primary.iter()),
        deck.ip,
    )
}

/// The user prompt asking for one intro line per deck.
pub fn deck_intro_prompt(request: &DeckIntroRequest) -> String {
    let decks: Vec<&Deck> = request.matches.iter().take(INTRO_DECK_COUNT).collect();
    let descriptions = decks
        .iter()
        .enumerate()
        .map(|(i, deck)| describe_deck(i, deck))
        .collect::<Vec<_>>()
        .join("\n\n");
    let examples = if request.custom_text().is_some() {
        CUSTOM_TEXT_EXAMPLES
    } else {
        BUTTON_EXAMPLES
    };
    let n = decks.len();
    let format_line = (1..=n)
        .map(|i| format!("\"intro for deck {}\"", i))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{context}\n\nHere are the top {n} matching MTG decks:\n\n{descriptions}\n\n\
         Generate a personalized one-liner intro for each deck (under 15 words) that explains why it matches what the user wants. Be fun, specific, and enthusiastic!\n\n\
         {examples}\n\n\
         Return ONLY a JSON array with {n} strings, one intro per deck, in order.\n\
         Format: [{format_line}]",
        context = request.user_context(),
    )
}

/// The user prompt asking for a one-sentence take on a free-text search.
pub fn interpretation_prompt(custom_text: &str) -> String {
    format!(
        r#"Generate a fun, witty one-sentence interpretation of this Magic: The Gathering deck search request: "{}"

Keep it under 10 words, playful and excited. Use exclamation points!

Examples:
- Input: "kitties, furbies, puppies" → "Weird fuzzy critters? We're on it!"
- Input: "rick and morty meets redwall" → "Chaotic sci-fi + woodland animals? Challenge accepted!"
- Input: "spooky but cute" → "Creepy-cute vibes coming right up!"
- Input: "post-apocalyptic tech" → "Wasteland gadgets and gizmos? Let's find them!"

Return ONLY the interpretation sentence, nothing else."#,
        custom_text
    )
}

/// Strip a Markdown code fence (```` ```json ```` or bare ```` ``` ````) from
/// model output, returning the inner payload trimmed.
pub fn extract_json_payload(content: &str) -> &str {
    let content = content.trim();
    let inner = if let Some(start) = content.find("```json") {
        Some(&content[start + "```json".len()..])
    } else {
        content.find("```").map(|start| &content[start + 3..])
    };
    match inner {
        Some(rest) => match rest.find("```") {
            Some(end) => rest[..end].trim(),
            None => content,
        },
        None => content,
    }
}

// ---------------------------------------------------------------------------
// Chat-completions wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl ChatResponse {
    fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

// ---------------------------------------------------------------------------
// FlavorClient
// ---------------------------------------------------------------------------

/// Client for an OpenAI-compatible chat-completions gateway.
pub struct FlavorClient {
    api_key: Option<String>,
    gateway_url: String,
    model: String,
    timeout: Duration,
    client: Option<Client>,
}

impl FlavorClient {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            gateway_url: LLM_GATEWAY_URL.to_string(),
            model: LLM_MODEL.to_string(),
            timeout,
            client: None,
        }
    }

    pub fn with_gateway_url(mut self, url: impl Into<String>) -> Self {
        self.gateway_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Whether an API key is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn gateway_url(&self) -> &str {
        &self.gateway_url
    }

    fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder().timeout(self.timeout).build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| FinderError::Config("HTTP client unavailable".into()))
    }

    fn complete(&mut self, system: &str, prompt: &str) -> Result<Option<String>> {
        let api_key = self
            .api_key
            .clone()
            .ok_or_else(|| FinderError::Config("LLM API key not configured".into()))?;
        let url = self.gateway_url.clone();
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": prompt },
            ],
        });

        let resp = self.client()?.post(&url).bearer_auth(api_key).json(&body).send()?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %message, "LLM gateway error");
            return Err(match status.as_u16() {
                429 => FinderError::RateLimited,
                402 => FinderError::PaymentRequired,
                code => FinderError::Upstream {
                    status: code,
                    message,
                },
            });
        }

        let data: ChatResponse = resp.json()?;
        Ok(data.content().map(str::to_string))
    }

    /// One intro line per deck in `request.matches`, in order.
    pub fn generate_deck_intros(&mut self, request: &DeckIntroRequest) -> Result<Vec<String>> {
        let prompt = deck_intro_prompt(request);
        tracing::info!(
            decks = request.matches.len().min(INTRO_DECK_COUNT),
            custom = request.is_custom_input,
            "requesting deck intros"
        );
        let content = self
            .complete(INTRO_SYSTEM_PROMPT, &prompt)?
            .unwrap_or_else(|| "[]".to_string());
        tracing::debug!(response = %content, "deck intro response");
        let intros: Vec<String> = serde_json::from_str(extract_json_payload(&content))?;
        Ok(intros)
    }

    /// A short playful reading of a free-text search.
    pub fn generate_interpretation(&mut self, custom_text: &str) -> Result<String> {
        tracing::info!("requesting loading interpretation");
        let content = self.complete(INTERPRETATION_SYSTEM_PROMPT, &interpretation_prompt(custom_text))?;
        Ok(content.unwrap_or_else(|| DEFAULT_INTERPRETATION.to_string()))
    }

    pub fn close(&mut self) {
        self.client = None;
    }
}
