//! Free-text preference parser.
//!
//! Turns a sentence like `"rick and morty meets redwall"` into canonical vibe,
//! creature type, theme and franchise tokens. Matching is plain substring
//! containment on the lower-cased text: multi-word phrases are checked first,
//! then the single-keyword tables. There is no tokenizer, negation, or
//! quantifier handling.

use serde::{Deserialize, Serialize};

/// Canonical hits found in a piece of free text, deduplicated per category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCustomInput {
    pub vibes: Vec<String>,
    pub creature_types: Vec<String>,
    pub themes: Vec<String>,
    pub ips: Vec<String>,
    pub raw_text: String,
}

impl ParsedCustomInput {
    pub fn is_empty(&self) -> bool {
        self.vibes.is_empty()
            && self.creature_types.is_empty()
            && self.themes.is_empty()
            && self.ips.is_empty()
    }
}

struct Phrase {
    phrase: &'static str,
    vibe: Option<&'static str>,
    theme: Option<&'static str>,
    ip: Option<&'static str>,
}

const fn franchise(phrase: &'static str, ip: &'static str) -> Phrase {
    Phrase {
        phrase,
        vibe: None,
        theme: None,
        ip: Some(ip),
    }
}

const PHRASES: &[Phrase] = &[
    Phrase {
        phrase: "rick and morty",
        vibe: Some("chaotic"),
        theme: Some("sci-fi"),
        ip: None,
    },
    franchise("lord of the rings", "lord_of_the_rings"),
    franchise("warhammer", "warhammer_40k"),
    franchise("fallout", "fallout"),
    franchise("post-apocalyptic", "fallout"),
    franchise("wasteland", "fallout"),
    franchise("walking dead", "walking_dead"),
    franchise("negan", "walking_dead"),
    franchise("stranger things", "stranger_things"),
    franchise("mind flayer", "stranger_things"),
    franchise("demogorgon", "stranger_things"),
    franchise("transformers", "transformers"),
    franchise("optimus", "transformers"),
    franchise("megatron", "transformers"),
    franchise("street fighter", "street_fighter"),
    franchise("chun li", "street_fighter"),
    franchise("ryu", "street_fighter"),
    franchise("hadouken", "street_fighter"),
    franchise("fortnite", "fortnite"),
    franchise("battle royale", "fortnite"),
    franchise("jurassic", "jurassic_world"),
    franchise("jurassic park", "jurassic_world"),
    franchise("jurassic world", "jurassic_world"),
    franchise("dinosaur", "jurassic_world"),
    franchise("doctor who", "doctor_who"),
    franchise("tardis", "doctor_who"),
    franchise("time lord", "doctor_who"),
    franchise("monty python", "monty_python"),
    franchise("black knight", "monty_python"),
    franchise("holy grail", "monty_python"),
    franchise("princess bride", "princess_bride"),
    franchise("inigo", "princess_bride"),
    franchise("inconceivable", "princess_bride"),
    franchise("godzilla", "godzilla"),
    franchise("kaiju", "godzilla"),
    franchise("final fantasy", "final_fantasy"),
];

const VIBE_KEYWORDS: &[(&str, &str)] = &[
    ("cute", "cute"),
    ("cuddly", "cute"),
    ("adorable", "cute"),
    ("fuzzy", "cute"),
    ("creepy", "creepy"),
    ("scary", "creepy"),
    ("spooky", "creepy"),
    ("dark", "creepy"),
    ("whimsical", "whimsical"),
    ("magical", "whimsical"),
    ("fairy", "whimsical"),
    ("chaos", "chaotic"),
    ("chaotic", "chaotic"),
    ("random", "chaotic"),
    ("unpredictable", "chaotic"),
    ("funny", "chaotic"),
    ("epic", "epic"),
    ("heroic", "epic"),
    ("legendary", "epic"),
    ("nature", "nature"),
    ("wild", "nature"),
    ("primal", "nature"),
];

const CREATURE_KEYWORDS: &[(&str, &str)] = &[
    ("dragon", "dragon"),
    ("dragons", "dragon"),
    ("elf", "elf"),
    ("elves", "elf"),
    ("zombie", "zombie"),
    ("zombies", "zombie"),
    ("vampire", "vampire"),
    ("vampires", "vampire"),
    ("squirrel", "squirrel"),
    ("squirrels", "squirrel"),
    ("cat", "cat"),
    ("cats", "cat"),
    ("kitty", "cat"),
    ("kitties", "cat"),
    ("feline", "cat"),
    ("dog", "dog"),
    ("dogs", "dog"),
    ("puppy", "dog"),
    ("puppies", "dog"),
    ("hound", "dog"),
    ("bear", "bear"),
    ("bears", "bear"),
    ("rat", "rat"),
    ("rats", "rat"),
    ("rodent", "rat"),
    ("ninja", "ninja"),
    ("ninjas", "ninja"),
    ("pirate", "pirate"),
    ("pirates", "pirate"),
    ("werewolf", "werewolf"),
    ("werewolves", "werewolf"),
    ("wolf", "werewolf"),
    ("wolves", "werewolf"),
    ("phoenix", "phoenix"),
    ("phoenixes", "phoenix"),
    ("scarecrow", "scarecrow"),
    ("scarecrows", "scarecrow"),
    ("ooze", "ooze"),
    ("oozes", "ooze"),
    ("slime", "ooze"),
    ("spider", "spider"),
    ("spiders", "spider"),
    ("arachnid", "spider"),
    ("skeleton", "skeleton"),
    ("skeletons", "skeleton"),
    ("bones", "skeleton"),
    ("clown", "performer"),
    ("clowns", "performer"),
    ("circus", "performer"),
    ("performer", "performer"),
    ("robot", "robot"),
    ("robots", "robot"),
    ("myr", "robot"),
    ("construct", "robot"),
    ("fungi", "fungus"),
    ("fungus", "fungus"),
    ("mushroom", "fungus"),
    ("furby", "small creatures"),
    ("furbies", "small creatures"),
    ("creature", "animals"),
    ("creatures", "animals"),
    ("animal", "animals"),
    ("animals", "animals"),
    ("rabbit", "rabbit"),
    ("rabbits", "rabbit"),
    ("bunny", "rabbit"),
    ("bunnies", "rabbit"),
];

const THEME_KEYWORDS: &[(&str, &str)] = &[
    ("tech", "artifacts"),
    ("technology", "artifacts"),
    ("science", "artifacts"),
    ("artifact", "artifacts"),
    ("artifacts", "artifacts"),
    ("magic", "spellslinging"),
    ("spells", "spellslinging"),
    ("spell", "spellslinging"),
    ("dead", "graveyard"),
    ("graveyard", "graveyard"),
    ("steal", "stealing"),
    ("theft", "stealing"),
    ("tokens", "tokens"),
    ("token", "tokens"),
    ("counters", "+1/+1 counters"),
    ("enchantments", "enchantments"),
    ("enchantment", "enchantments"),
];

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

fn scan_keywords(text: &str, table: &[(&str, &str)], out: &mut Vec<String>) {
    for (keyword, canonical) in table {
        if text.contains(keyword) {
            push_unique(out, canonical);
        }
    }
}

/// Parse free text into canonical preference tokens.
pub fn parse_custom_input(text: &str) -> ParsedCustomInput {
    let lower = text.to_lowercase();
    let mut parsed = ParsedCustomInput {
        raw_text: text.to_string(),
        ..Default::default()
    };

    for phrase in PHRASES {
        if !lower.contains(phrase.phrase) {
            continue;
        }
        if let Some(vibe) = phrase.vibe {
            push_unique(&mut parsed.vibes, vibe);
        }
        if let Some(theme) = phrase.theme {
            push_unique(&mut parsed.themes, theme);
        }
        if let Some(ip) = phrase.ip {
            push_unique(&mut parsed.ips, ip);
        }
    }

    scan_keywords(&lower, VIBE_KEYWORDS, &mut parsed.vibes);
    scan_keywords(&lower, CREATURE_KEYWORDS, &mut parsed.creature_types);
    scan_keywords(&lower, THEME_KEYWORDS, &mut parsed.themes);

    parsed
}
