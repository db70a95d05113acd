//! Tag normalization for creature types, vibes and archetypes.
//!
//! Each table maps a canonical token to every spelling that should be treated
//! as the same tag (plurals, nicknames, near-synonyms). Reverse lookup maps are
//! built on first use. Unmapped input normalizes to its lower-cased self, so
//! novel tokens only ever match by exact string equality.

use std::collections::HashMap;
use std::sync::LazyLock;

type SynonymTable = &'static [(&'static str, &'static [&'static str])];

const CREATURE_TYPE_SYNONYMS: SynonymTable = &[
    // cute
    ("squirrel", &["squirrel", "squirrels"]),
    ("rabbit", &["rabbit", "rabbits", "bunny", "bunnies"]),
    ("dog", &["dog", "dogs", "puppy", "puppies", "hound", "canine"]),
    ("cat", &["cat", "cats", "kitty", "kitties", "feline", "kitten"]),
    ("bear", &["bear", "bears"]),
    // creepy
    ("vampire", &["vampire", "vampires"]),
    ("zombie", &["zombie", "zombies", "undead"]),
    ("demon", &["demon", "demons", "demonic"]),
    ("spirit", &["spirit", "spirits", "ghost", "ghosts"]),
    ("rat", &["rat", "rats", "rodent", "rodents"]),
    ("spider", &["spider", "spiders", "arachnid"]),
    ("skeleton", &["skeleton", "skeletons"]),
    ("horror", &["horror", "horrors"]),
    ("bat", &["bat", "bats"]),
    ("werewolf", &["werewolf", "werewolves", "wolf", "wolves", "lycanthrope"]),
    ("nightmare", &["nightmare", "nightmares"]),
    ("eldrazi", &["eldrazi"]),
    // whimsical
    ("faerie", &["faerie", "faeries", "fairy", "fairies", "fae"]),
    ("wizard", &["wizard", "wizards", "mage", "mages", "sorcerer"]),
    ("merfolk", &["merfolk", "mermaid", "mermaids", "triton"]),
    ("shapeshifter", &["shapeshifter", "shapeshifters"]),
    ("sphinx", &["sphinx", "sphinxes"]),
    ("angel", &["angel", "angels", "angelic"]),
    ("unicorn", &["unicorn", "unicorns"]),
    ("moonfolk", &["moonfolk"]),
    ("elemental", &["elemental", "elementals"]),
    ("phoenix", &["phoenix", "phoenixes"]),
    ("dragon", &["dragon", "dragons", "drake", "drakes", "wyrm", "wyrms"]),
    // chaotic
    ("goblin", &["goblin", "goblins"]),
    ("pirate", &["pirate", "pirates", "buccaneer"]),
    ("clown", &["clown", "clowns", "performer", "performers"]),
    ("ooze", &["ooze", "oozes", "slime"]),
    ("atog", &["atog", "atogs"]),
    ("kobold", &["kobold", "kobolds"]),
    ("gremlin", &["gremlin", "gremlins"]),
    ("imp", &["imp", "imps"]),
    ("monkey", &["monkey", "monkeys", "ape", "apes"]),
    // epic
    ("knight", &["knight", "knights"]),
    ("soldier", &["soldier", "soldiers"]),
    ("warrior", &["warrior", "warriors"]),
    ("god", &["god", "gods", "deity"]),
    ("hero", &["hero", "heroes"]),
    ("samurai", &["samurai"]),
    ("paladin", &["paladin", "paladins"]),
    ("legend", &["legend", "legends", "legendary"]),
    ("giant", &["giant", "giants"]),
    ("titan", &["titan", "titans"]),
    // nature
    ("dinosaur", &["dinosaur", "dinosaurs", "dino", "dinos"]),
    ("elf", &["elf", "elves", "elven", "elvish"]),
    ("hydra", &["hydra", "hydras"]),
    ("beast", &["beast", "beasts"]),
    ("wurm", &["wurm", "wurms", "worm", "worms"]),
    ("plant", &["plant", "plants", "fungus", "fungi"]),
    ("insect", &["insect", "insects", "bug", "bugs"]),
    ("snake", &["snake", "snakes", "serpent", "serpents"]),
    ("treefolk", &["treefolk", "tree", "trees"]),
];

const VIBE_SYNONYMS: SynonymTable = &[
    ("cute", &["cute", "cuddly", "adorable", "kawaii"]),
    ("creepy", &["creepy", "dark", "horror", "spooky"]),
    ("whimsical", &["whimsical", "magical", "enchanting", "mysterious"]),
    ("chaotic", &["chaotic", "funny", "random", "silly"]),
    ("epic", &["epic", "heroic", "legendary", "noble"]),
    ("nature", &["nature", "primal", "wild", "forest"]),
];

const ARCHETYPE_SYNONYMS: SynonymTable = &[
    ("aggro", &["aggro", "aggressive", "attack"]),
    ("control", &["control", "controlling"]),
    ("combo", &["combo", "combination"]),
    ("midrange", &["midrange", "value", "mid-range"]),
    ("political", &["political", "group hug", "politics"]),
    ("tribal", &["tribal"]),
    ("artifacts", &["artifacts", "artifact"]),
];

fn reverse_map(table: SynonymTable) -> HashMap<&'static str, &'static str> {
    let mut map = HashMap::new();
    for (canonical, variants) in table {
        for variant in *variants {
            map.insert(*variant, *canonical);
        }
    }
    map
}

static REVERSE_CREATURE_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| reverse_map(CREATURE_TYPE_SYNONYMS));
static REVERSE_VIBE_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| reverse_map(VIBE_SYNONYMS));
static REVERSE_ARCHETYPE_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| reverse_map(ARCHETYPE_SYNONYMS));

fn normalize(map: &HashMap<&'static str, &'static str>, input: &str) -> String {
    let lower = input.trim().to_lowercase();
    match map.get(lower.as_str()) {
        Some(canonical) => canonical.to_string(),
        None => lower,
    }
}

/// Normalize a creature type, e.g. `"Squirrels"` -> `"squirrel"`.
pub fn normalize_creature_type(input: &str) -> String {
    normalize(&REVERSE_CREATURE_MAP, input)
}

pub fn normalize_vibe(input: &str) -> String {
    normalize(&REVERSE_VIBE_MAP, input)
}

pub fn normalize_archetype(input: &str) -> String {
    normalize(&REVERSE_ARCHETYPE_MAP, input)
}

/// Every known spelling of a canonical creature type.
///
/// Unknown tokens return a single-element list holding the lower-cased input.
pub fn creature_variations(canonical: &str) -> Vec<String> {
    let lower = canonical.trim().to_lowercase();
    CREATURE_TYPE_SYNONYMS
        .iter()
        .find(|(c, _)| *c == lower)
        .map(|(_, variants)| variants.iter().map(|v| v.to_string()).collect())
        .unwrap_or_else(|| vec![lower])
}

pub fn do_creature_types_match(user_input: &str, deck_tag: &str) -> bool {
    normalize_creature_type(user_input) == normalize_creature_type(deck_tag)
}

pub fn do_vibes_match(user_input: &str, deck_tag: &str) -> bool {
    normalize_vibe(user_input) == normalize_vibe(deck_tag)
}

pub fn do_archetypes_match(user_input: &str, deck_tag: &str) -> bool {
    normalize_archetype(user_input) == normalize_archetype(deck_tag)
}

/// Normalizer for a tag category; themes have no synonym table.
pub(crate) fn normalize_theme(input: &str) -> String {
    input.trim().to_lowercase()
}
