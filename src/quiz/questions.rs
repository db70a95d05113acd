//! Question vocabulary for the three quiz paths.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuizOption {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PowerLevelOption {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub range: (u8, u8),
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FranchiseOption {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
}

pub const SKIP_ANSWER: &str = "Skip this question";

pub const VIBE_QUESTION_ID: &str = "vibe";
pub const CREATURE_QUESTION_ID: &str = "creature-types";
pub const ARCHETYPE_QUESTION_ID: &str = "archetype";
pub const POWER_LEVEL_QUESTION_ID: &str = "power-level";
pub const COLORS_QUESTION_ID: &str = "colors";

pub const VIBE_OPTIONS: &[QuizOption] = &[
    QuizOption {
        id: "cute",
        title: "Cute & Cuddly",
        description: "Puppies, plushies, and warm fuzzy feelings",
        tags: &["cute", "cuddly", "playful", "wholesome"],
    },
    QuizOption {
        id: "creepy",
        title: "Creepy & Dark",
        description: "Horror movies, Halloween, and things that go bump in the night",
        tags: &["creepy", "dark", "horror", "spooky"],
    },
    QuizOption {
        id: "whimsical",
        title: "Whimsical & Magical",
        description: "Fairy tales, Play-Doh creativity, and sparkly wonder",
        tags: &["whimsical", "magical", "enchanting", "mysterious"],
    },
    QuizOption {
        id: "chaotic",
        title: "Chaotic & Funny",
        description: "Pranks, mischief, and controlled chaos",
        tags: &["chaotic", "funny", "random", "silly"],
    },
    QuizOption {
        id: "epic",
        title: "Epic & Heroic",
        description: "Superheroes, epic battles, and saving the day",
        tags: &["epic", "heroic", "legendary", "noble"],
    },
    QuizOption {
        id: "nature",
        title: "Nature & Primal",
        description: "Jurassic Park, wilderness, and raw power",
        tags: &["nature", "primal", "wild", "forest"],
    },
];

/// Quick-select answers offered for the creature question, keyed by vibe id.
pub const CREATURE_QUICK_SELECTS: &[(&str, &[&str])] = &[
    (
        "cute",
        &[
            "Squirrels (hoarding nuts and causing chaos)",
            "Rabbits (fuzzy friends who buff each other)",
            "Dogs (loyal companions with equipment)",
            "Cats (sneaky and independent)",
            "Otters (playful water friends)",
            SKIP_ANSWER,
        ],
    ),
    (
        "creepy",
        &[
            "Vampires (elegant bloodsuckers)",
            "Zombies (undead hordes)",
            "Demons (powerful evil beings)",
            "Ghosts & Spirits (haunting the battlefield)",
            "Eldrazi (alien cosmic horrors)",
            SKIP_ANSWER,
        ],
    ),
    (
        "whimsical",
        &[
            "Faeries (tricky flying creatures)",
            "Wizards (spell-slinging masters)",
            "Dragons (majestic flying beasts)",
            "Merfolk (underwater mystics)",
            "Shapeshifters (creatures that transform)",
            SKIP_ANSWER,
        ],
    ),
    (
        "chaotic",
        &[
            "Goblins (unpredictable mayhem)",
            "Pirates (stealing and treasure)",
            "Random effects (coin flips and surprises)",
            "Pranks (mess with opponents' plans)",
            "Silly win conditions (weird ways to win)",
            SKIP_ANSWER,
        ],
    ),
    (
        "epic",
        &[
            "Knights (armored warriors)",
            "Angels (divine protectors)",
            "Soldiers (organized armies)",
            "Legendary Heroes (named champions)",
            "Gods (powerful beings)",
            SKIP_ANSWER,
        ],
    ),
    (
        "nature",
        &[
            "Dinosaurs (prehistoric powerhouses)",
            "Elves (forest dwellers)",
            "Beasts (wild animals)",
            "Plants (living vegetation)",
            "Insects (creepy crawlies with power)",
            SKIP_ANSWER,
        ],
    ),
];

pub const ARCHETYPE_OPTIONS: &[QuizOption] = &[
    QuizOption {
        id: "aggro",
        title: "Aggressive",
        description: "Attack fast and often",
        tags: &["aggro", "aggressive"],
    },
    QuizOption {
        id: "control",
        title: "Controlling",
        description: "Stop their plan, execute mine",
        tags: &["control"],
    },
    QuizOption {
        id: "combo",
        title: "Combo",
        description: "Pull off the perfect sequence",
        tags: &["combo"],
    },
    QuizOption {
        id: "midrange",
        title: "Midrange/Value",
        description: "Grind them out",
        tags: &["midrange", "value"],
    },
    QuizOption {
        id: "political",
        title: "Political",
        description: "Make deals and backstab",
        tags: &["political", "group hug"],
    },
];

pub const POWER_LEVEL_OPTIONS: &[PowerLevelOption] = &[
    PowerLevelOption {
        id: "beginner",
        title: "Beginner-Friendly",
        description: "Just learning the game (Power 4-6)",
        range: (4, 6),
    },
    PowerLevelOption {
        id: "focused",
        title: "Focused",
        description: "I know what I'm doing (Power 7-8)",
        range: (7, 8),
    },
    PowerLevelOption {
        id: "high-power",
        title: "High Power",
        description: "Bring on the challenge (Power 9-10)",
        range: (9, 10),
    },
];

pub const FRANCHISE_OPTIONS: &[FranchiseOption] = &[
    FranchiseOption { id: "walking_dead", name: "Walking Dead", tagline: "Zombies & Survival" },
    FranchiseOption { id: "stranger_things", name: "Stranger Things", tagline: "80s Sci-Fi Horror" },
    FranchiseOption { id: "transformers", name: "Transformers", tagline: "Robots in Disguise" },
    FranchiseOption { id: "street_fighter", name: "Street Fighter", tagline: "Martial Arts" },
    FranchiseOption { id: "fortnite", name: "Fortnite", tagline: "Battle Royale" },
    FranchiseOption { id: "jurassic_world", name: "Jurassic World", tagline: "Dinosaurs" },
    FranchiseOption { id: "doctor_who", name: "Doctor Who", tagline: "Time Travel" },
    FranchiseOption { id: "warhammer_40k", name: "Warhammer 40K", tagline: "Grimdark Future" },
    FranchiseOption { id: "lord_of_the_rings", name: "Lord of the Rings", tagline: "Epic Fantasy" },
    FranchiseOption { id: "final_fantasy", name: "Final Fantasy", tagline: "JRPG Adventure" },
    FranchiseOption { id: "fallout", name: "Fallout", tagline: "Post-Apocalyptic" },
    FranchiseOption { id: "godzilla", name: "Godzilla", tagline: "Monster Movies" },
    FranchiseOption { id: "monty_python", name: "Monty Python", tagline: "Comedy Chaos" },
    FranchiseOption { id: "princess_bride", name: "Princess Bride", tagline: "True Love & Revenge" },
    FranchiseOption { id: "magic_original", name: "Magic Original", tagline: "Classic MTG" },
];

/// Quick-select answers for a vibe, or an empty slice for unknown vibes.
pub fn creature_quick_selects(vibe: &str) -> &'static [&'static str] {
    CREATURE_QUICK_SELECTS
        .iter()
        .find(|(v, _)| *v == vibe)
        .map(|(_, selects)| *selects)
        .unwrap_or(&[])
}

/// The label part of a quick-select, e.g. `"Dogs"` for
/// `"Dogs (loyal companions with equipment)"`.
pub fn quick_select_label(quick_select: &str) -> &str {
    match quick_select.find(" (") {
        Some(idx) => quick_select[..idx].trim(),
        None => quick_select.trim(),
    }
}

pub fn power_level_range(option_id: &str) -> Option<(u8, u8)> {
    POWER_LEVEL_OPTIONS
        .iter()
        .find(|o| o.id == option_id)
        .map(|o| o.range)
}
