use serde::{Deserialize, Serialize};

/// Immutable hero definition. Heroes are referenced by position; the
/// mutable run-scoped part lives in [`HeroState`].
#[derive(Debug, Clone, Copy)]
pub struct HeroTemplate {
    pub name: &'static str,
    pub emoji: &'static str,
    pub base_cost: f64,
    pub base_dps: f64,
    pub cost_multiplier: f64,
    pub description: &'static str,
}

static HEROES: [HeroTemplate; 15] = [
    HeroTemplate {
        name: "Hans",
        emoji: "👨‍🌾",
        base_cost: 10.0,
        base_dps: 0.5,
        cost_multiplier: 1.07,
        description: "A helpful gardener from Lumbridge",
    },
    HeroTemplate {
        name: "Bob the Cat",
        emoji: "🐱",
        base_cost: 50.0,
        base_dps: 2.0,
        cost_multiplier: 1.07,
        description: "Lumbridge's famous feline",
    },
    HeroTemplate {
        name: "Lumbridge Guide",
        emoji: "🧑‍🏫",
        base_cost: 250.0,
        base_dps: 8.0,
        cost_multiplier: 1.07,
        description: "Teaches new adventurers",
    },
    HeroTemplate {
        name: "Duke Horacio",
        emoji: "👑",
        base_cost: 1_500.0,
        base_dps: 47.0,
        cost_multiplier: 1.07,
        description: "Ruler of Lumbridge",
    },
    HeroTemplate {
        name: "Doric",
        emoji: "⚒️",
        base_cost: 8_000.0,
        base_dps: 246.0,
        cost_multiplier: 1.07,
        description: "Master dwarf smith",
    },
    HeroTemplate {
        name: "Aubury",
        emoji: "🔮",
        base_cost: 50_000.0,
        base_dps: 1_286.0,
        cost_multiplier: 1.07,
        description: "Varrock's rune shop owner",
    },
    HeroTemplate {
        name: "Wizard Mizgog",
        emoji: "🧙",
        base_cost: 300_000.0,
        base_dps: 7_700.0,
        cost_multiplier: 1.07,
        description: "Powerful Wizard's Tower mage",
    },
    HeroTemplate {
        name: "Father Aereck",
        emoji: "⛪",
        base_cost: 2_000_000.0,
        base_dps: 44_000.0,
        cost_multiplier: 1.07,
        description: "Lumbridge church priest",
    },
    HeroTemplate {
        name: "Gypsy Aris",
        emoji: "🔮",
        base_cost: 15_000_000.0,
        base_dps: 260_000.0,
        cost_multiplier: 1.07,
        description: "Fortune teller extraordinaire",
    },
    HeroTemplate {
        name: "Count Draynor",
        emoji: "🧛",
        base_cost: 100_000_000.0,
        base_dps: 1_500_000.0,
        cost_multiplier: 1.07,
        description: "Powerful vampire lord",
    },
    HeroTemplate {
        name: "King Roald",
        emoji: "👑",
        base_cost: 750_000_000.0,
        base_dps: 8_800_000.0,
        cost_multiplier: 1.07,
        description: "King of Misthalin",
    },
    HeroTemplate {
        name: "Vannaka",
        emoji: "⚔️",
        base_cost: 5_000_000_000.0,
        base_dps: 52_000_000.0,
        cost_multiplier: 1.07,
        description: "Slayer master",
    },
    HeroTemplate {
        name: "Duradel",
        emoji: "🗡️",
        base_cost: 35_000_000_000.0,
        base_dps: 300_000_000.0,
        cost_multiplier: 1.07,
        description: "Elite slayer master",
    },
    HeroTemplate {
        name: "Nieve",
        emoji: "🏹",
        base_cost: 250_000_000_000.0,
        base_dps: 1_800_000_000.0,
        cost_multiplier: 1.07,
        description: "Gnome slayer master",
    },
    HeroTemplate {
        name: "Wise Old Man",
        emoji: "🧙",
        base_cost: 2_000_000_000_000.0,
        base_dps: 10_000_000_000.0,
        cost_multiplier: 1.07,
        description: "Ancient and powerful sage",
    },
];

pub fn hero_templates() -> &'static [HeroTemplate] {
    &HEROES
}

/// Run-scoped hero progress. Invariant: `current_cost` always equals
/// `floor(base_cost * cost_multiplier^level)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroState {
    pub level: u32,
    pub owned: bool,
    pub current_cost: f64,
}

impl HeroState {
    pub fn new(template: &HeroTemplate) -> Self {
        Self {
            level: 0,
            owned: false,
            current_cost: template.base_cost,
        }
    }

    /// Resets the hero to its unhired state (ascension).
    pub fn reset(&mut self, template: &HeroTemplate) {
        self.level = 0;
        self.owned = false;
        self.current_cost = template.base_cost;
    }

    pub fn dps(&self, template: &HeroTemplate) -> f64 {
        if self.owned && self.level > 0 {
            template.base_dps * self.level as f64
        } else {
            0.0
        }
    }
}

/// Gold cost of buying the level after `level` for this hero.
pub fn level_cost(template: &HeroTemplate, level: u32) -> f64 {
    (template.base_cost * template.cost_multiplier.powi(level as i32)).floor()
}
