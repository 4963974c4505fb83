use serde::{Deserialize, Serialize};

/// The stat a purchased upgrade (or prestige upgrade, or equipment
/// stat) feeds into when bonuses are summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusKind {
    ClickDamage,
    CritChance,
    CritMultiplier,
    AutoClick,
    GoldBonus,
    HeroDpsBonus,
    GoldMultiplier,
    TreasureChance,
    SoulBonus,
}

/// One-time gold upgrade definition.
#[derive(Debug, Clone, Copy)]
pub struct UpgradeTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub cost: f64,
    pub kind: BonusKind,
    pub value: f64,
    pub description: &'static str,
}

static UPGRADES: [UpgradeTemplate; 13] = [
    UpgradeTemplate {
        id: "click_damage_1",
        name: "Sharp Sword",
        emoji: "🗡️",
        cost: 50.0,
        kind: BonusKind::ClickDamage,
        value: 1.0,
        description: "+1 click damage",
    },
    UpgradeTemplate {
        id: "click_damage_2",
        name: "Steel Sword",
        emoji: "⚔️",
        cost: 500.0,
        kind: BonusKind::ClickDamage,
        value: 3.0,
        description: "+3 click damage",
    },
    UpgradeTemplate {
        id: "click_damage_3",
        name: "Mithril Sword",
        emoji: "🔷",
        cost: 2_500.0,
        kind: BonusKind::ClickDamage,
        value: 8.0,
        description: "+8 click damage",
    },
    UpgradeTemplate {
        id: "click_damage_4",
        name: "Adamant Sword",
        emoji: "🟢",
        cost: 15_000.0,
        kind: BonusKind::ClickDamage,
        value: 20.0,
        description: "+20 click damage",
    },
    UpgradeTemplate {
        id: "click_damage_5",
        name: "Rune Sword",
        emoji: "🔵",
        cost: 100_000.0,
        kind: BonusKind::ClickDamage,
        value: 50.0,
        description: "+50 click damage",
    },
    UpgradeTemplate {
        id: "crit_chance_1",
        name: "Lucky Charm",
        emoji: "🍀",
        cost: 1_000.0,
        kind: BonusKind::CritChance,
        value: 0.05,
        description: "+5% critical hit chance",
    },
    UpgradeTemplate {
        id: "crit_chance_2",
        name: "Lucky Ring",
        emoji: "💍",
        cost: 10_000.0,
        kind: BonusKind::CritChance,
        value: 0.05,
        description: "+5% critical hit chance",
    },
    UpgradeTemplate {
        id: "crit_damage_1",
        name: "Berserker Ring",
        emoji: "💢",
        cost: 5_000.0,
        kind: BonusKind::CritMultiplier,
        value: 0.5,
        description: "+50% critical hit damage",
    },
    UpgradeTemplate {
        id: "auto_clicker_1",
        name: "Auto Clicker",
        emoji: "🤖",
        cost: 25_000.0,
        kind: BonusKind::AutoClick,
        value: 1.0,
        description: "Automatically attacks sometimes",
    },
    UpgradeTemplate {
        id: "gold_bonus_1",
        name: "Gold Ring",
        emoji: "🟡",
        cost: 3_000.0,
        kind: BonusKind::GoldBonus,
        value: 0.25,
        description: "+25% gold from monsters",
    },
    UpgradeTemplate {
        id: "gold_bonus_2",
        name: "Wealth Amulet",
        emoji: "📿",
        cost: 20_000.0,
        kind: BonusKind::GoldBonus,
        value: 0.5,
        description: "+50% gold from monsters",
    },
    UpgradeTemplate {
        id: "hero_dps_1",
        name: "Leadership",
        emoji: "🎖️",
        cost: 50_000.0,
        kind: BonusKind::HeroDpsBonus,
        value: 0.5,
        description: "+50% hero DPS",
    },
    UpgradeTemplate {
        id: "hero_dps_2",
        name: "Command",
        emoji: "🎺",
        cost: 250_000.0,
        kind: BonusKind::HeroDpsBonus,
        value: 1.0,
        description: "+100% hero DPS",
    },
];

pub fn upgrade_templates() -> &'static [UpgradeTemplate] {
    &UPGRADES
}

pub fn upgrade_template(id: &str) -> Option<&'static UpgradeTemplate> {
    UPGRADES.iter().find(|t| t.id == id)
}

/// Purchase flag for a gold upgrade. Kept as a parallel vec keyed by id
/// so saves survive reordering of the template table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeState {
    pub id: String,
    pub purchased: bool,
}

impl UpgradeState {
    pub fn new(template: &UpgradeTemplate) -> Self {
        Self {
            id: template.id.to_string(),
            purchased: false,
        }
    }
}

/// Repeatable prestige-point upgrade definition. Cost doubles per level.
#[derive(Debug, Clone, Copy)]
pub struct PrestigeUpgradeTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub base_cost: u64,
    pub max_level: u32,
    pub kind: BonusKind,
    pub value: f64,
    pub description: &'static str,
}

static PRESTIGE_UPGRADES: [PrestigeUpgradeTemplate; 6] = [
    PrestigeUpgradeTemplate {
        id: "click_power",
        name: "Click Power",
        emoji: "👆",
        base_cost: 5,
        max_level: 10,
        kind: BonusKind::ClickDamage,
        value: 2.0,
        description: "+2 click damage per level",
    },
    PrestigeUpgradeTemplate {
        id: "gold_fortune",
        name: "Gold Fortune",
        emoji: "💰",
        base_cost: 8,
        max_level: 5,
        kind: BonusKind::GoldMultiplier,
        value: 0.25,
        description: "+25% gold per level",
    },
    PrestigeUpgradeTemplate {
        id: "hero_efficiency",
        name: "Hero Efficiency",
        emoji: "⚡",
        base_cost: 12,
        max_level: 8,
        kind: BonusKind::HeroDpsBonus,
        value: 0.5,
        description: "+50% hero DPS per level",
    },
    PrestigeUpgradeTemplate {
        id: "treasure_hunter",
        name: "Treasure Hunter",
        emoji: "🗺️",
        base_cost: 15,
        max_level: 3,
        kind: BonusKind::TreasureChance,
        value: 0.02,
        description: "+2% treasure chest chance per level",
    },
    PrestigeUpgradeTemplate {
        id: "crit_master",
        name: "Crit Master",
        emoji: "🎯",
        base_cost: 10,
        max_level: 5,
        kind: BonusKind::CritChance,
        value: 0.05,
        description: "+5% critical chance per level",
    },
    PrestigeUpgradeTemplate {
        id: "soul_magnet",
        name: "Soul Magnet",
        emoji: "🧲",
        base_cost: 20,
        max_level: 3,
        kind: BonusKind::SoulBonus,
        value: 0.5,
        description: "+50% hero souls from ascension per level",
    },
];

pub fn prestige_upgrade_templates() -> &'static [PrestigeUpgradeTemplate] {
    &PRESTIGE_UPGRADES
}

pub fn prestige_upgrade_template(id: &str) -> Option<&'static PrestigeUpgradeTemplate> {
    PRESTIGE_UPGRADES.iter().find(|t| t.id == id)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrestigeUpgradeState {
    pub id: String,
    pub level: u32,
}

impl PrestigeUpgradeState {
    pub fn new(template: &PrestigeUpgradeTemplate) -> Self {
        Self {
            id: template.id.to_string(),
            level: 0,
        }
    }
}

/// Prestige point cost of the next level. Doubles each level bought.
pub fn prestige_level_cost(template: &PrestigeUpgradeTemplate, level: u32) -> u64 {
    template.base_cost * 2u64.pow(level)
}
