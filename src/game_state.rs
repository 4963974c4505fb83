use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::achievements::{achievement_templates, AchievementState};
use crate::challenges::{generate_daily_challenges, DailyChallenge};
use crate::constants::{BASE_CLICK_DAMAGE, BASE_CRIT_CHANCE, BASE_CRIT_MULTIPLIER, BASE_TREASURE_CHANCE};
use crate::equipment::{Equipment, EquippedItem};
use crate::heroes::{hero_templates, HeroState};
use crate::monsters::{spawn_monster, Monster};
use crate::skills::{SkillEffects, SkillId, SkillState};
use crate::upgrades::{prestige_upgrade_templates, upgrade_templates, PrestigeUpgradeState, UpgradeState};

/// Lifetime counters. Nothing in here is ever reset, ascension included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub total_clicks: u64,
    pub total_damage_dealt: f64,
    pub total_gold_earned: f64,
    pub total_monsters_killed: u64,
    pub highest_zone: u32,
    pub total_ascensions: u64,
    pub treasure_chests_found: u64,
    pub treasure_gold_earned: f64,
    pub total_prestige_gained: u64,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            total_clicks: 0,
            total_damage_dealt: 0.0,
            total_gold_earned: 0.0,
            total_monsters_killed: 0,
            highest_zone: 1,
            total_ascensions: 0,
            treasure_chests_found: 0,
            treasure_gold_earned: 0.0,
            total_prestige_gained: 0,
        }
    }
}

/// The whole simulation state. Action functions across the crate take
/// `&mut GameState` and mutate it in place; persistence goes through the
/// snapshot module rather than serializing this struct directly.
#[derive(Debug, Clone)]
pub struct GameState {
    pub gold: f64,
    /// Base click damage before bonuses. Grows permanently when click
    /// damage upgrades are bought and survives ascension.
    pub click_damage: f64,
    /// Cached total hero DPS, refreshed by the stats tick.
    pub dps: f64,
    pub zone: u32,
    /// Kills within the current run. Every tenth kill is a boss and
    /// advances the zone.
    pub monsters_killed: u64,
    /// Souls available to spend this run.
    pub hero_souls: u64,
    /// Lifetime souls, the damage bonus driver.
    pub total_hero_souls: u64,
    pub prestige_points: u64,
    pub total_prestige_points: u64,
    pub heroes: Vec<HeroState>,
    pub upgrades: Vec<UpgradeState>,
    pub achievements: Vec<AchievementState>,
    pub prestige_upgrades: Vec<PrestigeUpgradeState>,
    pub active_skills: Vec<SkillState>,
    pub skill_effects: SkillEffects,
    pub current_monster: Option<Monster>,
    pub equipment: Equipment,
    pub inventory: Vec<EquippedItem>,
    pub daily_challenges: Vec<DailyChallenge>,
    pub last_challenge_reset: i64,
    /// Cached crit odds, refreshed by the stats tick.
    pub critical_hit_chance: f64,
    pub critical_hit_multiplier: f64,
    pub combo_count: u32,
    pub combo_multiplier: f64,
    pub last_click_time: i64,
    pub treasure_chest_active: bool,
    /// Cached treasure odds, refreshed on prestige purchase and load.
    pub treasure_chest_chance: f64,
    pub statistics: Statistics,
}

impl GameState {
    /// Bare initial state. No monster and no daily challenges yet; use
    /// [`GameState::new_game`] for a playable fresh start.
    pub fn new(now_ms: i64) -> Self {
        Self {
            gold: 0.0,
            click_damage: BASE_CLICK_DAMAGE,
            dps: 0.0,
            zone: 1,
            monsters_killed: 0,
            hero_souls: 0,
            total_hero_souls: 0,
            prestige_points: 0,
            total_prestige_points: 0,
            heroes: hero_templates().iter().map(HeroState::new).collect(),
            upgrades: upgrade_templates().iter().map(UpgradeState::new).collect(),
            achievements: achievement_templates()
                .iter()
                .map(AchievementState::new)
                .collect(),
            prestige_upgrades: prestige_upgrade_templates()
                .iter()
                .map(PrestigeUpgradeState::new)
                .collect(),
            active_skills: SkillId::all().into_iter().map(SkillState::new).collect(),
            skill_effects: SkillEffects::default(),
            current_monster: None,
            equipment: Equipment::default(),
            inventory: Vec::new(),
            daily_challenges: Vec::new(),
            last_challenge_reset: now_ms,
            critical_hit_chance: BASE_CRIT_CHANCE,
            critical_hit_multiplier: BASE_CRIT_MULTIPLIER,
            combo_count: 0,
            combo_multiplier: 1.0,
            last_click_time: 0,
            treasure_chest_active: false,
            treasure_chest_chance: BASE_TREASURE_CHANCE,
            statistics: Statistics::default(),
        }
    }

    /// Fresh playable game: initial state plus a spawned monster and
    /// today's challenge draw.
    pub fn new_game(now_ms: i64, rng: &mut impl Rng) -> Self {
        let mut state = Self::new(now_ms);
        state.daily_challenges = generate_daily_challenges(rng);
        spawn_monster(&mut state, rng);
        state
    }
}
