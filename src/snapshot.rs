//! Save-file representation of the game. The snapshot is a flat JSON
//! document where every field has a default, so saves written by older
//! builds (or with fields hand-deleted) still load, missing pieces
//! falling back to a fresh-game value.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::achievements::AchievementState;
use crate::bonuses;
use crate::challenges::{generate_daily_challenges, DailyChallenge};
use crate::constants::{BASE_CLICK_DAMAGE, BASE_TREASURE_CHANCE};
use crate::equipment::{Equipment, EquippedItem};
use crate::game_state::{GameState, Statistics};
use crate::heroes::{hero_templates, HeroState};
use crate::monsters::{spawn_monster, Monster};
use crate::skills::{SkillEffects, SkillId, SkillState};
use crate::upgrades::{PrestigeUpgradeState, UpgradeState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub gold: f64,
    pub click_damage: f64,
    pub monsters_killed: u64,
    pub zone: u32,
    pub hero_souls: u64,
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
    pub treasure_chest_active: bool,
    pub treasure_chest_chance: f64,
    pub statistics: Statistics,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            gold: 0.0,
            click_damage: BASE_CLICK_DAMAGE,
            monsters_killed: 0,
            zone: 1,
            hero_souls: 0,
            total_hero_souls: 0,
            prestige_points: 0,
            total_prestige_points: 0,
            heroes: Vec::new(),
            upgrades: Vec::new(),
            achievements: Vec::new(),
            prestige_upgrades: Vec::new(),
            active_skills: Vec::new(),
            skill_effects: SkillEffects::default(),
            current_monster: None,
            equipment: Equipment::default(),
            inventory: Vec::new(),
            daily_challenges: Vec::new(),
            last_challenge_reset: 0,
            treasure_chest_active: false,
            treasure_chest_chance: BASE_TREASURE_CHANCE,
            statistics: Statistics::default(),
        }
    }
}

/// Captures the persistable parts of the running game.
pub fn snapshot_of(state: &GameState) -> Snapshot {
    Snapshot {
        gold: state.gold,
        click_damage: state.click_damage,
        monsters_killed: state.monsters_killed,
        zone: state.zone,
        hero_souls: state.hero_souls,
        total_hero_souls: state.total_hero_souls,
        prestige_points: state.prestige_points,
        total_prestige_points: state.total_prestige_points,
        heroes: state.heroes.clone(),
        upgrades: state.upgrades.clone(),
        achievements: state.achievements.clone(),
        prestige_upgrades: state.prestige_upgrades.clone(),
        active_skills: state.active_skills.clone(),
        skill_effects: state.skill_effects,
        current_monster: state.current_monster.clone(),
        equipment: state.equipment.clone(),
        inventory: state.inventory.clone(),
        daily_challenges: state.daily_challenges.clone(),
        last_challenge_reset: state.last_challenge_reset,
        treasure_chest_active: state.treasure_chest_active,
        treasure_chest_chance: state.treasure_chest_chance,
        statistics: state.statistics.clone(),
    }
}

/// Rebuilds a game from a snapshot. Collection entries are matched back
/// to the current template tables (by position for heroes, by id for
/// everything else) so saves survive catalog additions. Cached stats
/// are recomputed and stale buff windows expired.
pub fn apply_snapshot(snapshot: Snapshot, now_ms: i64) -> GameState {
    let mut state = GameState::new(now_ms);

    state.gold = snapshot.gold;
    state.click_damage = snapshot.click_damage;
    state.monsters_killed = snapshot.monsters_killed;
    state.zone = snapshot.zone.max(1);
    state.hero_souls = snapshot.hero_souls;
    state.total_hero_souls = snapshot.total_hero_souls;
    state.prestige_points = snapshot.prestige_points;
    state.total_prestige_points = snapshot.total_prestige_points;
    state.statistics = snapshot.statistics;

    for (index, saved) in snapshot.heroes.into_iter().enumerate() {
        if index < state.heroes.len() {
            // Recompute the cost from the level so a tampered or stale
            // cost can't drift from the curve
            let template = &hero_templates()[index];
            let cost = if saved.owned {
                crate::heroes::level_cost(template, saved.level)
            } else {
                template.base_cost
            };
            state.heroes[index] = HeroState {
                level: saved.level,
                owned: saved.owned,
                current_cost: cost,
            };
        }
    }
    for saved in snapshot.upgrades {
        if let Some(entry) = state.upgrades.iter_mut().find(|u| u.id == saved.id) {
            entry.purchased = saved.purchased;
        }
    }
    for saved in snapshot.achievements {
        if let Some(entry) = state.achievements.iter_mut().find(|a| a.id == saved.id) {
            entry.unlocked = saved.unlocked;
            entry.date_unlocked = saved.date_unlocked;
        }
    }
    for saved in snapshot.prestige_upgrades {
        if let Some(entry) = state.prestige_upgrades.iter_mut().find(|p| p.id == saved.id) {
            entry.level = saved.level.min(
                crate::upgrades::prestige_upgrade_template(&entry.id)
                    .map(|t| t.max_level)
                    .unwrap_or(saved.level),
            );
        }
    }
    for saved in snapshot.active_skills {
        if let Some(entry) = state.active_skills.iter_mut().find(|s| s.id == saved.id) {
            entry.last_used = saved.last_used;
            entry.times_used = saved.times_used;
        }
    }

    state.skill_effects = snapshot.skill_effects;
    for id in SkillId::all() {
        let window = state.skill_effects.get_mut(id);
        if window.active && now_ms >= window.end_time {
            window.active = false;
        }
    }
    state.current_monster = snapshot.current_monster;
    state.equipment = snapshot.equipment;
    state.inventory = snapshot.inventory;
    state.daily_challenges = snapshot.daily_challenges;
    state.last_challenge_reset = snapshot.last_challenge_reset;
    state.treasure_chest_active = snapshot.treasure_chest_active;

    state.dps = bonuses::total_dps(&state);
    state.critical_hit_chance = bonuses::critical_hit_chance(&state);
    state.critical_hit_multiplier = bonuses::critical_hit_multiplier(&state);
    state.treasure_chest_chance = bonuses::treasure_chest_chance(&state);
    state
}

/// Parses snapshot JSON, warning and returning `None` when the document
/// is not a snapshot at all.
pub fn parse_snapshot(json: &str) -> Option<Snapshot> {
    match serde_json::from_str(json) {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            log::warn!("unreadable save, starting fresh: {}", err);
            None
        }
    }
}

pub fn to_json(snapshot: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string(snapshot)
}

/// Loads a game from save JSON, falling back to a fresh game when the
/// JSON is unreadable. Ensures the result is playable: a monster on
/// screen and a daily challenge set.
pub fn load_game(json: &str, now_ms: i64, rng: &mut impl Rng) -> GameState {
    let Some(snapshot) = parse_snapshot(json) else {
        return GameState::new_game(now_ms, rng);
    };
    let mut state = apply_snapshot(snapshot, now_ms);
    if state.current_monster.is_none() {
        spawn_monster(&mut state, rng);
    }
    if state.daily_challenges.is_empty() {
        state.daily_challenges = generate_daily_challenges(rng);
        state.last_challenge_reset = now_ms;
    }
    state
}
