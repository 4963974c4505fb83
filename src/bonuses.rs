//! Bonus aggregation. Everything that stacks (gold upgrades, prestige
//! upgrades, equipment, hero souls, skill buffs) funnels through here so
//! combat and economy code never sums sources itself.

use crate::constants::{BASE_CRIT_CHANCE, BASE_CRIT_MULTIPLIER, BASE_TREASURE_CHANCE, SOUL_BONUS_PER_SOUL};
use crate::equipment::ItemStats;
use crate::game_state::GameState;
use crate::heroes::hero_templates;
use crate::skills::SkillId;
use crate::upgrades::{prestige_upgrade_templates, upgrade_templates, BonusKind};

/// Sum of values from purchased gold upgrades of the given kind.
pub fn sum_upgrade_value(state: &GameState, kind: BonusKind) -> f64 {
    upgrade_templates()
        .iter()
        .zip(&state.upgrades)
        .filter(|(template, owned)| owned.purchased && template.kind == kind)
        .map(|(template, _)| template.value)
        .sum()
}

/// Sum of level-scaled values from prestige upgrades of the given kind.
pub fn sum_prestige_bonus(state: &GameState, kind: BonusKind) -> f64 {
    prestige_upgrade_templates()
        .iter()
        .zip(&state.prestige_upgrades)
        .filter(|(template, _)| template.kind == kind)
        .map(|(template, owned)| template.value * owned.level as f64)
        .sum()
}

pub fn equipment_bonus(state: &GameState) -> ItemStats {
    state.equipment.total_stats()
}

/// Additive damage on top of base click damage: the soul bonus scales
/// off base click damage, then upgrades, prestige, and gear stack flat.
pub fn click_damage_bonus(state: &GameState) -> f64 {
    let soul_bonus =
        (state.click_damage * state.total_hero_souls as f64 * SOUL_BONUS_PER_SOUL).floor();
    soul_bonus
        + sum_upgrade_value(state, BonusKind::ClickDamage)
        + sum_prestige_bonus(state, BonusKind::ClickDamage)
        + equipment_bonus(state).click_damage
}

/// Total hero DPS after every multiplier.
pub fn total_dps(state: &GameState) -> f64 {
    let base: f64 = hero_templates()
        .iter()
        .zip(&state.heroes)
        .map(|(template, hero)| hero.dps(template))
        .sum();

    let dps_multiplier = 1.0
        + sum_upgrade_value(state, BonusKind::HeroDpsBonus)
        + sum_prestige_bonus(state, BonusKind::HeroDpsBonus)
        + equipment_bonus(state).hero_dps_bonus;
    let rally = if state.skill_effects.is_active(SkillId::HeroRally) {
        3.0
    } else {
        1.0
    };

    let mut dps = base * dps_multiplier * rally;
    dps += dps * state.total_hero_souls as f64 * SOUL_BONUS_PER_SOUL;
    dps.floor()
}

pub fn critical_hit_chance(state: &GameState) -> f64 {
    BASE_CRIT_CHANCE
        + sum_upgrade_value(state, BonusKind::CritChance)
        + sum_prestige_bonus(state, BonusKind::CritChance)
        + equipment_bonus(state).crit_chance
}

/// Crit damage multiplier. Prestige has no crit-damage track; only gold
/// upgrades and gear contribute.
pub fn critical_hit_multiplier(state: &GameState) -> f64 {
    BASE_CRIT_MULTIPLIER
        + sum_upgrade_value(state, BonusKind::CritMultiplier)
        + equipment_bonus(state).crit_multiplier
}

pub fn treasure_chest_chance(state: &GameState) -> f64 {
    BASE_TREASURE_CHANCE
        + sum_prestige_bonus(state, BonusKind::TreasureChance)
        + equipment_bonus(state).treasure_chance
}

/// Gold multiplier applied to monster rewards.
pub fn gold_multiplier(state: &GameState) -> f64 {
    1.0 + sum_upgrade_value(state, BonusKind::GoldBonus)
        + sum_prestige_bonus(state, BonusKind::GoldMultiplier)
        + equipment_bonus(state).gold_bonus
}
