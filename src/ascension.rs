//! The prestige reset. Ascending trades the current run for hero souls
//! and prestige points; lifetime stats, equipment, prestige upgrades,
//! and the permanent click damage base all survive.

use rand::Rng;

use crate::achievements::check_achievements;
use crate::bonuses::sum_prestige_bonus;
use crate::constants::{
    ASCENSION_MIN_ZONE, PRESTIGE_PER_ZONES, SOULS_PER_ZONES, SOULS_ZONE_OFFSET,
};
use crate::game_state::GameState;
use crate::heroes::hero_templates;
use crate::monsters::spawn_monster;
use crate::notice::{ActionError, Notice, NoticeColor};
use crate::upgrades::{upgrade_templates, BonusKind};

pub fn can_ascend(state: &GameState) -> bool {
    state.zone >= ASCENSION_MIN_ZONE
}

/// Souls awarded for ascending at the given zone. The base payout is
/// `floor((zone - 99) / 5)`; Soul Magnet levels then scale it, which is
/// the one place that upgrade takes effect.
pub fn souls_for_zone(state: &GameState, zone: u32) -> u64 {
    let base = zone.saturating_sub(SOULS_ZONE_OFFSET) / SOULS_PER_ZONES;
    let multiplier = 1.0 + sum_prestige_bonus(state, BonusKind::SoulBonus);
    (base as f64 * multiplier).floor() as u64
}

pub fn prestige_for_zone(zone: u32) -> u64 {
    (zone / PRESTIGE_PER_ZONES) as u64
}

/// Performs the ascension reset, paying out souls and prestige points.
pub fn ascend(
    state: &mut GameState,
    now_ms: i64,
    rng: &mut impl Rng,
) -> Result<Vec<Notice>, ActionError> {
    if !can_ascend(state) {
        return Err(ActionError::AscensionLocked);
    }

    let souls = souls_for_zone(state, state.zone);
    let prestige = prestige_for_zone(state.zone);

    state.hero_souls += souls;
    state.total_hero_souls += souls;
    state.prestige_points += prestige;
    state.total_prestige_points += prestige;
    state.statistics.total_ascensions += 1;
    state.statistics.total_prestige_gained += prestige;

    state.gold = 0.0;
    state.zone = 1;
    state.monsters_killed = 0;
    state.combo_count = 0;
    state.combo_multiplier = 1.0;
    state.treasure_chest_active = false;

    for (template, hero) in hero_templates().iter().zip(&mut state.heroes) {
        hero.reset(template);
    }
    // Auto clicker effect persists across ascensions; everything else
    // must be rebought. Click damage already bought stays folded into
    // the base.
    for (template, upgrade) in upgrade_templates().iter().zip(&mut state.upgrades) {
        if template.kind != BonusKind::AutoClick {
            upgrade.purchased = false;
        }
    }

    spawn_monster(state, rng);

    let mut notices = vec![Notice::new(
        format!("🌠 Ascended! +{} Hero Souls!", souls),
        NoticeColor::Prestige,
    )];
    if prestige > 0 {
        notices.push(Notice::new(
            format!("⭐ +{} Prestige Points!", prestige),
            NoticeColor::Prestige,
        ));
    }
    notices.extend(check_achievements(state, now_ms));
    Ok(notices)
}
