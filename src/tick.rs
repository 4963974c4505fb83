//! Tick entry points. An external scheduler drives two cadences: the
//! fast tick (100ms) for buffs, passive damage, and the auto clicker,
//! and the stats tick (1s) that refreshes cached derived stats.

use rand::Rng;

use crate::bonuses::{critical_hit_chance, critical_hit_multiplier, total_dps};
use crate::challenges::maybe_reset_daily_challenges;
use crate::combat_logic::{apply_passive_damage, attack};
use crate::constants::AUTO_CLICK_CHANCE_PER_TICK;
use crate::game_state::GameState;
use crate::notice::Notice;
use crate::skills::expire_skill_effects;
use crate::upgrades::BonusKind;

/// Current wall-clock time in epoch milliseconds, for production
/// drivers. Simulation code takes `now_ms` explicitly instead of
/// calling this.
pub fn wall_clock_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// One 100ms simulation step.
pub fn fast_tick(state: &mut GameState, now_ms: i64, rng: &mut impl Rng) -> Vec<Notice> {
    let mut notices = expire_skill_effects(state, now_ms);

    if state.current_monster.is_some() {
        notices.extend(apply_passive_damage(state, now_ms, rng));
    }

    let auto_clicker =
        crate::bonuses::sum_upgrade_value(state, BonusKind::AutoClick) > 0.0;
    if auto_clicker && rng.gen::<f64>() < AUTO_CLICK_CHANCE_PER_TICK {
        // Auto clicks are full attacks; a missing monster between
        // spawns is not an error here
        if let Ok(outcome) = attack(state, now_ms, rng) {
            notices.extend(outcome.notices);
        }
    }

    notices.extend(maybe_reset_daily_challenges(state, now_ms, rng));
    notices
}

/// One 1s step: refreshes the cached DPS and crit stats from their
/// sources. Treasure chance is deliberately not recomputed here.
pub fn stats_tick(state: &mut GameState) {
    state.dps = total_dps(state);
    state.critical_hit_chance = critical_hit_chance(state);
    state.critical_hit_multiplier = critical_hit_multiplier(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monsters::spawn_monster;
    use crate::skills::{use_skill, SkillId};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_fast_tick_expires_buffs() {
        let mut state = GameState::new(NOW);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        use_skill(&mut state, SkillId::GoldenTouch, NOW).unwrap();

        let notices = fast_tick(&mut state, NOW + 31_000, &mut rng);
        assert!(notices.iter().any(|n| n.text == "Golden Touch ended"));
        assert!(!state.skill_effects.is_active(SkillId::GoldenTouch));
    }

    #[test]
    fn test_fast_tick_applies_passive_damage() {
        let mut state = GameState::new(NOW);
        state.critical_hit_chance = 0.0;
        state.dps = 20.0;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        spawn_monster(&mut state, &mut rng);

        fast_tick(&mut state, NOW, &mut rng);
        assert_eq!(state.statistics.total_damage_dealt, 2.0);
    }

    #[test]
    fn test_fast_tick_without_dps_is_quiet() {
        let mut state = GameState::new(NOW);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        spawn_monster(&mut state, &mut rng);
        let hp_before = state.current_monster.as_ref().unwrap().current_hp;

        fast_tick(&mut state, NOW, &mut rng);
        assert_eq!(state.current_monster.as_ref().unwrap().current_hp, hp_before);
    }

    #[test]
    fn test_auto_clicker_attacks_eventually() {
        let mut state = GameState::new(NOW);
        state.critical_hit_chance = 0.0;
        state
            .upgrades
            .iter_mut()
            .find(|u| u.id == "auto_clicker_1")
            .unwrap()
            .purchased = true;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        spawn_monster(&mut state, &mut rng);

        for i in 0..200i64 {
            fast_tick(&mut state, NOW + i * 100, &mut rng);
        }
        // ~10% per tick over 200 ticks
        assert!(state.statistics.total_clicks > 0);
    }

    #[test]
    fn test_stats_tick_refreshes_caches() {
        let mut state = GameState::new(NOW);
        state.heroes[0].owned = true;
        state.heroes[0].level = 20; // Hans: 10 DPS
        state
            .upgrades
            .iter_mut()
            .find(|u| u.id == "crit_chance_1")
            .unwrap()
            .purchased = true;

        stats_tick(&mut state);
        assert_eq!(state.dps, 10.0);
        assert!((state.critical_hit_chance - 0.10).abs() < 1e-12);
        assert_eq!(state.critical_hit_multiplier, 2.0);
    }
}
