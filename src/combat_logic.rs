//! Click combat resolution: combo tracking, crit rolls, kill rewards,
//! treasure interception, and zone advancement.

use rand::Rng;

use crate::achievements::check_achievements;
use crate::bonuses::{click_damage_bonus, gold_multiplier};
use crate::challenges::{record_challenge_progress, ChallengeKind};
use crate::constants::{COMBO_MAX_MULTIPLIER, COMBO_STEP, COMBO_WINDOW_MS, KILLS_PER_ZONE};
use crate::game_state::GameState;
use crate::monsters::{spawn_monster, spawn_treasure_chest};
use crate::notice::{format_number, ActionError, Notice, NoticeColor};
use crate::skills::SkillId;
use crate::zones::zone_milestone_notice;

/// What a single click did.
#[derive(Debug, Clone)]
pub struct AttackOutcome {
    pub damage: f64,
    pub was_crit: bool,
    pub killed: bool,
    pub notices: Vec<Notice>,
}

fn update_combo(state: &mut GameState, now_ms: i64) -> Option<Notice> {
    let gap = now_ms - state.last_click_time;
    state.last_click_time = now_ms;

    if gap < COMBO_WINDOW_MS {
        state.combo_count += 1;
        state.combo_multiplier =
            (1.0 + state.combo_count as f64 * COMBO_STEP).min(COMBO_MAX_MULTIPLIER);
        if state.combo_count % 5 == 0 {
            return Some(Notice::new(
                format!("{}x COMBO!", state.combo_count),
                NoticeColor::Combo,
            ));
        }
        None
    } else {
        let broke_streak = state.combo_count >= 10;
        state.combo_count = 0;
        state.combo_multiplier = 1.0;
        if broke_streak {
            Some(Notice::new("Combo ended!", NoticeColor::Muted))
        } else {
            None
        }
    }
}

/// Resolves one player click against the current monster.
pub fn attack(
    state: &mut GameState,
    now_ms: i64,
    rng: &mut impl Rng,
) -> Result<AttackOutcome, ActionError> {
    if state.current_monster.is_none() {
        return Err(ActionError::NoMonster);
    }

    let mut notices = Vec::new();
    notices.extend(update_combo(state, now_ms));

    let berserker = if state.skill_effects.is_active(SkillId::BerserkerMode) {
        3.0
    } else {
        1.0
    };
    let mut damage =
        (state.click_damage + click_damage_bonus(state)) * berserker * state.combo_multiplier;

    let crit_chance = if state.skill_effects.is_active(SkillId::LuckyStrike) {
        1.0
    } else {
        state.critical_hit_chance
    };
    let was_crit = rng.gen::<f64>() < crit_chance;
    if was_crit {
        damage *= state.critical_hit_multiplier;
        notices.push(Notice::new(
            format!("CRIT! {}", format_number(damage)),
            NoticeColor::Danger,
        ));
    }

    let monster = state
        .current_monster
        .as_mut()
        .expect("checked above");
    monster.current_hp -= damage;
    let killed = monster.current_hp <= 0.0;

    state.statistics.total_damage_dealt += damage;
    state.statistics.total_clicks += 1;
    notices.extend(record_challenge_progress(state, ChallengeKind::Clicks, 1.0));

    if killed {
        notices.extend(kill_monster(state, now_ms, rng));
    }
    notices.extend(check_achievements(state, now_ms));

    Ok(AttackOutcome {
        damage,
        was_crit,
        killed,
        notices,
    })
}

/// Settles a dead monster: pays gold, rolls loot, advances the zone on
/// boss kills, and spawns the next target. Treasure chests take a
/// shortcut that leaves the zone kill counter untouched.
pub fn kill_monster(state: &mut GameState, now_ms: i64, rng: &mut impl Rng) -> Vec<Notice> {
    let Some(monster) = state.current_monster.take() else {
        return Vec::new();
    };
    let mut notices = Vec::new();

    let golden_touch = if state.skill_effects.is_active(SkillId::GoldenTouch) {
        3.0
    } else {
        1.0
    };
    let gold_earned = monster.gold_reward * gold_multiplier(state) * golden_touch;
    state.gold += gold_earned;
    state.statistics.total_gold_earned += gold_earned;
    state.monsters_killed += 1;
    state.statistics.total_monsters_killed += 1;

    notices.extend(record_challenge_progress(state, ChallengeKind::Monsters, 1.0));
    notices.extend(record_challenge_progress(state, ChallengeKind::Gold, gold_earned));

    if monster.is_treasure {
        // Chests don't count toward the zone's ten kills
        state.treasure_chest_active = false;
        state.monsters_killed -= 1;
        state.statistics.treasure_chests_found += 1;
        state.statistics.treasure_gold_earned += gold_earned;
        notices.extend(record_challenge_progress(state, ChallengeKind::Treasures, 1.0));
        notices.push(Notice::new(
            format!("💰 TREASURE! +{} gold", format_number(gold_earned)),
            NoticeColor::Treasure,
        ));
        spawn_monster(state, rng);
        notices.extend(check_achievements(state, now_ms));
        return notices;
    }

    notices.extend(crate::loot::roll_equipment_drop(state, &monster, rng));

    if monster.is_legendary {
        notices.push(Notice::new(
            format!("🌟 Legendary kill! +{} gold", format_number(gold_earned)),
            NoticeColor::Prestige,
        ));
    } else if monster.is_elite {
        notices.push(Notice::new(
            format!("✨ Elite kill! +{} gold", format_number(gold_earned)),
            NoticeColor::Info,
        ));
    } else {
        notices.push(Notice::new(
            format!("+{} gold", format_number(gold_earned)),
            NoticeColor::Success,
        ));
    }

    if !monster.is_boss
        && !state.treasure_chest_active
        && rng.gen::<f64>() < state.treasure_chest_chance
    {
        notices.push(spawn_treasure_chest(state));
        return notices;
    }

    if state.monsters_killed % KILLS_PER_ZONE == 0 {
        state.zone += 1;
        if state.zone > state.statistics.highest_zone {
            state.statistics.highest_zone = state.zone;
        }
        notices.push(Notice::new(
            format!("Zone {}!", state.zone),
            NoticeColor::Info,
        ));
        notices.extend(record_challenge_progress(state, ChallengeKind::Zones, 1.0));
        notices.extend(zone_milestone_notice(state.zone));
    }

    spawn_monster(state, rng);
    notices.extend(check_achievements(state, now_ms));
    notices
}

/// Applies one fast tick of hero DPS. Passive damage ignores combo and
/// crit; Time Warp doubles it.
pub fn apply_passive_damage(state: &mut GameState, now_ms: i64, rng: &mut impl Rng) -> Vec<Notice> {
    if state.dps <= 0.0 {
        return Vec::new();
    }
    let Some(monster) = state.current_monster.as_mut() else {
        return Vec::new();
    };

    let warp = if state.skill_effects.is_active(SkillId::TimeWarp) {
        2.0
    } else {
        1.0
    };
    let damage = state.dps / crate::constants::PASSIVE_TICKS_PER_SECOND * warp;
    monster.current_hp -= damage;
    state.statistics.total_damage_dealt += damage;

    if monster.current_hp <= 0.0 {
        kill_monster(state, now_ms, rng)
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const NOW: i64 = 1_700_000_000_000;

    fn no_crit_state() -> GameState {
        let mut state = GameState::new(NOW);
        state.critical_hit_chance = 0.0;
        state
    }

    #[test]
    fn test_attack_without_monster_is_rejected() {
        let mut state = GameState::new(NOW);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(attack(&mut state, NOW, &mut rng).unwrap_err(), ActionError::NoMonster);
    }

    #[test]
    fn test_attack_deals_base_damage() {
        let mut state = no_crit_state();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        crate::monsters::spawn_monster(&mut state, &mut rng);
        let hp_before = state.current_monster.as_ref().unwrap().current_hp;

        let outcome = attack(&mut state, NOW, &mut rng).unwrap();
        assert_eq!(outcome.damage, 1.0);
        assert!(!outcome.was_crit);
        assert_eq!(state.statistics.total_clicks, 1);
        if !outcome.killed {
            let hp_after = state.current_monster.as_ref().unwrap().current_hp;
            assert_eq!(hp_before - hp_after, 1.0);
        }
    }

    #[test]
    fn test_combo_builds_within_window() {
        let mut state = no_crit_state();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        crate::monsters::spawn_monster(&mut state, &mut rng);

        let mut now = NOW;
        for _ in 0..4 {
            attack(&mut state, now, &mut rng).unwrap();
            now += 200;
        }
        // First click reset the combo (gap from epoch-0 is huge), next
        // three each grew it
        assert_eq!(state.combo_count, 3);
        assert!((state.combo_multiplier - 1.45).abs() < 1e-12);
    }

    #[test]
    fn test_combo_breaks_at_window_boundary() {
        let mut state = no_crit_state();
        state.combo_count = 12;
        state.combo_multiplier = 2.8;
        state.last_click_time = NOW;
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        crate::monsters::spawn_monster(&mut state, &mut rng);

        let outcome = attack(&mut state, NOW + 1_000, &mut rng).unwrap();
        assert_eq!(state.combo_count, 0);
        assert_eq!(state.combo_multiplier, 1.0);
        assert!(outcome.notices.iter().any(|n| n.text == "Combo ended!"));
    }

    #[test]
    fn test_combo_multiplier_caps_at_five() {
        let mut state = no_crit_state();
        state.combo_count = 100;
        state.last_click_time = NOW;
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        crate::monsters::spawn_monster(&mut state, &mut rng);

        attack(&mut state, NOW + 500, &mut rng).unwrap();
        assert_eq!(state.combo_multiplier, 5.0);
    }

    #[test]
    fn test_kill_pays_gold_and_advances_counter() {
        let mut state = no_crit_state();
        state.treasure_chest_chance = 0.0;
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        crate::monsters::spawn_monster(&mut state, &mut rng);
        let reward = state.current_monster.as_ref().unwrap().gold_reward;

        let notices = kill_monster(&mut state, NOW, &mut rng);
        assert_eq!(state.gold, reward);
        assert_eq!(state.statistics.total_gold_earned, reward);
        assert_eq!(state.monsters_killed, 1);
        assert!(state.current_monster.is_some());
        assert!(notices.iter().any(|n| n.text.contains("gold")));
    }

    #[test]
    fn test_tenth_kill_advances_zone() {
        let mut state = no_crit_state();
        state.treasure_chest_chance = 0.0;
        state.monsters_killed = 9;
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        crate::monsters::spawn_monster(&mut state, &mut rng);

        let notices = kill_monster(&mut state, NOW, &mut rng);
        assert_eq!(state.zone, 2);
        assert_eq!(state.statistics.highest_zone, 2);
        assert!(notices.iter().any(|n| n.text == "Zone 2!"));
    }

    #[test]
    fn test_golden_touch_triples_gold() {
        let mut state = no_crit_state();
        state.treasure_chest_chance = 0.0;
        state.skill_effects.golden_touch.active = true;
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        crate::monsters::spawn_monster(&mut state, &mut rng);
        let reward = state.current_monster.as_ref().unwrap().gold_reward;

        kill_monster(&mut state, NOW, &mut rng);
        assert_eq!(state.gold, reward * 3.0);
    }

    #[test]
    fn test_treasure_kill_leaves_zone_counter_alone() {
        let mut state = no_crit_state();
        state.treasure_chest_chance = 0.0;
        state.monsters_killed = 4;
        crate::monsters::spawn_treasure_chest(&mut state);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let notices = kill_monster(&mut state, NOW, &mut rng);
        assert_eq!(state.monsters_killed, 4);
        assert!(!state.treasure_chest_active);
        assert_eq!(state.statistics.treasure_chests_found, 1);
        assert!(state.statistics.treasure_gold_earned > 0.0);
        assert!(notices.iter().any(|n| n.text.contains("TREASURE")));
        assert!(!state.current_monster.as_ref().unwrap().is_treasure);
    }

    #[test]
    fn test_lucky_strike_forces_crit() {
        let mut state = GameState::new(NOW);
        state.critical_hit_chance = 0.0;
        state.skill_effects.lucky_strike.active = true;
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        crate::monsters::spawn_monster(&mut state, &mut rng);

        let outcome = attack(&mut state, NOW, &mut rng).unwrap();
        assert!(outcome.was_crit);
        assert_eq!(outcome.damage, 2.0);
    }

    #[test]
    fn test_passive_damage_is_dps_fraction() {
        let mut state = no_crit_state();
        state.dps = 50.0;
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        crate::monsters::spawn_monster(&mut state, &mut rng);
        let hp_before = state.current_monster.as_ref().unwrap().current_hp;

        apply_passive_damage(&mut state, NOW, &mut rng);
        if let Some(monster) = &state.current_monster {
            if monster.current_hp < hp_before {
                assert_eq!(hp_before - monster.current_hp, 5.0);
            }
        }
        assert_eq!(state.statistics.total_damage_dealt, 5.0);
    }

    #[test]
    fn test_time_warp_doubles_passive_damage() {
        let mut state = no_crit_state();
        state.dps = 10.0;
        state.skill_effects.time_warp.active = true;
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        crate::monsters::spawn_monster(&mut state, &mut rng);

        apply_passive_damage(&mut state, NOW, &mut rng);
        assert_eq!(state.statistics.total_damage_dealt, 2.0);
    }
}
