//! Integration test: Complete ascension cycle
//!
//! Tests the full flow: fresh game → deep run → ascend → verify reset
//! and payouts → spend prestige points → second run benefits.

use clicker::ascension::{ascend, can_ascend, prestige_for_zone, souls_for_zone};
use clicker::bonuses::click_damage_bonus;
use clicker::notice::ActionError;
use clicker::progression::purchase_prestige_upgrade;
use clicker::GameState;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const NOW: i64 = 1_700_000_000_000;

#[test]
fn test_complete_ascension_cycle() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut state = GameState::new_game(NOW, &mut rng);

    // Fresh games cannot ascend
    assert!(!can_ascend(&state));
    assert_eq!(
        ascend(&mut state, NOW, &mut rng).unwrap_err(),
        ActionError::AscensionLocked
    );

    // Simulate a deep run's worth of progress
    state.zone = 149;
    state.statistics.highest_zone = 149;
    state.gold = 9_999_999.0;
    state.monsters_killed = 8;
    state.click_damage = 50.0;
    state.heroes[0].owned = true;
    state.heroes[0].level = 120;
    state.upgrades[0].purchased = true;
    state.treasure_chest_active = true;

    let expected_souls = souls_for_zone(&state, 149);
    assert_eq!(expected_souls, 10);
    assert_eq!(prestige_for_zone(149), 2);

    let notices = ascend(&mut state, NOW, &mut rng).unwrap();
    assert!(notices.iter().any(|n| n.text.contains("10 Hero Souls")));
    assert!(notices.iter().any(|n| n.text.contains("2 Prestige Points")));

    // Payouts landed in both run and lifetime pools
    assert_eq!(state.hero_souls, 10);
    assert_eq!(state.total_hero_souls, 10);
    assert_eq!(state.prestige_points, 2);
    assert_eq!(state.total_prestige_points, 2);
    assert_eq!(state.statistics.total_ascensions, 1);

    // Run state reset
    assert_eq!(state.gold, 0.0);
    assert_eq!(state.zone, 1);
    assert_eq!(state.monsters_killed, 0);
    assert!(!state.treasure_chest_active);
    assert!(!state.heroes[0].owned);
    assert_eq!(state.heroes[0].level, 0);
    assert!(!state.upgrades[0].purchased);
    assert!(state.current_monster.is_some());

    // Lifetime progress survives
    assert_eq!(state.click_damage, 50.0);
    assert_eq!(state.statistics.highest_zone, 149);

    // Souls immediately boost click damage on the next run:
    // floor(50 * 10 * 0.1) = 50 bonus damage
    assert_eq!(click_damage_bonus(&state), 50.0);
}

#[test]
fn test_zone_100_pays_no_souls_but_some_prestige() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut state = GameState::new_game(NOW, &mut rng);
    state.zone = 100;

    assert!(can_ascend(&state));
    assert_eq!(souls_for_zone(&state, 100), 0);
    assert_eq!(prestige_for_zone(100), 2);

    ascend(&mut state, NOW, &mut rng).unwrap();
    assert_eq!(state.hero_souls, 0);
    assert_eq!(state.prestige_points, 2);
}

#[test]
fn test_soul_magnet_feeds_the_next_ascension() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut state = GameState::new_game(NOW, &mut rng);

    // First ascension banks enough prestige for Soul Magnet level 1
    state.zone = 149;
    for _ in 0..5 {
        ascend(&mut state, NOW, &mut rng).unwrap();
        state.zone = 149;
    }
    assert_eq!(state.prestige_points, 10);

    // Not enough for soul_magnet (costs 20) yet
    assert_eq!(
        purchase_prestige_upgrade(&mut state, "soul_magnet").unwrap_err(),
        ActionError::NotEnoughPrestigePoints
    );

    for _ in 0..5 {
        ascend(&mut state, NOW, &mut rng).unwrap();
        state.zone = 149;
    }
    purchase_prestige_upgrade(&mut state, "soul_magnet").unwrap();

    // Next ascension pays 50% more souls: floor(10 * 1.5) = 15
    assert_eq!(souls_for_zone(&state, 149), 15);
    let souls_before = state.total_hero_souls;
    ascend(&mut state, NOW, &mut rng).unwrap();
    assert_eq!(state.total_hero_souls, souls_before + 15);
}

#[test]
fn test_auto_clicker_survives_ascension() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut state = GameState::new_game(NOW, &mut rng);
    state.zone = 100;
    let auto = state
        .upgrades
        .iter()
        .position(|u| u.id == "auto_clicker_1")
        .unwrap();
    state.upgrades[auto].purchased = true;

    ascend(&mut state, NOW, &mut rng).unwrap();
    assert!(state.upgrades[auto].purchased);
}
