use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    BOSS_MULTIPLIER, ELITE_CHANCE, ELITE_MULTIPLIER, KILLS_PER_ZONE, LEGENDARY_CHANCE,
    LEGENDARY_MULTIPLIER, MONSTER_BASE_GOLD, MONSTER_BASE_HP, MONSTER_GOLD_GROWTH,
    MONSTER_HP_GROWTH, TREASURE_BASE_GOLD, TREASURE_BASE_HP, TREASURE_GOLD_GROWTH,
    TREASURE_HP_GROWTH,
};
use crate::game_state::GameState;
use crate::notice::{Notice, NoticeColor};
use crate::zones::zone_for;

/// The thing currently being hit. Treasure chests reuse this shape with
/// `is_treasure` set; they don't fight back either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub emoji: String,
    pub max_hp: f64,
    pub current_hp: f64,
    pub gold_reward: f64,
    pub is_boss: bool,
    pub is_elite: bool,
    pub is_legendary: bool,
    pub is_treasure: bool,
}

fn zone_hp(zone: u32) -> f64 {
    (MONSTER_BASE_HP * MONSTER_HP_GROWTH.powi(zone as i32 - 1)).floor()
}

/// Per-kill gold before rarity multipliers, with flat depth bonuses
/// kicking in at zones 10, 25, and 50.
fn zone_gold(zone: u32) -> f64 {
    let mut gold = (MONSTER_BASE_GOLD * MONSTER_GOLD_GROWTH.powi(zone as i32 - 1)).floor();
    if zone >= 10 {
        gold += (zone as f64 * 2.0).floor();
    }
    if zone >= 25 {
        gold += (zone as f64 * 5.0).floor();
    }
    if zone >= 50 {
        gold += (zone as f64 * 10.0).floor();
    }
    gold
}

/// Replaces `current_monster` with the next spawn for the current zone
/// position. Every tenth kill slot is the family's boss; normal spawns
/// can roll elite or legendary variants.
pub fn spawn_monster(state: &mut GameState, rng: &mut impl Rng) {
    let zone = zone_for(state.zone);
    let position = state.monsters_killed % KILLS_PER_ZONE;
    let entry = &zone.monsters[(position % zone.monsters.len() as u64) as usize];
    let is_boss = position == KILLS_PER_ZONE - 1;

    let (name, emoji, multiplier, is_elite, is_legendary) = if is_boss {
        (entry.boss.to_string(), entry.emoji.to_string(), BOSS_MULTIPLIER, false, false)
    } else if rng.gen::<f64>() < ELITE_CHANCE {
        (
            format!("Elite {}", entry.name),
            format!("✨{}", entry.emoji),
            ELITE_MULTIPLIER,
            true,
            false,
        )
    } else if rng.gen::<f64>() < LEGENDARY_CHANCE {
        (
            format!("Legendary {}", entry.name),
            format!("🌟{}", entry.emoji),
            LEGENDARY_MULTIPLIER,
            false,
            true,
        )
    } else {
        (entry.name.to_string(), entry.emoji.to_string(), 1.0, false, false)
    };

    let max_hp = zone_hp(state.zone) * multiplier;
    state.current_monster = Some(Monster {
        name,
        emoji,
        max_hp,
        current_hp: max_hp,
        gold_reward: zone_gold(state.zone) * multiplier,
        is_boss,
        is_elite,
        is_legendary,
        is_treasure: false,
    });
}

fn treasure_gold(zone: u32) -> f64 {
    let mut gold = (TREASURE_BASE_GOLD * TREASURE_GOLD_GROWTH.powi(zone as i32 - 1)).floor();
    if zone >= 10 {
        gold += (zone as f64 * 10.0).floor();
    }
    if zone >= 25 {
        gold += (zone as f64 * 25.0).floor();
    }
    if zone >= 50 {
        gold += (zone as f64 * 50.0).floor();
    }
    gold
}

/// Replaces the current monster with a treasure chest: low HP, a large
/// gold payout that deepens with zone.
pub fn spawn_treasure_chest(state: &mut GameState) -> Notice {
    let zone = state.zone;
    let max_hp = (TREASURE_BASE_HP * TREASURE_HP_GROWTH.powi(zone as i32 - 1)).floor();
    let multiplier = 8.0 + (zone as f64 / 5.0).floor();

    state.treasure_chest_active = true;
    state.current_monster = Some(Monster {
        name: "Treasure Chest".to_string(),
        emoji: "💎".to_string(),
        max_hp,
        current_hp: max_hp,
        gold_reward: treasure_gold(zone) * multiplier,
        is_boss: false,
        is_elite: false,
        is_legendary: false,
        is_treasure: true,
    });

    Notice::new("💎 Treasure Chest Appeared!", NoticeColor::Treasure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_zone_one_spawn() {
        let mut state = GameState::new(NOW);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        spawn_monster(&mut state, &mut rng);
        let monster = state.current_monster.as_ref().unwrap();
        assert_eq!(monster.max_hp, monster.current_hp);
        assert!(!monster.is_treasure);
        if !monster.is_elite && !monster.is_legendary {
            assert_eq!(monster.max_hp, 10.0);
            assert_eq!(monster.gold_reward, 5.0);
        }
    }

    #[test]
    fn test_tenth_slot_is_boss() {
        let mut state = GameState::new(NOW);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        state.monsters_killed = 9;
        spawn_monster(&mut state, &mut rng);
        let monster = state.current_monster.as_ref().unwrap();
        assert!(monster.is_boss);
        assert_eq!(monster.max_hp, 100.0); // 10 HP * 10x boss
        assert_eq!(monster.gold_reward, 50.0);
        assert_eq!(monster.name, "Lumbridge Guard Captain");
    }

    #[test]
    fn test_monster_slot_cycles_with_kills() {
        let mut state = GameState::new(NOW);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        state.monsters_killed = 1;
        spawn_monster(&mut state, &mut rng);
        let name = state.current_monster.as_ref().unwrap().name.clone();
        assert!(name.contains("Cow"));
    }

    #[test]
    fn test_gold_depth_bonuses() {
        assert_eq!(zone_gold(9), (5.0f64 * 1.15f64.powi(8)).floor());
        let base10 = (5.0f64 * 1.15f64.powi(9)).floor();
        assert_eq!(zone_gold(10), base10 + 20.0);
        let base50 = (5.0f64 * 1.15f64.powi(49)).floor();
        assert_eq!(zone_gold(50), base50 + 100.0 + 250.0 + 500.0);
    }

    #[test]
    fn test_treasure_chest_shape() {
        let mut state = GameState::new(NOW);
        state.zone = 10;
        let notice = spawn_treasure_chest(&mut state);
        assert!(notice.text.contains("Treasure Chest"));
        assert!(state.treasure_chest_active);

        let chest = state.current_monster.as_ref().unwrap();
        assert!(chest.is_treasure);
        assert_eq!(chest.max_hp, (5.0f64 * 1.3f64.powi(9)).floor());
        let expected_gold = ((25.0f64 * 1.2f64.powi(9)).floor() + 100.0) * 10.0;
        assert_eq!(chest.gold_reward, expected_gold);
    }

    #[test]
    fn test_deep_zone_reuses_last_table_entry() {
        let mut state = GameState::new(NOW);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        state.zone = 120;
        state.monsters_killed = 9;
        spawn_monster(&mut state, &mut rng);
        let monster = state.current_monster.as_ref().unwrap();
        assert_eq!(monster.name, "Void Overlord");
        assert!(monster.max_hp > 1e20); // 1.55^119 scaling keeps going
    }
}
