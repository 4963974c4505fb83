use serde::{Deserialize, Serialize};

use crate::game_state::GameState;
use crate::heroes::hero_templates;
use crate::notice::{Notice, NoticeColor};

/// What an achievement watches. Each variant carries its threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AchievementKind {
    MonstersKilled(u64),
    ZoneReached(u32),
    AnyHeroHired,
    AllHeroesHired,
    GoldEarned(f64),
    TotalClicks(u64),
    Ascensions(u64),
    DamageDealt(f64),
    HeroSouls(u64),
    TreasuresFound(u64),
    TreasureGold(f64),
}

impl AchievementKind {
    pub fn satisfied(&self, state: &GameState) -> bool {
        match *self {
            AchievementKind::MonstersKilled(n) => state.statistics.total_monsters_killed >= n,
            AchievementKind::ZoneReached(z) => state.statistics.highest_zone >= z,
            AchievementKind::AnyHeroHired => state.heroes.iter().any(|h| h.owned),
            AchievementKind::AllHeroesHired => state.heroes.iter().all(|h| h.owned),
            AchievementKind::GoldEarned(g) => state.statistics.total_gold_earned >= g,
            AchievementKind::TotalClicks(c) => state.statistics.total_clicks >= c,
            AchievementKind::Ascensions(a) => state.statistics.total_ascensions >= a,
            AchievementKind::DamageDealt(d) => state.statistics.total_damage_dealt >= d,
            AchievementKind::HeroSouls(s) => state.total_hero_souls >= s,
            AchievementKind::TreasuresFound(t) => state.statistics.treasure_chests_found >= t,
            AchievementKind::TreasureGold(g) => state.statistics.treasure_gold_earned >= g,
        }
    }

    /// (current, target) for progress display, where meaningful.
    pub fn progress(&self, state: &GameState) -> Option<(f64, f64)> {
        match *self {
            AchievementKind::MonstersKilled(n) => {
                Some((state.statistics.total_monsters_killed as f64, n as f64))
            }
            AchievementKind::ZoneReached(z) => {
                Some((state.statistics.highest_zone as f64, z as f64))
            }
            AchievementKind::GoldEarned(g) => Some((state.statistics.total_gold_earned, g)),
            AchievementKind::TotalClicks(c) => {
                Some((state.statistics.total_clicks as f64, c as f64))
            }
            AchievementKind::Ascensions(a) => {
                Some((state.statistics.total_ascensions as f64, a as f64))
            }
            AchievementKind::DamageDealt(d) => Some((state.statistics.total_damage_dealt, d)),
            AchievementKind::HeroSouls(s) => Some((state.total_hero_souls as f64, s as f64)),
            AchievementKind::TreasuresFound(t) => {
                Some((state.statistics.treasure_chests_found as f64, t as f64))
            }
            AchievementKind::TreasureGold(g) => Some((state.statistics.treasure_gold_earned, g)),
            AchievementKind::AnyHeroHired => None,
            AchievementKind::AllHeroesHired => Some((
                state.heroes.iter().filter(|h| h.owned).count() as f64,
                hero_templates().len() as f64,
            )),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AchievementTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub kind: AchievementKind,
    pub description: &'static str,
}

static ACHIEVEMENTS: [AchievementTemplate; 18] = [
    AchievementTemplate {
        id: "first_kill",
        name: "First Blood",
        emoji: "🗡️",
        kind: AchievementKind::MonstersKilled(1),
        description: "Kill your first monster",
    },
    AchievementTemplate {
        id: "zone_5",
        name: "Explorer",
        emoji: "🗺️",
        kind: AchievementKind::ZoneReached(5),
        description: "Reach zone 5",
    },
    AchievementTemplate {
        id: "zone_10",
        name: "Adventurer",
        emoji: "🧭",
        kind: AchievementKind::ZoneReached(10),
        description: "Reach zone 10",
    },
    AchievementTemplate {
        id: "first_hero",
        name: "Recruiter",
        emoji: "🤝",
        kind: AchievementKind::AnyHeroHired,
        description: "Hire your first hero",
    },
    AchievementTemplate {
        id: "gold_1k",
        name: "Pocket Money",
        emoji: "🪙",
        kind: AchievementKind::GoldEarned(1_000.0),
        description: "Earn 1,000 gold",
    },
    AchievementTemplate {
        id: "gold_1m",
        name: "Millionaire",
        emoji: "💰",
        kind: AchievementKind::GoldEarned(1_000_000.0),
        description: "Earn 1,000,000 gold",
    },
    AchievementTemplate {
        id: "clicks_100",
        name: "Finger Warmup",
        emoji: "👆",
        kind: AchievementKind::TotalClicks(100),
        description: "Click 100 times",
    },
    AchievementTemplate {
        id: "clicks_1000",
        name: "Click Machine",
        emoji: "🖱️",
        kind: AchievementKind::TotalClicks(1_000),
        description: "Click 1,000 times",
    },
    AchievementTemplate {
        id: "first_ascend",
        name: "Transcendent",
        emoji: "🌠",
        kind: AchievementKind::Ascensions(1),
        description: "Ascend for the first time",
    },
    AchievementTemplate {
        id: "zone_50",
        name: "Veteran",
        emoji: "🎖️",
        kind: AchievementKind::ZoneReached(50),
        description: "Reach zone 50",
    },
    AchievementTemplate {
        id: "zone_100",
        name: "Legend",
        emoji: "🏆",
        kind: AchievementKind::ZoneReached(100),
        description: "Reach zone 100",
    },
    AchievementTemplate {
        id: "all_heroes",
        name: "Full Party",
        emoji: "👥",
        kind: AchievementKind::AllHeroesHired,
        description: "Hire every hero",
    },
    AchievementTemplate {
        id: "damage_1m",
        name: "Devastator",
        emoji: "💥",
        kind: AchievementKind::DamageDealt(1_000_000.0),
        description: "Deal 1,000,000 total damage",
    },
    AchievementTemplate {
        id: "monsters_1k",
        name: "Exterminator",
        emoji: "☠️",
        kind: AchievementKind::MonstersKilled(1_000),
        description: "Kill 1,000 monsters",
    },
    AchievementTemplate {
        id: "souls_100",
        name: "Soul Collector",
        emoji: "👻",
        kind: AchievementKind::HeroSouls(100),
        description: "Collect 100 hero souls",
    },
    AchievementTemplate {
        id: "first_treasure",
        name: "Treasure Hunter",
        emoji: "💎",
        kind: AchievementKind::TreasuresFound(1),
        description: "Crack open a treasure chest",
    },
    AchievementTemplate {
        id: "treasure_10",
        name: "Chest Cracker",
        emoji: "🧰",
        kind: AchievementKind::TreasuresFound(10),
        description: "Crack open 10 treasure chests",
    },
    AchievementTemplate {
        id: "treasure_gold_1m",
        name: "Dragon's Hoard",
        emoji: "🐲",
        kind: AchievementKind::TreasureGold(1_000_000.0),
        description: "Earn 1,000,000 gold from treasure chests",
    },
];

pub fn achievement_templates() -> &'static [AchievementTemplate] {
    &ACHIEVEMENTS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementState {
    pub id: String,
    pub unlocked: bool,
    pub date_unlocked: Option<i64>,
}

impl AchievementState {
    pub fn new(template: &AchievementTemplate) -> Self {
        Self {
            id: template.id.to_string(),
            unlocked: false,
            date_unlocked: None,
        }
    }
}

/// Scans all locked achievements and unlocks any whose condition now
/// holds. Called after every state-changing action.
pub fn check_achievements(state: &mut GameState, now_ms: i64) -> Vec<Notice> {
    let mut newly_unlocked = Vec::new();
    for (index, template) in ACHIEVEMENTS.iter().enumerate() {
        if !state.achievements[index].unlocked && template.kind.satisfied(state) {
            newly_unlocked.push(index);
        }
    }

    let mut notices = Vec::new();
    for index in newly_unlocked {
        let entry = &mut state.achievements[index];
        entry.unlocked = true;
        entry.date_unlocked = Some(now_ms);
        let template = &ACHIEVEMENTS[index];
        notices.push(Notice::new(
            format!("{} Achievement: {}!", template.emoji, template.name),
            NoticeColor::Treasure,
        ));
    }
    notices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameState;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_fresh_state_unlocks_nothing() {
        let mut state = GameState::new(NOW);
        assert!(check_achievements(&mut state, NOW).is_empty());
    }

    #[test]
    fn test_first_kill_unlocks_once() {
        let mut state = GameState::new(NOW);
        state.statistics.total_monsters_killed = 1;

        let notices = check_achievements(&mut state, NOW);
        assert_eq!(notices.len(), 1);
        assert!(notices[0].text.contains("First Blood"));
        assert_eq!(state.achievements[0].date_unlocked, Some(NOW));

        // Already unlocked, no repeat notice
        assert!(check_achievements(&mut state, NOW + 1).is_empty());
    }

    #[test]
    fn test_multiple_unlocks_in_one_pass() {
        let mut state = GameState::new(NOW);
        state.statistics.total_clicks = 1_500;
        let notices = check_achievements(&mut state, NOW);
        assert_eq!(notices.len(), 2); // clicks_100 and clicks_1000
    }

    #[test]
    fn test_all_heroes_progress() {
        let mut state = GameState::new(NOW);
        state.heroes[0].owned = true;
        state.heroes[1].owned = true;
        let kind = AchievementKind::AllHeroesHired;
        assert_eq!(kind.progress(&state), Some((2.0, 15.0)));
        assert!(!kind.satisfied(&state));
    }

    #[test]
    fn test_soul_achievement_uses_lifetime_total() {
        let mut state = GameState::new(NOW);
        state.hero_souls = 0;
        state.total_hero_souls = 100;
        assert!(AchievementKind::HeroSouls(100).satisfied(&state));
    }
}
