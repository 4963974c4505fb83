use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{CHALLENGE_RESET_INTERVAL_MS, DAILY_CHALLENGE_COUNT};
use crate::game_state::GameState;
use crate::notice::{format_number, Notice, NoticeColor};

/// The metric a daily challenge tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeKind {
    Clicks,
    Monsters,
    Gold,
    Zones,
    Treasures,
    Skills,
}

/// Payout for a completed challenge. Gold goes to the current run,
/// souls and prestige points persist across ascensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChallengeReward {
    pub gold: f64,
    pub prestige_points: u64,
    pub hero_souls: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct ChallengeTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub kind: ChallengeKind,
    pub target: f64,
    pub reward: ChallengeReward,
    pub description: &'static str,
}

static CHALLENGES: [ChallengeTemplate; 6] = [
    ChallengeTemplate {
        id: "click_challenge",
        name: "Click Frenzy",
        emoji: "👆",
        kind: ChallengeKind::Clicks,
        target: 500.0,
        reward: ChallengeReward {
            gold: 5_000.0,
            prestige_points: 0,
            hero_souls: 0,
        },
        description: "Click 500 times today",
    },
    ChallengeTemplate {
        id: "monster_challenge",
        name: "Monster Hunter",
        emoji: "⚔️",
        kind: ChallengeKind::Monsters,
        target: 50.0,
        reward: ChallengeReward {
            gold: 10_000.0,
            prestige_points: 0,
            hero_souls: 0,
        },
        description: "Kill 50 monsters today",
    },
    ChallengeTemplate {
        id: "gold_challenge",
        name: "Gold Rush",
        emoji: "💰",
        kind: ChallengeKind::Gold,
        target: 25_000.0,
        reward: ChallengeReward {
            gold: 0.0,
            prestige_points: 1,
            hero_souls: 0,
        },
        description: "Earn 25,000 gold today",
    },
    ChallengeTemplate {
        id: "treasure_challenge",
        name: "Chest Chaser",
        emoji: "💎",
        kind: ChallengeKind::Treasures,
        target: 3.0,
        reward: ChallengeReward {
            gold: 15_000.0,
            prestige_points: 1,
            hero_souls: 0,
        },
        description: "Crack 3 treasure chests today",
    },
    ChallengeTemplate {
        id: "zone_challenge",
        name: "Pathfinder",
        emoji: "🗺️",
        kind: ChallengeKind::Zones,
        target: 10.0,
        reward: ChallengeReward {
            gold: 0.0,
            prestige_points: 0,
            hero_souls: 2,
        },
        description: "Advance 10 zones today",
    },
    ChallengeTemplate {
        id: "skill_challenge",
        name: "Skill Master",
        emoji: "✨",
        kind: ChallengeKind::Skills,
        target: 10.0,
        reward: ChallengeReward {
            gold: 20_000.0,
            prestige_points: 0,
            hero_souls: 0,
        },
        description: "Use skills 10 times today",
    },
];

pub fn challenge_templates() -> &'static [ChallengeTemplate] {
    &CHALLENGES
}

pub fn challenge_template(id: &str) -> Option<&'static ChallengeTemplate> {
    CHALLENGES.iter().find(|t| t.id == id)
}

/// One of today's three active challenges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyChallenge {
    pub id: String,
    pub kind: ChallengeKind,
    pub target: f64,
    pub progress: f64,
    pub completed: bool,
}

impl DailyChallenge {
    pub fn new(template: &ChallengeTemplate) -> Self {
        Self {
            id: template.id.to_string(),
            kind: template.kind,
            target: template.target,
            progress: 0.0,
            completed: false,
        }
    }
}

/// Draws a fresh set of daily challenges, distinct and in random order.
pub fn generate_daily_challenges(rng: &mut impl Rng) -> Vec<DailyChallenge> {
    CHALLENGES
        .choose_multiple(rng, DAILY_CHALLENGE_COUNT)
        .map(DailyChallenge::new)
        .collect()
}

/// Rerolls the daily set if 24h have elapsed since the last reset.
pub fn maybe_reset_daily_challenges(
    state: &mut GameState,
    now_ms: i64,
    rng: &mut impl Rng,
) -> Option<Notice> {
    if now_ms - state.last_challenge_reset < CHALLENGE_RESET_INTERVAL_MS {
        return None;
    }
    state.daily_challenges = generate_daily_challenges(rng);
    state.last_challenge_reset = now_ms;
    Some(Notice::new(
        "Daily challenges refreshed!",
        NoticeColor::Info,
    ))
}

/// Advances every active challenge of `kind` by `amount`, paying out any
/// that cross their target.
pub fn record_challenge_progress(
    state: &mut GameState,
    kind: ChallengeKind,
    amount: f64,
) -> Vec<Notice> {
    let mut completed = Vec::new();
    for (index, challenge) in state.daily_challenges.iter_mut().enumerate() {
        if challenge.completed || challenge.kind != kind {
            continue;
        }
        challenge.progress += amount;
        if challenge.progress >= challenge.target {
            challenge.completed = true;
            completed.push(index);
        }
    }

    let mut notices = Vec::new();
    for index in completed {
        let id = state.daily_challenges[index].id.clone();
        let Some(template) = challenge_template(&id) else {
            continue;
        };
        // Challenge gold is a reward, not monster income; it bypasses
        // the lifetime gold-earned statistic.
        state.gold += template.reward.gold;
        state.prestige_points += template.reward.prestige_points;
        state.hero_souls += template.reward.hero_souls;
        state.total_hero_souls += template.reward.hero_souls;

        let mut text = format!("🏆 Challenge Complete: {}!", template.name);
        if template.reward.gold > 0.0 {
            text.push_str(&format!(" +{} gold", format_number(template.reward.gold)));
        }
        if template.reward.prestige_points > 0 {
            text.push_str(&format!(" +{} PP", template.reward.prestige_points));
        }
        if template.reward.hero_souls > 0 {
            text.push_str(&format!(" +{} souls", template.reward.hero_souls));
        }
        notices.push(Notice::new(text, NoticeColor::Treasure));
    }
    notices
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_generate_picks_three_distinct() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let challenges = generate_daily_challenges(&mut rng);
        assert_eq!(challenges.len(), 3);
        assert_ne!(challenges[0].id, challenges[1].id);
        assert_ne!(challenges[1].id, challenges[2].id);
        assert_ne!(challenges[0].id, challenges[2].id);
    }

    #[test]
    fn test_progress_pays_out_once() {
        let mut state = GameState::new(NOW);
        let template = challenge_template("click_challenge").unwrap();
        state.daily_challenges = vec![DailyChallenge::new(template)];

        assert!(record_challenge_progress(&mut state, ChallengeKind::Clicks, 499.0).is_empty());
        let notices = record_challenge_progress(&mut state, ChallengeKind::Clicks, 1.0);
        assert_eq!(notices.len(), 1);
        assert!(notices[0].text.contains("Click Frenzy"));
        assert_eq!(state.gold, 5_000.0);

        // Completed challenges never pay again
        assert!(record_challenge_progress(&mut state, ChallengeKind::Clicks, 500.0).is_empty());
        assert_eq!(state.gold, 5_000.0);
    }

    #[test]
    fn test_reward_gold_skips_earned_statistic() {
        let mut state = GameState::new(NOW);
        let template = challenge_template("click_challenge").unwrap();
        state.daily_challenges = vec![DailyChallenge::new(template)];
        record_challenge_progress(&mut state, ChallengeKind::Clicks, 500.0);
        assert_eq!(state.statistics.total_gold_earned, 0.0);
    }

    #[test]
    fn test_soul_reward_credits_lifetime_total() {
        let mut state = GameState::new(NOW);
        let template = challenge_template("zone_challenge").unwrap();
        state.daily_challenges = vec![DailyChallenge::new(template)];
        record_challenge_progress(&mut state, ChallengeKind::Zones, 10.0);
        assert_eq!(state.hero_souls, 2);
        assert_eq!(state.total_hero_souls, 2);
    }

    #[test]
    fn test_reset_after_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut state = GameState::new(NOW);
        state.last_challenge_reset = NOW;

        assert!(maybe_reset_daily_challenges(&mut state, NOW + 1, &mut rng).is_none());
        let notice = maybe_reset_daily_challenges(
            &mut state,
            NOW + CHALLENGE_RESET_INTERVAL_MS,
            &mut rng,
        );
        assert!(notice.is_some());
        assert_eq!(state.daily_challenges.len(), 3);
        assert_eq!(state.last_challenge_reset, NOW + CHALLENGE_RESET_INTERVAL_MS);
    }
}
