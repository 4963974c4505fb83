use serde::{Deserialize, Serialize};

use crate::challenges::{record_challenge_progress, ChallengeKind};
use crate::game_state::GameState;
use crate::notice::{ActionError, Notice, NoticeColor};

/// The five active skills. Each unlocks at a zone, grants a timed buff,
/// then goes on cooldown measured from the moment of use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillId {
    GoldenTouch,
    BerserkerMode,
    LuckyStrike,
    HeroRally,
    TimeWarp,
}

impl SkillId {
    pub fn all() -> [SkillId; 5] {
        [
            SkillId::GoldenTouch,
            SkillId::BerserkerMode,
            SkillId::LuckyStrike,
            SkillId::HeroRally,
            SkillId::TimeWarp,
        ]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SkillTemplate {
    pub id: SkillId,
    pub name: &'static str,
    pub emoji: &'static str,
    pub duration_ms: i64,
    pub cooldown_ms: i64,
    pub unlock_zone: u32,
    pub description: &'static str,
}

static SKILLS: [SkillTemplate; 5] = [
    SkillTemplate {
        id: SkillId::GoldenTouch,
        name: "Golden Touch",
        emoji: "✨",
        duration_ms: 30_000,
        cooldown_ms: 300_000,
        unlock_zone: 1,
        description: "3x gold from kills for 30s",
    },
    SkillTemplate {
        id: SkillId::BerserkerMode,
        name: "Berserker Mode",
        emoji: "😤",
        duration_ms: 15_000,
        cooldown_ms: 180_000,
        unlock_zone: 5,
        description: "3x click damage for 15s",
    },
    SkillTemplate {
        id: SkillId::LuckyStrike,
        name: "Lucky Strike",
        emoji: "🍀",
        duration_ms: 20_000,
        cooldown_ms: 240_000,
        unlock_zone: 10,
        description: "Every click crits for 20s",
    },
    SkillTemplate {
        id: SkillId::HeroRally,
        name: "Hero Rally",
        emoji: "📯",
        duration_ms: 45_000,
        cooldown_ms: 480_000,
        unlock_zone: 15,
        description: "3x hero DPS for 45s",
    },
    SkillTemplate {
        id: SkillId::TimeWarp,
        name: "Time Warp",
        emoji: "⏳",
        duration_ms: 60_000,
        cooldown_ms: 600_000,
        unlock_zone: 25,
        description: "2x passive damage for 60s",
    },
];

pub fn skill_templates() -> &'static [SkillTemplate] {
    &SKILLS
}

pub fn skill_template(id: SkillId) -> &'static SkillTemplate {
    SKILLS.iter().find(|t| t.id == id).expect("every skill has a template")
}

/// Persistent per-skill bookkeeping. `last_used` of 0 means never used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillState {
    pub id: SkillId,
    pub last_used: i64,
    pub times_used: u64,
}

impl SkillState {
    pub fn new(id: SkillId) -> Self {
        Self {
            id,
            last_used: 0,
            times_used: 0,
        }
    }
}

/// One running buff window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectWindow {
    pub active: bool,
    pub end_time: i64,
}

/// All buff windows, named. Serialized as part of the save so a reload
/// mid-buff keeps (or expires) the buff correctly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEffects {
    pub golden_touch: EffectWindow,
    pub berserker_mode: EffectWindow,
    pub lucky_strike: EffectWindow,
    pub hero_rally: EffectWindow,
    pub time_warp: EffectWindow,
}

impl SkillEffects {
    pub fn get(&self, id: SkillId) -> &EffectWindow {
        match id {
            SkillId::GoldenTouch => &self.golden_touch,
            SkillId::BerserkerMode => &self.berserker_mode,
            SkillId::LuckyStrike => &self.lucky_strike,
            SkillId::HeroRally => &self.hero_rally,
            SkillId::TimeWarp => &self.time_warp,
        }
    }

    pub fn get_mut(&mut self, id: SkillId) -> &mut EffectWindow {
        match id {
            SkillId::GoldenTouch => &mut self.golden_touch,
            SkillId::BerserkerMode => &mut self.berserker_mode,
            SkillId::LuckyStrike => &mut self.lucky_strike,
            SkillId::HeroRally => &mut self.hero_rally,
            SkillId::TimeWarp => &mut self.time_warp,
        }
    }

    pub fn is_active(&self, id: SkillId) -> bool {
        self.get(id).active
    }
}

/// Activates a skill at `now_ms`, starting its buff window and cooldown.
pub fn use_skill(
    state: &mut GameState,
    id: SkillId,
    now_ms: i64,
) -> Result<Vec<Notice>, ActionError> {
    let template = skill_template(id);
    if state.zone < template.unlock_zone {
        return Err(ActionError::SkillLocked {
            unlock_zone: template.unlock_zone,
        });
    }

    let skill = state
        .active_skills
        .iter_mut()
        .find(|s| s.id == id)
        .expect("skill state seeded for every skill");
    if skill.last_used > 0 {
        let elapsed = now_ms - skill.last_used;
        if elapsed < template.cooldown_ms {
            return Err(ActionError::SkillOnCooldown {
                remaining_ms: template.cooldown_ms - elapsed,
            });
        }
    }

    skill.last_used = now_ms;
    skill.times_used += 1;

    let window = state.skill_effects.get_mut(id);
    window.active = true;
    window.end_time = now_ms + template.duration_ms;

    let mut notices = vec![Notice::new(
        format!("{} {} activated!", template.emoji, template.name),
        NoticeColor::Prestige,
    )];
    notices.extend(record_challenge_progress(state, ChallengeKind::Skills, 1.0));
    Ok(notices)
}

/// Deactivates any buff whose window has passed. Called every fast tick.
pub fn expire_skill_effects(state: &mut GameState, now_ms: i64) -> Vec<Notice> {
    let mut notices = Vec::new();
    for id in SkillId::all() {
        let window = state.skill_effects.get_mut(id);
        if window.active && now_ms >= window.end_time {
            window.active = false;
            notices.push(Notice::new(
                format!("{} ended", skill_template(id).name),
                NoticeColor::Muted,
            ));
        }
    }
    notices
}

/// Milliseconds until the skill can be used again, 0 if ready.
pub fn cooldown_remaining(state: &GameState, id: SkillId, now_ms: i64) -> i64 {
    let template = skill_template(id);
    state
        .active_skills
        .iter()
        .find(|s| s.id == id)
        .filter(|s| s.last_used > 0)
        .map(|s| (template.cooldown_ms - (now_ms - s.last_used)).max(0))
        .unwrap_or(0)
}
