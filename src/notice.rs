use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color tag attached to user-facing messages. The collaborator that
/// renders notices decides how each tag is styled; `hex()` provides the
/// conventional palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeColor {
    Gold,
    Success,
    Danger,
    Info,
    Prestige,
    Combo,
    Treasure,
    Muted,
}

impl NoticeColor {
    pub fn hex(&self) -> &'static str {
        match self {
            NoticeColor::Gold => "#FFD700",
            NoticeColor::Success => "#10B981",
            NoticeColor::Danger => "#EF4444",
            NoticeColor::Info => "#6366F1",
            NoticeColor::Prestige => "#8B5CF6",
            NoticeColor::Combo => "#EC4899",
            NoticeColor::Treasure => "#F59E0B",
            NoticeColor::Muted => "#64748B",
        }
    }
}

/// A user-facing message emitted by an engine action, to be rendered by
/// an external collaborator (floating text, log line, toast...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub text: String,
    pub color: NoticeColor,
}

impl Notice {
    pub fn new(text: impl Into<String>, color: NoticeColor) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Reason codes for declined actions. No action in this engine is fatal:
/// a rejected action leaves the game state untouched and reports why.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("not enough gold")]
    NotEnoughGold,
    #[error("not enough prestige points")]
    NotEnoughPrestigePoints,
    #[error("no such hero")]
    UnknownHero,
    #[error("hero already hired")]
    AlreadyHired,
    #[error("hero not hired yet")]
    NotHired,
    #[error("no such upgrade")]
    UnknownUpgrade,
    #[error("upgrade already purchased")]
    AlreadyPurchased,
    #[error("prestige upgrade is at max level")]
    MaxLevel,
    #[error("skill unlocks at zone {unlock_zone}")]
    SkillLocked { unlock_zone: u32 },
    #[error("skill on cooldown for {remaining_ms}ms")]
    SkillOnCooldown { remaining_ms: i64 },
    #[error("no such inventory item")]
    UnknownItem,
    #[error("equipment slot is empty")]
    EmptySlot,
    #[error("ascension requires zone 100")]
    AscensionLocked,
    #[error("no monster to attack")]
    NoMonster,
}

/// Compact display formatting for large currency/damage values.
pub fn format_number(num: f64) -> String {
    if num < 1_000.0 {
        format!("{}", num.floor() as i64)
    } else if num < 1_000_000.0 {
        format!("{:.1}K", num / 1_000.0)
    } else if num < 1_000_000_000.0 {
        format!("{:.1}M", num / 1_000_000.0)
    } else if num < 1_000_000_000_000.0 {
        format!("{:.1}B", num / 1_000_000_000.0)
    } else if num < 1_000_000_000_000_000.0 {
        format!("{:.1}T", num / 1_000_000_000_000.0)
    } else {
        format!("{:.1}Q", num / 1_000_000_000_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_small() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.9), "999");
    }

    #[test]
    fn test_format_number_suffixes() {
        assert_eq!(format_number(1_500.0), "1.5K");
        assert_eq!(format_number(2_500_000.0), "2.5M");
        assert_eq!(format_number(3_000_000_000.0), "3.0B");
        assert_eq!(format_number(4_200_000_000_000.0), "4.2T");
        assert_eq!(format_number(1_000_000_000_000_000.0), "1.0Q");
    }

    #[test]
    fn test_action_error_messages() {
        assert_eq!(
            ActionError::SkillLocked { unlock_zone: 25 }.to_string(),
            "skill unlocks at zone 25"
        );
        assert_eq!(ActionError::NotEnoughGold.to_string(), "not enough gold");
    }
}
