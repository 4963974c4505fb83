// Scheduler cadence (driven externally, see tick module)
pub const FAST_TICK_INTERVAL_MS: u64 = 100;
pub const STATS_TICK_INTERVAL_MS: u64 = 1000;

// Combat constants
pub const BASE_CLICK_DAMAGE: f64 = 1.0;
pub const PASSIVE_TICKS_PER_SECOND: f64 = 10.0;
pub const COMBO_WINDOW_MS: i64 = 1000;
pub const COMBO_STEP: f64 = 0.15;
pub const COMBO_MAX_MULTIPLIER: f64 = 5.0;
pub const BASE_CRIT_CHANCE: f64 = 0.05;
pub const BASE_CRIT_MULTIPLIER: f64 = 2.0;

// Monster scaling
pub const MONSTER_BASE_HP: f64 = 10.0;
pub const MONSTER_HP_GROWTH: f64 = 1.55;
pub const MONSTER_BASE_GOLD: f64 = 5.0;
pub const MONSTER_GOLD_GROWTH: f64 = 1.15;
pub const BOSS_MULTIPLIER: f64 = 10.0;
pub const ELITE_MULTIPLIER: f64 = 3.0;
pub const LEGENDARY_MULTIPLIER: f64 = 25.0;
pub const ELITE_CHANCE: f64 = 0.1;
pub const LEGENDARY_CHANCE: f64 = 0.005;
pub const KILLS_PER_ZONE: u64 = 10;

// Treasure chest scaling
pub const BASE_TREASURE_CHANCE: f64 = 0.05;
pub const TREASURE_BASE_HP: f64 = 5.0;
pub const TREASURE_HP_GROWTH: f64 = 1.3;
pub const TREASURE_BASE_GOLD: f64 = 25.0;
pub const TREASURE_GOLD_GROWTH: f64 = 1.2;

// Hero souls grant +10% click damage and +10% DPS per soul
pub const SOUL_BONUS_PER_SOUL: f64 = 0.1;

// Hero leveling
pub const MAX_BULK_HERO_LEVELS: u32 = 1000;

// Auto-clicker rolls once per fast tick
pub const AUTO_CLICK_CHANCE_PER_TICK: f64 = 0.1;

// Ascension gates and rewards
pub const ASCENSION_MIN_ZONE: u32 = 100;
pub const SOULS_ZONE_OFFSET: u32 = 99;
pub const SOULS_PER_ZONES: u32 = 5;
pub const PRESTIGE_PER_ZONES: u32 = 50;

// Daily challenges regenerate on a 24h wall-clock cadence
pub const CHALLENGE_RESET_INTERVAL_MS: i64 = 24 * 60 * 60 * 1000;
pub const DAILY_CHALLENGE_COUNT: usize = 3;

// Save system constants
pub const SAVE_VERSION_MAGIC: u64 = 0x434C49434B525300; // "CLICKRS\0" in hex
