//! Clicker - Idle Clicker Progression & Economy Engine
//!
//! This crate implements the simulation core of an incremental clicker
//! game: combat resolution, currency accrual, cost curves, timed buffs,
//! loot generation, and the ascension reset cycle. Rendering, input
//! binding, and persistence scheduling are external collaborators; the
//! engine exposes action functions that mutate a single [`GameState`]
//! and return user-facing [`notice::Notice`] payloads, plus tick entry
//! points driven by an external scheduler.
//!
//! The core never reads the wall clock and never hides a random source:
//! every time-sensitive operation takes `now_ms` and every rolling
//! operation takes `&mut impl Rng`, so outcomes are reproducible in
//! tests.

// Allow dead code in library - some accessors are only used by collaborators
#![allow(dead_code)]

pub mod achievements;
pub mod ascension;
pub mod bonuses;
pub mod challenges;
pub mod combat_logic;
pub mod constants;
pub mod equipment;
pub mod game_state;
pub mod heroes;
pub mod loot;
pub mod monsters;
pub mod notice;
pub mod progression;
pub mod save_manager;
pub mod skills;
pub mod snapshot;
pub mod tick;
pub mod upgrades;
pub mod zones;

pub use game_state::GameState;
