#![forbid(unsafe_code)]

//! Core domain model and scheduling logic for the Lectio reading plan
//! system.
//!
//! This crate provides:
//! - Domain types (books, scopes, plan configuration, schedule entries)
//! - The built-in 66-book catalog
//! - Scope resolution and deterministic schedule generation
//! - Date <-> reading-day-number mapping
//! - Progress and streak calculation
//! - Persistence adapters (plan JSON, completion log, CSV export)
//!
//! The scheduling components are pure functions over immutable inputs: no
//! I/O, no shared mutable state, safe to call concurrently without
//! synchronization. Persistence and configuration live in their own
//! modules and are only ever invoked by the calling layer.

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod scope;
pub mod calendar;
pub mod schedule;
pub mod progress;
pub mod streak;
pub mod format;
pub mod plan;
pub mod completions;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use scope::{resolve_scope, total_chapters};
pub use calendar::{calendar_span, date_for_day_number, day_number_for_date, projected_end_date};
pub use schedule::{generate_schedule, total_reading_days};
pub use progress::progress;
pub use streak::{current_streak, longest_streak, streak_level, StreakLevel};
pub use plan::ReadingPlan;
pub use completions::CompletionLog;
pub use export::{read_schedule_csv, write_schedule_csv};
