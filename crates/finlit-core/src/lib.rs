//! # Finlit Core Library
//!
//! This library provides the gamification core for Finlit, a
//! financial-literacy learning product. It implements a CLI-first
//! philosophy where all operations are available via a standalone CLI
//! binary, with any GUI layer being a thin shell over the same core.
//!
//! ## Architecture
//!
//! - **Check-in engine**: A pure calculator over calendar days that
//!   enforces one check-in per day, tracks streaks, and computes point
//!   awards
//! - **Progression**: Maps cumulative points onto levels via a fixed
//!   threshold table, with skill and article tracking
//! - **Profile**: Single controller owning all per-session state, wiring
//!   the calculators together and running achievement checks
//! - **Storage**: JSON profile snapshots and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`CheckInState`]: Streak state machine, one check-in per calendar day
//! - [`ProgressionState`]: Point total, level, skills, completed articles
//! - [`Profile`]: Session controller with explicit load/save boundaries
//! - [`ProfileStore`] / [`Config`]: Persistence collaborators

pub mod achievements;
pub mod checkin;
pub mod error;
pub mod events;
pub mod profile;
pub mod progression;
pub mod storage;

pub use achievements::{AchievementDef, AchievementState, ProgressView, ACHIEVEMENTS};
pub use checkin::{parse_day, CheckInOutcome, CheckInRecord, CheckInState};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use profile::{AwardResult, CheckInResult, Profile};
pub use progression::{level_of, progress_of, PointsAward, ProgressionState, LEVEL_THRESHOLDS};
pub use storage::{Config, ProfileStore};
