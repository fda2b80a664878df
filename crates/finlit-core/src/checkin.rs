//! Daily check-in streak engine.
//!
//! Decides, once per calendar day, whether a check-in is newly valid,
//! computes the resulting streak length and point award, and records an
//! immutable history entry. All operations are synchronous pure
//! computations over in-memory state; persistence happens elsewhere.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Points for the first day of a streak.
pub const BASE_POINTS: u32 = 10;

/// Extra points per consecutive day beyond the first. Accrual is uncapped.
pub const STREAK_BONUS_PER_DAY: u32 = 2;

/// Immutable log entry for one successful daily check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInRecord {
    /// Calendar day of the check-in
    pub date: NaiveDate,

    /// Points awarded for this day
    pub points: u32,

    /// Streak length at the time of recording (>= 1)
    pub streak: u32,
}

/// Mutable check-in state for one profile.
///
/// Invariants: `total_days == history.len()`, `last_check_in` matches the
/// final history entry whenever history is non-empty, and history dates are
/// strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInState {
    /// Most recent successful check-in day, if any
    pub last_check_in: Option<NaiveDate>,

    /// Streak length as of the most recent check-in
    pub current_streak: u32,

    /// Total number of successful check-ins ever
    pub total_days: u32,

    /// Append-only record of every successful check-in
    pub history: Vec<CheckInRecord>,
}

/// Result of a check-in attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInOutcome {
    /// False when today was already claimed
    pub success: bool,

    /// Points awarded (0 when `success` is false)
    pub points: u32,

    /// Streak length after the attempt
    pub streak: u32,
}

/// Award formula: base 10, +2 per consecutive day beyond the first.
pub fn points_for_streak(streak: u32) -> u32 {
    BASE_POINTS + streak.saturating_sub(1) * STREAK_BONUS_PER_DAY
}

/// Parse a `YYYY-MM-DD` calendar-day string.
///
/// This is the validation boundary for callers holding raw date strings;
/// past it, malformed dates are unrepresentable.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] if the input does not parse.
pub fn parse_day(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        input: input.to_string(),
    })
}

impl CheckInState {
    /// Whether today's check-in has already been claimed.
    pub fn has_checked_today(&self, today: NaiveDate) -> bool {
        self.last_check_in == Some(today)
    }

    /// Streak as observed on `today`: zero once the most recent check-in is
    /// older than yesterday (or there never was one). The stored
    /// `current_streak` holds the value at time of recording.
    pub fn streak_on(&self, today: NaiveDate) -> u32 {
        match self.last_check_in {
            Some(last) if last == today || Some(last) == today.pred_opt() => self.current_streak,
            _ => 0,
        }
    }

    /// Longest streak ever recorded.
    pub fn best_streak(&self) -> u32 {
        self.history.iter().map(|r| r.streak).max().unwrap_or(0)
    }

    /// Total points ever awarded through check-ins.
    pub fn total_points(&self) -> u32 {
        self.history.iter().map(|r| r.points).sum()
    }

    /// Attempt the daily check-in for `today`.
    ///
    /// At most one check-in per calendar day succeeds; a repeat attempt on
    /// the same day, or an attempt dated on or before an already-claimed
    /// day, returns `success: false` and leaves the state untouched, so
    /// history dates stay strictly increasing. A check-in the day after the
    /// previous one continues the streak; any longer gap (or no prior
    /// check-in) resets it to 1.
    pub fn check_in(&mut self, today: NaiveDate) -> CheckInOutcome {
        if self.last_check_in.is_some_and(|last| today <= last) {
            return CheckInOutcome {
                success: false,
                points: 0,
                streak: self.current_streak,
            };
        }

        let yesterday = today.checked_sub_days(Days::new(1));
        let streak = if self.last_check_in.is_some() && self.last_check_in == yesterday {
            self.current_streak + 1
        } else {
            1
        };
        let points = points_for_streak(streak);

        self.history.push(CheckInRecord {
            date: today,
            points,
            streak,
        });
        self.last_check_in = Some(today);
        self.current_streak = streak;
        self.total_days += 1;

        CheckInOutcome {
            success: true,
            points,
            streak,
        }
    }
}
