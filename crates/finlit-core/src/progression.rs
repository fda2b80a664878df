//! Level progression calculator.
//!
//! Maps a cumulative point total onto a level and fractional sub-level
//! progress using a fixed ascending threshold table, and tracks the
//! deduplicated sets of unlocked skills and completed articles.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Minimum cumulative points for each level; index i holds the cutoff for
/// level i+1. Must stay strictly increasing.
pub const LEVEL_THRESHOLDS: [u32; 10] = [0, 50, 150, 300, 500, 800, 1200, 1700, 2300, 3000];

/// Largest level whose threshold `points` meets, scanning from the top tier
/// down; level 1 is the floor. Non-decreasing in `points`.
pub fn level_of(points: u32) -> u32 {
    LEVEL_THRESHOLDS
        .iter()
        .rposition(|&cutoff| points >= cutoff)
        .map(|i| (i + 1) as u32)
        .unwrap_or(1)
}

/// Percentage progress within the current level, in [0, 100].
///
/// At or above the final threshold the interval is degenerate and progress
/// clamps to 100.
pub fn progress_of(points: u32) -> f64 {
    let level = level_of(points) as usize;
    let lo = LEVEL_THRESHOLDS[level - 1];
    match LEVEL_THRESHOLDS.get(level) {
        Some(&hi) => (100.0 * f64::from(points - lo) / f64::from(hi - lo)).clamp(0.0, 100.0),
        None => 100.0,
    }
}

/// Points needed to reach the next level, if one exists.
pub fn points_to_next_level(points: u32) -> Option<u32> {
    LEVEL_THRESHOLDS
        .get(level_of(points) as usize)
        .map(|&hi| hi - points)
}

/// Cumulative learning progress for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionState {
    /// Cumulative points earned
    pub total_points: u32,

    /// Current level, derived from `total_points`
    pub level: u32,

    /// Progress toward the next level, percent in [0, 100]
    pub level_progress: f64,

    /// Deduplicated set of unlocked skill tags
    pub skills: BTreeSet<String>,

    /// Articles completed at least once
    pub completed_articles: BTreeSet<String>,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            total_points: 0,
            level: 1,
            level_progress: 0.0,
            skills: BTreeSet::new(),
            completed_articles: BTreeSet::new(),
        }
    }
}

/// Outcome of crediting points into the progression state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsAward {
    /// Points credited by this call
    pub points: u32,

    /// Cumulative total after crediting
    pub total_points: u32,

    /// Level after crediting
    pub level: u32,

    /// Progress percent after crediting
    pub level_progress: f64,

    /// True when this award crossed at least one level boundary
    pub leveled_up: bool,

    /// Skill tag newly added to the unlocked set, if any
    pub new_skill: Option<String>,
}

impl ProgressionState {
    /// Credit `delta` points and optionally record a skill tag.
    ///
    /// The delta is unsigned, so the negative-delta contract violation is
    /// unrepresentable. Level and progress are recomputed from the new total.
    pub fn add_points(&mut self, delta: u32, skill: Option<&str>) -> PointsAward {
        let level_before = self.level;

        self.total_points = self.total_points.saturating_add(delta);
        self.level = level_of(self.total_points);
        self.level_progress = progress_of(self.total_points);

        let new_skill = skill.and_then(|tag| {
            if self.skills.insert(tag.to_string()) {
                Some(tag.to_string())
            } else {
                None
            }
        });

        PointsAward {
            points: delta,
            total_points: self.total_points,
            level: self.level,
            level_progress: self.level_progress,
            leveled_up: self.level > level_before,
            new_skill,
        }
    }

    /// Credit an article completion, once per article id.
    ///
    /// The first completion awards `points` and records `skill`; repeat
    /// completions are a no-op.
    pub fn complete_article(
        &mut self,
        article_id: &str,
        points: u32,
        skill: Option<&str>,
    ) -> Option<PointsAward> {
        if !self.completed_articles.insert(article_id.to_string()) {
            return None;
        }
        Some(self.add_points(points, skill))
    }

    /// Number of distinct articles completed.
    pub fn articles_completed(&self) -> u32 {
        self.completed_articles.len() as u32
    }
}
