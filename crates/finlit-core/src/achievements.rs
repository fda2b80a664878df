//! Achievement catalog and unlock evaluation.
//!
//! Achievements transition from locked to unlocked exactly once; evaluation
//! is an idempotent re-check against the current profile view and has no
//! effect for already-unlocked entries.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Unlock condition over the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// At least one article completed
    FirstArticle,
    /// Cumulative points reached the given total
    TotalPoints(u32),
    /// Level reached the given value
    Level(u32),
    /// Best streak reached the given length
    Streak(u32),
}

/// A static achievement definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub condition: Condition,
}

/// Built-in achievement catalog.
pub static ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: "first-article",
        title: "First Steps",
        condition: Condition::FirstArticle,
    },
    AchievementDef {
        id: "points-100",
        title: "Pocket Change",
        condition: Condition::TotalPoints(100),
    },
    AchievementDef {
        id: "points-500",
        title: "Rainy-Day Fund",
        condition: Condition::TotalPoints(500),
    },
    AchievementDef {
        id: "points-1500",
        title: "Compound Interest",
        condition: Condition::TotalPoints(1500),
    },
    AchievementDef {
        id: "level-3",
        title: "Budget Apprentice",
        condition: Condition::Level(3),
    },
    AchievementDef {
        id: "level-5",
        title: "Savings Strategist",
        condition: Condition::Level(5),
    },
    AchievementDef {
        id: "level-10",
        title: "Fund Manager",
        condition: Condition::Level(10),
    },
    AchievementDef {
        id: "streak-3",
        title: "Warming Up",
        condition: Condition::Streak(3),
    },
    AchievementDef {
        id: "streak-7",
        title: "Full Week",
        condition: Condition::Streak(7),
    },
    AchievementDef {
        id: "streak-30",
        title: "Habit Formed",
        condition: Condition::Streak(30),
    },
];

/// Look up a definition by id.
pub fn achievement_by_id(id: &str) -> Option<&'static AchievementDef> {
    ACHIEVEMENTS.iter().find(|def| def.id == id)
}

/// Snapshot of the profile values achievements are judged against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressView {
    pub articles_completed: u32,
    pub total_points: u32,
    pub level: u32,
    pub best_streak: u32,
}

impl Condition {
    fn is_met(self, view: &ProgressView) -> bool {
        match self {
            Condition::FirstArticle => view.articles_completed >= 1,
            Condition::TotalPoints(min) => view.total_points >= min,
            Condition::Level(min) => view.level >= min,
            Condition::Streak(min) => view.best_streak >= min,
        }
    }
}

/// Persistent unlock state: the deduplicated set of unlocked ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementState {
    pub unlocked: BTreeSet<String>,
}

impl AchievementState {
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }

    /// Re-evaluate the catalog against `view`, returning definitions that
    /// transitioned to unlocked by this call.
    pub fn evaluate(&mut self, view: &ProgressView) -> Vec<&'static AchievementDef> {
        let mut newly = Vec::new();
        for def in ACHIEVEMENTS {
            if def.condition.is_met(view) && self.unlocked.insert(def.id.to_string()) {
                newly.push(def);
            }
        }
        newly
    }
}
