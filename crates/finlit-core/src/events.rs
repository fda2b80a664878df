use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Every profile state change produces an Event. Consumers (CLI output,
/// a GUI layer) render from these; the core never performs I/O itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    CheckInRecorded {
        date: NaiveDate,
        points: u32,
        streak: u32,
    },
    ArticleCompleted {
        article_id: String,
        points: u32,
    },
    PointsAwarded {
        points: u32,
        total_points: u32,
    },
    LevelUp {
        level: u32,
    },
    SkillUnlocked {
        skill: String,
    },
    AchievementUnlocked {
        id: String,
        title: String,
    },
}
