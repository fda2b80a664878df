use finlit_core::progression::points_to_next_level;
use serde::Serialize;

use super::{load_profile, print_json};

#[derive(Serialize)]
struct Summary {
    total_points: u32,
    level: u32,
    level_progress: f64,
    points_to_next_level: Option<u32>,
    current_streak: u32,
    best_streak: u32,
    total_check_in_days: u32,
    articles_completed: u32,
    skills: usize,
    achievements_unlocked: usize,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (_, profile) = load_profile()?;
    let today = chrono::Local::now().date_naive();

    let summary = Summary {
        total_points: profile.progression.total_points,
        level: profile.progression.level,
        level_progress: profile.progression.level_progress,
        points_to_next_level: points_to_next_level(profile.progression.total_points),
        current_streak: profile.checkin.streak_on(today),
        best_streak: profile.checkin.best_streak(),
        total_check_in_days: profile.checkin.total_days,
        articles_completed: profile.progression.articles_completed(),
        skills: profile.progression.skills.len(),
        achievements_unlocked: profile.achievements.unlocked.len(),
    };
    print_json(&summary)?;
    Ok(())
}
