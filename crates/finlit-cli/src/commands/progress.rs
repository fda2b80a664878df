use clap::Subcommand;
use finlit_core::progression::points_to_next_level;
use serde::Serialize;

use super::{load_profile, print_json, print_unlocks};

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Print level and progress as JSON
    Show,
    /// Credit points (e.g. from completing an exercise)
    Add {
        /// Points to credit
        points: u32,
        /// Skill tag to record
        #[arg(long)]
        skill: Option<String>,
    },
}

#[derive(Serialize)]
struct Progress {
    total_points: u32,
    level: u32,
    level_progress: f64,
    points_to_next_level: Option<u32>,
    skills: Vec<String>,
    articles_completed: u32,
}

pub fn run(action: ProgressAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProgressAction::Show => {
            let (_, profile) = load_profile()?;
            let p = &profile.progression;
            let progress = Progress {
                total_points: p.total_points,
                level: p.level,
                level_progress: p.level_progress,
                points_to_next_level: points_to_next_level(p.total_points),
                skills: p.skills.iter().cloned().collect(),
                articles_completed: p.articles_completed(),
            };
            print_json(&progress)?;
        }
        ProgressAction::Add { points, skill } => {
            let (store, mut profile) = load_profile()?;
            let result = profile.add_points(points, skill.as_deref());
            store.save(&profile)?;
            println!(
                "+{} points (total {}, level {})",
                result.award.points, result.award.total_points, result.award.level
            );
            print_unlocks(&result.events);
        }
    }
    Ok(())
}
