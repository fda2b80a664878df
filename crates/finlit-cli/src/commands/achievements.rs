use clap::Subcommand;
use finlit_core::ACHIEVEMENTS;
use serde::Serialize;

use super::{load_profile, print_json};

#[derive(Subcommand)]
pub enum AchievementsAction {
    /// List all achievements and their unlock state
    List,
}

#[derive(Serialize)]
struct Entry {
    id: &'static str,
    title: &'static str,
    unlocked: bool,
}

pub fn run(action: AchievementsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AchievementsAction::List => {
            let (_, profile) = load_profile()?;
            let entries: Vec<Entry> = ACHIEVEMENTS
                .iter()
                .map(|def| Entry {
                    id: def.id,
                    title: def.title,
                    unlocked: profile.achievements.is_unlocked(def.id),
                })
                .collect();
            print_json(&entries)?;
        }
    }
    Ok(())
}
