use clap::Subcommand;

use super::{load_profile, print_json, print_unlocks};

#[derive(Subcommand)]
pub enum ArticleAction {
    /// Mark an article as completed; awards points on first completion only
    Complete {
        /// Article identifier
        id: String,
        /// Points the article awards
        #[arg(long)]
        points: u32,
        /// Skill tag the article teaches
        #[arg(long)]
        skill: Option<String>,
    },
    /// List completed article ids
    List,
}

pub fn run(action: ArticleAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ArticleAction::Complete { id, points, skill } => {
            let (store, mut profile) = load_profile()?;
            match profile.complete_article(&id, points, skill.as_deref()) {
                Some(result) => {
                    store.save(&profile)?;
                    println!(
                        "completed '{}': +{} points (total {})",
                        id, result.award.points, result.award.total_points
                    );
                    print_unlocks(&result.events);
                }
                None => println!("'{id}' already completed"),
            }
        }
        ArticleAction::List => {
            let (_, profile) = load_profile()?;
            let ids: Vec<&String> = profile.progression.completed_articles.iter().collect();
            print_json(&ids)?;
        }
    }
    Ok(())
}
