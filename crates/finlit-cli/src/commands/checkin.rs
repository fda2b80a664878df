use clap::Subcommand;
use serde::Serialize;

use super::{load_profile, print_json, print_unlocks, resolve_day};

#[derive(Subcommand)]
pub enum CheckinAction {
    /// Print today's check-in status as JSON
    Status {
        /// Calendar day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Claim today's check-in
    Claim {
        /// Calendar day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Serialize)]
struct Status {
    date: chrono::NaiveDate,
    checked_today: bool,
    streak: u32,
    best_streak: u32,
    total_days: u32,
}

pub fn run(action: CheckinAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CheckinAction::Status { date } => {
            let today = resolve_day(date.as_deref())?;
            let (_, profile) = load_profile()?;
            let status = Status {
                date: today,
                checked_today: profile.has_checked_today(today),
                streak: profile.checkin.streak_on(today),
                best_streak: profile.checkin.best_streak(),
                total_days: profile.checkin.total_days,
            };
            print_json(&status)?;
        }
        CheckinAction::Claim { date } => {
            let today = resolve_day(date.as_deref())?;
            let (store, mut profile) = load_profile()?;
            let result = profile.check_in(today);
            if result.outcome.success {
                store.save(&profile)?;
                println!(
                    "checked in: +{} points, streak {}",
                    result.outcome.points, result.outcome.streak
                );
                print_unlocks(&result.events);
            } else {
                println!("already checked in today (streak {})", result.outcome.streak);
            }
        }
    }
    Ok(())
}
