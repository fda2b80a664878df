pub mod achievements;
pub mod article;
pub mod checkin;
pub mod config;
pub mod progress;
pub mod stats;

use chrono::NaiveDate;
use finlit_core::{parse_day, Config, Event, Profile, ProfileStore};

/// Resolve the working day: an explicit `--date` wins, otherwise the local
/// calendar day.
pub fn resolve_day(date: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(s) => Ok(parse_day(s)?),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Load the profile snapshot from the default store.
pub fn load_profile() -> Result<(ProfileStore, Profile), Box<dyn std::error::Error>> {
    let store = ProfileStore::open()?;
    let profile = store.load()?;
    Ok((store, profile))
}

/// Print a value as JSON, honoring the `pretty_output` config flag.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    let json = if Config::load_or_default().pretty_output {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

/// Print any unlock events in a human-readable trailer.
pub fn print_unlocks(events: &[Event]) {
    for event in events {
        match event {
            Event::LevelUp { level } => println!("level up! now level {level}"),
            Event::SkillUnlocked { skill } => println!("skill unlocked: {skill}"),
            Event::AchievementUnlocked { title, .. } => {
                println!("achievement unlocked: {title}");
            }
            _ => {}
        }
    }
}
