//! Profile controller: the single owner of all gamification state for one
//! session.
//!
//! The calculators in [`crate::checkin`] and [`crate::progression`] are pure
//! and know nothing about each other; this controller wires them together,
//! credits check-in awards into the shared point pool, runs achievement
//! evaluation after every mutation, and emits [`Event`]s for consumers.
//! Persistence is an explicit load/save at session boundaries, handled by
//! [`crate::storage::ProfileStore`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::achievements::{AchievementDef, AchievementState, ProgressView};
use crate::checkin::{CheckInOutcome, CheckInState};
use crate::events::Event;
use crate::progression::{PointsAward, ProgressionState};

/// All persisted gamification state for one user profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub checkin: CheckInState,
    #[serde(default)]
    pub progression: ProgressionState,
    #[serde(default)]
    pub achievements: AchievementState,
}

/// Result of one profile mutation: the calculator outcome plus everything
/// that unlocked along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckInResult {
    pub outcome: CheckInOutcome,
    pub unlocked: Vec<&'static AchievementDef>,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AwardResult {
    pub award: PointsAward,
    pub unlocked: Vec<&'static AchievementDef>,
    pub events: Vec<Event>,
}

impl Profile {
    /// Current values achievements are judged against.
    fn view(&self) -> ProgressView {
        ProgressView {
            articles_completed: self.progression.articles_completed(),
            total_points: self.progression.total_points,
            level: self.progression.level,
            best_streak: self.checkin.best_streak(),
        }
    }

    fn evaluate_achievements(&mut self, events: &mut Vec<Event>) -> Vec<&'static AchievementDef> {
        let view = self.view();
        let newly = self.achievements.evaluate(&view);
        for def in &newly {
            events.push(Event::AchievementUnlocked {
                id: def.id.to_string(),
                title: def.title.to_string(),
            });
        }
        newly
    }

    fn push_award_events(award: &PointsAward, events: &mut Vec<Event>) {
        events.push(Event::PointsAwarded {
            points: award.points,
            total_points: award.total_points,
        });
        if award.leveled_up {
            events.push(Event::LevelUp { level: award.level });
        }
        if let Some(skill) = &award.new_skill {
            events.push(Event::SkillUnlocked {
                skill: skill.clone(),
            });
        }
    }

    fn credit(&mut self, delta: u32, skill: Option<&str>, events: &mut Vec<Event>) -> PointsAward {
        let award = self.progression.add_points(delta, skill);
        Self::push_award_events(&award, events);
        award
    }

    /// Attempt the daily check-in and, on success, credit the award into the
    /// point pool and re-run achievement checks.
    pub fn check_in(&mut self, today: NaiveDate) -> CheckInResult {
        let outcome = self.checkin.check_in(today);
        if !outcome.success {
            return CheckInResult {
                outcome,
                unlocked: Vec::new(),
                events: Vec::new(),
            };
        }

        let mut events = vec![Event::CheckInRecorded {
            date: today,
            points: outcome.points,
            streak: outcome.streak,
        }];
        self.credit(outcome.points, None, &mut events);
        let unlocked = self.evaluate_achievements(&mut events);

        CheckInResult {
            outcome,
            unlocked,
            events,
        }
    }

    /// Whether today's check-in has already been claimed.
    pub fn has_checked_today(&self, today: NaiveDate) -> bool {
        self.checkin.has_checked_today(today)
    }

    /// Credit points from a content-completion handler.
    pub fn add_points(&mut self, delta: u32, skill: Option<&str>) -> AwardResult {
        let mut events = Vec::new();
        let award = self.credit(delta, skill, &mut events);
        let unlocked = self.evaluate_achievements(&mut events);
        AwardResult {
            award,
            unlocked,
            events,
        }
    }

    /// Credit an article completion, once per article id. Returns `None`
    /// when the article was already completed.
    pub fn complete_article(
        &mut self,
        article_id: &str,
        points: u32,
        skill: Option<&str>,
    ) -> Option<AwardResult> {
        let award = self.progression.complete_article(article_id, points, skill)?;

        let mut events = vec![Event::ArticleCompleted {
            article_id: article_id.to_string(),
            points,
        }];
        Self::push_award_events(&award, &mut events);
        let unlocked = self.evaluate_achievements(&mut events);
        Some(AwardResult {
            award,
            unlocked,
            events,
        })
    }
}
