use crate::content::ContentTable;
use crate::models::{Category, GoalRecord, Submission};
use crate::progress::ProgressCounter;
use chrono::{DateTime, Local};
use rand::{SeedableRng, rngs::StdRng};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Please enter a specific goal.")]
    EmptyGoal,
}

/// One visitor's goals, progress and most recent result.
#[derive(Debug)]
pub struct SessionTracker {
    goals: Vec<GoalRecord>,
    progress: ProgressCounter,
    last: Option<Submission>,
    rng: StdRng,
}

impl SessionTracker {
    pub fn new(rng: StdRng) -> Self {
        Self {
            goals: Vec::new(),
            progress: ProgressCounter::default(),
            last: None,
            rng,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn submit(
        &mut self,
        content: &ContentTable,
        category: &Category,
        goal: &str,
    ) -> Result<&Submission, SubmitError> {
        self.submit_at(content, category, goal, Local::now())
    }

    pub fn submit_at(
        &mut self,
        content: &ContentTable,
        category: &Category,
        goal: &str,
        now: DateTime<Local>,
    ) -> Result<&Submission, SubmitError> {
        if goal.trim().is_empty() {
            return Err(SubmitError::EmptyGoal);
        }

        let record = GoalRecord {
            id: Uuid::new_v4(),
            created_at: now,
            category: category.label(),
            goal: goal.to_string(),
        };
        self.goals.push(record.clone());
        let progress = self.progress.advance();

        let key = category.key();
        let submission = Submission {
            record,
            tip: content.tip_for(key, &mut self.rng).to_string(),
            quote: content.quote_for(key, &mut self.rng).to_string(),
            image: content.image_for(key).to_string(),
            progress,
        };

        Ok(&*self.last.insert(submission))
    }

    /// Records newest first.
    pub fn history(&self) -> impl Iterator<Item = &GoalRecord> {
        self.goals.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn progress(&self) -> u8 {
        self.progress.value()
    }

    pub fn last_submission(&self) -> Option<&Submission> {
        self.last.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 14, hour, 0, 0).unwrap()
    }

    #[test]
    fn blank_goals_are_rejected_without_side_effects() {
        let content = ContentTable::builtin();
        let mut tracker = SessionTracker::seeded(1);

        for goal in ["", "   ", "\t\n"] {
            let err = tracker.submit(&content, &Category::Fitness, goal).unwrap_err();
            assert_eq!(err, SubmitError::EmptyGoal);
        }

        assert_eq!(tracker.progress(), 0);
        assert!(tracker.is_empty());
        assert!(tracker.last_submission().is_none());
    }

    #[test]
    fn rejection_after_success_keeps_prior_state() {
        let content = ContentTable::builtin();
        let mut tracker = SessionTracker::seeded(1);
        let first_id = tracker
            .submit(&content, &Category::Career, "Ship it")
            .unwrap()
            .record
            .id;

        assert!(tracker.submit(&content, &Category::Career, " ").is_err());
        assert_eq!(tracker.progress(), 10);
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.last_submission().unwrap().record.id, first_id);
    }

    #[test]
    fn fitness_scenario() {
        let content = ContentTable::builtin();
        let mut tracker = SessionTracker::seeded(5);
        let submission = tracker
            .submit_at(&content, &Category::Fitness, "Run 5k", at(8))
            .unwrap()
            .clone();

        let entry = content.entry("fitness").unwrap();
        assert_eq!(submission.progress, 10);
        assert_eq!(submission.record.category, "Fitness");
        assert_eq!(submission.record.goal, "Run 5k");
        assert_eq!(submission.record.date_label(), "March 14, 2026");
        assert!(entry.tips.contains(&submission.tip));
        assert!(entry.quotes.contains(&submission.quote));
        assert_eq!(submission.image, entry.image);
        assert_eq!(tracker.progress(), 10);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn custom_category_scenario_uses_default_pools() {
        let content = ContentTable::builtin();
        let mut tracker = SessionTracker::seeded(9);
        let category = Category::from_form("custom", Some("atlantis-quest"));
        let submission = tracker.submit(&content, &category, "Find it").unwrap();

        assert!(content.default_tips.contains(&submission.tip));
        assert!(content.default_quotes.contains(&submission.quote));
        assert_eq!(submission.image, content.default_image);
        assert_eq!(submission.record.category, "Atlantis-quest");
    }

    #[test]
    fn progress_is_ten_per_submission_capped_at_hundred() {
        let content = ContentTable::builtin();
        let mut tracker = SessionTracker::seeded(3);
        for n in 1..=14u32 {
            tracker.submit(&content, &Category::Personal, "Meditate").unwrap();
            assert_eq!(u32::from(tracker.progress()), (10 * n).min(100));
        }
        assert_eq!(tracker.len(), 14);
    }

    #[test]
    fn history_is_newest_first() {
        let content = ContentTable::builtin();
        let mut tracker = SessionTracker::seeded(3);
        for (hour, goal) in [(7, "G1"), (8, "G2"), (9, "G3")] {
            tracker
                .submit_at(&content, &Category::Career, goal, at(hour))
                .unwrap();
        }

        let goals: Vec<&str> = tracker.history().map(|record| record.goal.as_str()).collect();
        assert_eq!(goals, ["G3", "G2", "G1"]);
    }

    #[test]
    fn repeated_goal_text_yields_distinct_records() {
        let content = ContentTable::builtin();
        let mut tracker = SessionTracker::seeded(3);
        let first = tracker
            .submit(&content, &Category::Fitness, "Run 5k")
            .unwrap()
            .record
            .id;
        let second = tracker
            .submit(&content, &Category::Fitness, "Run 5k")
            .unwrap()
            .record
            .id;

        assert_ne!(first, second);
        assert_eq!(tracker.len(), 2);
        let last = tracker.last_submission().unwrap();
        assert_eq!(last.record.id, second);
        assert_eq!(last.progress, 20);
    }

    #[test]
    fn same_seed_same_draws() {
        let content = ContentTable::builtin();
        let mut a = SessionTracker::seeded(77);
        let mut b = SessionTracker::seeded(77);
        for _ in 0..5 {
            let x = a.submit(&content, &Category::Personal, "Read").unwrap().clone();
            let y = b.submit(&content, &Category::Personal, "Read").unwrap().clone();
            assert_eq!((x.tip, x.quote), (y.tip, y.quote));
        }
    }
}
