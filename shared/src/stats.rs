//! Profile activity summary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{Task, UserId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub tasks_posted: u32,
    /// Completed tasks the user took part in, as poster or runner.
    pub tasks_completed: u32,
    pub total_earned: Decimal,
    pub total_spent: Decimal,
    /// `tasks_completed / tasks_posted` as a rounded percentage, 0 with nothing posted.
    pub success_rate: u32,
}

impl ProfileStats {
    pub fn is_empty(&self) -> bool {
        self.tasks_posted == 0 && self.tasks_completed == 0
    }
}

pub fn posted_by(tasks: &[Task], user: UserId) -> Vec<&Task> {
    tasks.iter().filter(|t| t.poster_id == user).collect()
}

pub fn completed_involving(tasks: &[Task], user: UserId) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| t.status.is_completed() && t.involves(user))
        .collect()
}

pub fn profile_stats(tasks: &[Task], user: UserId) -> ProfileStats {
    let tasks_posted = posted_by(tasks, user).len() as u32;
    let completed = completed_involving(tasks, user);

    let total_earned: Decimal = completed
        .iter()
        .filter(|t| t.runner_id() == Some(user))
        .map(|t| t.budget.amount())
        .sum();
    let total_spent: Decimal = completed
        .iter()
        .filter(|t| t.poster_id == user)
        .map(|t| t.budget.amount())
        .sum();

    let tasks_completed = completed.len() as u32;
    ProfileStats {
        tasks_posted,
        tasks_completed,
        total_earned,
        total_spent,
        success_rate: success_rate(tasks_completed, tasks_posted),
    }
}

fn success_rate(completed: u32, posted: u32) -> u32 {
    if posted == 0 {
        return 0;
    }
    (f64::from(completed) / f64::from(posted) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{DataSource, MockDataSource, ALEX, PRIYA};
    use chrono::Utc;

    #[test]
    fn seed_stats_for_current_user() {
        let tasks = MockDataSource::new(Utc::now()).list_tasks().unwrap();
        let stats = profile_stats(&tasks, ALEX);
        assert_eq!(stats.tasks_posted, 4);
        assert_eq!(stats.tasks_completed, 2);
        assert_eq!(stats.total_spent, Decimal::from(30));
        assert_eq!(stats.total_earned, Decimal::from(45));
        assert_eq!(stats.success_rate, 50);
    }

    #[test]
    fn nothing_posted_means_zero_rate() {
        assert_eq!(profile_stats(&[], ALEX), ProfileStats::default());
        assert!(ProfileStats::default().is_empty());
    }

    #[test]
    fn rate_rounds_to_nearest() {
        assert_eq!(success_rate(1, 3), 33);
        assert_eq!(success_rate(2, 3), 67);
        assert_eq!(success_rate(1, 8), 13);
        assert_eq!(success_rate(3, 2), 150);
    }

    #[test]
    fn tab_helpers_use_same_predicates() {
        let tasks = MockDataSource::new(Utc::now()).list_tasks().unwrap();
        let stats = profile_stats(&tasks, PRIYA);
        assert_eq!(posted_by(&tasks, PRIYA).len() as u32, stats.tasks_posted);
        assert_eq!(
            completed_involving(&tasks, PRIYA).len() as u32,
            stats.tasks_completed
        );
    }
}
