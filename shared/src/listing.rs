//! Which tasks a browsing runner gets to see.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::model::{Task, TaskType};

/// Type filter chip on the home screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Only(TaskType),
}

impl TaskFilter {
    /// Chips in display order, `All` first.
    pub fn chips() -> impl Iterator<Item = TaskFilter> {
        std::iter::once(TaskFilter::All).chain(TaskType::ALL.into_iter().map(TaskFilter::Only))
    }

    pub fn key(&self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Only(t) => t.key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All Tasks",
            TaskFilter::Only(t) => t.label(),
        }
    }

    pub fn matches(&self, task_type: TaskType) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Only(t) => *t == task_type,
        }
    }
}

impl FromStr for TaskFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(TaskFilter::All);
        }
        s.parse::<TaskType>()
            .map(TaskFilter::Only)
            .map_err(|_| ParseError::TaskFilter(s.to_string()))
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The filter chip and search box state together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub filter: TaskFilter,
    pub search: String,
}

impl ListingQuery {
    pub fn new(filter: TaskFilter, search: impl Into<String>) -> Self {
        Self {
            filter,
            search: search.into(),
        }
    }

    /// Whether the user narrowed the listing; picks the empty-state wording.
    pub fn is_narrowed(&self) -> bool {
        self.filter != TaskFilter::All || !self.search.is_empty()
    }

    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        available_tasks(tasks, self.filter, &self.search)
    }
}

/// Tasks still open for a runner: posted, of the chosen type, and mentioning
/// `search` in the title or description (case-insensitive). Input order is kept.
pub fn available_tasks<'a>(tasks: &'a [Task], filter: TaskFilter, search: &str) -> Vec<&'a Task> {
    let needle = search.to_lowercase();
    let listing: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.status.is_posted())
        .filter(|task| filter.matches(task.task_type))
        .filter(|task| {
            needle.is_empty()
                || task.title.to_lowercase().contains(&needle)
                || task.description.to_lowercase().contains(&needle)
        })
        .collect();

    tracing::debug!(
        total = tasks.len(),
        shown = listing.len(),
        filter = filter.key(),
        "derived task listing"
    );
    listing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{DataSource, MockDataSource};
    use chrono::Utc;

    fn tasks() -> Vec<Task> {
        MockDataSource::new(Utc::now()).list_tasks().unwrap()
    }

    fn titles(listing: &[&Task]) -> Vec<String> {
        listing.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn all_with_empty_search_is_every_posted_task() {
        let tasks = tasks();
        let listing = available_tasks(&tasks, TaskFilter::All, "");
        let expected: Vec<&Task> = tasks.iter().filter(|t| t.status.is_posted()).collect();
        assert_eq!(listing, expected);
        assert_eq!(listing.len(), 5);
    }

    #[test]
    fn type_filter_keeps_only_that_type() {
        let tasks = tasks();
        let listing = available_tasks(&tasks, TaskFilter::Only(TaskType::PetCare), "");
        assert_eq!(titles(&listing), vec!["Walk my golden retriever"]);
    }

    #[test]
    fn search_hits_title_or_description() {
        let tasks = tasks();
        let by_title = available_tasks(&tasks, TaskFilter::All, "KITCHEN");
        assert_eq!(titles(&by_title), vec!["Deep clean kitchen"]);

        let by_description = available_tasks(&tasks, TaskFilter::All, "porch");
        assert_eq!(
            titles(&by_description),
            vec!["Pick up a package from the post office"]
        );
    }

    #[test]
    fn search_ignores_claimed_tasks() {
        let tasks = tasks();
        assert!(available_tasks(&tasks, TaskFilter::All, "pharmacy").is_empty());
    }

    #[test]
    fn filter_and_search_combine_with_and() {
        let tasks = tasks();
        let listing = available_tasks(&tasks, TaskFilter::Only(TaskType::Cleaning), "grocery");
        assert!(listing.is_empty());
    }

    #[test]
    fn filter_keys_parse() {
        assert_eq!("all".parse::<TaskFilter>().unwrap(), TaskFilter::All);
        assert_eq!(
            "pet_care".parse::<TaskFilter>().unwrap(),
            TaskFilter::Only(TaskType::PetCare)
        );
        assert_eq!(
            "everything".parse::<TaskFilter>().unwrap_err(),
            ParseError::TaskFilter("everything".into())
        );
    }

    #[test]
    fn chips_start_with_all() {
        let labels: Vec<&str> = TaskFilter::chips().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["All Tasks", "Grocery", "Delivery", "Pet Care", "Cleaning", "Other"]
        );
    }

    #[test]
    fn narrowed_query_detection() {
        assert!(!ListingQuery::default().is_narrowed());
        assert!(ListingQuery::new(TaskFilter::All, "milk").is_narrowed());
        assert!(ListingQuery::new(TaskFilter::Only(TaskType::Other), "").is_narrowed());
    }
}
