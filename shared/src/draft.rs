//! The task posting form: raw field values, validation, and the request it produces.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Budget, TaskType};
use crate::pending::PendingOperation;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    High,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Low, Urgency::Normal, Urgency::High];

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "Flexible",
            Urgency::Normal => "Normal",
            Urgency::High => "Urgent",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Urgency::Low => "Can wait a few days",
            Urgency::Normal => "Within 24 hours",
            Urgency::High => "ASAP",
        }
    }
}

/// A validated task submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub task_type: TaskType,
    pub budget: Budget,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Title,
    Description,
    Location,
    Budget,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "Task Title",
            Field::Description => "Description",
            Field::Location => "Location",
            Field::Budget => "Budget",
        })
    }
}

/// Per-field validation messages, rendered next to the offending input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    fn require(&mut self, field: Field, value: &str) {
        if value.trim().is_empty() {
            self.insert(field, format!("{field} is required"));
        }
    }
}

/// Why a submission did not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(FieldErrors),

    #[error("a submission is already in flight")]
    AlreadyInFlight,
}

/// Raw, unvalidated values of the posting form as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub task_type: TaskType,
    pub budget: String,
    pub urgency: Urgency,
}

impl TaskDraft {
    /// Checks every field and either produces a request or reports all problems at once.
    pub fn validate(&self) -> Result<CreateTaskRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.require(Field::Title, &self.title);
        errors.require(Field::Description, &self.description);
        errors.require(Field::Location, &self.location);

        let budget = self.parse_budget(&mut errors);

        match budget {
            Some(budget) if errors.is_empty() => Ok(CreateTaskRequest {
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                location: self.location.trim().to_string(),
                task_type: self.task_type,
                budget,
                urgency: self.urgency,
            }),
            _ => {
                tracing::debug!(invalid = errors.len(), "task draft rejected");
                Err(errors)
            }
        }
    }

    /// Validates the draft and, only if it is valid, marks `submission` in flight.
    ///
    /// An invalid draft leaves `submission` untouched.
    pub fn begin_submission<T, E>(
        &self,
        submission: &mut PendingOperation<T, E>,
    ) -> Result<CreateTaskRequest, SubmitRejected> {
        let request = self.validate().map_err(SubmitRejected::Invalid)?;
        submission
            .start()
            .map_err(|_| SubmitRejected::AlreadyInFlight)?;
        Ok(request)
    }

    fn parse_budget(&self, errors: &mut FieldErrors) -> Option<Budget> {
        let raw = self.budget.trim();
        if raw.is_empty() {
            errors.insert(Field::Budget, "Budget is required");
            return None;
        }
        let Ok(amount) = Decimal::from_str(raw) else {
            errors.insert(Field::Budget, "Budget must be a number");
            return None;
        };
        match Budget::new(amount) {
            Ok(budget) => Some(budget),
            Err(_) => {
                errors.insert(Field::Budget, "Budget must be greater than zero");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TaskDraft {
        TaskDraft {
            title: "  Walk Rex ".into(),
            description: "30 minutes around the park".into(),
            location: "Elm Park".into(),
            task_type: TaskType::PetCare,
            budget: "15".into(),
            urgency: Urgency::High,
        }
    }

    #[test]
    fn default_draft_is_other_and_normal() {
        let draft = TaskDraft::default();
        assert_eq!(draft.task_type, TaskType::Other);
        assert_eq!(draft.urgency, Urgency::Normal);
    }

    #[test]
    fn valid_draft_becomes_trimmed_request() {
        let request = filled().validate().unwrap();
        assert_eq!(request.title, "Walk Rex");
        assert_eq!(request.task_type, TaskType::PetCare);
        assert_eq!(request.budget.amount(), Decimal::from(15));
        assert_eq!(request.urgency, Urgency::High);
    }

    #[test]
    fn empty_title_is_required() {
        let draft = TaskDraft {
            title: "   ".into(),
            ..filled()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get(Field::Title), Some("Task Title is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn all_problems_reported_together() {
        let errors = TaskDraft::default().validate().unwrap_err();
        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![Field::Title, Field::Description, Field::Location, Field::Budget]
        );
    }

    #[test]
    fn invalid_draft_does_not_start_submission() {
        let draft = TaskDraft {
            title: String::new(),
            ..filled()
        };
        let mut submission: PendingOperation<(), String> = PendingOperation::default();

        match draft.begin_submission(&mut submission) {
            Err(SubmitRejected::Invalid(errors)) => {
                assert_eq!(errors.get(Field::Title), Some("Task Title is required"));
            }
            other => panic!("expected field errors, got {other:?}"),
        }
        assert_eq!(submission, PendingOperation::Idle);
    }

    #[test]
    fn second_submission_is_refused_while_in_flight() {
        let draft = filled();
        let mut submission: PendingOperation<(), String> = PendingOperation::default();

        let request = draft.begin_submission(&mut submission).unwrap();
        assert_eq!(request.title, "Walk Rex");
        assert!(submission.is_in_flight());

        assert_eq!(
            draft.begin_submission(&mut submission),
            Err(SubmitRejected::AlreadyInFlight)
        );
        assert!(submission.is_in_flight());
    }

    #[test]
    fn budget_must_be_positive_number() {
        for (raw, message) in [
            ("abc", "Budget must be a number"),
            ("0", "Budget must be greater than zero"),
            ("-3", "Budget must be greater than zero"),
        ] {
            let draft = TaskDraft {
                budget: raw.into(),
                ..filled()
            };
            let errors = draft.validate().unwrap_err();
            assert_eq!(errors.get(Field::Budget), Some(message), "input {raw:?}");
        }
    }
}
