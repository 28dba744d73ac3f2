//! Core records: users, tasks, and the declared message/rating schema.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::draft::CreateTaskRequest;
use crate::error::{ParseError, TransitionError};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub const fn from_u128(value: u128) -> Self {
                Self(Uuid::from_u128(value))
            }

            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

id_type!(UserId);
id_type!(TaskId);
id_type!(
    /// Identifier of a chat message.
    MessageId
);
id_type!(RatingId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

/// Average rating in `[0, 5]`, displayed with one decimal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct StarRating(f32);

impl StarRating {
    pub const MAX: f32 = 5.0;

    pub fn new(value: f32) -> Result<Self, ParseError> {
        if value.is_nan() || !(0.0..=Self::MAX).contains(&value) {
            return Err(ParseError::StarRating(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Builds a rating from tenths of a star, saturating at five stars.
    pub fn from_tenths(tenths: u8) -> Self {
        Self(f32::from(tenths.min(50)) / 10.0)
    }

    /// Number of whole stars to fill when rendering five stars.
    pub fn filled_stars(&self) -> usize {
        self.0.floor() as usize
    }
}

impl TryFrom<f32> for StarRating {
    type Error = ParseError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StarRating> for f32 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// External identity anchor handed to the wallet widget.
    pub wallet_address: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub is_runner: bool,
    pub rating: StarRating,
    pub verification: VerificationStatus,
    pub created_at: DateTime<Utc>,
}

/// Positive currency amount offered for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Budget(Decimal);

impl Budget {
    pub fn new(amount: Decimal) -> Result<Self, ParseError> {
        if amount <= Decimal::ZERO {
            return Err(ParseError::Budget(amount.to_string()));
        }
        Ok(Self(amount))
    }

    pub fn from_dollars(dollars: NonZeroU32) -> Self {
        Self(Decimal::from(dollars.get()))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Budget {
    type Error = ParseError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Budget> for Decimal {
    fn from(budget: Budget) -> Self {
        budget.0
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0.normalize())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Grocery,
    Delivery,
    PetCare,
    Cleaning,
    #[default]
    Other,
}

impl TaskType {
    pub const ALL: [TaskType; 5] = [
        TaskType::Grocery,
        TaskType::Delivery,
        TaskType::PetCare,
        TaskType::Cleaning,
        TaskType::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TaskType::Grocery => "grocery",
            TaskType::Delivery => "delivery",
            TaskType::PetCare => "pet_care",
            TaskType::Cleaning => "cleaning",
            TaskType::Other => "other",
        }
    }

    /// Short label used on filter chips.
    pub fn label(&self) -> &'static str {
        match self {
            TaskType::Grocery => "Grocery",
            TaskType::Delivery => "Delivery",
            TaskType::PetCare => "Pet Care",
            TaskType::Cleaning => "Cleaning",
            TaskType::Other => "Other",
        }
    }

    /// Longer label used on the posting form.
    pub fn form_label(&self) -> &'static str {
        match self {
            TaskType::Grocery => "Grocery Shopping",
            other => other.label(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TaskType::Grocery => "🛒",
            TaskType::Delivery => "📦",
            TaskType::PetCare => "🐕",
            TaskType::Cleaning => "🧹",
            TaskType::Other => "📝",
        }
    }
}

impl FromStr for TaskType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskType::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| ParseError::TaskType(s.to_string()))
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Lifecycle state of a task together with the fields only some states carry.
///
/// `posted → accepted → in_progress → completed`, with `cancelled` reachable
/// from every non-terminal state. A runner exists exactly in the accepted,
/// in-progress and completed states; a cancelled task keeps the runner it had
/// when it was cancelled, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaskStatus {
    Posted,
    Accepted {
        runner_id: UserId,
    },
    InProgress {
        runner_id: UserId,
    },
    Completed {
        runner_id: UserId,
        completed_at: DateTime<Utc>,
    },
    Cancelled {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        runner_id: Option<UserId>,
    },
}

impl TaskStatus {
    pub fn key(&self) -> &'static str {
        match self {
            TaskStatus::Posted => "posted",
            TaskStatus::Accepted { .. } => "accepted",
            TaskStatus::InProgress { .. } => "in_progress",
            TaskStatus::Completed { .. } => "completed",
            TaskStatus::Cancelled { .. } => "cancelled",
        }
    }

    pub fn runner_id(&self) -> Option<UserId> {
        match self {
            TaskStatus::Posted => None,
            TaskStatus::Accepted { runner_id }
            | TaskStatus::InProgress { runner_id }
            | TaskStatus::Completed { runner_id, .. } => Some(*runner_id),
            TaskStatus::Cancelled { runner_id } => *runner_id,
        }
    }

    pub fn is_posted(&self) -> bool {
        matches!(self, TaskStatus::Posted)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed { .. })
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskStatus::Completed { .. } | TaskStatus::Cancelled { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTask")]
pub struct Task {
    pub id: TaskId,
    pub poster_id: UserId,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(flatten)]
    pub status: TaskStatus,
    pub budget: Budget,
    pub task_type: TaskType,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Denormalized snapshots for display only.
    pub poster: Option<User>,
    pub runner: Option<User>,
}

/// Wire shape of [`Task`] before the poster/runner invariant is checked.
#[derive(Deserialize)]
struct RawTask {
    id: TaskId,
    poster_id: UserId,
    title: String,
    description: String,
    location: String,
    #[serde(flatten)]
    status: TaskStatus,
    budget: Budget,
    task_type: TaskType,
    photo_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    poster: Option<User>,
    runner: Option<User>,
}

impl TryFrom<RawTask> for Task {
    type Error = TransitionError;

    fn try_from(raw: RawTask) -> Result<Self, Self::Error> {
        if raw.status.runner_id() == Some(raw.poster_id) {
            return Err(TransitionError::PosterIsRunner(raw.poster_id));
        }
        Ok(Self {
            id: raw.id,
            poster_id: raw.poster_id,
            title: raw.title,
            description: raw.description,
            location: raw.location,
            status: raw.status,
            budget: raw.budget,
            task_type: raw.task_type,
            photo_url: raw.photo_url,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            poster: raw.poster,
            runner: raw.runner,
        })
    }
}

impl Task {
    /// Builds a freshly posted task from a validated request.
    pub fn new(request: CreateTaskRequest, poster: &User, now: DateTime<Utc>) -> Self {
        Self {
            id: TaskId::random(),
            poster_id: poster.id,
            title: request.title,
            description: request.description,
            location: request.location,
            status: TaskStatus::Posted,
            budget: request.budget,
            task_type: request.task_type,
            photo_url: None,
            created_at: now,
            updated_at: now,
            poster: Some(poster.clone()),
            runner: None,
        }
    }

    pub fn runner_id(&self) -> Option<UserId> {
        self.status.runner_id()
    }

    pub fn completion_time(&self) -> Option<DateTime<Utc>> {
        match self.status {
            TaskStatus::Completed { completed_at, .. } => Some(completed_at),
            _ => None,
        }
    }

    pub fn involves(&self, user: UserId) -> bool {
        self.poster_id == user || self.runner_id() == Some(user)
    }

    pub fn accept(&mut self, runner: UserId, now: DateTime<Utc>) -> Result<(), TransitionError> {
        if runner == self.poster_id {
            return Err(TransitionError::PosterIsRunner(runner));
        }
        match self.status {
            TaskStatus::Posted => {
                self.move_to(TaskStatus::Accepted { runner_id: runner }, now);
                Ok(())
            }
            _ => Err(self.illegal("accepted")),
        }
    }

    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), TransitionError> {
        match self.status {
            TaskStatus::Accepted { runner_id } => {
                self.move_to(TaskStatus::InProgress { runner_id }, now);
                Ok(())
            }
            _ => Err(self.illegal("in_progress")),
        }
    }

    pub fn complete(&mut self, now: DateTime<Utc>) -> Result<(), TransitionError> {
        match self.status {
            TaskStatus::InProgress { runner_id } => {
                self.move_to(
                    TaskStatus::Completed {
                        runner_id,
                        completed_at: now,
                    },
                    now,
                );
                Ok(())
            }
            _ => Err(self.illegal("completed")),
        }
    }

    pub fn cancel(&mut self, now: DateTime<Utc>) -> Result<(), TransitionError> {
        if self.status.is_terminal() {
            return Err(self.illegal("cancelled"));
        }
        let runner_id = self.status.runner_id();
        self.move_to(TaskStatus::Cancelled { runner_id }, now);
        Ok(())
    }

    fn move_to(&mut self, next: TaskStatus, now: DateTime<Utc>) {
        tracing::debug!(task = %self.id, from = self.status.key(), to = next.key(), "task transition");
        self.status = next;
        self.updated_at = now;
    }

    fn illegal(&self, to: &'static str) -> TransitionError {
        TransitionError::Illegal {
            task: self.id,
            from: self.status.key(),
            to,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub task_id: TaskId,
    pub sender_id: UserId,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub sender: Option<User>,
}

/// Score from one to five stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl TryFrom<u8> for Score {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ParseError::Score(value))
        }
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: RatingId,
    pub task_id: TaskId,
    pub rater_id: UserId,
    pub rated_user_id: UserId,
    pub score: Score,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub rater: Option<User>,
    pub rated_user: Option<User>,
}
