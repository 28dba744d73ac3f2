//! Where users and tasks come from.
//!
//! Derivations and views only ever see a [`DataSource`]; the bundled
//! [`MockDataSource`] serves a fixed neighborhood dataset so the app runs
//! without a server.

use std::num::NonZeroU32;

use chrono::{DateTime, Duration, Utc};

use crate::error::DataError;
use crate::model::{
    Budget, StarRating, Task, TaskId, TaskStatus, TaskType, User, UserId, VerificationStatus,
};

/// Read-only access to the marketplace data.
///
/// Every call returns a fresh snapshot; nothing returned is live.
pub trait DataSource {
    fn list_tasks(&self) -> Result<Vec<Task>, DataError>;

    /// The single distinguished user the app runs as.
    fn current_user(&self) -> Result<User, DataError>;

    fn user(&self, id: UserId) -> Result<User, DataError>;
}

pub const ALEX: UserId = UserId::from_u128(0x0001);
pub const ALICE: UserId = UserId::from_u128(0x0002);
pub const MARCUS: UserId = UserId::from_u128(0x0003);
pub const PRIYA: UserId = UserId::from_u128(0x0004);
pub const SAM: UserId = UserId::from_u128(0x0005);

/// In-memory seed data with timestamps anchored to a chosen `now`.
#[derive(Debug, Clone)]
pub struct MockDataSource {
    current: UserId,
    users: Vec<User>,
    tasks: Vec<Task>,
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl MockDataSource {
    pub fn new(now: DateTime<Utc>) -> Self {
        let users = seed_users(now);
        let tasks = seed_tasks(now, &users);
        Self {
            current: ALEX,
            users,
            tasks,
        }
    }

    /// A source over arbitrary records, mainly for tests and fixtures.
    pub fn with_records(current: User, mut users: Vec<User>, tasks: Vec<Task>) -> Self {
        let current_id = current.id;
        if !users.iter().any(|u| u.id == current_id) {
            users.insert(0, current);
        }
        Self {
            current: current_id,
            users,
            tasks,
        }
    }
}

impl DataSource for MockDataSource {
    fn list_tasks(&self) -> Result<Vec<Task>, DataError> {
        Ok(self.tasks.clone())
    }

    fn current_user(&self) -> Result<User, DataError> {
        self.user(self.current)
    }

    fn user(&self, id: UserId) -> Result<User, DataError> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(DataError::UserNotFound(id))
    }
}

fn seed_users(now: DateTime<Utc>) -> Vec<User> {
    let user = |id: UserId,
                wallet: &str,
                name: &str,
                is_runner: bool,
                tenths: u8,
                verification: VerificationStatus,
                days: i64| User {
        id,
        wallet_address: wallet.to_string(),
        display_name: name.to_string(),
        avatar_url: None,
        is_runner,
        rating: StarRating::from_tenths(tenths),
        verification,
        created_at: now - Duration::days(days),
    };

    vec![
        user(
            ALEX,
            "0x742d35Cc6634C0532925a3b844Bc454e4438f44e",
            "Alex Rivera",
            true,
            48,
            VerificationStatus::Verified,
            210,
        ),
        user(
            ALICE,
            "0x8ba1f109551bD432803012645Ac136ddd64DBA72",
            "Alice Johnson",
            true,
            49,
            VerificationStatus::Verified,
            400,
        ),
        user(
            MARCUS,
            "0x1CBd3b2770909D4e10f157cABC84C7264073C9Ec",
            "Marcus Lee",
            true,
            46,
            VerificationStatus::Verified,
            95,
        ),
        user(
            PRIYA,
            "0xdD2FD4581271e230360230F9337D5c0430Bf44C0",
            "Priya Patel",
            false,
            47,
            VerificationStatus::Pending,
            30,
        ),
        user(
            SAM,
            "0xbDA5747bFD65F08deb54cb465eB87D40e51B197E",
            "Sam Okafor",
            true,
            43,
            VerificationStatus::Pending,
            12,
        ),
    ]
}

struct Seed {
    id: u128,
    poster: UserId,
    title: &'static str,
    description: &'static str,
    location: &'static str,
    task_type: TaskType,
    dollars: u32,
    hours_ago: i64,
    state: SeedState,
}

enum SeedState {
    Posted,
    Accepted(UserId),
    InProgress(UserId),
    Completed(UserId, i64),
    Cancelled,
}

fn seed_tasks(now: DateTime<Utc>, users: &[User]) -> Vec<Task> {
    let seeds = [
        Seed {
            id: 0x101,
            poster: PRIYA,
            title: "Weekly grocery run",
            description: "Pick up fruit, milk and bread from the corner market. List will be shared in chat.",
            location: "Maple Ave",
            task_type: TaskType::Grocery,
            dollars: 25,
            hours_ago: 2,
            state: SeedState::Posted,
        },
        Seed {
            id: 0x102,
            poster: MARCUS,
            title: "Pick up a package from the post office",
            description: "Parcel is under my name, ID photo provided. Drop it at my front porch.",
            location: "Downtown Post Office",
            task_type: TaskType::Delivery,
            dollars: 15,
            hours_ago: 5,
            state: SeedState::Posted,
        },
        Seed {
            id: 0x103,
            poster: PRIYA,
            title: "Walk my golden retriever",
            description: "Friendly dog, needs a 45 minute walk in the afternoon.",
            location: "Elm Park",
            task_type: TaskType::PetCare,
            dollars: 20,
            hours_ago: 26,
            state: SeedState::Posted,
        },
        Seed {
            id: 0x104,
            poster: SAM,
            title: "Deep clean kitchen",
            description: "Oven, fridge and floors. Cleaning supplies provided.",
            location: "Oak Street",
            task_type: TaskType::Cleaning,
            dollars: 60,
            hours_ago: 3,
            state: SeedState::Posted,
        },
        Seed {
            id: 0x105,
            poster: MARCUS,
            title: "Assemble a bookshelf",
            description: "Flat-pack bookshelf, tools on site. Should take about an hour.",
            location: "Birch Lane",
            task_type: TaskType::Other,
            dollars: 40,
            hours_ago: 50,
            state: SeedState::Posted,
        },
        Seed {
            id: 0x106,
            poster: ALEX,
            title: "Pharmacy pickup",
            description: "Prescription is ready at the pharmacy on 5th, already paid for.",
            location: "5th Street Pharmacy",
            task_type: TaskType::Delivery,
            dollars: 12,
            hours_ago: 8,
            state: SeedState::Accepted(ALICE),
        },
        Seed {
            id: 0x107,
            poster: ALEX,
            title: "Feed the cats over the weekend",
            description: "Two cats, food in the pantry. Twice a day Saturday and Sunday.",
            location: "Cedar Court",
            task_type: TaskType::PetCare,
            dollars: 35,
            hours_ago: 30,
            state: SeedState::InProgress(MARCUS),
        },
        Seed {
            id: 0x108,
            poster: ALEX,
            title: "Farmers market haul",
            description: "Seasonal vegetables and a dozen eggs from the Saturday market.",
            location: "Town Square",
            task_type: TaskType::Grocery,
            dollars: 30,
            hours_ago: 96,
            state: SeedState::Completed(ALICE, 90),
        },
        Seed {
            id: 0x109,
            poster: SAM,
            title: "Sweep out the garage",
            description: "Clear cobwebs and sweep, bags for the rubbish are provided.",
            location: "Oak Street",
            task_type: TaskType::Cleaning,
            dollars: 45,
            hours_ago: 120,
            state: SeedState::Completed(ALEX, 110),
        },
        Seed {
            id: 0x10a,
            poster: ALEX,
            title: "Return library books",
            description: "Three books due on Friday.",
            location: "Central Library",
            task_type: TaskType::Other,
            dollars: 10,
            hours_ago: 72,
            state: SeedState::Cancelled,
        },
        Seed {
            id: 0x10b,
            poster: PRIYA,
            title: "Bring soup to a neighbor",
            description: "Pick up a pot of soup from my place and bring it two doors down.",
            location: "Maple Ave",
            task_type: TaskType::Delivery,
            dollars: 18,
            hours_ago: 4,
            state: SeedState::Accepted(ALEX),
        },
    ];

    let lookup = |id: UserId| users.iter().find(|u| u.id == id).cloned();

    seeds
        .into_iter()
        .map(|seed| {
            let created_at = now - Duration::hours(seed.hours_ago);
            let (status, updated_at) = match seed.state {
                SeedState::Posted => (TaskStatus::Posted, created_at),
                SeedState::Accepted(runner_id) => (
                    TaskStatus::Accepted { runner_id },
                    created_at + Duration::hours(1),
                ),
                SeedState::InProgress(runner_id) => (
                    TaskStatus::InProgress { runner_id },
                    created_at + Duration::hours(2),
                ),
                SeedState::Completed(runner_id, hours_ago) => {
                    let completed_at = now - Duration::hours(hours_ago);
                    (
                        TaskStatus::Completed {
                            runner_id,
                            completed_at,
                        },
                        completed_at,
                    )
                }
                SeedState::Cancelled => (
                    TaskStatus::Cancelled { runner_id: None },
                    created_at + Duration::hours(6),
                ),
            };
            let runner = status.runner_id().and_then(lookup);
            Task {
                id: TaskId::from_u128(seed.id),
                poster_id: seed.poster,
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                location: seed.location.to_string(),
                status,
                budget: Budget::from_dollars(
                    NonZeroU32::new(seed.dollars).unwrap_or(NonZeroU32::MIN),
                ),
                task_type: seed.task_type,
                photo_url: None,
                created_at,
                updated_at,
                poster: lookup(seed.poster),
                runner,
            }
        })
        .collect()
}
