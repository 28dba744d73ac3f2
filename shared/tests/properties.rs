use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use errandmate_shared::{
    available_tasks, conversations, profile_stats, Budget, Task, TaskFilter, TaskId, TaskStatus,
    TaskType, UserId,
};

const WORDS: [&str; 6] = ["Grocery", "walk", "DOG", "clean", "Milk", "parcel"];

fn user_id(n: u8) -> UserId {
    UserId::from_u128(u128::from(n))
}

fn arb_task_type() -> impl Strategy<Value = TaskType> {
    prop::sample::select(TaskType::ALL.to_vec())
}

/// Status for a task posted by `poster`; any runner differs from the poster.
fn arb_status(poster: u8) -> impl Strategy<Value = TaskStatus> {
    let runner = (1u8..=3).prop_map(move |offset| user_id((poster - 1 + offset) % 4 + 1));
    let completed_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    prop_oneof![
        Just(TaskStatus::Posted),
        runner.clone().prop_map(|runner_id| TaskStatus::Accepted { runner_id }),
        runner.clone().prop_map(|runner_id| TaskStatus::InProgress { runner_id }),
        runner.clone().prop_map(move |runner_id| TaskStatus::Completed {
            runner_id,
            completed_at,
        }),
        prop::option::of(runner).prop_map(|runner_id| TaskStatus::Cancelled { runner_id }),
    ]
}

fn arb_task() -> impl Strategy<Value = Task> {
    (1u8..=4)
        .prop_flat_map(|poster| {
            (
                Just(poster),
                arb_status(poster),
                arb_task_type(),
                prop::sample::select(WORDS.to_vec()),
                prop::sample::select(WORDS.to_vec()),
                1u32..500,
                any::<u128>(),
            )
        })
        .prop_map(|(poster, status, task_type, title, description, dollars, id)| {
            let created_at = Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap();
            Task {
                id: TaskId::from_u128(id),
                poster_id: user_id(poster),
                title: format!("{title} task"),
                description: format!("Please {description}"),
                location: "Block 7".into(),
                status,
                budget: Budget::new(Decimal::from(dollars)).unwrap(),
                task_type,
                photo_url: None,
                created_at,
                updated_at: created_at + Duration::hours(1),
                poster: None,
                runner: None,
            }
        })
}

fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(arb_task(), 0..24)
}

proptest! {
    /// `all` with an empty search is exactly the posted subset, in order.
    #[test]
    fn unfiltered_listing_is_posted_subset(tasks in arb_tasks()) {
        let listing = available_tasks(&tasks, TaskFilter::All, "");
        let expected: Vec<&Task> = tasks.iter().filter(|t| t.status.is_posted()).collect();
        prop_assert_eq!(listing, expected);
    }

    /// A concrete type filter only yields posted tasks of that type.
    #[test]
    fn type_filter_is_respected(tasks in arb_tasks(), task_type in arb_task_type()) {
        let listing = available_tasks(&tasks, TaskFilter::Only(task_type), "");
        prop_assert!(listing.iter().all(|t| t.task_type == task_type && t.status.is_posted()));
        let expected = tasks
            .iter()
            .filter(|t| t.task_type == task_type && t.status.is_posted())
            .count();
        prop_assert_eq!(listing.len(), expected);
    }

    /// Search ignores case.
    #[test]
    fn search_is_case_insensitive(tasks in arb_tasks(), query in "[a-zA-Z]{0,4}") {
        let lower = available_tasks(&tasks, TaskFilter::All, &query.to_lowercase());
        let upper = available_tasks(&tasks, TaskFilter::All, &query.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    /// Every thread comes from a task with a runner that involves the user.
    #[test]
    fn conversations_require_a_runner(tasks in arb_tasks(), me in 1u8..=4) {
        let me = user_id(me);
        for thread in conversations(&tasks, me) {
            let task = tasks.iter().find(|t| t.id == thread.task_id).unwrap();
            prop_assert!(task.runner_id().is_some());
            prop_assert!(task.involves(me));
            prop_assert_ne!(thread.counterpart_id, me);
        }
    }

    /// No posted tasks means a zero success rate.
    #[test]
    fn success_rate_zero_without_postings(tasks in arb_tasks(), me in 1u8..=4) {
        let stats = profile_stats(&tasks, user_id(me));
        if stats.tasks_posted == 0 {
            prop_assert_eq!(stats.success_rate, 0);
        }
    }

    /// Earned plus spent covers every completed task the user took part in.
    #[test]
    fn earned_plus_spent_is_completed_total(tasks in arb_tasks(), me in 1u8..=4) {
        let me = user_id(me);
        let stats = profile_stats(&tasks, me);
        let total: Decimal = tasks
            .iter()
            .filter(|t| t.status.is_completed() && t.involves(me))
            .map(|t| t.budget.amount())
            .sum();
        prop_assert_eq!(stats.total_earned + stats.total_spent, total);
    }
}
