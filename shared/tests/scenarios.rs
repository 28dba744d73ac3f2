use chrono::{TimeZone, Utc};
use errandmate_shared::{
    available_tasks, conversations, profile_stats, Budget, DataSource, Field, MockDataSource,
    PendingOperation, Route, StarRating, SubmitRejected, Task, TaskDraft, TaskFilter, TaskId,
    TaskStatus, TaskType, User, UserId, VerificationStatus,
};
use rust_decimal::Decimal;

fn at(hour: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap()
}

fn user(n: u128, name: &str) -> User {
    User {
        id: UserId::from_u128(n),
        wallet_address: format!("0x{n:040x}"),
        display_name: name.to_string(),
        avatar_url: None,
        is_runner: true,
        rating: StarRating::from_tenths(45),
        verification: VerificationStatus::Verified,
        created_at: at(0),
    }
}

fn task(n: u128, poster: UserId, status: TaskStatus, dollars: i64) -> Task {
    Task {
        id: TaskId::from_u128(n),
        poster_id: poster,
        title: format!("Task {n}"),
        description: String::new(),
        location: "Here".into(),
        status,
        budget: Budget::new(Decimal::from(dollars)).unwrap(),
        task_type: TaskType::Other,
        photo_url: None,
        created_at: at(1),
        updated_at: at(1),
        poster: None,
        runner: None,
    }
}

#[test]
fn single_grocery_task_listing() {
    let me = user(1, "Me");
    let milk = Task {
        title: "Buy milk".into(),
        task_type: TaskType::Grocery,
        ..task(10, UserId::from_u128(2), TaskStatus::Posted, 20)
    };
    let source = MockDataSource::with_records(me, vec![], vec![milk.clone()]);
    let tasks = source.list_tasks().unwrap();

    let grocery = available_tasks(&tasks, TaskFilter::Only(TaskType::Grocery), "");
    assert_eq!(grocery, vec![&milk]);

    let delivery = available_tasks(&tasks, TaskFilter::Only(TaskType::Delivery), "");
    assert!(delivery.is_empty());
}

#[test]
fn profile_with_four_posted_and_two_completed() {
    let me = UserId::from_u128(1);
    let other = UserId::from_u128(2);
    let tasks = vec![
        task(1, me, TaskStatus::Posted, 10),
        task(2, me, TaskStatus::Accepted { runner_id: other }, 11),
        task(3, me, TaskStatus::Cancelled { runner_id: None }, 12),
        task(
            4,
            me,
            TaskStatus::Completed {
                runner_id: other,
                completed_at: at(5),
            },
            20,
        ),
        task(
            5,
            other,
            TaskStatus::Completed {
                runner_id: me,
                completed_at: at(6),
            },
            15,
        ),
    ];

    let stats = profile_stats(&tasks, me);
    assert_eq!(stats.tasks_posted, 4);
    assert_eq!(stats.tasks_completed, 2);
    assert_eq!(stats.total_spent, Decimal::from(20));
    assert_eq!(stats.total_earned, Decimal::from(15));
    assert_eq!(stats.success_rate, 50);
}

#[test]
fn empty_title_blocks_submission() {
    let draft = TaskDraft {
        title: String::new(),
        description: "Something".into(),
        location: "Somewhere".into(),
        budget: "10".into(),
        ..TaskDraft::default()
    };
    let mut submission: PendingOperation<Task, String> = PendingOperation::default();

    match draft.begin_submission(&mut submission) {
        Err(SubmitRejected::Invalid(errors)) => {
            assert_eq!(errors.get(Field::Title), Some("Task Title is required"));
        }
        other => panic!("expected field errors, got {other:?}"),
    }
    assert_eq!(submission, PendingOperation::Idle);
}

#[test]
fn unknown_path_routes_to_not_found() {
    assert!(Route::from_path("/nonexistent").is_not_found());
}

#[test]
fn conversations_come_only_from_assigned_tasks() {
    let me = UserId::from_u128(1);
    let other = UserId::from_u128(2);
    let tasks = vec![
        task(1, me, TaskStatus::Posted, 10),
        task(2, me, TaskStatus::Cancelled { runner_id: None }, 10),
        task(3, other, TaskStatus::InProgress { runner_id: me }, 10),
    ];
    let threads = conversations(&tasks, me);
    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].task_id, TaskId::from_u128(3));
    assert_eq!(threads[0].counterpart_id, other);
}

#[test]
fn seeded_source_serializes_for_the_api() {
    let source = MockDataSource::new(at(12));
    let tasks = source.list_tasks().unwrap();
    let json = serde_json::to_string(&tasks).unwrap();
    let back: Vec<Task> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tasks);
}
