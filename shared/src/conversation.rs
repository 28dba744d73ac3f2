//! Chat threads derived from tasks that have both a poster and a runner.
//!
//! Nothing here is stored: threads are recomputed from the task snapshot and
//! the current user every time the messages screen renders. There is no
//! message store yet, so the last-message fields are placeholders and the
//! thread contents come from [`sample_thread`].

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Message, MessageId, Task, TaskId, User, UserId};

pub const PLACEHOLDER_LAST_MESSAGE: &str = "Great! I can help with this task.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub task_id: TaskId,
    pub task_title: String,
    pub counterpart_id: UserId,
    pub counterpart: Option<User>,
    pub last_message: String,
    pub last_message_at: DateTime<Utc>,
    pub unread_count: u32,
}

impl ConversationSummary {
    pub fn counterpart_name(&self) -> &str {
        self.counterpart
            .as_ref()
            .map(|u| u.display_name.as_str())
            .unwrap_or("User")
    }
}

/// One thread per task that has a runner and involves `current_user`, in task order.
///
/// The counterpart is the runner when the current user posted the task and the
/// poster otherwise.
pub fn conversations(tasks: &[Task], current_user: UserId) -> Vec<ConversationSummary> {
    tasks
        .iter()
        .filter_map(|task| {
            let runner_id = task.runner_id()?;
            let (counterpart_id, counterpart) = if task.poster_id == current_user {
                (runner_id, task.runner.clone())
            } else if runner_id == current_user {
                (task.poster_id, task.poster.clone())
            } else {
                return None;
            };
            Some(ConversationSummary {
                task_id: task.id,
                task_title: task.title.clone(),
                counterpart_id,
                counterpart,
                last_message: PLACEHOLDER_LAST_MESSAGE.to_string(),
                last_message_at: task.updated_at,
                unread_count: 0,
            })
        })
        .collect()
}

/// The hardcoded exchange shown inside every thread.
pub fn sample_thread(
    conversation: &ConversationSummary,
    me: &User,
    now: DateTime<Utc>,
) -> Vec<Message> {
    let lines = [
        (false, "Hi! I saw your task posting. I can help with the grocery pickup.", 60),
        (true, "That would be great! When would you be available?", 50),
        (false, "I can do it this afternoon around 3 PM. Does that work for you?", 30),
        (true, "Perfect! I'll send you the shopping list.", 15),
    ];

    lines
        .into_iter()
        .enumerate()
        .map(|(i, (mine, content, minutes_ago))| {
            let (sender_id, sender) = if mine {
                (me.id, Some(me.clone()))
            } else {
                (conversation.counterpart_id, conversation.counterpart.clone())
            };
            Message {
                id: MessageId::from_u128(i as u128 + 1),
                task_id: conversation.task_id,
                sender_id,
                content: content.to_string(),
                sent_at: now - Duration::minutes(minutes_ago),
                sender,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{DataSource, MockDataSource, ALEX, ALICE, MARCUS, PRIYA};

    #[test]
    fn threads_for_current_user_in_task_order() {
        let src = MockDataSource::new(Utc::now());
        let tasks = src.list_tasks().unwrap();
        let threads = conversations(&tasks, ALEX);

        let pairs: Vec<(&str, UserId)> = threads
            .iter()
            .map(|c| (c.task_title.as_str(), c.counterpart_id))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Pharmacy pickup", ALICE),
                ("Feed the cats over the weekend", MARCUS),
                ("Farmers market haul", ALICE),
                ("Sweep out the garage", crate::source::SAM),
                ("Bring soup to a neighbor", PRIYA),
            ]
        );
        assert_eq!(threads[0].counterpart_name(), "Alice Johnson");
        assert_eq!(threads[0].last_message, PLACEHOLDER_LAST_MESSAGE);
    }

    #[test]
    fn unassigned_tasks_never_become_threads() {
        let src = MockDataSource::new(Utc::now());
        let tasks = src.list_tasks().unwrap();
        let threads = conversations(&tasks, PRIYA);
        assert!(threads.iter().all(|c| {
            let task = tasks.iter().find(|t| t.id == c.task_id).unwrap();
            task.runner_id().is_some()
        }));
        assert_eq!(threads.len(), 1);
    }

    #[test]
    fn missing_snapshot_falls_back_to_generic_name() {
        let mut tasks = MockDataSource::new(Utc::now()).list_tasks().unwrap();
        for task in &mut tasks {
            task.runner = None;
        }
        let threads = conversations(&tasks, ALEX);
        assert_eq!(threads[0].counterpart_name(), "User");
    }

    #[test]
    fn sample_thread_alternates_senders() {
        let src = MockDataSource::new(Utc::now());
        let me = src.current_user().unwrap();
        let tasks = src.list_tasks().unwrap();
        let thread = &conversations(&tasks, me.id)[0];
        let messages = sample_thread(thread, &me, Utc::now());

        let senders: Vec<UserId> = messages.iter().map(|m| m.sender_id).collect();
        assert_eq!(senders, vec![ALICE, ALEX, ALICE, ALEX]);
        assert!(messages.windows(2).all(|w| w[0].sent_at < w[1].sent_at));
        assert!(messages.iter().all(|m| m.task_id == thread.task_id));
    }
}
