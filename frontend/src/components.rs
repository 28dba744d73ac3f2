use chrono::{DateTime, Utc};
use errandmate_shared::display::{initials, status_label, time_ago};
use errandmate_shared::{Route, StarRating, Task, TaskStatus, User, VerificationStatus};
use sauron::{
    html::{attributes::*, *},
    prelude::*,
};

use crate::Msg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarSize {
    Small,
    Medium,
    Large,
}

impl AvatarSize {
    fn classes(self) -> &'static str {
        match self {
            AvatarSize::Small => "w-8 h-8 text-xs",
            AvatarSize::Medium => "w-10 h-10 text-sm",
            AvatarSize::Large => "w-20 h-20 text-2xl",
        }
    }
}

/// Photo when the user has one, initials otherwise.
pub fn avatar(name: &str, url: Option<&str>, size: AvatarSize) -> Node<Msg> {
    let shape = format!("{} rounded-full flex-shrink-0", size.classes());
    match url {
        Some(url) => img([src(url.to_string()), class(&format!("{shape} object-cover"))], []),
        None => div(
            [class(&format!(
                "{shape} bg-accent text-bg font-semibold flex items-center justify-center"
            ))],
            [text(initials(name))],
        ),
    }
}

pub fn user_avatar(user: &User, size: AvatarSize) -> Node<Msg> {
    avatar(&user.display_name, user.avatar_url.as_deref(), size)
}

pub fn rating_stars(rating: StarRating, show_value: bool) -> Node<Msg> {
    let filled = rating.filled_stars();
    let mut children: Vec<Node<Msg>> = (0..5)
        .map(|i| {
            span(
                [class(if i < filled {
                    "text-yellow-400"
                } else {
                    "text-secondary opacity-40"
                })],
                [text("★")],
            )
        })
        .collect();
    if show_value {
        children.push(span(
            [class("ml-1 text-sm text-secondary")],
            [text(rating.to_string())],
        ));
    }
    div([class("flex items-center gap-0.5")], children)
}

pub fn status_badge(status: &TaskStatus) -> Node<Msg> {
    let tone = match status {
        TaskStatus::Posted => "bg-blue-100 text-blue-800",
        TaskStatus::Accepted { .. } => "bg-yellow-100 text-yellow-800",
        TaskStatus::InProgress { .. } => "bg-purple-100 text-purple-800",
        TaskStatus::Completed { .. } => "bg-green-100 text-green-800",
        TaskStatus::Cancelled { .. } => "bg-gray-100 text-gray-600",
    };
    span(
        [class(&format!(
            "px-2 py-0.5 rounded-full text-xs font-medium capitalize {tone}"
        ))],
        [text(status_label(status))],
    )
}

pub fn verification_badge(status: VerificationStatus) -> Node<Msg> {
    let (label, tone) = match status {
        VerificationStatus::Verified => ("✓ Verified", "bg-green-100 text-green-800"),
        VerificationStatus::Pending => ("Verification pending", "bg-yellow-100 text-yellow-800"),
        VerificationStatus::Rejected => ("Verification rejected", "bg-red-100 text-red-700"),
    };
    span(
        [class(&format!("px-2 py-0.5 rounded-full text-xs font-medium {tone}"))],
        [text(label)],
    )
}

/// Person shown under a card: the poster on full cards, the assigned runner on
/// compact ones.
pub(crate) fn card_person(task: &Task, compact: bool) -> Option<(&'static str, &User)> {
    if compact {
        task.runner.as_ref().map(|runner| ("Runner:", runner))
    } else {
        task.poster.as_ref().map(|poster| ("", poster))
    }
}

/// `compact` drops the description, used in profile lists.
pub fn task_card(task: &Task, now: DateTime<Utc>, compact: bool) -> Node<Msg> {
    let id = task.id;
    let person_row = match card_person(task, compact) {
        Some((caption, person)) => div(
            [class("flex items-center gap-2 mt-3 pt-3 border-t border-theme")],
            [
                if caption.is_empty() {
                    user_avatar(person, AvatarSize::Small)
                } else {
                    span([class("text-xs text-secondary")], [text(caption)])
                },
                span([class("text-sm text-secondary")], [text(&person.display_name)]),
                rating_stars(person.rating, compact),
            ],
        ),
        None => span([], []),
    };

    div(
        [
            key(task.id.to_string()),
            class("bg-surface rounded-xl p-4 border border-theme shadow-sm cursor-pointer hover:shadow-md transition-shadow"),
            on_click(move |_| Msg::OpenTask(id)),
        ],
        [
            div(
                [class("flex items-start justify-between gap-3")],
                [
                    div(
                        [class("flex items-center gap-2 min-w-0")],
                        [
                            span([class("text-2xl")], [text(task.task_type.icon())]),
                            h3(
                                [class("font-semibold text-fg truncate")],
                                [text(&task.title)],
                            ),
                        ],
                    ),
                    span(
                        [class("text-lg font-bold text-accent")],
                        [text(task.budget.to_string())],
                    ),
                ],
            ),
            if compact {
                span([], [])
            } else {
                p(
                    [class("text-sm text-secondary mt-2 line-clamp-2")],
                    [text(&task.description)],
                )
            },
            div(
                [class("flex items-center justify-between mt-3 text-xs text-secondary")],
                [
                    span([], [text(format!("📍 {}", task.location))]),
                    div(
                        [class("flex items-center gap-2")],
                        [
                            status_badge(&task.status),
                            span([], [text(time_ago(task.created_at, now))]),
                        ],
                    ),
                ],
            ),
            person_row,
        ],
    )
}

pub fn stat_card(card_title: &str, value: &str, icon: &str) -> Node<Msg> {
    div(
        [class("bg-surface rounded-xl p-4 border border-theme text-center")],
        [
            span([class("text-2xl")], [text(icon)]),
            p([class("text-xl font-bold text-fg mt-1")], [text(value)]),
            p([class("text-xs text-secondary")], [text(card_title)]),
        ],
    )
}

pub fn empty_state(icon: &str, heading: &str, body: &str, action: Option<(&str, Msg)>) -> Node<Msg> {
    div(
        [class("text-center py-12")],
        [
            div([class("text-5xl mb-4")], [text(icon)]),
            h3([class("text-lg font-semibold text-fg mb-2")], [text(heading)]),
            p([class("text-secondary mb-6")], [text(body)]),
            match action {
                Some((label, msg)) => button(
                    [
                        r#type("button"),
                        class("bg-accent text-bg font-medium px-6 py-2 rounded-lg"),
                        on_click(move |_| msg.clone()),
                    ],
                    [text(label)],
                ),
                None => span([], []),
            },
        ],
    )
}

/// Dismissible banner for submit outcomes.
pub fn notice(message: &str, success: bool) -> Node<Msg> {
    let tone = if success {
        "bg-green-50 border-green-300 text-green-800"
    } else {
        "bg-red-50 border-red-300 text-red-800"
    };
    div(
        [class(&format!(
            "flex items-center justify-between border rounded-lg px-4 py-3 mb-4 {tone}"
        ))],
        [
            span([class("text-sm font-medium")], [text(message)]),
            button(
                [
                    r#type("button"),
                    class("ml-4 text-lg leading-none"),
                    on_click(|_| Msg::DismissNotice),
                ],
                [text("×")],
            ),
        ],
    )
}

fn nav_link(current: &Route, label: &str, icon: &str, route: Route) -> Node<Msg> {
    let is_active = *current == route;
    let path = route.to_path().to_string();
    a(
        [
            href(path),
            on_click(move |event| {
                event.prevent_default();
                Msg::NavigateTo(route.clone())
            }),
            class(&format!(
                "flex flex-col items-center px-3 py-2 text-xs font-medium transition-colors duration-200 {}",
                if is_active {
                    "text-accent"
                } else {
                    "text-secondary hover:text-fg"
                }
            )),
        ],
        [span([class("text-xl")], [text(icon)]), span([], [text(label)])],
    )
}

pub fn bottom_nav(current: &Route) -> Node<Msg> {
    nav(
        [class("fixed bottom-0 inset-x-0 bg-surface border-t border-theme")],
        [div(
            [class("max-w-md mx-auto flex justify-around")],
            [
                nav_link(current, "Home", "🏠", Route::Home),
                nav_link(current, "Post", "➕", Route::PostTask),
                nav_link(current, "Messages", "💬", Route::Messages),
                nav_link(current, "Profile", "👤", Route::Profile),
                nav_link(current, "Settings", "⚙️", Route::Settings),
            ],
        )],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use errandmate_shared::source::{ALEX, ALICE};
    use errandmate_shared::{DataSource, MockDataSource};

    fn tasks() -> Vec<Task> {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        MockDataSource::new(now).list_tasks().unwrap()
    }

    #[test]
    fn compact_card_names_the_runner() {
        let tasks = tasks();
        let completed = tasks
            .iter()
            .find(|t| t.status.is_completed() && t.poster_id == ALEX)
            .unwrap();

        let (caption, person) = card_person(completed, true).unwrap();
        assert_eq!(caption, "Runner:");
        assert_eq!(person.id, ALICE);

        let (_, person) = card_person(completed, false).unwrap();
        assert_eq!(person.id, ALEX);
    }

    #[test]
    fn compact_card_without_runner_has_no_person_row() {
        let tasks = tasks();
        let open = tasks.iter().find(|t| t.status.is_posted()).unwrap();
        assert!(card_person(open, true).is_none());
        assert!(card_person(open, false).is_some());
    }
}
