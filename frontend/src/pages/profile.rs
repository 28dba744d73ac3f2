use errandmate_shared::display::short_address;
use errandmate_shared::stats::{completed_involving, posted_by};
use errandmate_shared::{profile_stats, ProfileStats, Route, Task};
use sauron::{
    html::{attributes::*, *},
    prelude::*,
};

use crate::components::{
    empty_state, rating_stars, stat_card, task_card, user_avatar, verification_badge, AvatarSize,
};
use crate::{Model, Msg, ProfileTab, Snapshot};

impl Model {
    pub(crate) fn view_profile(&self, snapshot: &Snapshot) -> Node<Msg> {
        let me = &snapshot.me;
        let posted = posted_by(&snapshot.tasks, me.id);
        let completed = completed_involving(&snapshot.tasks, me.id);
        let stats = profile_stats(&snapshot.tasks, me.id);

        div(
            [class("space-y-6")],
            [
                div(
                    [class("bg-surface rounded-xl border border-theme p-5")],
                    [
                        div(
                            [class("flex items-start gap-4")],
                            [
                                user_avatar(me, AvatarSize::Large),
                                div(
                                    [class("flex-1 min-w-0 space-y-1")],
                                    [
                                        div(
                                            [class("flex items-center justify-between")],
                                            [
                                                h1(
                                                    [class("text-xl font-bold text-fg")],
                                                    [text(&me.display_name)],
                                                ),
                                                button(
                                                    [
                                                        r#type("button"),
                                                        class("text-sm text-accent"),
                                                        on_click(|_| Msg::EditProfile),
                                                    ],
                                                    [text("Edit")],
                                                ),
                                            ],
                                        ),
                                        rating_stars(me.rating, true),
                                        verification_badge(me.verification),
                                        p(
                                            [class("text-xs font-mono text-secondary")],
                                            [text(short_address(&me.wallet_address))],
                                        ),
                                        p(
                                            [class("text-xs text-secondary")],
                                            [text(format!(
                                                "Member since {}",
                                                me.created_at.format("%B %Y")
                                            ))],
                                        ),
                                    ],
                                ),
                            ],
                        ),
                    ],
                ),
                div(
                    [class("grid grid-cols-3 gap-3")],
                    [
                        stat_card("Posted", &stats.tasks_posted.to_string(), "📝"),
                        stat_card("Completed", &stats.tasks_completed.to_string(), "✅"),
                        stat_card("Rating", &me.rating.to_string(), "⭐"),
                    ],
                ),
                if me.is_runner {
                    div(
                        [class("bg-surface rounded-xl border border-theme p-4")],
                        [
                            h3([class("font-semibold text-fg")], [text("🏃 Runner Mode Active")]),
                            p(
                                [class("text-sm text-secondary")],
                                [text("You can accept tasks from neighbors and earn rewards.")],
                            ),
                        ],
                    )
                } else {
                    span([], [])
                },
                self.view_profile_tabs(posted.len(), completed.len()),
                match self.profile_tab {
                    ProfileTab::Posted => self.view_task_tab(
                        &posted,
                        snapshot,
                        ("📝", "No tasks posted yet", "Tasks you post will appear here."),
                        Some(("Post Your First Task", Msg::NavigateTo(Route::PostTask))),
                    ),
                    ProfileTab::Completed => self.view_task_tab(
                        &completed,
                        snapshot,
                        ("✅", "No completed tasks", "Finished tasks will appear here."),
                        None,
                    ),
                    ProfileTab::Stats => view_statistics(&stats),
                },
            ],
        )
    }

    fn view_profile_tabs(&self, posted: usize, completed: usize) -> Node<Msg> {
        let tabs = [
            (ProfileTab::Posted, format!("Posted ({posted})")),
            (ProfileTab::Completed, format!("Completed ({completed})")),
            (ProfileTab::Stats, "Statistics".to_string()),
        ];
        div(
            [class("flex border-b border-theme")],
            tabs.into_iter()
                .map(|(tab, caption)| {
                    let is_active = self.profile_tab == tab;
                    button(
                        [
                            r#type("button"),
                            on_click(move |_| Msg::SelectTab(tab)),
                            class(&format!(
                                "flex-1 py-2 text-sm font-medium border-b-2 {}",
                                if is_active {
                                    "border-accent text-accent"
                                } else {
                                    "border-transparent text-secondary"
                                }
                            )),
                        ],
                        [text(caption)],
                    )
                })
                .collect::<Vec<_>>(),
        )
    }

    fn view_task_tab(
        &self,
        tasks: &[&Task],
        snapshot: &Snapshot,
        (icon, heading, body): (&str, &str, &str),
        action: Option<(&str, Msg)>,
    ) -> Node<Msg> {
        if tasks.is_empty() {
            return empty_state(icon, heading, body, action);
        }
        div(
            [class("space-y-3")],
            tasks
                .iter()
                .map(|task| task_card(task, snapshot.taken_at, true))
                .collect::<Vec<_>>(),
        )
    }
}

fn view_statistics(stats: &ProfileStats) -> Node<Msg> {
    if stats.is_empty() {
        return empty_state(
            "📊",
            "No activity yet",
            "Post or complete a task to see your statistics.",
            Some(("Post a Task", Msg::NavigateTo(Route::PostTask))),
        );
    }
    let row = |caption: &str, value: String| {
        div(
            [class("flex items-center justify-between py-2")],
            [
                span([class("text-secondary")], [text(caption)]),
                span([class("font-semibold text-fg")], [text(value)]),
            ],
        )
    };
    div(
        [class("bg-surface rounded-xl border border-theme p-4 divide-y divide-theme")],
        [
            row("Total Earned", format!("${}", stats.total_earned.normalize())),
            row("Total Spent", format!("${}", stats.total_spent.normalize())),
            row("Success Rate", format!("{}%", stats.success_rate)),
            row("Tasks Posted", stats.tasks_posted.to_string()),
            row("Tasks Completed", stats.tasks_completed.to_string()),
        ],
    )
}
