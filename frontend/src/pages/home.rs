use errandmate_shared::display::short_address;
use errandmate_shared::{Route, Task, TaskFilter};
use sauron::{
    html::{attributes::*, *},
    prelude::*,
};

use crate::components::{empty_state, task_card, user_avatar, AvatarSize};
use crate::{Model, Msg, Snapshot};

impl Model {
    /// Tasks behind both the welcome count and the card list.
    fn visible_tasks<'a>(&self, snapshot: &'a Snapshot) -> Vec<&'a Task> {
        self.listing.apply(&snapshot.tasks)
    }

    pub(crate) fn view_home(&self, snapshot: &Snapshot) -> Node<Msg> {
        let listing = self.visible_tasks(snapshot);

        div(
            [class("space-y-6")],
            [
                header(
                    [class("flex items-center justify-between")],
                    [
                        div(
                            [],
                            [
                                h1([class("text-2xl font-bold text-fg")], [text("ErrandMate")]),
                                p(
                                    [class("text-sm text-secondary")],
                                    [text("Your neighborhood helper network")],
                                ),
                            ],
                        ),
                        div(
                            [class("flex items-center gap-2 bg-surface border border-theme rounded-full px-3 py-1")],
                            [
                                user_avatar(&snapshot.me, AvatarSize::Small),
                                span(
                                    [class("text-xs font-mono text-secondary")],
                                    [text(short_address(&snapshot.me.wallet_address))],
                                ),
                            ],
                        ),
                    ],
                ),
                div(
                    [class("bg-accent text-bg rounded-xl p-5")],
                    [
                        h2(
                            [class("text-lg font-semibold")],
                            [text(format!("Welcome back, {}!", snapshot.me.display_name))],
                        ),
                        p(
                            [class("text-sm opacity-90")],
                            [text(format!("{} tasks available in your area", listing.len()))],
                        ),
                    ],
                ),
                input(
                    [
                        r#type("search"),
                        placeholder("Search tasks..."),
                        value(&self.listing.search),
                        on_input(|event| Msg::SetSearch(event.value())),
                        class("w-full px-4 py-2 bg-surface border border-theme rounded-lg text-fg placeholder-secondary focus:outline-none focus:ring-2 focus:ring-accent"),
                    ],
                    [],
                ),
                self.view_filter_chips(),
                if listing.is_empty() {
                    let body = if self.listing.is_narrowed() {
                        "Try adjusting your search or filters"
                    } else {
                        "Be the first to post a task in your area!"
                    };
                    empty_state(
                        "🔍",
                        "No tasks found",
                        body,
                        self.listing
                            .is_narrowed()
                            .then_some(("Clear Filters", Msg::ClearFilters)),
                    )
                } else {
                    div(
                        [class("space-y-3")],
                        listing
                            .iter()
                            .map(|task| task_card(task, snapshot.taken_at, false))
                            .collect::<Vec<_>>(),
                    )
                },
                self.view_quick_actions(),
            ],
        )
    }

    fn view_filter_chips(&self) -> Node<Msg> {
        div(
            [class("flex gap-2 overflow-x-auto pb-1")],
            TaskFilter::chips()
                .map(|filter| {
                    let is_active = self.listing.filter == filter;
                    button(
                        [
                            r#type("button"),
                            key(filter.key()),
                            on_click(move |_| Msg::SetFilter(filter)),
                            class(&format!(
                                "px-3 py-1 rounded-full text-sm whitespace-nowrap border transition-colors duration-200 {}",
                                if is_active {
                                    "bg-accent text-bg border-accent"
                                } else {
                                    "bg-surface text-secondary border-theme hover:text-fg"
                                }
                            )),
                        ],
                        [text(filter.label())],
                    )
                })
                .collect::<Vec<_>>(),
        )
    }

    fn view_quick_actions(&self) -> Node<Msg> {
        div(
            [class("grid grid-cols-2 gap-3")],
            [
                button(
                    [
                        r#type("button"),
                        on_click(|_| Msg::NavigateTo(Route::PostTask)),
                        class("bg-accent text-bg font-medium rounded-xl py-4"),
                    ],
                    [text("➕ Post New Task")],
                ),
                button(
                    [
                        r#type("button"),
                        on_click(|_| Msg::BecomeRunner),
                        class("bg-surface text-fg border border-theme font-medium rounded-xl py-4"),
                    ],
                    [text("🏃 Become a Runner")],
                ),
            ],
        )
    }
}
