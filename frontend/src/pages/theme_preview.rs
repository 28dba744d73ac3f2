use errandmate_shared::{Route, Theme};
use sauron::{
    html::{attributes, attributes::*, *},
    prelude::*,
};

use crate::components::{rating_stars, status_badge, task_card, user_avatar, AvatarSize};
use crate::{Model, Msg, Snapshot};

impl Model {
    pub(crate) fn view_theme_preview(&self, snapshot: &Snapshot) -> Node<Msg> {
        let active = self.ctx.theme();
        let sample = snapshot.tasks.iter().find(|task| task.status.is_posted());

        div(
            [class("min-h-screen bg-bg text-fg")],
            [div(
                [class("max-w-md mx-auto px-4 py-6 space-y-6")],
                [
                    div(
                        [class("flex items-center gap-3")],
                        [
                            button(
                                [
                                    r#type("button"),
                                    class("text-xl text-secondary"),
                                    on_click(|_| Msg::NavigateTo(Route::Settings)),
                                ],
                                [text("←")],
                            ),
                            h1([class("text-2xl font-bold")], [text("Theme Preview")]),
                        ],
                    ),
                    div(
                        [class("space-y-2")],
                        Theme::ALL
                            .iter()
                            .map(|&theme| theme_option(theme, theme == active))
                            .collect::<Vec<_>>(),
                    ),
                    h2([class("text-lg font-semibold")], [text("Components")]),
                    match sample {
                        Some(task) => task_card(task, snapshot.taken_at, false),
                        None => span([], []),
                    },
                    div(
                        [class("flex flex-wrap items-center gap-3")],
                        [
                            button(
                                [r#type("button"), class("bg-accent text-bg px-4 py-2 rounded-lg")],
                                [text("Primary")],
                            ),
                            button(
                                [
                                    r#type("button"),
                                    class("bg-surface text-fg border border-theme px-4 py-2 rounded-lg"),
                                ],
                                [text("Secondary")],
                            ),
                            user_avatar(&snapshot.me, AvatarSize::Medium),
                            rating_stars(snapshot.me.rating, true),
                            match sample {
                                Some(task) => status_badge(&task.status),
                                None => span([], []),
                            },
                        ],
                    ),
                ],
            )],
        )
    }
}

fn theme_option(theme: Theme, is_active: bool) -> Node<Msg> {
    let theme_key = theme.key();
    let palette = theme.palette();
    div(
        [
            key(theme_key),
            on_click(move |_| Msg::SetTheme(theme_key.to_string())),
            class(&format!(
                "flex items-center gap-3 p-3 rounded-xl border-2 cursor-pointer {}",
                if is_active { "border-accent" } else { "border-theme" }
            )),
        ],
        [
            div(
                [class("flex -space-x-1")],
                [palette.bg, palette.surface, palette.accent]
                    .into_iter()
                    .map(|color| {
                        span(
                            [
                                class("w-6 h-6 rounded-full border border-theme"),
                                attributes::styles([("background-color", color)]),
                            ],
                            [],
                        )
                    })
                    .collect::<Vec<_>>(),
            ),
            div(
                [class("flex-1")],
                [
                    p([class("font-medium")], [text(theme.label())]),
                    p([class("text-xs text-secondary")], [text(theme.description())]),
                ],
            ),
            if is_active {
                span([class("text-accent font-bold")], [text("✓")])
            } else {
                span([], [])
            },
        ],
    )
}
