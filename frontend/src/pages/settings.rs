use errandmate_shared::{Route, Theme};
use sauron::{
    html::{attributes, attributes::*, *},
    prelude::*,
};

use crate::components::{user_avatar, AvatarSize};
use crate::{Model, Msg, Snapshot};

fn section(heading: &str, rows: Vec<Node<Msg>>) -> Node<Msg> {
    div(
        [class("space-y-2")],
        [
            h2(
                [class("text-xs font-semibold uppercase tracking-wide text-secondary")],
                [text(heading)],
            ),
            div(
                [class("bg-surface rounded-xl border border-theme divide-y divide-theme")],
                rows,
            ),
        ],
    )
}

fn setting_row(icon: &str, caption: &str, detail: &str) -> Node<Msg> {
    div(
        [class("flex items-center gap-3 px-4 py-3")],
        [
            span([class("text-lg")], [text(icon)]),
            span([class("flex-1 text-fg")], [text(caption)]),
            span([class("text-sm text-secondary")], [text(detail)]),
        ],
    )
}

impl Model {
    pub(crate) fn view_settings(&self, snapshot: &Snapshot) -> Node<Msg> {
        let me = &snapshot.me;
        div(
            [class("space-y-6")],
            [
                h1([class("text-2xl font-bold text-fg")], [text("Settings")]),
                div(
                    [class("flex items-center gap-3 bg-surface rounded-xl border border-theme p-4")],
                    [
                        user_avatar(me, AvatarSize::Medium),
                        div(
                            [],
                            [
                                p([class("font-semibold text-fg")], [text(&me.display_name)]),
                                p(
                                    [class("text-xs text-secondary")],
                                    [text(if me.is_runner { "Runner" } else { "Neighbor" })],
                                ),
                            ],
                        ),
                    ],
                ),
                section("Appearance", vec![self.view_theme_selector()]),
                section(
                    "Account",
                    vec![
                        setting_row("👤", "Edit Profile", "›"),
                        setting_row("🔐", "Wallet & Security", "›"),
                        setting_row("🔔", "Notifications", "On"),
                    ],
                ),
                section(
                    "Support",
                    vec![
                        setting_row("❓", "Help Center", "›"),
                        setting_row("📄", "Terms & Privacy", "›"),
                    ],
                ),
                button(
                    [
                        r#type("button"),
                        on_click(|_| Msg::SignOut),
                        class("w-full py-3 rounded-xl border border-red-300 text-red-600 font-medium"),
                    ],
                    [text("Sign Out")],
                ),
                p(
                    [class("text-center text-xs text-secondary")],
                    [text(format!("ErrandMate v{}", env!("CARGO_PKG_VERSION")))],
                ),
            ],
        )
    }

    fn view_theme_selector(&self) -> Node<Msg> {
        let active = self.ctx.theme();
        div(
            [class("p-4 space-y-3")],
            [
                div(
                    [class("grid grid-cols-5 gap-2")],
                    Theme::ALL
                        .iter()
                        .map(|&theme| {
                            let is_active = theme == active;
                            let theme_key = theme.key();
                            button(
                                [
                                    r#type("button"),
                                    key(theme_key),
                                    on_click(move |_| Msg::SetTheme(theme_key.to_string())),
                                    class(&format!(
                                        "flex flex-col items-center gap-1 p-2 rounded-lg border-2 {}",
                                        if is_active {
                                            "border-accent"
                                        } else {
                                            "border-transparent"
                                        }
                                    )),
                                ],
                                [
                                    span(
                                        [
                                            class("w-8 h-8 rounded-full border border-theme"),
                                            attributes::styles([("background-color", theme.swatch())]),
                                        ],
                                        [],
                                    ),
                                    span([class("text-xs text-fg")], [text(theme.label())]),
                                ],
                            )
                        })
                        .collect::<Vec<_>>(),
                ),
                p([class("text-xs text-secondary")], [text(active.description())]),
                a(
                    [
                        href(Route::ThemePreview.to_path().to_string()),
                        on_click(|event| {
                            event.prevent_default();
                            Msg::NavigateTo(Route::ThemePreview)
                        }),
                        class("text-sm text-accent"),
                    ],
                    [text("Preview all themes →")],
                ),
            ],
        )
    }
}
