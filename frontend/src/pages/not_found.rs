use errandmate_shared::Route;
use sauron::{
    html::{attributes::*, *},
    prelude::*,
};

use crate::{Model, Msg};

impl Model {
    pub(crate) fn view_not_found(&self, path: &str) -> Node<Msg> {
        div(
            [class("min-h-screen bg-bg text-fg flex items-center justify-center px-4")],
            [div(
                [class("text-center")],
                [
                    div([class("text-6xl font-bold text-accent mb-2")], [text("404")]),
                    h2([class("text-2xl font-bold mb-2")], [text("Page Not Found")]),
                    p(
                        [class("text-secondary mb-6")],
                        [text(format!("Nothing lives at {path}."))],
                    ),
                    a(
                        [
                            href("/"),
                            on_click(|event| {
                                event.prevent_default();
                                Msg::NavigateTo(Route::Home)
                            }),
                            class("bg-accent text-bg font-medium px-6 py-2 rounded-lg inline-block"),
                        ],
                        [text("Go Home")],
                    ),
                ],
            )],
        )
    }
}
