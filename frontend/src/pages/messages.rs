use errandmate_shared::display::clock_time;
use errandmate_shared::{conversations, sample_thread, ConversationSummary, Message};
use sauron::{
    html::{attributes::*, *},
    prelude::*,
};

use crate::components::{avatar, empty_state, AvatarSize};
use crate::{Model, Msg, Snapshot};

fn counterpart_avatar(summary: &ConversationSummary, size: AvatarSize) -> Node<Msg> {
    let url = summary
        .counterpart
        .as_ref()
        .and_then(|user| user.avatar_url.as_deref());
    avatar(summary.counterpart_name(), url, size)
}

impl Model {
    pub(crate) fn view_messages(&self, snapshot: &Snapshot) -> Node<Msg> {
        let threads = conversations(&snapshot.tasks, snapshot.me.id);

        if let Some(open) = self
            .open_chat
            .and_then(|id| threads.iter().find(|thread| thread.task_id == id))
        {
            return self.view_chat(open, snapshot);
        }

        div(
            [class("space-y-4")],
            [
                h1([class("text-2xl font-bold text-fg")], [text("Messages")]),
                if threads.is_empty() {
                    empty_state(
                        "💬",
                        "No conversations yet",
                        "Messages about your tasks will show up here.",
                        None,
                    )
                } else {
                    div(
                        [class("bg-surface rounded-xl border border-theme divide-y divide-theme")],
                        threads
                            .iter()
                            .map(|thread| self.view_thread_row(thread))
                            .collect::<Vec<_>>(),
                    )
                },
            ],
        )
    }

    fn view_thread_row(&self, thread: &ConversationSummary) -> Node<Msg> {
        let task_id = thread.task_id;
        div(
            [
                key(task_id.to_string()),
                class("flex items-center gap-3 p-4 cursor-pointer hover:bg-bg"),
                on_click(move |_| Msg::OpenChat(task_id)),
            ],
            [
                counterpart_avatar(thread, AvatarSize::Medium),
                div(
                    [class("flex-1 min-w-0")],
                    [
                        div(
                            [class("flex items-center justify-between")],
                            [
                                h3(
                                    [class("font-medium text-fg truncate")],
                                    [text(thread.counterpart_name())],
                                ),
                                span(
                                    [class("text-xs text-secondary")],
                                    [text(clock_time(thread.last_message_at))],
                                ),
                            ],
                        ),
                        p([class("text-xs text-accent truncate")], [text(&thread.task_title)]),
                        p(
                            [class("text-sm text-secondary truncate")],
                            [text(&thread.last_message)],
                        ),
                    ],
                ),
                if thread.unread_count > 0 {
                    span(
                        [class("bg-accent text-bg text-xs font-bold rounded-full px-2 py-0.5")],
                        [text(thread.unread_count)],
                    )
                } else {
                    span([], [])
                },
            ],
        )
    }

    fn view_chat(&self, thread: &ConversationSummary, snapshot: &Snapshot) -> Node<Msg> {
        let lines = sample_thread(thread, &snapshot.me, snapshot.taken_at);

        div(
            [class("flex flex-col h-[70vh]")],
            [
                div(
                    [class("flex items-center gap-3 pb-3 border-b border-theme")],
                    [
                        button(
                            [
                                r#type("button"),
                                class("text-xl text-secondary"),
                                on_click(|_| Msg::CloseChat),
                            ],
                            [text("←")],
                        ),
                        counterpart_avatar(thread, AvatarSize::Medium),
                        div(
                            [],
                            [
                                h2([class("font-semibold text-fg")], [text(thread.counterpart_name())]),
                                p([class("text-xs text-secondary")], [text(&thread.task_title)]),
                            ],
                        ),
                    ],
                ),
                div(
                    [class("flex-1 overflow-y-auto py-4 space-y-3")],
                    lines
                        .iter()
                        .map(|line| self.view_bubble(line, snapshot))
                        .collect::<Vec<_>>(),
                ),
                div(
                    [class("flex gap-2 pt-3 border-t border-theme")],
                    [
                        input(
                            [
                                r#type("text"),
                                placeholder("Type a message..."),
                                value(&self.chat_input),
                                on_input(|event| Msg::SetChatInput(event.value())),
                                class("flex-1 px-3 py-2 bg-surface border border-theme rounded-full text-fg focus:outline-none focus:ring-2 focus:ring-accent"),
                            ],
                            [],
                        ),
                        button(
                            [
                                r#type("button"),
                                disabled(self.chat_input.trim().is_empty()),
                                on_click(|_| Msg::SendChatMessage),
                                class("bg-accent text-bg rounded-full px-4"),
                            ],
                            [text("Send")],
                        ),
                    ],
                ),
            ],
        )
    }

    fn view_bubble(&self, line: &Message, snapshot: &Snapshot) -> Node<Msg> {
        let mine = line.sender_id == snapshot.me.id;
        div(
            [
                key(line.id.to_string()),
                class(if mine { "flex justify-end" } else { "flex justify-start" }),
            ],
            [div(
                [class(&format!(
                    "max-w-[75%] rounded-2xl px-4 py-2 {}",
                    if mine {
                        "bg-accent text-bg"
                    } else {
                        "bg-surface text-fg border border-theme"
                    }
                ))],
                [
                    p([class("text-sm")], [text(&line.content)]),
                    p([class("text-[10px] opacity-70 mt-1")], [text(clock_time(line.sent_at))]),
                ],
            )],
        )
    }
}
