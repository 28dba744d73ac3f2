use errandmate_shared::{Field, PendingOperation, TaskType, Urgency};
use sauron::{
    html::{attributes::*, *},
    prelude::*,
};

use crate::components::notice;
use crate::{Model, Msg};

const INPUT: &str = "w-full px-3 py-2 bg-surface border rounded-lg text-fg placeholder-secondary focus:outline-none focus:ring-2 focus:ring-accent";

impl Model {
    pub(crate) fn view_post_task(&self) -> Node<Msg> {
        let in_flight = self.submission.is_in_flight();

        div(
            [class("space-y-6")],
            [
                div(
                    [],
                    [
                        h1([class("text-2xl font-bold text-fg")], [text("Post a Task")]),
                        p(
                            [class("text-sm text-secondary")],
                            [text("Get help from trusted neighbors")],
                        ),
                    ],
                ),
                self.view_submission_notice(),
                self.text_field(
                    Field::Title,
                    "e.g., Pick up groceries from Whole Foods",
                    &self.draft.title,
                    Msg::SetDraftTitle,
                ),
                div(
                    [class("space-y-1")],
                    [
                        p([class("block text-sm font-medium text-fg")], [text(Field::Description)]),
                        textarea(
                            [
                                placeholder("Describe what you need help with..."),
                                value(&self.draft.description),
                                on_input(|event| Msg::SetDraftDescription(event.value())),
                                class(&format!("{INPUT} h-24 resize-y {}", self.border_for(Field::Description))),
                            ],
                            [],
                        ),
                        self.field_error(Field::Description),
                    ],
                ),
                self.view_type_picker(),
                self.text_field(
                    Field::Location,
                    "e.g., Downtown, near Central Park",
                    &self.draft.location,
                    Msg::SetDraftLocation,
                ),
                self.text_field(Field::Budget, "25", &self.draft.budget, Msg::SetDraftBudget),
                self.view_urgency_picker(),
                div(
                    [class("border-2 border-dashed border-theme rounded-lg p-6 text-center text-secondary text-sm")],
                    [text("📷 Photo upload (optional) coming soon")],
                ),
                button(
                    [
                        r#type("button"),
                        disabled(in_flight),
                        on_click(|_| Msg::SubmitTask),
                        class(&format!(
                            "w-full font-semibold py-3 rounded-lg transition-colors duration-200 {}",
                            if in_flight {
                                "bg-surface text-secondary cursor-not-allowed"
                            } else {
                                "bg-accent text-bg"
                            }
                        )),
                    ],
                    [text(if in_flight { "Posting Task..." } else { "Post Task" })],
                ),
            ],
        )
    }

    fn view_submission_notice(&self) -> Node<Msg> {
        match &self.submission {
            PendingOperation::Succeeded(task) => {
                notice(&format!("Task posted successfully! \"{}\" is live.", task.title), true)
            }
            PendingOperation::Failed(err) => notice(&err.to_string(), false),
            PendingOperation::Idle | PendingOperation::InFlight => span([], []),
        }
    }

    fn text_field(
        &self,
        field: Field,
        hint: &str,
        current: &str,
        on_change: fn(String) -> Msg,
    ) -> Node<Msg> {
        div(
            [class("space-y-1")],
            [
                p([class("block text-sm font-medium text-fg")], [text(field)]),
                input(
                    [
                        r#type("text"),
                        placeholder(hint.to_string()),
                        value(current.to_string()),
                        on_input(move |event| on_change(event.value())),
                        class(&format!("{INPUT} {}", self.border_for(field))),
                    ],
                    [],
                ),
                self.field_error(field),
            ],
        )
    }

    fn border_for(&self, field: Field) -> &'static str {
        if self.field_errors.get(field).is_some() {
            "border-red-500"
        } else {
            "border-theme"
        }
    }

    fn field_error(&self, field: Field) -> Node<Msg> {
        match self.field_errors.get(field) {
            Some(message) => p([class("text-xs text-red-500")], [text(message)]),
            None => span([], []),
        }
    }

    fn view_type_picker(&self) -> Node<Msg> {
        div(
            [class("space-y-1")],
            [
                p([class("block text-sm font-medium text-fg")], [text("Task Type")]),
                div(
                    [class("grid grid-cols-2 gap-2")],
                    TaskType::ALL
                        .iter()
                        .map(|&task_type| {
                            let is_active = self.draft.task_type == task_type;
                            button(
                                [
                                    r#type("button"),
                                    key(task_type.key()),
                                    on_click(move |_| Msg::SetDraftType(task_type)),
                                    class(&format!(
                                        "flex items-center gap-2 px-3 py-2 rounded-lg border text-sm {}",
                                        if is_active {
                                            "border-accent bg-accent text-bg"
                                        } else {
                                            "border-theme bg-surface text-fg"
                                        }
                                    )),
                                ],
                                [
                                    span([], [text(task_type.icon())]),
                                    span([], [text(task_type.form_label())]),
                                ],
                            )
                        })
                        .collect::<Vec<_>>(),
                ),
            ],
        )
    }

    fn view_urgency_picker(&self) -> Node<Msg> {
        div(
            [class("space-y-1")],
            [
                p([class("block text-sm font-medium text-fg")], [text("Urgency")]),
                div(
                    [class("space-y-2")],
                    Urgency::ALL
                        .iter()
                        .map(|&urgency| {
                            let is_active = self.draft.urgency == urgency;
                            button(
                                [
                                    r#type("button"),
                                    on_click(move |_| Msg::SetDraftUrgency(urgency)),
                                    class(&format!(
                                        "w-full text-left px-3 py-2 rounded-lg border {}",
                                        if is_active {
                                            "border-accent bg-surface"
                                        } else {
                                            "border-theme bg-surface opacity-70"
                                        }
                                    )),
                                ],
                                [
                                    p([class("text-sm font-medium text-fg")], [text(urgency.label())]),
                                    p(
                                        [class("text-xs text-secondary")],
                                        [text(urgency.description())],
                                    ),
                                ],
                            )
                        })
                        .collect::<Vec<_>>(),
                ),
            ],
        )
    }
}
