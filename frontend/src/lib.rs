//! ErrandMate single-page app, rendered with sauron and compiled to WebAssembly.

use std::rc::Rc;

use chrono::Utc;
use errandmate_shared::{
    CreateTaskRequest, FieldErrors, ListingQuery, MockDataSource, PendingOperation, Route,
    SubmitRejected, Task, TaskDraft, TaskFilter, TaskId, TaskType, Urgency, User,
};
use sauron::{
    html::{attributes::*, *},
    prelude::*,
};

macro_rules! debug_log {
    ($($arg:tt)*) => {
        web_sys::console::log_1(&format!("[DEBUG] {}", format_args!($($arg)*)).into())
    };
}

mod components;
mod context;
mod pages;
mod platform;

pub use context::{AppContext, AppError, Snapshot, SubmitError};

/// How long the simulated submission takes before resolving.
pub const SUBMIT_DELAY_MS: i32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Posted,
    Completed,
    Stats,
}

#[derive(Debug, Clone)]
pub enum Msg {
    // Navigation
    NavigateTo(Route),

    // Home
    SetSearch(String),
    SetFilter(TaskFilter),
    ClearFilters,
    OpenTask(TaskId),
    BecomeRunner,

    // Post task
    SetDraftTitle(String),
    SetDraftDescription(String),
    SetDraftLocation(String),
    SetDraftType(TaskType),
    SetDraftBudget(String),
    SetDraftUrgency(Urgency),
    SubmitTask,
    TaskPosted(Result<Task, SubmitError>),
    DismissNotice,

    // Messages
    OpenChat(TaskId),
    CloseChat,
    SetChatInput(String),
    SendChatMessage,

    // Profile and settings
    SelectTab(ProfileTab),
    EditProfile,
    SetTheme(String),
    SignOut,

    Retry,
}

pub struct Model {
    ctx: AppContext,
    route: Route,
    snapshot: Result<Snapshot, AppError>,
    listing: ListingQuery,
    draft: TaskDraft,
    field_errors: FieldErrors,
    submission: PendingOperation<Task, SubmitError>,
    open_chat: Option<TaskId>,
    chat_input: String,
    profile_tab: ProfileTab,
}

impl Model {
    pub fn new(ctx: AppContext) -> Self {
        let snapshot = ctx.load();
        Self {
            ctx,
            route: Route::Home,
            snapshot,
            listing: ListingQuery::default(),
            draft: TaskDraft::default(),
            field_errors: FieldErrors::default(),
            submission: PendingOperation::default(),
            open_chat: None,
            chat_input: String::new(),
            profile_tab: ProfileTab::default(),
        }
    }

    fn submit(&mut self) -> Cmd<Msg> {
        let poster = match &self.snapshot {
            Ok(snapshot) => snapshot.me.clone(),
            Err(err) => {
                debug_log!("Post task without a user: {}", err);
                return Cmd::none();
            }
        };

        let request = match self.draft.begin_submission(&mut self.submission) {
            Ok(request) => request,
            Err(SubmitRejected::Invalid(errors)) => {
                debug_log!("Post task rejected: {} invalid field(s)", errors.len());
                self.field_errors = errors;
                return Cmd::none();
            }
            Err(SubmitRejected::AlreadyInFlight) => {
                debug_log!("Post task ignored, submission already in flight");
                return Cmd::none();
            }
        };
        self.field_errors = FieldErrors::default();

        debug_log!("Posting task: {}", request.title);
        Cmd::new(async move { Msg::TaskPosted(submit_task(request, poster).await) })
    }

    /// Draws the current route, or fails if the data it needs is unavailable.
    fn render_page(&self) -> Result<Node<Msg>, AppError> {
        if let Route::NotFound(path) = &self.route {
            return Ok(self.view_not_found(path));
        }
        let snapshot = self.snapshot.as_ref().map_err(Clone::clone)?;
        Ok(match &self.route {
            Route::Home => self.view_home(snapshot),
            Route::PostTask => self.view_post_task(),
            Route::Messages => self.view_messages(snapshot),
            Route::Profile => self.view_profile(snapshot),
            Route::Settings => self.view_settings(snapshot),
            Route::ThemePreview => self.view_theme_preview(snapshot),
            Route::NotFound(path) => self.view_not_found(path),
        })
    }

    fn has_shell(&self) -> bool {
        !matches!(self.route, Route::NotFound(_) | Route::ThemePreview)
    }

    fn view_shell(&self, page: Node<Msg>) -> Node<Msg> {
        div(
            [class("min-h-screen bg-bg text-fg pb-20")],
            [
                div([class("max-w-md mx-auto px-4 py-6")], [page]),
                components::bottom_nav(&self.route),
            ],
        )
    }

    fn view_recovery(&self, err: &AppError) -> Node<Msg> {
        div(
            [class("min-h-screen bg-bg text-fg flex items-center justify-center px-4")],
            [div(
                [class("text-center max-w-sm")],
                [
                    div([class("text-5xl mb-4")], [text("⚠️")]),
                    h2(
                        [class("text-2xl font-bold mb-2")],
                        [text("Something went wrong!")],
                    ),
                    p(
                        [class("text-secondary mb-6")],
                        [text("We hit a snag loading this page. Please try again.")],
                    ),
                    p([class("text-xs text-secondary mb-6")], [text(err.to_string())]),
                    button(
                        [
                            r#type("button"),
                            class("bg-accent text-bg font-medium px-6 py-2 rounded-lg"),
                            on_click(|_| Msg::Retry),
                        ],
                        [text("Try again")],
                    ),
                ],
            )],
        )
    }
}

impl Application for Model {
    type MSG = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        if let Some(pathname) = platform::current_path() {
            self.route = Route::from_path(&pathname);
            debug_log!("Initial route: {:?}", self.route);
        }
        platform::setup_popstate_listener();
        Cmd::none()
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::NavigateTo(route) => {
                platform::push_path(route.to_path());
                self.route = route;
                self.open_chat = None;
                Cmd::none()
            }

            Msg::SetSearch(search) => {
                self.listing.search = search;
                Cmd::none()
            }
            Msg::SetFilter(filter) => {
                self.listing.filter = filter;
                Cmd::none()
            }
            Msg::ClearFilters => {
                self.listing = ListingQuery::default();
                Cmd::none()
            }
            Msg::OpenTask(id) => {
                debug_log!("Open task {}", id);
                Cmd::none()
            }
            Msg::BecomeRunner => {
                debug_log!("Become a runner requested");
                Cmd::none()
            }

            Msg::SetDraftTitle(value) => {
                self.draft.title = value;
                Cmd::none()
            }
            Msg::SetDraftDescription(value) => {
                self.draft.description = value;
                Cmd::none()
            }
            Msg::SetDraftLocation(value) => {
                self.draft.location = value;
                Cmd::none()
            }
            Msg::SetDraftType(task_type) => {
                self.draft.task_type = task_type;
                Cmd::none()
            }
            Msg::SetDraftBudget(value) => {
                self.draft.budget = value;
                Cmd::none()
            }
            Msg::SetDraftUrgency(urgency) => {
                self.draft.urgency = urgency;
                Cmd::none()
            }
            Msg::SubmitTask => self.submit(),
            Msg::TaskPosted(outcome) => {
                match &outcome {
                    Ok(task) => {
                        debug_log!("Task posted: {} ({})", task.title, task.id);
                        self.draft = TaskDraft::default();
                    }
                    Err(err) => debug_log!("Task post failed: {}", err),
                }
                self.submission.finish(outcome);
                Cmd::none()
            }
            Msg::DismissNotice => {
                self.submission.dismiss();
                Cmd::none()
            }

            Msg::OpenChat(id) => {
                self.open_chat = Some(id);
                self.chat_input.clear();
                Cmd::none()
            }
            Msg::CloseChat => {
                self.open_chat = None;
                Cmd::none()
            }
            Msg::SetChatInput(value) => {
                self.chat_input = value;
                Cmd::none()
            }
            Msg::SendChatMessage => {
                if !self.chat_input.trim().is_empty() {
                    debug_log!("Sending message: {}", self.chat_input.trim());
                    self.chat_input.clear();
                }
                Cmd::none()
            }

            Msg::SelectTab(tab) => {
                self.profile_tab = tab;
                Cmd::none()
            }
            Msg::EditProfile => {
                debug_log!("Edit profile requested");
                Cmd::none()
            }
            Msg::SetTheme(key) => {
                match self.ctx.set_theme(&key) {
                    Ok(theme) => {
                        platform::apply_theme(theme);
                        platform::store_theme(theme);
                        debug_log!("Theme changed to {}", theme);
                    }
                    Err(err) => debug_log!("Theme change rejected: {}", err),
                }
                Cmd::none()
            }
            Msg::SignOut => {
                debug_log!("Sign out requested");
                Cmd::none()
            }

            Msg::Retry => {
                self.snapshot = self.ctx.load();
                debug_log!("Retry load, ok = {}", self.snapshot.is_ok());
                Cmd::none()
            }
        }
    }

    fn view(&self) -> Node<Msg> {
        match self.render_page() {
            Ok(page) if self.has_shell() => self.view_shell(page),
            Ok(page) => page,
            Err(err) => {
                debug_log!("Render failed on {:?}: {}", self.route, err);
                self.view_recovery(&err)
            }
        }
    }
}

/// Stands in for a network round-trip: waits, then builds the task locally.
async fn submit_task(request: CreateTaskRequest, poster: User) -> Result<Task, SubmitError> {
    platform::delay(SUBMIT_DELAY_MS)
        .await
        .map_err(SubmitError::Unavailable)?;
    Ok(Task::new(request, &poster, Utc::now()))
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let theme = platform::stored_theme().unwrap_or_default();
    platform::apply_theme(theme);

    let ctx = AppContext::new(Rc::new(MockDataSource::default()), theme);
    Program::mount_to_body(Model::new(ctx));
}
