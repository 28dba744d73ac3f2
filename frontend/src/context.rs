use std::rc::Rc;

use chrono::{DateTime, Utc};
use errandmate_shared::{DataError, DataSource, Task, Theme, ThemeError, User};
use thiserror::Error;

/// Faults that replace the current screen with the recovery screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("could not load marketplace data: {0}")]
    Data(#[from] DataError),
}

/// Failures at the task submission boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Failed to post task. Please try again. ({0})")]
    Unavailable(String),
}

/// Everything a screen reads, captured at one instant.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub me: User,
    pub tasks: Vec<Task>,
    pub taken_at: DateTime<Utc>,
}

/// Application-wide state built once in `main` and owned by the model.
///
/// The data source is only read. The theme changes through [`AppContext::set_theme`].
pub struct AppContext {
    source: Rc<dyn DataSource>,
    theme: Theme,
}

impl AppContext {
    pub fn new(source: Rc<dyn DataSource>, theme: Theme) -> Self {
        Self { source, theme }
    }

    pub fn current_user(&self) -> Result<User, AppError> {
        Ok(self.source.current_user()?)
    }

    pub fn load(&self) -> Result<Snapshot, AppError> {
        Ok(Snapshot {
            me: self.current_user()?,
            tasks: self.source.list_tasks()?,
            taken_at: Utc::now(),
        })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches theme by key. Unknown keys leave the current theme in place.
    pub fn set_theme(&mut self, key: &str) -> Result<Theme, ThemeError> {
        let theme = key.parse::<Theme>()?;
        self.theme = theme;
        Ok(theme)
    }
}
