/// Client-side pages, addressed by URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    PostTask,
    Messages,
    Profile,
    Settings,
    ThemePreview,
    NotFound(String),
}

impl Route {
    pub fn to_path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::PostTask => "/post-task",
            Route::Messages => "/messages",
            Route::Profile => "/profile",
            Route::Settings => "/settings",
            Route::ThemePreview => "/theme-preview",
            Route::NotFound(path) => path,
        }
    }

    /// Maps a location to a page; query strings, fragments and a trailing
    /// slash are ignored, and any unknown path becomes [`Route::NotFound`].
    pub fn from_path(path: &str) -> Self {
        let bare = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
        let trimmed = match bare.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        match trimmed {
            "/" => Route::Home,
            "/post-task" => Route::PostTask,
            "/messages" => Route::Messages,
            "/profile" => Route::Profile,
            "/settings" => Route::Settings,
            "/theme-preview" => Route::ThemePreview,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound(_))
    }
}
