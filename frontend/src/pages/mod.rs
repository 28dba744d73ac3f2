//! One `impl Model` block per screen.

mod home;
mod messages;
mod not_found;
mod post_task;
mod profile;
mod settings;
mod theme_preview;
