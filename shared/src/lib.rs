//! Data model and view derivations for the ErrandMate neighborhood task marketplace.
//!
//! Everything here is pure and synchronous so the same code backs the
//! WebAssembly frontend, the development server and the native test suite.

pub mod conversation;
pub mod display;
pub mod draft;
pub mod error;
pub mod listing;
pub mod model;
pub mod pending;
pub mod route;
pub mod source;
pub mod stats;
pub mod theme;

pub use conversation::{conversations, sample_thread, ConversationSummary};
pub use draft::{CreateTaskRequest, Field, FieldErrors, SubmitRejected, TaskDraft, Urgency};
pub use error::{AlreadyInFlight, DataError, ParseError, ThemeError, TransitionError};
pub use listing::{available_tasks, ListingQuery, TaskFilter};
pub use model::{
    Budget, Message, MessageId, Rating, RatingId, Score, StarRating, Task, TaskId, TaskStatus,
    TaskType, User, UserId, VerificationStatus,
};
pub use pending::PendingOperation;
pub use route::Route;
pub use source::{DataSource, MockDataSource};
pub use stats::{profile_stats, ProfileStats};
pub use theme::{Palette, Theme};
