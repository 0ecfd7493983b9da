pub mod catalog;
pub mod error;
pub mod model;
pub mod progress;
pub mod state;
pub mod view;

pub use error::LessonError;
pub use model::{Lesson, LessonPart, Word};
pub use progress::{InputOutcome, LessonSession, advance, request_hint};
pub use state::SessionState;
pub use view::{LessonView, MASK_CHAR, ViewPass, compute_view, expected_char};
