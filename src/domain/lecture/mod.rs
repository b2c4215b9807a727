//! Lecture domain module

mod record;
mod seed;

pub use record::{derive_title, Lecture, LectureId, DURATION_PENDING, PROCESSED_JUST_UPLOADED};
pub use seed::seed_lectures;
