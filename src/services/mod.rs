pub mod answer_index;
pub mod initials_service;
pub mod normalizer;

pub use answer_index::{AnswerIndex, IndexEntry};
pub use initials_service::{build_initials, derive_initials, write_initials_file};
pub use normalizer::{convert_file, normalize_document, normalize_question, ConvertSummary};
