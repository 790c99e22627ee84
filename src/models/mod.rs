pub mod initials;
pub mod lenient;
pub mod loaders;
pub mod quiz;
pub mod source;

pub use initials::{InitialsDocument, InitialsRecord};
pub use loaders::{load_json_document, load_json_value, save_json_document, to_pretty_json};
pub use quiz::{NormalizedQuestion, QuizDocument};
pub use source::{SourceAnswer, SourceDocument, SourceQuestion};
