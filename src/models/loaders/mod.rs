pub mod json_loader;

pub use json_loader::{load_json_document, load_json_value, save_json_document, to_pretty_json};
