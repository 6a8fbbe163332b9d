pub mod filename;
pub mod text_file;

pub use filename::expand_prefix;
pub use text_file::{save_text, FileFormat, SaveRequest, SavedFile};
