mod formatter;
mod summary;

pub use formatter::OutputFormatter;
pub use summary::{Category, JsonSummary, TestEntry};
