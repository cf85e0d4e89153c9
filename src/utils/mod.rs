pub mod extractors;
pub mod format;
