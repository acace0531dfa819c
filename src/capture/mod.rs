pub mod extractor;
pub mod geometry;
pub mod source;
