//! Small shared helpers

pub mod encoding;
pub mod parsing;
