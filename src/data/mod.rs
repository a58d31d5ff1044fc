//! Data structures produced by report parsing

pub mod record;

pub use record::HardwareRecord;
