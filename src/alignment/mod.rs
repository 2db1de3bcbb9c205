pub mod reader;
pub mod sequence;

pub use sequence::{AlignedSequence, Alignment};
