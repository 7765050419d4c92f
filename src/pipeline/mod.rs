pub mod two_stage;

pub use two_stage::*;
