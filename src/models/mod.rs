pub mod document;
pub mod template;

pub use document::*;
pub use template::*;
