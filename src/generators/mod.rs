pub mod contract;
pub mod page_object;
pub mod scenario;
pub mod steps;

pub use contract::*;
pub use page_object::*;
pub use scenario::*;
pub use steps::*;
