pub mod cleanup;
pub mod client;
pub mod contract_prompts;
pub mod pom_prompts;
pub mod scenario_prompts;
pub mod steps_prompts;

pub use cleanup::*;
pub use client::*;
