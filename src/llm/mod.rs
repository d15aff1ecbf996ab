pub mod anthropic;
pub mod generator;
pub mod openai;
pub mod prompts;
#[cfg(test)]
pub(crate) mod stub;

pub use anthropic::*;
pub use generator::{DraftGenerator, Rewriter};
pub use openai::*;
pub use prompts::*;
