//! Request types for HTTP handlers.

mod generate;

pub use generate::{GenerateDiagram, GenerateText, MAX_PROMPT_CHARS, PromptError};
