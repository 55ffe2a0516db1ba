//! Mermaid diagram pipeline.
//!
//! Raw model text flows through three pure steps:
//!
//! 1. [`extract_diagram`] strips code fences and prose before the diagram.
//! 2. [`validate_diagram`] applies a structural gate.
//! 3. [`fallback_diagram`] builds a replacement when the gate rejects.
//!
//! [`process_model_output`] chains them and reports which path was taken.
//!
//! # Example
//!
//! ```rust
//! use inkflow_core::diagram::process_model_output;
//!
//! let outcome = process_model_output("draw a login flow", "```mermaid\nflowchart TD\n A-->B\n```");
//! assert!(outcome.is_generated());
//! assert_eq!(outcome.code(), "flowchart TD\nA-->B");
//! ```

mod extract;
mod fallback;
mod outcome;
mod starter;
mod validate;

pub use extract::extract_diagram;
pub use fallback::{FALLBACK_PROMPT_CHARS, fallback_diagram};
pub use outcome::{DiagramOutcome, process_model_output};
pub use starter::DiagramStarter;
pub use validate::{ValidationError, ValidationResult, validate_diagram};
