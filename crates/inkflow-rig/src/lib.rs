#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod error;
mod profile;
pub mod provider;

pub use config::{ProviderKind, RigConfig};
pub use error::{Error, Result};
pub use profile::PromptProfile;
pub use provider::CompletionProvider;

/// Tracing target for the main library.
pub const TRACING_TARGET: &str = "inkflow_rig";
