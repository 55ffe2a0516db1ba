#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//! # Inkflow Core
//!
//! This crate holds the text-level diagram pipeline and the abstractions for
//! calling a language model, without depending on any concrete provider.

/// Tracing target for diagram pipeline operations.
pub const TRACING_TARGET_DIAGRAM: &str = "inkflow_core::diagram";

/// Tracing target for language model operations.
pub const TRACING_TARGET_LANGUAGE: &str = "inkflow_core::language";

mod error;

pub mod diagram;
pub mod language;

#[cfg(feature = "mock")]
#[cfg_attr(docsrs, doc(cfg(feature = "mock")))]
pub mod mock;

pub use error::{BoxedError, Error, ErrorKind, Result};
