//! Request extractors whose rejections use the server's JSON error model.

pub mod enhanced_json;

pub use self::enhanced_json::Json;
