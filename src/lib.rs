//! Tiered broker for AI-generated gift card copy and imagery
//!
//! Accepts a customer prompt and an industry type, infers the target audience
//! for that industry, and returns curated descriptions, tags and name
//! suggestions, or a generated background image, at one of two service tiers.

pub mod ai;
pub mod config;
pub mod error;
pub mod generation;
pub mod models;
pub mod prompts;
pub mod server;
pub mod tier;

pub use error::{Error, Result};
