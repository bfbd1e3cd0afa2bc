//! Utility functions for alias generation, URL checks, and request handling.
//!
//! - [`alias_generator`] - Random alias generation and custom alias validation
//! - [`target_url`] - Validation of URLs submitted for shortening
//! - [`base_url`] - Public base URL resolution for building short URLs

pub mod alias_generator;
pub mod base_url;
pub mod target_url;
