//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - An alias mapped to a long URL, with its click counter
//! - [`Category`] - A named bucket in the link organizer
//! - [`Link`] - A labelled URL stored inside a category
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewShortLink`, `NewCategory` and `NewLink` carry only the caller-supplied
//! fields; identity and timestamps are assigned by the store.

pub mod category;
pub mod link;
pub mod short_link;

pub use category::{Category, NewCategory};
pub use link::{Link, NewLink};
pub use short_link::{NewShortLink, ShortLink};
