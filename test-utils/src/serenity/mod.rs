//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would deliver with an interaction.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_user;
//!
//! let asker = create_test_user(123456789, "asker");
//! ```

pub mod user;

pub use user::create_test_user;
