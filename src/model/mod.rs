//! Request-scoped domain types for the ask flow.
//!
//! Nothing here is persisted. A `Question` lives for one command invocation and
//! `Feedback` is the fixed set of reactions offered under every answer.

pub mod feedback;
pub mod question;
