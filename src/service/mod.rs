//! Business logic between the Discord command layer and the backend.
//!
//! - `backend` - HTTP client for the question-answering endpoint
//! - `reply` - Text of answers and apologies
//! - `ask` - The acknowledge → ask → reply → annotate flow

pub mod ask;
pub mod backend;
pub mod reply;

#[cfg(test)]
mod test;
