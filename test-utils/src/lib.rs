//! Course Assistant Test Utils
//!
//! Provides shared testing utilities for the course assistant bot: a builder for a
//! mock question-answering backend and factories for Serenity objects.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder configuring what the mock backend answers
//! - **TestContext**: Running mock backend plus request inspection helpers
//! - **serenity**: Factories for Discord objects such as the asking user
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_backend_call() {
//!     let test = TestBuilder::new()
//!         .with_answer("42")
//!         .build()
//!         .await;
//!
//!     let url = test.backend_url();
//!     // Point the client at `url`...
//!
//!     assert_eq!(test.request_count().await, 1);
//! }
//! ```

pub mod builder;
pub mod context;
pub mod serenity;
