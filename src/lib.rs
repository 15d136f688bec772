//! MentorLink - Mentorship-matching platform API
//!
//! Mentees browse mentor profiles and express interest, admins pair
//! mentors with mentees, mentors schedule and log sessions, and each
//! role gets an aggregated dashboard view derived from the three
//! persisted collections (users, assignments, session logs).
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and pure derivation logic
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (entity store, migrations)
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{
    MentorshipAssignment, Password, SessionLog, SessionStatus, User, UserRole,
};
pub use errors::{AppError, AppResult};
