//! Data Transfer Objects for requests and responses.
//!
//! Request DTOs are validated with `validator`; responses serialize to JSON.

pub mod create;
pub mod health;
pub mod stats;
