//! Configuration modules for the Classquest API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables once at process start:
//!
//! - [`cors`]: CORS allowed origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`email`]: SMTP settings for invitation emails
//! - [`jwt`]: token signing secret and expiries

pub mod cors;
pub mod database;
pub mod email;
pub mod jwt;
