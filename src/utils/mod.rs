//! Shared utilities:
//!
//! - [`email`]: invitation email delivery over SMTP
//! - [`errors`]: application error taxonomy and response mapping
//! - [`jwt`]: session and invitation token creation/verification
//! - [`password`]: PBKDF2 password hashing and verification

pub mod email;
pub mod errors;
pub mod jwt;
pub mod password;
