//! Core domain concepts shared across all subdomains.
//!
//! - [`id`] — typed identifiers issued by a board
//! - [`detail::Detail`] — validated, non-blank post text
//! - [`kind::PostKind`] — question or answer
//! - [`error::DomainError`] — domain-level errors

pub mod detail;
pub mod error;
pub mod id;
pub mod kind;
