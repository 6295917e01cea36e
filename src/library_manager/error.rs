//! Error types for the Library Manager.

use crate::domain::Role;
use thiserror::Error;

/// Denials a library operation can report.
///
/// None of these are fatal. The manager has already left its state untouched
/// by the time one is returned.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LendingError {
    /// The actor's role does not match the role the operation requires.
    #[error("{actor} is not authorized: requires {required} role")]
    NotAuthorized { actor: String, required: Role },

    /// The member already holds a loan.
    #[error("{member} is already borrowing {holding}")]
    AlreadyBorrowing { member: String, holding: String },

    /// The member tried to return a book that is not attributed to them.
    #[error("{member} never borrowed {title}")]
    NotBorrowed { member: String, title: String },
}
