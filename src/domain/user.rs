use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of roles an actor can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Librarian,
    Member,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Librarian => write!(f, "librarian"),
            Role::Member => write!(f, "member"),
        }
    }
}

/// Anyone who performs operations against the library.
///
/// # Design Note
/// Librarians and members differ only in the role tag they report, so the
/// capability is a trait with two accessors instead of a type hierarchy.
/// The [`LibraryManager`](crate::library_manager::LibraryManager) never looks
/// past `name()` and `role()`.
pub trait Actor {
    /// Display name. Doubles as the lending-ledger key.
    fn name(&self) -> &str;

    /// The role used for every access check.
    fn role(&self) -> Role;
}

/// A staff member who curates the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Librarian {
    pub name: String,
    pub age: u32,
}

impl Librarian {
    /// Creates a new Librarian.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `age` - Age in years (informational only)
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Actor for Librarian {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> Role {
        Role::Librarian
    }
}

/// A patron who borrows books, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub age: u32,
}

impl Member {
    /// Creates a new Member.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Actor for Member {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> Role {
        Role::Member
    }
}
