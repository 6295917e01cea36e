//! # Library Manager
//!
//! The one stateful, rule-bearing component. It owns the catalog and the
//! lending ledger and decides who may touch either.
//!
//! ## Structure
//!
//! - [`error`] - [`LendingError`], the denials an operation can report
//! - `catalog` - insertion-ordered book list with identity-based removal
//! - `ledger` - member name to held book, at most one entry per member
//!
//! ## Access Rules
//!
//! | Operation       | Required role | Denials                          |
//! |-----------------|---------------|----------------------------------|
//! | `add_book`      | Librarian     | `NotAuthorized`                  |
//! | `remove_book`   | Librarian     | `NotAuthorized`                  |
//! | `rent_book`     | Member        | `NotAuthorized`, `AlreadyBorrowing` |
//! | `return_book`   | Member        | `NotAuthorized`, `NotBorrowed`   |
//!
//! The role check always runs first, so a denied caller learns nothing about
//! the catalog or the ledger.
//!
//! ## Usage
//!
//! ```rust
//! use library_lending::domain::{Book, Librarian, Member};
//! use library_lending::library_manager::LibraryManager;
//! use std::time::SystemTime;
//!
//! let mut library = LibraryManager::new();
//! let librarian = Librarian::new("Ruth", 52);
//! let member = Member::new("Theo", 19);
//! let book = Book::new("Middlemarch", "George Eliot", SystemTime::UNIX_EPOCH);
//!
//! library.add_book(&librarian, book.clone()).unwrap();
//! library.rent_book(&member, book.clone()).unwrap();
//! assert!(library.rent_book(&member, book.clone()).is_err());
//! library.return_book(&member, &book).unwrap();
//! ```

mod catalog;
pub mod error;
mod ledger;

pub use error::*;
pub use ledger::LoanRecord;

use crate::domain::{Actor, Book, Role};
use catalog::Catalog;
use ledger::LendingLedger;
use tracing::{debug, info, instrument, warn};

/// Owns the catalog and the lending ledger.
///
/// Mutating operations take `&mut self`, so each check-then-mutate step runs
/// to completion before any other call on the same manager.
#[derive(Debug, Default)]
pub struct LibraryManager {
    catalog: Catalog,
    ledger: LendingLedger,
}

impl LibraryManager {
    /// Creates a manager with an empty catalog and an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an independent copy of the catalog in insertion order.
    ///
    /// Editing the returned vector or the books in it never reaches the
    /// stored catalog.
    pub fn get_books(&self) -> Vec<Book> {
        self.catalog.snapshot()
    }

    /// Appends `book` to the catalog.
    ///
    /// # Errors
    /// [`LendingError::NotAuthorized`] unless `actor` is a librarian.
    #[instrument(skip_all, fields(actor = %actor.name()))]
    pub fn add_book<A: Actor + ?Sized>(&mut self, actor: &A, book: Book) -> Result<(), LendingError> {
        authorize(actor, Role::Librarian)?;

        info!(title = %book.title, id = %book.id(), size = self.catalog.len() + 1, "Added");
        self.catalog.push(book);
        Ok(())
    }

    /// Removes the catalog entry that is the same entity as `book`.
    ///
    /// Returns the removed book, or `None` when the catalog does not hold it.
    /// An absent book is not an error.
    ///
    /// # Errors
    /// [`LendingError::NotAuthorized`] unless `actor` is a librarian.
    #[instrument(skip_all, fields(actor = %actor.name()))]
    pub fn remove_book<A: Actor + ?Sized>(
        &mut self,
        actor: &A,
        book: &Book,
    ) -> Result<Option<Book>, LendingError> {
        authorize(actor, Role::Librarian)?;

        let removed = self.catalog.remove_entity(book);
        match &removed {
            Some(b) => info!(title = %b.title, id = %b.id(), size = self.catalog.len(), "Removed"),
            None => debug!(title = %book.title, id = %book.id(), "Not in catalog, nothing removed"),
        }
        Ok(removed)
    }

    /// Lends `book` to `actor`.
    ///
    /// Catalog membership is not checked.
    ///
    /// # Errors
    /// - [`LendingError::NotAuthorized`] unless `actor` is a member.
    /// - [`LendingError::AlreadyBorrowing`] if the member already holds any
    ///   book, including this one.
    #[instrument(skip_all, fields(actor = %actor.name()))]
    pub fn rent_book<A: Actor + ?Sized>(&mut self, actor: &A, book: Book) -> Result<(), LendingError> {
        authorize(actor, Role::Member)?;

        if let Some(held) = self.ledger.get(actor.name()) {
            let err = LendingError::AlreadyBorrowing {
                member: actor.name().to_string(),
                holding: held.title.clone(),
            };
            warn!(title = %book.title, error = %err, "Rent denied");
            return Err(err);
        }

        info!(title = %book.title, id = %book.id(), loans = self.ledger.len() + 1, "Rented");
        self.ledger.open(actor.name(), book);
        Ok(())
    }

    /// Takes `book` back from `actor`.
    ///
    /// # Errors
    /// - [`LendingError::NotAuthorized`] unless `actor` is a member.
    /// - [`LendingError::NotBorrowed`] if the member holds nothing, or holds a
    ///   different entity.
    #[instrument(skip_all, fields(actor = %actor.name()))]
    pub fn return_book<A: Actor + ?Sized>(&mut self, actor: &A, book: &Book) -> Result<(), LendingError> {
        authorize(actor, Role::Member)?;

        let holds_it = self
            .ledger
            .get(actor.name())
            .is_some_and(|held| held.is_same_entity(book));
        if !holds_it {
            let err = LendingError::NotBorrowed {
                member: actor.name().to_string(),
                title: book.title.clone(),
            };
            warn!(error = %err, "Return denied");
            return Err(err);
        }

        self.ledger.close(actor.name());
        info!(title = %book.title, id = %book.id(), loans = self.ledger.len(), "Returned");
        Ok(())
    }

    /// A copy of the book `member` currently holds, if any.
    pub fn current_loan(&self, member: &str) -> Option<Book> {
        self.ledger.get(member).cloned()
    }

    /// Copies of every open loan, sorted by member name.
    pub fn active_loans(&self) -> Vec<LoanRecord> {
        self.ledger.records()
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn loan_count(&self) -> usize {
        self.ledger.len()
    }
}

/// Role gate shared by every mutating operation.
fn authorize<A: Actor + ?Sized>(actor: &A, required: Role) -> Result<(), LendingError> {
    if actor.role() == required {
        return Ok(());
    }
    let err = LendingError::NotAuthorized {
        actor: actor.name().to_string(),
        required,
    };
    warn!(role = %actor.role(), error = %err, "Denied");
    Err(err)
}
