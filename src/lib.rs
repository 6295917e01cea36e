//! # Library Lending
//!
//! > **An in-memory lending desk with role-based access control.**
//!
//! Librarians curate a catalog; members borrow and return one book at a time.
//! All of the rules live in one place, the [`LibraryManager`].
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Outcomes are values
//! No operation panics or unwinds. Every call returns a `Result` whose error
//! side is a [`LendingError`] naming the exact denial, and emits one structured
//! `tracing` event describing the same outcome.
//!
//! ### Role first
//! Each operation checks the caller's [`Role`] before it looks at any state.
//! A denied caller never changes the catalog or the ledger and learns nothing
//! about either.
//!
//! ### Identity, not titles
//! Books are matched by [`BookId`], minted on [`Book::new`]. Two books with the
//! same title and author are different copies; a clone is the same copy.
//!
//! ### Snapshots, not references
//! [`LibraryManager::get_books`] hands out field-wise clones. Nothing outside
//! the manager can reach the stored books.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Records ([`domain`])
//! - **Role**: Plain data: [`Librarian`], [`Member`], [`Book`], and the [`Actor`] trait.
//!
//! ### 2. The Rules ([`library_manager`])
//! - **Role**: Owns the catalog and the lending ledger; enforces who may do what.
//! - **Key items**: [`LibraryManager`], [`LendingError`], [`LoanRecord`].
//!
//! ### 3. The Wiring ([`lifecycle`])
//! - **Role**: Tracing setup and the scripted demonstration session.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod domain;
pub mod library_manager;
pub mod lifecycle;

pub use domain::{Actor, Book, BookId, Librarian, Member, Role};
pub use library_manager::{LendingError, LibraryManager, LoanRecord};
