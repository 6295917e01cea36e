//! # Observability & Tracing
//!
//! Every [`LibraryManager`](crate::library_manager::LibraryManager) operation
//! runs inside a span named after the operation, tagged with the acting
//! actor's name. The outcome is a single event inside that span:
//!
//! - `INFO` for a success (`Added`, `Removed`, `Rented`, `Returned`)
//! - `WARN` for a denial, with the [`LendingError`](crate::library_manager::LendingError)
//!   in the `error` field
//! - `DEBUG` for a removal of a book the catalog did not hold
//!
//! ## Configuration
//!
//! Verbosity comes from the `RUST_LOG` environment variable:
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run
//! RUST_LOG=library_lending::library_manager=warn cargo run
//! ```
//!
//! ## Example Output
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO add_book{actor=Ruth}: Added title=TS Grammar id=book_1 size=1
//! INFO rent_book{actor=Ana}: Rented title=TS Grammar id=book_1 loans=1
//! WARN rent_book{actor=Ana}: Rent denied title=Cooking Show error=Ana is already borrowing TS Grammar
//! WARN add_book{actor=Ana}: Denied role=member error=Ana is not authorized: requires librarian role
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global compact subscriber filtered by `RUST_LOG`.
///
/// # Panics
/// Panics if a global subscriber is already set. Use [`try_setup_tracing`]
/// where that can happen.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Like [`setup_tracing`], but reports an already-installed subscriber
/// instead of panicking. Test binaries call this from every test.
pub fn try_setup_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .with_test_writer()
        .try_init()
}
