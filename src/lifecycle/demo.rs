//! Scripted walkthrough used by the binary and the integration tests.

use crate::domain::{Book, Librarian, Member, Role};
use crate::library_manager::{LendingError, LibraryManager};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{info, info_span};

/// Ways the scripted run can go off script.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScenarioError {
    /// A step that should succeed was denied.
    #[error("scenario step failed: {0}")]
    Step(#[from] LendingError),

    /// A step that should be denied went through.
    #[error("step `{step}` was expected to be denied but succeeded")]
    UnexpectedSuccess { step: &'static str },

    /// A step was denied for a different reason than scripted.
    #[error("step `{step}` denied with `{actual}`, expected `{expected}`")]
    WrongDenial {
        step: &'static str,
        expected: LendingError,
        actual: LendingError,
    },
}

/// What the library looks like after the scripted run.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub catalog: Vec<Book>,
    /// Scripted denials, in the order they happened.
    pub denials: Vec<LendingError>,
    pub loans_left: usize,
}

fn published(days: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(days * 86_400)
}

fn expect_denial(
    step: &'static str,
    result: Result<(), LendingError>,
    expected: LendingError,
    denials: &mut Vec<LendingError>,
) -> Result<(), ScenarioError> {
    match result {
        Ok(()) => Err(ScenarioError::UnexpectedSuccess { step }),
        Err(actual) if actual == expected => {
            denials.push(actual);
            Ok(())
        }
        Err(actual) => Err(ScenarioError::WrongDenial {
            step,
            expected,
            actual,
        }),
    }
}

/// Runs the reference lending session against `library`.
///
/// A librarian stocks three books, two members each borrow and return one,
/// and four out-of-role or out-of-order calls are checked for the right
/// denial along the way.
///
/// # Errors
/// [`ScenarioError`] when any step deviates from the script.
pub fn run_reference_scenario(library: &mut LibraryManager) -> Result<ScenarioReport, ScenarioError> {
    let librarian = Librarian::new("Ruth", 52);
    let ana = Member::new("Ana", 24);
    let ben = Member::new("Ben", 31);

    let grammar = Book::new("TS Grammar", "Dana Ortiz", published(18_000));
    let discipline = Book::new("Discipline Guide", "Sam Reyes", published(17_500));
    let cooking = Book::new("Cooking Show", "Lou Park", published(19_000));

    let mut denials = Vec::new();

    {
        let _span = info_span!("stocking").entered();
        library.add_book(&librarian, grammar.clone())?;
        library.add_book(&librarian, discipline.clone())?;
        library.add_book(&librarian, cooking.clone())?;

        expect_denial(
            "member adds a book",
            library.add_book(&ana, Book::new("Pamphlet", "Ana", published(20_000))),
            LendingError::NotAuthorized {
                actor: ana.name.clone(),
                required: Role::Librarian,
            },
            &mut denials,
        )?;
    }

    {
        let _span = info_span!("lending").entered();
        expect_denial(
            "librarian rents a book",
            library.rent_book(&librarian, cooking.clone()),
            LendingError::NotAuthorized {
                actor: librarian.name.clone(),
                required: Role::Member,
            },
            &mut denials,
        )?;

        library.rent_book(&ana, grammar.clone())?;
        expect_denial(
            "member rents a second book",
            library.rent_book(&ana, cooking.clone()),
            LendingError::AlreadyBorrowing {
                member: ana.name.clone(),
                holding: grammar.title.clone(),
            },
            &mut denials,
        )?;

        library.rent_book(&ben, discipline.clone())?;
        expect_denial(
            "member returns someone else's book",
            library.return_book(&ben, &grammar),
            LendingError::NotBorrowed {
                member: ben.name.clone(),
                title: grammar.title.clone(),
            },
            &mut denials,
        )?;

        library.return_book(&ana, &grammar)?;
        library.return_book(&ben, &discipline)?;
    }

    let report = ScenarioReport {
        catalog: library.get_books(),
        denials,
        loans_left: library.loan_count(),
    };
    info!(
        books = report.catalog.len(),
        denials = report.denials.len(),
        loans_left = report.loans_left,
        "Scenario finished"
    );
    Ok(report)
}
