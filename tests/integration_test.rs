use library_lending::lifecycle::{run_reference_scenario, try_setup_tracing};
use library_lending::{Book, LendingError, Librarian, LibraryManager, Member, Role};
use std::time::UNIX_EPOCH;

/// Full end-to-end run of the scripted session on a fresh manager.
#[test]
fn test_reference_scenario() {
    let _ = try_setup_tracing();
    let mut library = LibraryManager::new();

    let report = run_reference_scenario(&mut library).expect("Scenario went off script");

    let titles: Vec<_> = report.catalog.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["TS Grammar", "Discipline Guide", "Cooking Show"]);
    assert_eq!(report.loans_left, 0);
    assert!(library.active_loans().is_empty());
    assert_eq!(library.catalog_len(), 3);

    assert_eq!(
        report.denials,
        vec![
            LendingError::NotAuthorized {
                actor: "Ana".to_string(),
                required: Role::Librarian,
            },
            LendingError::NotAuthorized {
                actor: "Ruth".to_string(),
                required: Role::Member,
            },
            LendingError::AlreadyBorrowing {
                member: "Ana".to_string(),
                holding: "TS Grammar".to_string(),
            },
            LendingError::NotBorrowed {
                member: "Ben".to_string(),
                title: "TS Grammar".to_string(),
            },
        ]
    );
}

/// The scenario's loans step by step, checking the ledger between calls.
#[test]
fn test_two_members_borrow_and_return() {
    let _ = try_setup_tracing();
    let mut library = LibraryManager::new();
    let librarian = Librarian::new("Ruth", 52);
    let ana = Member::new("Ana", 24);
    let ben = Member::new("Ben", 31);

    let grammar = Book::new("TS Grammar", "Dana Ortiz", UNIX_EPOCH);
    let discipline = Book::new("Discipline Guide", "Sam Reyes", UNIX_EPOCH);
    let cooking = Book::new("Cooking Show", "Lou Park", UNIX_EPOCH);
    for book in [&grammar, &discipline, &cooking] {
        library.add_book(&librarian, book.clone()).expect("Failed to add book");
    }

    library.rent_book(&ana, grammar.clone()).expect("Ana failed to rent");
    assert_eq!(library.current_loan("Ana"), Some(grammar.clone()));

    library.rent_book(&ben, discipline.clone()).expect("Ben failed to rent");
    assert_eq!(library.current_loan("Ben"), Some(discipline.clone()));
    assert_eq!(library.loan_count(), 2);

    library.return_book(&ana, &grammar).expect("Ana failed to return");
    assert_eq!(library.current_loan("Ana"), None);

    library.return_book(&ben, &discipline).expect("Ben failed to return");
    assert_eq!(library.loan_count(), 0);
    assert_eq!(library.get_books().len(), 3);
}

/// Running the scenario twice on one manager stacks a second copy of each
/// title, because the new books are different entities.
#[test]
fn test_scenario_books_are_new_entities_each_run() {
    let mut library = LibraryManager::new();

    run_reference_scenario(&mut library).expect("First run failed");
    run_reference_scenario(&mut library).expect("Second run failed");

    let books = library.get_books();
    assert_eq!(books.len(), 6);
    assert!(!books[0].is_same_entity(&books[3]));
    assert_eq!(books[0].title, books[3].title);
}
