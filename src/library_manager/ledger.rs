//! Who is currently holding what.

use crate::domain::Book;
use serde::Serialize;
use std::collections::HashMap;

/// One ledger entry as exported to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanRecord {
    pub member: String,
    pub book: Book,
}

/// Maps a member name to the single book that member holds.
///
/// At most one entry per name; absence means "not borrowing".
#[derive(Debug, Default)]
pub(crate) struct LendingLedger {
    loans: HashMap<String, Book>,
}

impl LendingLedger {
    pub(crate) fn get(&self, member: &str) -> Option<&Book> {
        self.loans.get(member)
    }

    /// Records a loan. The caller has already checked that `member` holds nothing.
    pub(crate) fn open(&mut self, member: &str, book: Book) {
        self.loans.insert(member.to_string(), book);
    }

    pub(crate) fn close(&mut self, member: &str) -> Option<Book> {
        self.loans.remove(member)
    }

    /// Copies of every entry, sorted by member name.
    pub(crate) fn records(&self) -> Vec<LoanRecord> {
        let mut records: Vec<LoanRecord> = self
            .loans
            .iter()
            .map(|(member, book)| LoanRecord {
                member: member.clone(),
                book: book.clone(),
            })
            .collect();
        records.sort_by(|a, b| a.member.cmp(&b.member));
        records
    }

    pub(crate) fn len(&self) -> usize {
        self.loans.len()
    }
}
