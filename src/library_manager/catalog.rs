//! The ordered collection of books the library currently holds.

use crate::domain::Book;

/// Insertion-ordered list of books.
///
/// Never hands out references to stored books; [`Catalog::snapshot`] copies.
#[derive(Debug, Default)]
pub(crate) struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub(crate) fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Removes the first entry that is the same entity as `book`.
    pub(crate) fn remove_entity(&mut self, book: &Book) -> Option<Book> {
        let pos = self.books.iter().position(|b| b.is_same_entity(book))?;
        Some(self.books.remove(pos))
    }

    pub(crate) fn snapshot(&self) -> Vec<Book> {
        self.books.iter().map(Book::clone).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.books.len()
    }
}
