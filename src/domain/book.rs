use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;

static NEXT_BOOK_ID: AtomicU64 = AtomicU64::new(1);

/// Entity identity of a [`Book`].
///
/// Minted once per [`Book::new`] call and carried unchanged through clones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookId(u64);

impl BookId {
    fn next() -> Self {
        Self(NEXT_BOOK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "book_{}", self.0)
    }
}

/// A single physical book.
///
/// # Identity
/// Two books built with identical fields are still different entities, and
/// only [`Book::id`] decides whether two values refer to the same one.
/// `PartialEq` compares every field, including the id, so a snapshot copy
/// stays equal to the stored book until someone edits it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    id: BookId,
    pub title: String,
    pub author: String,
    pub published: SystemTime,
}

impl Book {
    /// Creates a new Book entity with a fresh identity.
    ///
    /// # Arguments
    /// * `title` - Book title
    /// * `author` - Author name
    /// * `published` - Publication timestamp
    pub fn new(title: impl Into<String>, author: impl Into<String>, published: SystemTime) -> Self {
        Self {
            id: BookId::next(),
            title: title.into(),
            author: author.into(),
            published,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    /// True when both values are copies of the same entity, whatever their
    /// current field values.
    pub fn is_same_entity(&self, other: &Book) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}
