//! Plain value records: the actors that call into the library and the books it holds.

pub mod book;
pub mod user;

pub use book::*;
pub use user::*;
