//! Catalog record types

mod book;

pub use book::{Book, BookField, NewBook};
