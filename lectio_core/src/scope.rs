//! Scope resolution: from a selector to an ordered slice of the catalog.

use crate::types::{Book, Catalog, PlanScope, Testament};
use crate::{Error, Result};
use std::collections::HashSet;

/// Resolve a scope selector into an ordered list of books
///
/// The result is always in canonical catalog order, whatever order a custom
/// selection was given in; schedule generation therefore never jumps
/// backwards through the text. Duplicate names in a custom selection
/// collapse to one entry.
pub fn resolve_scope(catalog: &Catalog, scope: &PlanScope) -> Result<Vec<Book>> {
    match scope {
        PlanScope::Full => Ok(catalog.books.clone()),

        PlanScope::OldTestament => Ok(books_in_testament(catalog, Testament::Old)),
        PlanScope::NewTestament => Ok(books_in_testament(catalog, Testament::New)),

        PlanScope::Custom { books } => {
            if books.is_empty() {
                return Err(Error::InvalidScope("custom scope selects no books".into()));
            }

            // Normalize requested names to canonical book names, rejecting
            // anything the catalog doesn't have.
            let mut wanted = HashSet::with_capacity(books.len());
            for name in books {
                match catalog.get(name) {
                    Some(book) => {
                        wanted.insert(book.name.as_str());
                    }
                    None => {
                        return Err(Error::InvalidScope(format!("unknown book '{}'", name)));
                    }
                }
            }

            Ok(catalog
                .books
                .iter()
                .filter(|b| wanted.contains(b.name.as_str()))
                .cloned()
                .collect())
        }
    }
}

fn books_in_testament(catalog: &Catalog, testament: Testament) -> Vec<Book> {
    catalog
        .books
        .iter()
        .filter(|b| b.testament == testament)
        .cloned()
        .collect()
}

/// Total chapter count of a resolved scope
pub fn total_chapters(books: &[Book]) -> u32 {
    books.iter().map(|b| b.chapters).sum()
}
