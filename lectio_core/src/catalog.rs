//! Built-in catalog of the 66-book canon.
//!
//! Chapter counts follow the Protestant canon: 39 Old Testament books
//! (929 chapters) and 27 New Testament books (260 chapters), 1189 total.

use crate::types::{Book, Catalog, Testament};
use once_cell::sync::Lazy;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
///
/// Prefer this over `build_default_catalog` on hot paths; the book table
/// allocates 66 entries and there is no reason to do that per query.
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog
///
/// **Note**: retained for tests and for callers that want an owned catalog
/// to modify (e.g. a different corpus); production code should use
/// `get_default_catalog()`.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

/// (name, abbreviation, testament, chapter count), in canonical order
const BOOK_TABLE: &[(&str, &str, Testament, u32)] = &[
    // Old Testament (39)
    ("Genesis", "Gen", Testament::Old, 50),
    ("Exodus", "Exod", Testament::Old, 40),
    ("Leviticus", "Lev", Testament::Old, 27),
    ("Numbers", "Num", Testament::Old, 36),
    ("Deuteronomy", "Deut", Testament::Old, 34),
    ("Joshua", "Josh", Testament::Old, 24),
    ("Judges", "Judg", Testament::Old, 21),
    ("Ruth", "Ruth", Testament::Old, 4),
    ("1 Samuel", "1Sam", Testament::Old, 31),
    ("2 Samuel", "2Sam", Testament::Old, 24),
    ("1 Kings", "1Kgs", Testament::Old, 22),
    ("2 Kings", "2Kgs", Testament::Old, 25),
    ("1 Chronicles", "1Chr", Testament::Old, 29),
    ("2 Chronicles", "2Chr", Testament::Old, 36),
    ("Ezra", "Ezra", Testament::Old, 10),
    ("Nehemiah", "Neh", Testament::Old, 13),
    ("Esther", "Esth", Testament::Old, 10),
    ("Job", "Job", Testament::Old, 42),
    ("Psalms", "Ps", Testament::Old, 150),
    ("Proverbs", "Prov", Testament::Old, 31),
    ("Ecclesiastes", "Eccl", Testament::Old, 12),
    ("Song of Solomon", "Song", Testament::Old, 8),
    ("Isaiah", "Isa", Testament::Old, 66),
    ("Jeremiah", "Jer", Testament::Old, 52),
    ("Lamentations", "Lam", Testament::Old, 5),
    ("Ezekiel", "Ezek", Testament::Old, 48),
    ("Daniel", "Dan", Testament::Old, 12),
    ("Hosea", "Hos", Testament::Old, 14),
    ("Joel", "Joel", Testament::Old, 3),
    ("Amos", "Amos", Testament::Old, 9),
    ("Obadiah", "Obad", Testament::Old, 1),
    ("Jonah", "Jonah", Testament::Old, 4),
    ("Micah", "Mic", Testament::Old, 7),
    ("Nahum", "Nah", Testament::Old, 3),
    ("Habakkuk", "Hab", Testament::Old, 3),
    ("Zephaniah", "Zeph", Testament::Old, 3),
    ("Haggai", "Hag", Testament::Old, 2),
    ("Zechariah", "Zech", Testament::Old, 14),
    ("Malachi", "Mal", Testament::Old, 4),
    // New Testament (27)
    ("Matthew", "Matt", Testament::New, 28),
    ("Mark", "Mark", Testament::New, 16),
    ("Luke", "Luke", Testament::New, 24),
    ("John", "John", Testament::New, 21),
    ("Acts", "Acts", Testament::New, 28),
    ("Romans", "Rom", Testament::New, 16),
    ("1 Corinthians", "1Cor", Testament::New, 16),
    ("2 Corinthians", "2Cor", Testament::New, 13),
    ("Galatians", "Gal", Testament::New, 6),
    ("Ephesians", "Eph", Testament::New, 6),
    ("Philippians", "Phil", Testament::New, 4),
    ("Colossians", "Col", Testament::New, 4),
    ("1 Thessalonians", "1Thess", Testament::New, 5),
    ("2 Thessalonians", "2Thess", Testament::New, 3),
    ("1 Timothy", "1Tim", Testament::New, 6),
    ("2 Timothy", "2Tim", Testament::New, 4),
    ("Titus", "Titus", Testament::New, 3),
    ("Philemon", "Phlm", Testament::New, 1),
    ("Hebrews", "Heb", Testament::New, 13),
    ("James", "Jas", Testament::New, 5),
    ("1 Peter", "1Pet", Testament::New, 5),
    ("2 Peter", "2Pet", Testament::New, 3),
    ("1 John", "1John", Testament::New, 5),
    ("2 John", "2John", Testament::New, 1),
    ("3 John", "3John", Testament::New, 1),
    ("Jude", "Jude", Testament::New, 1),
    ("Revelation", "Rev", Testament::New, 22),
];

/// Internal function that actually builds the catalog
fn build_default_catalog_internal() -> Catalog {
    let books = BOOK_TABLE
        .iter()
        .map(|&(name, abbr, testament, chapters)| Book {
            name: name.into(),
            abbr: abbr.into(),
            testament,
            chapters,
        })
        .collect();

    Catalog { books }
}

impl Catalog {
    /// Look up a book by its full name or abbreviation
    pub fn get(&self, name: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.name == name || b.abbr == name)
    }

    /// Canonical position of a book, if present
    pub fn position(&self, name: &str) -> Option<usize> {
        self.books.iter().position(|b| b.name == name || b.abbr == name)
    }

    /// Total chapter count across the whole catalog
    pub fn total_chapters(&self) -> u32 {
        self.books.iter().map(|b| b.chapters).sum()
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let mut seen = std::collections::HashSet::new();
        for book in &self.books {
            if book.name.is_empty() {
                errors.push("Book has empty name".to_string());
            }
            if book.abbr.is_empty() {
                errors.push(format!("Book '{}' has empty abbreviation", book.name));
            }
            if book.chapters == 0 {
                errors.push(format!("Book '{}' has zero chapters", book.name));
            }
            if !seen.insert(book.name.as_str()) {
                errors.push(format!("Duplicate book name '{}'", book.name));
            }
        }

        // Both halves must be represented for half-scope plans to resolve
        let has_old = self.books.iter().any(|b| b.testament == Testament::Old);
        let has_new = self.books.iter().any(|b| b.testament == Testament::New);

        if !has_old {
            errors.push("Catalog has no Old Testament books".to_string());
        }
        if !has_new {
            errors.push("Catalog has no New Testament books".to_string());
        }

        errors
    }
}
