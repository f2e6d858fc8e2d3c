//! Fixed fortune lists and the uniform picker.
//!
//! A `FortuneBook` is loaded once at startup, either from the list bundled
//! into the binary or from a text file, and is never mutated afterwards.
//! Construction rejects empty lists and blank entries, so picking cannot fail.
use std::io::BufRead;

use rand::Rng;

use crate::error::FortuneError;

/// Fortunes shipped with the application, as a JSON array of strings.
const BUNDLED_FORTUNES: &str = include_str!("../data/fortunes.json");

/// Immutable, non-empty list of fortunes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneBook {
    entries: Vec<String>,
}

impl FortuneBook {
    /// Build a book from already-loaded entries.
    ///
    /// Returns `EmptyFortunes` for an empty list and `BlankFortune` (1-based
    /// position) for any entry that is empty after trimming.
    pub fn new(entries: Vec<String>) -> Result<Self, FortuneError> {
        if entries.is_empty() {
            return Err(FortuneError::EmptyFortunes);
        }
        if let Some(pos) = entries.iter().position(|e| e.trim().is_empty()) {
            return Err(FortuneError::BlankFortune(pos + 1));
        }
        Ok(Self { entries })
    }

    /// The list bundled into the binary.
    pub fn bundled() -> Result<Self, FortuneError> {
        Self::from_json(BUNDLED_FORTUNES)
    }

    /// Parse a JSON array of strings.
    pub fn from_json(json: &str) -> Result<Self, FortuneError> {
        let entries: Vec<String> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Parse fortunes from a buffered reader, one per line.
    ///
    /// Lines are trimmed and blank lines are skipped.
    pub fn parse_from_file<R: BufRead>(reader: R) -> Result<Self, FortuneError> {
        let mut entries = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(FortuneError::Io)?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() {
                continue;
            }
            entries.push(trimmed_line.to_string());
        }
        Self::new(entries)
    }

    /// Choose one fortune with a uniform random index. Repeats are possible.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        let index = rng.random_range(0..self.entries.len());
        &self.entries[index]
    }

    /// Whether `text` is one of the fortunes in this book.
    pub fn contains(&self, text: &str) -> bool {
        self.entries.iter().any(|e| e == text)
    }

    /// Number of fortunes. Never zero.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use std::io::Cursor;

    #[test]
    fn bundled_book_has_ten_fortunes() {
        let book = FortuneBook::bundled().unwrap();
        assert_eq!(book.count(), 10);
        assert!(book.contains("Follow the tech, not the hype."));
    }

    #[test]
    fn thousand_picks_stay_inside_the_list() {
        let book = FortuneBook::bundled().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();

        for _ in 0..1000 {
            let pick = book.pick(&mut rng);
            assert!(!pick.is_empty());
            assert!(book.contains(pick), "unexpected fortune: {}", pick);
            seen.insert(pick.to_string());
        }
        // Uniform over 10 entries: 1000 draws reach all of them.
        assert_eq!(seen.len(), book.count());
    }

    #[test]
    fn single_entry_book_always_returns_it() {
        let book = FortuneBook::new(vec!["Only one".to_string()]).unwrap();
        let mut rng = rand::rng();
        for _ in 0..20 {
            assert_eq!(book.pick(&mut rng), "Only one");
        }
    }

    #[test]
    fn file_parsing_skips_blank_lines() {
        let input = "Buy the dip\n\n   \n  Stay humble  \n";
        let book = FortuneBook::parse_from_file(Cursor::new(input)).unwrap();
        assert_eq!(book.count(), 2);
        assert!(book.contains("Buy the dip"));
        assert!(book.contains("Stay humble"));
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert!(matches!(
            FortuneBook::parse_from_file(Cursor::new("\n\n")),
            Err(FortuneError::EmptyFortunes)
        ));
        assert!(matches!(
            FortuneBook::from_json("[]"),
            Err(FortuneError::EmptyFortunes)
        ));
    }

    #[test]
    fn blank_entry_is_reported_by_position() {
        let result = FortuneBook::from_json(r#"["ok", "  "]"#);
        assert!(matches!(result, Err(FortuneError::BlankFortune(2))));
    }

    #[test]
    fn invalid_json_is_a_serde_error() {
        assert!(matches!(
            FortuneBook::from_json("{not json"),
            Err(FortuneError::SerdeJson(_))
        ));
    }
}
