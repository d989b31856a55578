//! Named-color table, reference resolution, and ordering policy.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};

use super::Color;

/// The right-hand side of one color definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorDef {
    /// A fully specified color value.
    Literal(Color),
    /// A named pointer to another entry, resolved by lookup.
    Reference(String),
}

/// A table of named color definitions.
///
/// Names are unique; inserting a second definition for the same name is an
/// error, not an overwrite. The table is logically unordered. Consumers
/// enumerate it through [`ColorTable::sorted`], never in raw map order.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    entries: HashMap<String, ColorDef>,
}

impl ColorTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (name, def) pairs, enforcing name uniqueness.
    ///
    /// This is the entry point for importers that bypass the parser.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, ColorDef)>,
    {
        let mut table = Self::new();
        for (name, def) in entries {
            table.insert(name, def)?;
        }
        Ok(table)
    }

    /// Insert a definition, failing with `DuplicateColorName` if the name
    /// is already present.
    pub fn insert(&mut self, name: String, def: ColorDef) -> Result<()> {
        if self.entries.contains_key(&name) {
            return Err(Error::DuplicateColorName(name));
        }
        self.entries.insert(name, def);
        Ok(())
    }

    /// Look up a definition by name.
    pub fn get(&self, name: &str) -> Option<&ColorDef> {
        self.entries.get(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a name to a concrete color by following reference chains.
    ///
    /// Fails with `MissingReference` when a name is not in the table and
    /// `CyclicReference` when a chain revisits a name.
    pub fn resolve(&self, name: &str) -> Result<Color> {
        self.resolve_visited(name, HashSet::new())
    }

    // The visited set travels by value down the walk, so each top-level
    // resolve starts from a clean path and sibling chains never observe
    // each other's marks.
    fn resolve_visited(&self, name: &str, mut visited: HashSet<String>) -> Result<Color> {
        if !visited.insert(name.to_string()) {
            return Err(Error::CyclicReference(name.to_string()));
        }

        match self.entries.get(name) {
            None => Err(Error::MissingReference(name.to_string())),
            Some(ColorDef::Literal(color)) => Ok(*color),
            Some(ColorDef::Reference(referenced)) => self.resolve_visited(referenced, visited),
        }
    }

    /// Entries in generator order: literals before references, then
    /// case-insensitive natural name order within each kind.
    pub fn sorted(&self) -> Vec<(&str, &ColorDef)> {
        let mut entries: Vec<(&str, &ColorDef)> = self
            .entries
            .iter()
            .map(|(name, def)| (name.as_str(), def))
            .collect();
        entries.sort_by(|a, b| compare(*a, *b));
        entries
    }
}

/// Total order over table entries used by every generator.
///
/// Literal entries sort strictly before reference entries regardless of
/// name. Keeping that quirk matters: output ordering is part of the
/// observable contract of the generated files.
pub fn compare(a: (&str, &ColorDef), b: (&str, &ColorDef)) -> Ordering {
    match (a.1, b.1) {
        (ColorDef::Literal(_), ColorDef::Reference(_)) => Ordering::Less,
        (ColorDef::Reference(_), ColorDef::Literal(_)) => Ordering::Greater,
        _ => natural_cmp(a.0, b.0),
    }
}

/// Case-insensitive natural string comparison.
///
/// Digit runs compare numerically, so "item2" sorts before "item10".
/// Names that tie under the folded comparison ("Apple"/"apple",
/// "a2"/"a02") fall back to plain lexical order so the result is a total
/// order and generator output stays deterministic.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let run_a = take_digit_run(&mut ca);
                let run_b = take_digit_run(&mut cb);
                match cmp_digit_runs(&run_a, &run_b) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            (Some(x), Some(y)) => {
                let lx = x.to_lowercase().to_string();
                let ly = y.to_lowercase().to_string();
                match lx.cmp(&ly) {
                    Ordering::Equal => {
                        ca.next();
                        cb.next();
                    }
                    other => return other,
                }
            }
        }
    }
}

fn take_digit_run(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

// Compare digit runs as integers of arbitrary length: strip leading zeros,
// then shorter means smaller, then lexical on equal lengths.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(entries: &[(&str, ColorDef)]) -> ColorTable {
        ColorTable::from_entries(
            entries
                .iter()
                .map(|(name, def)| (name.to_string(), def.clone())),
        )
        .unwrap()
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut t = ColorTable::new();
        t.insert("red".into(), ColorDef::Literal(Color::rgb(255, 0, 0)))
            .unwrap();
        let err = t
            .insert("red".into(), ColorDef::Literal(Color::rgb(0, 0, 0)))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateColorName(name) if name == "red"));
    }

    #[test]
    fn test_resolve_literal() {
        let t = table(&[("red", ColorDef::Literal(Color::rgb(255, 0, 0)))]);
        assert_eq!(t.resolve("red").unwrap(), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_resolve_chain() {
        let t = table(&[
            ("base", ColorDef::Literal(Color::rgb(1, 2, 3))),
            ("accent", ColorDef::Reference("base".into())),
            ("link", ColorDef::Reference("accent".into())),
        ]);
        assert_eq!(t.resolve("link").unwrap(), Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let t = table(&[
            ("base", ColorDef::Literal(Color::rgb(1, 2, 3))),
            ("accent", ColorDef::Reference("base".into())),
        ]);
        assert_eq!(t.resolve("accent").unwrap(), t.resolve("accent").unwrap());
    }

    #[test]
    fn test_resolve_missing() {
        let t = table(&[("a", ColorDef::Reference("z".into()))]);
        let err = t.resolve("a").unwrap_err();
        assert!(matches!(err, Error::MissingReference(name) if name == "z"));
    }

    #[test]
    fn test_resolve_cycle() {
        let t = table(&[
            ("a", ColorDef::Reference("b".into())),
            ("b", ColorDef::Reference("a".into())),
        ]);
        let err = t.resolve("a").unwrap_err();
        assert!(matches!(err, Error::CyclicReference(name) if name == "a"));
    }

    #[test]
    fn test_resolve_self_cycle() {
        let t = table(&[("a", ColorDef::Reference("a".into()))]);
        let err = t.resolve("a").unwrap_err();
        assert!(matches!(err, Error::CyclicReference(name) if name == "a"));
    }

    #[test]
    fn test_sibling_chains_do_not_share_visited_state() {
        // Both chains pass through "base"; resolving one must not poison
        // a later resolve of the other.
        let t = table(&[
            ("base", ColorDef::Literal(Color::rgb(9, 9, 9))),
            ("left", ColorDef::Reference("base".into())),
            ("right", ColorDef::Reference("base".into())),
        ]);
        assert_eq!(t.resolve("left").unwrap(), Color::rgb(9, 9, 9));
        assert_eq!(t.resolve("right").unwrap(), Color::rgb(9, 9, 9));
    }

    #[test]
    fn test_sorted_literals_before_references() {
        let t = table(&[
            ("a", ColorDef::Reference("b".into())),
            ("b", ColorDef::Literal(Color::rgb(0, 0, 0))),
        ]);
        let names: Vec<&str> = t.sorted().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_sorted_natural_numeric_order() {
        let t = table(&[
            ("item10", ColorDef::Literal(Color::rgb(0, 0, 0))),
            ("item2", ColorDef::Literal(Color::rgb(0, 0, 0))),
            ("b", ColorDef::Literal(Color::rgb(0, 0, 0))),
            ("a", ColorDef::Reference("b".into())),
        ]);
        let names: Vec<&str> = t.sorted().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["b", "item2", "item10", "a"]);
    }

    #[test]
    fn test_natural_cmp_case_insensitive() {
        assert_eq!(natural_cmp("Apple", "banana"), Ordering::Less);
        assert_eq!(natural_cmp("BANANA", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_natural_cmp_digit_runs() {
        assert_eq!(natural_cmp("item2", "item10"), Ordering::Less);
        assert_eq!(natural_cmp("item10a", "item10b"), Ordering::Less);
    }

    #[test]
    fn test_natural_cmp_folded_ties_break_lexically() {
        // Case-folded or numerically equal names still need a stable
        // relative order, or output would follow map iteration order.
        assert_eq!(natural_cmp("Apple", "apple"), Ordering::Less);
        assert_eq!(natural_cmp("apple", "Apple"), Ordering::Greater);
        assert_eq!(natural_cmp("a02", "a2"), Ordering::Less);
        assert_eq!(natural_cmp("a2", "a02"), Ordering::Greater);
        assert_eq!(natural_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_sorted_is_deterministic_for_folded_ties() {
        let t = table(&[
            ("accent", ColorDef::Literal(Color::rgb(1, 1, 1))),
            ("Accent", ColorDef::Literal(Color::rgb(2, 2, 2))),
        ]);
        let names: Vec<&str> = t.sorted().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["Accent", "accent"]);
    }
}
