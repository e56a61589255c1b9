//! Natural ordering of item display text.
//!
//! "Station 2" sorts before "Station 10": maximal digit runs compare by
//! numeric value instead of code point, and everything between them goes
//! through locale-aware collation. This is the comparator callers use to
//! pre-sort a list before showing it; the session itself never re-sorts.

use std::cmp::Ordering;

use icu::collator::options::{CollatorOptions, Strength};
use icu::collator::{Collator, CollatorBorrowed, CollatorPreferences};
use icu::locale::Locale;
use thiserror::Error;

use droplist_core::StringResolver;

use crate::list::DropdownList;

/// Collation tables for the requested locale could not be loaded.
#[derive(Debug, Error)]
#[error("collation tables unavailable: {message}")]
pub struct NaturalOrderError {
    message: String,
}

/// Compares display strings the way a person reads them.
///
/// Digit runs compare by numeric value with leading zeros ignored; on a
/// value tie the run with fewer leading zeros orders first, keeping the
/// ordering total. Non-digit runs collate at secondary strength, so
/// comparison is case-insensitive but accent-sensitive. A digit run
/// orders before a non-digit run at the same position, and a string
/// that is a prefix of another orders first.
pub struct NaturalOrder {
    collator: CollatorBorrowed<'static>,
}

impl NaturalOrder {
    /// Create a comparator for the current system locale.
    ///
    /// Falls back to root-locale collation when the system locale cannot
    /// be detected or parsed.
    pub fn new() -> Result<Self, NaturalOrderError> {
        let locale = sys_locale::get_locale()
            .and_then(|tag| tag.parse::<Locale>().ok())
            .unwrap_or(Locale::UNKNOWN);
        Self::with_locale(locale)
    }

    /// Create a comparator for a specific locale.
    pub fn with_locale(locale: Locale) -> Result<Self, NaturalOrderError> {
        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Secondary);

        let collator = Collator::try_new(CollatorPreferences::from(locale), options)
            .or_else(|_| Collator::try_new(CollatorPreferences::from(Locale::UNKNOWN), options))
            .map_err(|err| NaturalOrderError {
                message: err.to_string(),
            })?;

        Ok(Self { collator })
    }

    /// Compare two strings in natural order.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let mut runs_a = Runs { rest: a };
        let mut runs_b = Runs { rest: b };
        loop {
            match (runs_a.next(), runs_b.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(run_a), Some(run_b)) => {
                    let ord = match (run_a.numeric, run_b.numeric) {
                        (true, true) => compare_digit_runs(run_a.text, run_b.text),
                        (false, false) => self.collator.compare(run_a.text, run_b.text),
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                    };
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
            }
        }
    }

    /// Stable-sort a list by resolved display text.
    ///
    /// Items without display text (separators) order before items with
    /// text and keep their relative order among themselves; equal-text
    /// items also keep their insertion order.
    pub fn sort(&self, list: &mut DropdownList, strings: &dyn StringResolver) {
        list.items_mut().sort_by(|a, b| {
            match (a.display_text(strings), b.display_text(strings)) {
                (Some(text_a), Some(text_b)) => self.compare(&text_a, &text_b),
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
    }
}

struct Run<'a> {
    text: &'a str,
    numeric: bool,
}

/// Splits a string into maximal runs of ASCII digits and non-digits.
struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Run<'a>> {
        let first = self.rest.chars().next()?;
        let numeric = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != numeric)
            .map(|(index, _)| index)
            .unwrap_or(self.rest.len());
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Run { text: run, numeric })
    }
}

/// Compare two all-digit runs by numeric value, without parsing, so
/// arbitrarily long runs cannot overflow.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let stripped_a = a.trim_start_matches('0');
    let stripped_b = b.trim_start_matches('0');
    stripped_a
        .len()
        .cmp(&stripped_b.len())
        .then_with(|| stripped_a.cmp(stripped_b))
        .then_with(|| a.len().cmp(&b.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{RawTextItem, SeparatorItem};
    use droplist_core::{Param, ParamList, StringId};

    struct RawResolver;

    impl StringResolver for RawResolver {
        fn resolve(&self, id: StringId, params: &ParamList) -> String {
            assert_eq!(id, StringId::RAW_TEXT);
            match params.get(0) {
                Param::Text(text) => text.clone(),
                Param::Int(_) => String::new(),
            }
        }
    }

    fn order() -> NaturalOrder {
        NaturalOrder::with_locale(Locale::UNKNOWN).expect("root locale collation")
    }

    #[test]
    fn test_numbers_compare_by_value() {
        let order = order();
        assert_eq!(order.compare("Item 2", "Item 10"), Ordering::Less);
        assert_eq!(order.compare("Item 10", "Item 2"), Ordering::Greater);
        assert_eq!(order.compare("Item 2", "Item 2"), Ordering::Equal);
    }

    #[test]
    fn test_leading_zeros_ignored_but_tiebroken() {
        let order = order();
        assert_eq!(order.compare("a1", "a01"), Ordering::Less);
        assert_eq!(order.compare("a01", "a1"), Ordering::Greater);
        assert_eq!(order.compare("a007", "a8"), Ordering::Less);
    }

    #[test]
    fn test_case_insensitive_collation() {
        let order = order();
        assert_eq!(order.compare("station", "Station"), Ordering::Equal);
        assert_eq!(order.compare("alpha", "Beta"), Ordering::Less);
    }

    #[test]
    fn test_prefix_orders_first() {
        let order = order();
        assert_eq!(order.compare("Depot", "Depot 1"), Ordering::Less);
        assert_eq!(order.compare("12", "12b"), Ordering::Less);
    }

    #[test]
    fn test_digits_order_before_letters() {
        let order = order();
        assert_eq!(order.compare("10 Downing", "Downing"), Ordering::Less);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let order = order();
        let mut list = DropdownList::new();
        list.push(Box::new(RawTextItem::new("station", 1)));
        list.push(Box::new(RawTextItem::new("Item 10", 2)));
        list.push(Box::new(RawTextItem::new("Station", 3)));
        list.push(Box::new(RawTextItem::new("Item 2", 4)));

        order.sort(&mut list, &RawResolver);

        let results: Vec<i32> = list.iter().map(|item| item.result()).collect();
        // "Item 2" < "Item 10"; "station" ties with "Station" and keeps
        // its earlier position.
        assert_eq!(results, vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_sort_keeps_textless_items_together_up_front() {
        let order = order();
        let mut list = DropdownList::new();
        list.push(Box::new(RawTextItem::new("b", 1)));
        list.push(Box::new(SeparatorItem::new(-1)));
        list.push(Box::new(RawTextItem::new("a", 2)));

        order.sort(&mut list, &RawResolver);

        let results: Vec<i32> = list.iter().map(|item| item.result()).collect();
        assert_eq!(results, vec![-1, 2, 1]);
    }
}
