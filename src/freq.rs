use std::cmp::Reverse;
use std::fmt;

use itertools::Itertools;

use crate::hash_map::HashMap;
use crate::scalar::Scalar;

/// Frequency table over scalar values. Keys keep the order in which they were
/// first seen, so rendering a table is deterministic for a given input.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    // maps each key to its slot in `entries`
    index: HashMap<Scalar, usize>,
    entries: Vec<(Scalar, u64)>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `value`.
    pub fn tally(&mut self, value: Scalar) {
        self.bump(value, 1);
    }

    fn bump(&mut self, value: Scalar, occurrences: u64) {
        match self.index.get(&value) {
            Some(&slot) => self.entries[slot].1 += occurrences,
            None => {
                self.index.insert(value.clone(), self.entries.len());
                self.entries.push((value, occurrences));
            }
        }
    }

    /// The number of times `value` was seen, 0 if it never was.
    #[must_use]
    pub fn count(&self, value: &Scalar) -> u64 {
        self.index
            .get(value)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Distinct keys with their counts, in first-seen order.
    #[must_use]
    pub fn entries(&self) -> &[(Scalar, u64)] {
        &self.entries
    }

    /// The number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the length of the tallied input.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Adds all counts from `other` into `self`. Keys new to `self` are
    /// appended in the order they were first seen in `other`.
    pub fn merge(&mut self, other: FrequencyTable) {
        for (value, occurrences) in other.entries {
            self.bump(value, occurrences);
        }
    }

    /// Entries ordered by descending count, ties in first-seen order.
    #[must_use]
    pub fn most_common(&self) -> Vec<(Scalar, u64)> {
        self.entries
            .iter()
            .cloned()
            .sorted_by_key(|(_, count)| Reverse(*count))
            .collect()
    }
}

// the index is derivable from the entries, comparing entries is enough
impl PartialEq for FrequencyTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for FrequencyTable {}

impl FromIterator<Scalar> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl Extend<Scalar> for FrequencyTable {
    fn extend<I: IntoIterator<Item = Scalar>>(&mut self, iter: I) {
        for value in iter {
            self.tally(value);
        }
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut entries = self.entries.iter().peekable();
        while let Some((key, count)) = entries.next() {
            if entries.peek().is_some() {
                write!(f, "{}: {count}, ", key.literal())?;
            } else {
                write!(f, "{}: {count}", key.literal())?;
            }
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn example() -> Vec<Scalar> {
        vec![
            Scalar::from(1),
            Scalar::from(2),
            Scalar::from(1),
            Scalar::from(3),
            Scalar::from(3),
            Scalar::from(5),
            Scalar::from("Hi"),
            Scalar::from("Hello"),
            Scalar::from("Hi"),
            Scalar::from(1),
            Scalar::from(1),
        ]
    }

    #[test]
    fn counts_in_first_seen_order() {
        let table: FrequencyTable = example().into_iter().collect();
        let expected = vec![
            (Scalar::from(1), 4),
            (Scalar::from(2), 1),
            (Scalar::from(3), 2),
            (Scalar::from(5), 1),
            (Scalar::from("Hi"), 2),
            (Scalar::from("Hello"), 1),
        ];
        assert_eq!(table.entries(), expected.as_slice());
    }

    #[test]
    fn total_equals_the_input_length() {
        let input = example();
        let table: FrequencyTable = input.clone().into_iter().collect();
        assert_eq!(table.total(), input.len() as u64);
    }

    #[test]
    fn same_input_yields_an_equal_table() {
        let once: FrequencyTable = example().into_iter().collect();
        let twice: FrequencyTable = example().into_iter().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn numbers_and_their_text_rendering_are_distinct_keys() {
        let table: FrequencyTable = vec![Scalar::from(1), Scalar::from("1"), Scalar::from(1)]
            .into_iter()
            .collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.count(&Scalar::from(1)), 2);
        assert_eq!(table.count(&Scalar::from("1")), 1);
    }

    #[test]
    fn int_and_float_are_distinct_keys() {
        let table: FrequencyTable = vec![Scalar::from(1), Scalar::from(1.0)].into_iter().collect();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn empty_input_yields_an_empty_table() {
        let table: FrequencyTable = Vec::<Scalar>::new().into_iter().collect();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.to_string(), "{}");
    }

    #[test]
    fn single_value_maps_to_one() {
        let mut table = FrequencyTable::new();
        table.tally(Scalar::from("x"));
        assert_eq!(table.entries(), &[(Scalar::from("x"), 1)]);
    }

    #[test]
    fn unseen_values_count_zero() {
        let table = FrequencyTable::new();
        assert_eq!(table.count(&Scalar::from(42)), 0);
    }

    #[test]
    fn merge_adds_counts_and_appends_new_keys() {
        let mut left: FrequencyTable = vec![Scalar::from(1), Scalar::from("Hi")]
            .into_iter()
            .collect();
        let right: FrequencyTable = vec![Scalar::from("Hi"), Scalar::from(2)].into_iter().collect();
        left.merge(right);

        let expected = vec![
            (Scalar::from(1), 1),
            (Scalar::from("Hi"), 2),
            (Scalar::from(2), 1),
        ];
        assert_eq!(left.entries(), expected.as_slice());
        assert_eq!(left.total(), 4);
    }

    #[test]
    fn most_common_breaks_ties_by_first_seen() {
        let table: FrequencyTable = vec![
            Scalar::from("a"),
            Scalar::from("b"),
            Scalar::from("b"),
            Scalar::from("c"),
        ]
        .into_iter()
        .collect();

        let expected = vec![
            (Scalar::from("b"), 2),
            (Scalar::from("a"), 1),
            (Scalar::from("c"), 1),
        ];
        assert_eq!(table.most_common(), expected);
    }

    #[test]
    fn display_renders_like_the_input() {
        let table: FrequencyTable = vec![Scalar::from(1), Scalar::from("Hi"), Scalar::from(1)]
            .into_iter()
            .collect();
        assert_eq!(table.to_string(), "{1: 2, \"Hi\": 1}");
    }
}
