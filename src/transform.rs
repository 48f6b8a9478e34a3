use crate::scalar::Scalar;

/// Whitespace separated words of `text` as text scalars.
#[must_use]
pub fn words(text: &str) -> Vec<Scalar> {
    text.split_whitespace().map(Scalar::from).collect()
}

/// All non-whitespace characters of `text` as single character text scalars.
#[must_use]
pub fn chars(text: &str) -> Vec<Scalar> {
    text.chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| Scalar::from(String::from(ch)))
        .collect()
}

/// Lowercases text scalars so counting can ignore case. Numbers are untouched.
#[must_use]
pub fn fold_case(value: Scalar) -> Scalar {
    match value {
        Scalar::Text(text) => Scalar::Text(text.to_lowercase()),
        number => number,
    }
}
