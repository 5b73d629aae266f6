//! Case-insensitive substring search over country lists.
//!
//! An empty query is not "match everything": it means the user cleared the
//! search box, and the caller reloads the full list from the data source
//! instead of filtering locally. [`filter_by_substring`] reports that case as
//! [`SubstringFilter::NoFilter`] so the caller has to handle it explicitly.

/// Outcome of a substring search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubstringFilter<T> {
    /// The query was empty; reload the unfiltered list.
    NoFilter,
    /// Items whose key contains the query, in input order. May be empty.
    Matches(Vec<T>),
}

/// Filters `items` to those whose key contains `query`, ignoring case.
///
/// Both the query and each key are lowercased before comparison. No other
/// normalization happens, so `"é"` does not match `"e"`.
///
/// # Examples
///
/// ```
/// use zcovid::domain::{filter_by_substring, SubstringFilter};
///
/// let slugs = ["australia", "austria", "canada"];
/// let found = filter_by_substring("AUS", &slugs, |s| *s);
/// assert_eq!(found, SubstringFilter::Matches(vec![&"australia", &"austria"]));
///
/// assert_eq!(filter_by_substring("", &slugs, |s| *s), SubstringFilter::NoFilter);
/// ```
pub fn filter_by_substring<'a, T, F>(query: &str, items: &'a [T], key: F) -> SubstringFilter<&'a T>
where
    F: Fn(&T) -> &str,
{
    if query.is_empty() {
        return SubstringFilter::NoFilter;
    }

    let needle = query.to_lowercase();
    let matches = items
        .iter()
        .filter(|&item| key(item).to_lowercase().contains(&needle))
        .collect();

    SubstringFilter::Matches(matches)
}

/// Character range of the first case-insensitive occurrence of `query` in `text`.
///
/// Returns `(start, end)` as character indices into `text` itself, with an
/// exclusive end, suitable for match highlighting. Characters whose lowercase
/// form is longer (e.g. `'İ'`) still count as one character of `text`. `None`
/// when the query is empty or absent.
///
/// # Examples
///
/// ```
/// use zcovid::domain::match_range;
///
/// assert_eq!(match_range("new-zealand", "ZEA"), Some((4, 7)));
/// assert_eq!(match_range("İstanbul", "stan"), Some((1, 5)));
/// assert_eq!(match_range("france", "xyz"), None);
/// ```
#[must_use]
pub fn match_range(text: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }

    let needle = query.to_lowercase();
    text.char_indices()
        .enumerate()
        .find_map(|(start, (byte, _))| {
            matched_chars(&text[byte..], &needle).map(|len| (start, start + len))
        })
}

/// Number of leading characters of `text` whose lowercase form starts with
/// `needle`.
fn matched_chars(text: &str, needle: &str) -> Option<usize> {
    let mut lowered = String::with_capacity(needle.len());
    for (consumed, ch) in text.chars().enumerate() {
        lowered.extend(ch.to_lowercase());
        if lowered.len() >= needle.len() {
            return lowered.starts_with(needle).then_some(consumed + 1);
        }
        if !needle.starts_with(lowered.as_str()) {
            return None;
        }
    }
    None
}
