//! Clause maps: the segmented body of one standard document.

use std::collections::BTreeMap;

/// Mapping from a dotted-numeric clause id (e.g. `"7.3.5"`) to the clause's
/// full text, heading line included.
///
/// Keys are opaque strings. The `BTreeMap` iterates them in byte-wise
/// lexicographic order, so `"10.1"` sorts before `"2.1"`.
pub type ClauseMap = BTreeMap<String, String>;

/// Build a [`ClauseMap`] from `(id, text)` pairs. Later pairs overwrite
/// earlier ones with the same id.
pub fn clause_map<I, K, V>(pairs: I) -> ClauseMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
