//! Header lookup over whatever the transport hands us.
//!
//! HTTP header names are case-insensitive, so every map based source falls
//! back to an ASCII-case-insensitive scan when the exact key is not present.
//! When several keys differ only by case, ordered sources (slices, vecs,
//! `BTreeMap`) return the first match and a `HashMap` returns the value of
//! the lexicographically smallest key, so the answer never depends on hash
//! order.

use std::{collections::BTreeMap, collections::HashMap, hash::BuildHasher};

/// Stand-in for a header value that exists but is not readable as text.
/// It is not hex, so it always fails verification.
pub const UNREADABLE_HEADER_VALUE: &str = "\u{fffd}";

pub trait SignatureHeaders {
    /// Value of the header `name`, if present.
    ///
    /// A present value that cannot be read as text is returned as
    /// [`UNREADABLE_HEADER_VALUE`], never as `None`: an absent header and an
    /// unreadable one are different failures.
    fn header(&self, name: &str) -> Option<&str>;
}

fn find_ignore_case<'a, K, V, I>(entries: I, name: &str) -> Option<&'a str>
where
    K: AsRef<str> + 'a,
    V: AsRef<str> + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    entries
        .into_iter()
        .find(|(key, _)| key.as_ref().eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_ref())
}

impl<S: BuildHasher> SignatureHeaders for HashMap<String, String, S> {
    fn header(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(value) => Some(value.as_str()),
            None => self
                .iter()
                .filter(|(key, _)| key.eq_ignore_ascii_case(name))
                .min_by_key(|&(key, _)| key.as_str())
                .map(|(_, value)| value.as_str()),
        }
    }
}

impl SignatureHeaders for BTreeMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(value) => Some(value.as_str()),
            None => find_ignore_case(self.iter(), name),
        }
    }
}

impl<K: AsRef<str>, V: AsRef<str>> SignatureHeaders for [(K, V)] {
    fn header(&self, name: &str) -> Option<&str> {
        find_ignore_case(self.iter().map(|(key, value)| (key, value)), name)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> SignatureHeaders for Vec<(K, V)> {
    fn header(&self, name: &str) -> Option<&str> {
        self.as_slice().header(name)
    }
}

impl<T: SignatureHeaders + ?Sized> SignatureHeaders for &T {
    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }
}
