use super::{
    HeaderName,
    error::HeaderError,
    field::{GetAll, HeaderField},
    iter::Iter,
    list::{List, split_list},
};
use crate::matches;

/// HTTP Headers Multimap.
///
/// A header name may hold multiple values. Each [`append`][HeaderMap::append] adds a separate
/// value, values with the same name are never merged into a comma joined value.
///
/// Names are case-insensitive, they are stored in canonical form, see [`HeaderName`].
///
/// Fields are iterated in the order their name was first added.
#[derive(Clone, Default)]
pub struct HeaderMap {
    fields: Vec<HeaderField>,
    /// total number of values
    len: usize,
}

impl HeaderMap {
    /// Create new empty [`HeaderMap`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            fields: Vec::new(),
            len: 0,
        }
    }

    /// Create new empty [`HeaderMap`] with at least the specified capacity of distinct names.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Create [`HeaderMap`] from alternating name and value.
    ///
    /// ```rust
    /// use httphead::headers::{HeaderMap, HeaderError};
    ///
    /// let map = HeaderMap::from_pairs(["cookie", "a=1", "Cookie", "b=2"]).unwrap();
    /// assert_eq!(map.get_all("Cookie").collect::<Vec<_>>(), ["a=1", "b=2"]);
    ///
    /// let err = HeaderMap::from_pairs(["cookie", "a=1", "host"]).unwrap_err();
    /// assert_eq!(err, HeaderError::OddPairs);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::OddPairs`] if the input has an odd number of items.
    pub fn from_pairs<I, S>(items: I) -> Result<Self, HeaderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut items = items.into_iter();
        let mut map = Self::new();

        while let Some(name) = items.next() {
            let Some(value) = items.next() else {
                return Err(HeaderError::OddPairs);
            };
            map.append(name.as_ref(), value.as_ref());
        }

        Ok(map)
    }

    /// Returns the number of values in the map.
    ///
    /// Multiple values of the same name are counted separately.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of distinct header names.
    #[inline]
    pub fn fields_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if headers has no element.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the fields of the map, in insertion order.
    #[inline]
    pub fn fields(&self) -> &[HeaderField] {
        &self.fields
    }
}

// ===== Lookup =====

impl HeaderMap {
    /// Returns `true` if the map contains a header value for given header name.
    #[inline]
    pub fn contains_key<K: AsHeaderName>(&self, name: K) -> bool {
        self.field(&name).is_some()
    }

    /// Returns the first header value corresponding to the given header name.
    ///
    /// ```rust
    /// use httphead::headers::{standard::CONTENT_TYPE, HeaderMap};
    ///
    /// let mut map = HeaderMap::new();
    /// map.append(CONTENT_TYPE, "text/html");
    ///
    /// assert_eq!(map.get(CONTENT_TYPE), Some("text/html"));
    /// assert_eq!(map.get("content-type"), Some("text/html"));
    /// assert_eq!(map.get("host"), None);
    /// ```
    #[inline]
    pub fn get<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.field(&name).map(HeaderField::value)
    }

    /// Returns an iterator to all header values corresponding to the given header name.
    ///
    /// The iterator is empty if the name is absent.
    #[inline]
    pub fn get_all<K: AsHeaderName>(&self, name: K) -> GetAll<'_> {
        match self.field(&name) {
            Some(field) => field.iter(),
            None => GetAll::empty(),
        }
    }

    /// Returns the comma separated list items of the first header value corresponding to the given
    /// header name.
    ///
    /// Only the first value is split, other values with the same name are ignored. Items are not
    /// unquoted, see [`split_list`][super::split_list] for details.
    ///
    /// ```rust
    /// use httphead::headers::HeaderMap;
    ///
    /// let map = HeaderMap::from_pairs(["foo", "a, b , c ", "foo", "d"]).unwrap();
    ///
    /// assert_eq!(map.get_list("foo").collect::<Vec<_>>(), ["a", "b", "c"]);
    /// assert_eq!(map.get_list("bar").count(), 0);
    /// ```
    #[inline]
    pub fn get_list<K: AsHeaderName>(&self, name: K) -> List<'_> {
        match self.get(name) {
            Some(value) => split_list(value),
            None => List::empty(),
        }
    }

    /// Returns an iterator over headers as name and value pair.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    fn field<K: AsHeaderName>(&self, name: &K) -> Option<&HeaderField> {
        self.position(name).map(|index| &self.fields[index])
    }

    fn position<K: AsHeaderName>(&self, name: &K) -> Option<usize> {
        let hash = name.hash();
        let name = name.as_str();
        self.fields
            .iter()
            .position(|field| field.eq_hash_and_name(hash, name))
    }
}

// ===== Mutation =====

impl HeaderMap {
    /// Append a header name and value into the map.
    ///
    /// If the name is present, the value is added as an extra value after the existing ones.
    #[inline]
    pub fn append<K: IntoHeaderName, V: Into<String>>(&mut self, name: K, value: V) {
        self.append_field(name.into_header_name(), value.into());
    }

    /// Append a value and returns the index of the field it was added to.
    pub(crate) fn append_field(&mut self, name: HeaderName, value: String) -> usize {
        self.len += 1;
        match self.position(&name) {
            Some(index) => {
                self.fields[index].push(value);
                index
            }
            None => {
                self.fields.push(HeaderField::new(name, value));
                self.fields.len() - 1
            }
        }
    }

    /// Returns the most recently added value of the field at given index.
    pub(crate) fn last_value_mut(&mut self, index: usize) -> Option<&mut String> {
        self.fields.get_mut(index).map(HeaderField::last_mut)
    }

    /// Inserts a name and value pair into the map.
    ///
    /// If the map did have this name present, all of its values are replaced, and the old first
    /// value is returned.
    ///
    /// If the map did not have this name present, [`None`] is returned.
    pub fn insert<K: IntoHeaderName, V: Into<String>>(&mut self, name: K, value: V) -> Option<String> {
        let name = name.into_header_name();
        match self.position(&name) {
            Some(index) => {
                let field = &mut self.fields[index];
                self.len -= field.len() - 1;
                Some(field.replace(value.into()))
            }
            None => {
                self.len += 1;
                self.fields.push(HeaderField::new(name, value.into()));
                None
            }
        }
    }

    /// Removes a header from the map, returning all of its values in order.
    ///
    /// Returns empty [`Vec`] if the name is absent.
    pub fn remove<K: AsHeaderName>(&mut self, name: K) -> Vec<String> {
        match self.position(&name) {
            Some(index) => {
                let field = self.fields.remove(index);
                self.len -= field.len();
                field.into_parts().1
            }
            None => Vec::new(),
        }
    }

    /// Move all fields of `other` into `self`, appending the values.
    pub fn append_map(&mut self, other: HeaderMap) {
        for field in other.fields {
            let (name, values) = field.into_parts();
            for value in values {
                self.append_field(name.clone(), value);
            }
        }
    }

    /// Clear headers map, removing all the value.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.len = 0;
    }
}

// ===== Traits =====

impl PartialEq for HeaderMap {
    /// Two maps are equal if they contain the same names, each with the same values in the same
    /// order.
    ///
    /// The order between distinct names is not significant.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .all(|field| other.field(field.name()) == Some(field))
    }
}

impl Eq for HeaderMap {}

impl std::fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: IntoHeaderName, V: Into<String>> FromIterator<(K, V)> for HeaderMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = HeaderMap::new();
        map.extend(iter);
        map
    }
}

impl<K: IntoHeaderName, V: Into<String>> Extend<(K, V)> for HeaderMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.append(name, value);
        }
    }
}

/// Create [`HeaderMap`] from `name => value` pairs.
///
/// ```rust
/// use httphead::{headers, headers::standard::COOKIE};
///
/// let map = headers! {
///     "content-type" => "text/html",
///     COOKIE => "hello=world",
///     "Cookie" => "foo=bar",
/// };
///
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.get_all(COOKIE).collect::<Vec<_>>(), ["hello=world", "foo=bar"]);
/// ```
#[macro_export]
macro_rules! headers {
    ($($name:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::headers::HeaderMap::new();
        $(map.append($name, $value);)*
        map
    }};
}

// ===== Ref Traits =====

/// A type that can be used for [`HeaderMap`] lookup.
///
/// Lookup does not allocate, the name is compared ignoring ASCII case which is equivalent to
/// comparing canonical forms.
#[allow(private_bounds)]
pub trait AsHeaderName: SealedRef { }
trait SealedRef: Sized {
    fn hash(&self) -> u32;

    fn as_str(&self) -> &str;
}

impl AsHeaderName for &str { }
impl SealedRef for &str {
    #[inline]
    fn hash(&self) -> u32 {
        matches::hash_32(self.as_bytes())
    }

    #[inline]
    fn as_str(&self) -> &str {
        self
    }
}

impl AsHeaderName for String { }
impl SealedRef for String {
    #[inline]
    fn hash(&self) -> u32 {
        matches::hash_32(self.as_bytes())
    }

    #[inline]
    fn as_str(&self) -> &str {
        self
    }
}

/// for HeaderName, hash is cached
impl AsHeaderName for HeaderName { }
impl SealedRef for HeaderName {
    #[inline]
    fn hash(&self) -> u32 {
        HeaderName::hash(self)
    }

    #[inline]
    fn as_str(&self) -> &str {
        HeaderName::as_str(self)
    }
}

// blanket implementation
impl<K: AsHeaderName> AsHeaderName for &K { }
impl<S: SealedRef> SealedRef for &S {
    #[inline]
    fn hash(&self) -> u32 {
        S::hash(self)
    }

    #[inline]
    fn as_str(&self) -> &str {
        S::as_str(self)
    }
}

// ===== Owned Traits =====

/// A type that can be used for name consuming [`HeaderMap`] operation.
#[allow(private_bounds)]
pub trait IntoHeaderName: Sealed {}
trait Sealed: Sized {
    fn into_header_name(self) -> HeaderName;
}

impl IntoHeaderName for &str {}
impl Sealed for &str {
    #[inline]
    fn into_header_name(self) -> HeaderName {
        HeaderName::new(self)
    }
}

impl IntoHeaderName for String {}
impl Sealed for String {
    #[inline]
    fn into_header_name(self) -> HeaderName {
        HeaderName::new(&self)
    }
}

impl IntoHeaderName for HeaderName {}
impl Sealed for HeaderName {
    #[inline]
    fn into_header_name(self) -> HeaderName {
        self
    }
}

impl IntoHeaderName for &HeaderName {}
impl Sealed for &HeaderName {
    #[inline]
    fn into_header_name(self) -> HeaderName {
        self.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn header_map() {
        let mut map = HeaderMap::new();

        assert!(map.get("content-type").is_none());

        map.append("content-type", "FOO");
        assert!(map.contains_key("content-type"));
        assert!(map.contains_key("Content-Type"));

        map.append("accept", "BAR");
        map.append("content-length", "LEN");
        map.append("host", "BAR");

        // Insert Multi

        map.append("Content-Length", "BAR");
        assert_eq!(map.len(), 5);
        assert_eq!(map.fields_len(), 4);

        let mut all = map.get_all("content-length");
        assert_eq!(all.next(), Some("LEN"));
        assert_eq!(all.next(), Some("BAR"));
        assert!(all.next().is_none());

        // Insert Replace

        assert_eq!(map.insert("CONTENT-LENGTH", "NEW").as_deref(), Some("LEN"));
        assert_eq!(map.get_all("content-length").collect::<Vec<_>>(), ["NEW"]);
        assert_eq!(map.len(), 4);
        assert!(map.insert("date", "NOW").is_none());
        assert_eq!(map.len(), 5);

        // Remove

        assert_eq!(map.remove("accept"), ["BAR"]);
        assert!(map.remove("accept").is_empty());
        assert!(map.contains_key("content-type"));
        assert!(map.contains_key("host"));
        assert_eq!(map.len(), 4);

        // Clear

        map.clear();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert!(!map.contains_key("content-type"));
        assert!(!map.contains_key("host"));
    }
}
