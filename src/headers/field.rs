use super::HeaderName;

/// Header Field.
///
/// Contains [`HeaderName`] and one or more values, in the order they were added.
#[derive(Clone, PartialEq, Eq)]
pub struct HeaderField {
    name: HeaderName,
    value: String,
    extra: Vec<String>,
}

impl HeaderField {
    pub(crate) const fn new(name: HeaderName, value: String) -> Self {
        Self {
            name,
            value,
            extra: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn eq_hash_and_name(&self, hash: u32, name: &str) -> bool {
        self.name.hash() == hash && self.name.eq_ignore_ascii_case(name)
    }

    /// Returns reference to [`HeaderName`].
    #[inline]
    pub const fn name(&self) -> &HeaderName {
        &self.name
    }

    /// Returns the first value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the number of values.
    ///
    /// This function will returns at least `1`.
    #[inline]
    #[allow(
        clippy::len_without_is_empty,
        reason = "Field always have at least 1 value"
    )]
    pub fn len(&self) -> usize {
        1 + self.extra.len()
    }

    /// Returns an iterator over values.
    #[inline]
    pub fn iter(&self) -> GetAll<'_> {
        GetAll::new(self)
    }

    /// Push value with duplicate header name.
    pub(crate) fn push(&mut self, value: String) {
        self.extra.push(value);
    }

    /// Returns mutable reference to the most recently pushed value.
    pub(crate) fn last_mut(&mut self) -> &mut String {
        match self.extra.last_mut() {
            Some(last) => last,
            None => &mut self.value,
        }
    }

    /// Replace all values with a single value, returning the previous first value.
    pub(crate) fn replace(&mut self, value: String) -> String {
        self.extra.clear();
        std::mem::replace(&mut self.value, value)
    }

    /// Consume [`HeaderField`] into [`HeaderName`] and all of its values.
    pub fn into_parts(self) -> (HeaderName, Vec<String>) {
        let mut values = Vec::with_capacity(1 + self.extra.len());
        values.push(self.value);
        values.extend(self.extra);
        (self.name, values)
    }
}

impl std::fmt::Debug for HeaderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderField")
            .field("name", &self.name)
            .field("values", &GetAll::new(self))
            .finish()
    }
}

// ===== Iterator =====

impl<'a> IntoIterator for &'a HeaderField {
    type Item = &'a str;

    type IntoIter = GetAll<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        GetAll::new(self)
    }
}

/// Iterator returned from [`HeaderMap::get_all`][super::HeaderMap::get_all].
#[derive(Clone)]
pub struct GetAll<'a> {
    first: Option<&'a str>,
    extra: std::slice::Iter<'a, String>,
}

impl<'a> GetAll<'a> {
    pub(crate) fn new(field: &'a HeaderField) -> Self {
        Self {
            first: Some(field.value.as_str()),
            extra: field.extra.iter(),
        }
    }

    pub(crate) fn empty() -> Self {
        let extra: &[String] = &[];
        Self {
            first: None,
            extra: extra.iter(),
        }
    }
}

impl<'a> Iterator for GetAll<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self.first.take() {
            Some(first) => Some(first),
            None => self.extra.next().map(String::as_str),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.first.is_some() as usize + self.extra.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for GetAll<'_> {}

impl std::fmt::Debug for GetAll<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
