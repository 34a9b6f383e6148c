use super::{HeaderField, HeaderMap, HeaderName, field::GetAll};

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a HeaderName, &'a str);

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned from [`HeaderMap::iter`].
///
/// Yields every value paired with its name. Names come in insertion order, values of one name
/// come in the order they were added.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    fields: std::slice::Iter<'a, HeaderField>,
    values: Option<(&'a HeaderName, GetAll<'a>)>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(map: &'a HeaderMap) -> Self {
        Self {
            fields: map.fields().iter(),
            values: None,
            remaining: map.len(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a HeaderName, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((name, values)) = &mut self.values
                && let Some(value) = values.next()
            {
                self.remaining -= 1;
                return Some((*name, value));
            }

            let field = self.fields.next()?;
            self.values = Some((field.name(), field.iter()));
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl std::iter::FusedIterator for Iter<'_> {}
