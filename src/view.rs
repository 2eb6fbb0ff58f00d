//! Projections of a record used as index keys, and the text extractor used by full-text
//! indices.

/// A projection of a record `R`, used as the key of one index.
///
/// Implement this for whatever small value type represents what an index should be keyed
/// by — a wrapped string, a character count, a "contains the byte `'a'`" predicate. The
/// same type doubles as the query type passed to [`crate::table::Table::equal`]: construct
/// a [`View`] value representing what you're searching for and hand it to `equal`.
pub trait View<R> {
    /// Derives this view from a record reference.
    fn of(record: &R) -> Self;
}

/// Extracts the byte text a full-text index should tokenise for a given record.
///
/// Implement this when a record's indexed text isn't simply `record.as_ref()` — for example
/// when only one field of a struct should be searchable.
pub trait TextOf<R> {
    /// Returns the bytes to index for `record`.
    fn text_of(record: &R) -> &[u8];
}

/// The default full-text extractor: treats the whole record as a byte string.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeRecord;

impl<R> TextOf<R> for WholeRecord
where
    R: AsRef<[u8]>,
{
    fn text_of(record: &R) -> &[u8] {
        record.as_ref()
    }
}
