//! The owning container: a record arena plus the heterogeneous index list.

use std::any::{Any, TypeId};
use std::collections::BTreeSet;

use crate::arena::{Arena, Handle};
use crate::error::TableError;
use crate::indices::{FullTextQuery, IndexCapability, ViewQuery};
use crate::range::Range;

/// A record collection with an arbitrary number of secondary indices, each projecting a
/// record to a view value via a user-supplied [`crate::view::View`] or
/// [`crate::view::TextOf`] implementation.
///
/// Indices are registered once, in `Table::new`, and keep step with `emplace`/`erase` for
/// the table's lifetime; there is no way to add or drop an index afterward.
pub struct Table<R> {
    arena: Arena<R>,
    indices: Vec<Box<dyn IndexCapability<R>>>,
}

impl<R> Table<R> {
    /// Builds a table over the given indices, in the order they should be consulted on
    /// insert (and unwound in reverse on a rejected insert).
    pub fn new(indices: Vec<Box<dyn IndexCapability<R>>>) -> Self {
        Self {
            arena: Arena::new(),
            indices,
        }
    }

    /// Inserts `record`, returning its handle, or `None` if a unique index already holds an
    /// equal view — in which case the table is left exactly as it was before the call.
    pub fn emplace(&mut self, record: R) -> Option<Handle> {
        let handle = self.arena.insert(record);

        for (accepted, index) in self.indices.iter_mut().enumerate() {
            if index.try_insert(&self.arena, handle) {
                continue;
            }
            for index in self.indices[..accepted].iter_mut() {
                index.remove(&self.arena, handle);
            }
            self.arena.remove(handle);
            return None;
        }

        Some(handle)
    }

    /// `Result`-returning wrapper around [`emplace`](Self::emplace).
    pub fn try_emplace(&mut self, record: R) -> Result<Handle, TableError> {
        self.emplace(record).ok_or(TableError::Rejected)
    }

    /// Removes the record named by `handle` from every index and frees its slot. Returns
    /// `false` if `handle` did not name a live record.
    pub fn erase(&mut self, handle: Handle) -> bool {
        if !self.arena.contains(handle) {
            return false;
        }
        for index in &mut self.indices {
            index.remove(&self.arena, handle);
        }
        self.arena.remove(handle);
        true
    }

    /// `Result`-returning wrapper around [`erase`](Self::erase).
    pub fn try_erase(&mut self, handle: Handle) -> Result<(), TableError> {
        if self.erase(handle) {
            Ok(())
        } else {
            Err(TableError::NotFound)
        }
    }

    /// Returns a reference to the record named by `handle`, or `None` if it has since been
    /// erased.
    pub fn get(&self, handle: Handle) -> Option<&R> {
        self.arena.get(handle)
    }

    /// Number of live records.
    pub fn size(&self) -> usize {
        self.arena.len()
    }

    /// Number of live records, as counted by the index serving view type `Q`.
    pub fn size_of<Q: 'static>(&self) -> usize {
        self.view_index::<Q>().len()
    }

    /// Every live record, in arena (insertion slot) order.
    pub fn all(&self) -> Range<'_, R> {
        Range::new(&self.arena, self.arena.handles().collect(), false)
    }

    /// Every live record, in the natural order of the index serving view type `Q`.
    pub fn all_by<Q: 'static>(&self) -> Range<'_, R> {
        let index = self.view_index::<Q>();
        let view = index.as_view_query().expect("matched by view_type_id above");
        Range::new(&self.arena, view.all_handles(), view.reversible())
    }

    /// Every live record whose view of type `Q` compares equal to `query`.
    pub fn equal<Q: 'static>(&self, query: &Q) -> Range<'_, R> {
        let index = self.view_index::<Q>();
        let view = index.as_view_query().expect("matched by view_type_id above");
        let handles = view.equal_handles(query as &dyn Any);
        Range::new(&self.arena, handles, view.reversible())
    }

    /// Every `(handle, position)` pair at which `query` occurs in a full-text index's
    /// indexed text.
    ///
    /// # Panics
    ///
    /// Panics if no index in this table is a full-text kind.
    pub fn find_all(&self, query: &[u8]) -> BTreeSet<(Handle, u32)> {
        self.full_text_index()
            .as_full_text()
            .expect("matched by as_full_text above")
            .find_all(query)
    }

    /// Number of distinct n-grams known to the full-text index, or `None` if this table has
    /// no full-text index.
    pub fn ngram_count(&self) -> Option<usize> {
        self.try_full_text_index()
            .map(|index| index.as_full_text().expect("matched by as_full_text above").ngram_count())
    }

    /// Total postings stored across the full-text index's buckets, or `None` if this table
    /// has no full-text index.
    pub fn posting_count(&self) -> Option<usize> {
        self.try_full_text_index().map(IndexCapability::len)
    }

    fn view_index<Q: 'static>(&self) -> &dyn IndexCapability<R> {
        self.indices
            .iter()
            .map(Box::as_ref)
            .find(|index| {
                index
                    .as_view_query()
                    .is_some_and(|view| view.view_type_id() == TypeId::of::<Q>())
            })
            .unwrap_or_else(|| {
                panic!(
                    "no index serves queries of type {}",
                    std::any::type_name::<Q>()
                )
            })
    }

    fn try_full_text_index(&self) -> Option<&dyn IndexCapability<R>> {
        self.indices
            .iter()
            .map(Box::as_ref)
            .find(|index| index.as_full_text().is_some())
    }

    fn full_text_index(&self) -> &dyn IndexCapability<R> {
        self.try_full_text_index()
            .unwrap_or_else(|| panic!("no full-text index registered on this table"))
    }
}
