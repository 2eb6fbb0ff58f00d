//! The object-safe traits every index kind implements, letting [`crate::table::Table`] hold
//! a heterogeneous `Vec<Box<dyn IndexCapability<R>>>` and dispatch queries by the view
//! type's [`TypeId`](std::any::TypeId) rather than by a compile-time tuple position.
//!
//! This is the redesign's answer to the original's template-metaprogrammed heterogeneous
//! index list: a dynamic list behind a capability trait, tagged by a runtime discriminator,
//! trading one virtual call per query for a crate that doesn't need variadic generics.

use std::any::{Any, TypeId};
use std::collections::BTreeSet;

use crate::arena::{Arena, Handle};

/// Operations every index kind supports, independent of its view type.
///
/// Implemented by every concrete index struct so [`crate::table::Table::emplace`] and
/// [`crate::table::Table::erase`] can drive insertion/removal and rollback without knowing
/// which view type or storage discipline a given index uses.
pub trait IndexCapability<R> {
    /// Attempts to insert `handle` (already live in `arena`) into this index.
    ///
    /// Returns `false` if a unique index already holds an equal view for a different
    /// handle; the caller is responsible for rolling back indices that already accepted the
    /// handle. Always returns `true` for non-unique and full-text kinds.
    fn try_insert(&mut self, arena: &Arena<R>, handle: Handle) -> bool;

    /// Removes `handle` from this index. A no-op if the handle isn't present.
    ///
    /// `arena` must still resolve `handle` to a live record — `Table::erase` removes from
    /// every index before freeing the arena slot, so the view (or full-text extractor) can
    /// be recomputed from the record one last time.
    fn remove(&mut self, arena: &Arena<R>, handle: Handle);

    /// Number of entries this index currently holds: handles for a view-keyed index, total
    /// postings for the full-text index. Backs both `Table::size_of` and
    /// `Table::posting_count`, so a view-keyed index's count lives in exactly one place.
    fn len(&self) -> usize;

    /// Returns this index as a [`ViewQuery`] if it serves `all`/`equal`/`size` dispatch
    /// (every kind except full-text).
    fn as_view_query(&self) -> Option<&dyn ViewQuery<R>> {
        None
    }

    /// Returns this index as a [`FullTextQuery`] if it is the full-text kind.
    fn as_full_text(&self) -> Option<&dyn FullTextQuery<R>> {
        None
    }
}

/// The type-tagged query surface for the three view-keyed index kinds (non-unique sorted,
/// unique sorted, unique hashed).
///
/// `Table::all::<Q>()`/`equal::<Q>()`/`size_of::<Q>()` scan the index list for the first index
/// whose [`view_type_id`](ViewQuery::view_type_id) equals `TypeId::of::<Q>()`; `size_of`
/// then reads the count off the matching [`IndexCapability::len`] rather than a second method
/// here.
pub trait ViewQuery<R> {
    /// The `TypeId` of this index's view type.
    fn view_type_id(&self) -> TypeId;

    /// Every handle this index holds, in this index's natural order (ascending for sorted
    /// kinds, arbitrary for the hashed kind).
    fn all_handles(&self) -> Vec<Handle>;

    /// Every handle whose view compares equal to `query`, in natural order.
    ///
    /// `query` is downcast internally to this index's view type; the caller (`Table`) only
    /// invokes this after matching [`view_type_id`](ViewQuery::view_type_id), so the
    /// downcast always succeeds.
    fn equal_handles(&self, query: &dyn Any) -> Vec<Handle>;

    /// Whether [`crate::range::Range::descending`] may reverse this index's natural order
    /// (`true` for the two sorted kinds, `false` for the hashed kind).
    fn reversible(&self) -> bool;
}

/// The dedicated query surface for the full-text index kind, exposed separately from
/// [`ViewQuery`] because substring search returns positional postings rather than a simple
/// handle range.
pub trait FullTextQuery<R> {
    /// All `(handle, position)` pairs at which `query` occurs in an indexed record's text.
    fn find_all(&self, query: &[u8]) -> BTreeSet<(Handle, u32)>;

    /// Number of distinct n-grams currently known.
    fn ngram_count(&self) -> usize;
}
