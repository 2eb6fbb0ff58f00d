//! A non-unique sorted index: an ordered set of handles keyed by `(view, slot)`, admitting
//! duplicate views.

use std::any::{Any, TypeId};
use std::collections::BTreeSet;
use std::marker::PhantomData;

use crate::arena::{Arena, Handle};
use crate::indices::capability::{IndexCapability, ViewQuery};
use crate::view::View;

/// Ordered by `(V, slot(handle))`; the entry tuple itself *is* the comparison key, so no
/// separate transparent comparator is needed the way the original's C++ storage traits
/// require one.
#[derive(Debug)]
pub struct NonUniqueSorted<R, V> {
    entries: BTreeSet<(V, Handle)>,
    _record: PhantomData<fn(&R)>,
}

impl<R, V> Default for NonUniqueSorted<R, V> {
    fn default() -> Self {
        Self {
            entries: BTreeSet::new(),
            _record: PhantomData,
        }
    }
}

impl<R, V> NonUniqueSorted<R, V> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R, V> IndexCapability<R> for NonUniqueSorted<R, V>
where
    V: View<R> + Ord + Clone + 'static,
{
    fn try_insert(&mut self, arena: &Arena<R>, handle: Handle) -> bool {
        let record = arena.get(handle).expect("handle must be live on insert");
        let view = V::of(record);
        self.entries.insert((view, handle));
        true
    }

    fn remove(&mut self, arena: &Arena<R>, handle: Handle) {
        let record = arena.get(handle).expect("handle must be live on remove");
        let view = V::of(record);
        self.entries.remove(&(view, handle));
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn as_view_query(&self) -> Option<&dyn ViewQuery<R>> {
        Some(self)
    }
}

impl<R, V> ViewQuery<R> for NonUniqueSorted<R, V>
where
    V: View<R> + Ord + Clone + 'static,
{
    fn view_type_id(&self) -> TypeId {
        TypeId::of::<V>()
    }

    fn all_handles(&self) -> Vec<Handle> {
        self.entries.iter().map(|(_, h)| *h).collect()
    }

    fn equal_handles(&self, query: &dyn Any) -> Vec<Handle> {
        let view = query
            .downcast_ref::<V>()
            .expect("equal_handles called with the wrong query type");
        self.entries
            .range((view.clone(), Handle::MIN)..=(view.clone(), Handle::MAX))
            .map(|(_, h)| *h)
            .collect()
    }

    fn reversible(&self) -> bool {
        true
    }
}
