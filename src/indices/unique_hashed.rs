//! A unique hashed index: a hash map from view to a single handle, rejecting a second handle
//! with an equal view. Unlike the two sorted kinds, this index has no natural order, so it
//! cannot serve a [`crate::range::Range::descending`] query.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::arena::{Arena, Handle};
use crate::indices::capability::{IndexCapability, ViewQuery};
use crate::view::View;

#[derive(Debug)]
pub struct UniqueHashed<R, V> {
    entries: HashMap<V, Handle>,
    _record: PhantomData<fn(&R)>,
}

impl<R, V> Default for UniqueHashed<R, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            _record: PhantomData,
        }
    }
}

impl<R, V> UniqueHashed<R, V> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R, V> IndexCapability<R> for UniqueHashed<R, V>
where
    V: View<R> + Hash + Eq + Clone + 'static,
{
    fn try_insert(&mut self, arena: &Arena<R>, handle: Handle) -> bool {
        let record = arena.get(handle).expect("handle must be live on insert");
        let view = V::of(record);
        match self.entries.entry(view) {
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(handle);
                true
            }
            std::collections::hash_map::Entry::Occupied(_) => false,
        }
    }

    fn remove(&mut self, arena: &Arena<R>, handle: Handle) {
        let record = arena.get(handle).expect("handle must be live on remove");
        let view = V::of(record);
        self.entries.remove(&view);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn as_view_query(&self) -> Option<&dyn ViewQuery<R>> {
        Some(self)
    }
}

impl<R, V> ViewQuery<R> for UniqueHashed<R, V>
where
    V: View<R> + Hash + Eq + Clone + 'static,
{
    fn view_type_id(&self) -> TypeId {
        TypeId::of::<V>()
    }

    fn all_handles(&self) -> Vec<Handle> {
        self.entries.values().copied().collect()
    }

    fn equal_handles(&self, query: &dyn Any) -> Vec<Handle> {
        let view = query
            .downcast_ref::<V>()
            .expect("equal_handles called with the wrong query type");
        self.entries.get(view).copied().into_iter().collect()
    }

    fn reversible(&self) -> bool {
        false
    }
}
