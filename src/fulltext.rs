//! The n-gram inverted index powering substring search.
//!
//! A map from a fixed-width byte window to the sorted set of `(handle, position)` pairs at
//! which it occurs. `find_all` intersects the posting sets of every n-gram in the query,
//! using relative offsets within the query to align candidates to a single starting
//! position rather than merely testing "these n-grams co-occur somewhere".

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::marker::PhantomData;

use crate::arena::{Arena, Handle};
use crate::indices::capability::{FullTextQuery, IndexCapability};
use crate::ngram::ngrams;
use crate::view::TextOf;

struct PlanEntry<'a, const N: usize> {
    offset: u32,
    postings: &'a BTreeSet<(Handle, u32)>,
}

/// An n-gram inverted index over the text `Extractor` derives from each record.
#[derive(Debug)]
pub struct FullTextIndex<R, Extractor, const N: usize> {
    buckets: BTreeMap<[u8; N], BTreeSet<(Handle, u32)>>,
    total_postings: usize,
    _record: PhantomData<fn(&R)>,
    _extractor: PhantomData<fn() -> Extractor>,
}

impl<R, Extractor, const N: usize> Default for FullTextIndex<R, Extractor, N> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
            total_postings: 0,
            _record: PhantomData,
            _extractor: PhantomData,
        }
    }
}

impl<R, Extractor, const N: usize> FullTextIndex<R, Extractor, N> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    fn emplace(&mut self, text: &[u8], handle: Handle) {
        for (gram, position) in ngrams::<N>(text) {
            if self.buckets.entry(gram).or_default().insert((handle, position)) {
                self.total_postings += 1;
            }
        }
    }

    /// Removes every posting `handle` contributed for `text`. A bucket with no n-gram
    /// overlapping `handle`'s text is simply skipped rather than treated as a contract
    /// violation, since per-n-gram state isn't something callers are expected to track.
    fn remove_text(&mut self, text: &[u8], handle: Handle) {
        for (gram, position) in ngrams::<N>(text) {
            if let Some(postings) = self.buckets.get_mut(&gram) {
                if postings.remove(&(handle, position)) {
                    self.total_postings -= 1;
                }
                if postings.is_empty() {
                    self.buckets.remove(&gram);
                }
            }
        }
    }
}

impl<R, Extractor, const N: usize> IndexCapability<R> for FullTextIndex<R, Extractor, N>
where
    Extractor: TextOf<R>,
{
    fn try_insert(&mut self, arena: &Arena<R>, handle: Handle) -> bool {
        let record = arena.get(handle).expect("handle must be live on insert");
        self.emplace(Extractor::text_of(record), handle);
        true
    }

    fn remove(&mut self, arena: &Arena<R>, handle: Handle) {
        let record = arena.get(handle).expect("handle must be live on remove");
        self.remove_text(Extractor::text_of(record), handle);
    }

    fn len(&self) -> usize {
        self.total_postings
    }

    fn as_full_text(&self) -> Option<&dyn FullTextQuery<R>> {
        Some(self)
    }
}

impl<R, Extractor, const N: usize> FullTextQuery<R> for FullTextIndex<R, Extractor, N>
where
    Extractor: TextOf<R>,
{
    /// Positions returned are the start of the match within the indexed text, i.e. where
    /// `query`'s first byte aligns.
    fn find_all(&self, query: &[u8]) -> BTreeSet<(Handle, u32)> {
        if query.len() < N {
            return BTreeSet::new();
        }

        let mut plan = Vec::new();
        for (gram, offset) in ngrams::<N>(query) {
            match self.buckets.get(&gram) {
                Some(postings) if !postings.is_empty() => plan.push(PlanEntry { offset, postings }),
                _ => return BTreeSet::new(),
            }
        }
        plan.sort_by_key(|entry| entry.postings.len());

        if plan.len() == 1 {
            let only = &plan[0];
            return only
                .postings
                .iter()
                .filter_map(|&(handle, position)| {
                    position.checked_sub(only.offset).map(|start| (handle, start))
                })
                .collect();
        }

        let (small, large) = (&plan[0], &plan[1]);
        let mut candidates: BTreeSet<(Handle, u32)> = small
            .postings
            .iter()
            .filter_map(|&(handle, position)| {
                let start = position.checked_sub(small.offset)?;
                let probe = start.checked_add(large.offset)?;
                large.postings.contains(&(handle, probe)).then_some((handle, start))
            })
            .collect();

        for entry in &plan[2..] {
            if candidates.is_empty() {
                break;
            }
            candidates = if candidates.len() <= entry.postings.len() {
                candidates
                    .into_iter()
                    .filter(|&(handle, start)| {
                        start
                            .checked_add(entry.offset)
                            .is_some_and(|probe| entry.postings.contains(&(handle, probe)))
                    })
                    .collect()
            } else {
                entry
                    .postings
                    .iter()
                    .filter_map(|&(handle, position)| {
                        let start = position.checked_sub(entry.offset)?;
                        candidates.contains(&(handle, start)).then_some((handle, start))
                    })
                    .collect()
            };
        }

        candidates
    }

    fn ngram_count(&self) -> usize {
        self.buckets.len()
    }
}
