//! A compile-time-composed, in-memory table with heterogeneous secondary indices.
//!
//! # Table
//!
//! A [`Table`] owns a collection of records of a single user-defined type `R` plus a
//! fixed set of secondary indices chosen when the table is built. Unlike a single sorted or
//! hashed collection, a `Table` lets several independent views of the same records coexist:
//! one index might order records by name, another by a computed length, a third by a
//! full-text n-gram index over a text field — all kept consistent on every insert and erase.
//!
//! # Views
//!
//! An index is keyed by a *view*: a small value type the user derives from a record via the
//! [`View`] trait. The same view type doubles as the query type passed to [`Table::equal`] —
//! construct the view value you're searching for and hand it to `equal`.
//!
//! - [`indices::NonUniqueSorted`] keeps records ordered by view, admitting duplicates.
//! - [`indices::UniqueSorted`] keeps records ordered by view, rejecting a second record with
//!   an equal view.
//! - [`indices::UniqueHashed`] hashes by view, rejecting duplicates, with no natural order
//!   (so [`Range::descending`] on it panics).
//! - [`fulltext::FullTextIndex`] tokenises a record's text (via [`TextOf`]) into fixed-width
//!   n-grams and answers substring queries through [`Table::find_all`] rather than through
//!   the `equal`/`all` dispatch the other three kinds share.
//!
//! # Stable identity
//!
//! Records are addressed by [`Handle`], a small `Copy` value stable for as long as the
//! record it names remains in the table. Handles are allocated from a generational
//! [`Arena`], so a handle to an erased-and-reused slot is detectably stale rather than
//! silently resolving to the wrong record.
//!
//! # Errors
//!
//! `Table::emplace`/`erase` report failure as plain values (`None`/`false`), matching an
//! "errors are values" policy at the core API; [`Table::try_emplace`]/[`try_erase`] wrap the
//! same operations behind [`TableError`] for callers who'd rather use `?`.

#![warn(
    missing_debug_implementations,
    unsafe_code,
    bare_trait_objects,
    missing_docs
)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    // Next `cast_*` lints don't give alternatives.
    clippy::cast_possible_wrap, clippy::cast_possible_truncation, clippy::cast_sign_loss,
    // Next lints produce too much noise/false positives.
    clippy::module_name_repetitions, clippy::similar_names, clippy::must_use_candidate,
    // Too much work to fix.
    clippy::missing_errors_doc, clippy::missing_const_for_fn, clippy::missing_panics_doc,
)]

pub mod arena;
pub mod error;
pub mod fulltext;
pub mod indices;
pub mod ngram;
pub mod range;
pub mod table;
pub mod view;

pub use self::{
    arena::{Arena, Handle},
    error::TableError,
    fulltext::FullTextIndex,
    indices::{FullTextQuery, IndexCapability, NonUniqueSorted, UniqueHashed, UniqueSorted, ViewQuery},
    ngram::{generate_count, ngrams, search_count, Ngrams},
    range::Range,
    table::Table,
    view::{TextOf, View, WholeRecord},
};
