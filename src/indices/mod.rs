//! Concrete index storage kinds and the capability traits [`crate::table::Table`] drives
//! them through.

pub mod capability;
pub mod non_unique_sorted;
pub mod unique_hashed;
pub mod unique_sorted;

pub use capability::{FullTextQuery, IndexCapability, ViewQuery};
pub use non_unique_sorted::NonUniqueSorted;
pub use unique_hashed::UniqueHashed;
pub use unique_sorted::UniqueSorted;
