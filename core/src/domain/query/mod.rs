//! Collection query shaping: sort expression translation, multi-key ordering
//! and page slicing over an already filtered sequence.

pub mod errors;
pub mod ordering;
pub mod paged_list;
pub mod property_mapping;
pub mod resource_parameters;
pub mod sort;
