//! Keyset cursor pagination: cursor codec, query planner, page assembler and
//! the service tying them to a [`store::RecordStore`].

pub mod cursor;
pub mod errors;
pub mod page;
pub mod planner;
pub mod service;
pub mod store;
