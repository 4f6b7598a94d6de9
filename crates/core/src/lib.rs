//! Core domain for the pressroom publishing backend: the legacy export
//! model, the target schema, and the transactional bulk import engine.

pub mod entities;
pub mod legacy;
pub mod migrate;
pub mod store;
