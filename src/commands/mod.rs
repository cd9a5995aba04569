//! Command implementations for the shard validator CLI

pub mod validate;
