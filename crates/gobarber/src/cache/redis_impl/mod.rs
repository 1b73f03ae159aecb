//! Redis cache backend implementation.
//!
//! Shared cache for multi-instance deployments, with connection pooling,
//! TTL and prefix invalidation.

mod cache;
mod error;

pub use cache::RedisCache;
