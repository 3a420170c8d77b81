//! # registry-store
//!
//! The user record store: the only shared mutable state in the registry.
//!
//! - `store`: the [`UserStore`] trait consumed by the session authority and
//!   the HTTP layer
//! - `memory`: [`MemoryUserStore`], a `RwLock`-guarded in-memory collection

pub mod memory;
pub mod store;

pub use memory::MemoryUserStore;
pub use store::UserStore;
