//! # registry-entity
//!
//! Domain entity models for the member registry.

pub mod user;

pub use user::{NewUser, UserPatch, UserRecord};
