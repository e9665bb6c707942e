//! Core member metadata and configuration for nullguard.
//!
//! This crate provides the foundational data structures used across all nullguard crates:
//! - [`types`] — Member and parameter descriptors extracted by the interception host
//! - [`categories`] — The [`ValidationCategories`](categories::ValidationCategories) bitset
//! - [`config`] — Configuration loading from `.nullguard/nullguard.json`
//! - [`hash`] — Deterministic member identity hashing (base62 of xxhash64)

pub mod categories;
pub mod config;
pub mod hash;
pub mod types;

pub use categories::{ValidationCategories, ValidationCategory};
pub use config::{GuardConfig, OutParameterPolicy};
pub use types::{
    MemberDescriptor, MemberId, MemberKind, ParameterDescriptor, ParameterDirection, Visibility,
};
