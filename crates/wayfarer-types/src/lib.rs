//! Shared domain types for Wayfarer.
//!
//! This crate contains the core domain types used across the Wayfarer
//! backend: conversation turns, trips, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod error;
pub mod llm;
pub mod trip;
