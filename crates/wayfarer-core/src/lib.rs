//! Business logic and repository trait definitions for Wayfarer.
//!
//! This crate defines the "ports" (repository/store/provider traits) that
//! the infrastructure layer implements. It depends only on
//! `wayfarer-types` -- never on `wayfarer-infra` or any database/IO crate.

pub mod chat;
pub mod llm;
pub mod trip;
