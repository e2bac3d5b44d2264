//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the tool catalog, argument validation and dispatch
//! - **delegate**: the external search/fetch capability tools forward to

pub mod delegate;
pub mod tools;
