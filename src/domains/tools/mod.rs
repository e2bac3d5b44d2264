//! Tools domain module.
//!
//! Tools are the two web capabilities the gateway exposes to the chatbot.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Static catalog and dispatch by tool name
//! - `model.rs` - Descriptors, invocations and the outcome envelope
//! - `error.rs` - Tool-specific error types

pub mod definitions;
mod error;
mod model;
mod registry;

pub use error::ToolError;
pub use model::{ToolDescriptor, ToolInvocation, ToolOutcome, now};
pub use registry::ToolRegistry;
pub(crate) use registry::log_failure;
