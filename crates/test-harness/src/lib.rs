//! Test harness for scripted body-scaling sessions.
//!
//! # Key Components
//!
//! - [`SessionDriver`] — Fluent API driving a session through the real dispatch path
//! - [`helpers`] — Error type and glTF humanoid fixtures
//! - [`assertions`] — Scale and snapshot assertions with diagnostics

pub mod assertions;
pub mod helpers;
pub mod workflow;

pub use helpers::HarnessError;
pub use workflow::SessionDriver;
