// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the gallery domain and its adapters.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (`app`, `ui`) composes both

pub mod port;
