//! Domain Layer
//!
//! The innermost layer with zero infrastructure dependencies. It defines the
//! platform-neutral (canonical) order schema that every broker adapter
//! translates from.
//!
//! # Bounded Contexts
//!
//! - [`order`]: canonical order requests, lookup enumerations, numeric coercion

pub mod order;
