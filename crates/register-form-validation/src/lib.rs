//! Register-Form-Validation Core
//!
//! Pure validation functions for the registration form, compatible with both
//! std and no_std environments. The form controller and the WASM bindings both
//! call into this crate so a value is judged the same way everywhere.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod confirm;
pub mod name;
pub mod password;

// Re-export all validators
pub use confirm::*;
pub use name::*;
pub use password::*;
