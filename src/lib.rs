//! Calculator
//!
//! Two integer operations, `add` and `sub`, over dynamically typed
//! operands, plus the small demonstration program built on them.
//!
//! # Overview
//!
//! This library provides:
//! - [`add`] at the crate root and [`subtract::sub`] in its own module
//! - [`Operand`], the value type both operations accept
//! - [`suppress`], which discards one kind of error and propagates the rest
//! - [`catalog`], the table of exported functions and their docs
//!
//! # Example
//!
//! ```
//! use calculator::{add, subtract::sub, suppress, ErrorKind};
//!
//! assert_eq!(add(41, 1).unwrap(), 42);
//! assert_eq!(sub(43, 1).unwrap(), 42);
//!
//! // Text is never coerced to a number
//! let skipped = suppress(ErrorKind::TypeMismatch, || Ok(sub(43, "1")?)).unwrap();
//! assert!(skipped.is_none());
//! ```

// Enforce documentation and other quality attributes
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are too strict
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod catalog;
pub mod config;
pub mod demo;
pub mod error;
pub mod operand;
pub mod ops;
pub mod subtract;
pub mod suppress;

// Re-export commonly used types at the crate root
pub use error::{CalcError, Error, ErrorKind, Result};
pub use operand::Operand;
pub use ops::{BinaryOp, add};
pub use suppress::suppress;
