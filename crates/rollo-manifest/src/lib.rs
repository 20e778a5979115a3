//! # rollo-manifest
//!
//! Parsing for DEPS-style dependency manifests and revision extraction.
//!
//! A manifest is a locally-authored declarative text defining two
//! dict-like bindings: `vars` (variable name to string value) and `deps`
//! (dependency path to dependency specification). This crate provides:
//! - An explicit lexer + recursive-descent parser for the dialect,
//!   including the `Str(..)` and `Var(..)` helper calls
//! - A polymorphic [`Value`] model over the parsed literals
//! - [`extract_revision`] for deriving the comparable revision token from
//!   a dependency specification
//!
//! ## Example
//!
//! ```rust
//! use rollo_manifest::{parse, extract_revision};
//!
//! # fn example() -> rollo_manifest::Result<()> {
//! let manifest = parse(
//!     "vars = { 'x_revision': 'abc' }\n\
//!      deps = { 'third_party/x': 'https://example/x.git' + '@' + Var('x_revision') }",
//! )?;
//!
//! assert_eq!(manifest.var("x_revision"), Some("abc"));
//! let spec = manifest.dep("third_party/x").unwrap();
//! assert_eq!(extract_revision(spec).as_deref(), Some("abc"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod lexer;
pub mod parser;
pub mod revision;
pub mod value;

pub use error::{Error, Result};
pub use parser::parse;
pub use revision::extract_revision;
pub use value::{Manifest, Value};
