//! # rollo-core
//!
//! Roll decision logic: given an upstream and a downstream manifest,
//! decide for a named entry (or every known entry) whether the downstream
//! pin is stale, and produce the advisory command line that would update
//! it.
//!
//! ## Example
//!
//! ```rust
//! use rollo_core::{roll_entry, RollOutcome};
//! use rollo_manifest::parse;
//!
//! # fn example() -> anyhow::Result<()> {
//! let upstream = parse("deps = { 'src/third_party/x': 'https://example/x@def' }")?;
//! let downstream = parse(
//!     "vars = { 'v8_revision': 'abc' }\n\
//!      deps = { 'third_party/x': 'https://example/x@abc' }",
//! )?;
//!
//! match roll_entry(&upstream, &downstream, "v8_revision") {
//!     Ok(RollOutcome::Action(command)) => println!("{}", command),
//!     Ok(RollOutcome::UpToDate) => println!("Revisions are the same."),
//!     Err(err) => eprintln!("{}", err),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod entries;
pub mod error;
pub mod resolver;
pub mod roll;

pub use entries::{ALL_ENTRIES, UNSUPPORTED_ENTRIES};
pub use error::{Result, RollError};
pub use resolver::find_path_for_revision;
pub use roll::{roll_all, roll_entry, RollOutcome};
