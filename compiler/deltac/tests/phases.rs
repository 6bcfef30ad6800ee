// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests of the Delta front end.
//!
//! # Organization
//!
//! - `lex/` - Files lexed through a [`deltac::Session`]
//! - `notebooks/` - `load` nesting across files
//! - `cli/` - The `delta` binary itself
//! - `common/` - Shared test utilities
//!
//! ```bash
//! cargo test -p deltac --test phases
//! ```

#[path = "phases/common/mod.rs"]
mod common;

#[path = "phases/lex.rs"]
mod lex;

#[path = "phases/notebooks.rs"]
mod notebooks;

#[path = "phases/cli.rs"]
mod cli;
