//! Blockfall (workspace facade crate).
//!
//! This package keeps the `blockfall::{core,session,types}` public API in one
//! place while the implementation lives in dedicated crates under `crates/`.

pub use blockfall_core as core;
pub use blockfall_session as session;
pub use blockfall_types as types;
