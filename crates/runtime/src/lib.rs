//! Runtime ownership of loaded content packs.
//!
//! This crate wires the patch-content loaders to a live, atomically replaced
//! snapshot. Consumers hold a [`ContentStore`] and query tokens and metadata
//! overrides against whatever snapshot is current; [`PatchRuntime`] rebuilds
//! and republishes it on reload.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the loader/publisher
//! - [`store`] and [`snapshot`] are the read side shared with consumers
//! - [`config`] resolves where content lives
pub mod config;
pub mod error;
pub mod runtime;
pub mod snapshot;
pub mod store;

pub use config::{RuntimeConfig, default_data_dir};
pub use error::{Result, RuntimeError};
pub use runtime::PatchRuntime;
pub use snapshot::ContentSnapshot;
pub use store::ContentStore;
