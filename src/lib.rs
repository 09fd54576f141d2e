//! # tasklist
//!
//! Single-user to-do list manager: create, prioritize, schedule, complete,
//! and remove tasks, persisted to a local flat file.
//!
//! The core is the ordering and persistence logic; the interactive shell in
//! the binary is a thin, replaceable collaborator that calls the operations
//! here and renders the ordered view.
//!
//! ## Flow
//! 1. Load the full collection from the backing file at startup
//! 2. Each operation mutates the in-memory collection and rewrites the file
//! 3. The shell re-renders from a freshly computed ordered view
//!
//! ## Modules
//! - `task`: the Task entity and input parsing rules
//! - `order`: the sort applied before every display and selection
//! - `store`: the load/save boundary to the flat persisted file
//! - `ops`: the mutating operations behind the shell
//! - `render`: display-line formatting
//! - `config`: backing-file path configuration

pub mod config;
pub mod ops;
pub mod order;
pub mod render;
pub mod store;
pub mod task;

pub use config::Config;
pub use ops::{OpError, TaskList};
pub use store::{StoreError, TaskStore};
pub use task::{Task, TaskError};
