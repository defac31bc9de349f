//! Application layer - the session and the state it loads and saves.
//!
//! This layer sits between the shell and the package registry: it seeds the
//! catalog, persists the installed set and coordinates installer runs.

mod seed;
mod session;
mod state;

pub use seed::{DESCRIPTOR_EXTENSION, find_descriptor_files, load_catalog};
pub use session::{Session, UpdateOutcome};
pub use state::StateStore;
