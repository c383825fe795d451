//! Network collaborators: the local game-state backend and the item dataset.

pub mod backend;
pub mod items;
pub mod types;

pub use backend::{BackendClient, HttpTimeouts, SnapshotSource};
pub use items::{ItemCatalog, ItemInfo};
pub use types::{Endpoint, FetchError};
