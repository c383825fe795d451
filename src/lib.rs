//! Headless core of a click-through game overlay.
//!
//! Polls a local game-state backend, derives which overlay to show, projects
//! annotations onto the screen through the `layout` crate and hit-tests
//! pointer samples against drawn item cards. Windowing, tray and process
//! supervision belong to the host shell; only its interface lives here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | `AppContext`: task ownership and teardown |
//! | [`config`] | clap/env configuration and validation |
//! | [`net`] | Backend client, wire types, item dataset |
//! | [`state`] | Snapshots, display mode, watch-backed store |
//! | [`services`] | Self-rescheduling poll loops |
//! | [`render`] | Scene composition, hit-testing, tooltips |
//! | [`shell`] | Pointer feed, host commands, shutdown signal |

pub mod app;
pub mod config;
pub mod net;
pub mod render;
pub mod services;
pub mod shell;
pub mod state;
