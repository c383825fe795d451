//! Resolution-independent layout for the game overlay.
//!
//! This crate has no I/O and no state. Every anchor the overlay annotates is
//! authored once against a fixed design-time frame (1280×720 for the client
//! lobby, 1920×1080 for the in-game HUD) and projected to the user's actual
//! resolution here, so every visual shares the same scaling guarantee and can
//! be tested without a rendering surface.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Points, rectangles, resolutions and per-axis scaling |
//! | [`anchors`] | Pick/bench/augment anchor positions |
//! | [`build_panel`] | Item card placement for the shop build panel |
//! | [`hit`] | Topmost-target lookup for pointer hit-testing |
//! | [`consts`] | Base frames and anchor boxes |

pub mod anchors;
pub mod build_panel;
pub mod consts;
pub mod geometry;
pub mod hit;
