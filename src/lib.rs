//! Browser tab strip: organization and interaction core with a thin egui view.
//!
//! The tab collection itself (open tabs, groups, navigation state) is owned by
//! the surrounding application and reached through the capability traits in
//! [`model`]. This crate linearizes tabs and groups into a renderable
//! sequence, runs the hover/drag/selection state machine, and paints the
//! result with egui.
//!
//! ## Module layout
//!
//! - [`model`]: `Tab`/`TabGroup` read models and the external capability traits.
//! - [`config`]: `TabBarConfig` with serde defaults and TOML load/save.
//! - [`visual_state`]: pure active/hover/inactive resolver and style lookup.
//! - [`organizer`]: flat tab order + groups → linear `RenderItem` sequence.
//! - [`controller`]: transient interaction state and model delegation.
//! - [`drag`]: pointer-delta → target-index translation for reordering.
//! - [`bar`]: the egui view (layout loop, context menu, scroll-to-active,
//!   window drag-exclusion bookkeeping).
//! - [`ui_constants`]: named layout dimensions.

/// Crate version, for hosts that surface it in diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod bar;
pub mod config;
pub mod controller;
pub mod drag;
pub mod model;
pub mod organizer;
pub mod ui_constants;
pub mod visual_state;
