/// View modules
///
/// Each submodule builds widget trees against crate::Message:
/// - The card grid and its busy/empty states (gallery.rs)
/// - The search and filter bar (controls.rs)
/// - The detail overlay (detail.rs)

pub mod controls;
pub mod detail;
pub mod gallery;
