//! Reusable UI components shared across pages.

pub mod brush_controls;
pub mod canvas_host;
pub mod gallery;
pub mod nav_bar;
pub mod status_bar;
