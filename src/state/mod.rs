//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`ui`, `session`, `gallery`) so individual
//! components can depend on small focused models. The models are plain
//! structs held in `RwSignal`s; everything here is testable natively.

pub mod gallery;
pub mod session;
pub mod ui;
