//! Application pages, one per backend feature.

pub mod animate;
pub mod colorize;
pub mod enhance;
pub mod generate;
pub mod home;
pub mod remove;
pub mod restore;
