//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod banner;
pub mod footer;
pub mod header;
pub mod jobs;
pub mod logs;
pub mod nodes;
pub mod stats_cards;
