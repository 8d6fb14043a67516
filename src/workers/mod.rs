//! Background workers feeding the dashboard

pub mod core;
pub mod poller;

pub use core::{PollerConfig, ReportSender};
pub use poller::{CycleError, CycleReport, Poller, Resource, Snapshot};
