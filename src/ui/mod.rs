// Module declarations
mod app;
pub mod dashboard;
pub mod loading;
// Re-exports for external use
pub use app::{App, run};
