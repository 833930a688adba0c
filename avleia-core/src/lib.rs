pub mod config;
pub mod extract;
pub mod scripted;
pub mod types;

// Keep the public surface small and intentional.
pub use config::*;
pub use extract::*;
pub use scripted::*;
pub use types::*;
