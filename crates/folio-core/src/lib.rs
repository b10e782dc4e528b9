pub mod actions;
pub mod command_registry;
pub mod config;
pub mod content;
pub mod dispatch;
pub mod error;
pub mod projects;
pub mod reducer;
pub mod state;
pub mod transcript;
pub mod typewriter;

pub use actions::*;
pub use reducer::*;
pub use state::*;

pub use transcript::*;
