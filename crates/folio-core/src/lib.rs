pub mod config;
pub mod constants;
pub mod contact;
pub mod particles;
pub mod styles;
pub mod typewriter;
pub mod watcher;

pub use config::*;
pub use contact::*;
pub use particles::*;
pub use styles::*;
pub use typewriter::*;
pub use watcher::*;
