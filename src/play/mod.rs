pub mod clock;
pub use clock::*;

pub mod config;
pub use config::*;

pub mod engine;
pub use engine::*;

pub mod history;
pub use history::*;

pub mod rejection;
pub use rejection::*;

pub mod state;
pub use state::*;
