pub mod args;
pub use args::*;

pub mod human;
pub use human::*;
