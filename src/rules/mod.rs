pub mod action;
pub use action::*;

pub mod apply;

pub mod event;
pub use event::*;

pub mod legal;

pub mod recycle;
pub use recycle::*;

pub mod score;
pub use score::*;

pub mod validate;
