pub mod column;
pub use column::*;

pub mod foundation;
pub use foundation::*;

pub mod layout;
pub use layout::*;

pub mod pile;
pub use pile::*;

pub mod stock;
pub use stock::*;

pub mod waste;
pub use waste::*;
