pub mod card;
pub use card::*;

pub mod color;
pub use color::*;

pub mod deck;
pub use deck::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;
