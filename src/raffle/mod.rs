// Raffle module - winner selection

mod draw;

pub use draw::*;
