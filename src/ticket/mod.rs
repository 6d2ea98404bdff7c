// Ticket module - numbered claims eligible for the draw

mod book;

pub use book::*;
