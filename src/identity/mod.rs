// Identity module - opaque account addresses

mod account;

pub use account::*;
