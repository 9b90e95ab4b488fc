//! Turn driver: seats, alternation and the last move played.

pub mod session;

pub use session::Session;
