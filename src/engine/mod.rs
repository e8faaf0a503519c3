//! Engine module - the command surface a controller layer drives

pub mod session;

pub use session::{CommandError, Phase, Session};
