pub mod alphabet;
pub mod error;
pub mod message;
pub mod pattern;

pub use alphabet::*;
pub use error::*;
pub use message::*;
pub use pattern::*;
