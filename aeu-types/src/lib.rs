pub mod alarm;
pub mod error;
pub mod format;
pub mod status;

pub use alarm::*;
pub use error::*;
pub use format::*;
pub use status::*;
