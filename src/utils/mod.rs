pub mod error;

pub use error::{GitridError, Result};
