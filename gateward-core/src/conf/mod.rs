mod error;
mod types;
mod validate;


pub use error::*;
pub use types::*;
