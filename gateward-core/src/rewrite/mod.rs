mod custom_scheme;
mod embedded;
mod types;


pub use custom_scheme::*;
pub use embedded::*;
pub use types::*;
