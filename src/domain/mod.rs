pub mod error;
pub mod token;
pub mod verification;

pub use error::*;
pub use token::*;
pub use verification::*;
