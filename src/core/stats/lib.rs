mod errors;
mod rounding;

pub use errors::*;
pub use rounding::*;
