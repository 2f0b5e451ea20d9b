mod mwc256;
mod source;

pub use mwc256::*;
pub use source::*;
