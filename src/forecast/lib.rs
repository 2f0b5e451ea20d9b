//! Simulated forecasters layered on top of a generated [`market::Series`].
//!
//! Neither stage learns anything: the base forecast is the actual close plus
//! zero-mean noise, and the refinement adds a small positively biased nudge.
//! Both return a new series and leave their input alone.

mod base;
mod refined;

pub use base::*;
pub use refined::*;
