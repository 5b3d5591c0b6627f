mod catalogue;
mod common;
mod mons;

pub use catalogue::*;
pub use common::*;
pub use mons::*;
