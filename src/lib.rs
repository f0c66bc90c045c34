#![forbid(unsafe_code)]

#[macro_use]
pub mod prelude;

pub mod ctx;
pub mod list;
pub mod random;
pub mod repr;
pub mod traits;
