#![forbid(unsafe_code)]

pub mod anim;
pub mod model;
pub mod time;

pub use time::Clock;
