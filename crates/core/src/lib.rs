#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod extract;
pub mod heading;
pub mod lines;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
