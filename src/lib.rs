pub mod app;
pub mod config;
pub mod input;
pub mod model;
pub mod sequence;
pub mod traits;
pub mod util;

#[cfg(test)]
mod test_utils;
