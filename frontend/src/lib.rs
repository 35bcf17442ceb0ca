pub mod config;
pub mod error;
pub mod interactions;
pub mod mount;
pub mod pages;
pub mod selectors;
pub mod utils;

#[cfg(test)]
mod testing;
