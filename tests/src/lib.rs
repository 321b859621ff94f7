//! End to end tests of the protoconv pipeline.
//!
//! Fixtures live in `test_data/<module>/<name>.json`.

#[cfg(test)]
mod converter;
#[cfg(test)]
mod description;
#[cfg(test)]
mod utils;
