// lib.rs
// Library modules for tombola sheet generation

pub mod defs;
pub mod error;
pub mod random;
pub mod column;
pub mod priority;
pub mod row;
pub mod sheet;
pub mod logging;
