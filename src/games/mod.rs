//! Game implementations.

pub mod oxo;
