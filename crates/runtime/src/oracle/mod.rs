//! Oracle implementations backed by runtime configuration.

pub mod tables;

pub use tables::TablesOracleImpl;
