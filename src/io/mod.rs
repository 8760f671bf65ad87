//! File output for computed resistance curves.

pub mod csv;

pub use csv::ExportError;
