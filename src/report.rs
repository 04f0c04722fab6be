//! Face attributes are collected into a CSV report

/// Flatten one face detection into a report row
pub mod row;

/// Write report rows to disk
pub mod write;
