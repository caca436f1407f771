//! Command implementations for the dds-convert CLI

pub mod batch;
pub mod convert;
pub mod info;
