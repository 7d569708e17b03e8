//! Browser environment glue.

pub mod motion;
