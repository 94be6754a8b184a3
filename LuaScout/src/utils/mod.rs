//! Utility functions

pub mod path;

pub use path::{base_name, cmp_path_str, relative_key};
