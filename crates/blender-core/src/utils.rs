//! Utility functions for rule implementations.

pub mod paths;
pub mod text;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use paths::{
    is_embedded_or_system_icon, is_under_windows, normalize_shell_path, split_icon_location,
};
#[doc(inline)]
pub use text::{eq_ignore_case, leading_integer, non_empty};
