//! Report formatting utilities for terminal output

/// Width of the separator lines around a report
pub const REPORT_WIDTH: usize = 44;

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Right-align text in a field of given width
pub fn right_align(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Left-align text in a field of given width
pub fn left_align(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
