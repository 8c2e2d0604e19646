pub mod formatter;
pub mod status;

pub use formatter::{
    format_error, format_results, format_searching, wrap_text, CONTINUATION_INDENT, NO_SYNOPSIS,
    WRAP_WIDTH,
};
pub use status::{SearchStatus, StatusTone};
