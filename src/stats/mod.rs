pub mod aggregate;
pub mod exec;
pub mod fetch;
pub mod parse;
pub mod render;

pub use aggregate::{aggregate, Column, ColumnWidths, Report};
pub use exec::{exec, report_lines};
pub use fetch::GitLog;
pub use parse::{parse_file_change, parse_header, parse_log};
pub use render::render;
