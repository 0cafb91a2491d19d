pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod text;
pub mod time;

pub use date::format_date;
pub use formatting::{NOT_SPECIFIED, format_technician};
pub use time::parse_duration_minutes;
