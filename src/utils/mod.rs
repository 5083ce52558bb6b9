pub mod coerce;
pub mod dates;

pub use coerce::{coerce_duration, parse_limit, truncate_duration};
pub use dates::{format_calendar_date, parse_calendar_date};
