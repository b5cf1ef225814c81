mod format;
mod perf;
mod time_utils;

pub use format::{format_amount, format_currency, format_percent, format_thousands, round1};
pub use time_utils::{AppInstant, remaining_until};
