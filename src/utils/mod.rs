pub mod formatting;

pub use formatting::{format_attribute_value, format_tag, parse_tag};
