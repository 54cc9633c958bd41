use dicom::core::Tag;

pub fn format_tag(tag: Tag) -> String {
    format!("{:04X},{:04X}", tag.group(), tag.element())
}

/// Parses a tag written as hexadecimal `GGGG,EEEE`, with or without the
/// conventional surrounding parentheses.
pub fn parse_tag(text: &str) -> Option<Tag> {
    let trimmed = text
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')');
    let (group, element) = trimmed.split_once(',')?;
    let group = u16::from_str_radix(group.trim(), 16).ok()?;
    let element = u16::from_str_radix(element.trim(), 16).ok()?;
    Some(Tag(group, element))
}

/// Renders an extracted attribute value for the report. Absent values use
/// the float convention for missing data, so the line reads `NaN` rather
/// than failing the report.
pub fn format_attribute_value(value: Option<f64>) -> String {
    value.unwrap_or(f64::NAN).to_string()
}
