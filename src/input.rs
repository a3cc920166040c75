use linegrid::{Point, Segment};
use thiserror::Error;

const FIELD_NAMES: [&str; 4] = ["start x", "start y", "end x", "end y"];

/// Text in one of the coordinate fields that is not a whole number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum InputError {
    #[error("{field} is empty")]
    Empty { field: &'static str },
    #[error("{field} must be a whole number, got `{value}`")]
    NotAnInteger { field: &'static str, value: String },
}

pub(crate) fn parse_coordinate(field: &'static str, text: &str) -> Result<i32, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty { field });
    }
    text.parse().map_err(|_| InputError::NotAnInteger {
        field,
        value: text.to_string(),
    })
}

/// Parses the start x, start y, end x and end y fields, in that order.
pub(crate) fn parse_segment(fields: [&str; 4]) -> Result<Segment, InputError> {
    let mut values = [0; 4];
    for ((value, &text), &field) in values.iter_mut().zip(fields.iter()).zip(FIELD_NAMES.iter()) {
        *value = parse_coordinate(field, text)?;
    }
    let [x0, y0, x1, y1] = values;
    Ok(Segment::new(Point::new(x0, y0), Point::new(x1, y1)))
}
