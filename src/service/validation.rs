use crate::error::ApiError;
use validator::Validate;

/// Runs the derived validators and folds every message into one 400.
pub fn validate_schema<T: Validate>(schema: &T) -> Result<(), ApiError> {
    schema.validate().map_err(|errors| {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by_key(|(field, _)| *field);
        let messages: Vec<String> = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        ApiError::bad_request(messages.join("; "))
    })
}

/// A text field counts as present when it holds something besides whitespace.
pub fn present_text(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

/// Ids start at 1; zero and negatives count as missing.
pub fn present_id(value: Option<i32>) -> Option<i32> {
    value.filter(|id| *id > 0)
}
