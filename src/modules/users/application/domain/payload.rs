use serde_json::{Map, Value};

/// A payload that passed validation and can be handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("payload is not a JSON object")]
    NotAnObject,

    #[error("payload is empty")]
    Empty,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` must be a non-empty string")]
    InvalidField(&'static str),
}

impl NewUser {
    /// Checks the shape of a raw payload. Unknown keys are ignored,
    /// field contents beyond "non-empty string" are not inspected.
    pub fn from_payload(payload: &Value) -> Result<Self, PayloadError> {
        let fields = payload.as_object().ok_or(PayloadError::NotAnObject)?;
        if fields.is_empty() {
            return Err(PayloadError::Empty);
        }

        let username = required_string(fields, "username")?;
        let email = required_string(fields, "email")?;

        Ok(Self { username, email })
    }
}

fn required_string(fields: &Map<String, Value>, key: &'static str) -> Result<String, PayloadError> {
    match fields.get(key) {
        None | Some(Value::Null) => Err(PayloadError::MissingField(key)),
        Some(Value::String(value)) if !value.is_empty() => Ok(value.clone()),
        Some(_) => Err(PayloadError::InvalidField(key)),
    }
}
