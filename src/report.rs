use std::borrow::Cow;

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::error::{ErrorKind, MosaicError};

#[repr(i32)]
#[derive(Serialize_repr, Deserialize_repr, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    #[default]
    Success = 0,
    MalformedDigit = -1,
    MalformedStructure = -2,
    IntegrityError = -3,
    PaddingError = -4,
    TrailingGarbage = -5,
    NoTrailer = -6,
}

impl From<ErrorKind> for Code {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::MalformedDigit => Code::MalformedDigit,
            ErrorKind::MalformedStructure => Code::MalformedStructure,
            ErrorKind::Integrity => Code::IntegrityError,
            ErrorKind::Padding => Code::PaddingError,
            ErrorKind::TrailingGarbage => Code::TrailingGarbage,
            ErrorKind::Exhaustion => Code::NoTrailer,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct DecodedOK<'a> {
    pub code: Code,
    pub hex: String,
    pub text: Cow<'a, str>,
}

impl<'a> DecodedOK<'a> {
    pub fn success(bytes: &'a [u8]) -> Self {
        DecodedOK {
            code: Code::Success,
            hex: hex::encode(bytes),
            text: display_text(bytes),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct DecodedError {
    pub code: Code,
    pub error: String,
}

impl From<&MosaicError> for DecodedError {
    fn from(err: &MosaicError) -> Self {
        DecodedError {
            code: err.kind().into(),
            error: err.to_string(),
        }
    }
}

/// UTF-8 text when the bytes allow it, otherwise an escaped rendering.
pub fn display_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.escape_ascii().to_string()),
    }
}

pub fn render(result: &Result<Vec<u8>, MosaicError>) -> serde_json::Value {
    match result {
        Ok(bytes) => serde_json::json!(DecodedOK::success(bytes)),
        Err(e) => serde_json::json!(DecodedError::from(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_success() {
        let value = render(&Ok(b"AB".to_vec()));
        assert_eq!(value, json!({ "code": 0, "hex": "4142", "text": "AB" }));
    }

    #[test]
    fn renders_error_with_code() {
        let value = render(&Err(MosaicError::NoTrailer));
        assert_eq!(
            value,
            json!({ "code": -6, "error": "No trailer found; malformed input" })
        );
        let value = render(&Err(MosaicError::InvalidPadCount(5)));
        assert_eq!(value["code"], json!(-4));
    }

    #[test]
    fn escapes_invalid_utf8() {
        assert_eq!(display_text(b"hi"), "hi");
        assert_eq!(display_text(&[0x68, 0xff, 0x0a]), "h\\xff\\n");
    }

    #[test]
    fn code_round_trips_as_integer() {
        let code: Code = serde_json::from_value(json!(-3)).unwrap();
        assert_eq!(code, Code::IntegrityError);
        assert_eq!(serde_json::to_value(Code::Success).unwrap(), json!(0));
    }
}
