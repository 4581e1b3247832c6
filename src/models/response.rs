use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// The wire envelope every `/api/*` route speaks.
///
/// One tagged type instead of a struct full of optionals: a response is
/// either a success carrying data, a bare success acknowledging a mutation,
/// or a failure carrying the reason. Serialization flattens the variants
/// into the `success`/`data`/`error`/`message` union the clients expect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    Success { data: T, message: Option<String> },
    Message { message: String },
    Error { error: String, message: Option<String> },
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse::Success {
            data,
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        ApiResponse::Success {
            data,
            message: Some(message.into()),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        ApiResponse::Message {
            message: message.into(),
        }
    }

    pub fn error(error: impl Into<String>, message: Option<String>) -> Self {
        ApiResponse::Error {
            error: error.into(),
            message,
        }
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            ApiResponse::Success { data, message } => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("data", data)?;
                if let Some(message) = message {
                    map.serialize_entry("message", message)?;
                }
            }
            ApiResponse::Message { message } => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("message", message)?;
            }
            ApiResponse::Error { error, message } => {
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", error)?;
                if let Some(message) = message {
                    map.serialize_entry("message", message)?;
                }
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let response = ApiResponse::ok(vec![1, 2, 3]);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "success": true, "data": [1, 2, 3] })
        );
    }

    #[test]
    fn test_success_with_message_shape() {
        let response = ApiResponse::ok_with_message(json!({"id": 7}), "entry created");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "success": true, "data": {"id": 7}, "message": "entry created" })
        );
    }

    #[test]
    fn test_message_shape_has_no_data_key() {
        let response = ApiResponse::<()>::message("entry deleted");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "success": true, "message": "entry deleted" })
        );
    }

    #[test]
    fn test_error_shape() {
        let response = ApiResponse::<()>::error("access denied", Some("invalid api key".into()));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "success": false, "error": "access denied", "message": "invalid api key" })
        );
    }

    #[test]
    fn test_error_without_detail() {
        let response = ApiResponse::<()>::error("entry not found", None);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "success": false, "error": "entry not found" })
        );
    }
}
