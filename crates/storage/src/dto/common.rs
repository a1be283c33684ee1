use serde::{Deserialize, Serialize};

/// User-facing message in English and Vietnamese.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedMessage {
    pub en: String,
    pub vi: String,
}

impl LocalizedMessage {
    pub fn new(en: impl Into<String>, vi: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            vi: vi.into(),
        }
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error", "Lỗi máy chủ")
    }

    pub fn not_found() -> Self {
        Self::new("Not found", "Không tìm thấy")
    }

    pub fn invalid_request() -> Self {
        Self::new("Invalid request", "Yêu cầu không hợp lệ")
    }
}

/// Envelope around every query result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: LocalizedMessage,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: LocalizedMessage) -> Self {
        Self {
            success: true,
            data: Some(data),
            message,
        }
    }

    pub fn error(message: LocalizedMessage) -> Self {
        Self {
            success: false,
            data: None,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_has_null_data() {
        let response = ApiResponse::<Vec<i32>>::error(LocalizedMessage::internal_error());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert_eq!(json["message"]["en"], "Internal server error");
        assert_eq!(json["message"]["vi"], "Lỗi máy chủ");
    }

    #[test]
    fn test_ok_envelope() {
        let response = ApiResponse::ok(vec![1, 2], LocalizedMessage::new("Done", "Xong"));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert_eq!(json["message"]["vi"], "Xong");
    }
}
