//! Request and response bodies exposed over HTTP.

use serde::{Deserialize, Serialize};

pub const PNG_MEDIA_TYPE: &str = "image/png";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescribeRequest {
    pub prompt: String,
    /// e.g. retail, hospitality, healthcare. Drives the inferred audience.
    pub industry_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DescribeResult {
    pub descriptions_medium: Vec<String>,
    pub descriptions_short: Vec<String>,
    pub tags: Vec<String>,
    pub giftcard_name_suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRequest {
    pub giftcard_name: String,
    pub description: String,
    pub industry_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageResult {
    pub image_base64: String,
    pub media_type: String,
}

impl ImageResult {
    pub fn png(image_base64: String) -> Self {
        Self {
            image_base64,
            media_type: PNG_MEDIA_TYPE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_request_requires_both_fields() {
        let err = serde_json::from_str::<DescribeRequest>(r#"{"prompt":"Coffee"}"#).unwrap_err();
        assert!(err.to_string().contains("industry_type"));
    }

    #[test]
    fn test_image_request_keeps_values_verbatim() {
        let request: ImageRequest = serde_json::from_str(
            r#"{"giftcard_name":"  Brew Bucks ","description":"","industry_type":"cafe"}"#,
        )
        .unwrap();
        assert_eq!(request.giftcard_name, "  Brew Bucks ");
        assert_eq!(request.description, "");
    }

    #[test]
    fn test_image_result_is_png() {
        let result = ImageResult::png("aGVsbG8=".to_string());
        assert_eq!(result.media_type, "image/png");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["image_base64"], "aGVsbG8=");
        assert_eq!(json["media_type"], "image/png");
    }
}
