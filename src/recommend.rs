//! AI destination recommendations via the Gemini API.
//!
//! The storefront's "ask AI" button requests three weekend getaway
//! suggestions for the current origin city. The public entry point never
//! fails: a missing key, a network error, or a malformed response all
//! resolve to an empty list so the caller can render "no new results"
//! instead of crashing. Failures are logged for diagnostics only.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{RecommendError, RecommendResult};
use crate::log;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// One recommended destination, as returned by the model.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub city: String,
    pub reason: String,
    #[serde(rename = "estimatedPrice")]
    pub estimated_price: u32,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Fetch weekend destination recommendations for `origin`.
///
/// Resolves to an empty list on any failure; never returns an error.
pub async fn fetch_recommendations(
    client: &reqwest::Client,
    config: &Config,
    origin: &str,
) -> Vec<Recommendation> {
    match request_recommendations(client, config, origin).await {
        Ok(recs) => {
            log::log_event(&format!("recommendations: {} result(s)", recs.len()));
            recs
        }
        Err(e) => {
            log::log(&format!("recommendation fetch failed: {}", e));
            vec![]
        }
    }
}

async fn request_recommendations(
    client: &reqwest::Client,
    config: &Config,
    origin: &str,
) -> RecommendResult<Vec<Recommendation>> {
    let api_key = config.api_key().ok_or(RecommendError::MissingApiKey)?;
    let url = format!("{}/{}:generateContent", API_BASE, config.model());

    let request = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: build_prompt(origin),
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
        },
    };

    let response = client
        .post(&url)
        .query(&[("key", api_key)])
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(RecommendError::Status(status.as_u16()));
    }

    let body: GenerateResponse = response.json().await?;
    let text = body
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or(RecommendError::EmptyResponse)?;

    parse_recommendations(&text)
}

/// The prompt sent to the model, requesting a strict JSON array in the
/// storefront's locale.
fn build_prompt(origin: &str) -> String {
    format!(
        "推荐3个从{origin}出发的周末热门且实惠的旅游目的地。\n\
         请以JSON格式返回响应，严格遵守以下Schema：\n\
         对象数组，每个对象包含：\n\
         - city (string): 目的地城市名称（中文）\n\
         - reason (string): 一个非常简短的推荐理由，吸引人（最多10个字）\n\
         - estimatedPrice (number): 预估最低机票价格，人民币（仅整数）"
    )
}

/// Parse the model's JSON text into recommendation records.
///
/// Models sometimes wrap JSON in a markdown code fence even when asked for
/// a JSON MIME type, so fences are stripped before parsing.
fn parse_recommendations(text: &str) -> RecommendResult<Vec<Recommendation>> {
    let trimmed = strip_code_fence(text.trim());
    serde_json::from_str(trimmed).map_err(|e| RecommendError::InvalidResponse(e.to_string()))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the optional language tag on the opening fence line.
    let rest = match rest.find('\n') {
        Some(i) => &rest[i + 1..],
        None => rest,
    };
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_array() {
        let text = r#"[
            {"city": "杭州", "reason": "西湖很近", "estimatedPrice": 310},
            {"city": "青岛", "reason": "海景便宜", "estimatedPrice": 450}
        ]"#;
        let recs = parse_recommendations(text).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].city, "杭州");
        assert_eq!(recs[1].estimated_price, 450);
    }

    #[test]
    fn test_parse_strips_code_fence() {
        let text = "```json\n[{\"city\": \"苏州\", \"reason\": \"园林\", \"estimatedPrice\": 280}]\n```";
        let recs = parse_recommendations(text).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].city, "苏州");
    }

    #[test]
    fn test_parse_malformed_json_is_error_not_panic() {
        assert!(matches!(
            parse_recommendations("not json at all"),
            Err(RecommendError::InvalidResponse(_))
        ));
        assert!(parse_recommendations("{\"city\": \"truncated").is_err());
    }

    #[test]
    fn test_parse_empty_array() {
        assert_eq!(parse_recommendations("[]").unwrap(), vec![]);
    }

    #[test]
    fn test_prompt_includes_origin() {
        let prompt = build_prompt("上海");
        assert!(prompt.contains("从上海出发"));
        assert!(prompt.contains("estimatedPrice"));
    }

    #[tokio::test]
    async fn test_fetch_without_api_key_resolves_empty() {
        // No key in config; make sure the env fallback is empty too.
        let config = Config::default();
        if std::env::var("GEMINI_API_KEY").is_ok() {
            return; // environment decides, skip
        }
        let client = reqwest::Client::new();
        let recs = fetch_recommendations(&client, &config, "上海").await;
        assert!(recs.is_empty());
    }
}
