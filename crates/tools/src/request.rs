//! Validated calls and the request parts rendered from them.

use crate::descriptor::{AccessToken, HttpMethod};
use crate::error::{LarkToolsError, Result};
use crate::path_template::{PathTemplate, percent_encode};
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

/// Normalized arguments of a call that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedCall {
    /// Original dotted tool name.
    pub tool: String,
    pub http_method: HttpMethod,
    pub path_template: &'static str,
    pub path: Map<String, Value>,
    pub params: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    pub access_token: AccessToken,
}

impl ValidatedCall {
    /// Interpolate the path template and serialize query parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if a path placeholder cannot be filled.
    pub fn render(&self) -> Result<PreparedRequest> {
        let path = PathTemplate::parse(self.path_template).render(&self.path)?;
        let mut query = Vec::new();
        for (key, value) in &self.params {
            serialize_query_param(key, value, &mut query);
        }
        Ok(PreparedRequest {
            tool: self.tool.clone(),
            method: self.http_method,
            path,
            query,
            body: self.data.clone(),
            access_token: self.access_token,
        })
    }
}

/// Everything an HTTP client needs to issue the call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedRequest {
    pub tool: String,
    pub method: HttpMethod,
    /// Interpolated, percent-encoded path.
    pub path: String,
    /// Query pairs, unencoded. Arrays contribute one pair per item.
    pub query: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    pub access_token: AccessToken,
}

impl PreparedRequest {
    /// Join the rendered path onto `domain` (e.g. `https://open.feishu.cn`) and attach the
    /// percent-encoded query. Spaces become `%20`, not `+`.
    ///
    /// # Errors
    ///
    /// Returns an error if `domain` plus path does not parse as a URL.
    pub fn url(&self, domain: &str) -> Result<Url> {
        let base = format!("{}{}", domain.trim_end_matches('/'), self.path);
        let mut url = Url::parse(&base)
            .map_err(|e| LarkToolsError::Render(format!("Invalid URL '{base}': {e}")))?;

        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&query));
        }

        Ok(url)
    }
}

/// Flatten one `params` entry into query pairs: arrays repeat the key, nulls are dropped.
fn serialize_query_param(name: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Array(items) => out.extend(
            items
                .iter()
                .filter(|item| !item.is_null())
                .map(|item| (name.to_string(), query_value(item))),
        ),
        other => out.push((name.to_string(), query_value(other))),
    }
}

/// Strings go out bare; anything else as its JSON text (`true`, `20`, `{"a":1}`).
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(params: Value) -> ValidatedCall {
        ValidatedCall {
            tool: "hire.v1.application.list".to_string(),
            http_method: HttpMethod::Get,
            path_template: "/open-apis/hire/v1/applications",
            path: Map::new(),
            params: params.as_object().cloned().unwrap_or_default(),
            data: None,
            access_token: AccessToken::Tenant,
        }
    }

    #[test]
    fn arrays_become_repeated_keys_and_nulls_are_dropped() {
        let req = call(json!({
            "lock_status": [1, 2],
            "page_size": 20,
            "job_id": null,
            "keyword": "rust engineer",
        }))
        .render()
        .expect("render");

        assert!(req.query.contains(&("lock_status".to_string(), "1".to_string())));
        assert!(req.query.contains(&("lock_status".to_string(), "2".to_string())));
        assert!(req.query.contains(&("page_size".to_string(), "20".to_string())));
        assert!(!req.query.iter().any(|(k, _)| k == "job_id"));
        assert_eq!(req.query.len(), 4);
    }

    #[test]
    fn url_joins_domain_and_encodes_query() {
        let req = call(json!({"keyword": "a&b c"})).render().expect("render");
        let url = req.url("https://open.feishu.cn/").expect("url");
        assert_eq!(
            url.as_str(),
            "https://open.feishu.cn/open-apis/hire/v1/applications?keyword=a%26b%20c"
        );
    }

    #[test]
    fn url_without_query_has_no_question_mark() {
        let req = call(json!({})).render().expect("render");
        let url = req.url("https://open.larksuite.com").expect("url");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn prepared_request_serializes_camel_case() {
        let req = call(json!({})).render().expect("render");
        let v = serde_json::to_value(&req).expect("serialize");
        assert_eq!(v["method"], "GET");
        assert_eq!(v["accessToken"], "tenant");
        assert!(v.get("body").is_none());
    }
}
