//! `:param` path templates (`/open-apis/hire/v1/jobs/:job_id`).

use crate::error::{LarkToolsError, Result};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    segments: Vec<Segment>,
}

impl PathTemplate {
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let segments = template
            .trim_start_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Placeholder names, in order of appearance.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Substitute every placeholder from `values`, percent-encoding each substituted segment.
    ///
    /// # Errors
    ///
    /// Returns an error if a placeholder has no value, or its value is empty or not a scalar.
    pub fn render(&self, values: &Map<String, Value>) -> Result<String> {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::Param(name) => {
                    let raw = match values.get(name) {
                        Some(Value::String(s)) => s.clone(),
                        Some(Value::Number(n)) => n.to_string(),
                        Some(Value::Bool(b)) => b.to_string(),
                        Some(other) => {
                            return Err(LarkToolsError::Render(format!(
                                "path parameter '{name}' must be a scalar, got {other}"
                            )));
                        }
                        None => {
                            return Err(LarkToolsError::Render(format!(
                                "missing path parameter '{name}'"
                            )));
                        }
                    };
                    if let Some(problem) = segment_problem(&raw) {
                        return Err(LarkToolsError::Render(format!(
                            "path parameter '{name}' {problem}"
                        )));
                    }
                    out.push_str(&percent_encode(&raw));
                }
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        Ok(out)
    }
}

/// Why `raw` cannot stand as a single path segment, if it cannot.
///
/// URL parsers resolve `.` and `..` (and their `%2e` spellings) away, which would address a
/// different endpoint, so they are refused rather than escaped.
#[must_use]
pub fn segment_problem(raw: &str) -> Option<&'static str> {
    match raw {
        "" => Some("must not be empty"),
        "." | ".." => Some("must not be a dot segment ('.' or '..')"),
        _ => None,
    }
}

/// Percent-encode everything outside the RFC 3986 unreserved set. Used for path segments and
/// query components alike.
pub(crate) fn percent_encode(s: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        if matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~') {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0F) as usize] as char);
        }
    }
    out
}
