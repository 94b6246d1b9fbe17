use serde::{Deserialize, Serialize};

/// How dotted tool names are rendered on the exposed tool surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolNameCase {
    /// `hire.v1.job.combinedCreate` (unchanged).
    #[default]
    Dot,
    /// `hire_v1_job_combined_create`
    Snake,
    /// `hire-v1-job-combined-create`
    Kebab,
    /// `hireV1JobCombinedCreate`
    Camel,
}

/// Re-case a dotted tool name.
#[must_use]
pub fn apply_name_case(name: &str, case: ToolNameCase) -> String {
    match case {
        ToolNameCase::Dot => name.to_string(),
        ToolNameCase::Snake => words(name).join("_"),
        ToolNameCase::Kebab => words(name).join("-"),
        ToolNameCase::Camel => {
            let mut out = String::with_capacity(name.len());
            for (i, w) in words(name).into_iter().enumerate() {
                if i == 0 {
                    out.push_str(&w);
                } else {
                    let mut chars = w.chars();
                    if let Some(first) = chars.next() {
                        out.extend(first.to_uppercase());
                        out.push_str(chars.as_str());
                    }
                }
            }
            out
        }
    }
}

/// Lowercase words of a dotted name; camelCase segments are split at case boundaries.
fn words(name: &str) -> Vec<String> {
    let mut out = Vec::new();
    for segment in name.split(['.', '_', '-']) {
        let mut current = String::new();
        let mut prev_lower = false;
        for c in segment.chars() {
            if c.is_ascii_uppercase() && prev_lower && !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
            current.push(c.to_ascii_lowercase());
        }
        if !current.is_empty() {
            out.push(current);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_is_identity() {
        assert_eq!(
            apply_name_case("hire.v1.job.combinedCreate", ToolNameCase::Dot),
            "hire.v1.job.combinedCreate"
        );
    }

    #[test]
    fn snake_and_kebab_split_camel_segments() {
        assert_eq!(
            apply_name_case("hire.v1.job.combinedCreate", ToolNameCase::Snake),
            "hire_v1_job_combined_create"
        );
        assert_eq!(
            apply_name_case("mail.v1.mailgroupMember.batchCreate", ToolNameCase::Kebab),
            "mail-v1-mailgroup-member-batch-create"
        );
    }

    #[test]
    fn camel_joins_words() {
        assert_eq!(
            apply_name_case("hire.v1.job.get", ToolNameCase::Camel),
            "hireV1JobGet"
        );
        assert_eq!(
            apply_name_case("hire.v1.ehrImportTask.patch", ToolNameCase::Camel),
            "hireV1EhrImportTaskPatch"
        );
    }

    #[test]
    fn deserializes_lowercase() {
        let c: ToolNameCase = serde_json::from_str("\"kebab\"").expect("parse");
        assert_eq!(c, ToolNameCase::Kebab);
    }
}
