use serde::{Deserialize, Serialize};

/// Which tools are exposed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ToolSelection {
    /// Simple boolean: true = expose all, false = expose none.
    All(bool),
    /// Include/exclude glob patterns (`*`, `?`) over original dotted tool names.
    Detailed {
        #[serde(default)]
        include: Vec<String>,
        #[serde(default)]
        exclude: Vec<String>,
    },
}

impl Default for ToolSelection {
    fn default() -> Self {
        ToolSelection::All(true)
    }
}

impl ToolSelection {
    /// An empty include list means everything; exclude always wins.
    #[must_use]
    pub fn allows(&self, name: &str) -> bool {
        match self {
            ToolSelection::All(b) => *b,
            ToolSelection::Detailed { include, exclude } => {
                let included = include.is_empty() || include.iter().any(|p| glob_match(p, name));
                included && !exclude.iter().any(|p| glob_match(p, name))
            }
        }
    }
}

/// Match a dotted tool name against a selection pattern.
///
/// `*` spans any run of bytes, dots included (`hire.*` selects the whole project), and `?` stands
/// for exactly one byte.
#[must_use]
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern_bytes = pattern.as_bytes();
    let text_bytes = text.as_bytes();

    let mut pattern_index = 0usize;
    let mut text_index = 0usize;

    let mut star_index: Option<usize> = None;
    let mut star_text_index: usize = 0;

    while text_index < text_bytes.len() {
        match pattern_bytes.get(pattern_index) {
            Some(b'*') => {
                star_index = Some(pattern_index);
                pattern_index += 1;
                star_text_index = text_index;
            }
            Some(b'?') => {
                pattern_index += 1;
                text_index += 1;
            }
            Some(&b) if b == text_bytes[text_index] => {
                pattern_index += 1;
                text_index += 1;
            }
            _ => {
                let Some(si) = star_index else {
                    return false;
                };

                pattern_index = si + 1;
                star_text_index += 1;
                text_index = star_text_index;
            }
        }
    }

    while matches!(pattern_bytes.get(pattern_index), Some(b'*')) {
        pattern_index += 1;
    }

    pattern_index == pattern_bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glob_basics() {
        assert!(glob_match("hire.v1.*", "hire.v1.job.get"));
        assert!(glob_match("*.get", "mail.v1.mailgroup.get"));
        assert!(glob_match("mail.v?.user.query", "mail.v1.user.query"));
        assert!(!glob_match("hire.*", "mail.v1.user.query"));
        assert!(glob_match("*", ""));
        assert!(!glob_match("a", ""));
    }

    #[test]
    fn default_allows_everything() {
        assert!(ToolSelection::default().allows("hire.v1.job.get"));
        assert!(!ToolSelection::All(false).allows("hire.v1.job.get"));
    }

    #[test]
    fn exclude_wins_over_include() {
        let s = ToolSelection::Detailed {
            include: vec!["hire.v1.*".to_string()],
            exclude: vec!["*.delete".to_string()],
        };
        assert!(s.allows("hire.v1.note.get"));
        assert!(!s.allows("hire.v1.note.delete"));
        assert!(!s.allows("mail.v1.mailgroup.get"));
    }

    #[test]
    fn empty_include_means_all() {
        let s = ToolSelection::Detailed {
            include: Vec::new(),
            exclude: vec!["mail.*".to_string()],
        };
        assert!(s.allows("hire.v1.job.get"));
        assert!(!s.allows("mail.v1.user.query"));
    }

    #[test]
    fn deserializes_bool_or_detailed() {
        let s: ToolSelection = serde_yaml::from_str("false").expect("bool");
        assert_eq!(s, ToolSelection::All(false));

        let s: ToolSelection =
            serde_yaml::from_str("include: ['hire.*']\n").expect("detailed");
        assert!(s.allows("hire.v1.job.get"));
        assert!(!s.allows("mail.v1.user.query"));
    }
}
