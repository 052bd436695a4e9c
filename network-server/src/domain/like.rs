use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Like {
    pub(crate) id: i64,
    pub(crate) user_id: i64,
    pub(crate) message_id: i64,
    pub(crate) eval: bool,
    pub(crate) created_at: DateTime<Utc>,
}

/// Translates the free-text `eval` field into its boolean meaning.
///
/// Total over all inputs: `"like"` (any case) is `Some(true)`,
/// `"dislike"` is `Some(false)`, everything else is `None`.
pub(crate) fn parse_eval(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("like") {
        Some(true)
    } else if text.eq_ignore_ascii_case("dislike") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::parse_eval;

    #[test]
    fn parse_eval_accepts_like_and_dislike() {
        assert_eq!(parse_eval("like"), Some(true));
        assert_eq!(parse_eval("dislike"), Some(false));
    }

    #[test]
    fn parse_eval_is_case_insensitive() {
        assert_eq!(parse_eval("LIKE"), Some(true));
        assert_eq!(parse_eval("Like"), Some(true));
        assert_eq!(parse_eval("DisLike"), Some(false));
    }

    #[test]
    fn parse_eval_rejects_everything_else() {
        assert_eq!(parse_eval(""), None);
        assert_eq!(parse_eval("likee"), None);
        assert_eq!(parse_eval(" like"), None);
        assert_eq!(parse_eval("yes"), None);
    }
}
