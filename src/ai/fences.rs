use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FENCE_RE: Regex = Regex::new(r"```(?:json)?").unwrap();
}

/// Trims the text and, when it opens with a markdown code fence, removes
/// every fence marker so the payload can go straight to a JSON parser.
pub fn strip_fences(raw: &str) -> Cow<'_, str> {
    let trimmed = raw.trim();
    if !trimmed.starts_with("```") {
        return Cow::Borrowed(trimmed);
    }
    match FENCE_RE.replace_all(trimmed, "") {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
        Cow::Owned(s) => Cow::Owned(s.trim().to_string()),
    }
}
