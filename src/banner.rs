//! # Banner Module
//!
//! This module recognizes pre-existing copyright banners in file content and
//! collapses them into a reserved insertion marker. Rendering then substitutes
//! the fresh notice at the marker position, which keeps the tool idempotent:
//! however many old banners a file has accumulated, a single pass leaves exactly
//! one up-to-date notice behind.
//!
//! Two recognizers run in sequence over the whole text:
//! 1. Block banners: a `/* ... */` comment that starts at column one and ends at
//!    a line boundary (or end of text)
//! 2. Line banners: one or more consecutive `//` lines, as a contiguous run
//!    starting and ending at line boundaries
//!
//! A matched comment is only removed when one of its lines carries a copyright
//! marker ("Copyright" followed by at least one token, optionally preceded by
//! comment punctuation). Indented comments are never treated as banners; they
//! are assumed to be ordinary code comments and left untouched.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Reserved sentinel substituted for each removed banner.
///
/// `U+FFFD` (the Unicode replacement character) does not occur in legitimate
/// file content. Every marker introduced here is consumed again during
/// rendering, so it never appears in written output.
pub const INSERTION_MARKER: char = '\u{FFFD}';

/// Does the comment carry a copyright line? The line may open with comment
/// punctuation but must be followed by at least one non-whitespace token.
static COPYRIGHT_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?im)^[/*#|\s]*Copyright\s+\S+").expect("copyright regex must compile"));

/// A `/* ... */` block starting at column one, ending at a line boundary or end
/// of text. The line terminator after `*/` is captured so it can be re-emitted
/// behind the marker.
static BLOCK_BANNER_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?m)^/\*(?s:.*?)\*/[ \t]*(\r\n|\n|\r|$)").expect("block banner regex must compile"));

/// A maximal run of consecutive `//` lines starting at column one.
static LINE_BANNER_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?m)^(?://[^\r\n]*(?:\r\n|\n|\r))*//[^\r\n]*(\r\n|\n|\r|$)").expect("line banner regex must compile")
});

/// Replaces every recognized old banner in `content` with [`INSERTION_MARKER`].
///
/// Both recognizers are applied unconditionally: files accumulate
/// differently-styled banners over their history (a block comment once, a
/// line-comment banner later), and every one of them must go. Comments without
/// a copyright line pass through unchanged.
///
/// # Parameters
///
/// * `content` - The file content to scan
///
/// # Returns
///
/// The content with each banner replaced by a single marker character. Borrowed
/// unchanged when neither recognizer matched anything.
pub fn remove_old_banners(content: &str) -> Cow<'_, str> {
  match collapse_matches(&BLOCK_BANNER_RE, content) {
    Cow::Borrowed(_) => collapse_matches(&LINE_BANNER_RE, content),
    Cow::Owned(owned) => Cow::Owned(collapse_matches(&LINE_BANNER_RE, &owned).into_owned()),
  }
}

/// Replace each match of `re` that passes the copyright test with the marker,
/// keeping the captured line terminator so surrounding lines stay intact.
fn collapse_matches<'a>(re: &Regex, content: &'a str) -> Cow<'a, str> {
  re.replace_all(content, |caps: &Captures| {
    let whole = &caps[0];
    if COPYRIGHT_RE.is_match(whole) {
      format!("{}{}", INSERTION_MARKER, &caps[1])
    } else {
      whole.to_string()
    }
  })
}

/// Substitutes the rendered notice for the collapsed banners.
///
/// The first marker occurrence in document order receives the notice; any
/// further markers (a file can hold several old banners) are deleted, so the
/// result carries exactly one notice and zero markers. When no banner was
/// found there is no marker at all, and the notice is prepended to the
/// unmodified content followed by a line separator.
///
/// # Parameters
///
/// * `content` - File content after [`remove_old_banners`]
/// * `notice` - The rendered notice text to place
///
/// # Returns
///
/// The final content with the notice in place and no marker characters left.
pub fn substitute_notice(content: &str, notice: &str) -> String {
  match content.find(INSERTION_MARKER) {
    Some(index) => {
      let after = &content[index + INSERTION_MARKER.len_utf8()..];
      let mut result = String::with_capacity(content.len() + notice.len());
      result.push_str(&content[..index]);
      result.push_str(notice);
      result.push_str(&after.replace(INSERTION_MARKER, ""));
      result
    }
    None => format!("{notice}\n{content}"),
  }
}
