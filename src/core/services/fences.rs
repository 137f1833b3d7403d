//! Prompt rendering and code-fence stripping
//!
//! Pure text handling with no I/O.

use std::sync::LazyLock;

use regex::Regex;

/// Placeholder replaced by the user's instruction in prompt templates
pub const PROMPT_PLACEHOLDER: &str = "{prompt}";

/// First fenced block: opening fence, optional language tag, body, closing fence
static FENCED_BLOCK: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)```[A-Za-z0-9_+.-]*[ \t]*\r?\n(.*?)```").ok());

/// Language tags recognized on a fence that opens and closes on one line
const INLINE_TAGS: &[&str] = &["python", "python3", "py", "ipython"];

/// Insert the instruction into a template
///
/// A template without the placeholder gets the instruction appended after a
/// blank line.
#[must_use]
pub fn render_prompt(template: &str, instruction: &str) -> String {
    if template.contains(PROMPT_PLACEHOLDER) {
        template.replace(PROMPT_PLACEHOLDER, instruction)
    } else {
        format!("{template}\n\n{instruction}")
    }
}

/// Remove markdown code-fence decoration from a model response
///
/// If the response contains a complete fenced block, its body is returned.
/// Otherwise stray backticks at either end are removed, together with the
/// language tag of an unterminated opening fence. The result is trimmed.
/// Nothing checks that the code is valid.
#[must_use]
pub fn strip_code_fences(response: &str) -> String {
    if let Some(body) = FENCED_BLOCK
        .as_ref()
        .and_then(|re| re.captures(response))
        .and_then(|caps| caps.get(1))
    {
        return body.as_str().trim().to_string();
    }

    let trimmed = response.trim();
    let opened = trimmed.starts_with('`');
    let mut text = trimmed.trim_start_matches('`');

    if opened {
        // Drop a language tag such as `python` on the fence line
        match text.split_once('\n') {
            Some((first, rest)) if is_language_tag(first.trim()) => text = rest,
            Some(_) => {},
            // Single-line fence: only well-known tags, `import os` is code
            None => {
                if let Some((word, rest)) = text.split_once(char::is_whitespace)
                    && INLINE_TAGS.contains(&word.to_ascii_lowercase().as_str())
                {
                    text = rest;
                }
            },
        }
    }

    text.trim_end_matches('`').trim().to_string()
}

fn is_language_tag(word: &str) -> bool {
    !word.is_empty()
        && word.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-' | '.'))
}
