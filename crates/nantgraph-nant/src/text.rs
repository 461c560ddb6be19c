//! Label text helpers.

use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

use nantgraph_error::{Error, Result};

const ELLIPSIS: &str = "...";

/// Wrap `text` at spaces so that lines fit in `width` columns where possible.
///
/// Words are placed first-fit and never broken: a word wider than `width`
/// stays whole on a line of its own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let options = Options::new(width)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .break_words(false);

    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Shorten `text` to at most `limit` characters, marking the cut with `...`.
pub fn ellipsis(text: &str, limit: usize) -> Result<String> {
    if limit <= ELLIPSIS.len() {
        return Err(Error::invalid_argument(
            "limit",
            format!("limit must be greater than {} characters", ELLIPSIS.len()),
        )
        .with_operation("nant::text::ellipsis"));
    }

    if text.chars().count() <= limit {
        return Ok(text.to_string());
    }

    let mut shortened: String = text.chars().take(limit - ELLIPSIS.len()).collect();
    shortened.push_str(ELLIPSIS);
    Ok(shortened)
}

/// `name` followed by `description` wrapped at `width`, each line no longer
/// than `width` characters.
pub fn describe(name: &str, description: &str, width: usize) -> Result<String> {
    let mut label = name.to_string();
    let description = description.trim();
    if description.is_empty() {
        return Ok(label);
    }

    for line in wrap(description, width) {
        label.push('\n');
        label.push_str(&ellipsis(&line, width)?);
    }
    Ok(label)
}
