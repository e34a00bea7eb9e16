//! Greedy word wrapping by rendered width

/// Split `text` into lines no wider than `first` for the first line and
/// `rest` for every following line, as measured by `measure`
///
/// Breaks at whitespace; a word wider than the limit is split between
/// characters. Runs of whitespace collapse to a single space. Always returns
/// at least one line, and every line holds at least one character even when
/// that character alone is wider than the limit.
#[must_use]
pub fn wrap_text(text: &str, first: f32, rest: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        loop {
            let limit = if lines.is_empty() { first } else { rest };
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if measure(&candidate) <= limit {
                current = candidate;
                break;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                continue;
            }

            let split_at = longest_fitting_prefix(word, limit, &measure);
            lines.push(word[..split_at].to_string());
            word = &word[split_at..];
            if word.is_empty() {
                break;
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Byte length of the longest prefix of `word` that fits `limit`, at least one character
fn longest_fitting_prefix(word: &str, limit: f32, measure: &impl Fn(&str) -> f32) -> usize {
    let mut fit = word.chars().next().map_or(word.len(), char::len_utf8);
    for (i, c) in word.char_indices().skip(1) {
        let end = i + c.len_utf8();
        if measure(&word[..end]) > limit {
            break;
        }
        fit = end;
    }
    fit
}
