use super::Measure;
use crate::units::Pt;
use tracing::trace;

/// A run of consecutive words that will be rendered together on one line. Lines borrow
/// from the word sequence they were partitioned from and only live for a single layout
/// pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'w, 'a> {
    /// The words on this line, always at least one
    pub words: &'w [&'a str],
    /// Whether this line reaches the end of the text. The last line is never justified.
    pub is_last: bool,
}

impl Line<'_, '_> {
    /// The line with a single space between each word
    pub fn plain(&self) -> String {
        self.words.join(" ")
    }
}

/// Greedily break `words` into lines no wider than `target_width`.
///
/// Each line is grown one word at a time, measuring the space-separated candidate
/// each time, until the words run out or the candidate becomes too wide; the word
/// that made it too wide is handed to the next line. This is a single forward pass
/// with no look-ahead, so it does not try to even out raggedness between lines.
///
/// The first word of a line is never moved, so a word that is wider than
/// `target_width` on its own still gets a line to itself and overflows it. Likewise a
/// non-positive `target_width` puts every word on its own line.
pub fn partition<'w, 'a, M>(words: &'w [&'a str], target_width: Pt, measure: &M) -> Vec<Line<'w, 'a>>
where
    M: Measure + ?Sized,
{
    let mut lines = Vec::new();
    let mut start = 0;

    while start < words.len() {
        let count = words_that_fit(&words[start..], target_width, measure);
        let end = start + count;

        let line = Line {
            words: &words[start..end],
            is_last: end == words.len(),
        };
        trace!(start, count, is_last = line.is_last, "partitioned line");
        lines.push(line);

        start = end;
    }

    lines
}

/// How many of the leading `words` fit on one line. Always at least 1 when `words`
/// isn't empty.
fn words_that_fit<M>(words: &[&str], target_width: Pt, measure: &M) -> usize
where
    M: Measure + ?Sized,
{
    let Some((first, rest)) = words.split_first() else {
        return 0;
    };

    let mut candidate = first.to_string();
    for (added, word) in rest.iter().enumerate() {
        candidate.push(' ');
        candidate.push_str(word);

        if measure.measure(&candidate) > target_width {
            // the word just added overflows, leave it for the next line
            return added + 1;
        }
    }

    words.len()
}
