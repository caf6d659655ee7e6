/// Split text into words on runs of whitespace, discarding the empty pieces that
/// leading, trailing, or repeated separators would otherwise produce. Every returned
/// word is non-empty and contains no whitespace.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(char::is_whitespace)
        .filter(|word| !word.is_empty())
        .collect()
}
