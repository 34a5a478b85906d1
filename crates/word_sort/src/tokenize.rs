/// Bytes that separate words: space, `\t`, `\n`, `\v`, `\f` and `\r`.
fn is_separator(byte: &u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Lowercases `raw` and drops every byte that is not an ASCII letter or
/// digit. Returns `None` when nothing is left.
pub fn normalize_word(raw: &[u8]) -> Option<String> {
    let word: String = raw
        .iter()
        .filter(|b| b.is_ascii_alphanumeric())
        .map(|b| char::from(b.to_ascii_lowercase()))
        .collect();
    (!word.is_empty()).then_some(word)
}

/// Splits on ASCII whitespace and normalizes each piece, skipping pieces
/// that normalize to nothing. Input need not be valid UTF-8.
pub fn tokenize(text: &[u8]) -> impl Iterator<Item = String> + '_ {
    text.split(is_separator).filter_map(normalize_word)
}
