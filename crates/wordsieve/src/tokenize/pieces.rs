//! # Subword Piece Utilities

/// The sentencepiece word-boundary marker (U+2581).
pub const PIECE_WORD_MARKER: char = '\u{2581}';

/// Concatenate subword pieces into text.
///
/// Word markers become spaces, and a single leading space is trimmed.
pub fn join_pieces<S: AsRef<str>>(pieces: &[S]) -> String {
    let mut text = String::new();
    for piece in pieces {
        text.push_str(piece.as_ref());
    }
    let text = text.replace(PIECE_WORD_MARKER, " ");
    match text.strip_prefix(' ') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_pieces() {
        let empty: &[&str] = &[];
        assert_eq!(join_pieces(empty), "");
        assert_eq!(join_pieces(&["\u{2581}안녕", "하세요", "\u{2581}반", "가워"]), "안녕하세요 반가워");
        assert_eq!(join_pieces(&["ab", "c"]), "abc");
    }
}
