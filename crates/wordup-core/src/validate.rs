/// True iff `s` is non-empty and made only of ASCII letters
pub fn is_valid_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}
