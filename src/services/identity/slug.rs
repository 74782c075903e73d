/// Lowercase the input and keep only `a-z`. Pure and total; an empty
/// result is the caller's problem (they substitute a fallback fragment).
pub fn slugify(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}
