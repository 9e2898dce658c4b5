/// Lower-cases, trims and collapses internal whitespace to single spaces.
pub fn clean_label(raw: &str) -> String {
    raw.split_whitespace()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turns a display-form name into a canonical token: `"Bell  Pepper"` ->
/// `"bell_pepper"`.
pub fn to_token(name: &str) -> String {
    clean_label(&name.replace('_', " ")).replace(' ', "_")
}

/// Turns a canonical token into its display form: `"olive_oil"` ->
/// `"olive oil"`.
pub fn to_display(token: &str) -> String {
    clean_label(&token.replace('_', " "))
}

/// Case and separator insensitive comparison for preference tags such as
/// `"Gluten Free"` vs `"gluten_free"`.
pub fn same_tag(a: &str, b: &str) -> bool {
    to_token(a) == to_token(b)
}
