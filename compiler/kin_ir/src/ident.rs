/// Whether `text` matches `[A-Za-z_][A-Za-z0-9_]*`.
///
/// Routine names, parameters, locals, globals and condition binders must all
/// pass this check.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::is_identifier;

    #[test]
    fn accepts_identifiers() {
        for name in ["x", "_", "main", "indi_2", "_tmp", "ABC"] {
            assert!(is_identifier(name), "{name}");
        }
    }

    #[test]
    fn rejects_non_identifiers() {
        for name in ["", "2x", "a-b", "@I1@", "a b", "ñame", "x.y"] {
            assert!(!is_identifier(name), "{name}");
        }
    }
}
