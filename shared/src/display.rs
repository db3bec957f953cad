/// Human-readable name derived from a participant's email.
///
/// The local part is split on `.`, `_` and `-` and each piece is capitalized:
/// `jane.doe@example.com` becomes `Jane Doe`. Pieces are joined with single
/// spaces without collapsing, so `a..b@x` yields `A  B`.
pub fn participant_display_name(email: Option<&str>) -> String {
    let email = match email {
        Some(email) if !email.is_empty() => email,
        _ => return String::new(),
    };

    let local = email.split('@').next().unwrap_or_default();

    local
        .replace(['.', '_', '-'], " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
