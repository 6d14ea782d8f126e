use std::sync::OnceLock;

use regex::Regex;

fn parenthetical() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\([^()]*\)").expect("must be valid regex"))
}

/// Strip parenthetical asides from text before synthesis
///
/// Removes every parenthesized span including the parentheses, then trims
/// surrounding whitespace. Stage directions and annotation artifacts must
/// never be vocalized. Callers reject the request when the result is empty.
pub fn sanitize(text: &str) -> String {
    let mut cleaned = text.to_string();

    // Innermost spans are removed first; repeat until no span remains so
    // nested parentheses collapse completely.
    loop {
        let next = parenthetical().replace_all(&cleaned, "").into_owned();
        if next == cleaned {
            break;
        }
        cleaned = next;
    }

    cleaned.trim().to_string()
}
