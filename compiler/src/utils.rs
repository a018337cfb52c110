pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

/// Splits free text into lines no wider than `width` characters.
///
/// Newlines count as spaces and whitespace runs collapse. A word longer
/// than `width` is cut into `width`-sized pieces, each continued with `-`.
/// Missing or blank text yields no lines; `width == 0` keeps one line.
pub fn wrap_text(text: Option<&str>, width: usize) -> Vec<String> {
    let words = text.unwrap_or("").split_whitespace();
    if width == 0 {
        let line = words.collect::<Vec<_>>().join(" ");
        return if line.is_empty() { Vec::new() } else { vec![line] };
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in words {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            let mut piece: String = word.into_iter().collect();
            piece.push('-');
            lines.push(piece);
            word = rest;
        }
        if word.is_empty() {
            continue;
        }

        if current.is_empty() {
            current = word.iter().collect();
            current_len = word.len();
        } else if current_len + 1 + word.len() <= width {
            current.push(' ');
            current.extend(word.iter());
            current_len += 1 + word.len();
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.iter().collect();
            current_len = word.len();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
