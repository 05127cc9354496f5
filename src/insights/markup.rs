//! Handling for model output before it is displayed.
//!
//! Model text is untrusted. Everything is HTML-escaped, then only bare
//! `<ul>`/`<li>` tags (no attributes) are restored.

const ALLOWED_TAGS: [&str; 4] = ["ul", "/ul", "li", "/li"];

/// Remove a surrounding Markdown code fence, if the model added one anyway.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }
    // Drop the opening fence line (which may carry a language tag).
    let body = match trimmed.find('\n') {
        Some(idx) => &trimmed[idx + 1..],
        None => return "",
    };
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Decode the named entities `escape_html` produces plus decimal and hex
/// character references. Anything else starting with `&` is left as is.
pub fn unescape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match decode_entity(tail) {
            Some((c, len)) => {
                out.push(c);
                rest = &tail[len..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decode one entity at the start of `s`, returning the character and the
/// number of bytes consumed.
fn decode_entity(s: &str) -> Option<(char, usize)> {
    let end = s.get(..12).unwrap_or(s).find(';')?;
    let name = &s[1..end];
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)?
        }
    };
    Some((c, end + 1))
}

/// Escape everything, then re-enable the list tags the prompt asks for.
///
/// Entities the model already wrote are decoded first so they are not
/// escaped twice.
pub fn sanitize(text: &str) -> String {
    let mut out = escape_html(&unescape_html(strip_code_fences(text)));
    for tag in ALLOWED_TAGS {
        out = restore_tag(&out, tag);
    }
    out
}

/// Replace escaped `&lt;tag&gt;` (any ASCII case) with a canonical `<tag>`.
fn restore_tag(s: &str, tag: &str) -> String {
    let escaped = format!("&lt;{}&gt;", tag);
    let lower = s.to_ascii_lowercase();
    let mut out = String::with_capacity(s.len());
    let mut pos = 0;
    while let Some(found) = lower[pos..].find(&escaped) {
        let start = pos + found;
        out.push_str(&s[pos..start]);
        out.push('<');
        out.push_str(tag);
        out.push('>');
        pos = start + escaped.len();
    }
    out.push_str(&s[pos..]);
    out
}

/// Plain-text observations from sanitized markup.
///
/// Uses the `<li>` items when present; otherwise falls back to non-empty
/// lines with any leading bullet character removed.
pub fn observations(markup: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut rest = markup;
    while let Some(open) = rest.find("<li>") {
        let after = &rest[open + "<li>".len()..];
        let (item, next) = match after.find("</li>") {
            Some(close) => (&after[..close], &after[close + "</li>".len()..]),
            None => (after, ""),
        };
        let text = unescape_html(&strip_tags(item));
        let text = text.trim();
        if !text.is_empty() {
            items.push(text.to_string());
        }
        rest = next;
    }

    if !items.is_empty() {
        return items;
    }

    remove_markup(&unescape_html(&strip_tags(markup)))
        .lines()
        .map(|line| line.trim().trim_start_matches(['-', '*', '•']).trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

/// Drop anything that still looks like a tag, e.g. `<li class="x">`.
fn remove_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                rest = &rest[open..];
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

fn strip_tags(s: &str) -> String {
    let mut out = s.to_string();
    for tag in ALLOWED_TAGS {
        out = out.replace(&format!("<{}>", tag), "\n");
    }
    out
}
