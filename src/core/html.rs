// src/core/html.rs
// Low-level HTML string manipulation helpers.
// These are deliberately naive but tailored to the Alfresco listing markup.
// They operate case-insensitively on ASCII tag/attribute names.

/// Find the next complete tag block from `from` onwards, case-insensitive.
/// A block is from the start of the opening tag to the end of the closing tag.
///
/// Example: `<tr ...> ... </tr>` or `<td ...> ... </td>`
pub fn next_tag_block_ci(
    s: &str,
    open_tag: &str,
    close_tag: &str,
    from: usize,
) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let open_lc = to_lower(open_tag);
    let close_lc = to_lower(close_tag);

    let start = lc.get(from..)?.find(&open_lc)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&close_lc)?;
    let end = open_end + end_rel + close_tag.len();
    Some((start, end))
}

/// Extract an attribute value from a tag opener like `<a href="..." target=new>`.
/// Handles double-quoted, single-quoted and bare values.
pub fn attr_value(opener: &str, attr: &str) -> Option<String> {
    let lc = to_lower(opener);
    let needle = join!(to_lower(attr), "=");
    let pos = lc.find(&needle)?;
    let val = opener[pos + needle.len()..].trim_start();
    let (quote, start_off) = match val.as_bytes().first() {
        Some(b'"') => ('"', 1),
        Some(b'\'') => ('\'', 1),
        _ => ('\0', 0),
    };
    let end = if quote != '\0' {
        val[start_off..].find(quote).map(|e| start_off + e)
    } else {
        val.find(|c: char| c.is_ascii_whitespace() || c == '>')
    }
    .unwrap_or(val.len());
    Some(val[start_off..end].to_string())
}

/// The tag opener `<tag attr=...>` that starts `block`.
pub fn opener(block: &str) -> &str {
    match block.find('>') {
        Some(gt) => &block[..gt + 1],
        None => block,
    }
}

/// Remove all HTML tags `<...>` from the string, then collapse whitespace.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    crate::core::sanitize::normalize_ws(&out)
}

/// Fast ASCII-only lowercasing for tag/attribute matching.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}
