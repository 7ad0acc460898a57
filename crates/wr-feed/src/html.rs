//! Plain-text cleanup of search snippets.

/// Entities decoded after tag removal.
const ENTITIES: &[(&str, char)] = &[
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#39;", '\''),
    ("&apos;", '\''),
    ("&nbsp;", ' '),
];

/// Removes HTML tags, decodes common entities and collapses whitespace.
///
/// A tag is a `<` followed by at least one character and the next `>`. A `<` with no
/// later `>`, and an empty `<>`, are kept as text. Tags are dropped without
/// inserting a separator, so highlighted fragments such as `<span>Kant</span>ian`
/// stay one word.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(c) = rest.chars().next() {
        if c == '<'
            && let Some(end) = rest[1..].find('>')
            && end > 0
        {
            rest = &rest[end + 2..];
            continue;
        }

        if c == '&'
            && let Some((entity, decoded)) = ENTITIES.iter().find(|(e, _)| rest.starts_with(e))
        {
            text.push(*decoded);
            rest = &rest[entity.len()..];
            continue;
        }

        text.push(c);
        rest = &rest[c.len_utf8()..];
    }

    collapse_whitespace(&text)
}

/// Replaces whitespace runs with single spaces and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
