//! Emoji shortcode substitution.
//!
//! Rewrites `:name:` tokens to their Unicode glyph using the gemoji
//! shortcode registry. Unrecognized tokens pass through untouched.

/// Replaces every recognized `:name:` shortcode in `input` with its glyph.
///
/// Pure and total over any input. An unrecognized token is copied through
/// unchanged, and its closing colon may open the next token. Idempotent:
/// glyphs contain no colons, so a second pass finds nothing to rewrite.
pub fn emojize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find(':') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let Some(end) = after.find(':') else {
            // lone colon, no token can follow
            out.push_str(&rest[start..]);
            return out;
        };

        match emojis::get_by_shortcode(&after[..end]) {
            Some(emoji) => {
                out.push_str(emoji.as_str());
                rest = &after[end + 1..];
            }
            None => {
                out.push(':');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
