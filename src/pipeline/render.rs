// src/pipeline/render.rs

//! Digest document rendering.
//!
//! Assembles one self-contained HTML page from the run's digest
//! entries: a fixed style/MathJax preamble, one list item per entry,
//! and a fixed footer. No pagination, no appending across runs.

use crate::models::DigestEntry;

/// Document preamble. `{category}` is the only placeholder.
const HEADER_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Selected Articles from arXiv ({category})</title>
    <style>
        .highlight {
            background-color: yellow;
        }
    </style>
    <script type="text/x-mathjax-config">
        MathJax.Hub.Config({
          tex2jax: {
            inlineMath: [ ['$','$'] ],
            processEscapes: true
          }
        });
    </script>
    <script type="text/javascript"
            src="https://cdn.mathjax.org/mathjax/latest/MathJax.js?config=TeX-AMS-MML_HTMLorMML">
    </script>
</head>
<body>
    <h1>Selected Articles from arXiv ({category})</h1>
    <ul>
"#;

/// One list item. Placeholders: `{url}`, `{title}`, `{summary}`.
const ITEM_TEMPLATE: &str = r#"    <li>
        <a href="{url}" target="_blank">{title}</a>
        <p>{summary}</p>
    </li>
"#;

const FOOTER: &str = "    </ul>\n</body>\n</html>\n";

/// Render the digest document for the given entries, in order.
pub fn render_digest(category: &str, entries: &[DigestEntry]) -> String {
    let mut html = HEADER_TEMPLATE.replace("{category}", category);

    for entry in entries {
        html.push_str(
            &ITEM_TEMPLATE
                .replace("{url}", &entry.link)
                .replace("{title}", &entry.title)
                .replace("{summary}", &entry.summary),
        );
    }

    html.push_str(FOOTER);
    html
}
