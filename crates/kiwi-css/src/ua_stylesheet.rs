//! User-Agent Stylesheet
//!
//! [WHATWG HTML § 15 Rendering](https://html.spec.whatwg.org/multipage/rendering.html)
//!
//! "User agents are expected to have a default style sheet that presents elements
//! of HTML documents in ways consistent with general user expectations."
//!
//! The engine has a single cascade origin: the UA rules are placed in front
//! of the author rules, so an author rule wins a tie in specificity but a
//! more specific UA rule still beats a less specific author rule.

use std::sync::OnceLock;

use crate::cssom::Cssom;
use crate::parser::create_cssom;

/// [WHATWG HTML § 15.3 Rendering — Suggested default style sheet](https://html.spec.whatwg.org/multipage/rendering.html#the-css-user-agent-style-sheet-and-presentational-hints)
///
/// Lengths are in px because relative units are not supported.
pub const UA_CSS: &str = r"
/* Hidden elements */
head, link, meta, script, style, template, title {
    display: none;
}

/* Flow content */
address, article, aside, blockquote, body, center, dd, details, dialog,
div, dl, dt, fieldset, figcaption, figure, footer, form, h1, h2, h3, h4,
h5, h6, header, hgroup, hr, html, legend, main, menu, nav, ol, p, pre,
section, summary, ul {
    display: block;
}

li {
    display: list-item;
}

body {
    margin: 8px;
}

p, blockquote, figure, dl, ul, ol, pre {
    margin-top: 16px;
    margin-bottom: 16px;
}

blockquote, figure {
    margin-left: 40px;
    margin-right: 40px;
}

ul, ol {
    padding-left: 40px;
}

dd {
    margin-left: 40px;
}

/* Headings */
h1 { font-size: 32px; margin-top: 21px; margin-bottom: 21px; }
h2 { font-size: 24px; margin-top: 20px; margin-bottom: 20px; }
h3 { font-size: 19px; margin-top: 19px; margin-bottom: 19px; }
h4 { font-size: 16px; margin-top: 21px; margin-bottom: 21px; }
h5 { font-size: 13px; margin-top: 22px; margin-bottom: 22px; }
h6 { font-size: 11px; margin-top: 25px; margin-bottom: 25px; }

h1, h2, h3, h4, h5, h6, b, strong, th, dt {
    font-weight: bold;
}

h1 { line-height: 38px; }
h2 { line-height: 29px; }

/* Phrasing content */
em, i, cite, var, dfn, address {
    font-style: italic;
}

u, ins {
    text-decoration: underline;
}

s, strike, del {
    text-decoration: line-through;
}

a {
    color: #0000ee;
    text-decoration: underline;
}

code, kbd, pre, samp, tt {
    font-family: monospace;
}

small {
    font-size: 13px;
}

big {
    font-size: 19px;
}

center {
    text-align: center;
}

hr {
    margin-top: 8px;
    margin-bottom: 8px;
    border: 1px solid gray;
}
";

/// The user-agent stylesheet, parsed once on first use.
#[must_use]
pub fn ua_stylesheet() -> &'static Cssom {
    static STYLESHEET: OnceLock<Cssom> = OnceLock::new();
    STYLESHEET.get_or_init(|| create_cssom(UA_CSS))
}
