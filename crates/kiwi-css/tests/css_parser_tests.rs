//! Integration tests for the stylesheet parser and the CSSOM.

use kiwi_css::{Cssom, Declaration, Selector, Specificity, create_cssom};
use kiwi_dom::ElementData;

fn element(tag: &str, attrs: &[(&str, &str)]) -> ElementData {
    let mut data = ElementData::new(tag);
    for (name, value) in attrs {
        let _ = data.attrs.insert((*name).to_string(), (*value).to_string());
    }
    data
}

fn selectors(cssom: &Cssom) -> Vec<String> {
    cssom.rules().iter().map(|rule| rule.selector.to_string()).collect()
}

#[test]
fn test_single_rule() {
    let cssom = create_cssom("p { color: red; margin-top: 4px; }");
    assert_eq!(cssom.len(), 1);
    let rule = &cssom.rules()[0];
    assert_eq!(rule.selector, Selector::Type("p".to_string()));
    assert_eq!(rule.specificity, Specificity(0, 0, 1));
    assert_eq!(
        rule.declarations,
        vec![
            Declaration::new("color", "red"),
            Declaration::new("margin-top", "4px"),
        ]
    );
}

#[test]
fn test_selector_list_splits_into_rules() {
    let cssom = create_cssom("h1, .title, #top { font-weight: bold }");
    assert_eq!(selectors(&cssom), vec!["h1", ".title", "#top"]);
    assert!(
        cssom
            .rules()
            .iter()
            .all(|rule| rule.declarations == vec![Declaration::new("font-weight", "bold")])
    );
    let orders: Vec<usize> = cssom.rules().iter().map(|rule| rule.source_order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
}

#[test]
fn test_unsupported_selectors_dropped() {
    let cssom = create_cssom("div p, a:hover, .ok { color: red } ul > li { color: blue }");
    assert_eq!(selectors(&cssom), vec![".ok"]);
}

#[test]
fn test_comments_skipped() {
    let cssom = create_cssom("/* header */ p { /* inline */ color: red; } /* trailing");
    assert_eq!(cssom.len(), 1);
    assert_eq!(cssom.rules()[0].declarations, vec![Declaration::new("color", "red")]);
}

#[test]
fn test_at_rules_skipped() {
    let css = "@import url(x.css);\n\
               @media screen { p { color: blue; } }\n\
               p { color: red; }\n\
               @font-face { font-family: x; }";
    let cssom = create_cssom(css);
    assert_eq!(cssom.len(), 1);
    assert_eq!(cssom.rules()[0].declarations, vec![Declaration::new("color", "red")]);
}

#[test]
fn test_values_lowercased_outside_parens() {
    let cssom = create_cssom("P { COLOR: RGB(1, 2, 3); Font-Family: \"Open Sans\" }");
    assert_eq!(
        cssom.rules()[0].declarations,
        vec![
            Declaration::new("color", "rgb(1, 2, 3)"),
            Declaration::new("font-family", "\"Open Sans\""),
        ]
    );
}

#[test]
fn test_trailing_garbage_ignored() {
    let cssom = create_cssom("p { color: red } div");
    assert_eq!(cssom.len(), 1);
    assert!(create_cssom("").is_empty());
    assert!(create_cssom("   \n").is_empty());
}

#[test]
fn test_unclosed_block_runs_to_end() {
    let cssom = create_cssom("p { color: red; width: 10px");
    assert_eq!(cssom.rules()[0].declarations.len(), 2);
}

#[test]
fn test_matching_rules_sorted_by_specificity() {
    let cssom = create_cssom("#main { color: blue } .note { color: green } p { color: red } * { color: gray }");
    let el = element("p", &[("id", "main"), ("class", "note")]);
    let matched: Vec<String> = cssom
        .matching_rules(&el)
        .iter()
        .map(|rule| rule.selector.to_string())
        .collect();
    assert_eq!(matched, vec!["*", "p", ".note", "#main"]);
}

#[test]
fn test_matching_rules_keep_source_order_on_ties() {
    let cssom = create_cssom(".a { color: red } .b { color: blue } .a { color: green }");
    let el = element("div", &[("class", "b a")]);
    let values: Vec<&str> = cssom
        .matching_rules(&el)
        .iter()
        .map(|rule| rule.declarations[0].value.as_str())
        .collect();
    assert_eq!(values, vec!["red", "blue", "green"]);
}

#[test]
fn test_matching_rules_skip_non_matching() {
    let cssom = create_cssom("span { color: red } .x { color: blue }");
    assert!(cssom.matching_rules(&element("p", &[])).is_empty());
}

#[test]
fn test_append_places_other_sheet_last() {
    let mut ua = create_cssom("p { color: red } div { color: red }");
    ua.append(create_cssom("p { color: blue }"));
    assert_eq!(ua.len(), 3);
    assert_eq!(ua.rules()[2].source_order, 2);
    let values: Vec<&str> = ua
        .matching_rules(&element("p", &[]))
        .iter()
        .map(|rule| rule.declarations[0].value.as_str())
        .collect();
    assert_eq!(values, vec!["red", "blue"]);
}
