//! End-to-end tests over realistic export fragments.
//!
//! The markup mirrors what Notion puts on the clipboard: one `div` per
//! block, text runs wrapped in `notranslate` containers and inline styling
//! carried by `notion-enable-hover` spans.

use notion_blocks::{
    ContainerKind, Error, ListKind, ListLevels, Node, NodeKind, ParseOptions, parse, parse_block,
    parse_html, parse_with,
};

fn text(s: &str) -> Node {
    Node::text(s)
}

fn container(kind: ContainerKind, children: Vec<Node>) -> Node {
    Node::container(kind, children)
}

fn bulleted(entry: &str) -> String {
    format!(
        r#"<div class="notion-selectable notion-bulleted_list-block"><div style="display:flex"><div class="notion-list-item-box-left"><div class="pseudoBefore"></div></div><div><div class="notranslate">{entry}</div></div></div></div>"#
    )
}

#[test]
fn test_header_scenario() {
    let nodes = parse(r#"<div class="notion-header-block">Hi</div>"#, true);
    assert_eq!(
        nodes,
        vec![container(ContainerKind::Heading1, vec![text("Hi")])]
    );
}

#[test]
fn test_three_bullets_merge_into_one_list() {
    let html = [
        r#"<div class="notion-bulleted_list-block">A</div>"#,
        r#"<div class="notion-bulleted_list-block">B</div>"#,
        r#"<div class="notion-bulleted_list-block">C</div>"#,
    ]
    .concat();

    let nodes = parse(&html, true);
    assert_eq!(
        nodes,
        vec![Node::List {
            kind: ListKind::Unordered,
            level: 0,
            children: vec![text("A"), text("B"), text("C")],
        }]
    );

    let flat = parse(&html, false);
    assert_eq!(flat.len(), 3);
    assert!(flat.iter().all(|n| n.kind() == NodeKind::UnorderedList));
}

#[test]
fn test_quote_text_run_scenario() {
    let html = r#"<div class="notion-quote-block"><div class="notranslate"><span class="notion-enable-hover" style="font-weight:600">Note:</span> keep going</div></div>"#;
    let nodes = parse(html, true);
    assert_eq!(
        nodes,
        vec![container(
            ContainerKind::Quote,
            vec![container(
                ContainerKind::Paragraph,
                vec![
                    container(ContainerKind::Bold, vec![text("Note:")]),
                    text(" keep going"),
                ]
            )]
        )]
    );
}

#[test]
fn test_missing_class_fails_classification() {
    let dom = parse_html("<div><span>no class</span></div>");
    let root = dom.roots()[0];
    assert_eq!(
        parse_block(&dom, root, ListLevels::default()),
        Err(Error::MissingClass { tag: "div".into() })
    );
}

#[test]
fn test_bad_root_is_skipped_and_siblings_survive() {
    let html = concat!(
        r#"<div class="notion-text-block">before</div>"#,
        // A malformed nested block discards its whole root.
        r#"<div class="notion-quote-block"><span class="notion-enable-hover">no style</span></div>"#,
        // Top-level matching is by substring, so this is still a callout.
        r#"<div class="notion-callout-block-v2">x</div>"#,
        r#"<section>unclassified</section>"#,
        r#"<div class="notion-text-block">after</div>"#,
    );
    let nodes = parse(html, true);
    assert_eq!(
        nodes,
        vec![
            container(ContainerKind::Paragraph, vec![text("before")]),
            container(ContainerKind::Callout, vec![text("x")]),
            container(ContainerKind::Paragraph, vec![text("after")]),
        ]
    );
}

#[test]
fn test_dividers_always_survive() {
    let html = concat!(
        r#"<div class="notion-callout-block"><div class="notion-divider-block"><div role="separator"></div></div><div class="notion-text-block"></div></div>"#,
        r#"<div class="notion-divider-block"></div>"#,
    );
    let nodes = parse(html, true);
    assert_eq!(
        nodes,
        vec![
            container(ContainerKind::Callout, vec![Node::Divider]),
            Node::Divider,
        ]
    );
}

#[test]
fn test_empty_top_level_blocks_are_kept() {
    let nodes = parse(r#"<div class="notion-text-block"></div>"#, true);
    assert_eq!(nodes, vec![container(ContainerKind::Paragraph, vec![])]);
}

#[test]
fn test_nested_bullets_rebuild_depth() {
    // Entry A has a child entry A.1; entry B follows at the top level.
    let nested = bulleted("A.1");
    let html = format!(
        r#"<div class="notion-selectable notion-bulleted_list-block"><div><div class="notranslate">A</div><div>{nested}</div></div></div>{}"#,
        bulleted("B")
    );

    let nodes = parse(&html, true);
    assert_eq!(
        nodes,
        vec![Node::List {
            kind: ListKind::Unordered,
            level: 0,
            children: vec![
                container(ContainerKind::ListItem, vec![text("A")]),
                Node::List {
                    kind: ListKind::Unordered,
                    level: 1,
                    children: vec![container(ContainerKind::ListItem, vec![text("A.1")])],
                },
                container(ContainerKind::ListItem, vec![text("B")]),
            ],
        }]
    );
}

#[test]
fn test_numbered_and_bulleted_runs_stay_apart() {
    let html = concat!(
        r#"<div class="notion-selectable notion-numbered_list-block"><div class="notranslate">one</div></div>"#,
        r#"<div class="notion-selectable notion-numbered_list-block"><div class="notranslate">two</div></div>"#,
        r#"<div class="notion-selectable notion-bulleted_list-block"><div class="notranslate">dot</div></div>"#,
    );
    let nodes = parse(html, true);
    let kinds: Vec<_> = nodes.iter().map(Node::kind).collect();
    assert_eq!(kinds, vec![NodeKind::OrderedList, NodeKind::UnorderedList]);
    assert_eq!(nodes[0].children().unwrap().len(), 2);
}

#[test]
fn test_rich_paragraph() {
    let html = concat!(
        r#"<div class="notion-selectable notion-text-block"><div><div class="notranslate">"#,
        r#"Read <a class="notion-link-token notion-focusable-token notion-enable-hover" href="https://docs.rs"><span class="link-annotation">the docs</span></a>, "#,
        r#"<span class="notion-enable-hover" style="font-style:italic">then</span> run "#,
        r#"<span class="notion-enable-hover" style="font-family:monospace;background-color:rgba(135,131,120,0.15)">cargo doc</span>"#,
        r#"</div></div></div>"#,
    );
    let nodes = parse(html, true);
    assert_eq!(
        nodes,
        vec![container(
            ContainerKind::Paragraph,
            vec![
                text("Read "),
                Node::Link {
                    href: Some("https://docs.rs".into()),
                    children: vec![text("the docs")],
                },
                text(", "),
                container(ContainerKind::Italic, vec![text("then")]),
                text(" run "),
                container(ContainerKind::InlineCode, vec![text("cargo doc")]),
            ]
        )]
    );
}

#[test]
fn test_code_block_keeps_literal_lines() {
    let html = concat!(
        r#"<div class="notion-selectable notion-code-block"><div><div role="button">Rust</div></div>"#,
        r#"<div class="line-numbers notion-code-block"><div class="notranslate">"#,
        r#"<span class="token keyword">let</span> x <span class="token operator">=</span> "a &lt; b";</div></div></div>"#,
    );
    let nodes = parse_with(html, &ParseOptions::default());
    assert_eq!(
        nodes,
        vec![container(
            ContainerKind::Code,
            vec![text("let"), text(" x "), text("="), text(r#" "a < b";"#)]
        )]
    );
}

#[test]
fn test_nested_highlight_spans_do_not_lose_code_block() {
    let html = concat!(
        r#"<div class="notion-selectable notion-code-block"><div class="line-numbers notion-code-block"><div class="notranslate">"#,
        r#"<span class="token template-string"><span class="token punctuation">`</span>x</span> y</div></div></div>"#,
        r#"<div class="notion-text-block">after</div>"#,
    );
    let nodes = parse(html, true);
    assert_eq!(
        nodes,
        vec![
            container(ContainerKind::Code, vec![Node::missing_text(), text(" y")]),
            container(ContainerKind::Paragraph, vec![text("after")]),
        ]
    );
}

#[test]
fn test_plain_styled_span_in_quote_is_dropped() {
    let html = r#"<div class="notion-quote-block"><span class="notion-enable-hover" style="color:red">red</span>tail</div>"#;
    assert_eq!(
        parse(html, false),
        vec![container(ContainerKind::Quote, vec![text("tail")])]
    );
}

#[test]
fn test_bookmark_and_image() {
    let html = concat!(
        r#"<div class="notion-bookmark-block"><div><a href="https://example.org"><div>Example</div></a></div></div>"#,
        r#"<div class="notion-image-block"><div><img src="https://cdn/x.png"></div></div>"#,
    );
    let nodes = parse(html, true);
    assert_eq!(nodes[0].kind(), NodeKind::Bookmark);
    assert_eq!(
        nodes[0].children().unwrap()[0].href(),
        Some("https://example.org")
    );
    assert_eq!(
        nodes[1],
        Node::Image {
            href: None,
            children: vec![Node::Image {
                href: Some("https://cdn/x.png".into()),
                children: vec![],
            }],
        }
    );
}

#[cfg(feature = "json")]
#[test]
fn test_json_output_shape() {
    let nodes = parse(
        r#"<div class="notion-bulleted_list-block"><div class="notranslate">A</div></div>"#,
        true,
    );
    let json = serde_json::to_value(&nodes).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "type": "ul",
            "ulLevel": 0,
            "children": [{
                "type": "li",
                "children": [{"type": "text", "children": [], "text": "A"}],
            }],
        }])
    );
}
