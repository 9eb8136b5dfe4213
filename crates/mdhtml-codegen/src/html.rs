//! HTML code generator.
//!
//! Walks the document AST and appends each node's fixed template to a single
//! output buffer. Text is copied through as-is: `<`, `&` and `>` in the
//! source are not entity-escaped.

use mdhtml_parser::ast::{Document, Node};

/// Generate HTML from a document AST.
pub fn generate(doc: &Document) -> String {
    let mut html = String::new();

    for node in &doc.nodes {
        generate_node(node, &mut html);
    }

    html
}

/// Append the HTML for one node and its children to `out`.
pub fn generate_node(node: &Node, out: &mut String) {
    match node {
        Node::Header { level, children } => {
            out.push_str(&format!("<h{level}>"));
            generate_children(children, out);
            out.push_str(&format!("</h{level}>\n"));
        }
        Node::Paragraph(children) => {
            out.push_str("<p>");
            generate_children(children, out);
            out.push_str("</p>\n\n");
        }
        Node::CodeBlock(raw) => {
            out.push_str("<pre><code>");
            out.push_str(raw);
            out.push_str("</code></pre>\n\n");
        }
        Node::Text(text) => out.push_str(text),
        Node::Italic(children) => {
            out.push_str("<em>");
            generate_children(children, out);
            out.push_str("</em>");
        }
        Node::Bold(children) => {
            out.push_str("<strong>");
            generate_children(children, out);
            out.push_str("</strong>");
        }
        Node::Code(code) => {
            out.push_str("<code>");
            out.push_str(code);
            out.push_str("</code>");
        }
        Node::Image { alt, url } => {
            out.push_str(&format!("<img src=\"{url}\" alt=\"{alt}\" />"));
        }
        Node::Link { text, url } => {
            out.push_str(&format!("<a href=\"{url}\">{text}</a>"));
        }
    }
}

fn generate_children(children: &[Node], out: &mut String) {
    for child in children {
        generate_node(child, out);
    }
}
