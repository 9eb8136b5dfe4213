//! mdhtml Code Generator
//!
//! Renders the Markdown AST into an HTML fragment. Rendering is a pure fold
//! over the tree: it cannot fail and never touches the AST it reads.
//!
//! ```text
//! source → Parser::parse() → Document → render() → String
//! ```

pub mod html;

use mdhtml_parser::ast::Document;
use mdhtml_parser::{ParseError, Parser};

/// Output file name used when the caller does not choose one.
pub const DEFAULT_OUTPUT: &str = "output.html";

/// Render a document AST into an HTML string.
pub fn render(doc: &Document) -> String {
    let html = html::generate(doc);
    log::debug!("rendered {} nodes into {} bytes", doc.len(), html.len());
    html
}

/// Run the whole pipeline: tokenize, parse and render.
///
/// Nothing is rendered unless the parse succeeds, so a syntax error never
/// yields partial output.
pub fn convert(source: &str) -> Result<String, ParseError> {
    let doc = Parser::parse(source)?;
    Ok(render(&doc))
}

/// Wrap a rendered fragment in a minimal HTML5 page.
pub fn standalone(body: &str, title: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n");
    html.push_str(&format!("  <title>{title}</title>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(body);
    if !body.is_empty() && !body.ends_with('\n') {
        html.push('\n');
    }
    html.push_str("</body>\n</html>\n");
    html
}
