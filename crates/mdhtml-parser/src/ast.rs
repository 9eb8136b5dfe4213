//! Abstract Syntax Tree for the Markdown subset.
//!
//! A single closed enum covers both families. Block nodes sit at the top of a
//! `Document`; inline nodes live inside headers, paragraphs and emphasis.
//! `Image` is an inline node that the block grammar can also produce at top
//! level.

/// A complete parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// `# text`: level is the number of leading `#` tokens.
    Header { level: usize, children: Vec<Node> },

    /// One physical line of inline content.
    Paragraph(Vec<Node>),

    /// Everything between two ```` ``` ```` fences, verbatim.
    CodeBlock(String),

    /// A single content token.
    Text(String),

    /// `*text*` or `_text_`
    Italic(Vec<Node>),

    /// `**text**` or `__text__`
    Bold(Vec<Node>),

    /// `` `code` ``, verbatim.
    Code(String),

    /// `![alt](url)`
    Image { alt: String, url: String },

    /// `[text](url)`
    Link { text: String, url: String },
}

impl Node {
    /// Header, paragraph or code block.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Node::Header { .. } | Node::Paragraph(_) | Node::CodeBlock(_)
        )
    }

    pub fn is_inline(&self) -> bool {
        !self.is_block()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_families() {
        assert!(Node::Paragraph(Vec::new()).is_block());
        assert!(Node::CodeBlock(String::new()).is_block());
        assert!(Node::Header {
            level: 1,
            children: Vec::new()
        }
        .is_block());

        assert!(Node::Text("a".into()).is_inline());
        assert!(Node::Italic(Vec::new()).is_inline());
        assert!(Node::Bold(Vec::new()).is_inline());
        assert!(Node::Code("x".into()).is_inline());
        assert!(Node::Link {
            text: "a".into(),
            url: "b".into()
        }
        .is_inline());
        assert!(Node::Image {
            alt: "a".into(),
            url: "b".into()
        }
        .is_inline());
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::default();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }
}
