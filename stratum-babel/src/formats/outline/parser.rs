//! Outline parsing (indented text → Node)
//!
//! The parser keeps a stack of open blocks, each tagged with the indent of
//! the line that opened it. The document root sits at the bottom with indent
//! `-1`. For every line, blocks are closed while the line's indent is less
//! than or equal to the top block's indent; whatever is left on top is the
//! line's parent. A child may therefore be indented by any amount greater
//! than its parent, but siblings must share their indent exactly.
//!
//! Closed blocks are attached to their parent as they are popped, so the
//! stack owns every unfinished container and nothing is shared.
//!
//! # Line Grammar
//!
//! After trimming, a line is one of (checked in this order):
//!
//! | Line            | Meaning                                              |
//! |-----------------|------------------------------------------------------|
//! | `-`             | anonymous block appended to the parent's leaf bucket |
//! | `- value`       | leaf `value` appended to the parent's leaf bucket    |
//! | `key:`          | keyed block                                          |
//! | `key: value`    | keyed scalar entry                                   |
//! | `value`         | leaf `value` appended to the parent's leaf bucket    |
//!
//! Blank lines are skipped and carry no meaning. Every block is opened as a
//! mapping; whether it was really a list is settled afterwards by
//! [`crate::common::normalize`].

use crate::error::ParseError;
use crate::ir::nodes::{Mapping, Node};

/// Parser settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Require every child of a block to use the same indent as its first
    /// child. Off by default: any indent deeper than the parent nests.
    pub strict_dedent: bool,
}

/// Parses a sequence of raw lines into an unnormalized tree.
pub fn parse<I, S>(lines: I) -> Result<Node, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_with_options(lines, &ParseOptions::default())
}

/// Parses a whole document held in a string.
pub fn parse_str(source: &str) -> Result<Node, ParseError> {
    parse(source.lines())
}

/// Parses a sequence of raw lines with explicit options.
pub fn parse_with_options<I, S>(lines: I, options: &ParseOptions) -> Result<Node, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = OutlineParser::new(options);
    for (index, line) in lines.into_iter().enumerate() {
        parser.feed(index + 1, line.as_ref())?;
    }
    parser.finish()
}

/// What a trimmed line asks the parser to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    Item,
    Block(&'a str),
    Entry(&'a str, &'a str),
    Leaf(&'a str),
}

fn classify(content: &str) -> LineKind<'_> {
    if content == "-" {
        return LineKind::Item;
    }
    if let Some(value) = content.strip_prefix("- ") {
        return LineKind::Leaf(value.trim_start());
    }
    if let Some((key, value)) = content.split_once(": ") {
        return LineKind::Entry(key.trim_end(), value.trim_start());
    }
    if let Some(key) = content.strip_suffix(':') {
        return LineKind::Block(key.trim_end());
    }
    LineKind::Leaf(content)
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Where a finished block goes when it is closed
#[derive(Debug)]
enum Slot {
    Root,
    Key(String),
    Item,
}

#[derive(Debug)]
struct Frame {
    indent: isize,
    slot: Slot,
    mapping: Mapping,
    child_indent: Option<usize>,
}

impl Frame {
    fn new(indent: isize, slot: Slot) -> Self {
        Frame {
            indent,
            slot,
            mapping: Mapping::new(),
            child_indent: None,
        }
    }
}

struct OutlineParser<'o> {
    options: &'o ParseOptions,
    stack: Vec<Frame>,
    content_lines: usize,
}

impl<'o> OutlineParser<'o> {
    fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            stack: vec![Frame::new(-1, Slot::Root)],
            content_lines: 0,
        }
    }

    fn feed(&mut self, line_number: usize, raw: &str) -> Result<(), ParseError> {
        let content = raw.trim();
        if content.is_empty() {
            return Ok(());
        }
        self.content_lines += 1;

        let indent = indent_of(raw);
        self.close_blocks_at(indent);

        let parent = self
            .stack
            .last_mut()
            .ok_or_else(|| ParseError::malformed(line_number, "no open block"))?;
        let column = indent as isize;
        if column <= parent.indent {
            return Err(ParseError::malformed(
                line_number,
                "line is not nested under any open block",
            ));
        }
        if matches!(parent.slot, Slot::Root) && indent != 0 {
            return Err(ParseError::malformed(
                line_number,
                format!("top-level line must start at column 0, found indent {indent}"),
            ));
        }
        if self.options.strict_dedent {
            match parent.child_indent {
                Some(expected) if expected != indent => {
                    return Err(ParseError::malformed(
                        line_number,
                        format!("expected indent {expected} for sibling, found {indent}"),
                    ));
                }
                Some(_) => {}
                None => parent.child_indent = Some(indent),
            }
        }

        let kind = classify(content);
        tracing::trace!(line = line_number, indent, ?kind, "outline line");

        match kind {
            LineKind::Item => {
                self.stack.push(Frame::new(column, Slot::Item));
            }
            LineKind::Block(key) => {
                ensure_unique(&parent.mapping, key, line_number)?;
                self.stack
                    .push(Frame::new(column, Slot::Key(key.to_string())));
            }
            LineKind::Entry(key, value) => {
                ensure_unique(&parent.mapping, key, line_number)?;
                parent.mapping.insert(key, Node::scalar(value));
            }
            LineKind::Leaf(value) => {
                parent.mapping.push_leaf(Node::scalar(value));
            }
        }
        Ok(())
    }

    /// Closes every block whose indent is at or beyond `indent`.
    fn close_blocks_at(&mut self, indent: usize) {
        let column = indent as isize;
        while self.stack.len() > 1 && self.stack.last().map_or(false, |f| column <= f.indent) {
            if let Some(frame) = self.stack.pop() {
                self.attach(frame);
            }
        }
    }

    fn attach(&mut self, frame: Frame) {
        let Some(parent) = self.stack.last_mut() else {
            return;
        };
        let node = Node::Mapping(frame.mapping);
        match frame.slot {
            Slot::Key(key) => {
                parent.mapping.insert(key, node);
            }
            Slot::Item => parent.mapping.push_leaf(node),
            Slot::Root => {}
        }
    }

    fn finish(mut self) -> Result<Node, ParseError> {
        if self.content_lines == 0 {
            return Err(ParseError::EmptyDocument);
        }
        while self.stack.len() > 1 {
            if let Some(frame) = self.stack.pop() {
                self.attach(frame);
            }
        }
        let root = self.stack.pop().ok_or(ParseError::EmptyDocument)?;
        tracing::debug!(
            lines = self.content_lines,
            top_level = root.mapping.len(),
            "parsed outline"
        );
        Ok(Node::Mapping(root.mapping))
    }
}

fn ensure_unique(mapping: &Mapping, key: &str, line_number: usize) -> Result<(), ParseError> {
    if mapping.contains_key(key) {
        return Err(ParseError::malformed(
            line_number,
            format!("key '{key}' is already defined in this block"),
        ));
    }
    Ok(())
}
