use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// The prompt followed by the line as the user typed it.
    Echo,
    Output,
    Welcome,
    /// Placeholder that an asynchronous handler replaces once it resolves.
    Loading,
    Error,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Strong(String),
    Link { label: String, target: String },
    Break,
    Preformatted(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
    pub segments: Vec<Segment>,
}

impl Block {
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) | Segment::Strong(text) => out.push_str(text),
                Segment::Link { label, .. } => out.push_str(label),
                Segment::Break => out.push('\n'),
                Segment::Preformatted(text) => {
                    if !out.is_empty() && !out.ends_with('\n') {
                        out.push('\n');
                    }
                    out.push_str(text);
                }
            }
        }
        out
    }

    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Link { label, target } => Some((label.as_str(), target.as_str())),
            _ => None,
        })
    }
}

/// Fluent builder for block content.
#[derive(Debug, Clone, Default)]
pub struct Content {
    segments: Vec<Segment>,
}

impl Content {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Text(text.into()));
        self
    }

    pub fn strong(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Strong(text.into()));
        self
    }

    pub fn link(mut self, label: impl Into<String>, target: impl Into<String>) -> Self {
        self.segments.push(Segment::Link {
            label: label.into(),
            target: target.into(),
        });
        self
    }

    pub fn line_break(mut self) -> Self {
        self.segments.push(Segment::Break);
        self
    }

    pub fn preformatted(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Preformatted(text.into()));
        self
    }

    pub fn build(self) -> Vec<Segment> {
        self.segments
    }
}

pub trait OutputSink {
    fn append(&mut self, kind: BlockKind, segments: Vec<Segment>) -> BlockId;

    fn clear(&mut self);

    /// Returns `false` when the block is gone, e.g. after a `clear`.
    fn replace(&mut self, id: BlockId, kind: BlockKind, segments: Vec<Segment>) -> bool;
}

#[derive(Debug, Clone)]
pub struct Transcript {
    next_id: u64,
    blocks: Vec<Block>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            blocks: Vec::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn last(&self) -> Option<&Block> {
        self.blocks.last()
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    pub fn push_text(&mut self, id: BlockId, c: char) -> bool {
        let Some(block) = self.blocks.iter_mut().find(|block| block.id == id) else {
            return false;
        };
        match block.segments.last_mut() {
            Some(Segment::Text(text)) => text.push(c),
            _ => block.segments.push(Segment::Text(c.to_string())),
        }
        true
    }

    pub fn echo(&mut self, prompt: &Arc<str>, raw_line: &str) -> BlockId {
        self.append(
            BlockKind::Echo,
            Content::new()
                .strong(prompt.to_string())
                .text(format!(" {raw_line}"))
                .build(),
        )
    }

    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputSink for Transcript {
    fn append(&mut self, kind: BlockKind, segments: Vec<Segment>) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        self.blocks.push(Block { id, kind, segments });
        id
    }

    fn clear(&mut self) {
        // Ids keep counting so late replacements cannot hit a new block.
        self.blocks.clear();
    }

    fn replace(&mut self, id: BlockId, kind: BlockKind, segments: Vec<Segment>) -> bool {
        match self.blocks.iter_mut().find(|block| block.id == id) {
            Some(block) => {
                block.kind = kind;
                block.segments = segments;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn block_ids_are_monotonic_across_clear() {
        let mut transcript = Transcript::new();
        let first = transcript.append(BlockKind::Output, Content::new().text("a").build());
        transcript.clear();
        let second = transcript.append(BlockKind::Output, Content::new().text("b").build());
        assert!(second > first);
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn replace_mutates_in_place_and_keeps_order() {
        let mut transcript = Transcript::new();
        let loading = transcript.append(BlockKind::Loading, Content::new().text("...").build());
        transcript.append(BlockKind::Output, Content::new().text("after").build());

        assert!(transcript.replace(
            loading,
            BlockKind::Output,
            Content::new().text("done").build()
        ));
        let texts: Vec<String> = transcript.iter().map(Block::plain_text).collect();
        assert_eq!(texts, vec!["done".to_string(), "after".to_string()]);
    }

    #[test]
    fn replace_after_clear_is_rejected() {
        let mut transcript = Transcript::new();
        let loading = transcript.append(BlockKind::Loading, Vec::new());
        transcript.clear();
        assert!(!transcript.replace(loading, BlockKind::Output, Vec::new()));
        assert!(transcript.is_empty());
    }

    #[test]
    fn plain_text_flattens_segments() {
        let block = Block {
            id: BlockId(1),
            kind: BlockKind::Output,
            segments: Content::new()
                .strong("Email:")
                .text(" ")
                .link("me@example.com", "mailto:me@example.com")
                .line_break()
                .text("bye")
                .build(),
        };
        assert_eq!(block.plain_text(), "Email: me@example.com\nbye");
        assert_eq!(
            block.links().collect::<Vec<_>>(),
            vec![("me@example.com", "mailto:me@example.com")]
        );
    }

    #[test]
    fn push_text_extends_trailing_text_segment() {
        let mut transcript = Transcript::new();
        let id = transcript.append(BlockKind::Welcome, Vec::new());
        for c in "hey".chars() {
            assert!(transcript.push_text(id, c));
        }
        assert_eq!(transcript.get(id).map(Block::plain_text), Some("hey".into()));
    }

    #[test]
    fn echo_prefixes_prompt() {
        let mut transcript = Transcript::new();
        let prompt: Arc<str> = "guest@folio:~$".into();
        transcript.echo(&prompt, "About ");
        assert_eq!(transcript.plain_text(), "guest@folio:~$ About ");
    }
}
