//! Renderer for the small markdown subset used by document content.
//!
//! Recognized, per line (after leading whitespace):
//! - fenced code blocks opened and closed by three backticks, with an optional
//!   language tag on the opening fence
//! - `## ` and `### ` headings
//! - `- ` unordered and `1. ` ordered list items (flat, never nested)
//! - blank lines as paragraph breaks
//!
//! and, inside headings, list items and paragraphs, `**bold**` spans.
//!
//! Anything else is kept as literal paragraph text. Rendering never fails.
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Language assigned to a fence without a tag.
pub const DEFAULT_LANGUAGE: &str = "dart";

const FENCE: &str = "```";

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\. (.*)$").expect("valid regex"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex"));

/// One renderable unit of a document, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, text: RichText },
    Paragraph { text: RichText },
    ListItem { kind: ListKind, text: RichText },
    Code { code: String, language: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// Plain text plus the byte ranges that are emphasized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RichText {
    pub text: String,
    /// Sorted, non-overlapping ranges into `text`.
    pub emphasis: Vec<Emphasis>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Emphasis {
    pub start: usize,
    pub end: usize,
}

impl RichText {
    /// Resolves `**bold**` pairs in a single line. Unpaired markers stay literal.
    pub fn parse(line: &str) -> Self {
        let mut text = String::with_capacity(line.len());
        let mut emphasis = Vec::new();
        let mut last = 0;

        for caps in BOLD.captures_iter(line) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            text.push_str(&line[last..whole.start()]);
            let start = text.len();
            text.push_str(inner.as_str());
            emphasis.push(Emphasis {
                start,
                end: text.len(),
            });
            last = whole.end();
        }
        text.push_str(&line[last..]);

        Self { text, emphasis }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Yields `(segment, emphasized)` pairs covering the whole text.
    pub fn spans(&self) -> Vec<(&str, bool)> {
        let mut out = Vec::with_capacity(self.emphasis.len() * 2 + 1);
        let mut pos = 0;
        for e in &self.emphasis {
            if e.start > pos {
                out.push((&self.text[pos..e.start], false));
            }
            out.push((&self.text[e.start..e.end], true));
            pos = e.end;
        }
        if pos < self.text.len() {
            out.push((&self.text[pos..], false));
        }
        out
    }

    /// Appends `other` separated by a single space.
    fn append(&mut self, other: RichText) {
        if !self.text.is_empty() && !other.text.is_empty() {
            self.text.push(' ');
        }
        let offset = self.text.len();
        self.text.push_str(&other.text);
        self.emphasis.extend(other.emphasis.into_iter().map(|e| Emphasis {
            start: e.start + offset,
            end: e.end + offset,
        }));
    }
}

/// Converts raw document content into blocks.
///
/// An unterminated fence swallows the rest of the input as code.
pub fn render(content: &str) -> Vec<Block> {
    let mut scanner = Scanner::default();
    for line in content.lines() {
        scanner.line(line);
    }
    scanner.finish()
}

struct OpenFence<'a> {
    language: String,
    lines: Vec<&'a str>,
}

#[derive(Default)]
struct Scanner<'a> {
    blocks: Vec<Block>,
    paragraph: Option<RichText>,
    fence: Option<OpenFence<'a>>,
}

impl<'a> Scanner<'a> {
    fn line(&mut self, line: &'a str) {
        let trimmed = line.trim_start();

        if let Some(fence) = self.fence.take() {
            if trimmed.starts_with(FENCE) {
                self.push_code(fence);
            } else {
                let mut fence = fence;
                fence.lines.push(line);
                self.fence = Some(fence);
            }
            return;
        }

        if let Some(rest) = trimmed.strip_prefix(FENCE) {
            self.flush_paragraph();
            match rest.find(FENCE) {
                Some(end) => {
                    self.blocks.push(Block::Code {
                        code: rest[..end].to_string(),
                        language: DEFAULT_LANGUAGE.to_string(),
                    });
                    let tail = &rest[end + FENCE.len()..];
                    if !tail.trim().is_empty() {
                        self.prose(tail.trim_start());
                    }
                }
                None => {
                    let language = rest
                        .split_whitespace()
                        .next()
                        .unwrap_or(DEFAULT_LANGUAGE)
                        .to_string();
                    self.fence = Some(OpenFence {
                        language,
                        lines: Vec::new(),
                    });
                }
            }
            return;
        }

        self.prose(trimmed);
    }

    fn prose(&mut self, trimmed: &str) {
        if trimmed.trim().is_empty() {
            self.flush_paragraph();
            return;
        }

        let block = if let Some(rest) = trimmed.strip_prefix("### ") {
            Block::Heading {
                level: 3,
                text: RichText::parse(rest.trim()),
            }
        } else if let Some(rest) = trimmed.strip_prefix("## ") {
            Block::Heading {
                level: 2,
                text: RichText::parse(rest.trim()),
            }
        } else if let Some(rest) = trimmed.strip_prefix("- ") {
            Block::ListItem {
                kind: ListKind::Unordered,
                text: RichText::parse(rest.trim()),
            }
        } else if let Some(caps) = ORDERED_ITEM.captures(trimmed) {
            let rest = caps.get(1).map_or("", |m| m.as_str());
            Block::ListItem {
                kind: ListKind::Ordered,
                text: RichText::parse(rest.trim()),
            }
        } else {
            let text = RichText::parse(trimmed.trim_end());
            match self.paragraph.as_mut() {
                Some(paragraph) => paragraph.append(text),
                None => self.paragraph = Some(text),
            }
            return;
        };

        self.flush_paragraph();
        self.blocks.push(block);
    }

    fn flush_paragraph(&mut self) {
        if let Some(text) = self.paragraph.take() {
            self.blocks.push(Block::Paragraph { text });
        }
    }

    fn push_code(&mut self, fence: OpenFence<'a>) {
        self.blocks.push(Block::Code {
            code: fence.lines.join("\n"),
            language: fence.language,
        });
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_paragraph();
        if let Some(fence) = self.fence.take() {
            self.push_code(fence);
        }
        self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> RichText {
        RichText {
            text: text.to_string(),
            emphasis: Vec::new(),
        }
    }

    fn item(kind: ListKind, text: &str) -> Block {
        Block::ListItem {
            kind,
            text: plain(text),
        }
    }

    #[test]
    fn empty_content_renders_nothing() {
        assert!(render("").is_empty());
        assert!(render("\n\n   \n").is_empty());
    }

    #[test]
    fn heading_paragraph_and_list() {
        let blocks = render("## Intro\n\nHello **world**\n\n- item one\n- item two");
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: 2,
                    text: plain("Intro"),
                },
                Block::Paragraph {
                    text: RichText {
                        text: "Hello world".to_string(),
                        emphasis: vec![Emphasis { start: 6, end: 11 }],
                    },
                },
                item(ListKind::Unordered, "item one"),
                item(ListKind::Unordered, "item two"),
            ]
        );
    }

    #[test]
    fn fenced_code_keeps_only_the_code() {
        let blocks = render("```dart\ncode\n```");
        assert_eq!(
            blocks,
            vec![Block::Code {
                code: "code".to_string(),
                language: "dart".to_string(),
            }]
        );
    }

    #[test]
    fn code_is_not_formatted() {
        let src = "Intro\n\n```bash\n## not a heading\n- not a list\n**not bold**\n```\n\nAfter";
        let blocks = render(src);
        assert_eq!(blocks.len(), 3);
        assert_eq!(
            blocks[1],
            Block::Code {
                code: "## not a heading\n- not a list\n**not bold**".to_string(),
                language: "bash".to_string(),
            }
        );
        assert_eq!(blocks[2], Block::Paragraph { text: plain("After") });
    }

    #[test]
    fn untagged_fence_uses_default_language() {
        let blocks = render("```\nflutter doctor\n```");
        assert_eq!(
            blocks,
            vec![Block::Code {
                code: "flutter doctor".to_string(),
                language: DEFAULT_LANGUAGE.to_string(),
            }]
        );
    }

    #[test]
    fn unterminated_fence_takes_the_rest_as_code() {
        let blocks = render("## Setup\n```bash\ncd ~/development\n\n## still code");
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: 2,
                    text: plain("Setup"),
                },
                Block::Code {
                    code: "cd ~/development\n\n## still code".to_string(),
                    language: "bash".to_string(),
                },
            ]
        );
    }

    #[test]
    fn single_line_fence() {
        let blocks = render("```flutter run``` then watch");
        assert_eq!(
            blocks,
            vec![
                Block::Code {
                    code: "flutter run".to_string(),
                    language: DEFAULT_LANGUAGE.to_string(),
                },
                Block::Paragraph {
                    text: plain("then watch"),
                },
            ]
        );
    }

    #[test]
    fn level_three_heading_and_indented_markers() {
        let blocks = render("  ### Details\n\t - nested item\n  2. second");
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: 3,
                    text: plain("Details"),
                },
                item(ListKind::Unordered, "nested item"),
                item(ListKind::Ordered, "second"),
            ]
        );
    }

    #[test]
    fn ordered_items_drop_their_digits() {
        let blocks = render("1. **Download**: get it\n12. Extract");
        assert_eq!(
            blocks,
            vec![
                Block::ListItem {
                    kind: ListKind::Ordered,
                    text: RichText {
                        text: "Download: get it".to_string(),
                        emphasis: vec![Emphasis { start: 0, end: 8 }],
                    },
                },
                item(ListKind::Ordered, "Extract"),
            ]
        );
    }

    #[test]
    fn paragraph_lines_join_until_a_break() {
        let blocks = render("first line\nsecond **line**\n\nnext");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph {
                    text: RichText {
                        text: "first line second line".to_string(),
                        emphasis: vec![Emphasis { start: 18, end: 22 }],
                    },
                },
                Block::Paragraph { text: plain("next") },
            ]
        );
    }

    #[test]
    fn malformed_markup_degrades_to_literal_text() {
        let blocks = render("#Heading\n**unclosed\n****\n-no space\n1.no space");
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                text: plain("#Heading **unclosed **** -no space 1.no space"),
            }]
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let src = "## A\n\n- **x** y\n\n```dart\nvoid main() {}\n```\ntext";
        assert_eq!(render(src), render(src));
    }

    #[test]
    fn spans_cover_the_text() {
        let text = RichText::parse("a **b** c **d**");
        assert_eq!(
            text.spans(),
            vec![("a ", false), ("b", true), (" c ", false), ("d", true)]
        );
    }
}
