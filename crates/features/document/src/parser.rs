//! Structural model of a pricing sheet.
//!
//! The markdown is reduced to what the checks need: the H1 title, H2 sections with their
//! H3 subsections, and inside each of them the tables, `**Label:** value` lines, plain
//! paragraph lines and inline-code spans. E-mail addresses are collected document-wide.

use crate::error::{DocumentError, DocumentErrorExt};
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// A GitHub-style table. Cells are plain text with inline markup removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Index of a header cell, matched case-insensitively.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h.eq_ignore_ascii_case(name.trim()))
    }

    #[must_use]
    pub fn has_columns(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.column(name).is_some())
    }

    /// Cell of `row` under the header `column`.
    #[must_use]
    pub fn get<'a>(&self, row: &'a [String], column: &str) -> Option<&'a str> {
        self.column(column).and_then(|idx| row.get(idx)).map(String::as_str)
    }
}

/// A `**Label:** value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: String,
}

/// Content directly under a heading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    /// Non-field text lines, in order.
    pub paragraphs: Vec<String>,
    pub fields: Vec<Field>,
    pub tables: Vec<Table>,
    pub code_spans: Vec<String>,
}

impl Block {
    /// Value of the first field with this label (case-insensitive).
    #[must_use]
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label.eq_ignore_ascii_case(label))
            .map(|f| f.value.as_str())
    }

    /// First table carrying all of the given columns.
    #[must_use]
    pub fn table_with(&self, columns: &[&str]) -> Option<&Table> {
        self.tables.iter().find(|t| t.has_columns(columns))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subsection {
    pub title: String,
    pub content: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub content: Block,
    pub subsections: Vec<Subsection>,
}

impl Section {
    #[must_use]
    pub fn subsection(&self, title: &str) -> Option<&Subsection> {
        self.subsections.iter().find(|s| s.title.eq_ignore_ascii_case(title.trim()))
    }

    /// The section's own block followed by every subsection's block.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        std::iter::once(&self.content).chain(self.subsections.iter().map(|s| &s.content))
    }

    /// First table with the given columns anywhere in the section.
    #[must_use]
    pub fn table_with(&self, columns: &[&str]) -> Option<&Table> {
        self.blocks().find_map(|block| block.table_with(columns))
    }

    /// First field with the given label anywhere in the section.
    #[must_use]
    pub fn field(&self, label: &str) -> Option<&str> {
        self.blocks().find_map(|block| block.field(label))
    }
}

/// A parsed pricing sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingDocument {
    title: Option<String>,
    /// Content before the first H2.
    preamble: Block,
    sections: Vec<Section>,
    emails: Vec<String>,
}

impl PricingDocument {
    /// Parses markdown. Never fails: anything the model does not capture is ignored.
    #[must_use]
    pub fn parse(markdown: &str) -> Self {
        let mut builder = Builder::default();
        for event in Parser::new_ext(markdown, Options::ENABLE_TABLES) {
            builder.event(event);
        }
        let doc = builder.finish();
        debug!(sections = doc.sections.len(), emails = doc.emails.len(), "Document parsed");
        doc
    }

    /// Reads and parses a file.
    ///
    /// # Errors
    /// Returns [`DocumentError::Io`] when the file cannot be read.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).context(format!("Reading {}", path.display()))?;
        Ok(Self::parse(&raw))
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub const fn preamble(&self) -> &Block {
        &self.preamble
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks an H2 section up by title (case-insensitive).
    #[must_use]
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title.eq_ignore_ascii_case(title.trim()))
    }

    /// Like [`PricingDocument::section`], but missing sections are an error.
    ///
    /// # Errors
    /// Returns [`DocumentError::MissingSection`].
    pub fn require_section(&self, title: &'static str) -> Result<&Section, DocumentError> {
        self.section(title)
            .ok_or_else(|| DocumentError::MissingSection { message: title.into(), context: None })
    }

    /// Every distinct e-mail address, in order of appearance.
    #[must_use]
    pub fn emails(&self) -> &[String] {
        &self.emails
    }
}

// --- Event folding ---

#[derive(Debug, Default)]
struct TableBuilder {
    table: Table,
    row: Vec<String>,
    cell: Option<String>,
}

#[derive(Debug, Default)]
struct Line {
    text: String,
    label: Option<String>,
    strong: Option<String>,
}

#[derive(Debug, Default)]
struct Builder {
    doc: PricingDocument,
    heading: Option<(HeadingLevel, String)>,
    table: Option<TableBuilder>,
    line: Line,
}

impl Builder {
    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                self.flush_line();
                self.heading = Some((level, String::new()));
            },
            Event::End(TagEnd::Heading(_)) => self.close_heading(),

            Event::Start(Tag::Table(_)) => self.table = Some(TableBuilder::default()),
            Event::End(TagEnd::Table) => {
                if let Some(builder) = self.table.take() {
                    self.block().tables.push(builder.table);
                }
            },
            Event::Start(Tag::TableHead | Tag::TableRow) => {
                if let Some(builder) = &mut self.table {
                    builder.row.clear();
                }
            },
            Event::End(TagEnd::TableHead) => {
                if let Some(builder) = &mut self.table {
                    builder.table.header = std::mem::take(&mut builder.row);
                }
            },
            Event::End(TagEnd::TableRow) => {
                if let Some(builder) = &mut self.table {
                    let row = std::mem::take(&mut builder.row);
                    builder.table.rows.push(row);
                }
            },
            Event::Start(Tag::TableCell) => {
                if let Some(builder) = &mut self.table {
                    builder.cell = Some(String::new());
                }
            },
            Event::End(TagEnd::TableCell) => self.close_cell(),

            Event::Start(Tag::Strong) if self.in_prose() => {
                self.line.strong = Some(String::new());
            },
            Event::End(TagEnd::Strong) if self.in_prose() => self.close_strong(),

            Event::Start(Tag::Link { dest_url, .. }) => {
                if let Some(address) = dest_url.strip_prefix("mailto:") {
                    self.record_email(address);
                }
            },

            Event::Code(code) => {
                self.block().code_spans.push(code.to_string());
                self.push_text(&code);
            },
            Event::Text(text) => self.push_text(&text),
            Event::SoftBreak | Event::HardBreak => {
                if self.in_prose() {
                    self.flush_line();
                } else {
                    self.push_text(" ");
                }
            },

            Event::Start(Tag::List(_)) | Event::End(TagEnd::Paragraph | TagEnd::Item) => {
                self.flush_line();
            },
            _ => {},
        }
    }

    fn finish(mut self) -> PricingDocument {
        self.flush_line();
        self.doc
    }

    const fn in_prose(&self) -> bool {
        self.heading.is_none() && self.table.is_none()
    }

    /// Where body content currently lands.
    fn block(&mut self) -> &mut Block {
        match self.doc.sections.last_mut() {
            Some(section) => match section.subsections.last_mut() {
                Some(sub) => &mut sub.content,
                None => &mut section.content,
            },
            None => &mut self.doc.preamble,
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some((_, heading)) = &mut self.heading {
            heading.push_str(text);
        } else if let Some(table) = &mut self.table {
            if let Some(cell) = &mut table.cell {
                cell.push_str(text);
            }
        } else if let Some(strong) = &mut self.line.strong {
            strong.push_str(text);
        } else {
            self.line.text.push_str(text);
        }
    }

    fn close_heading(&mut self) {
        let Some((level, text)) = self.heading.take() else { return };
        let title = text.trim().to_owned();
        match level {
            HeadingLevel::H1 if self.doc.title.is_none() => self.doc.title = Some(title),
            HeadingLevel::H1 | HeadingLevel::H2 => self.doc.sections.push(Section {
                title,
                content: Block::default(),
                subsections: Vec::new(),
            }),
            HeadingLevel::H3 => match self.doc.sections.last_mut() {
                Some(section) => {
                    section.subsections.push(Subsection { title, content: Block::default() });
                },
                None => self.doc.preamble.paragraphs.push(title),
            },
            _ => self.block().paragraphs.push(title),
        }
    }

    fn close_cell(&mut self) {
        let Some(cell) = self.table.as_mut().and_then(|b| b.cell.take()) else { return };
        let cell = cell.trim().to_owned();
        self.scan_emails(&cell);
        if let Some(builder) = &mut self.table {
            builder.row.push(cell);
        }
    }

    /// A bold run that opens a line and ends with `:` becomes the line's label.
    fn close_strong(&mut self) {
        let Some(strong) = self.line.strong.take() else { return };
        let trimmed = strong.trim_end();
        match trimmed.strip_suffix(':') {
            Some(label) if self.line.text.trim().is_empty() && self.line.label.is_none() => {
                self.line.text.clear();
                self.line.label = Some(label.trim().to_owned());
            },
            _ => self.line.text.push_str(&strong),
        }
    }

    fn flush_line(&mut self) {
        if let Some(strong) = self.line.strong.take() {
            self.line.text.push_str(&strong);
        }
        let line = std::mem::take(&mut self.line);
        let text = line.text.trim().to_owned();
        self.scan_emails(&text);

        match line.label {
            Some(label) => self.block().fields.push(Field { label, value: text }),
            None if !text.is_empty() => self.block().paragraphs.push(text),
            None => {},
        }
    }

    fn scan_emails(&mut self, text: &str) {
        let candidates: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || matches!(c, '<' | '>' | '(' | ')' | ',' | ';'))
            .map(|token| token.trim_matches(|c: char| matches!(c, '.' | ':' | '`' | '*')))
            .filter(|token| looks_like_email(token))
            .collect();
        for address in candidates {
            self.record_email(address);
        }
    }

    fn record_email(&mut self, address: &str) {
        if !self.doc.emails.iter().any(|known| known == address) {
            self.doc.emails.push(address.to_owned());
        }
    }
}

fn looks_like_email(token: &str) -> bool {
    match token.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        },
        None => false,
    }
}
