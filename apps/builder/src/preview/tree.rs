//! Semantic preview tree: what the résumé says, with no styling attached.
//!
//! One column, top to bottom: a header followed by zero or more sections.
//! Presentation (HTML, plain text) is derived from this tree elsewhere.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub header: Header,
    pub sections: Vec<PreviewSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub name: String,
    /// Email, phone, address: one line each, only those present.
    pub contact_lines: Vec<String>,
    /// LinkedIn, GitHub, website: rendered together on one row.
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Skills,
    Experience,
    Education,
    Certifications,
    Projects,
}

impl SectionKind {
    pub fn heading(self) -> &'static str {
        match self {
            SectionKind::Summary => "PROFESSIONAL SUMMARY",
            SectionKind::Skills => "SKILLS",
            SectionKind::Experience => "WORK EXPERIENCE",
            SectionKind::Education => "EDUCATION",
            SectionKind::Certifications => "CERTIFICATIONS",
            SectionKind::Projects => "PROJECTS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewSection {
    pub kind: SectionKind,
    pub heading: &'static str,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum SectionBody {
    Paragraph(String),
    /// One visual line per entry; empty strings are blank lines.
    Lines(Vec<String>),
    Entries(Vec<EntryBlock>),
}

/// One record of a repeatable section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntryBlock {
    pub title: String,
    /// Trailing parenthetical after the title (project link).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_note: Option<String>,
    /// Dates or year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    /// Company, institution, or issuing organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Body lines in order; empty strings are blank lines kept on purpose.
    pub lines: Vec<String>,
}

impl Preview {
    pub fn section(&self, kind: SectionKind) -> Option<&PreviewSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn headings(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.heading).collect()
    }
}
