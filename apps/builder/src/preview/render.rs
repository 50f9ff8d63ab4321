//! Projection from `ResumeDocument` to the semantic preview tree.
//!
//! # Rules
//! - The name always renders; an empty name shows `NAME_PLACEHOLDER`.
//! - Contact fields render only when non-empty.
//! - A section renders iff its content is non-empty. No empty headings.
//! - Entries keep document order; nothing is re-sorted.
//! - Multi-line text (summary, responsibilities, project description) splits
//!   on line breaks, one line per input line, blank lines kept.
//!
//! Pure: same input, same output, input untouched.

use crate::models::resume::{
    CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry,
    ResumeDocument,
};
use crate::preview::tree::{EntryBlock, Header, Preview, PreviewSection, SectionBody, SectionKind};

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const SKILL_SEPARATOR: &str = " • ";

pub fn render_preview(doc: &ResumeDocument) -> Preview {
    let mut sections = Vec::new();

    if !doc.summary.is_empty() {
        sections.push(section(
            SectionKind::Summary,
            SectionBody::Lines(split_lines(&doc.summary)),
        ));
    }

    if !doc.skills.is_empty() {
        sections.push(section(
            SectionKind::Skills,
            SectionBody::Paragraph(doc.skills.join(SKILL_SEPARATOR)),
        ));
    }

    push_entries(&mut sections, SectionKind::Experience, &doc.experience, experience_block);
    push_entries(&mut sections, SectionKind::Education, &doc.education, education_block);
    push_entries(
        &mut sections,
        SectionKind::Certifications,
        &doc.certifications,
        certification_block,
    );
    push_entries(&mut sections, SectionKind::Projects, &doc.projects, project_block);

    Preview {
        header: header(&doc.personal_info),
        sections,
    }
}

fn header(info: &PersonalInfo) -> Header {
    let name = if info.full_name.is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        info.full_name.clone()
    };

    Header {
        name,
        contact_lines: present(&[&info.email, &info.phone, &info.address]),
        links: present(&[&info.linkedin, &info.github, &info.website]),
    }
}

fn present(values: &[&String]) -> Vec<String> {
    values
        .iter()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .collect()
}

fn section(kind: SectionKind, body: SectionBody) -> PreviewSection {
    PreviewSection {
        kind,
        heading: kind.heading(),
        body,
    }
}

fn push_entries<T>(
    sections: &mut Vec<PreviewSection>,
    kind: SectionKind,
    entries: &[T],
    block: fn(&T) -> EntryBlock,
) {
    if entries.is_empty() {
        return;
    }
    let blocks = entries.iter().map(block).collect();
    sections.push(section(kind, SectionBody::Entries(blocks)));
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Splits on `\n` (tolerating `\r\n`) and keeps blank lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

fn experience_block(exp: &ExperienceEntry) -> EntryBlock {
    let lines = if exp.responsibilities.is_empty() {
        Vec::new()
    } else {
        split_lines(&exp.responsibilities)
    };

    EntryBlock {
        title: exp.title.clone(),
        title_note: None,
        meta: Some(format!("{} - {}", exp.start_date, exp.end_date)),
        subtitle: Some(exp.company.clone()),
        lines,
    }
}

fn education_block(edu: &EducationEntry) -> EntryBlock {
    EntryBlock {
        title: edu.degree.clone(),
        title_note: None,
        meta: non_empty(&edu.year),
        subtitle: Some(edu.institution.clone()),
        lines: Vec::new(),
    }
}

fn certification_block(cert: &CertificationEntry) -> EntryBlock {
    EntryBlock {
        title: cert.name.clone(),
        title_note: None,
        meta: non_empty(&cert.date),
        subtitle: Some(cert.organization.clone()),
        lines: Vec::new(),
    }
}

fn project_block(proj: &ProjectEntry) -> EntryBlock {
    let mut lines = Vec::new();
    if !proj.description.is_empty() {
        lines.extend(split_lines(&proj.description));
    }
    if !proj.technologies.is_empty() {
        lines.push(format!("Technologies: {}", proj.technologies));
    }

    EntryBlock {
        title: proj.title.clone(),
        title_note: non_empty(&proj.link),
        meta: None,
        subtitle: None,
        lines,
    }
}
