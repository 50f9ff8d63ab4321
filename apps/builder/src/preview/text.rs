//! Plain-text projection of the preview tree, one visual line per line.

use crate::preview::tree::{Preview, SectionBody};

pub fn render_text(preview: &Preview) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(preview.header.name.clone());
    lines.extend(preview.header.contact_lines.iter().cloned());
    if !preview.header.links.is_empty() {
        lines.push(preview.header.links.join(" | "));
    }

    for section in &preview.sections {
        lines.push(String::new());
        lines.push(section.heading.to_string());
        match &section.body {
            SectionBody::Paragraph(text) => lines.push(text.clone()),
            SectionBody::Lines(body) => lines.extend(body.iter().cloned()),
            SectionBody::Entries(entries) => {
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        lines.push(String::new());
                    }
                    let title = match &entry.title_note {
                        Some(note) => format!("{} ({note})", entry.title),
                        None => entry.title.clone(),
                    };
                    lines.push(title);
                    lines.extend(entry.meta.iter().cloned());
                    lines.extend(entry.subtitle.iter().cloned());
                    lines.extend(entry.lines.iter().cloned());
                }
            }
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EntryId, ExperienceEntry, ResumeDocument, SectionEntry};
    use crate::preview::render::render_preview;

    #[test]
    fn test_name_only() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.full_name = "Jane Doe".to_string();
        assert_eq!(render_text(&render_preview(&doc)), "Jane Doe\n");
    }

    #[test]
    fn test_summary_keeps_blank_lines() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.full_name = "Jane Doe".to_string();
        doc.summary = "Line one\n\nLine two".to_string();
        assert_eq!(
            render_text(&render_preview(&doc)),
            "Jane Doe\n\nPROFESSIONAL SUMMARY\nLine one\n\nLine two\n"
        );
    }

    #[test]
    fn test_full_layout() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.full_name = "Jane Doe".to_string();
        doc.personal_info.email = "jane@example.com".to_string();
        doc.skills = vec!["Go".to_string(), "Rust".to_string(), "C++".to_string()];
        let mut exp = ExperienceEntry::blank(EntryId::new("1"));
        exp.title = "Engineer".to_string();
        exp.company = "Initech".to_string();
        exp.start_date = "2020".to_string();
        exp.end_date = "2023".to_string();
        exp.responsibilities = "Built things\n\nFixed things".to_string();
        doc.experience.push(exp);

        let expected = "Jane Doe\n\
                        jane@example.com\n\
                        \n\
                        SKILLS\n\
                        Go • Rust • C++\n\
                        \n\
                        WORK EXPERIENCE\n\
                        Engineer\n\
                        2020 - 2023\n\
                        Initech\n\
                        Built things\n\
                        \n\
                        Fixed things\n";
        assert_eq!(render_text(&render_preview(&doc)), expected);
    }
}
