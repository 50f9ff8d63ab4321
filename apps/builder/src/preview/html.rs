//! Print-ready HTML for the preview tree.
//!
//! Kept deliberately plain for applicant-tracking parsers: one column, real
//! headings, Arial/sans-serif, black on white, no images. The root element
//! carries `PREVIEW_ELEMENT_ID` so exporters can find the surface.

use std::fmt::Write;

use crate::preview::tree::{EntryBlock, Header, Preview, PreviewSection, SectionBody};

pub const PREVIEW_ELEMENT_ID: &str = "resume-preview";

const ROOT_STYLE: &str = "font-family: Arial, sans-serif; font-size: 11pt; line-height: 1.4; \
                          color: #000000; background: #ffffff; max-width: 8.5in; \
                          margin: 0 auto; padding: 32px;";
const NAME_STYLE: &str = "font-size: 18pt; font-weight: bold; margin: 0 0 8px 0;";
const HEADING_STYLE: &str = "font-size: 12pt; font-weight: bold; margin: 0 0 8px 0; \
                             border-bottom: 1px solid #000; padding-bottom: 2px;";
const TITLE_STYLE: &str = "font-size: 11pt; font-weight: bold; margin: 0;";
const SMALL_STYLE: &str = "font-size: 10pt; margin: 0 0 2px 0;";
const BODY_STYLE: &str = "margin: 0;";
const SUBTITLE_STYLE: &str = "font-size: 11pt; font-style: italic; margin: 0 0 4px 0;";

/// Full standalone HTML document, suitable for a browser or an HTML→PDF tool.
pub fn render_html_document(preview: &Preview) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(&preview.header.name));
    out.push_str("<style>@page { size: A4 portrait; } body { margin: 0; }</style>\n");
    out.push_str("</head>\n<body>\n");
    out.push_str(&render_html(preview));
    out.push_str("</body>\n</html>\n");
    out
}

/// The preview surface alone: a single root `<div>`.
pub fn render_html(preview: &Preview) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<div id=\"{PREVIEW_ELEMENT_ID}\" style=\"{ROOT_STYLE}\">");
    write_header(&mut out, &preview.header);
    for section in &preview.sections {
        write_section(&mut out, section);
    }
    out.push_str("</div>\n");
    out
}

fn write_header(out: &mut String, header: &Header) {
    out.push_str("<header style=\"text-align: center; margin-bottom: 24px;\">\n");
    let _ = writeln!(out, "<h1 style=\"{NAME_STYLE}\">{}</h1>", escape_html(&header.name));
    out.push_str("<div style=\"font-size: 10pt;\">\n");
    for line in &header.contact_lines {
        let _ = writeln!(out, "<div>{}</div>", escape_html(line));
    }
    if !header.links.is_empty() {
        let links: Vec<String> = header
            .links
            .iter()
            .map(|l| format!("<span>{}</span>", escape_html(l)))
            .collect();
        let _ = writeln!(out, "<div>{}</div>", links.join(" | "));
    }
    out.push_str("</div>\n</header>\n");
}

fn write_section(out: &mut String, section: &PreviewSection) {
    out.push_str("<section style=\"margin-bottom: 24px;\">\n");
    let _ = writeln!(out, "<h2 style=\"{HEADING_STYLE}\">{}</h2>", section.heading);
    match &section.body {
        SectionBody::Paragraph(text) => {
            let _ = writeln!(out, "<p style=\"margin: 0;\">{}</p>", escape_html(text));
        }
        SectionBody::Lines(lines) => write_lines(out, lines, BODY_STYLE),
        SectionBody::Entries(entries) => {
            for entry in entries {
                write_entry(out, entry);
            }
        }
    }
    out.push_str("</section>\n");
}

fn write_entry(out: &mut String, entry: &EntryBlock) {
    out.push_str("<div style=\"margin-bottom: 12px;\">\n");

    let _ = write!(out, "<h3 style=\"{TITLE_STYLE}\">{}", escape_html(&entry.title));
    if let Some(note) = &entry.title_note {
        let _ = write!(
            out,
            " <span style=\"font-weight: normal; font-size: 10pt;\">({})</span>",
            escape_html(note)
        );
    }
    out.push_str("</h3>\n");

    if let Some(meta) = &entry.meta {
        let _ = writeln!(out, "<div style=\"{SMALL_STYLE}\">{}</div>", escape_html(meta));
    }
    if let Some(subtitle) = &entry.subtitle {
        let _ = writeln!(
            out,
            "<div style=\"{SUBTITLE_STYLE}\">{}</div>",
            escape_html(subtitle)
        );
    }
    write_lines(out, &entry.lines, SMALL_STYLE);

    out.push_str("</div>\n");
}

/// One `<div>` per line; a blank line keeps its height with `<br>`.
fn write_lines(out: &mut String, lines: &[String], style: &str) {
    for line in lines {
        if line.is_empty() {
            let _ = writeln!(out, "<div style=\"{style}\"><br></div>");
        } else {
            let _ = writeln!(out, "<div style=\"{style}\">{}</div>", escape_html(line));
        }
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
