//! Field descriptors for the form: labels, placeholders, and required markers.
//!
//! Required markers are display-only. `missing_required` reports blank
//! required fields so the form can highlight them; it never blocks an edit.

use serde::Serialize;

use crate::models::resume::{
    CertificationField, EducationField, EntryId, ExperienceField, PersonalInfoField,
    ProjectField, ResumeDocument, SectionEntry,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
    pub multiline: bool,
}

impl FieldDescriptor {
    fn line(key: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            key,
            label,
            placeholder,
            required: false,
            multiline: false,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }
}

/// Form card as presented to the user, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaSection {
    pub key: &'static str,
    pub title: &'static str,
    pub repeatable: bool,
    /// Label of the "add" control for repeatable sections.
    pub add_label: Option<&'static str>,
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingField {
    pub section: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<EntryId>,
    pub field: &'static str,
    pub label: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Per-field descriptors
// ────────────────────────────────────────────────────────────────────────────

impl PersonalInfoField {
    pub fn descriptor(self) -> FieldDescriptor {
        match self {
            PersonalInfoField::FullName => {
                FieldDescriptor::line("fullName", "Full Name", "John Doe").required()
            }
            PersonalInfoField::Email => {
                FieldDescriptor::line("email", "Email Address", "john@example.com").required()
            }
            PersonalInfoField::Phone => {
                FieldDescriptor::line("phone", "Phone Number", "+1 (555) 123-4567")
            }
            PersonalInfoField::Linkedin => {
                FieldDescriptor::line("linkedin", "LinkedIn Profile", "linkedin.com/in/johndoe")
            }
            PersonalInfoField::Github => {
                FieldDescriptor::line("github", "GitHub Profile", "github.com/johndoe")
            }
            PersonalInfoField::Website => {
                FieldDescriptor::line("website", "Website/Portfolio", "johndoe.com")
            }
            PersonalInfoField::Address => {
                FieldDescriptor::line("address", "Address", "City, State, Country")
            }
        }
    }
}

impl ExperienceField {
    pub fn descriptor(self) -> FieldDescriptor {
        match self {
            ExperienceField::Title => {
                FieldDescriptor::line("title", "Job Title", "Software Engineer").required()
            }
            ExperienceField::Company => {
                FieldDescriptor::line("company", "Company Name", "Tech Company Inc.").required()
            }
            ExperienceField::StartDate => FieldDescriptor::line("startDate", "Start Date", "Jan 2020"),
            ExperienceField::EndDate => FieldDescriptor::line("endDate", "End Date", "Present"),
            ExperienceField::Responsibilities => FieldDescriptor::line(
                "responsibilities",
                "Responsibilities",
                "• Developed web applications using React and Node.js\n\
                 • Collaborated with cross-functional teams\n\
                 • Improved system performance by 30%",
            )
            .multiline(),
        }
    }
}

impl EducationField {
    pub fn descriptor(self) -> FieldDescriptor {
        match self {
            EducationField::Degree => FieldDescriptor::line(
                "degree",
                "Degree",
                "Bachelor of Science in Computer Science",
            )
            .required(),
            EducationField::Institution => {
                FieldDescriptor::line("institution", "Institution Name", "University of Technology")
                    .required()
            }
            EducationField::Year => FieldDescriptor::line("year", "Year of Passing", "2020"),
        }
    }
}

impl CertificationField {
    pub fn descriptor(self) -> FieldDescriptor {
        match self {
            CertificationField::Name => {
                FieldDescriptor::line("name", "Certificate Name", "AWS Certified Developer")
                    .required()
            }
            CertificationField::Organization => {
                FieldDescriptor::line("organization", "Issuing Organization", "Amazon Web Services")
                    .required()
            }
            CertificationField::Date => FieldDescriptor::line("date", "Date", "2023"),
        }
    }
}

impl ProjectField {
    pub fn descriptor(self) -> FieldDescriptor {
        match self {
            ProjectField::Title => {
                FieldDescriptor::line("title", "Project Title", "E-commerce Platform").required()
            }
            ProjectField::Description => FieldDescriptor::line(
                "description",
                "Description",
                "Brief description of the project and your role...",
            )
            .multiline(),
            ProjectField::Technologies => {
                FieldDescriptor::line("technologies", "Technologies Used", "React, Node.js, MongoDB")
            }
            ProjectField::Link => FieldDescriptor::line(
                "link",
                "Project Link",
                "https://github.com/username/project",
            ),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Whole form
// ────────────────────────────────────────────────────────────────────────────

pub fn describe_form() -> Vec<SchemaSection> {
    vec![
        SchemaSection {
            key: "personalInfo",
            title: "Personal Information",
            repeatable: false,
            add_label: None,
            fields: PersonalInfoField::ALL.iter().map(|f| f.descriptor()).collect(),
        },
        SchemaSection {
            key: "summary",
            title: "Professional Summary",
            repeatable: false,
            add_label: None,
            fields: vec![FieldDescriptor::line(
                "summary",
                "Summary",
                "A brief professional summary highlighting your key skills and experience...",
            )
            .multiline()],
        },
        SchemaSection {
            key: "skills",
            title: "Skills",
            repeatable: false,
            add_label: None,
            fields: vec![FieldDescriptor::line("skill", "Skill", "Add a skill")],
        },
        SchemaSection {
            key: "experience",
            title: "Work Experience",
            repeatable: true,
            add_label: Some("Add Experience"),
            fields: ExperienceField::ALL.iter().map(|f| f.descriptor()).collect(),
        },
        SchemaSection {
            key: "education",
            title: "Education",
            repeatable: true,
            add_label: Some("Add Education"),
            fields: EducationField::ALL.iter().map(|f| f.descriptor()).collect(),
        },
        SchemaSection {
            key: "certifications",
            title: "Certifications",
            repeatable: true,
            add_label: Some("Add Certification"),
            fields: CertificationField::ALL.iter().map(|f| f.descriptor()).collect(),
        },
        SchemaSection {
            key: "projects",
            title: "Projects",
            repeatable: true,
            add_label: Some("Add Project"),
            fields: ProjectField::ALL.iter().map(|f| f.descriptor()).collect(),
        },
    ]
}

/// Lists required fields that are blank, in form order.
pub fn missing_required(doc: &ResumeDocument) -> Vec<MissingField> {
    let mut missing = Vec::new();

    for field in PersonalInfoField::ALL {
        let descriptor = field.descriptor();
        if descriptor.required && doc.personal_info.get(field).trim().is_empty() {
            missing.push(MissingField {
                section: "personalInfo",
                entry_id: None,
                field: descriptor.key,
                label: descriptor.label,
            });
        }
    }

    collect_missing(
        &mut missing,
        "experience",
        &doc.experience,
        ExperienceField::ALL,
        ExperienceField::descriptor,
    );
    collect_missing(
        &mut missing,
        "education",
        &doc.education,
        EducationField::ALL,
        EducationField::descriptor,
    );
    collect_missing(
        &mut missing,
        "certifications",
        &doc.certifications,
        CertificationField::ALL,
        CertificationField::descriptor,
    );
    collect_missing(
        &mut missing,
        "projects",
        &doc.projects,
        ProjectField::ALL,
        ProjectField::descriptor,
    );

    missing
}

fn collect_missing<T: SectionEntry>(
    out: &mut Vec<MissingField>,
    section: &'static str,
    entries: &[T],
    fields: &[T::Field],
    describe: impl Fn(T::Field) -> FieldDescriptor,
) {
    for entry in entries {
        for &field in fields {
            let descriptor = describe(field);
            if descriptor.required && entry.get(field).trim().is_empty() {
                out.push(MissingField {
                    section,
                    entry_id: Some(entry.id().clone()),
                    field: descriptor.key,
                    label: descriptor.label,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ExperienceEntry;

    #[test]
    fn test_form_lists_every_section_in_order() {
        let keys: Vec<_> = describe_form().iter().map(|s| s.key).collect();
        assert_eq!(
            keys,
            vec![
                "personalInfo",
                "summary",
                "skills",
                "experience",
                "education",
                "certifications",
                "projects"
            ]
        );
    }

    #[test]
    fn test_descriptor_keys_match_json_field_names() {
        for field in ExperienceField::ALL {
            let json = serde_json::to_value(field).unwrap();
            assert_eq!(json, field.descriptor().key);
        }
        for field in PersonalInfoField::ALL {
            let json = serde_json::to_value(field).unwrap();
            assert_eq!(json, field.descriptor().key);
        }
    }

    #[test]
    fn test_empty_document_misses_name_and_email() {
        let missing = missing_required(&ResumeDocument::default());
        let keys: Vec<_> = missing.iter().map(|m| m.field).collect();
        assert_eq!(keys, vec!["fullName", "email"]);
    }

    #[test]
    fn test_blank_entries_report_required_fields() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.full_name = "Jane Doe".to_string();
        doc.personal_info.email = "jane@example.com".to_string();
        let mut entry = ExperienceEntry::blank(EntryId::new("1"));
        entry.title = "Engineer".to_string();
        doc.experience.push(entry);

        let missing = missing_required(&doc);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].section, "experience");
        assert_eq!(missing[0].field, "company");
        assert_eq!(missing[0].entry_id, Some(EntryId::new("1")));
    }
}
