use std::fmt;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Identifiers
// ────────────────────────────────────────────────────────────────────────────

/// Identifier of one record inside a repeatable section.
///
/// Only used to correlate edits with records; unique within its section for
/// the lifetime of the document and never meaningful outside the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

/// The whole résumé. Every section is always present: absent content is an
/// empty string or an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub projects: Vec<ProjectEntry>,
}

impl ResumeDocument {
    /// Export is only offered once both name and email carry visible text.
    pub fn is_exportable(&self) -> bool {
        !self.personal_info.full_name.trim().is_empty()
            && !self.personal_info.email.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalInfoField {
    FullName,
    Email,
    Phone,
    Linkedin,
    Github,
    Website,
    Address,
}

impl PersonalInfoField {
    pub const ALL: [PersonalInfoField; 7] = [
        PersonalInfoField::FullName,
        PersonalInfoField::Email,
        PersonalInfoField::Phone,
        PersonalInfoField::Linkedin,
        PersonalInfoField::Github,
        PersonalInfoField::Website,
        PersonalInfoField::Address,
    ];
}

impl PersonalInfo {
    pub fn get(&self, field: PersonalInfoField) -> &str {
        match field {
            PersonalInfoField::FullName => &self.full_name,
            PersonalInfoField::Email => &self.email,
            PersonalInfoField::Phone => &self.phone,
            PersonalInfoField::Linkedin => &self.linkedin,
            PersonalInfoField::Github => &self.github,
            PersonalInfoField::Website => &self.website,
            PersonalInfoField::Address => &self.address,
        }
    }

    pub fn get_mut(&mut self, field: PersonalInfoField) -> &mut String {
        match field {
            PersonalInfoField::FullName => &mut self.full_name,
            PersonalInfoField::Email => &mut self.email,
            PersonalInfoField::Phone => &mut self.phone,
            PersonalInfoField::Linkedin => &mut self.linkedin,
            PersonalInfoField::Github => &mut self.github,
            PersonalInfoField::Website => &mut self.website,
            PersonalInfoField::Address => &mut self.address,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Repeatable sections
// ────────────────────────────────────────────────────────────────────────────

/// The four sections whose records are added and removed by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Experience,
    Education,
    Certifications,
    Projects,
}

/// A record of a repeatable section: a stable id plus free-text fields
/// addressed through a closed field enum.
pub trait SectionEntry: Clone {
    type Field: Copy;

    /// A record with the given id and every field empty.
    fn blank(id: EntryId) -> Self;
    fn id(&self) -> &EntryId;
    fn get(&self, field: Self::Field) -> &str;
    fn get_mut(&mut self, field: Self::Field) -> &mut String;
}

/// Generates the record struct, its field enum, and the `SectionEntry` impl
/// for one repeatable section.
macro_rules! section_entry {
    (
        $(#[$meta:meta])*
        $entry:ident, $field:ident { $($name:ident => $variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $entry {
            pub id: EntryId,
            $(pub $name: String,)+
        }

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum $field {
            $($variant,)+
        }

        impl $field {
            pub const ALL: &'static [$field] = &[$($field::$variant,)+];
        }

        impl SectionEntry for $entry {
            type Field = $field;

            fn blank(id: EntryId) -> Self {
                Self {
                    id,
                    $($name: String::new(),)+
                }
            }

            fn id(&self) -> &EntryId {
                &self.id
            }

            fn get(&self, field: $field) -> &str {
                match field {
                    $($field::$variant => &self.$name,)+
                }
            }

            fn get_mut(&mut self, field: $field) -> &mut String {
                match field {
                    $($field::$variant => &mut self.$name,)+
                }
            }
        }
    };
}

section_entry! {
    /// One position held. `responsibilities` is multi-line free text.
    ExperienceEntry, ExperienceField {
        title => Title,
        company => Company,
        start_date => StartDate,
        end_date => EndDate,
        responsibilities => Responsibilities,
    }
}

section_entry! {
    EducationEntry, EducationField {
        degree => Degree,
        institution => Institution,
        year => Year,
    }
}

section_entry! {
    CertificationEntry, CertificationField {
        name => Name,
        organization => Organization,
        date => Date,
    }
}

section_entry! {
    ProjectEntry, ProjectField {
        title => Title,
        description => Description,
        technologies => Technologies,
        link => Link,
    }
}
