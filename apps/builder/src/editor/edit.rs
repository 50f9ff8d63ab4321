//! Typed edits and the pure function that applies them.
//!
//! # Semantics
//! - Every successful edit yields a complete new `ResumeDocument`; the input
//!   is never mutated.
//! - Rejected edits (blank skill text, skill index out of range, unknown
//!   record id) yield `None` and the caller must treat the document as
//!   unchanged.
//! - List order is insertion order. Removal deletes the record outright.

use serde::{Deserialize, Serialize};

use crate::editor::ids::IdGenerator;
use crate::models::resume::{
    CertificationEntry, CertificationField, EducationEntry, EducationField, EntryId,
    ExperienceEntry, ExperienceField, PersonalInfoField, ProjectEntry, ProjectField,
    ResumeDocument, Section, SectionEntry,
};

/// One user edit. Serialized with an `op` tag so the host can accept edits
/// as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    UpdatePersonalInfo {
        field: PersonalInfoField,
        value: String,
    },
    UpdateSummary {
        value: String,
    },
    AddSkill {
        text: String,
    },
    RemoveSkill {
        index: usize,
    },
    AddEntry {
        section: Section,
    },
    UpdateExperience {
        id: EntryId,
        field: ExperienceField,
        value: String,
    },
    UpdateEducation {
        id: EntryId,
        field: EducationField,
        value: String,
    },
    UpdateCertification {
        id: EntryId,
        field: CertificationField,
        value: String,
    },
    UpdateProject {
        id: EntryId,
        field: ProjectField,
        value: String,
    },
    RemoveEntry {
        section: Section,
        id: EntryId,
    },
}

/// Applies `edit` to `doc`, returning the replacement document or `None`
/// when the edit is rejected.
pub fn apply_edit(
    doc: &ResumeDocument,
    edit: Edit,
    ids: &mut dyn IdGenerator,
) -> Option<ResumeDocument> {
    match edit {
        Edit::UpdatePersonalInfo { field, value } => {
            let mut next = doc.clone();
            *next.personal_info.get_mut(field) = value;
            Some(next)
        }
        Edit::UpdateSummary { value } => Some(ResumeDocument {
            summary: value,
            ..doc.clone()
        }),
        Edit::AddSkill { text } => {
            let skill = text.trim();
            if skill.is_empty() {
                return None;
            }
            let mut next = doc.clone();
            next.skills.push(skill.to_string());
            Some(next)
        }
        Edit::RemoveSkill { index } => {
            if index >= doc.skills.len() {
                return None;
            }
            let mut next = doc.clone();
            next.skills.remove(index);
            Some(next)
        }
        Edit::AddEntry { section } => {
            let mut next = doc.clone();
            match section {
                Section::Experience => append_blank(&mut next.experience, ids),
                Section::Education => append_blank(&mut next.education, ids),
                Section::Certifications => append_blank(&mut next.certifications, ids),
                Section::Projects => append_blank(&mut next.projects, ids),
            }
            Some(next)
        }
        Edit::UpdateExperience { id, field, value } => {
            let experience = update_entry::<ExperienceEntry>(&doc.experience, &id, field, value)?;
            Some(ResumeDocument {
                experience,
                ..doc.clone()
            })
        }
        Edit::UpdateEducation { id, field, value } => {
            let education = update_entry::<EducationEntry>(&doc.education, &id, field, value)?;
            Some(ResumeDocument {
                education,
                ..doc.clone()
            })
        }
        Edit::UpdateCertification { id, field, value } => {
            let certifications =
                update_entry::<CertificationEntry>(&doc.certifications, &id, field, value)?;
            Some(ResumeDocument {
                certifications,
                ..doc.clone()
            })
        }
        Edit::UpdateProject { id, field, value } => {
            let projects = update_entry::<ProjectEntry>(&doc.projects, &id, field, value)?;
            Some(ResumeDocument {
                projects,
                ..doc.clone()
            })
        }
        Edit::RemoveEntry { section, id } => {
            let mut next = doc.clone();
            let removed = match section {
                Section::Experience => remove_entry(&mut next.experience, &id),
                Section::Education => remove_entry(&mut next.education, &id),
                Section::Certifications => remove_entry(&mut next.certifications, &id),
                Section::Projects => remove_entry(&mut next.projects, &id),
            };
            removed.then_some(next)
        }
    }
}

/// Appends a blank record whose id is not already used in `entries`.
fn append_blank<T: SectionEntry>(entries: &mut Vec<T>, ids: &mut dyn IdGenerator) {
    let id = loop {
        let candidate = ids.next_id();
        if !entries.iter().any(|e| e.id() == &candidate) {
            break candidate;
        }
    };
    entries.push(T::blank(id));
}

fn update_entry<T: SectionEntry>(
    entries: &[T],
    id: &EntryId,
    field: T::Field,
    value: String,
) -> Option<Vec<T>> {
    let position = entries.iter().position(|e| e.id() == id)?;
    let mut next = entries.to_vec();
    *next[position].get_mut(field) = value;
    Some(next)
}

fn remove_entry<T: SectionEntry>(entries: &mut Vec<T>, id: &EntryId) -> bool {
    let before = entries.len();
    entries.retain(|e| e.id() != id);
    entries.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::ids::SequentialIds;

    fn sample() -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        doc.personal_info.full_name = "Jane Doe".to_string();
        doc.skills = vec!["Go".to_string(), "Rust".to_string()];
        doc
    }

    fn add(doc: &ResumeDocument, section: Section, ids: &mut SequentialIds) -> ResumeDocument {
        apply_edit(doc, Edit::AddEntry { section }, ids).unwrap()
    }

    #[test]
    fn test_blank_skill_is_rejected() {
        let doc = sample();
        let mut ids = SequentialIds::new();
        for text in ["", "   ", "\t\n"] {
            let edit = Edit::AddSkill {
                text: text.to_string(),
            };
            assert!(apply_edit(&doc, edit, &mut ids).is_none());
        }
        assert_eq!(doc, sample());
    }

    #[test]
    fn test_add_skill_appends_trimmed() {
        let doc = sample();
        let mut ids = SequentialIds::new();
        let next = apply_edit(
            &doc,
            Edit::AddSkill {
                text: "  C++ ".to_string(),
            },
            &mut ids,
        )
        .unwrap();
        assert_eq!(next.skills, vec!["Go", "Rust", "C++"]);
        assert_eq!(doc.skills, vec!["Go", "Rust"]);
    }

    #[test]
    fn test_duplicate_skills_are_kept() {
        let doc = sample();
        let mut ids = SequentialIds::new();
        let next = apply_edit(
            &doc,
            Edit::AddSkill {
                text: "Go".to_string(),
            },
            &mut ids,
        )
        .unwrap();
        assert_eq!(next.skills, vec!["Go", "Rust", "Go"]);
    }

    #[test]
    fn test_remove_skill_by_index() {
        let doc = sample();
        let mut ids = SequentialIds::new();
        let next = apply_edit(&doc, Edit::RemoveSkill { index: 0 }, &mut ids).unwrap();
        assert_eq!(next.skills, vec!["Rust"]);
        assert!(apply_edit(&doc, Edit::RemoveSkill { index: 2 }, &mut ids).is_none());
    }

    #[test]
    fn test_update_personal_info_overwrites_one_field() {
        let doc = sample();
        let mut ids = SequentialIds::new();
        let next = apply_edit(
            &doc,
            Edit::UpdatePersonalInfo {
                field: PersonalInfoField::Github,
                value: "github.com/jane".to_string(),
            },
            &mut ids,
        )
        .unwrap();
        assert_eq!(next.personal_info.github, "github.com/jane");
        assert_eq!(next.personal_info.full_name, "Jane Doe");
        assert_eq!(doc.personal_info.github, "");
    }

    #[test]
    fn test_update_summary() {
        let mut ids = SequentialIds::new();
        let next = apply_edit(
            &sample(),
            Edit::UpdateSummary {
                value: "Systems engineer".to_string(),
            },
            &mut ids,
        )
        .unwrap();
        assert_eq!(next.summary, "Systems engineer");
        assert_eq!(next.skills, sample().skills);
    }

    #[test]
    fn test_add_entry_assigns_fresh_ids_in_order() {
        let mut ids = SequentialIds::new();
        let doc = add(&sample(), Section::Experience, &mut ids);
        let doc = add(&doc, Section::Experience, &mut ids);
        let doc = add(&doc, Section::Projects, &mut ids);

        let exp_ids: Vec<_> = doc.experience.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(exp_ids, vec!["1", "2"]);
        assert_eq!(doc.projects[0].id.as_str(), "3");
        assert_eq!(doc.experience[0].title, "");
    }

    #[test]
    fn test_add_entry_skips_ids_already_present() {
        let mut doc = sample();
        doc.education
            .push(EducationEntry::blank(EntryId::new("1")));
        let mut ids = SequentialIds::new();
        let doc = add(&doc, Section::Education, &mut ids);
        assert_eq!(doc.education[1].id.as_str(), "2");
    }

    #[test]
    fn test_update_entry_by_id() {
        let mut ids = SequentialIds::new();
        let doc = add(&sample(), Section::Experience, &mut ids);
        let doc = add(&doc, Section::Experience, &mut ids);
        let second = doc.experience[1].id.clone();

        let next = apply_edit(
            &doc,
            Edit::UpdateExperience {
                id: second,
                field: ExperienceField::Company,
                value: "Initech".to_string(),
            },
            &mut ids,
        )
        .unwrap();
        assert_eq!(next.experience[0].company, "");
        assert_eq!(next.experience[1].company, "Initech");
        assert_eq!(doc.experience[1].company, "");
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        let mut ids = SequentialIds::new();
        let doc = add(&sample(), Section::Certifications, &mut ids);
        let missing = EntryId::new("404");

        let edits = vec![
            Edit::UpdateExperience {
                id: missing.clone(),
                field: ExperienceField::Title,
                value: "x".to_string(),
            },
            Edit::UpdateEducation {
                id: missing.clone(),
                field: EducationField::Year,
                value: "x".to_string(),
            },
            Edit::UpdateCertification {
                id: missing.clone(),
                field: CertificationField::Name,
                value: "x".to_string(),
            },
            Edit::UpdateProject {
                id: missing.clone(),
                field: ProjectField::Link,
                value: "x".to_string(),
            },
            Edit::RemoveEntry {
                section: Section::Certifications,
                id: missing.clone(),
            },
            Edit::RemoveEntry {
                section: Section::Projects,
                id: missing,
            },
        ];
        for edit in edits {
            assert!(apply_edit(&doc, edit, &mut ids).is_none());
        }
    }

    #[test]
    fn test_id_from_other_section_does_not_match() {
        let mut ids = SequentialIds::new();
        let doc = add(&sample(), Section::Experience, &mut ids);
        let id = doc.experience[0].id.clone();
        let edit = Edit::RemoveEntry {
            section: Section::Education,
            id,
        };
        assert!(apply_edit(&doc, edit, &mut ids).is_none());
    }

    #[test]
    fn test_add_then_remove_restores_section() {
        let mut ids = SequentialIds::new();
        let original = add(&sample(), Section::Projects, &mut ids);
        let added = add(&original, Section::Projects, &mut ids);
        let new_id = added.projects[1].id.clone();

        let removed = apply_edit(
            &added,
            Edit::RemoveEntry {
                section: Section::Projects,
                id: new_id,
            },
            &mut ids,
        )
        .unwrap();
        assert_eq!(removed.projects, original.projects);
        assert_eq!(removed, original);
    }

    #[test]
    fn test_edit_json_shape() {
        let edit: Edit = serde_json::from_str(
            r#"{"op":"update_experience","id":"3","field":"startDate","value":"Jan 2020"}"#,
        )
        .unwrap();
        assert_eq!(
            edit,
            Edit::UpdateExperience {
                id: EntryId::new("3"),
                field: ExperienceField::StartDate,
                value: "Jan 2020".to_string(),
            }
        );

        let edit: Edit =
            serde_json::from_str(r#"{"op":"add_entry","section":"certifications"}"#).unwrap();
        assert_eq!(
            edit,
            Edit::AddEntry {
                section: Section::Certifications
            }
        );
    }
}
