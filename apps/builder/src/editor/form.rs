//! Form editor: turns user edits into whole-document replacements and hands
//! each replacement to the host through a change callback.
//!
//! The editor never stores the canonical document. Every call receives the
//! host's current value and, when the edit succeeds, invokes the callback
//! exactly once with the new value. Rejected edits leave the callback alone.

use tracing::debug;

use crate::editor::edit::{apply_edit, Edit};
use crate::editor::ids::IdGenerator;
use crate::models::resume::{
    CertificationField, EducationField, EntryId, ExperienceField, PersonalInfoField,
    ProjectField, ResumeDocument, Section,
};

pub type ChangeCallback = Box<dyn FnMut(ResumeDocument) + Send + Sync>;

pub struct FormEditor {
    ids: Box<dyn IdGenerator>,
    /// Transient text of the "add a skill" input, committed by `add_skill`.
    skill_input: String,
    on_change: ChangeCallback,
}

impl FormEditor {
    pub fn new(
        ids: Box<dyn IdGenerator>,
        on_change: impl FnMut(ResumeDocument) + Send + Sync + 'static,
    ) -> Self {
        Self {
            ids,
            skill_input: String::new(),
            on_change: Box::new(on_change),
        }
    }

    /// Applies one edit against `data`. Returns true if the callback fired.
    pub fn dispatch(&mut self, data: &ResumeDocument, edit: Edit) -> bool {
        match apply_edit(data, edit, self.ids.as_mut()) {
            Some(next) => {
                (self.on_change)(next);
                true
            }
            None => {
                debug!("edit rejected, document unchanged");
                false
            }
        }
    }

    pub fn skill_input(&self) -> &str {
        &self.skill_input
    }

    pub fn set_skill_input(&mut self, text: impl Into<String>) {
        self.skill_input = text.into();
    }

    /// Commits the skill input buffer. The buffer is cleared only when the
    /// skill is accepted.
    pub fn add_skill(&mut self, data: &ResumeDocument) -> bool {
        let text = self.skill_input.clone();
        let added = self.dispatch(data, Edit::AddSkill { text });
        if added {
            self.skill_input.clear();
        }
        added
    }

    pub fn remove_skill(&mut self, data: &ResumeDocument, index: usize) -> bool {
        self.dispatch(data, Edit::RemoveSkill { index })
    }

    pub fn update_personal_info(
        &mut self,
        data: &ResumeDocument,
        field: PersonalInfoField,
        value: impl Into<String>,
    ) -> bool {
        let value = value.into();
        self.dispatch(data, Edit::UpdatePersonalInfo { field, value })
    }

    pub fn update_summary(&mut self, data: &ResumeDocument, value: impl Into<String>) -> bool {
        let value = value.into();
        self.dispatch(data, Edit::UpdateSummary { value })
    }

    pub fn add_experience(&mut self, data: &ResumeDocument) -> bool {
        self.add_entry(data, Section::Experience)
    }

    pub fn add_education(&mut self, data: &ResumeDocument) -> bool {
        self.add_entry(data, Section::Education)
    }

    pub fn add_certification(&mut self, data: &ResumeDocument) -> bool {
        self.add_entry(data, Section::Certifications)
    }

    pub fn add_project(&mut self, data: &ResumeDocument) -> bool {
        self.add_entry(data, Section::Projects)
    }

    fn add_entry(&mut self, data: &ResumeDocument, section: Section) -> bool {
        self.dispatch(data, Edit::AddEntry { section })
    }

    pub fn update_experience(
        &mut self,
        data: &ResumeDocument,
        id: &EntryId,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> bool {
        let edit = Edit::UpdateExperience {
            id: id.clone(),
            field,
            value: value.into(),
        };
        self.dispatch(data, edit)
    }

    pub fn update_education(
        &mut self,
        data: &ResumeDocument,
        id: &EntryId,
        field: EducationField,
        value: impl Into<String>,
    ) -> bool {
        let edit = Edit::UpdateEducation {
            id: id.clone(),
            field,
            value: value.into(),
        };
        self.dispatch(data, edit)
    }

    pub fn update_certification(
        &mut self,
        data: &ResumeDocument,
        id: &EntryId,
        field: CertificationField,
        value: impl Into<String>,
    ) -> bool {
        let edit = Edit::UpdateCertification {
            id: id.clone(),
            field,
            value: value.into(),
        };
        self.dispatch(data, edit)
    }

    pub fn update_project(
        &mut self,
        data: &ResumeDocument,
        id: &EntryId,
        field: ProjectField,
        value: impl Into<String>,
    ) -> bool {
        let edit = Edit::UpdateProject {
            id: id.clone(),
            field,
            value: value.into(),
        };
        self.dispatch(data, edit)
    }

    pub fn remove_experience(&mut self, data: &ResumeDocument, id: &EntryId) -> bool {
        self.remove_entry(data, Section::Experience, id)
    }

    pub fn remove_education(&mut self, data: &ResumeDocument, id: &EntryId) -> bool {
        self.remove_entry(data, Section::Education, id)
    }

    pub fn remove_certification(&mut self, data: &ResumeDocument, id: &EntryId) -> bool {
        self.remove_entry(data, Section::Certifications, id)
    }

    pub fn remove_project(&mut self, data: &ResumeDocument, id: &EntryId) -> bool {
        self.remove_entry(data, Section::Projects, id)
    }

    fn remove_entry(&mut self, data: &ResumeDocument, section: Section, id: &EntryId) -> bool {
        let id = id.clone();
        self.dispatch(data, Edit::RemoveEntry { section, id })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::editor::ids::SequentialIds;

    /// Editor wired to a shared slot that records every callback value.
    fn recording_editor() -> (FormEditor, Arc<Mutex<Vec<ResumeDocument>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let editor = FormEditor::new(Box::new(SequentialIds::new()), move |doc| {
            sink.lock().unwrap().push(doc);
        });
        (editor, calls)
    }

    fn last(calls: &Arc<Mutex<Vec<ResumeDocument>>>) -> ResumeDocument {
        calls.lock().unwrap().last().cloned().unwrap()
    }

    #[test]
    fn test_each_success_fires_exactly_once() {
        let (mut editor, calls) = recording_editor();
        let doc = ResumeDocument::default();

        assert!(editor.update_personal_info(&doc, PersonalInfoField::FullName, "Jane Doe"));
        assert_eq!(calls.lock().unwrap().len(), 1);
        assert_eq!(last(&calls).personal_info.full_name, "Jane Doe");

        let doc = last(&calls);
        assert!(editor.update_summary(&doc, "Builds compilers"));
        assert_eq!(calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_rejected_edits_do_not_fire() {
        let (mut editor, calls) = recording_editor();
        let doc = ResumeDocument::default();

        editor.set_skill_input("   ");
        assert!(!editor.add_skill(&doc));
        assert!(!editor.remove_skill(&doc, 0));
        assert!(!editor.update_project(&doc, &EntryId::new("1"), ProjectField::Title, "x"));
        assert!(!editor.remove_education(&doc, &EntryId::new("1")));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_skill_buffer_clears_only_on_success() {
        let (mut editor, calls) = recording_editor();
        let doc = ResumeDocument::default();

        editor.set_skill_input("  ");
        assert!(!editor.add_skill(&doc));
        assert_eq!(editor.skill_input(), "  ");

        editor.set_skill_input(" Rust ");
        assert!(editor.add_skill(&doc));
        assert_eq!(editor.skill_input(), "");
        assert_eq!(last(&calls).skills, vec!["Rust"]);
    }

    #[test]
    fn test_section_lifecycle() {
        let (mut editor, calls) = recording_editor();
        let doc = ResumeDocument::default();

        assert!(editor.add_experience(&doc));
        let doc = last(&calls);
        let id = doc.experience[0].id.clone();

        assert!(editor.update_experience(&doc, &id, ExperienceField::Title, "Engineer"));
        let doc = last(&calls);
        assert_eq!(doc.experience[0].title, "Engineer");

        assert!(editor.remove_experience(&doc, &id));
        assert!(last(&calls).experience.is_empty());
        assert_eq!(calls.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_every_section_can_be_added() {
        let (mut editor, calls) = recording_editor();
        let doc = ResumeDocument::default();
        assert!(editor.add_education(&doc));
        let doc = last(&calls);
        assert!(editor.add_certification(&doc));
        let doc = last(&calls);
        assert!(editor.add_project(&doc));
        let doc = last(&calls);

        assert_eq!(doc.education.len(), 1);
        assert_eq!(doc.certifications.len(), 1);
        assert_eq!(doc.projects.len(), 1);

        let cert = doc.certifications[0].id.clone();
        assert!(editor.update_certification(&doc, &cert, CertificationField::Date, "2023"));
        let edu = doc.education[0].id.clone();
        assert!(editor.update_education(&doc, &edu, EducationField::Year, "2020"));
        let project = doc.projects[0].id.clone();
        assert!(editor.remove_project(&doc, &project));
        assert!(editor.remove_certification(&doc, &cert));
    }
}
