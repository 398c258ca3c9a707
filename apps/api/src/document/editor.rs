//! Document editor: the only writer of a session's `ResumeDocument`.
//!
//! Every operation derives a fresh document from the current snapshot and swaps the
//! `Arc`. Readers holding an older snapshot keep a consistent view; a no-op leaves the
//! `Arc` (and the revision) untouched, so pointer identity doubles as change detection.
//!
//! Out-of-range indices are never errors: the operation does nothing and reports
//! `false`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::document::model::{
    new_education_entry, new_experience_entry, EducationField, EntryField, ExperienceField,
    ListKind, ResumeDocument, ScalarField, NEW_SKILL,
};

// ────────────────────────────────────────────────────────────────────────────
// Wire form of an edit
// ────────────────────────────────────────────────────────────────────────────

/// A single editing operation as sent by a client.
///
/// Indices are signed so that a client sending `-1` gets the documented no-op
/// instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    SetField {
        field: ScalarField,
        value: String,
    },
    AddExperience,
    AddEducation,
    AddSkill,
    Remove {
        list: ListKind,
        index: i64,
    },
    UpdateExperience {
        index: i64,
        field: ExperienceField,
        value: String,
    },
    UpdateEducation {
        index: i64,
        field: EducationField,
        value: String,
    },
    UpdateSkill {
        index: i64,
        value: String,
    },
}

fn position(index: i64) -> Option<usize> {
    usize::try_from(index).ok()
}

// ────────────────────────────────────────────────────────────────────────────
// Editor
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Editor {
    snapshot: Arc<ResumeDocument>,
    revision: u64,
}

impl Default for Editor {
    fn default() -> Self {
        Editor::new(ResumeDocument::placeholder())
    }
}

impl Editor {
    pub fn new(document: ResumeDocument) -> Self {
        Editor {
            snapshot: Arc::new(document),
            revision: 0,
        }
    }

    /// The current document. Cheap to clone and never mutated afterwards.
    pub fn snapshot(&self) -> Arc<ResumeDocument> {
        Arc::clone(&self.snapshot)
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.snapshot
    }

    /// Number of committed changes since the session started.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies a wire operation. Returns whether the document changed.
    pub fn apply(&mut self, op: &EditOp) -> bool {
        match op {
            EditOp::SetField { field, value } => self.set_field(*field, value.clone()),
            EditOp::AddExperience => {
                self.add_experience();
                true
            }
            EditOp::AddEducation => {
                self.add_education();
                true
            }
            EditOp::AddSkill => {
                self.add_skill();
                true
            }
            EditOp::Remove { list, index } => match position(*index) {
                Some(i) => self.remove_at(*list, i),
                None => false,
            },
            EditOp::UpdateExperience {
                index,
                field,
                value,
            } => match position(*index) {
                Some(i) => self.update_entry_field(i, EntryField::Experience(*field), value.clone()),
                None => false,
            },
            EditOp::UpdateEducation {
                index,
                field,
                value,
            } => match position(*index) {
                Some(i) => self.update_entry_field(i, EntryField::Education(*field), value.clone()),
                None => false,
            },
            EditOp::UpdateSkill { index, value } => match position(*index) {
                Some(i) => self.update_skill(i, value.clone()),
                None => false,
            },
        }
    }

    /// Replaces one scalar field. Always commits a new snapshot.
    pub fn set_field(&mut self, field: ScalarField, value: impl Into<String>) -> bool {
        let value = value.into();
        self.commit(|doc| *doc.scalar_mut(field) = value);
        true
    }

    /// Appends a placeholder experience entry and returns its index.
    pub fn add_experience(&mut self) -> usize {
        self.commit(|doc| doc.experience.push(new_experience_entry()));
        self.snapshot.experience.len() - 1
    }

    /// Appends a placeholder education entry and returns its index.
    pub fn add_education(&mut self) -> usize {
        self.commit(|doc| doc.education.push(new_education_entry()));
        self.snapshot.education.len() - 1
    }

    /// Appends a placeholder skill and returns its index.
    pub fn add_skill(&mut self) -> usize {
        self.commit(|doc| doc.skills.push(NEW_SKILL.to_string()));
        self.snapshot.skills.len() - 1
    }

    /// Removes the element at `index`; entries after it shift down by one.
    pub fn remove_at(&mut self, list: ListKind, index: usize) -> bool {
        if index >= self.snapshot.list_len(list) {
            return false;
        }
        self.commit(|doc| match list {
            ListKind::Experience => {
                doc.experience.remove(index);
            }
            ListKind::Education => {
                doc.education.remove(index);
            }
            ListKind::Skills => {
                doc.skills.remove(index);
            }
        });
        true
    }

    /// Replaces one field of the entry at `index`, leaving everything else as is.
    pub fn update_entry_field(
        &mut self,
        index: usize,
        field: EntryField,
        value: impl Into<String>,
    ) -> bool {
        if index >= self.snapshot.list_len(field.list()) {
            return false;
        }
        let value = value.into();
        self.commit(|doc| match field {
            EntryField::Experience(f) => *doc.experience[index].field_mut(f) = value,
            EntryField::Education(f) => *doc.education[index].field_mut(f) = value,
        });
        true
    }

    pub fn update_skill(&mut self, index: usize, value: impl Into<String>) -> bool {
        if index >= self.snapshot.skills.len() {
            return false;
        }
        let value = value.into();
        self.commit(|doc| doc.skills[index] = value);
        true
    }

    fn commit(&mut self, change: impl FnOnce(&mut ResumeDocument)) {
        let mut next = ResumeDocument::clone(&self.snapshot);
        change(&mut next);
        self.snapshot = Arc::new(next);
        self.revision += 1;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::model::ExperienceEntry;
    use proptest::prelude::*;

    fn editor_with_experience(titles: &[&str]) -> Editor {
        let mut doc = ResumeDocument::blank();
        doc.experience = titles
            .iter()
            .map(|t| ExperienceEntry {
                title: t.to_string(),
                company: format!("{t} Inc"),
                period: "2020".to_string(),
                description: String::new(),
            })
            .collect();
        Editor::new(doc)
    }

    fn titles(editor: &Editor) -> Vec<String> {
        editor
            .document()
            .experience
            .iter()
            .map(|e| e.title.clone())
            .collect()
    }

    #[test]
    fn test_set_field_replaces_only_that_field() {
        let mut editor = Editor::default();
        let before = editor.snapshot();
        assert!(editor.set_field(ScalarField::FullName, "Ada Lovelace"));
        let after = editor.snapshot();
        assert_eq!(after.full_name, "Ada Lovelace");
        assert_eq!(after.title, before.title);
        assert_eq!(after.experience, before.experience);
        assert_eq!(before.full_name, "Your Full Name", "old snapshot must not change");
        assert_eq!(editor.revision(), 1);
    }

    #[test]
    fn test_set_field_accepts_empty_string() {
        let mut editor = Editor::default();
        editor.set_field(ScalarField::Email, "");
        assert_eq!(editor.document().email, "");
    }

    #[test]
    fn test_add_appends_placeholders_at_end() {
        let mut editor = Editor::default();
        assert_eq!(editor.add_experience(), 1);
        assert_eq!(editor.document().experience[1].title, "New Position");
        assert_eq!(editor.add_education(), 1);
        assert_eq!(editor.document().education[1].degree, "Degree");
        assert_eq!(editor.add_skill(), 4);
        assert_eq!(editor.document().skills[4], "New Skill");
        assert_eq!(editor.revision(), 3);
    }

    #[test]
    fn test_remove_at_shifts_following_entries() {
        let mut editor = editor_with_experience(&["a", "b", "c"]);
        assert!(editor.remove_at(ListKind::Experience, 1));
        assert_eq!(titles(&editor), vec!["a", "c"]);
        assert!(editor.remove_at(ListKind::Experience, 1));
        assert_eq!(titles(&editor), vec!["a"]);
    }

    #[test]
    fn test_remove_out_of_bounds_is_noop_and_keeps_snapshot() {
        let mut editor = editor_with_experience(&["a", "b"]);
        let before = editor.snapshot();
        assert!(!editor.remove_at(ListKind::Experience, 2));
        assert!(!editor.remove_at(ListKind::Skills, 0));
        assert!(Arc::ptr_eq(&before, &editor.snapshot()));
        assert_eq!(editor.revision(), 0);
    }

    #[test]
    fn test_negative_index_ops_are_noops() {
        let mut editor = Editor::default();
        let before = editor.snapshot();
        assert!(!editor.apply(&EditOp::Remove {
            list: ListKind::Skills,
            index: -1,
        }));
        assert!(!editor.apply(&EditOp::UpdateSkill {
            index: -3,
            value: "x".to_string(),
        }));
        assert!(!editor.apply(&EditOp::UpdateEducation {
            index: i64::MIN,
            field: EducationField::Year,
            value: "x".to_string(),
        }));
        assert!(Arc::ptr_eq(&before, &editor.snapshot()));
    }

    #[test]
    fn test_update_entry_field_touches_only_target() {
        let mut editor = editor_with_experience(&["a", "b", "c"]);
        let before = editor.snapshot();
        assert!(editor.update_entry_field(
            1,
            EntryField::Experience(ExperienceField::Company),
            "Acme",
        ));
        let after = editor.snapshot();
        assert_eq!(after.experience[1].company, "Acme");
        assert_eq!(after.experience[1].title, "b");
        assert_eq!(after.experience[0], before.experience[0]);
        assert_eq!(after.experience[2], before.experience[2]);
        assert_eq!(after.skills, before.skills);
    }

    #[test]
    fn test_update_entry_field_out_of_bounds_is_noop() {
        let mut editor = Editor::default();
        assert!(!editor.update_entry_field(
            5,
            EntryField::Education(EducationField::Degree),
            "PhD",
        ));
        assert_eq!(editor.revision(), 0);
    }

    #[test]
    fn test_update_skill() {
        let mut editor = Editor::default();
        assert!(editor.update_skill(0, "Rust"));
        assert_eq!(editor.document().skills[0], "Rust");
        assert!(!editor.update_skill(99, "Go"));
    }

    #[test]
    fn test_edit_op_wire_format() {
        let op: EditOp = serde_json::from_str(
            r#"{"op":"set_field","field":"fullName","value":"Ada Lovelace"}"#,
        )
        .unwrap();
        assert_eq!(
            op,
            EditOp::SetField {
                field: ScalarField::FullName,
                value: "Ada Lovelace".to_string()
            }
        );
        let op: EditOp = serde_json::from_str(r#"{"op":"add_skill"}"#).unwrap();
        assert_eq!(op, EditOp::AddSkill);
        let op: EditOp = serde_json::from_str(
            r#"{"op":"update_experience","index":0,"field":"description","value":"d"}"#,
        )
        .unwrap();
        assert!(matches!(
            op,
            EditOp::UpdateExperience {
                field: ExperienceField::Description,
                ..
            }
        ));
    }

    #[test]
    fn test_edit_op_rejects_field_from_other_list() {
        let result: Result<EditOp, _> = serde_json::from_str(
            r#"{"op":"update_experience","index":0,"field":"degree","value":"d"}"#,
        );
        assert!(result.is_err());
    }

    #[derive(Debug, Clone)]
    enum ListOp {
        Add,
        Remove(i64),
    }

    fn arb_list_op() -> impl Strategy<Value = ListOp> {
        prop_oneof![Just(ListOp::Add), (-2i64..8).prop_map(ListOp::Remove)]
    }

    proptest! {
        #[test]
        fn prop_length_is_adds_minus_valid_removes(ops in prop::collection::vec(arb_list_op(), 0..40)) {
            let mut editor = editor_with_experience(&[]);
            let mut expected: usize = 0;
            for op in &ops {
                match op {
                    ListOp::Add => {
                        editor.apply(&EditOp::AddExperience);
                        expected += 1;
                    }
                    ListOp::Remove(i) => {
                        let valid = *i >= 0 && (*i as usize) < expected;
                        let changed = editor.apply(&EditOp::Remove { list: ListKind::Experience, index: *i });
                        prop_assert_eq!(changed, valid);
                        if valid {
                            expected -= 1;
                        }
                    }
                }
            }
            prop_assert_eq!(editor.document().experience.len(), expected);
        }

        #[test]
        fn prop_remove_preserves_order_of_untouched(len in 0usize..10, index in -2i64..12) {
            let names: Vec<String> = (0..len).map(|i| format!("e{i}")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let mut editor = editor_with_experience(&refs);
            editor.apply(&EditOp::Remove { list: ListKind::Experience, index });
            let mut expected = names.clone();
            if index >= 0 && (index as usize) < len {
                expected.remove(index as usize);
            }
            prop_assert_eq!(titles(&editor), expected);
        }

        #[test]
        fn prop_update_skill_changes_only_target(len in 0usize..8, index in -1i64..10, value in "[a-z]{0,6}") {
            let mut doc = ResumeDocument::blank();
            doc.skills = (0..len).map(|i| format!("s{i}")).collect();
            let mut editor = Editor::new(doc.clone());
            editor.apply(&EditOp::UpdateSkill { index, value: value.clone() });
            for (i, skill) in editor.document().skills.iter().enumerate() {
                if index >= 0 && i == index as usize {
                    prop_assert_eq!(skill, &value);
                } else {
                    prop_assert_eq!(skill, &doc.skills[i]);
                }
            }
            prop_assert_eq!(editor.document().skills.len(), len);
        }
    }
}
