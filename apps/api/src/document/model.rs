//! Résumé document types and the field/list selectors used by the editor.
//!
//! All text is free-form. Nothing here validates content: empty strings and empty
//! lists are legal everywhere and every renderer must cope with them.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

/// The record a user edits during one session.
///
/// List order is display order. Position is the only identity an entry has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
}

impl ResumeDocument {
    /// Illustrative content shown when a session starts.
    pub fn placeholder() -> Self {
        ResumeDocument {
            full_name: "Your Full Name".to_string(),
            title: "Your Professional Title".to_string(),
            email: "your.email@example.com".to_string(),
            phone: "+1 555 000 0000".to_string(),
            location: "City, Country".to_string(),
            summary: "Professional with experience in...".to_string(),
            experience: vec![ExperienceEntry {
                title: "Job Title".to_string(),
                company: "Company Name".to_string(),
                period: "2020 - Present".to_string(),
                description: "Description of responsibilities and achievements...".to_string(),
            }],
            education: vec![EducationEntry {
                degree: "Degree / Master's".to_string(),
                institution: "University".to_string(),
                year: "2020".to_string(),
            }],
            skills: vec![
                "Skill 1".to_string(),
                "Skill 2".to_string(),
                "Skill 3".to_string(),
                "Skill 4".to_string(),
            ],
        }
    }

    /// A document with no content at all. Used to check renderers degrade cleanly.
    #[cfg(test)]
    pub fn blank() -> Self {
        ResumeDocument {
            full_name: String::new(),
            title: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            summary: String::new(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
        }
    }

    pub(crate) fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::FullName => &mut self.full_name,
            ScalarField::Title => &mut self.title,
            ScalarField::Email => &mut self.email,
            ScalarField::Phone => &mut self.phone,
            ScalarField::Location => &mut self.location,
            ScalarField::Summary => &mut self.summary,
        }
    }

    pub fn list_len(&self, list: ListKind) -> usize {
        match list {
            ListKind::Experience => self.experience.len(),
            ListKind::Education => self.education.len(),
            ListKind::Skills => self.skills.len(),
        }
    }

    /// Contact fields in display order, skipping empty ones.
    pub fn contact_items(&self) -> Vec<&str> {
        [&self.email, &self.phone, &self.location]
            .into_iter()
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Placeholders for appended entries
// ────────────────────────────────────────────────────────────────────────────

pub fn new_experience_entry() -> ExperienceEntry {
    ExperienceEntry {
        title: "New Position".to_string(),
        company: "Company".to_string(),
        period: "2023 - 2024".to_string(),
        description: "Description...".to_string(),
    }
}

pub fn new_education_entry() -> EducationEntry {
    EducationEntry {
        degree: "Degree".to_string(),
        institution: "Institution".to_string(),
        year: "2024".to_string(),
    }
}

pub const NEW_SKILL: &str = "New Skill";

// ────────────────────────────────────────────────────────────────────────────
// Selectors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarField {
    FullName,
    Title,
    Email,
    Phone,
    Location,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Experience,
    Education,
    Skills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Title,
    Company,
    Period,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Degree,
    Institution,
    Year,
}

/// One field of one entry kind. The list it belongs to is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Experience(ExperienceField),
    Education(EducationField),
}

impl EntryField {
    pub fn list(&self) -> ListKind {
        match self {
            EntryField::Experience(_) => ListKind::Experience,
            EntryField::Education(_) => ListKind::Education,
        }
    }
}

impl ExperienceEntry {
    pub(crate) fn field_mut(&mut self, field: ExperienceField) -> &mut String {
        match field {
            ExperienceField::Title => &mut self.title,
            ExperienceField::Company => &mut self.company,
            ExperienceField::Period => &mut self.period,
            ExperienceField::Description => &mut self.description,
        }
    }
}

impl EducationEntry {
    pub(crate) fn field_mut(&mut self, field: EducationField) -> &mut String {
        match field {
            EducationField::Degree => &mut self.degree,
            EducationField::Institution => &mut self.institution,
            EducationField::Year => &mut self.year,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
