// src/types/resume_data.rs
//! Resume data structures, keyed the same way the record is serialized

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub education: Vec<Education>,
    pub technical_skills: TechnicalSkills,
    pub projects: Vec<Project>,
    pub certifications: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EducationRepr")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
    #[serde(flatten)]
    pub grade: Grade,
}

// Wire shape of an education entry; the grade keys are checked on conversion.
#[derive(Deserialize)]
struct EducationRepr {
    degree: String,
    institution: String,
    year: String,
    cgpa: Option<String>,
    percentage: Option<String>,
}

impl TryFrom<EducationRepr> for Education {
    type Error = anyhow::Error;

    fn try_from(repr: EducationRepr) -> Result<Self> {
        let grade = match (repr.cgpa, repr.percentage) {
            (Some(cgpa), None) => Grade::Cgpa(cgpa),
            (None, Some(percentage)) => Grade::Percentage(percentage),
            (Some(_), Some(_)) => bail!(
                "Education entry '{}' has both cgpa and percentage",
                repr.degree
            ),
            (None, None) => bail!(
                "Education entry '{}' has neither cgpa nor percentage",
                repr.degree
            ),
        };

        Ok(Self {
            degree: repr.degree,
            institution: repr.institution,
            year: repr.year,
            grade,
        })
    }
}

/// Final grade of an education entry. An entry carries one or the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Cgpa(String),
    Percentage(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalSkills {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
    pub databases: Vec<String>,
    pub others: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub duration: String,
}

// Read-back helpers for tests; the program itself never inspects the record.
#[cfg(test)]
impl Grade {
    pub fn value(&self) -> &str {
        match self {
            Grade::Cgpa(v) | Grade::Percentage(v) => v,
        }
    }
}

#[cfg(test)]
impl TechnicalSkills {
    /// Skill categories in display order
    pub fn categories(&self) -> [(&'static str, &[String]); 5] {
        [
            ("languages", self.languages.as_slice()),
            ("frameworks", self.frameworks.as_slice()),
            ("tools", self.tools.as_slice()),
            ("databases", self.databases.as_slice()),
            ("others", self.others.as_slice()),
        ]
    }
}

#[cfg(test)]
impl PersonalInfo {
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("name", self.name.as_str()),
            ("title", self.title.as_str()),
            ("location", self.location.as_str()),
            ("phone", self.phone.as_str()),
            ("email", self.email.as_str()),
            ("linkedin", self.linkedin.as_str()),
            ("github", self.github.as_str()),
        ]
    }
}

#[cfg(test)]
impl Resume {
    /// True when every top-level section holds at least one value.
    pub fn is_fully_populated(&self) -> bool {
        !self.summary.is_empty()
            && self.personal_info.fields().iter().all(|(_, v)| !v.is_empty())
            && !self.education.is_empty()
            && self
                .technical_skills
                .categories()
                .iter()
                .all(|(_, skills)| !skills.is_empty())
            && !self.projects.is_empty()
            && !self.certifications.is_empty()
            && !self.achievements.is_empty()
    }
}
