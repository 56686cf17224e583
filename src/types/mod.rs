// src/types/mod.rs
pub mod resume_data;

pub use resume_data::{Education, Grade, PersonalInfo, Project, Resume, TechnicalSkills};
