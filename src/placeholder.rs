// src/placeholder.rs
//! Sample resume shipped with the tool. Every value here is a stand-in
//! meant to be overwritten by hand with the user's own details.

use crate::types::{Education, Grade, PersonalInfo, Project, Resume, TechnicalSkills};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Resume {
    /// Build the placeholder resume. Cannot fail.
    pub fn placeholder() -> Self {
        Self {
            personal_info: PersonalInfo {
                name: "ALAGARSAMY D".to_string(), // placeholder
                title: "Frontend Developer".to_string(),
                location: "Salem, Tamil Nadu, India".to_string(),
                phone: "+91-9876543210".to_string(),
                email: "alagarsamy@email.com".to_string(),
                linkedin: "linkedin.com/in/alagarsamy".to_string(),
                github: "github.com/alagarsamy".to_string(),
            },
            summary: "Passionate Frontend Developer with expertise in modern web technologies. \
                      Dedicated to creating responsive, user-friendly web applications with clean, \
                      efficient code."
                .to_string(),
            education: vec![
                Education {
                    degree: "Bachelor of Computer Science".to_string(),
                    institution: "Anna University".to_string(),
                    year: "2020-2024".to_string(),
                    grade: Grade::Cgpa("8.5/10".to_string()),
                },
                Education {
                    degree: "Higher Secondary Certificate".to_string(),
                    institution: "Government Higher Secondary School".to_string(),
                    year: "2019-2020".to_string(),
                    grade: Grade::Percentage("85%".to_string()),
                },
            ],
            technical_skills: TechnicalSkills {
                languages: strings(&["HTML5", "CSS3", "JavaScript", "Python", "Java"]),
                frameworks: strings(&["React.js", "Node.js", "Bootstrap", "Tailwind CSS"]),
                tools: strings(&["Git", "VS Code", "Figma", "Adobe XD"]),
                databases: strings(&["MySQL", "MongoDB"]),
                others: strings(&["Responsive Design", "RESTful APIs", "Version Control"]),
            },
            projects: vec![
                Project {
                    name: "E-Commerce Website".to_string(),
                    description: "Responsive e-commerce platform with shopping cart functionality"
                        .to_string(),
                    technologies: strings(&["HTML", "CSS", "JavaScript", "Bootstrap"]),
                    duration: "Jan 2024 - Feb 2024".to_string(),
                },
                Project {
                    name: "Weather App".to_string(),
                    description: "Real-time weather application using API integration".to_string(),
                    technologies: strings(&["React.js", "CSS", "Weather API"]),
                    duration: "Mar 2024 - Mar 2024".to_string(),
                },
                Project {
                    name: "Portfolio Website".to_string(),
                    description: "Personal portfolio showcasing projects and skills".to_string(),
                    technologies: strings(&["HTML", "CSS", "JavaScript", "Animations"]),
                    duration: "Apr 2024 - Present".to_string(),
                },
            ],
            certifications: strings(&[
                "JavaScript Fundamentals - FreeCodeCamp",
                "Responsive Web Design - FreeCodeCamp",
                "Frontend Development - Coursera",
            ]),
            achievements: strings(&[
                "Dean's List for Academic Excellence",
                "Best Project Award - College Tech Fest",
                "Active contributor to open source projects",
            ]),
        }
    }
}
