use resume_data::types::{Grade, Resume};
use serde_json::{json, Value};

fn placeholder_json() -> Value {
    serde_json::to_value(Resume::placeholder()).unwrap()
}

#[test]
fn top_level_keys_are_present_and_non_empty() {
    let value = placeholder_json();
    let map = value.as_object().unwrap();

    let keys = [
        "personal_info",
        "summary",
        "education",
        "technical_skills",
        "projects",
        "certifications",
        "achievements",
    ];
    assert_eq!(map.len(), keys.len());
    for key in keys {
        let field = &map[key];
        let empty = match field {
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(o) => o.is_empty(),
            _ => true,
        };
        assert!(!empty, "{} should be populated", key);
    }
}

#[test]
fn personal_info_keeps_placeholder_values() {
    let value = placeholder_json();
    assert_eq!(
        value["personal_info"],
        json!({
            "name": "ALAGARSAMY D",
            "title": "Frontend Developer",
            "location": "Salem, Tamil Nadu, India",
            "phone": "+91-9876543210",
            "email": "alagarsamy@email.com",
            "linkedin": "linkedin.com/in/alagarsamy",
            "github": "github.com/alagarsamy"
        })
    );
}

#[test]
fn education_entries_carry_one_grade_key() {
    let value = placeholder_json();
    let education = value["education"].as_array().unwrap();

    assert_eq!(education[0]["cgpa"], "8.5/10");
    assert!(education[0].get("percentage").is_none());
    assert_eq!(education[1]["percentage"], "85%");
    assert!(education[1].get("cgpa").is_none());
}

#[test]
fn skill_categories_match_placeholder() {
    let value = placeholder_json();
    assert_eq!(
        value["technical_skills"],
        json!({
            "languages": ["HTML5", "CSS3", "JavaScript", "Python", "Java"],
            "frameworks": ["React.js", "Node.js", "Bootstrap", "Tailwind CSS"],
            "tools": ["Git", "VS Code", "Figma", "Adobe XD"],
            "databases": ["MySQL", "MongoDB"],
            "others": ["Responsive Design", "RESTful APIs", "Version Control"]
        })
    );
}

#[test]
fn projects_keep_display_order() {
    let resume = Resume::placeholder();
    let names: Vec<_> = resume.projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        ["E-Commerce Website", "Weather App", "Portfolio Website"]
    );
    assert_eq!(resume.projects[2].duration, "Apr 2024 - Present");
    assert_eq!(
        resume.projects[1].technologies,
        ["React.js", "CSS", "Weather API"]
    );
}

#[test]
fn json_reads_back_into_same_record() {
    let resume: Resume = serde_json::from_value(placeholder_json()).unwrap();
    assert_eq!(resume, Resume::placeholder());
    assert!(matches!(resume.education[0].grade, Grade::Cgpa(_)));
}
