use crate::scoring::{OpportunityCategory, OpportunityThreshold, QuizOption, QuizQuestion, Scholarship};

fn opportunity(name: &str, min_average: f64, category: OpportunityCategory) -> OpportunityThreshold {
    OpportunityThreshold {
        name: name.to_string(),
        min_average,
        category,
    }
}

/// Built-in admission thresholds, used when the config file lists none.
pub fn default_opportunities() -> Vec<OpportunityThreshold> {
    use OpportunityCategory::*;
    vec![
        opportunity("Faculté de Médecine et de Pharmacie", 15.5, Health),
        opportunity("Classes Préparatoires (CPGE)", 15.0, Engineering),
        opportunity("ENSAM", 14.5, Engineering),
        opportunity("ENSA", 14.0, Engineering),
        opportunity("École Nationale d'Architecture", 14.0, Architecture),
        opportunity("ISCAE", 14.0, Business),
        opportunity("École Normale Supérieure", 13.0, Humanities),
        opportunity("ENCG", 12.5, Business),
        opportunity("Faculté des Sciences et Techniques", 12.0, Sciences),
        opportunity("ISPITS", 12.0, Health),
        opportunity("École Supérieure de Technologie", 12.0, Engineering),
        opportunity("Faculté des Sciences", 10.0, Sciences),
        opportunity("Faculté des Lettres et Sciences Humaines", 10.0, Humanities),
    ]
}

fn scholarship(name: &str, provider: &str, deadline: &str, min_average: Option<f64>) -> Scholarship {
    Scholarship {
        name: name.to_string(),
        provider: provider.to_string(),
        deadline: deadline.to_string(),
        min_average,
    }
}

pub fn default_scholarships() -> Vec<Scholarship> {
    vec![
        scholarship("Bourse d'Excellence", "Fondation OCP", "31 Juillet", Some(15.0)),
        scholarship("Bourse Minhaty", "ONOUSC", "15 Juillet", None),
        scholarship("Bourse Mérite", "Fondation BMCE Bank", "30 Juin", Some(16.0)),
        scholarship("Bourse Études Supérieures", "Fondation Attijariwafa bank", "15 Septembre", Some(14.0)),
    ]
}

fn question(prompt: &str, options: &[(&str, OpportunityCategory)]) -> QuizQuestion {
    QuizQuestion {
        prompt: prompt.to_string(),
        options: options
            .iter()
            .map(|(text, category)| QuizOption {
                text: text.to_string(),
                category: *category,
            })
            .collect(),
    }
}

pub fn default_quiz() -> Vec<QuizQuestion> {
    use OpportunityCategory::*;
    vec![
        question(
            "Which subject do you enjoy most?",
            &[
                ("Mathematics and physics", Engineering),
                ("Biology", Health),
                ("Economics", Business),
                ("Literature and philosophy", Humanities),
            ],
        ),
        question(
            "What would you rather build?",
            &[
                ("A machine or an app", Engineering),
                ("A building", Architecture),
                ("A company", Business),
                ("An experiment", Sciences),
            ],
        ),
        question(
            "Where do you see yourself working?",
            &[
                ("A hospital", Health),
                ("A laboratory", Sciences),
                ("A design studio", Architecture),
                ("A classroom", Humanities),
            ],
        ),
        question(
            "Which activity sounds best on a free afternoon?",
            &[
                ("Solving puzzles", Engineering),
                ("Sketching", Architecture),
                ("Volunteering to help people", Health),
                ("Reading", Humanities),
            ],
        ),
        question(
            "What matters most in a future job?",
            &[
                ("Technical challenge", Engineering),
                ("Leading a team", Business),
                ("Discovering something new", Sciences),
                ("Caring for others", Health),
            ],
        ),
    ]
}
