use crate::models::Assessment;

pub const ASSESSMENTS: [Assessment; 2] = [
    Assessment {
        id: "ei",
        title: "Emotional Intelligence",
        description: "Understand how you recognize and manage emotions",
        duration: "15-20 mins",
        questions: 20,
    },
    Assessment {
        id: "big-five",
        title: "Big Five Personality",
        description: "Discover your unique personality traits",
        duration: "10-15 mins",
        questions: 20,
    },
];

pub fn find_assessment(id: &str) -> Option<&'static Assessment> {
    ASSESSMENTS.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_assessment() {
        assert_eq!(find_assessment("ei").unwrap().title, "Emotional Intelligence");
        assert!(find_assessment("iq").is_none());
    }

    #[test]
    fn test_summary() {
        assert_eq!(ASSESSMENTS[1].summary(), "10-15 mins • 20 questions");
    }
}
