use tracing::debug;

use crate::models::{Practitioner, PractitionerSearchQuery};

#[derive(Debug, Clone)]
pub struct PractitionerDirectory {
    practitioners: Vec<Practitioner>,
}

impl PractitionerDirectory {
    pub fn new(practitioners: Vec<Practitioner>) -> Self {
        Self { practitioners }
    }

    pub fn clinic_default() -> Self {
        Self::new(vec![
            Practitioner {
                id: 1,
                name: "Dr. Rajesh Kumar".to_string(),
                specialization: "Panchakarma Specialist".to_string(),
                experience: "15 years".to_string(),
                rating: 4.8,
                reviews: 156,
                location: "Mumbai, Maharashtra".to_string(),
                languages: strings(&["Hindi", "English", "Marathi"]),
                availability: "Mon-Sat".to_string(),
                next_available: "Tomorrow".to_string(),
                bio: "Specialized in traditional Panchakarma treatments with extensive experience in stress management and chronic disease treatment.".to_string(),
                avatar: "RK".to_string(),
            },
            Practitioner {
                id: 2,
                name: "Dr. Priya Sharma".to_string(),
                specialization: "Ayurvedic Medicine".to_string(),
                experience: "12 years".to_string(),
                rating: 4.9,
                reviews: 203,
                location: "Mumbai, Maharashtra".to_string(),
                languages: strings(&["Hindi", "English", "Gujarati"]),
                availability: "Mon-Fri".to_string(),
                next_available: "Dec 28".to_string(),
                bio: "Expert in women's health and reproductive wellness through Ayurvedic principles and personalized treatment plans.".to_string(),
                avatar: "PS".to_string(),
            },
            Practitioner {
                id: 3,
                name: "Dr. Amit Patel".to_string(),
                specialization: "Kayachikitsa".to_string(),
                experience: "18 years".to_string(),
                rating: 4.7,
                reviews: 189,
                location: "Mumbai, Maharashtra".to_string(),
                languages: strings(&["Hindi", "English", "Gujarati"]),
                availability: "Tue-Sun".to_string(),
                next_available: "Dec 29".to_string(),
                bio: "Focuses on digestive health and metabolic disorders using classical Ayurvedic treatments and modern diagnostic approaches.".to_string(),
                avatar: "AP".to_string(),
            },
        ])
    }

    pub fn all(&self) -> &[Practitioner] {
        &self.practitioners
    }

    pub fn get(&self, id: u32) -> Option<&Practitioner> {
        debug!("Looking up practitioner {}", id);
        self.practitioners.iter().find(|p| p.id == id)
    }

    /// Any practitioner may deliver any therapy, so there is no therapy filter.
    pub fn search(&self, query: &PractitionerSearchQuery) -> Vec<&Practitioner> {
        self.practitioners
            .iter()
            .filter(|p| query.language.as_deref().map_or(true, |l| p.speaks(l)))
            .filter(|p| query.min_rating.map_or(true, |r| p.rating >= r))
            .collect()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_are_within_five_stars() {
        let directory = PractitionerDirectory::clinic_default();
        assert!(directory
            .all()
            .iter()
            .all(|p| (0.0..=5.0).contains(&p.rating)));
    }

    #[test]
    fn search_by_language_and_rating() {
        let directory = PractitionerDirectory::clinic_default();

        let marathi = directory.search(&PractitionerSearchQuery {
            language: Some("marathi".to_string()),
            min_rating: None,
        });
        assert_eq!(marathi.len(), 1);
        assert_eq!(marathi[0].name, "Dr. Rajesh Kumar");

        let gujarati_top = directory.search(&PractitionerSearchQuery {
            language: Some("Gujarati".to_string()),
            min_rating: Some(4.8),
        });
        assert_eq!(gujarati_top.len(), 1);
        assert_eq!(gujarati_top[0].name, "Dr. Priya Sharma");
    }
}
