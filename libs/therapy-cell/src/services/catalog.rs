use tracing::debug;

use crate::models::{Therapy, TherapyCategory};

/// The treatments the clinic offers. Built once at startup, read-only after.
#[derive(Debug, Clone)]
pub struct TherapyCatalog {
    therapies: Vec<Therapy>,
}

impl TherapyCatalog {
    pub fn new(therapies: Vec<Therapy>) -> Self {
        Self { therapies }
    }

    pub fn clinic_default() -> Self {
        Self::new(vec![
            therapy(
                1,
                "Abhyanga Massage",
                "Full body oil massage with warm herbal oils for deep relaxation and detoxification",
                60,
                2500,
                TherapyCategory::MassageTherapy,
                &["Stress Relief", "Improved Circulation", "Muscle Relaxation"],
            ),
            therapy(
                2,
                "Shirodhara",
                "Continuous pouring of warm oil on the forehead for mental clarity and relaxation",
                45,
                3000,
                TherapyCategory::SpecializedTherapy,
                &["Mental Clarity", "Stress Reduction", "Better Sleep"],
            ),
            therapy(
                3,
                "Panchakarma Assessment",
                "Comprehensive evaluation and personalized treatment plan development",
                45,
                1500,
                TherapyCategory::Consultation,
                &["Personalized Plan", "Health Assessment", "Treatment Guidance"],
            ),
            therapy(
                4,
                "Nasya Therapy",
                "Nasal administration of medicated oils for respiratory and sinus health",
                30,
                1800,
                TherapyCategory::SpecializedTherapy,
                &["Respiratory Health", "Sinus Relief", "Mental Clarity"],
            ),
            therapy(
                5,
                "Udvartana",
                "Herbal powder massage for weight management and skin health",
                60,
                2800,
                TherapyCategory::MassageTherapy,
                &["Weight Management", "Skin Health", "Improved Metabolism"],
            ),
            therapy(
                6,
                "Ayurvedic Consultation",
                "Initial consultation with detailed health assessment and treatment recommendations",
                30,
                1200,
                TherapyCategory::Consultation,
                &["Health Assessment", "Treatment Plan", "Lifestyle Guidance"],
            ),
        ])
    }

    pub fn all(&self) -> &[Therapy] {
        &self.therapies
    }

    pub fn get(&self, id: u32) -> Option<&Therapy> {
        debug!("Looking up therapy {}", id);
        self.therapies.iter().find(|t| t.id == id)
    }

    pub fn by_category(&self, category: TherapyCategory) -> Vec<&Therapy> {
        self.therapies
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }
}

fn therapy(
    id: u32,
    name: &str,
    description: &str,
    duration_minutes: u32,
    price: u32,
    category: TherapyCategory,
    benefits: &[&str],
) -> Therapy {
    Therapy {
        id,
        name: name.to_string(),
        description: description.to_string(),
        duration_minutes,
        price,
        category,
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
    }
}
