use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TherapyCategory {
    #[serde(rename = "Massage Therapy")]
    MassageTherapy,
    #[serde(rename = "Specialized Therapy")]
    SpecializedTherapy,
    #[serde(rename = "Consultation")]
    Consultation,
}

impl fmt::Display for TherapyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TherapyCategory::MassageTherapy => "Massage Therapy",
            TherapyCategory::SpecializedTherapy => "Specialized Therapy",
            TherapyCategory::Consultation => "Consultation",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Therapy {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    /// Price in whole rupees.
    pub price: u32,
    pub category: TherapyCategory,
    pub benefits: Vec<String>,
}

impl Therapy {
    pub fn price_label(&self) -> String {
        format!("₹{}", self.price)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TherapyQuery {
    pub category: Option<TherapyCategory>,
}
