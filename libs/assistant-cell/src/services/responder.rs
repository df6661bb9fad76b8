use crate::models::Reply;

pub const GREETING: &str = "Namaste! I'm AyurBot, your AI assistant for Ayurvedic wellness. I can help you understand doshas, treatments, lifestyle recommendations, and answer questions about your therapy journey. How can I assist you today?";

pub const QUICK_SUGGESTIONS: [&str; 6] = [
    "What is my dosha type?",
    "Benefits of Panchakarma",
    "Ayurvedic diet recommendations",
    "How to reduce stress naturally?",
    "Best time for meditation",
    "Seasonal wellness tips",
];

const VATA: &str = "Air and space elements, governs movement and nervous system";
const PITTA: &str = "Fire and water elements, governs metabolism and digestion";
const KAPHA: &str = "Earth and water elements, governs structure and immunity";

const ABHYANGA: &str = "Full body oil massage to balance doshas and improve circulation";
const SHIRODHARA: &str = "Continuous oil pouring on forehead for mental relaxation";
const PANCHAKARMA: &str = "Five-action detoxification and rejuvenation therapy";

const FALLBACK: &str = "I'd be happy to help you with Ayurvedic wellness guidance! I can provide information about doshas, treatments like Panchakarma and Abhyanga, dietary recommendations, lifestyle tips, and answer questions about your therapy journey. What specific aspect of Ayurveda interests you?";

/// The first three quick suggestions, offered with the greeting and the
/// fallback reply.
pub fn starter_suggestions() -> Vec<String> {
    QUICK_SUGGESTIONS[..3].iter().map(|s| s.to_string()).collect()
}

type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

pub struct Rule {
    pub topic: &'static str,
    predicate: Predicate,
    reply: Reply,
}

impl Rule {
    pub fn new<P>(topic: &'static str, predicate: P, content: impl Into<String>, suggestions: &[&str]) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            topic,
            predicate: Box::new(predicate),
            reply: Reply {
                content: content.into(),
                suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    /// Matches when the lower-cased input contains any of `keywords`.
    pub fn keywords(
        topic: &'static str,
        keywords: &'static [&'static str],
        content: impl Into<String>,
        suggestions: &[&str],
    ) -> Self {
        Self::new(
            topic,
            move |input| keywords.iter().any(|k| input.contains(k)),
            content,
            suggestions,
        )
    }

    pub fn matches(&self, lowered: &str) -> bool {
        (self.predicate)(lowered)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("topic", &self.topic).finish()
    }
}

/// Ordered rule table; the first matching rule answers.
#[derive(Debug)]
pub struct Responder {
    rules: Vec<Rule>,
    fallback: Reply,
}

impl Responder {
    pub fn new(rules: Vec<Rule>, fallback: Reply) -> Self {
        Self { rules, fallback }
    }

    pub fn ayurveda() -> Self {
        let rules = vec![
            // Specific doshas before the general question, then treatments,
            // then lifestyle topics.
            Rule::keywords(
                "vata",
                &["vata"],
                format!("Vata dosha represents {}. People with dominant Vata tend to be creative, energetic, but may experience anxiety or digestive issues when imbalanced. Warm, nourishing foods and regular routines help balance Vata.", VATA),
                &["Vata balancing foods", "Vata daily routine", "Vata yoga practices"],
            ),
            Rule::keywords(
                "pitta",
                &["pitta"],
                format!("Pitta dosha represents {}. Pitta-dominant individuals are typically focused and intelligent but may experience anger or inflammation when imbalanced. Cooling foods and moderate exercise help balance Pitta.", PITTA),
                &["Pitta cooling foods", "Pitta meditation", "Pitta lifestyle tips"],
            ),
            Rule::keywords(
                "kapha",
                &["kapha"],
                format!("Kapha dosha represents {}. Kapha types are usually calm and stable but may experience sluggishness or weight gain when imbalanced. Light, spicy foods and vigorous exercise help balance Kapha.", KAPHA),
                &["Kapha energizing foods", "Kapha exercise routine", "Kapha morning routine"],
            ),
            Rule::keywords(
                "dosha",
                &["dosha"],
                "The three doshas - Vata, Pitta, and Kapha - are the fundamental energies that govern all physiological and psychological functions. Understanding your dominant dosha helps create a personalized wellness plan. Would you like to learn about a specific dosha?",
                &["Tell me about Vata", "Tell me about Pitta", "Tell me about Kapha"],
            ),
            Rule::keywords(
                "panchakarma",
                &["panchakarma"],
                format!("{}. It includes five main procedures: Vamana (therapeutic vomiting), Virechana (purgation), Basti (enemas), Nasya (nasal treatments), and Raktamokshana (bloodletting). This comprehensive treatment helps eliminate toxins and restore balance.", PANCHAKARMA),
                &["Panchakarma preparation", "Panchakarma duration", "Post-Panchakarma care"],
            ),
            Rule::keywords(
                "abhyanga",
                &["abhyanga"],
                format!("{}. This daily self-care practice uses warm herbal oils suited to your dosha type. Regular Abhyanga improves skin health, reduces stress, and promotes better sleep.", ABHYANGA),
                &["Abhyanga oil selection", "Abhyanga technique", "Best time for Abhyanga"],
            ),
            Rule::keywords(
                "shirodhara",
                &["shirodhara"],
                format!("{}. This deeply relaxing treatment calms the nervous system, reduces anxiety, improves sleep quality, and enhances mental clarity. It's particularly beneficial for Vata and Pitta imbalances.", SHIRODHARA),
                &["Shirodhara benefits", "Shirodhara preparation", "After Shirodhara care"],
            ),
            Rule::keywords(
                "diet",
                &["diet", "food"],
                "Ayurvedic nutrition emphasizes eating according to your dosha type, the season, and your digestive fire (Agni). Fresh, whole foods prepared with love and eaten mindfully are key principles. Each dosha benefits from specific tastes and food qualities.",
                &["Vata diet plan", "Pitta diet plan", "Kapha diet plan"],
            ),
            Rule::keywords(
                "stress",
                &["stress", "anxiety"],
                "Ayurveda views stress as primarily a Vata imbalance. Natural stress reduction includes: regular meditation, pranayama (breathing exercises), Abhyanga massage, warm baths with essential oils, and maintaining consistent daily routines. Herbs like Ashwagandha and Brahmi are also beneficial.",
                &["Meditation techniques", "Breathing exercises", "Stress-reducing herbs"],
            ),
            Rule::keywords(
                "sleep",
                &["sleep", "insomnia"],
                "Good sleep is essential for health in Ayurveda. Sleep recommendations include: going to bed by 10 PM, avoiding screens before bed, gentle oil massage, warm milk with spices, and creating a calm bedroom environment. Poor sleep often indicates Vata imbalance.",
                &["Sleep routine tips", "Bedtime rituals", "Natural sleep aids"],
            ),
        ];

        Self::new(
            rules,
            Reply {
                content: FALLBACK.to_string(),
                suggestions: starter_suggestions(),
            },
        )
    }

    fn find(&self, input: &str) -> Option<&Rule> {
        let lowered = input.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    /// Topic of the answering rule, `None` for the fallback.
    pub fn topic(&self, input: &str) -> Option<&'static str> {
        self.find(input).map(|rule| rule.topic)
    }

    pub fn respond(&self, input: &str) -> Reply {
        self.find(input)
            .map(|rule| rule.reply.clone())
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::ayurveda()
    }
}
