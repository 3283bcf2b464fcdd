use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    pub tips: Vec<String>,
    pub quotes: Vec<String>,
    pub image: String,
}

/// Category tips, quotes and image references with fallback pools for
/// categories the table does not know.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentTable {
    pub categories: BTreeMap<String, ContentEntry>,
    pub default_tips: Vec<String>,
    pub default_quotes: Vec<String>,
    pub default_image: String,
}

impl ContentTable {
    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|(name, tips, quotes, image)| {
                let entry = ContentEntry {
                    tips: to_strings(tips),
                    quotes: to_strings(quotes),
                    image: (*image).to_string(),
                };
                ((*name).to_string(), entry)
            })
            .collect();

        Self {
            categories,
            default_tips: to_strings(DEFAULT_TIPS),
            default_quotes: to_strings(DEFAULT_QUOTES),
            default_image: DEFAULT_IMAGE.to_string(),
        }
    }

    pub fn entry(&self, category: &str) -> Option<&ContentEntry> {
        self.categories.get(category)
    }

    pub fn tip_for<R: Rng + ?Sized>(&self, category: &str, rng: &mut R) -> &str {
        let pool = self.entry(category).map_or(&self.default_tips, |entry| &entry.tips);
        pick(pool, rng)
    }

    pub fn quote_for<R: Rng + ?Sized>(&self, category: &str, rng: &mut R) -> &str {
        let pool = self
            .entry(category)
            .map_or(&self.default_quotes, |entry| &entry.quotes);
        pick(pool, rng)
    }

    pub fn image_for(&self, category: &str) -> &str {
        self.entry(category)
            .map_or(self.default_image.as_str(), |entry| entry.image.as_str())
    }

    /// Checks that every pool has at least one entry.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.default_tips.is_empty() {
            return Err(ContentError::EmptyPool("default_tips".to_string()));
        }
        if self.default_quotes.is_empty() {
            return Err(ContentError::EmptyPool("default_quotes".to_string()));
        }
        for (name, entry) in &self.categories {
            if entry.tips.is_empty() {
                return Err(ContentError::EmptyPool(format!("tips of category '{name}'")));
            }
            if entry.quotes.is_empty() {
                return Err(ContentError::EmptyPool(format!("quotes of category '{name}'")));
            }
        }
        Ok(())
    }

    /// Rewrites category names into lookup keys (trimmed, lowercase), then
    /// validates the pools.
    pub fn normalized(self) -> Result<Self, ContentError> {
        let mut categories = BTreeMap::new();
        for (name, entry) in self.categories {
            let key = name.trim().to_lowercase();
            if key.is_empty() {
                return Err(ContentError::BlankCategory);
            }
            if categories.insert(key.clone(), entry).is_some() {
                return Err(ContentError::DuplicateCategory(key));
            }
        }

        let table = Self { categories, ..self };
        table.validate()?;
        Ok(table)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("{0} is empty")]
    EmptyPool(String),
    #[error("category name is blank")]
    BlankCategory,
    #[error("category '{0}' is listed more than once")]
    DuplicateCategory(String),
}

impl Default for ContentTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn pick<'a, R: Rng + ?Sized>(pool: &'a [String], rng: &mut R) -> &'a str {
    pool.choose(rng).map(String::as_str).unwrap_or_default()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

type BuiltinEntry = (&'static str, &'static [&'static str], &'static [&'static str], &'static str);

const BUILTIN: &[BuiltinEntry] = &[
    (
        "fitness",
        &[
            "Aim for 30 minutes of moderate exercise today, like a brisk walk or yoga session.",
            "Stay hydrated! Drink at least 8 glasses of water throughout the day.",
            "Try a new healthy recipe to keep your meals exciting and nutritious.",
            "Schedule a rest day to let your body recover and prevent burnout.",
            "Track your steps today and aim for 10,000 to stay active!",
        ],
        &[
            "Push your limits today! 💪 Your stronger self is waiting!",
            "Every step counts! 🏃 Keep moving toward your fitness goals!",
            "Sweat now, shine later! 🔥 Stay committed to your journey!",
            "Your body is capable of amazing things! 🥗 Fuel it right!",
            "Consistency is key! 🏋️‍♀️ Keep showing up for yourself!",
        ],
        "https://source.unsplash.com/featured/?fitness,motivation",
    ),
    (
        "career",
        &[
            "Spend 30 minutes learning a new skill relevant to your job today.",
            "Network with a colleague or professional in your field this week.",
            "Set a small, achievable work goal for today to build momentum.",
            "Review your resume or LinkedIn profile and update one section.",
            "Read an industry article to stay updated on trends.",
        ],
        &[
            "Your career is a journey! 🚀 Take one bold step today!",
            "Success is built daily! 📈 Keep grinding toward your dreams!",
            "Your skills are your superpower! 💼 Shine bright in your work!",
            "Embrace challenges! 🌟 They lead to career growth!",
            "Stay focused and rise! 🧑‍💼 Your goals are within reach!",
        ],
        "https://source.unsplash.com/featured/?career,professional",
    ),
    (
        "personal",
        &[
            "Practice 10 minutes of mindfulness or meditation today.",
            "Write down three things you’re grateful for this morning.",
            "Try a new hobby or activity to spark creativity this week.",
            "Connect with a friend or family member for a meaningful chat.",
            "Set aside time to declutter one area of your space today.",
        ],
        &[
            "Grow a little every day! 🌱 Your journey is beautiful!",
            "Embrace who you are! 😊 Your uniqueness is your strength!",
            "Small steps lead to big changes! 🌈 Keep going!",
            "You are enough! 💖 Shine in your own way!",
            "Live with purpose! 🌟 Today is your day to thrive!",
        ],
        "https://source.unsplash.com/featured/?personal,growth",
    ),
];

const DEFAULT_TIPS: &[&str] = &[
    "Break your goal into small tasks and tackle one today.",
    "Reflect on your progress and celebrate small wins!",
    "Stay consistent with one action toward your goal today.",
];

const DEFAULT_QUOTES: &[&str] = &[
    "Keep pushing forward! 🚀 Your goals are worth it!",
    "Every effort counts! 🌟 Stay focused on your dream!",
    "You’ve got this! 💪 Take one step closer today!",
];

const DEFAULT_IMAGE: &str = "https://source.unsplash.com/featured/?motivation";
