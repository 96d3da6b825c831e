use phf::phf_map;
use serde::{self, Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ModerationInput {
    Single(String),
    Multiple(Vec<String>),
}

impl From<String> for ModerationInput {
    fn from(input: String) -> Self {
        ModerationInput::Single(input)
    }
}

impl From<&str> for ModerationInput {
    fn from(input: &str) -> Self {
        ModerationInput::Single(input.to_string())
    }
}

impl From<Vec<String>> for ModerationInput {
    fn from(inputs: Vec<String>) -> Self {
        ModerationInput::Multiple(inputs)
    }
}

/// Body of `POST /moderations`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModerationRequest {
    pub input: ModerationInput,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub model: Option<String>,
}

impl ModerationRequest {
    pub fn new(input: impl Into<ModerationInput>) -> Self {
        Self {
            input: input.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Hate,
    HateThreatening,
    SelfHarm,
    Sexual,
    SexualMinors,
    Violence,
    ViolenceGraphic,
}

static CATEGORY_KEYS: phf::Map<&'static str, Category> = phf_map! {
    "hate" => Category::Hate,
    "hate/threatening" => Category::HateThreatening,
    "self-harm" => Category::SelfHarm,
    "sexual" => Category::Sexual,
    "sexual/minors" => Category::SexualMinors,
    "violence" => Category::Violence,
    "violence/graphic" => Category::ViolenceGraphic,
};

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Hate,
        Category::HateThreatening,
        Category::SelfHarm,
        Category::Sexual,
        Category::SexualMinors,
        Category::Violence,
        Category::ViolenceGraphic,
    ];

    /// Wire key used in `categories` and `category_scores`.
    pub fn key(self) -> &'static str {
        match self {
            Category::Hate => "hate",
            Category::HateThreatening => "hate/threatening",
            Category::SelfHarm => "self-harm",
            Category::Sexual => "sexual",
            Category::SexualMinors => "sexual/minors",
            Category::Violence => "violence",
            Category::ViolenceGraphic => "violence/graphic",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        CATEGORY_KEYS.get(key).copied()
    }
}

// Older server versions sent 0/1 instead of booleans.
fn bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrInt {
        Bool(bool),
        Int(i64),
    }

    Ok(match BoolOrInt::deserialize(deserializer)? {
        BoolOrInt::Bool(value) => value,
        BoolOrInt::Int(value) => value != 0,
    })
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultCategories {
    #[serde(deserialize_with = "bool_or_int")]
    pub hate: bool,
    #[serde(rename = "hate/threatening", deserialize_with = "bool_or_int")]
    pub hate_threatening: bool,
    #[serde(rename = "self-harm", deserialize_with = "bool_or_int")]
    pub self_harm: bool,
    #[serde(deserialize_with = "bool_or_int")]
    pub sexual: bool,
    #[serde(rename = "sexual/minors", deserialize_with = "bool_or_int")]
    pub sexual_minors: bool,
    #[serde(deserialize_with = "bool_or_int")]
    pub violence: bool,
    #[serde(rename = "violence/graphic", deserialize_with = "bool_or_int")]
    pub violence_graphic: bool,
}

impl ResultCategories {
    pub fn get(&self, category: Category) -> bool {
        match category {
            Category::Hate => self.hate,
            Category::HateThreatening => self.hate_threatening,
            Category::SelfHarm => self.self_harm,
            Category::Sexual => self.sexual,
            Category::SexualMinors => self.sexual_minors,
            Category::Violence => self.violence,
            Category::ViolenceGraphic => self.violence_graphic,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct ResultCategoryScores {
    pub hate: f32,
    #[serde(rename = "hate/threatening")]
    pub hate_threatening: f32,
    #[serde(rename = "self-harm")]
    pub self_harm: f32,
    pub sexual: f32,
    #[serde(rename = "sexual/minors")]
    pub sexual_minors: f32,
    pub violence: f32,
    #[serde(rename = "violence/graphic")]
    pub violence_graphic: f32,
}

impl ResultCategoryScores {
    pub fn get(&self, category: Category) -> f32 {
        match category {
            Category::Hate => self.hate,
            Category::HateThreatening => self.hate_threatening,
            Category::SelfHarm => self.self_harm,
            Category::Sexual => self.sexual,
            Category::SexualMinors => self.sexual_minors,
            Category::Violence => self.violence,
            Category::ViolenceGraphic => self.violence_graphic,
        }
    }

    /// Category with the largest score; the first one in `Category::ALL` wins ties.
    pub fn highest(&self) -> (Category, f32) {
        Category::ALL
            .iter()
            .map(|&category| (category, self.get(category)))
            .fold((Category::Hate, self.hate), |best, current| {
                if current.1 > best.1 { current } else { best }
            })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModerationResult {
    pub categories: ResultCategories,
    pub category_scores: ResultCategoryScores,
    #[serde(deserialize_with = "bool_or_int")]
    pub flagged: bool,
}

impl ModerationResult {
    pub fn flagged_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&category| self.categories.get(category))
            .collect()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModerationResponse {
    pub id: String,
    pub model: String,
    pub results: Vec<ModerationResult>,
}
