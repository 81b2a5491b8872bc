use serde::{Deserialize, Serialize};

/// Opaque cuisine identifier drawn from the catalog. Not validated
/// against the catalog before use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cuisine(pub String);

impl Cuisine {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Normalized form used as a query parameter value.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl std::fmt::Display for Cuisine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Cuisine {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Built-in cuisine catalog (17-entry deployment), in presentation order.
/// The 21-entry variant is deployed via the TOML catalog override.
pub const CUISINE_CATALOG: [&str; 17] = [
    "American",
    "Asian",
    "British",
    "Caribbean",
    "Chinese",
    "French",
    "Greek",
    "Indian",
    "Italian",
    "Japanese",
    "Mediterranean",
    "Mexican",
    "Moroccan",
    "Spanish",
    "Thai",
    "Turkish",
    "Vietnamese",
];

/// One recipe record. Only the fields we render are kept; list identity
/// is positional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub label: String,
    /// May be empty when the service has no image for the recipe.
    pub image_url: String,
    pub source: String,
    /// Link to the full recipe, opened outside the app.
    pub external_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QueryShape {
    /// `type=public&cuisineType=<cuisine>&q=<search text>`
    #[default]
    #[serde(rename = "typed")]
    TypedFilter,
    /// Legacy keyword search, `q=<cuisine>`.
    #[serde(rename = "keyword")]
    Keyword,
}

/// Fully resolved parameters for one recipe search request. Never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub cuisine: Cuisine,
    pub search_text: String,
    pub offset: usize,
    pub limit: usize,
    pub shape: QueryShape,
}
