use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BrandMeta {
    pub logo_url: String,
    pub gradient_from: String,
    pub gradient_to: String,
}

impl BrandMeta {
    pub fn gradient_css(&self) -> String {
        format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            self.gradient_from, self.gradient_to
        )
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FeatureBlock {
    pub icon: String,
    pub title: String,
    pub body: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub billing: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AlternativeLink {
    pub name: String,
    pub slug: String,
}

/// A side-by-side matchup against other tools in the directory.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Comparison {
    pub title: String,
    pub against: Vec<String>,
    pub blurb: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Marketing content for one tool. Loaded once from the catalog file and
/// never mutated afterwards.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ToolRecord {
    pub name: String,
    pub slug: String,
    pub category: String,
    pub short_pitch: String,
    #[serde(default)]
    pub overview: Vec<String>,
    pub website_url: String,
    pub pricing_summary: String,
    #[serde(default)]
    pub pricing_tiers: Vec<PricingTier>,
    pub rating_value: f32,
    pub brand: BrandMeta,
    #[serde(default)]
    pub feature_blocks: Vec<FeatureBlock>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<AlternativeLink>,
    #[serde(default)]
    pub comparisons: Vec<Comparison>,
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
    // Index of the FAQ entry that starts expanded.
    #[serde(default)]
    pub default_open_faq: usize,
}

impl ToolRecord {
    /// Rating rendered with one decimal, e.g. "4.5".
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating_value)
    }

    pub fn page_title(&self) -> String {
        format!("{} Review: Pricing, Features & Alternatives", self.name)
    }
}
