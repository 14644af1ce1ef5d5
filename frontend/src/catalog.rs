use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

use log::info;
use thiserror::Error;

use crate::models::ToolRecord;

const TOOLS_JSON: &str = include_str!("../data/tools.json");

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("failed to parse tool catalog: {0}")]
    Parse(String),
    #[error("tool #{index} is missing `{field}`")]
    MissingField { index: usize, field: &'static str },
    #[error("duplicate tool slug `{0}`")]
    DuplicateSlug(String),
    #[error("rating {value} for `{slug}` is outside 0..=5")]
    RatingOutOfRange { slug: String, value: f32 },
    #[error("default FAQ #{index} for `{slug}` is past the end of {len} entries")]
    DefaultFaqOutOfRange { slug: String, index: usize, len: usize },
}

thread_local! {
    static SHARED: Result<Rc<Catalog>, CatalogError> = Catalog::from_json(TOOLS_JSON).map(Rc::new);
}

/// The embedded catalog, parsed on first use.
pub fn shared() -> Result<Rc<Catalog>, CatalogError> {
    SHARED.with(|catalog| catalog.clone())
}

#[derive(Debug, PartialEq)]
pub struct Catalog {
    records: Vec<Rc<ToolRecord>>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ToolRecord> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        let catalog = Self::from_records(records)?;
        info!("Loaded {} tools into the catalog", catalog.records.len());
        Ok(catalog)
    }

    pub fn from_records(records: Vec<ToolRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (index, record) in records.iter().enumerate() {
            validate(index, record)?;
            if !seen.insert(record.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(record.slug.clone()));
            }
        }

        Ok(Self {
            records: records.into_iter().map(Rc::new).collect(),
        })
    }

    pub fn all(&self) -> &[Rc<ToolRecord>] {
        &self.records
    }

    pub fn find(&self, slug: &str) -> Option<Rc<ToolRecord>> {
        self.records.iter().find(|r| r.slug == slug).cloned()
    }

    /// Tools grouped by category name. Within a group, catalog order is kept.
    pub fn by_category(&self) -> BTreeMap<String, Vec<Rc<ToolRecord>>> {
        let mut groups: BTreeMap<String, Vec<Rc<ToolRecord>>> = BTreeMap::new();
        for record in &self.records {
            groups
                .entry(record.category.clone())
                .or_default()
                .push(record.clone());
        }
        groups
    }
}

fn validate(index: usize, record: &ToolRecord) -> Result<(), CatalogError> {
    if record.slug.trim().is_empty() {
        return Err(CatalogError::MissingField { index, field: "slug" });
    }
    if record.name.trim().is_empty() {
        return Err(CatalogError::MissingField { index, field: "name" });
    }
    if !(0.0..=5.0).contains(&record.rating_value) {
        return Err(CatalogError::RatingOutOfRange {
            slug: record.slug.clone(),
            value: record.rating_value,
        });
    }
    // An empty FAQ list is fine, the section just renders no items.
    if !record.faqs.is_empty() && record.default_open_faq >= record.faqs.len() {
        return Err(CatalogError::DefaultFaqOutOfRange {
            slug: record.slug.clone(),
            index: record.default_open_faq,
            len: record.faqs.len(),
        });
    }
    Ok(())
}
