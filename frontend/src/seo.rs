use serde_json::{json, Value};
use yew_router::Routable;

use crate::config::{get_site_origin, DEFAULT_SHARE_IMAGE, SITE_NAME};
use crate::models::ToolRecord;
use crate::pages::compare::{matchup_slug, parse_matchup};
use crate::Route;

/// Absolute URL for a route-relative path.
///
/// A missing leading slash is added and trailing slashes are dropped,
/// except for the root which always keeps exactly one.
pub fn build_canonical(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return format!("{}/", get_site_origin());
    }
    if trimmed.starts_with('/') {
        format!("{}{}", get_site_origin(), trimmed)
    } else {
        format!("{}/{}", get_site_origin(), trimmed)
    }
}

fn absolute_asset(src: &str) -> String {
    if src.starts_with("http://") || src.starts_with("https://") {
        src.to_string()
    } else {
        build_canonical(src)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OgType {
    Website,
    Article,
    Product,
}

impl OgType {
    pub fn as_str(self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Article => "article",
            OgType::Product => "product",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumb {
    pub name: String,
    pub route: Route,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, route: Route) -> Self {
        Self {
            name: name.into(),
            route,
        }
    }

    pub fn path(&self) -> String {
        self.route.to_path()
    }
}

/// Everything the head injector writes for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct SeoConfig {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub image: String,
    pub kind: OgType,
    pub schema: Vec<Value>,
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl SeoConfig {
    pub fn for_tool(record: &ToolRecord) -> Self {
        let path = Route::Tool { slug: record.slug.clone() }.to_path();
        let canonical = build_canonical(&path);
        Self {
            title: format!("{} | {}", record.page_title(), SITE_NAME),
            description: record.short_pitch.clone(),
            image: absolute_asset(&record.brand.logo_url),
            kind: OgType::Product,
            schema: vec![product_schema(record, &canonical), faq_schema(record)],
            breadcrumbs: vec![
                Breadcrumb::new("Home", Route::Home),
                Breadcrumb::new("Tools", Route::Tools),
                Breadcrumb::new(record.name.clone(), Route::Tool { slug: record.slug.clone() }),
            ],
            canonical,
        }
    }

    pub fn for_tools_index(tool_count: usize) -> Self {
        Self {
            title: format!("Software Tools Directory: {} Reviewed Apps | {}", tool_count, SITE_NAME),
            description: format!(
                "Honest reviews of {} SaaS tools with pricing, features, pros and cons, and alternatives.",
                tool_count
            ),
            canonical: build_canonical(&Route::Tools.to_path()),
            image: absolute_asset(DEFAULT_SHARE_IMAGE),
            kind: OgType::Website,
            schema: Vec::new(),
            breadcrumbs: vec![
                Breadcrumb::new("Home", Route::Home),
                Breadcrumb::new("Tools", Route::Tools),
            ],
        }
    }

    /// The canonical URL uses the normalized matchup, so stray separators
    /// and encodings collapse onto one address.
    pub fn for_compare(matchup: &str, names: &[String]) -> Self {
        let route = Route::Compare { matchup: matchup_slug(&parse_matchup(matchup)) };
        let heading = compare_heading(names);
        let (title, subject) = if names.is_empty() {
            (format!("{} | {}", heading, SITE_NAME), "SaaS tools".to_string())
        } else {
            (format!("{} Compared | {}", heading, SITE_NAME), heading.clone())
        };
        Self {
            title,
            description: format!(
                "Side-by-side comparison of {}: pricing, ratings and who each tool is for.",
                subject
            ),
            canonical: build_canonical(&route.to_path()),
            image: absolute_asset(DEFAULT_SHARE_IMAGE),
            kind: OgType::Article,
            schema: Vec::new(),
            breadcrumbs: vec![
                Breadcrumb::new("Home", Route::Home),
                Breadcrumb::new("Tools", Route::Tools),
                Breadcrumb::new(heading, route),
            ],
        }
    }

    pub fn for_home() -> Self {
        Self {
            title: format!("{}: Find the Right Software for Your Team", SITE_NAME),
            description: "Reviews, pricing breakdowns and comparisons of the SaaS tools teams actually use.".to_string(),
            canonical: build_canonical(&Route::Home.to_path()),
            image: absolute_asset(DEFAULT_SHARE_IMAGE),
            kind: OgType::Website,
            schema: Vec::new(),
            breadcrumbs: Vec::new(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            title: format!("Page not found | {}", SITE_NAME),
            description: "This page does not exist.".to_string(),
            canonical: build_canonical(&Route::NotFound.to_path()),
            image: absolute_asset(DEFAULT_SHARE_IMAGE),
            kind: OgType::Website,
            schema: Vec::new(),
            breadcrumbs: Vec::new(),
        }
    }

    /// Schema objects plus the breadcrumb list, ready for one ld+json script.
    pub fn json_ld(&self) -> Value {
        let mut entries = self.schema.clone();
        if !self.breadcrumbs.is_empty() {
            entries.push(breadcrumb_schema(&self.breadcrumbs));
        }
        Value::Array(entries)
    }
}

/// `Notion vs ClickUp`, or a generic heading when no tool is known.
pub fn compare_heading(names: &[String]) -> String {
    if names.is_empty() {
        "Tool comparison".to_string()
    } else {
        names.join(" vs ")
    }
}

pub fn product_schema(record: &ToolRecord, canonical: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": record.name,
        "description": record.short_pitch,
        "category": record.category,
        "image": absolute_asset(&record.brand.logo_url),
        "url": canonical,
        "brand": {
            "@type": "Brand",
            "name": record.name,
        },
        "review": {
            "@type": "Review",
            "author": {
                "@type": "Organization",
                "name": SITE_NAME,
            },
            "reviewRating": {
                "@type": "Rating",
                "ratingValue": record.rating_value,
                "bestRating": 5,
                "worstRating": 0,
            },
        },
    })
}

/// FAQPage schema. Entries follow `record.faqs` order exactly, which is
/// the order the accordion renders them in.
pub fn faq_schema(record: &ToolRecord) -> Value {
    let questions: Vec<Value> = record
        .faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer,
                },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

pub fn breadcrumb_schema(crumbs: &[Breadcrumb]) -> Value {
    let items: Vec<Value> = crumbs
        .iter()
        .enumerate()
        .map(|(i, crumb)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": crumb.name,
                "item": build_canonical(&crumb.path()),
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}
