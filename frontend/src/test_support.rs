use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::Router;

use crate::models::{
    AlternativeLink, BrandMeta, Comparison, FaqEntry, FeatureBlock, PricingTier, ToolRecord,
};

/// A fully populated record with `faq_count` FAQ entries, the first one open.
pub fn sample_record(slug: &str, faq_count: usize) -> ToolRecord {
    ToolRecord {
        name: format!("Tool {}", slug),
        slug: slug.to_string(),
        category: "Productivity".to_string(),
        short_pitch: format!("The pitch for {}.", slug),
        overview: vec![format!("Overview of {}.", slug)],
        website_url: format!("https://{}.example.com", slug),
        pricing_summary: "Free plan, paid from $8 per user per month".to_string(),
        pricing_tiers: vec![
            PricingTier {
                name: "Starter".to_string(),
                price: "$0".to_string(),
                billing: None,
                highlights: vec!["Up to 3 users".to_string()],
            },
            PricingTier {
                name: "Business".to_string(),
                price: "$12".to_string(),
                billing: Some("per user / month".to_string()),
                highlights: vec!["SSO".to_string(), "Audit log".to_string()],
            },
        ],
        rating_value: 4.2,
        brand: BrandMeta {
            logo_url: format!("/logos/{}.svg", slug),
            gradient_from: "#1E90FF".to_string(),
            gradient_to: "#7EB2FF".to_string(),
        },
        feature_blocks: vec![
            FeatureBlock {
                icon: "⚡".to_string(),
                title: format!("Feature {} 1", slug),
                body: "Does the first thing.".to_string(),
            },
            FeatureBlock {
                icon: "🔒".to_string(),
                title: format!("Feature {} 2", slug),
                body: "Does the second thing.".to_string(),
            },
        ],
        pros: vec![format!("Pro {}", slug)],
        cons: vec![format!("Con {}", slug)],
        alternatives: vec![
            AlternativeLink { name: "Alt One".to_string(), slug: "alt-one".to_string() },
            AlternativeLink { name: "Alt Two".to_string(), slug: "alt-two".to_string() },
        ],
        comparisons: vec![Comparison {
            title: format!("Tool {} vs Alt One vs Alt Two", slug),
            against: vec!["alt-one".to_string(), "alt-two".to_string()],
            blurb: "How they stack up.".to_string(),
        }],
        faqs: (1..=faq_count)
            .map(|i| FaqEntry {
                question: format!("Question {} about {}?", i, slug),
                answer: format!("Answer {} for {}", i, slug),
            })
            .collect(),
        default_open_faq: 0,
    }
}

#[derive(Properties, PartialEq)]
pub struct InRouterProps {
    pub children: Children,
}

/// Wraps its children in a router over in-memory history.
#[function_component(InRouter)]
pub fn in_router(props: &InRouterProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    html! {
        <Router history={history}>
            { for props.children.iter() }
        </Router>
    }
}

/// Server-renders `content` inside an in-memory router so `Link`s resolve.
pub async fn render_in_router(content: Html) -> String {
    LocalServerRenderer::<InRouter>::with_props(InRouterProps {
        children: Children::new(vec![content]),
    })
    .hydratable(false)
    .render()
    .await
}
