use std::rc::Rc;

use yew::prelude::*;
use yew_router::components::Link;

use crate::components::accordion::FaqList;
use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::seo_head::SeoHead;
use crate::models::ToolRecord;
use crate::pages::compare::matchup_slug;
use crate::seo::SeoConfig;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ToolPageProps {
    pub record: Rc<ToolRecord>,
}

/// A `ToolPage` keyed by its slug. Moving to another tool replaces the
/// page instead of reusing it, so FAQ items start from their defaults.
pub fn keyed_tool_page(record: Rc<ToolRecord>) -> Html {
    html! { <ToolPage key={record.slug.clone()} record={record.clone()} /> }
}

/// Review page for a single tool. Every section is derived from the record;
/// list sections with no entries render empty.
#[function_component(ToolPage)]
pub fn tool_page(props: &ToolPageProps) -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let record = &props.record;
    let seo = SeoConfig::for_tool(record);
    let brand_style = format!("--brand-gradient: {};", record.brand.gradient_css());

    html! {
        <div class="tool-page" style={brand_style}>
            <SeoHead config={seo.clone()} />
            <div class="tool-background"></div>
            <Breadcrumbs crumbs={seo.breadcrumbs} />

            { hero(record) }
            { overview(record) }
            { feature_grid(record) }
            { pricing(record) }
            { pros_and_cons(record) }
            { alternatives(record) }
            { comparisons(record) }

            <section class="tool-section tool-faq" id="faq">
                <h2>{format!("{} FAQ", record.name)}</h2>
                <FaqList faqs={record.faqs.clone()} default_open={record.default_open_faq} />
            </section>

            { closing_cta(record) }

            <style>{TOOL_PAGE_STYLES}</style>
        </div>
    }
}

fn hero(record: &ToolRecord) -> Html {
    html! {
        <section class="tool-hero">
            <img src={record.brand.logo_url.clone()} alt={format!("{} logo", record.name)} class="tool-logo" loading="lazy" />
            <span class="category-badge">{&record.category}</span>
            <h1>{&record.name}</h1>
            <p class="tool-pitch">{&record.short_pitch}</p>
            <div class="tool-rating" title="Editorial rating">
                <span class="rating-star">{"★"}</span>
                <span class="rating-value">{record.rating_label()}</span>
                <span class="rating-scale">{" / 5"}</span>
            </div>
            <a class="hero-cta" href={record.website_url.clone()} target="_blank" rel="noopener nofollow">
                {format!("Visit {}", record.name)}
            </a>
        </section>
    }
}

fn overview(record: &ToolRecord) -> Html {
    html! {
        <section class="tool-section tool-overview">
            <h2>{format!("What is {}?", record.name)}</h2>
            { for record.overview.iter().map(|paragraph| html! { <p>{paragraph}</p> }) }
        </section>
    }
}

fn feature_grid(record: &ToolRecord) -> Html {
    html! {
        <section class="tool-section tool-features">
            <h2>{"Key Features"}</h2>
            <div class="features-grid">
                { for record.feature_blocks.iter().map(|block| html! {
                    <div class="feature-card">
                        <span class="feature-icon">{&block.icon}</span>
                        <h3>{&block.title}</h3>
                        <p>{&block.body}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn pricing(record: &ToolRecord) -> Html {
    html! {
        <section class="tool-section tool-pricing">
            <h2>{format!("{} Pricing", record.name)}</h2>
            <p class="pricing-summary">{&record.pricing_summary}</p>
            <table class="pricing-table">
                <thead>
                    <tr>
                        <th>{"Plan"}</th>
                        <th>{"Price"}</th>
                        <th>{"What you get"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for record.pricing_tiers.iter().map(|tier| html! {
                        <tr class="pricing-tier">
                            <td class="tier-name">{&tier.name}</td>
                            <td class="tier-price">
                                {&tier.price}
                                {
                                    match &tier.billing {
                                        Some(billing) => html! { <span class="tier-billing">{billing}</span> },
                                        None => html! {},
                                    }
                                }
                            </td>
                            <td>
                                <ul>
                                    { for tier.highlights.iter().map(|h| html! { <li>{h}</li> }) }
                                </ul>
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </section>
    }
}

fn pros_and_cons(record: &ToolRecord) -> Html {
    html! {
        <section class="tool-section tool-verdict">
            <h2>{"Pros & Cons"}</h2>
            <div class="pros-cons-container">
                <div class="pros">
                    <h3>{"Pros"}</h3>
                    <ul>
                        { for record.pros.iter().map(|pro| html! { <li>{pro}</li> }) }
                    </ul>
                </div>
                <div class="cons">
                    <h3>{"Cons"}</h3>
                    <ul>
                        { for record.cons.iter().map(|con| html! { <li>{con}</li> }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}

fn alternatives(record: &ToolRecord) -> Html {
    html! {
        <section class="tool-section tool-alternatives">
            <h2>{format!("{} Alternatives", record.name)}</h2>
            <div class="alternatives-grid">
                { for record.alternatives.iter().map(|alt| html! {
                    <Link<Route> to={Route::Tool { slug: alt.slug.clone() }} classes="alternative-card">
                        <span class="alternative-name">{&alt.name}</span>
                        <span class="alternative-arrow">{"→"}</span>
                    </Link<Route>>
                }) }
            </div>
        </section>
    }
}

fn comparisons(record: &ToolRecord) -> Html {
    html! {
        <section class="tool-section tool-comparisons">
            <h2>{"Head-to-Head"}</h2>
            { for record.comparisons.iter().map(|comparison| {
                let mut slugs = vec![record.slug.as_str()];
                slugs.extend(comparison.against.iter().map(String::as_str));
                let route = Route::Compare { matchup: matchup_slug(&slugs) };
                html! {
                    <div class="comparison-blurb">
                        <h3>
                            <Link<Route> to={route}>{&comparison.title}</Link<Route>>
                        </h3>
                        <p>{&comparison.blurb}</p>
                    </div>
                }
            }) }
        </section>
    }
}

fn closing_cta(record: &ToolRecord) -> Html {
    html! {
        <section class="footer-cta">
            <div class="footer-content">
                <h2>{format!("Ready to try {}?", record.name)}</h2>
                <p class="subtitle">{&record.short_pitch}</p>
                <a class="hero-cta" href={record.website_url.clone()} target="_blank" rel="noopener nofollow">
                    {"Get Started"}
                </a>
                <p class="disclaimer">
                    <Link<Route> to={Route::Tools}>{"Browse all tools"}</Link<Route>>
                </p>
            </div>
        </section>
    }
}

const TOOL_PAGE_STYLES: &str = r#"
.tool-page {
    padding-top: 74px;
    min-height: 100vh;
    color: #ffffff;
    position: relative;
    background: transparent;
}

.tool-background {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100vh;
    background: var(--brand-gradient);
    opacity: 0.25;
    z-index: -2;
    pointer-events: none;
}

.tool-hero {
    text-align: center;
    padding: 5rem 2rem 4rem;
    background: rgba(26, 26, 26, 0.75);
    backdrop-filter: blur(5px);
    border: 1px solid rgba(30, 144, 255, 0.1);
    margin: 2rem 0;
}

.tool-logo {
    width: 72px;
    height: 72px;
    border-radius: 16px;
}

.category-badge {
    display: inline-block;
    margin-left: 1rem;
    padding: 0.25rem 0.75rem;
    border-radius: 999px;
    background: rgba(126, 178, 255, 0.15);
    color: #7EB2FF;
    font-size: 0.85rem;
}

.tool-hero h1 {
    font-size: 3.5rem;
    margin: 1rem 0;
    background: var(--brand-gradient);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.tool-pitch {
    font-size: 1.2rem;
    color: #999;
    max-width: 640px;
    margin: 0 auto 1.5rem;
}

.tool-rating {
    font-size: 1.4rem;
    margin-bottom: 2rem;
}

.rating-star {
    color: #f5c518;
    margin-right: 0.4rem;
}

.hero-cta {
    display: inline-block;
    background: var(--brand-gradient);
    color: #fff;
    text-decoration: none;
    padding: 1rem 2.5rem;
    border-radius: 8px;
    font-weight: 600;
}

.tool-section {
    max-width: 900px;
    margin: 0 auto;
    padding: 2rem;
}

.tool-section h2 {
    font-size: 2.2rem;
    margin: 2rem 0 1.5rem;
    background: linear-gradient(45deg, #fff, #7EB2FF);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.tool-section p {
    color: #bbb;
    line-height: 1.6;
}

.features-grid,
.alternatives-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 1.5rem;
}

.feature-card,
.alternative-card,
.comparison-blurb {
    background: rgba(26, 26, 26, 0.85);
    border: 1px solid rgba(30, 144, 255, 0.1);
    border-radius: 12px;
    padding: 1.5rem;
}

.feature-icon {
    font-size: 2rem;
}

.alternative-card {
    display: flex;
    justify-content: space-between;
    color: #fff;
    text-decoration: none;
}

.alternative-card:hover {
    border-color: rgba(30, 144, 255, 0.3);
}

.pricing-table {
    width: 100%;
    border-collapse: collapse;
}

.pricing-table th,
.pricing-table td {
    text-align: left;
    padding: 1rem;
    border-bottom: 1px solid rgba(255, 255, 255, 0.06);
    vertical-align: top;
}

.tier-billing {
    display: block;
    color: #999;
    font-size: 0.85rem;
}

.pros-cons-container {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
}

.pros h3 { color: #4caf50; }
.cons h3 { color: #ff6b6b; }

.comparison-blurb {
    margin-bottom: 1rem;
}

.comparison-blurb a {
    color: #7EB2FF;
}

.faq-item {
    background: rgba(26, 26, 26, 0.85);
    backdrop-filter: blur(10px);
    border: 1px solid rgba(30, 144, 255, 0.1);
    border-radius: 12px;
    margin-bottom: 1rem;
    overflow: hidden;
}

.faq-item:hover {
    border-color: rgba(30, 144, 255, 0.3);
}

.faq-question {
    width: 100%;
    padding: 1.5rem;
    background: none;
    border: none;
    color: #fff;
    font-size: 1.2rem;
    text-align: left;
    cursor: pointer;
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.faq-question:hover {
    color: #7EB2FF;
}

.toggle-icon {
    font-size: 1.5rem;
    color: #7EB2FF;
}

.faq-answer {
    padding: 0 1.5rem 1.5rem;
}

.footer-cta {
    text-align: center;
    padding: 5rem 2rem;
}

.footer-cta .disclaimer a {
    color: #999;
}

@media (max-width: 768px) {
    .tool-hero h1 {
        font-size: 2.4rem;
    }

    .pros-cons-container {
        grid-template-columns: 1fr;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::faq_schema;
    use crate::test_support::{render_in_router, sample_record};
    use pretty_assertions::assert_eq;

    async fn render(record: ToolRecord) -> String {
        let record = Rc::new(record);
        render_in_router(html! { <ToolPage record={record} /> }).await
    }

    #[tokio::test]
    async fn renders_every_section() {
        let html = render(sample_record("clickup", 3)).await;

        assert!(html.contains("<h1>Tool clickup</h1>"));
        assert!(html.contains("What is Tool clickup?"));
        assert!(html.contains("Feature clickup 1"));
        assert!(html.contains("Starter"));
        assert!(html.contains("Pro clickup"));
        assert!(html.contains("Con clickup"));
        assert!(html.contains(r#"href="/tools/alt-one""#));
        assert!(html.contains(r#"href="/tools/compare/clickup-vs-alt-one-vs-alt-two""#));
        assert!(html.contains("Ready to try Tool clickup?"));
    }

    #[tokio::test]
    async fn only_the_default_faq_answer_is_mounted() {
        let html = render(sample_record("notion", 2)).await;

        assert!(html.contains("Answer 1 for notion"));
        assert!(!html.contains("Answer 2 for notion"));
        assert!(html.contains("Question 2 about notion?"));
    }

    #[tokio::test]
    async fn default_open_can_point_past_the_first_entry() {
        let mut record = sample_record("asana", 3);
        record.default_open_faq = 2;
        let html = render(record).await;

        assert!(!html.contains("Answer 1 for asana"));
        assert!(html.contains("Answer 3 for asana"));
    }

    #[tokio::test]
    async fn rendered_faq_order_matches_schema_order() {
        let record = sample_record("trello", 4);
        let html = render(record.clone()).await;

        let mut rendered: Vec<(usize, String)> = record
            .faqs
            .iter()
            .map(|faq| (html.find(faq.question.as_str()).unwrap(), faq.question.clone()))
            .collect();
        rendered.sort_by_key(|(pos, _)| *pos);
        let rendered: Vec<String> = rendered.into_iter().map(|(_, q)| q).collect();

        let schema = faq_schema(&record);
        let schema_order: Vec<String> = schema["mainEntity"]
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["name"].as_str().unwrap().to_string())
            .collect();

        assert_eq!(rendered, schema_order);
    }

    #[tokio::test]
    async fn empty_lists_render_empty_sections() {
        let mut record = sample_record("bare", 0);
        record.overview.clear();
        record.feature_blocks.clear();
        record.pricing_tiers.clear();
        record.pros.clear();
        record.cons.clear();
        record.alternatives.clear();
        record.comparisons.clear();
        let html = render(record).await;

        assert!(html.contains("Key Features"));
        assert!(!html.contains(r#"class="feature-card"#));
        assert!(!html.contains(r#"class="pricing-tier"#));
        assert!(!html.contains(r#"class="alternative-card"#));
        assert!(!html.contains(r#"class="comparison-blurb"#));
        assert!(!html.contains(r#"class="faq-item"#));
    }
}
