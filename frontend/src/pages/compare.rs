use std::rc::Rc;

use log::warn;
use yew::prelude::*;
use yew_router::components::Link;

use crate::catalog::Catalog;
use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::seo_head::SeoHead;
use crate::models::ToolRecord;
use crate::seo::{compare_heading, SeoConfig};
use crate::Route;

const SEPARATOR: &str = "-vs-";

/// `["notion", "clickup"]` -> `notion-vs-clickup`
pub fn matchup_slug<S: AsRef<str>>(slugs: &[S]) -> String {
    slugs
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Splits a matchup route segment back into slugs. Empty pieces are dropped.
pub fn parse_matchup(raw: &str) -> Vec<String> {
    let decoded = urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    decoded
        .split(SEPARATOR)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Looks up every slug of a matchup. Returns the known tools in matchup
/// order and the slugs the catalog doesn't have.
pub fn resolve_matchup(catalog: &Catalog, raw: &str) -> (Vec<Rc<ToolRecord>>, Vec<String>) {
    let mut tools = Vec::new();
    let mut missing = Vec::new();
    for slug in parse_matchup(raw) {
        match catalog.find(&slug) {
            Some(record) => tools.push(record),
            None => {
                warn!("Comparison {} names unknown tool {}", raw, slug);
                missing.push(slug);
            }
        }
    }
    (tools, missing)
}

#[derive(Properties, PartialEq)]
pub struct ComparePageProps {
    pub matchup: AttrValue,
    pub tools: Vec<Rc<ToolRecord>>,
    #[prop_or_default]
    pub missing: Vec<String>,
}

#[function_component(ComparePage)]
pub fn compare_page(props: &ComparePageProps) -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        props.matchup.clone(),
    );

    let names: Vec<String> = props.tools.iter().map(|t| t.name.clone()).collect();
    let seo = SeoConfig::for_compare(&props.matchup, &names);
    let heading = compare_heading(&names);

    html! {
        <div class="compare-page">
            <SeoHead config={seo.clone()} />
            <Breadcrumbs crumbs={seo.breadcrumbs.clone()} />
            <section class="compare-hero">
                <h1>{heading}</h1>
                <p>{"Pricing, ratings and positioning side by side."}</p>
            </section>

            {
                if props.tools.is_empty() {
                    html! {
                        <p class="compare-empty">{"None of these tools are in the directory yet."}</p>
                    }
                } else {
                    html! {
                        <table class="compare-table">
                            <thead>
                                <tr>
                                    <th></th>
                                    { for props.tools.iter().map(|tool| html! {
                                        <th>
                                            <Link<Route> to={Route::Tool { slug: tool.slug.clone() }}>
                                                {&tool.name}
                                            </Link<Route>>
                                        </th>
                                    }) }
                                </tr>
                            </thead>
                            <tbody>
                                <tr>
                                    <td>{"Category"}</td>
                                    { for props.tools.iter().map(|tool| html! { <td>{&tool.category}</td> }) }
                                </tr>
                                <tr>
                                    <td>{"Rating"}</td>
                                    { for props.tools.iter().map(|tool| html! { <td>{format!("{} / 5", tool.rating_label())}</td> }) }
                                </tr>
                                <tr>
                                    <td>{"Pricing"}</td>
                                    { for props.tools.iter().map(|tool| html! { <td>{&tool.pricing_summary}</td> }) }
                                </tr>
                                <tr>
                                    <td>{"In one line"}</td>
                                    { for props.tools.iter().map(|tool| html! { <td>{&tool.short_pitch}</td> }) }
                                </tr>
                            </tbody>
                        </table>
                    }
                }
            }

            {
                if props.missing.is_empty() {
                    html! {}
                } else {
                    html! {
                        <section class="compare-missing">
                            <h2>{"Not in the directory"}</h2>
                            <ul>
                                { for props.missing.iter().map(|slug| html! { <li>{slug}</li> }) }
                            </ul>
                        </section>
                    }
                }
            }

            <style>
                {r#"
                .compare-page {
                    padding-top: 74px;
                    max-width: 1000px;
                    margin: 0 auto;
                    color: #fff;
                }
                .compare-hero {
                    text-align: center;
                    padding: 4rem 2rem 2rem;
                }
                .compare-hero h1 {
                    font-size: 2.8rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .compare-table {
                    width: 100%;
                    border-collapse: collapse;
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                }
                .compare-table th,
                .compare-table td {
                    padding: 1rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.06);
                    text-align: left;
                    vertical-align: top;
                }
                .compare-table td:first-child {
                    color: #7EB2FF;
                    white-space: nowrap;
                }
                .compare-table a {
                    color: #fff;
                }
                .compare-empty,
                .compare-missing {
                    color: #999;
                    text-align: center;
                    margin: 2rem 0;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{render_in_router, sample_record};
    use pretty_assertions::assert_eq;

    #[test]
    fn slug_joins_with_vs() {
        assert_eq!(matchup_slug(&["notion", "clickup", "asana"]), "notion-vs-clickup-vs-asana");
        assert_eq!(matchup_slug(&["solo"]), "solo");
    }

    #[test]
    fn parse_splits_on_vs() {
        assert_eq!(parse_matchup("notion-vs-clickup-vs-asana"), vec!["notion", "clickup", "asana"]);
    }

    #[test]
    fn parse_keeps_hyphenated_slugs_whole() {
        assert_eq!(parse_matchup("monday-com-vs-google-sheets"), vec!["monday-com", "google-sheets"]);
    }

    #[test]
    fn parse_drops_empty_pieces_and_decodes() {
        assert_eq!(parse_matchup("-vs-notion-vs-"), vec!["notion"]);
        assert_eq!(parse_matchup("notion%2Dvs%2Dtrello"), vec!["notion", "trello"]);
        assert!(parse_matchup("").is_empty());
    }

    #[test]
    fn resolve_separates_unknown_slugs() {
        let catalog = Catalog::from_records(vec![sample_record("notion", 1), sample_record("trello", 1)])
            .unwrap();
        let (tools, missing) = resolve_matchup(&catalog, "trello-vs-basecamp-vs-notion");

        let slugs: Vec<_> = tools.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(slugs, vec!["trello", "notion"]);
        assert_eq!(missing, vec!["basecamp".to_string()]);
    }

    #[tokio::test]
    async fn renders_one_column_per_tool() {
        let tools = vec![Rc::new(sample_record("notion", 1)), Rc::new(sample_record("trello", 1))];
        let html = render_in_router(html! {
            <ComparePage matchup="notion-vs-trello" tools={tools} />
        })
        .await;

        assert!(html.contains("Tool notion vs Tool trello"));
        assert!(html.contains(r#"href="/tools/notion""#));
        assert!(html.contains(r#"href="/tools/trello""#));
        assert!(!html.contains("Not in the directory"));
    }

    #[tokio::test]
    async fn lists_missing_tools_without_failing() {
        let html = render_in_router(html! {
            <ComparePage matchup="ghost-vs-phantom" tools={Vec::<Rc<ToolRecord>>::new()} missing={vec!["ghost".to_string(), "phantom".to_string()]} />
        })
        .await;

        assert!(html.contains("None of these tools are in the directory yet."));
        assert!(html.contains("<li>ghost</li>"));
        assert!(html.contains("<li>phantom</li>"));
    }
}
