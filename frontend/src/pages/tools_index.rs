use std::collections::BTreeMap;
use std::rc::Rc;

use yew::prelude::*;
use yew_router::components::Link;

use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::seo_head::SeoHead;
use crate::models::ToolRecord;
use crate::seo::SeoConfig;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ToolsIndexProps {
    pub groups: BTreeMap<String, Vec<Rc<ToolRecord>>>,
}

#[function_component(ToolsIndex)]
pub fn tools_index(props: &ToolsIndexProps) -> Html {
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

    let tool_count: usize = props.groups.values().map(Vec::len).sum();
    let seo = SeoConfig::for_tools_index(tool_count);

    html! {
        <div class="tools-index-page">
            <SeoHead config={seo.clone()} />
            <Breadcrumbs crumbs={seo.breadcrumbs} />
            <section class="tools-index-hero">
                <h1>{"Software Tools Directory"}</h1>
                <p>{format!("{} tools reviewed, with pricing, alternatives and straight answers.", tool_count)}</p>
            </section>

            { for props.groups.iter().map(|(category, tools)| html! {
                <section class="category-group">
                    <h2>{category}</h2>
                    <div class="tool-cards">
                        { for tools.iter().map(|tool| html! {
                            <Link<Route> to={Route::Tool { slug: tool.slug.clone() }} classes="tool-card">
                                <img src={tool.brand.logo_url.clone()} alt={format!("{} logo", tool.name)} loading="lazy" />
                                <h3>{&tool.name}</h3>
                                <p>{&tool.short_pitch}</p>
                                <span class="tool-card-rating">{format!("★ {}", tool.rating_label())}</span>
                            </Link<Route>>
                        }) }
                    </div>
                </section>
            }) }

            <style>
                {r#"
                .tools-index-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .tools-index-hero {
                    text-align: center;
                    padding: 5rem 2rem 3rem;
                }
                .tools-index-hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .tools-index-hero p {
                    font-size: 1.2rem;
                    color: #999;
                }
                .category-group {
                    padding: 1rem 2rem;
                }
                .category-group h2 {
                    color: #7EB2FF;
                    font-size: 1.6rem;
                }
                .tool-cards {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .tool-card {
                    display: block;
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 1.5rem;
                    color: inherit;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .tool-card:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                    transform: translateY(-5px);
                }
                .tool-card img {
                    width: 48px;
                    height: 48px;
                    border-radius: 10px;
                }
                .tool-card p {
                    color: #999;
                    line-height: 1.5;
                }
                .tool-card-rating {
                    color: #f5c518;
                }
                "#}
            </style>
        </div>
    }
}
