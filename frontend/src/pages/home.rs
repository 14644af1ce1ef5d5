use std::rc::Rc;

use yew::prelude::*;
use yew_router::components::Link;

use crate::components::seo_head::SeoHead;
use crate::models::ToolRecord;
use crate::seo::SeoConfig;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub featured: Vec<Rc<ToolRecord>>,
    #[prop_or_default]
    pub categories: Vec<String>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <SeoHead config={SeoConfig::for_home()} />
            // Hero Section
            <section class="hero">
                <h1>{"Find the Right Software, Minus the Sales Pitch"}</h1>
                <p class="hero-subtitle">
                    {"Plain-language reviews of the SaaS tools teams actually pay for: what they cost, what they're good at, and what to use instead."}
                </p>
                <Link<Route> to={Route::Tools} classes="hero-cta">
                    {"Browse the directory"}
                </Link<Route>>
            </section>

            // Featured tools
            <section class="features">
                <h2>{"Popular Reviews"}</h2>
                <div class="features-grid">
                    { for props.featured.iter().map(|tool| html! {
                        <Link<Route> to={Route::Tool { slug: tool.slug.clone() }} classes="feature-item">
                            <h3>{&tool.name}</h3>
                            <p>{&tool.short_pitch}</p>
                        </Link<Route>>
                    }) }
                </div>
            </section>

            <section class="how-it-works">
                <h2>{"Categories We Cover"}</h2>
                <ul class="category-list">
                    { for props.categories.iter().map(|category| html! { <li>{category}</li> }) }
                </ul>
            </section>

            <style>
                {r#"
                .landing-page {
                    padding-top: 74px;
                    color: #fff;
                    text-align: center;
                }
                .hero {
                    padding: 8rem 2rem 5rem;
                }
                .hero h1 {
                    font-size: 3.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.2rem;
                    color: #999;
                    max-width: 640px;
                    margin: 0 auto 2rem;
                }
                .hero-cta {
                    display: inline-block;
                    background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                    color: #fff;
                    padding: 1rem 2.5rem;
                    border-radius: 8px;
                    text-decoration: none;
                }
                .features, .how-it-works {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                }
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .feature-item {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 1.5rem;
                    color: inherit;
                    text-decoration: none;
                }
                .feature-item p {
                    color: #999;
                }
                .category-list {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }
                .category-list li {
                    padding: 0.5rem 1.25rem;
                    border-radius: 999px;
                    border: 1px solid rgba(126, 178, 255, 0.3);
                    color: #7EB2FF;
                }
                "#}
            </style>
        </div>
    }
}
