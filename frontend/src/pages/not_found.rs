use yew::prelude::*;
use yew_router::components::Link;

use crate::components::seo_head::SeoHead;
use crate::seo::SeoConfig;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
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
        <div class="not-found-page">
            <SeoHead config={SeoConfig::not_found()} />
            <h1>{"Page not found"}</h1>
            <p>{"We don't have a page for that tool yet."}</p>
            <Link<Route> to={Route::Tools} classes="forward-link">
                {"Back to the directory"}
            </Link<Route>>
            <style>{NOT_FOUND_STYLES}</style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CatalogUnavailableProps {
    pub message: AttrValue,
}

/// Shown in place of every page when the embedded catalog fails to load.
#[function_component(CatalogUnavailable)]
pub fn catalog_unavailable(props: &CatalogUnavailableProps) -> Html {
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
        <div class="not-found-page">
            <h1>{"Directory unavailable"}</h1>
            <p>{"The tool catalog could not be loaded."}</p>
            <pre class="error-detail">{&props.message}</pre>
            <style>{NOT_FOUND_STYLES}</style>
        </div>
    }
}

const NOT_FOUND_STYLES: &str = r#"
.not-found-page {
    padding: 10rem 2rem;
    text-align: center;
    color: #fff;
}
.not-found-page p {
    color: #999;
}
.error-detail {
    color: #ff6b6b;
    white-space: pre-wrap;
}
.forward-link {
    color: #7EB2FF;
}
"#;
