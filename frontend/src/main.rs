use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info, warn, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod catalog;
mod models;
mod seo;
mod components {
    pub mod accordion;
    pub mod breadcrumbs;
    pub mod seo_head;
}
mod pages {
    pub mod compare;
    pub mod home;
    pub mod not_found;
    pub mod tool_page;
    pub mod tools_index;
}
#[cfg(test)]
mod test_support;

use pages::{
    compare::{resolve_matchup, ComparePage},
    home::Home,
    not_found::{CatalogUnavailable, NotFound},
    tool_page::keyed_tool_page,
    tools_index::ToolsIndex,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/tools")]
    Tools,
    #[at("/tools/:slug")]
    Tool { slug: String },
    #[at("/tools/compare/:matchup")]
    Compare { matchup: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    let catalog = match catalog::shared() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Tool catalog failed to load: {}", e);
            return html! { <CatalogUnavailable message={e.to_string()} /> };
        }
    };

    match routes {
        Route::Home => {
            info!("Rendering Home page");
            let featured: Vec<_> = catalog.all().iter().take(3).cloned().collect();
            let categories: Vec<_> = catalog.by_category().into_keys().collect();
            html! { <Home featured={featured} categories={categories} /> }
        },
        Route::Tools => {
            info!("Rendering Tools index page");
            html! { <ToolsIndex groups={catalog.by_category()} /> }
        },
        Route::Tool { slug } => {
            info!("Rendering Tool page for {}", slug);
            match catalog.find(&slug) {
                Some(record) => keyed_tool_page(record),
                None => {
                    warn!("No tool with slug {}", slug);
                    html! { <NotFound /> }
                }
            }
        },
        Route::Compare { matchup } => {
            info!("Rendering Compare page for {}", matchup);
            let (tools, missing) = resolve_matchup(&catalog, &matchup);
            html! {
                <ComparePage key={matchup.clone()} matchup={matchup.clone()} tools={tools} missing={missing} />
            }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let scroll_top = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_top > 80.0);
                    }) as Box<dyn FnMut()>)
                };
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::SITE_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Tools} classes="nav-link">
                            {"All Tools"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <footer class="site-footer">
                <p>{format!("© {}. Independent reviews, no paid placements.", config::SITE_NAME)}</p>
            </footer>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
