use yew::prelude::*;
use yew_router::components::Link;

use crate::seo::Breadcrumb;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BreadcrumbsProps {
    pub crumbs: Vec<Breadcrumb>,
}

// The last crumb is the current page and is not a link.
#[function_component(Breadcrumbs)]
pub fn breadcrumbs(props: &BreadcrumbsProps) -> Html {
    let last = props.crumbs.len().saturating_sub(1);

    html! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            <ol>
                { for props.crumbs.iter().enumerate().map(|(i, crumb)| {
                    if i == last {
                        html! { <li aria-current="page">{&crumb.name}</li> }
                    } else {
                        html! {
                            <li>
                                <Link<Route> to={crumb.route.clone()}>{&crumb.name}</Link<Route>>
                            </li>
                        }
                    }
                }) }
            </ol>
        </nav>
    }
}
