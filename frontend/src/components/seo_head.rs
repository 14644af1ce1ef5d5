use log::{debug, warn};
use web_sys::{Document, Element};
use yew::prelude::*;

use crate::seo::SeoConfig;

const JSON_LD_ID: &str = "seo-jsonld";

#[derive(Properties, PartialEq)]
pub struct SeoHeadProps {
    pub config: SeoConfig,
}

/// Writes title, meta, canonical link and JSON-LD for the current page into
/// `document.head`. Renders nothing itself.
#[function_component(SeoHead)]
pub fn seo_head(props: &SeoHeadProps) -> Html {
    use_effect_with_deps(
        move |config: &SeoConfig| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                apply(&document, config);
            }
            || ()
        },
        props.config.clone(),
    );

    html! {}
}

fn apply(document: &Document, config: &SeoConfig) {
    debug!("Updating head for {}", config.canonical);
    document.set_title(&config.title);

    let metas = [
        ("name", "description", config.description.as_str()),
        ("property", "og:title", config.title.as_str()),
        ("property", "og:description", config.description.as_str()),
        ("property", "og:image", config.image.as_str()),
        ("property", "og:type", config.kind.as_str()),
        ("property", "og:url", config.canonical.as_str()),
    ];
    for (attr, key, content) in metas {
        let selector = format!("meta[{}=\"{}\"]", attr, key);
        if let Some(meta) = upsert(document, &selector, "meta") {
            let _ = meta.set_attribute(attr, key);
            let _ = meta.set_attribute("content", content);
        }
    }

    if let Some(link) = upsert(document, "link[rel=\"canonical\"]", "link") {
        let _ = link.set_attribute("rel", "canonical");
        let _ = link.set_attribute("href", &config.canonical);
    }

    match serde_json::to_string(&config.json_ld()) {
        Ok(json) => {
            let selector = format!("script#{}", JSON_LD_ID);
            if let Some(script) = upsert(document, &selector, "script") {
                let _ = script.set_attribute("id", JSON_LD_ID);
                let _ = script.set_attribute("type", "application/ld+json");
                script.set_text_content(Some(&json));
            }
        }
        Err(e) => warn!("Could not serialize structured data: {}", e),
    }
}

/// Finds the head element matching `selector`, creating and appending
/// a new `tag` element when there is none.
fn upsert(document: &Document, selector: &str, tag: &str) -> Option<Element> {
    if let Ok(Some(existing)) = document.query_selector(selector) {
        return Some(existing);
    }
    let head = document.head()?;
    let element = document.create_element(tag).ok()?;
    head.append_child(&element).ok()?;
    Some(element)
}
