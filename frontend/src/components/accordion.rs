use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::models::FaqEntry;

/// Open/closed state of one FAQ entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqToggle {
    open: bool,
}

impl FaqToggle {
    pub fn new(default_open: bool) -> Self {
        Self { open: default_open }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }
}

/// Starting state for a list of `len` entries where only `default_open`
/// is expanded. An index past the end leaves everything collapsed.
pub fn initial_toggles(len: usize, default_open: usize) -> Vec<FaqToggle> {
    (0..len).map(|i| FaqToggle::new(i == default_open)).collect()
}

/// Element id used for deep links, 1-based: `faq-1`, `faq-2`, ...
pub fn faq_anchor(index: usize) -> String {
    format!("faq-{}", index + 1)
}

#[derive(Properties, PartialEq)]
pub struct AccordionItemProps {
    pub question: AttrValue,
    pub answer: AttrValue,
    pub anchor: AttrValue,
    #[prop_or_default]
    pub default_open: bool,
}

#[function_component(AccordionItem)]
pub fn accordion_item(props: &AccordionItemProps) -> Html {
    let state = use_state(|| FaqToggle::new(props.default_open));

    // Open and scroll to this item when the URL hash targets it
    {
        let state = state.clone();
        use_effect_with_deps(
            move |anchor: &AttrValue| {
                let target = format!("#{}", anchor);
                let anchor = anchor.clone();
                let listener = web_sys::window().map(|window| {
                    let open_if_targeted = {
                        let window = window.clone();
                        move || {
                            let hash = window.location().hash().unwrap_or_default();
                            if hash != target {
                                return;
                            }
                            state.set(FaqToggle::new(true));
                            let window = window.clone();
                            let anchor = anchor.clone();
                            // Give the answer a moment to mount before scrolling
                            let timeout = Timeout::new(100, move || {
                                if let Some(element) = window
                                    .document()
                                    .and_then(|doc| doc.get_element_by_id(&anchor))
                                {
                                    element.scroll_into_view_with_bool(true);
                                }
                            });
                            timeout.forget();
                        }
                    };
                    open_if_targeted();

                    let callback = Closure::wrap(Box::new(open_if_targeted) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback(
                        "hashchange",
                        callback.as_ref().unchecked_ref(),
                    );
                    (window, callback)
                });

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "hashchange",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            props.anchor.clone(),
        );
    }

    let toggle = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.set((*state).toggled());
        })
    };

    let open = state.is_open();
    let panel_id = format!("{}-answer", props.anchor);

    html! {
        <div id={props.anchor.clone()} class={classes!("faq-item", open.then_some("open"))}>
            <button
                class="faq-question"
                onclick={toggle}
                aria-expanded={open.to_string()}
                aria-controls={panel_id.clone()}
            >
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if open { "−" } else { "+" }}</span>
            </button>
            {
                if open {
                    html! {
                        <div id={panel_id} class="faq-answer">
                            <p>{&props.answer}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub faqs: Vec<FaqEntry>,
    #[prop_or_default]
    pub default_open: usize,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let toggles = initial_toggles(props.faqs.len(), props.default_open);

    html! {
        <div class="faq-list">
            { for props.faqs.iter().zip(toggles).enumerate().map(|(i, (faq, toggle))| html! {
                <AccordionItem
                    key={i}
                    question={faq.question.clone()}
                    answer={faq.answer.clone()}
                    anchor={faq_anchor(i)}
                    default_open={toggle.is_open()}
                />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use yew::LocalServerRenderer;

    fn faq(question: &str, answer: &str) -> FaqEntry {
        FaqEntry {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn starts_in_the_requested_state() {
        assert!(FaqToggle::new(true).is_open());
        assert!(!FaqToggle::new(false).is_open());
    }

    #[test]
    fn n_toggles_flip_by_parity() {
        for default_open in [false, true] {
            let mut toggle = FaqToggle::new(default_open);
            for n in 1..=9 {
                toggle = toggle.toggled();
                assert_eq!(toggle.is_open(), default_open ^ (n % 2 == 1), "after {n} clicks");
            }
        }
    }

    #[test]
    fn exactly_one_entry_starts_open() {
        let toggles = initial_toggles(4, 0);
        let open: Vec<_> = toggles.iter().map(|t| t.is_open()).collect();
        assert_eq!(open, vec![true, false, false, false]);

        let toggles = initial_toggles(3, 2);
        assert_eq!(toggles.iter().filter(|t| t.is_open()).count(), 1);
        assert!(toggles[2].is_open());
    }

    #[test]
    fn no_entries_no_toggles() {
        assert!(initial_toggles(0, 0).is_empty());
        assert!(initial_toggles(2, 5).iter().all(|t| !t.is_open()));
    }

    #[test]
    fn toggling_one_leaves_siblings_alone() {
        let mut toggles = initial_toggles(3, 0);
        let before = toggles.clone();
        toggles[1] = toggles[1].toggled();

        assert_eq!(toggles[0], before[0]);
        assert_eq!(toggles[2], before[2]);
        assert_ne!(toggles[1], before[1]);
    }

    #[test]
    fn anchors_are_one_based() {
        assert_eq!(faq_anchor(0), "faq-1");
        assert_eq!(faq_anchor(9), "faq-10");
    }

    #[tokio::test]
    async fn collapsed_item_does_not_mount_its_answer() {
        let html = LocalServerRenderer::<AccordionItem>::with_props(AccordionItemProps {
            question: "Is there a free plan?".into(),
            answer: "Yes, for up to three users.".into(),
            anchor: "faq-1".into(),
            default_open: false,
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("Is there a free plan?"));
        assert!(!html.contains("for up to three users"));
        assert!(html.contains(r#"aria-expanded="false""#));
    }

    #[tokio::test]
    async fn list_renders_default_entry_expanded() {
        let html = LocalServerRenderer::<FaqList>::with_props(FaqListProps {
            faqs: vec![faq("A?", "first answer"), faq("B?", "second answer")],
            default_open: 0,
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("first answer"));
        assert!(!html.contains("second answer"));
        assert!(html.contains(r#"id="faq-1""#));
        assert!(html.contains(r#"id="faq-2""#));
    }

    #[tokio::test]
    async fn empty_list_renders_no_items() {
        let html = LocalServerRenderer::<FaqList>::with_props(FaqListProps {
            faqs: Vec::new(),
            default_open: 0,
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("faq-list"));
        assert!(!html.contains("faq-item"));
    }
}
