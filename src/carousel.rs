use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, TransitionEvent};
use yew::prelude::*;

use crate::app_runtime;
use folio_core::{resolve_image_src, CarouselEngine};

const SETTLE_FALLBACK_MARGIN_MS: u32 = 50;

#[derive(Properties, PartialEq)]
pub(crate) struct ImageCarouselProps {
    pub(crate) images: &'static [&'static str],
    pub(crate) alt: AttrValue,
    #[prop_or(true)]
    pub(crate) looped: bool,
}

/// One image per view. The track slides with a CSS transition; the selected
/// slide (opacity, counter) only changes once the engine reports the slide
/// has settled.
#[function_component(ImageCarousel)]
pub(crate) fn image_carousel(props: &ImageCarouselProps) -> Html {
    let tuning = use_memo((), |_| app_runtime::tuning());
    let engine = {
        let len = props.images.len();
        let looped = props.looped;
        use_mut_ref(move || CarouselEngine::new(len, looped))
    };
    let target = use_state(|| 0usize);
    let selected = use_state(|| 0usize);
    let settle_fallback = use_mut_ref(|| None::<Timeout>);
    let track_ref = use_node_ref();

    let settle: Rc<dyn Fn()> = {
        let engine = engine.clone();
        let selected = selected.clone();
        let settle_fallback = settle_fallback.clone();
        Rc::new(move || {
            settle_fallback.borrow_mut().take();
            let settled = engine.borrow_mut().settle();
            if let Some(index) = settled {
                selected.set(index);
            }
        })
    };

    {
        let track_ref = track_ref.clone();
        let settle = settle.clone();
        use_effect_with((), move |_| {
            let listener = track_ref.cast::<Element>().map(|track| {
                let target = track.clone();
                EventListener::new(&target, "transitionend", move |event: &Event| {
                    if is_track_slide_end(event, &track) {
                        settle();
                    }
                })
            });
            move || drop(listener)
        });
    }

    let step = {
        let engine = engine.clone();
        let target = target.clone();
        let settle_fallback = settle_fallback.clone();
        let transition_ms = tuning.transition_ms;
        move |forward: bool| {
            let moved = {
                let mut engine = engine.borrow_mut();
                if forward {
                    engine.scroll_next()
                } else {
                    engine.scroll_prev()
                }
            };
            let Some(index) = moved else {
                return;
            };
            target.set(index);
            // transitionend is not guaranteed (hidden pane, reduced motion)
            let settle = settle.clone();
            let timer = Timeout::new(transition_ms + SETTLE_FALLBACK_MARGIN_MS, move || settle());
            *settle_fallback.borrow_mut() = Some(timer);
        }
    };
    let on_prev = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step(false))
    };
    let on_next = Callback::from(move |_: MouseEvent| step(true));

    let engine_view = engine.borrow();
    let track_style = format!(
        "transform: translateX(-{}%); transition: transform {}ms cubic-bezier(0.22, 1, 0.36, 1);",
        *target * 100,
        tuning.transition_ms
    );
    let slides: Html = props
        .images
        .iter()
        .enumerate()
        .map(|(index, src)| {
            let opacity = engine_view.slide_opacity(index, &tuning);
            html! {
                <div
                    class="carousel__slide"
                    style={format!("opacity: {opacity:.2}; transition: opacity 0.3s ease;")}
                    aria-hidden={(index != *selected).to_string()}
                >
                    <img class="carousel__image" src={resolve_image_src(Some(*src))} alt={props.alt.clone()} loading="lazy" />
                </div>
            }
        })
        .collect();
    let controls = if engine_view.len() > 1 {
        html! {
            <div class="carousel__controls">
                <button
                    type="button"
                    class="carousel__button"
                    aria-label="Previous image"
                    disabled={!engine_view.can_scroll_prev()}
                    onclick={on_prev}
                >
                    { "←" }
                </button>
                <span class="carousel__counter">
                    { format!("{} / {}", *selected + 1, engine_view.len()) }
                </span>
                <button
                    type="button"
                    class="carousel__button"
                    aria-label="Next image"
                    disabled={!engine_view.can_scroll_next()}
                    onclick={on_next}
                >
                    { "→" }
                </button>
            </div>
        }
    } else {
        Html::default()
    };

    html! {
        <div class="carousel">
            <div class="carousel__viewport">
                <div ref={track_ref} class="carousel__track" style={track_style}>
                    { slides }
                </div>
            </div>
            { controls }
        </div>
    }
}

// slide opacity fades bubble up to the track and must not settle it
fn is_track_slide_end(event: &Event, track: &Element) -> bool {
    let on_track = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .is_some_and(|target| &target == track);
    let moved = event
        .dyn_ref::<TransitionEvent>()
        .map_or(true, |event| event.property_name() == "transform");
    on_track && moved
}
