use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, WheelEvent};
use yew::prelude::*;

use crate::app_runtime;
use crate::page_services::is_touch_device;
use crate::project_card::ProjectCard;
use folio_core::{
    active_scroll, catalog, decide_wheel, scrolls_horizontally, ProjectRecord, ScrollCarry,
    ScrollMetrics, WheelDecision, WheelSample,
};

#[derive(Properties, PartialEq)]
pub(crate) struct ProjectGridProps {
    pub(crate) on_open: Callback<&'static ProjectRecord>,
}

#[function_component(ProjectGrid)]
pub(crate) fn project_grid(props: &ProjectGridProps) -> Html {
    let tuning = use_memo((), |_| app_runtime::tuning());
    let projects = catalog();
    let horizontal = scrolls_horizontally(projects.len(), &tuning);
    let hovered = use_state(|| false);
    // the wheel listener outlives renders, so it reads hover from here
    let hovered_live = use_mut_ref(|| false);
    let touch_device = use_state(|| false);
    let scroll_carry = use_mut_ref(ScrollCarry::default);
    let container_ref = use_node_ref();

    {
        let touch_device = touch_device.clone();
        use_effect_with((), move |_| {
            touch_device.set(is_touch_device());
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_event| {
                    touch_device.set(is_touch_device());
                })
            });
            move || drop(listener)
        });
    }

    {
        let container_ref = container_ref.clone();
        let hovered_live = hovered_live.clone();
        let scroll_carry = scroll_carry.clone();
        let tuning = tuning.clone();
        use_effect_with(horizontal, move |horizontal| {
            let horizontal = *horizontal;
            let listener = container_ref
                .cast::<Element>()
                .filter(|_| horizontal)
                .map(|container| {
                    let target = container.clone();
                    EventListener::new_with_options(
                        &target,
                        "wheel",
                        EventListenerOptions {
                            phase: EventListenerPhase::Bubble,
                            passive: false,
                        },
                        move |event: &Event| {
                            let Some(event) = event.dyn_ref::<WheelEvent>() else {
                                return;
                            };
                            let sample = WheelSample {
                                delta_x: event.delta_x(),
                                delta_y: event.delta_y(),
                                delta_mode: event.delta_mode(),
                            };
                            let metrics = ScrollMetrics {
                                scroll_left: container.scroll_left() as f64,
                                scroll_width: container.scroll_width() as f64,
                                client_width: container.client_width() as f64,
                            };
                            let hovered = *hovered_live.borrow();
                            match decide_wheel(sample, metrics, horizontal, hovered, &tuning) {
                                WheelDecision::PassThrough => {}
                                WheelDecision::Intercept { scroll_by } => {
                                    event.prevent_default();
                                    event.stop_propagation();
                                    let step = scroll_carry.borrow_mut().take(scroll_by);
                                    if step != 0 {
                                        container
                                            .set_scroll_left(metrics.scroll_left as i32 + step);
                                    }
                                }
                            }
                        },
                    )
                });
            move || drop(listener)
        });
    }

    let onmouseenter = {
        let hovered = hovered.clone();
        let hovered_live = hovered_live.clone();
        Callback::from(move |_: MouseEvent| {
            *hovered_live.borrow_mut() = true;
            hovered.set(true);
        })
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        let hovered_live = hovered_live.clone();
        Callback::from(move |_: MouseEvent| {
            *hovered_live.borrow_mut() = false;
            hovered.set(false);
        })
    };

    let active = active_scroll(horizontal, *hovered, *touch_device);
    let range_deg = tuning.card_rotation_range_deg;
    let cards: Html = projects
        .iter()
        .map(|project| {
            html! {
                <div
                    key={project.id}
                    class={classes!("project-slot", horizontal.then_some("project-slot--strip"))}
                >
                    <ProjectCard
                        {project}
                        on_open={props.on_open.clone()}
                        active_scroll={active}
                        rotation_range_deg={range_deg}
                    />
                </div>
            }
        })
        .collect();
    let fades = if horizontal {
        html! {
            <>
                <div class="grid-fade grid-fade--left" />
                <div class="grid-fade grid-fade--right" />
            </>
        }
    } else {
        Html::default()
    };

    html! {
        <section class="section section--flush">
            <div class="grid-frame">
                <div
                    ref={container_ref}
                    class={classes!(
                        "project-grid",
                        horizontal.then_some("project-grid--strip"),
                        active.then_some("project-grid--active"),
                    )}
                    {onmouseenter}
                    {onmouseleave}
                >
                    { cards }
                </div>
                { fades }
            </div>
        </section>
    }
}
