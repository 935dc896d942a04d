use js_sys::Math;
use yew::prelude::*;

use folio_core::{resolve_image_src, CardRotation, ProjectRecord};

#[derive(Properties, PartialEq)]
pub(crate) struct ProjectCardProps {
    pub(crate) project: &'static ProjectRecord,
    pub(crate) on_open: Callback<&'static ProjectRecord>,
    /// Grid is in active scroll; the card lies flat.
    #[prop_or_default]
    pub(crate) active_scroll: bool,
    pub(crate) rotation_range_deg: f64,
}

#[function_component(ProjectCard)]
pub(crate) fn project_card(props: &ProjectCardProps) -> Html {
    let rotation = use_state(CardRotation::unrealized);
    {
        let rotation = rotation.clone();
        let range_deg = props.rotation_range_deg;
        // drawn after the first render so the initial markup is always flat
        use_effect_with((), move |_| {
            let mut realized = *rotation;
            realized.realize_with(Math::random, range_deg);
            rotation.set(realized);
            || ()
        });
    }

    let project = props.project;
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(project))
    };
    let angle = rotation.displayed(props.active_scroll);
    let z_index = if props.active_scroll { "1" } else { "auto" };
    let style = format!(
        "transform: rotate({angle:.3}deg); transition: transform 0.3s ease, opacity 0.3s ease; z-index: {z_index};"
    );

    html! {
        <button
            type="button"
            class="project-card"
            {style}
            {onclick}
            aria-label={project.title}
            data-project-id={project.id}
        >
            <img
                class="project-card__image"
                src={resolve_image_src(project.image)}
                alt={project.title}
                width="500"
                height="500"
                loading="lazy"
            />
        </button>
    }
}
