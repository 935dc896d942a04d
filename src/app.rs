use yew::prelude::*;

use crate::page_services::{location_fragment, PageServices};
use crate::project_grid::ProjectGrid;
use crate::project_overlay::ProjectOverlay;
use crate::sections::{AboutSection, ContactSection, FooterSeparators, HeaderSection};
use folio_core::{project_by_id, ProjectRecord};

#[function_component(App)]
pub(crate) fn app() -> Html {
    let services = use_memo((), |_| PageServices::new());
    let selected = use_state(|| None::<&'static ProjectRecord>);
    let modal_open = use_state(|| false);

    let on_open = {
        let selected = selected.clone();
        let modal_open = modal_open.clone();
        use_callback((), move |project: &'static ProjectRecord, _| {
            selected.set(Some(project));
            modal_open.set(true);
        })
    };
    // a `#<project-id>` fragment opens that project on load
    {
        let on_open = on_open.clone();
        use_effect_with((), move |_| {
            let linked = location_fragment().and_then(|fragment| project_by_id(&fragment));
            if let Some(project) = linked {
                gloo::console::log!("opening linked project", project.id);
                on_open.emit(project);
            }
            || ()
        });
    }
    // the overlay keeps its own copy of the project for the close animation
    let on_close = {
        let selected = selected.clone();
        let modal_open = modal_open.clone();
        use_callback((), move |_: (), _| {
            modal_open.set(false);
            selected.set(None);
        })
    };

    html! {
        <ContextProvider<PageServices> context={(*services).clone()}>
            <div class="page">
                <main class="container">
                    <div class="section">
                        <HeaderSection />
                        <AboutSection />
                        <ProjectGrid {on_open} />
                        <ContactSection />
                        <FooterSeparators />
                    </div>
                </main>
                <ProjectOverlay project={*selected} open={*modal_open} {on_close} />
            </div>
        </ContextProvider<PageServices>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use folio_core::catalog;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_root(id: &str) -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        root.set_id(id);
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        root
    }

    fn modal_title(root: &Element) -> Option<String> {
        root.query_selector(".modal-title")
            .ok()
            .flatten()
            .and_then(|node| node.text_content())
    }

    fn press_escape() {
        let init = KeyboardEventInit::new();
        init.set_key("Escape");
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keyup", &init)
            .expect("keyboard event");
        web_sys::window()
            .expect("window available")
            .dispatch_event(&event)
            .expect("dispatch keyup");
    }

    #[wasm_bindgen_test]
    fn renders_one_card_per_project() {
        set_panic_hook();
        let root = mount_root("folio-test-cards");
        let _app_handle = yew::Renderer::<App>::with_root(root.clone()).render();
        let cards = root
            .query_selector_all(".project-card")
            .expect("query cards");
        assert_eq!(cards.length() as usize, catalog().len());
        assert!(modal_title(&root).is_none());
    }

    #[wasm_bindgen_test(async)]
    async fn fragment_opens_the_linked_project() {
        set_panic_hook();
        let location = web_sys::window().expect("window available").location();
        let project = &catalog()[1];
        location
            .set_hash(&format!("#{}", project.id))
            .expect("set fragment");
        let root = mount_root("folio-test-fragment");
        let handle = yew::Renderer::<App>::with_root(root.clone()).render();
        TimeoutFuture::new(100).await;
        assert_eq!(modal_title(&root).as_deref(), Some(project.title));

        handle.destroy();
        location.set_hash("").expect("clear fragment");
    }

    #[wasm_bindgen_test(async)]
    async fn unknown_fragment_is_ignored() {
        set_panic_hook();
        let location = web_sys::window().expect("window available").location();
        location.set_hash("#no-such-project").expect("set fragment");
        let root = mount_root("folio-test-bad-fragment");
        let handle = yew::Renderer::<App>::with_root(root.clone()).render();
        TimeoutFuture::new(100).await;
        assert!(modal_title(&root).is_none());

        handle.destroy();
        location.set_hash("").expect("clear fragment");
    }

    #[wasm_bindgen_test(async)]
    async fn card_click_opens_and_escape_closes() {
        set_panic_hook();
        let root = mount_root("folio-test-overlay");
        let _app_handle = yew::Renderer::<App>::with_root(root.clone()).render();
        TimeoutFuture::new(0).await;

        let card: HtmlElement = root
            .query_selector(".project-card")
            .ok()
            .flatten()
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            .expect("first card rendered");
        card.click();
        TimeoutFuture::new(100).await;
        assert_eq!(modal_title(&root).as_deref(), Some(catalog()[0].title));

        press_escape();
        TimeoutFuture::new(100).await;
        // still rendered while the close transition runs
        assert_eq!(modal_title(&root).as_deref(), Some(catalog()[0].title));

        TimeoutFuture::new(500).await;
        assert!(modal_title(&root).is_none());
    }
}
