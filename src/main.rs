mod app;
mod app_runtime;
mod carousel;
mod page_services;
mod project_card;
mod project_grid;
mod project_overlay;
mod sections;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    app_runtime::set_tuning(app_runtime::load_tuning());
    gloo::console::log!("folio starting");
    yew::Renderer::<App>::new().render();
}
