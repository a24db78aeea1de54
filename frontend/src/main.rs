mod console_logger;
mod env_variable_utils;
mod models;
mod router;
mod transcript;
mod utils;

use crate::env_variable_utils::{get_app_name, is_debug_mode, BACKEND_URL};
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    let debug = is_debug_mode();
    console_logger::init(debug);

    log::info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        get_app_name(),
        &*BACKEND_URL,
        debug
    );

    yew::Renderer::<App>::new().render();
}
