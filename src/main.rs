mod audio;
mod chart;
mod components;
mod loader;
mod model;
mod plant;
mod state;
mod util;

use components::app::App;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
