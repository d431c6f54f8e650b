//! Entry point: installs the panic hook and mounts the site.

use dandung_portfolio::App;

fn main() {
    // Surface panics (e.g. a component outside the locale provider) in the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
