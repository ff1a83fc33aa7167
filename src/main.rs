use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;
use login_view::Mediator;

mod components;
mod config;
mod error;
mod i18n;

use components::LoginScreen;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_logging();
    dioxus::launch(App);
}

#[cfg(target_os = "android")]
fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default().with_max_level(log::LevelFilter::Debug),
    );
}

#[cfg(not(target_os = "android"))]
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[component]
fn App() -> Element {
    use_init_i18n(i18n::init_i18n);
    // One mediator for the whole app; views get it from context
    use_context_provider(Mediator::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "display: flex; flex-direction: column; min-height: 100vh; font-family: sans-serif;",
            LoginScreen {}
        }
    }
}
