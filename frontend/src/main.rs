//! Browser console for the live recorder: room list, actions and recorded
//! files.

mod api;
mod components;
mod config;
mod hooks;
#[cfg(feature = "mock")]
mod models;
mod pages;
mod router;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
