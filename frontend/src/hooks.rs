use live_console_shared::{Layout, Liveness};
use yew::prelude::*;

/// Liveness flag of the calling component. It goes dead when the component
/// unmounts, so async continuations spawned from it can bail out.
///
/// # Example
/// ```ignore
/// use crate::hooks::use_liveness;
///
/// #[function_component(Page)]
/// fn page() -> Html {
///     let liveness = use_liveness();
///     let data = use_state(String::new);
///     {
///         let data = data.clone();
///         use_effect_with((), move |_| {
///             wasm_bindgen_futures::spawn_local(async move {
///                 let value = fetch().await;
///                 if liveness.is_alive() {
///                     data.set(value);
///                 }
///             });
///             || ()
///         });
///     }
///     html! { <p>{ (*data).clone() }</p> }
/// }
/// ```
#[hook]
pub fn use_liveness() -> Liveness {
    let liveness = use_memo((), |_| Liveness::new());

    {
        let liveness = (*liveness).clone();
        use_effect_with((), move |_| move || liveness.shutdown());
    }

    (*liveness).clone()
}

/// Table layout for the viewport width at first render. Later resizes are
/// ignored.
#[hook]
pub fn use_initial_layout() -> Layout {
    *use_memo((), |_| Layout::for_viewport_width(viewport_width()))
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(f64::MAX)
}
