use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("mx-auto", "max-w-6xl", "px-4", "py-12", "text-center")}>
            <h2 class={classes!("mb-2", "text-xl", "font-semibold")}>{"404 - 页面未找到"}</h2>
            <Link<Route> to={Route::RoomList} classes={classes!("text-[var(--primary)]", "hover:underline")}>
                {"返回直播间列表"}
            </Link<Route>>
        </main>
    }
}
