use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages;

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    RoomList,

    #[at("/fileList/:platform/:name")]
    FileList { platform: String, name: String },

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::RoomList => html! { <pages::room_list::RoomListPage /> },
        Route::FileList {
            platform,
            name,
        } => {
            html! {
                <pages::file_list::FileListPage
                    platform={platform}
                    name={name}
                />
            }
        },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}
