use js_sys::Date;
use live_console_shared::{FileEntry, FileListResponse, Liveness};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api::fetch_file_list, components::loading_spinner::LoadingSpinner, router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct FileListPageProps {
    pub platform: String,
    pub name: String,
}

fn format_unix_seconds(ts: i64) -> String {
    let d = Date::new(&wasm_bindgen::JsValue::from_f64((ts * 1000) as f64));
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        d.get_full_year(),
        d.get_month() + 1, // JS months are 0-indexed
        d.get_date(),
        d.get_hours(),
        d.get_minutes(),
        d.get_seconds(),
    )
}

fn file_row(file: &FileEntry) -> Html {
    let icon = if file.is_folder { "📁" } else { "🎞️" };
    html! {
        <tr key={file.name.clone()} class={classes!("border-b", "border-[var(--border)]")}>
            <td class={classes!("py-2", "pr-3")}>
                <span aria-hidden="true" class={classes!("mr-2")}>{ icon }</span>
                { file.name.clone() }
            </td>
            <td class={classes!("py-2", "pr-3", "whitespace-nowrap")}>{ file.display_size() }</td>
            <td class={classes!("py-2", "pr-3", "whitespace-nowrap")}>
                { format_unix_seconds(file.last_modified) }
            </td>
        </tr>
    }
}

#[function_component(FileListPage)]
pub fn file_list_page(props: &FileListPageProps) -> Html {
    let listing = use_state(|| None::<FileListResponse>);
    let load_error = use_state(|| None::<String>);
    let loading = use_state(|| true);

    {
        let listing = listing.clone();
        let load_error = load_error.clone();
        let loading = loading.clone();
        use_effect_with((props.platform.clone(), props.name.clone()), move |(platform, name)| {
            let platform = platform.clone();
            let name = name.clone();
            // One flag per run: new props or unmount retire the pending fetch.
            let current = Liveness::new();
            let guard = current.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_file_list(&platform, &name).await;
                if !guard.is_alive() {
                    return;
                }
                match result {
                    Ok(data) => {
                        listing.set(Some(data));
                        load_error.set(None);
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch file list: {}", err).into(),
                        );
                        load_error.set(Some(format!("获取文件列表失败: {}", err)));
                    },
                }
                loading.set(false);
            });
            move || current.shutdown()
        });
    }

    let body = if *loading {
        html! { <LoadingSpinner /> }
    } else if let Some(message) = (*load_error).clone() {
        html! { <p class={classes!("py-8", "text-center", "text-red-600")} role="alert">{ message }</p> }
    } else {
        match (*listing).as_ref() {
            Some(listing) if !listing.files.is_empty() => html! {
                <table class={classes!("w-full", "text-sm")}>
                    <thead>
                        <tr class={classes!("border-b", "border-[var(--border)]", "text-left")}>
                            <th class={classes!("py-2", "pr-3")}>{ "文件名" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "大小" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "修改时间" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for listing.files.iter().map(file_row) }
                    </tbody>
                </table>
            },
            _ => html! {
                <p class={classes!("py-8", "text-center", "text-[var(--muted)]")}>{ "暂无录制文件" }</p>
            },
        }
    };

    html! {
        <main class={classes!("mx-auto", "max-w-6xl", "px-4", "py-6")}>
            <div class={classes!("mb-4", "flex", "items-baseline", "gap-3")}>
                <Link<Route> to={Route::RoomList} classes={classes!("text-sm", "text-[var(--primary)]", "hover:underline")}>
                    { "← 返回" }
                </Link<Route>>
                <h1 class={classes!("text-xl", "font-semibold")}>
                    { format!("{} / {}", props.platform, props.name) }
                </h1>
            </div>
            { body }
        </main>
    }
}
