use std::{cmp::Ordering, rc::Rc};

use futures::{channel::oneshot, StreamExt};
use gloo_timers::future::IntervalStream;
use js_sys::{Array, JsString, Object};
use live_console_shared::{
    poller, ActionKind, Column, InflightSet, RoomAction,
    RoomListController, RoomListView, RoomRow, RowSize, SortKey, SortOrder, SortState,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::HttpRoomApi,
    components::{
        add_room_dialog::AddRoomDialog, confirm_popover::ConfirmPopover, status_tag::StatusTags,
    },
    hooks::{use_initial_layout, use_liveness},
    router::Route,
};

const ROW_ACTIONS: [ActionKind; 3] =
    [ActionKind::ToggleRecord, ActionKind::TogglePush, ActionKind::Delete];

/// Bridges controller output into component state.
#[derive(Clone)]
struct PageView {
    rows: UseStateHandle<Vec<RoomRow>>,
    inflight: UseStateHandle<InflightSet>,
}

impl RoomListView for PageView {
    fn replace_rows(&self, rows: Vec<RoomRow>) {
        self.rows.set(rows);
    }

    fn alert(&self, message: &str) {
        show_alert(message);
    }

    fn inflight_changed(&self, inflight: &InflightSet) {
        self.inflight.set(inflight.clone());
    }
}

fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            web_sys::console::error_1(&message.into());
        }
    }
}

#[derive(Clone)]
struct RowHandlers {
    on_action: Callback<(RoomRow, ActionKind)>,
    on_files: Callback<RoomRow>,
    inflight: InflightSet,
}

// `String.prototype.localeCompare` with the browser's default locale.
fn locale_compare(a: &str, b: &str) -> Ordering {
    JsString::from(a).locale_compare(b, &Array::new(), &Object::new()).cmp(&0)
}

fn divider() -> Html {
    html! { <span class={classes!("mx-1", "text-[var(--border)]")} aria-hidden="true">{ "|" }</span> }
}

fn room_link(url: &str, text: &str) -> Html {
    html! {
        <a
            href={url.to_string()}
            target="_blank"
            rel="noopener noreferrer"
            class={classes!("text-[var(--primary)]", "hover:underline")}
        >
            { text.to_string() }
        </a>
    }
}

fn action_cell(row: &RoomRow, handlers: &RowHandlers) -> Html {
    let buttons = ROW_ACTIONS.into_iter().map(|kind| {
        let action = RoomAction::resolve(row, kind);
        let on_confirm = {
            let row = row.clone();
            let on_action = handlers.on_action.clone();
            Callback::from(move |_: ()| on_action.emit((row.clone(), kind)))
        };
        html! {
            <>
                <ConfirmPopover
                    title={action.confirm_prompt()}
                    label={kind.button_label(row).to_string()}
                    on_confirm={on_confirm}
                    disabled={handlers.inflight.contains(&row.room_id, kind)}
                />
                { divider() }
            </>
        }
    });

    let on_files = {
        let row = row.clone();
        let on_files = handlers.on_files.clone();
        Callback::from(move |_: MouseEvent| on_files.emit(row.clone()))
    };

    html! {
        <span class={classes!("whitespace-nowrap")}>
            { for buttons }
            <button
                type="button"
                class={classes!("px-1", "text-sm", "text-[var(--primary)]", "hover:underline")}
                onclick={on_files}
            >
                { "文件" }
            </button>
        </span>
    }
}

fn cell(column: Column, row: &RoomRow, handlers: &RowHandlers) -> Html {
    match column {
        Column::Name => html! { { row.name.clone() } },
        Column::NameWithRoomLink => room_link(&row.room.url, &row.name),
        Column::Room => room_link(&row.room.url, &row.room.room_name),
        Column::Platform => html! { { row.address.clone() } },
        Column::RecordStatus => html! { <StatusTags tags={row.record_tags.clone()} /> },
        Column::PushStatus => html! { <StatusTags tags={row.push_tags.clone()} /> },
        Column::Actions => action_cell(row, handlers),
    }
}

fn header_cell(column: Column, sort: SortState, on_sort: &Callback<SortKey>) -> Html {
    let th_class = classes!("py-2", "pr-3", "text-left", "font-semibold");
    let Some(key) = column.sort_key() else {
        return html! { <th class={th_class}>{ column.title() }</th> };
    };
    let arrow = match sort.order_of(key) {
        Some(SortOrder::Ascending) => " ▲",
        Some(SortOrder::Descending) => " ▼",
        None => "",
    };
    let onclick = {
        let on_sort = on_sort.clone();
        Callback::from(move |_: MouseEvent| on_sort.emit(key))
    };
    html! {
        <th class={th_class}>
            <button type="button" class={classes!("font-semibold", "hover:underline")} onclick={onclick}>
                { column.title() }{ arrow }
            </button>
        </th>
    }
}

#[function_component(RoomListPage)]
pub fn room_list_page() -> Html {
    let rows = use_state(Vec::<RoomRow>::new);
    let inflight = use_state(InflightSet::default);
    let sort = use_state(SortState::default);
    let add_room_visible = use_state(|| false);
    let adding_room = use_state(|| false);
    let layout = use_initial_layout();
    let liveness = use_liveness();
    let navigator = use_navigator();

    let controller = {
        let liveness = liveness.clone();
        use_memo((), move |_| RoomListController::new(Rc::new(HttpRoomApi), liveness))
    };
    let view = PageView {
        rows: rows.clone(),
        inflight: inflight.clone(),
    };

    let refresh = {
        let controller = controller.clone();
        let view = view.clone();
        Callback::from(move |_: ()| {
            let controller = (*controller).clone();
            let view = view.clone();
            spawn_local(async move {
                controller.refresh(&view).await;
            });
        })
    };

    // 挂载时立即拉取，之后按固定周期刷新；卸载时停止计时器
    {
        let refresh = refresh.clone();
        let liveness = liveness.clone();
        use_effect_with((), move |_| {
            let (stop_tx, stop_rx) = oneshot::channel::<()>();
            let ticks = IntervalStream::new(poller::REFRESH_INTERVAL_MS).take_until(stop_rx);
            spawn_local(poller::run(ticks, liveness, move || refresh.emit(())));
            move || {
                let _ = stop_tx.send(());
            }
        });
    }

    let on_action = {
        let controller = controller.clone();
        let view = view.clone();
        Callback::from(move |(row, kind): (RoomRow, ActionKind)| {
            let controller = (*controller).clone();
            let view = view.clone();
            spawn_local(async move {
                controller.dispatch(&row, kind, &view).await;
            });
        })
    };

    let on_files = {
        let navigator = navigator.clone();
        Callback::from(move |row: RoomRow| match navigator.as_ref() {
            Some(navigator) => navigator.push(&Route::FileList {
                platform: row.address,
                name: row.name,
            }),
            None => web_sys::console::error_1(&"Navigator unavailable".into()),
        })
    };

    let on_save_settings = {
        let controller = controller.clone();
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            let controller = (*controller).clone();
            let view = view.clone();
            spawn_local(async move {
                controller.save_settings(&view).await;
            });
        })
    };

    let on_add_room_open = {
        let add_room_visible = add_room_visible.clone();
        Callback::from(move |_: MouseEvent| add_room_visible.set(true))
    };

    let on_add_room_close = {
        let add_room_visible = add_room_visible.clone();
        Callback::from(move |_: ()| add_room_visible.set(false))
    };

    let on_add_room_submit = {
        let controller = controller.clone();
        let view = view.clone();
        let add_room_visible = add_room_visible.clone();
        let adding_room = adding_room.clone();
        let liveness = liveness.clone();
        Callback::from(move |(url, listen): (String, bool)| {
            let controller = (*controller).clone();
            let view = view.clone();
            let add_room_visible = add_room_visible.clone();
            let adding_room = adding_room.clone();
            let liveness = liveness.clone();
            adding_room.set(true);
            spawn_local(async move {
                let added = controller.add_room(&url, listen, &view).await;
                if !liveness.is_alive() {
                    return;
                }
                adding_room.set(false);
                if added {
                    add_room_visible.set(false);
                }
            });
        })
    };

    let on_sort = {
        let sort = sort.clone();
        Callback::from(move |key: SortKey| sort.set(sort.toggle(key)))
    };

    let handlers = RowHandlers {
        on_action,
        on_files,
        inflight: (*inflight).clone(),
    };
    let columns = layout.columns();
    let visible_rows = sort.apply(&rows, locale_compare);
    let row_padding = match layout.row_size() {
        RowSize::Default => "py-3",
        RowSize::Middle => "py-2",
    };

    html! {
        <main class={classes!("mx-auto", "max-w-6xl", "px-4", "py-6")}>
            <header
                class={classes!(
                    "mb-4",
                    "flex",
                    "flex-wrap",
                    "items-center",
                    "justify-between",
                    "gap-3",
                    "rounded-2xl",
                    "bg-[var(--surface-alt)]",
                    "px-5",
                    "py-4"
                )}
            >
                <div class={classes!("flex", "items-baseline", "gap-3")}>
                    <h1 class={classes!("text-xl", "font-semibold")}>{ "直播间列表" }</h1>
                    <span class={classes!("text-sm", "text-[var(--muted)]")}>{ "Room List" }</span>
                </div>
                <div class={classes!("flex", "gap-2")}>
                    <button
                        type="button"
                        class={classes!("rounded-lg", "border", "px-4", "py-1.5", "text-sm")}
                        onclick={on_save_settings}
                    >
                        { "保存设置" }
                    </button>
                    <button
                        type="button"
                        class={classes!(
                            "rounded-lg",
                            "bg-[var(--primary)]",
                            "px-4",
                            "py-1.5",
                            "text-sm",
                            "text-white"
                        )}
                        onclick={on_add_room_open}
                    >
                        { "添加房间" }
                    </button>
                </div>
            </header>

            <AddRoomDialog
                visible={*add_room_visible}
                submitting={*adding_room}
                on_submit={on_add_room_submit}
                on_close={on_add_room_close}
            />

            <div class={classes!("overflow-x-auto")}>
                <table class={classes!("w-full", "text-sm")}>
                    <thead>
                        <tr class={classes!("border-b", "border-[var(--border)]")}>
                            { for columns.iter().map(|column| header_cell(*column, *sort, &on_sort)) }
                        </tr>
                    </thead>
                    <tbody>
                        if visible_rows.is_empty() {
                            <tr>
                                <td
                                    colspan={columns.len().to_string()}
                                    class={classes!("py-8", "text-center", "text-[var(--muted)]")}
                                >
                                    { "暂无数据" }
                                </td>
                            </tr>
                        } else {
                            { for visible_rows.iter().map(|row| html! {
                                <tr key={row.key.clone()} class={classes!("border-b", "border-[var(--border)]")}>
                                    { for columns.iter().map(|column| html! {
                                        <td class={classes!(row_padding, "pr-3", "align-middle")}>
                                            { cell(*column, row, &handlers) }
                                        </td>
                                    }) }
                                </tr>
                            }) }
                        }
                    </tbody>
                </table>
            </div>
        </main>
    }
}
