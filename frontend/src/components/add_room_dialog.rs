use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddRoomDialogProps {
    pub visible: bool,
    /// Fired with the raw URL input and the "listen" toggle.
    pub on_submit: Callback<(String, bool)>,
    pub on_close: Callback<()>,
    #[prop_or(false)]
    pub submitting: bool,
}

#[function_component(AddRoomDialog)]
pub fn add_room_dialog(props: &AddRoomDialogProps) -> Html {
    let url = use_state(String::new);
    let listen = use_state(|| true);

    // 每次打开时清空上一次的输入
    {
        let url = url.clone();
        let listen = listen.clone();
        use_effect_with(props.visible, move |visible| {
            if *visible {
                url.set(String::new());
                listen.set(true);
            }
            || ()
        });
    }

    if !props.visible {
        return Html::default();
    }

    let on_url_input = {
        let url = url.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                url.set(target.value());
            }
        })
    };

    let on_listen_change = {
        let listen = listen.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                listen.set(target.checked());
            }
        })
    };

    let submit = {
        let url = url.clone();
        let listen = listen.clone();
        let on_submit = props.on_submit.clone();
        let submitting = props.submitting;
        Callback::from(move |_: ()| {
            if !submitting {
                on_submit.emit(((*url).clone(), *listen));
            }
        })
    };

    let on_ok = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };

    let on_keydown = {
        let submit = submit.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                submit.emit(());
            }
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            class={classes!(
                "fixed",
                "inset-0",
                "z-40",
                "flex",
                "items-center",
                "justify-center",
                "bg-black/30",
                "dark:bg-black/60"
            )}
        >
            <div
                role="dialog"
                aria-modal="true"
                class={classes!(
                    "w-full",
                    "max-w-md",
                    "rounded-2xl",
                    "bg-[var(--surface)]",
                    "p-6",
                    "shadow-xl"
                )}
            >
                <h3 class={classes!("mb-4", "text-lg", "font-semibold")}>{ "添加直播间" }</h3>
                <input
                    type="text"
                    class={classes!(
                        "w-full",
                        "rounded-lg",
                        "border",
                        "border-[var(--border)]",
                        "px-3",
                        "py-2",
                        "text-sm"
                    )}
                    placeholder="请输入直播间的 URL 地址"
                    value={(*url).clone()}
                    oninput={on_url_input}
                    onkeydown={on_keydown}
                />
                <label class={classes!("mt-3", "flex", "items-center", "gap-2", "text-sm")}>
                    <input type="checkbox" checked={*listen} onchange={on_listen_change} />
                    { "添加后立即开始监控" }
                </label>
                <div class={classes!("mt-6", "flex", "justify-end", "gap-3")}>
                    <button
                        type="button"
                        class={classes!("rounded-lg", "border", "px-4", "py-1.5", "text-sm")}
                        onclick={on_cancel}
                    >
                        { "取消" }
                    </button>
                    <button
                        type="button"
                        class={classes!(
                            "rounded-lg",
                            "bg-[var(--primary)]",
                            "px-4",
                            "py-1.5",
                            "text-sm",
                            "text-white",
                            "disabled:opacity-50"
                        )}
                        disabled={props.submitting}
                        onclick={on_ok}
                    >
                        { if props.submitting { "添加中..." } else { "确定" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
