use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmPopoverProps {
    /// Question shown in the popover.
    pub title: String,
    /// Text of the trigger button.
    pub label: String,
    pub on_confirm: Callback<()>,
    #[prop_or(false)]
    pub disabled: bool,
}

/// Link-style button that asks for confirmation before firing `on_confirm`.
#[function_component(ConfirmPopover)]
pub fn confirm_popover(props: &ConfirmPopoverProps) -> Html {
    let open = use_state(|| false);

    let on_trigger = {
        let open = open.clone();
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| {
            if !disabled {
                open.set(!*open);
            }
        })
    };

    let on_cancel = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    let on_ok = {
        let open = open.clone();
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(false);
            on_confirm.emit(());
        })
    };

    html! {
        <span class={classes!("relative", "inline-block")}>
            <button
                type="button"
                class={classes!(
                    "px-1",
                    "text-sm",
                    "text-[var(--primary)]",
                    "hover:underline",
                    "disabled:cursor-not-allowed",
                    "disabled:opacity-50"
                )}
                disabled={props.disabled}
                onclick={on_trigger}
            >
                { props.label.clone() }
            </button>
            if *open {
                <div
                    role="dialog"
                    class={classes!(
                        "absolute",
                        "right-0",
                        "top-full",
                        "z-30",
                        "mt-1",
                        "w-48",
                        "rounded-lg",
                        "border",
                        "border-[var(--border)]",
                        "bg-[var(--surface)]",
                        "p-3",
                        "text-sm",
                        "shadow-lg"
                    )}
                >
                    <p class={classes!("mb-3")}>{ props.title.clone() }</p>
                    <div class={classes!("flex", "justify-end", "gap-2")}>
                        <button
                            type="button"
                            class={classes!("rounded", "border", "px-2", "py-0.5")}
                            onclick={on_cancel}
                        >
                            { "取消" }
                        </button>
                        <button
                            type="button"
                            class={classes!("rounded", "bg-[var(--primary)]", "px-2", "py-0.5", "text-white")}
                            onclick={on_ok}
                        >
                            { "确定" }
                        </button>
                    </div>
                </div>
            }
        </span>
    }
}
