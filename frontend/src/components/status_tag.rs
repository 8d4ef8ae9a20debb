use live_console_shared::{StatusTag, TagColor};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusTagsProps {
    pub tags: Vec<StatusTag>,
}

fn tag_class(color: TagColor) -> Classes {
    let base = classes!(
        "inline-flex",
        "items-center",
        "rounded",
        "border",
        "px-2",
        "py-0.5",
        "mr-1",
        "text-xs",
        "font-medium"
    );
    match color {
        TagColor::Grey => classes!(base, "border-slate-300", "bg-slate-100", "text-slate-600"),
        TagColor::Green => {
            classes!(base, "border-emerald-300", "bg-emerald-50", "text-emerald-700")
        },
        TagColor::Red => classes!(base, "border-red-300", "bg-red-50", "text-red-700"),
        TagColor::Orange => classes!(base, "border-orange-300", "bg-orange-50", "text-orange-700"),
    }
}

#[function_component(StatusTags)]
pub fn status_tags(props: &StatusTagsProps) -> Html {
    html! {
        <span>
            { for props.tags.iter().map(|tag| html! {
                <span key={tag.label()} class={tag_class(tag.color())} data-color={tag.color().css()}>
                    { tag.label() }
                </span>
            }) }
        </span>
    }
}
