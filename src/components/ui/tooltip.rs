use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::tw_merge;

clx! {Tooltip, div, "relative inline-flex group/tip"}

/// Hover label under a toolbar control. Pure CSS via group-hover, no
/// positioning script.
#[component]
pub fn TooltipContent(
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "absolute top-full left-1/2 -translate-x-1/2 mt-1.5 px-1.5 py-0.5 rounded-sm bg-gray-900 text-white text-[10px] whitespace-nowrap z-50",
        "opacity-0 pointer-events-none transition-opacity duration-150 group-hover/tip:opacity-100",
        class
    );

    view! {
        <div data-name="TooltipContent" class=merged_class>
            {children()}
        </div>
    }
}
