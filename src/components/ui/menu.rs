use leptos::prelude::*;
use leptos_ui::{clx, void};

mod components {
    use super::*;
    clx! {MenuBar, nav, "flex items-center gap-0.5"}
    void! {MenuSeparator, li, "my-1 h-px bg-gray-200"}
}

pub use components::*;

/// One title-bar menu (File, Edit, ...). The dropdown opens on hover,
/// pure CSS through the menu group.
#[component]
pub fn Menu(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <div data-name="Menu" class="relative group/menu">
            <button class="px-2 py-0.5 rounded-sm text-xs text-white/90 hover:bg-white/10 select-none">
                {label}
            </button>
            <ul
                data-name="MenuContent"
                class="absolute left-0 top-full mt-0.5 min-w-[190px] rounded-md border border-gray-200 bg-white py-1 shadow-lg z-[100] invisible opacity-0 -translate-y-1 transition-all duration-150 ease-out group-hover/menu:visible group-hover/menu:opacity-100 group-hover/menu:translate-y-0"
            >
                {children()}
            </ul>
        </div>
    }
}

#[component]
pub fn MenuItem(
    children: Children,
    #[prop(into)] on_select: Callback<()>,
    /// Shortcut label on the right edge; display only.
    #[prop(into, optional)] shortcut: String,
) -> impl IntoView {
    view! {
        <li data-name="MenuItem">
            <button
                class="flex w-full items-center justify-between gap-6 px-3 py-1.5 text-xs text-gray-700 hover:bg-gray-100 [&_svg]:size-3.5"
                on:click=move |_| on_select.run(())
            >
                <span class="inline-flex items-center gap-2">{children()}</span>
                <span class="text-[10px] text-gray-400">{shortcut}</span>
            </button>
        </li>
    }
}
