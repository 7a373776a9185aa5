//! Heading outline sidebar. Entries come from the engine's document-wide
//! heading scan; clicking one navigates to and flashes the heading.

use crate::editor::PaginationController;
use crate::state::EditorContext;
use icons::X;
use leptos::prelude::*;

#[component]
pub(crate) fn OutlineSidebar() -> impl IntoView {
    let EditorContext(state) = expect_context::<EditorContext>();
    let ctl = expect_context::<PaginationController>();

    view! {
        <div class="w-[240px] bg-white border-r border-[#ced4da] flex flex-col shrink-0">
            <div class="p-3 bg-[#f8f9fa] border-b border-[#ced4da] flex justify-between items-center">
                <span class="font-semibold text-gray-600 text-xs uppercase tracking-wider">
                    "Navigation"
                </span>
                <button
                    class="text-gray-400 hover:text-gray-600 [&_svg]:size-3.5"
                    on:click=move |_| state.toggle_sidebar()
                >
                    <X />
                </button>
            </div>

            <div class="flex-1 overflow-y-auto p-2 space-y-1 custom-scrollbar">
                {move || {
                    let headings = state.headings.get();
                    if headings.is_empty() {
                        view! {
                            <div class="text-gray-400 text-xs text-center mt-10 italic px-4">
                                "Add Headings (H1, H2, H3) to see them here."
                            </div>
                        }
                            .into_any()
                    } else {
                        headings
                            .into_iter()
                            .map(|entry| {
                                let class = if entry.level == 0 {
                                    "p-2 text-sm cursor-pointer truncate rounded-sm transition-colors font-semibold text-gray-800 hover:bg-[#e8eff7] hover:text-[#2b579a]"
                                } else {
                                    "p-2 text-sm cursor-pointer truncate rounded-sm transition-colors text-gray-600 hover:bg-[#e8eff7] hover:text-[#2b579a]"
                                };
                                let indent = format!(
                                    "padding-left:{}px",
                                    entry.level as usize * 12 + 8,
                                );
                                let label = if entry.text.is_empty() {
                                    "(Empty Heading)".to_string()
                                } else {
                                    entry.text.clone()
                                };
                                view! {
                                    <div
                                        class=class
                                        style=indent
                                        on:click=move |_| ctl.go_to_heading(&entry)
                                    >
                                        {label}
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
