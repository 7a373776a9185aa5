//! Horizontal centimeter ruler above each page. Tick count follows the
//! page width; the whole strip scales with the zoom factor.

use crate::engine::PX_PER_CM;
use crate::state::EditorContext;
use leptos::prelude::*;

#[component]
pub(crate) fn Ruler() -> impl IntoView {
    let EditorContext(state) = expect_context::<EditorContext>();

    let scaled_width = move || {
        let s = state.settings.get();
        s.page_width_px() * state.zoom.get() as f64 / 100.0
    };
    let total_cm = move || (state.settings.get().page_width_px() / PX_PER_CM) as usize;

    view! {
        <div
            class="sticky top-0 overflow-hidden rounded-t-lg border-b border-gray-300 bg-[#f3f2f1]"
            style=move || format!("width:{}px;height:26px;", scaled_width())
        >
            <div class="flex h-full w-full items-end justify-between px-2.5 text-[10px] text-gray-500 select-none">
                {move || {
                    let total = total_cm();
                    (0..=total)
                        .map(|cm| {
                            view! {
                                <div class="relative flex h-full flex-1 items-end justify-center">
                                    <span class="mb-0.5">{cm}</span>
                                    <div class="absolute bottom-0 h-2.5 w-px bg-gray-400"></div>
                                    {(cm != total)
                                        .then(|| {
                                            view! {
                                                <div class="absolute bottom-0 left-1/2 h-1.5 w-px -translate-x-1/2 bg-slate-300"></div>
                                            }
                                        })}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
