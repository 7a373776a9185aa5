//! Page setup dialog: paper size, orientation, margins, background.
//!
//! Edits are staged on local signals and only committed to the shared
//! [`PageSettings`] on OK. The new writable height applies to subsequent
//! pagination passes; nothing is re-flowed retroactively.

use crate::components::ui::{ColorInput, FieldLabel, NumberInput};
use crate::engine::{Margins, Orientation, PageSettings, PageSize};
use crate::state::EditorContext;
use icons::{Check, X};
use leptos::prelude::*;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[component]
pub(crate) fn PageSetupDialog() -> impl IntoView {
    let EditorContext(state) = expect_context::<EditorContext>();

    // Staged copies; the dialog is recreated on every open, so these
    // always seed from the live settings.
    let current = state.settings.get_untracked();
    let size = RwSignal::new(current.size);
    let orientation = RwSignal::new(current.orientation);
    let top = RwSignal::new(current.margins.top);
    let bottom = RwSignal::new(current.margins.bottom);
    let left = RwSignal::new(current.margins.left);
    let right = RwSignal::new(current.margins.right);
    let background = RwSignal::new(current.background);

    let close = move |_| state.page_setup_open.set(false);
    let save = move |_| {
        state.settings.set(PageSettings {
            size: size.get_untracked(),
            orientation: orientation.get_untracked(),
            margins: Margins {
                top: top.get_untracked(),
                right: right.get_untracked(),
                bottom: bottom.get_untracked(),
                left: left.get_untracked(),
            },
            background: background.get_untracked(),
        });
        state.page_setup_open.set(false);
    };

    view! {
        <div class="fixed inset-0 z-[100] flex items-center justify-center bg-black/50 backdrop-blur-sm">
            <div class="bg-white rounded-lg shadow-2xl w-[450px] overflow-hidden border border-gray-200">
                <div class="bg-[#2b579a] text-white px-4 py-3 flex justify-between items-center">
                    <span class="font-semibold text-sm">"Page Setup (صفحہ کی ترتیبات)"</span>
                    <button
                        class="hover:bg-white/20 rounded p-1 transition [&_svg]:size-4"
                        on:click=close
                    >
                        <X />
                    </button>
                </div>

                <div class="p-6 space-y-6 text-sm text-gray-700">
                    <div>
                        <FieldLabel class="font-bold uppercase text-gray-500 mb-2">
                            "Orientation (سمت)"
                        </FieldLabel>
                        <div class="flex gap-4">
                            <OrientationCard value=Orientation::Portrait selected=orientation>
                                <div class="w-6 h-8 border-2 border-current rounded-sm"></div>
                                <span>"Portrait (عمودی)"</span>
                            </OrientationCard>
                            <OrientationCard value=Orientation::Landscape selected=orientation>
                                <div class="w-8 h-6 border-2 border-current rounded-sm"></div>
                                <span>"Landscape (افقی)"</span>
                            </OrientationCard>
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <FieldLabel class="font-bold uppercase text-gray-500">
                                "Paper Size (سائز)"
                            </FieldLabel>
                            <select
                                class="w-full border border-gray-300 rounded p-2 outline-none focus:border-blue-500 focus:ring-1 focus:ring-blue-200"
                                prop:value=move || size.get().as_ref().to_string()
                                on:change=move |ev| {
                                    if let Ok(parsed) = PageSize::from_str(&event_target_value(&ev)) {
                                        size.set(parsed);
                                    }
                                }
                            >
                                {PageSize::iter()
                                    .map(|s| {
                                        view! { <option value=s.as_ref().to_string()>{s.label()}</option> }
                                    })
                                    .collect_view()}
                            </select>
                        </div>

                        <div>
                            <FieldLabel class="font-bold uppercase text-gray-500">
                                "Page Color (رنگ)"
                            </FieldLabel>
                            <div class="flex items-center gap-2">
                                <ColorInput class="w-16" bind_value=background />
                                <span class="text-gray-500 text-xs">
                                    {move || background.get()}
                                </span>
                            </div>
                        </div>
                    </div>

                    <div>
                        <FieldLabel class="font-bold uppercase text-gray-500 mb-2">
                            "Margins (cm) (حاشیہ)"
                        </FieldLabel>
                        <div class="grid grid-cols-2 gap-4">
                            <MarginField label="Top" bind_value=top />
                            <MarginField label="Bottom" bind_value=bottom />
                            <MarginField label="Left" bind_value=left />
                            <MarginField label="Right" bind_value=right />
                        </div>
                    </div>
                </div>

                <div class="bg-gray-50 px-4 py-3 border-t border-gray-200 flex justify-end gap-2">
                    <button
                        class="px-4 py-2 text-gray-600 hover:bg-gray-200 rounded text-sm font-medium transition"
                        on:click=close
                    >
                        "Cancel (منسوخ)"
                    </button>
                    <button
                        class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded text-sm font-medium flex items-center gap-2 transition shadow-sm [&_svg]:size-4"
                        on:click=save
                    >
                        <Check />
                        "OK (محفوظ کریں)"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn OrientationCard(
    value: Orientation,
    selected: RwSignal<Orientation>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        if selected.get() == value {
            "flex-1 border rounded p-3 flex flex-col items-center gap-2 cursor-pointer transition-all bg-blue-50 border-blue-500 text-blue-700 ring-1 ring-blue-500"
        } else {
            "flex-1 border rounded p-3 flex flex-col items-center gap-2 cursor-pointer transition-all hover:bg-gray-50"
        }
    };

    view! {
        <div class=class on:click=move |_| selected.set(value)>
            {children()}
        </div>
    }
}

#[component]
fn MarginField(#[prop(into)] label: String, bind_value: RwSignal<f64>) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <span class="w-14 text-gray-500 text-xs">{label}":"</span>
            <NumberInput class="flex-1 text-center" bind_value=bind_value />
        </div>
    }
}
