use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

#[component]
pub fn FieldLabel(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let merged_class = tw_merge!("block text-xs font-medium text-gray-600 mb-1", class);
    view! { <label class=merged_class>{children()}</label> }
}

/// Numeric form input.
///
/// NOTE: manual two-way wiring instead of `bind:value`; Leptos binding
/// macros have shifted across versions and this stays stable for wasm32
/// builds. Unparseable input coerces to zero, which is what the page
/// setup dialog expects from margin fields.
#[component]
pub fn NumberInput(
    #[prop(into, optional)] class: String,
    #[prop(default = 0.1)] step: f64,
    #[prop(into)] bind_value: RwSignal<f64>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "w-full rounded border border-gray-300 px-2 py-1 text-sm focus:border-blue-500 focus:outline-none",
        class
    );

    let on_input = move |ev: web_sys::Event| {
        if let Some(target) = ev.target() {
            if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
                bind_value.set(input.value().parse::<f64>().unwrap_or(0.0));
            }
        }
    };

    view! {
        <input
            data-name="NumberInput"
            type="number"
            step=step
            class=merged_class
            prop:value=move || bind_value.get().to_string()
            on:input=on_input
        />
    }
}

/// Color swatch input for the page background.
#[component]
pub fn ColorInput(
    #[prop(into, optional)] class: String,
    #[prop(into)] bind_value: RwSignal<String>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "h-8 w-full cursor-pointer rounded border border-gray-300 p-0.5",
        class
    );

    let on_input = move |ev: web_sys::Event| {
        if let Some(target) = ev.target() {
            if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
                bind_value.set(input.value());
            }
        }
    };

    view! {
        <input
            data-name="ColorInput"
            type="color"
            class=merged_class
            prop:value=move || bind_value.get()
            on:input=on_input
        />
    }
}
