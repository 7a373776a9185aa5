use crate::editor::DocumentEditor;
use crate::state::{EditorContext, EditorState};
use leptos::prelude::*;

/// The editor route. Owns the editor state for the session; the state
/// seeds itself from the autosaved document in local storage.
#[component]
pub fn EditorHome() -> impl IntoView {
    provide_context(EditorContext(EditorState::new()));

    view! { <DocumentEditor /> }
}
