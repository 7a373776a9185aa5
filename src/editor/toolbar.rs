//! Title bar (menus, RTL toggle, page setup) and the ribbon toolbar.

use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Menu, MenuBar, MenuItem, MenuSeparator, Tooltip,
    TooltipContent,
};
use crate::editor::PaginationController;
use crate::export::{download_html, download_txt, print_document};
use crate::state::{EditorContext, FIT_WIDTH_ZOOM};
use icons::{
    AlignCenter, AlignJustify, AlignLeft, AlignRight, Bold, CircleHelp, Eraser, FileText,
    Heading1, Heading2, Heading3, Image as ImageIcon, Italic, Link as LinkIcon, List, ListOrdered,
    Redo, Scissors, Search, Settings, Strikethrough, Underline, Undo,
};
use leptos::prelude::*;

/// Font families offered by the toolbar, label to CSS family.
pub(crate) const FONTS: [(&str, &str); 10] = [
    ("Arial", "Arial"),
    ("Times New Roman", "Times New Roman"),
    ("Jameel Noori Nastaleeq (Urdu)", "Jameel Noori Nastaleeq"),
    ("Noto Nastaliq Urdu (Urdu)", "Noto Nastaliq Urdu"),
    ("Amiri (Arabic/Urdu)", "Amiri"),
    ("Lateef (Sindhi/Urdu)", "Lateef"),
    ("Scheherazade New (Arabic)", "Scheherazade New"),
    ("Noto Naskh Arabic", "Noto Naskh Arabic"),
    ("Calibri", "Calibri"),
    ("Courier New", "Courier New"),
];

/// Point-size labels mapped to the legacy 1-7 `fontSize` scale.
pub(crate) const FONT_SIZES: [(&str, &str); 7] = [
    ("8", "1"),
    ("10", "2"),
    ("12", "3"),
    ("14", "4"),
    ("18", "5"),
    ("24", "6"),
    ("36", "7"),
];

#[component]
pub(crate) fn TitleBar() -> impl IntoView {
    let EditorContext(state) = expect_context::<EditorContext>();
    let ctl = expect_context::<PaginationController>();

    let pages = move || state.pages.get_untracked();

    view! {
        <div class="bg-[#2b579a] text-white flex justify-between items-center px-4 py-1.5 shrink-0 z-50 shadow-md">
            <div class="flex items-center gap-4">
                <div class="flex items-center gap-2">
                    <div class="bg-white p-1 rounded-sm [&_svg]:size-4 [&_svg]:text-[#2b579a]">
                        <FileText />
                    </div>
                    <span class="font-semibold tracking-wide">"Qalam Editor"</span>
                </div>

                <MenuBar class="ml-4">
                    <Menu label="File">
                        <MenuItem on_select=move |_| ctl.clear_document()>"New"</MenuItem>
                        <MenuSeparator />
                        <MenuItem
                            on_select=move |_| download_html(&pages())
                            shortcut="Ctrl+S"
                        >
                            "Save (HTML)"
                        </MenuItem>
                        <MenuItem on_select=move |_| download_txt(&pages())>"Export (TXT)"</MenuItem>
                        <MenuItem on_select=move |_| print_document() shortcut="Ctrl+P">
                            "Print"
                        </MenuItem>
                    </Menu>
                    <Menu label="Edit">
                        <MenuItem on_select=move |_| ctl.exec("undo") shortcut="Ctrl+Z">
                            "Undo"
                        </MenuItem>
                        <MenuItem on_select=move |_| ctl.exec("redo") shortcut="Ctrl+Y">
                            "Redo"
                        </MenuItem>
                        <MenuSeparator />
                        <MenuItem on_select=move |_| ctl.exec("cut") shortcut="Ctrl+X">
                            "Cut"
                        </MenuItem>
                        <MenuItem on_select=move |_| ctl.exec("copy") shortcut="Ctrl+C">
                            "Copy"
                        </MenuItem>
                    </Menu>
                    <Menu label="Insert">
                        <MenuItem on_select=move |_| ctl.insert_page_break() shortcut="Ctrl+Enter">
                            "Page Break"
                        </MenuItem>
                        <MenuItem on_select=move |_| ctl.insert_image()>"Image"</MenuItem>
                        <MenuItem on_select=move |_| ctl.insert_link()>"Link"</MenuItem>
                    </Menu>
                    <Menu label="View">
                        <MenuItem on_select=move |_| state.zoom_in()>"Zoom In"</MenuItem>
                        <MenuItem on_select=move |_| state.zoom_out()>"Zoom Out"</MenuItem>
                        <MenuItem on_select=move |_| state.zoom.set(FIT_WIDTH_ZOOM)>
                            "Fit Width"
                        </MenuItem>
                        <MenuSeparator />
                        <MenuItem on_select=move |_| state.toggle_sidebar()>"Navigation Pane"</MenuItem>
                    </Menu>
                </MenuBar>
            </div>

            <div class="flex items-center gap-3">
                // Decorative; searching the document is not wired up.
                <div class="bg-white/20 rounded px-2 py-1 flex items-center min-w-[200px] [&_svg]:size-3.5 [&_svg]:text-white/70">
                    <Search />
                    <input
                        type="text"
                        placeholder="Search"
                        class="bg-transparent border-none outline-none text-white text-xs w-full ml-2 placeholder-white/60"
                    />
                </div>

                <button
                    class=move || {
                        if state.rtl.get() {
                            "text-xs px-2 py-0.5 rounded border bg-white text-blue-800"
                        } else {
                            "text-xs px-2 py-0.5 rounded border border-white/50"
                        }
                    }
                    on:click=move |_| state.rtl.update(|rtl| *rtl = !*rtl)
                >
                    {move || if state.rtl.get() { "URDU (RTL)" } else { "ENG (LTR)" }}
                </button>

                <Button
                    variant=ButtonVariant::TitleBar
                    size=ButtonSize::Sm
                    on:click=move |_| state.page_setup_open.set(true)
                >
                    <Settings />
                    "Setup"
                </Button>

                <span class="[&_svg]:size-[18px] text-white/80">
                    <CircleHelp />
                </span>
            </div>
        </div>
    }
}

#[component]
pub(crate) fn Toolbar() -> impl IntoView {
    let EditorContext(state) = expect_context::<EditorContext>();
    let ctl = expect_context::<PaginationController>();

    view! {
        <div class="bg-white border-b border-[#ced4da] py-2 px-4 shadow-sm shrink-0 z-40 flex items-center gap-2 overflow-x-auto whitespace-nowrap custom-scrollbar h-[50px]">
            <div class="flex items-center gap-1 border-r border-[#ced4da] pr-2">
                <ToolbarButton command="undo" label="Undo">
                    <Undo />
                </ToolbarButton>
                <ToolbarButton command="redo" label="Redo">
                    <Redo />
                </ToolbarButton>
            </div>

            <div class="flex items-center gap-2 border-r border-[#ced4da] pr-2">
                <select
                    class="w-40 h-7 border border-[#ced4da] rounded-sm text-xs px-1 outline-none focus:border-blue-400 cursor-pointer"
                    prop:value=move || state.font_name.get()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.font_name.set(value.clone());
                        ctl.exec_with_value("fontName", &value);
                    }
                >
                    {FONTS
                        .iter()
                        .map(|(label, value)| {
                            view! { <option value=*value>{*label}</option> }
                        })
                        .collect_view()}
                </select>

                <select
                    class="w-14 h-7 border border-[#ced4da] rounded-sm text-xs px-1 outline-none focus:border-blue-400 cursor-pointer"
                    prop:value=move || state.font_size.get()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.font_size.set(value.clone());
                        ctl.exec_with_value("fontSize", &value);
                    }
                >
                    {FONT_SIZES
                        .iter()
                        .map(|(label, value)| {
                            view! { <option value=*value>{*label}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="flex items-center gap-0.5 border-r border-[#ced4da] pr-2">
                <ToolbarButton command="bold" label="Bold" tracked=true>
                    <Bold />
                </ToolbarButton>
                <ToolbarButton command="italic" label="Italic" tracked=true>
                    <Italic />
                </ToolbarButton>
                <ToolbarButton command="underline" label="Underline" tracked=true>
                    <Underline />
                </ToolbarButton>
                <ToolbarButton command="strikeThrough" label="Strike" tracked=true>
                    <Strikethrough />
                </ToolbarButton>
                <ToolbarButton command="removeFormat" label="Clear">
                    <Eraser />
                </ToolbarButton>
            </div>

            <div class="flex items-center gap-0.5 border-r border-[#ced4da] pr-2">
                <HeadingButton tag="H1" label="H1">
                    <Heading1 />
                </HeadingButton>
                <HeadingButton tag="H2" label="H2">
                    <Heading2 />
                </HeadingButton>
                <HeadingButton tag="H3" label="H3">
                    <Heading3 />
                </HeadingButton>
            </div>

            <div class="flex items-center gap-0.5 border-r border-[#ced4da] pr-2">
                <ToolbarButton command="insertUnorderedList" label="Bullets" tracked=true>
                    <List />
                </ToolbarButton>
                <ToolbarButton command="insertOrderedList" label="Numbering" tracked=true>
                    <ListOrdered />
                </ToolbarButton>
                <div class="mx-1 h-5 w-px bg-[#ced4da]"></div>
                <ToolbarButton command="justifyLeft" label="Left" tracked=true>
                    <AlignLeft />
                </ToolbarButton>
                <ToolbarButton command="justifyCenter" label="Center" tracked=true>
                    <AlignCenter />
                </ToolbarButton>
                <ToolbarButton command="justifyRight" label="Right" tracked=true>
                    <AlignRight />
                </ToolbarButton>
                <ToolbarButton command="justifyFull" label="Justify" tracked=true>
                    <AlignJustify />
                </ToolbarButton>
            </div>

            <div class="flex items-center gap-1">
                <Tooltip>
                    <Button
                        variant=ButtonVariant::Toolbar
                        size=ButtonSize::Icon
                        on:click=move |_| ctl.insert_image()
                    >
                        <ImageIcon />
                    </Button>
                    <TooltipContent>"Picture"</TooltipContent>
                </Tooltip>
                <Tooltip>
                    <Button
                        variant=ButtonVariant::Toolbar
                        size=ButtonSize::Icon
                        on:click=move |_| ctl.insert_link()
                    >
                        <LinkIcon />
                    </Button>
                    <TooltipContent>"Link"</TooltipContent>
                </Tooltip>
                <Tooltip>
                    <Button
                        variant=ButtonVariant::Toolbar
                        size=ButtonSize::Icon
                        on:click=move |_| ctl.insert_page_break()
                    >
                        <Scissors />
                    </Button>
                    <TooltipContent>"Page Break"</TooltipContent>
                </Tooltip>
            </div>
        </div>
    }
}

/// One ribbon button running an `execCommand`. `tracked` buttons light up
/// when `queryCommandState` reports the format active at the caret.
#[component]
fn ToolbarButton(
    #[prop(into)] command: String,
    #[prop(into)] label: String,
    #[prop(optional)] tracked: bool,
    children: Children,
) -> impl IntoView {
    let EditorContext(state) = expect_context::<EditorContext>();
    let ctl = expect_context::<PaginationController>();

    let cmd = StoredValue::new(command);
    let is_active = move || {
        tracked
            && state
                .active_formats
                .with(|formats| cmd.with_value(|c| formats.iter().any(|f| f == c)))
    };

    view! {
        <Tooltip>
            <Button
                variant=ButtonVariant::Toolbar
                size=ButtonSize::Icon
                attr:data-active=move || is_active().to_string()
                on:click=move |_| cmd.with_value(|c| ctl.exec(c))
            >
                {children()}
            </Button>
            <TooltipContent>{label}</TooltipContent>
        </Tooltip>
    }
}

#[component]
fn HeadingButton(
    #[prop(into)] tag: String,
    #[prop(into)] label: String,
    children: Children,
) -> impl IntoView {
    let ctl = expect_context::<PaginationController>();
    let tag = StoredValue::new(tag);

    view! {
        <Tooltip>
            <Button
                variant=ButtonVariant::Toolbar
                size=ButtonSize::Icon
                on:click=move |_| tag.with_value(|t| ctl.exec_with_value("formatBlock", t))
            >
                {children()}
            </Button>
            <TooltipContent>{label}</TooltipContent>
        </Tooltip>
    }
}
