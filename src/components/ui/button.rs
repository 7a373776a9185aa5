use leptos::prelude::*;
use leptos_ui::variants;

variants! {
    Button {
        base: "inline-flex items-center justify-center gap-1 whitespace-nowrap rounded text-sm transition-colors disabled:pointer-events-none disabled:opacity-40 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 outline-none hover:cursor-pointer select-none touch-manipulation [-webkit-tap-highlight-color:transparent]",
        variants: {
            variant: {
                Default: "bg-blue-700 text-white shadow-sm hover:bg-blue-800",
                // Toolbar buttons light up through data-active, set from queryCommandState.
                Toolbar: "bg-transparent text-gray-700 hover:bg-gray-200 data-[active=true]:bg-blue-100 data-[active=true]:text-blue-700",
                TitleBar: "bg-transparent text-white/90 hover:bg-white/10 rounded-sm",
                Ghost: "bg-transparent text-gray-600 hover:bg-gray-100",
                Outline: "border border-gray-300 bg-white text-gray-700 shadow-sm hover:bg-gray-50",
            },
            size: {
                Default: "h-8 px-3",
                Sm: "h-7 px-2 text-xs",
                Icon: "size-8",
                IconSm: "size-7",
            }
        },
        component: {
            element: button,
            support_href: true,
            support_aria_current: true
        }
    }
}
