use leptos::prelude::*;

#[component]
pub fn TitleText(children: Children) -> impl IntoView {
    view! {
        <div class="sticky top-0 z-50 bg-black border-b border-white/10">
            <div class="flex items-center justify-between w-full px-4 py-4">{children()}</div>
        </div>
    }
}
