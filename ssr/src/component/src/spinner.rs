use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex justify-center py-12">
            <div class="animate-spin h-8 w-8 border-t-2 border-pink-500 rounded-full"></div>
        </div>
    }
}
