use component::rankings::api::fetch_top_rankings;
use component::rankings::table::RankingsTable;
use component::spinner::Spinner;
use component::title::TitleText;
use consts::limits::TOP_RANKINGS_LIMIT;
use leptos::prelude::*;

#[component]
pub fn RankingsPage() -> impl IntoView {
    // One request per mount; the response order is the rank order.
    let rankings =
        LocalResource::new(move || async move { fetch_top_rankings(TOP_RANKINGS_LIMIT).await });

    view! {
        <div class="min-h-screen bg-black text-white">
            <TitleText>
                <span class="text-xl font-bold">"Top 50 WWE Elo Rankings"</span>
            </TitleText>

            <div class="container mx-auto px-4 py-6 max-w-4xl">
                <Suspense fallback=move || {
                    view! { <Spinner /> }
                }>
                    {move || match rankings.get() {
                        Some(Ok(entries)) => view! { <RankingsTable entries /> }.into_any(),
                        Some(Err(e)) => {
                            view! {
                                <div class="text-center py-12 text-red-400">{e.to_string()}</div>
                            }
                                .into_any()
                        }
                        None => view! { <Spinner /> }.into_any(),
                    }}
                </Suspense>
            </div>
        </div>
    }
}
