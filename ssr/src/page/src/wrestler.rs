use component::fetch_state::{FetchState, RequestGeneration};
use component::rankings::api::fetch_match_history;
use component::rankings::history::MatchHistoryTable;
use component::rankings::types::MatchRecord;
use component::spinner::Spinner;
use component::title::TitleText;
use consts::limits::MATCH_HISTORY_LIMIT;
use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[derive(Clone, Debug, PartialEq, Eq, Params)]
pub struct WrestlerParams {
    pub name: String,
}

#[component]
pub fn WrestlerPage() -> impl IntoView {
    let params = use_params::<WrestlerParams>();
    let wrestler_name =
        Memo::new(move |_| params.get().map(|p| p.name).unwrap_or_else(|_| String::new()));

    let (history, set_history) = signal(FetchState::<Vec<MatchRecord>>::Loading);
    let generation = StoredValue::new(RequestGeneration::default());

    // Refetches on every name change. The generation token makes sure a
    // response for a superseded name is never committed.
    Effect::new(move |_| {
        let name = wrestler_name.get();
        let mut token = 0;
        generation.update_value(|g| token = g.advance());
        set_history.set(FetchState::Loading);

        leptos::task::spawn_local(async move {
            let outcome = fetch_match_history(&name, MATCH_HISTORY_LIMIT).await;
            // the page may have been unmounted while the fetch was in
            // flight; a disposed generation counts as superseded
            let current = generation
                .try_with_value(|g| g.is_current(token))
                .unwrap_or(false);
            if current {
                set_history.try_set(outcome.into());
            } else {
                log::info!("discarding stale match history response for {name}");
            }
        });
    });

    view! {
        <div class="min-h-screen bg-black text-white">
            <TitleText>
                <div class="flex items-center justify-between w-full px-4">
                    <a href="/" class="p-2">
                        "← back"
                    </a>
                    <span class="text-xl font-bold">
                        {move || format!("{}'s Match History", wrestler_name.get())}
                    </span>
                    <div class="w-10"></div> // Spacer for centering
                </div>
            </TitleText>

            <div class="container mx-auto px-4 py-6 max-w-4xl">
                {move || match history.get() {
                    FetchState::Loading => view! { <Spinner /> }.into_any(),
                    FetchState::Failed(e) => {
                        view! { <div class="text-center py-12 text-red-400">{e}</div> }.into_any()
                    }
                    FetchState::Ready(records) => {
                        view! { <MatchHistoryTable viewer=wrestler_name.get() records /> }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
