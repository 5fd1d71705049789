use leptos::prelude::*;

use super::types::RankingEntry;

#[component]
pub fn RankingsTable(entries: Vec<RankingEntry>) -> impl IntoView {
    view! {
        <div class="w-full overflow-x-auto">
            <table class="w-full">
                <thead>
                    <tr class="border-b border-neutral-800">
                        <th class="text-left py-3 px-4">
                            <span class="text-neutral-400">"#"</span>
                        </th>
                        <th class="text-left py-3 px-4">
                            <span class="text-neutral-400">"Wrestler"</span>
                        </th>
                        <th class="text-right py-3 px-4">
                            <span class="text-neutral-400">"Elo"</span>
                        </th>
                    </tr>
                </thead>
                <tbody>
                    {entries
                        .into_iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            view! { <RankingRow rank={i + 1} entry /> }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn RankingRow(rank: usize, entry: RankingEntry) -> impl IntoView {
    let href = entry.profile_href();
    let score = entry.display_score();

    view! {
        <tr class="border-b border-neutral-800 hover:bg-neutral-900/50 transition-colors">
            <td class="py-4 px-4">
                <span class="text-lg text-white">{rank}</span>
            </td>
            <td class="py-4 px-4">
                <a href=href class="text-white font-medium hover:underline">
                    {entry.name}
                </a>
            </td>
            <td class="py-4 px-4 text-right">
                <span class="text-white font-semibold">{score}</span>
            </td>
        </tr>
    }
}
