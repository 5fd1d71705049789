use leptos::prelude::*;

use super::types::{opponents_display, MatchRecord, OpponentsDisplay};

#[component]
pub fn MatchHistoryTable(viewer: String, records: Vec<MatchRecord>) -> impl IntoView {
    view! {
        <div class="w-full overflow-x-auto">
            <table class="w-full">
                <thead>
                    <tr class="border-b border-neutral-800">
                        <th class="text-left py-3 px-4">
                            <span class="text-neutral-400">"Date"</span>
                        </th>
                        <th class="text-left py-3 px-4">
                            <span class="text-neutral-400">"Show"</span>
                        </th>
                        <th class="text-left py-3 px-4">
                            <span class="text-neutral-400">"Type"</span>
                        </th>
                        <th class="text-left py-3 px-4">
                            <span class="text-neutral-400">"Opponents"</span>
                        </th>
                        <th class="text-left py-3 px-4">
                            <span class="text-neutral-400">"Result"</span>
                        </th>
                    </tr>
                </thead>
                <tbody>
                    {records
                        .into_iter()
                        .map(|record| {
                            view! { <MatchHistoryRow viewer=viewer.clone() record /> }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn MatchHistoryRow(viewer: String, record: MatchRecord) -> impl IntoView {
    let type_label = record.type_label();
    let display = opponents_display(&viewer, &record);
    let MatchRecord {
        date, show, finish, ..
    } = record;

    view! {
        <tr class="border-b border-neutral-800 hover:bg-neutral-900/50 transition-colors">
            <td class="py-4 px-4 text-white">{date}</td>
            <td class="py-4 px-4 text-white">{show}</td>
            <td class="py-4 px-4 text-white">{type_label}</td>
            <td class="py-4 px-4 text-white">
                <OpponentsCell display />
            </td>
            <td class="py-4 px-4 text-white">{finish}</td>
        </tr>
    }
}

#[component]
fn OpponentsCell(display: OpponentsDisplay) -> impl IntoView {
    match display {
        OpponentsDisplay::Defeated { losers } => view! {
            <strong>"vs "{losers}</strong>
        }
        .into_any(),
        OpponentsDisplay::LostTo { winners, losers } => view! {
            <span>{winners}" vs "<strong>{losers}</strong></span>
        }
        .into_any(),
    }
}
