use web_sys::InputEvent;
use yew::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::search::TableSearch;
use crate::components::table::{ColumnDef, DataTable};
use crate::format::format_won;
use crate::list::{self, use_page_query, ListQuery, SearchMode, DEFAULT_PAGE_SIZE};
use crate::models::{Transaction, TransactionStatus};

const SEARCH_MODE: SearchMode = SearchMode::PageLocal;

fn status_badge(status: TransactionStatus) -> Html {
    let class = match status {
        TransactionStatus::Success => "bg-green-100 text-green-700",
        TransactionStatus::Refunded => "bg-red-100 text-red-700",
        TransactionStatus::Pending => "bg-yellow-100 text-yellow-700",
    };
    html! {
        <span class={format!("px-2 py-1 rounded-full text-xs font-semibold {class}")}>
            { status.label() }
        </span>
    }
}

#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let page = use_state(|| 1u32);
    let start_date = use_state(String::new);
    let end_date = use_state(String::new);
    // date range is only applied on search click
    let applied_range = use_state(|| (String::new(), String::new()));
    let keyword = use_state(String::new);

    let query = {
        let (start, end) = (*applied_range).clone();
        let mut query = ListQuery::new(*page, DEFAULT_PAGE_SIZE);
        query.start_date = Some(start);
        query.end_date = Some(end);
        if SEARCH_MODE == SearchMode::ServerSide {
            query.keyword = Some((*keyword).clone());
        }
        query
    };
    let state = use_page_query::<Transaction>("/api/transactions", query, 0);

    let visible = match SEARCH_MODE {
        SearchMode::PageLocal => list::filter_rows(&state.rows, &keyword),
        SearchMode::ServerSide => state.rows.clone(),
    };

    let date_input = |value: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            value.set(input.value());
        })
    };

    let on_search = {
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        let applied_range = applied_range.clone();
        let page = page.clone();
        Callback::from(move |_| {
            applied_range.set(((*start_date).clone(), (*end_date).clone()));
            page.set(1);
        })
    };

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    let columns = vec![
        ColumnDef::plain("Transaction no."),
        ColumnDef::plain("Member"),
        ColumnDef::plain("Merchant"),
        ColumnDef::plain("Amount"),
        ColumnDef::plain("Payment date"),
        ColumnDef::plain("Status"),
        ColumnDef::plain("Original transaction"),
    ];

    let render_row = Callback::from(|(idx, tx): (usize, Transaction)| {
        html! {
            <tr key={format!("{}-{idx}", tx.transaction_num)} class="hover:bg-pink-50">
                <td class="px-6 py-4 font-mono">{ tx.transaction_num.clone() }</td>
                <td class="px-6 py-4">{ tx.member_code.clone() }</td>
                <td class="px-6 py-4">{ tx.merchant_code.clone() }</td>
                <td class="px-6 py-4 text-right font-mono">{ format_won(tx.amount_used) }</td>
                <td class="px-6 py-4">{ tx.payment_date.clone() }</td>
                <td class="px-6 py-4">{ status_badge(tx.status) }</td>
                <td class="px-6 py-4 font-mono text-gray-400">
                    { tx.original_transaction_num.clone().unwrap_or_else(|| "-".to_string()) }
                </td>
            </tr>
        }
    });

    html! {
        <div class="w-full flex flex-col gap-5">
            <h2 class="text-2xl font-bold text-white self-start">{"Transaction history"}</h2>

            <div class="flex flex-wrap items-end gap-4 self-start">
                <div class="flex flex-col gap-1">
                    <label class="text-white text-xs font-semibold">{"From"}</label>
                    <input
                        type="date"
                        class="px-3 py-2 rounded-md border border-gray-300 text-sm text-gray-700"
                        value={(*start_date).clone()}
                        oninput={date_input(start_date.clone())}
                    />
                </div>
                <div class="flex flex-col gap-1">
                    <label class="text-white text-xs font-semibold">{"To"}</label>
                    <input
                        type="date"
                        class="px-3 py-2 rounded-md border border-gray-300 text-sm text-gray-700"
                        value={(*end_date).clone()}
                        oninput={date_input(end_date.clone())}
                    />
                </div>
                <button
                    onclick={on_search}
                    class="bg-white text-gray-700 px-6 py-2 rounded-md font-semibold shadow hover:bg-gray-100 transition text-sm"
                >
                    {"Search"}
                </button>
                <TableSearch
                    value={(*keyword).clone()}
                    on_change={{
                        let keyword = keyword.clone();
                        Callback::from(move |value: String| keyword.set(value))
                    }}
                    placeholder="Filter this page"
                />
            </div>

            { if let Some(message) = &state.error {
                html! { <p class="text-white bg-red-500/60 rounded-lg px-4 py-2 self-start">{ message.clone() }</p> }
            } else {
                html! {}
            }}

            <DataTable<Transaction>
                columns={columns}
                rows={visible}
                render_row={render_row}
                loading={state.loading}
                empty_message="No transactions in this range."
            />

            <Pagination
                current_page={state.page}
                total_pages={state.total_pages}
                on_change={on_page_change}
            />
        </div>
    }
}
