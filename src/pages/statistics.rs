use web_sys::{Event, InputEvent};
use yew::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::table::{ColumnDef, DataTable};
use crate::format::{format_with_commas, format_won};
use crate::list::{use_page_query, ListQuery, SortState, DEFAULT_PAGE_SIZE};
use crate::models::StatisticsRow;

#[derive(Clone, PartialEq, Default)]
struct Filters {
    start_date: String,
    end_date: String,
    merchant_code: String,
    category_code: String,
    brand_code: String,
    group_by: String,
}

#[function_component(StatisticsPage)]
pub fn statistics_page() -> Html {
    let page = use_state(|| 1u32);
    let draft = use_state(Filters::default);
    // filters only take effect on search click
    let applied = use_state(Filters::default);
    let sort = use_state(|| None::<SortState>);

    let query = {
        let filters = (*applied).clone();
        let mut query = ListQuery::new(*page, DEFAULT_PAGE_SIZE);
        query.start_date = Some(filters.start_date);
        query.end_date = Some(filters.end_date);
        query.merchant_code = Some(filters.merchant_code);
        query.category_code = Some(filters.category_code);
        query.brand_code = Some(filters.brand_code);
        query.group_by = Some(filters.group_by);
        query.sort = *sort;
        query
    };
    let state = use_page_query::<StatisticsRow>("/api/statistics", query, 0);

    let text_input = |apply: fn(&mut Filters, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };

    let on_group_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.group_by = select.value();
            draft.set(next);
        })
    };

    let on_search = {
        let draft = draft.clone();
        let applied = applied.clone();
        let page = page.clone();
        Callback::from(move |_| {
            applied.set((*draft).clone());
            page.set(1);
        })
    };

    // sorting runs server-side; a new order restarts at page one
    let on_sort = {
        let sort = sort.clone();
        let page = page.clone();
        Callback::from(move |key: &'static str| {
            sort.set(Some(SortState::toggled(*sort, key)));
            page.set(1);
        })
    };

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    let columns = vec![
        ColumnDef::plain("Merchant code"),
        ColumnDef::plain("Merchant"),
        ColumnDef::sortable("Period", "paymentDate"),
        ColumnDef::sortable("Transactions", "transactionCount"),
        ColumnDef::sortable("Total amount", "totalAmount"),
    ];

    let render_row = Callback::from(|(idx, row): (usize, StatisticsRow)| {
        html! {
            <tr key={format!("{}-{}-{idx}", row.merchant_code, row.payment_date)} class="hover:bg-pink-50">
                <td class="px-6 py-4 font-mono">{ row.merchant_code.clone() }</td>
                <td class="px-6 py-4 font-semibold">{ row.merchant_name.clone() }</td>
                <td class="px-6 py-4">{ row.payment_date.clone() }</td>
                <td class="px-6 py-4 text-right font-mono">{ format_with_commas(row.transaction_count) }</td>
                <td class="px-6 py-4 text-right font-mono">{ format_won(row.total_amount) }</td>
            </tr>
        }
    });

    let page_transactions: i64 = state.rows.iter().map(|r| r.transaction_count).sum();
    let page_amount: i64 = state.rows.iter().map(|r| r.total_amount).sum();

    html! {
        <div class="w-full flex flex-col gap-5">
            <h2 class="text-2xl font-bold text-white self-start">{"Statistics"}</h2>

            <div class="flex flex-wrap items-end gap-4 self-start">
                <div class="flex flex-col gap-1">
                    <label class="text-white text-xs font-semibold">{"From"}</label>
                    <input
                        type="date"
                        class="px-3 py-2 rounded-md border border-gray-300 text-sm text-gray-700"
                        value={draft.start_date.clone()}
                        oninput={text_input(|f, v| f.start_date = v)}
                    />
                </div>
                <div class="flex flex-col gap-1">
                    <label class="text-white text-xs font-semibold">{"To"}</label>
                    <input
                        type="date"
                        class="px-3 py-2 rounded-md border border-gray-300 text-sm text-gray-700"
                        value={draft.end_date.clone()}
                        oninput={text_input(|f, v| f.end_date = v)}
                    />
                </div>
                <div class="flex flex-col gap-1">
                    <label class="text-white text-xs font-semibold">{"Merchant code"}</label>
                    <input
                        type="text"
                        class="px-3 py-2 rounded-md border border-gray-300 text-sm text-gray-700 w-40"
                        placeholder="All merchants"
                        value={draft.merchant_code.clone()}
                        oninput={text_input(|f, v| f.merchant_code = v)}
                    />
                </div>
                <div class="flex flex-col gap-1">
                    <label class="text-white text-xs font-semibold">{"Category code"}</label>
                    <input
                        type="text"
                        class="px-3 py-2 rounded-md border border-gray-300 text-sm text-gray-700 w-32"
                        placeholder="All"
                        value={draft.category_code.clone()}
                        oninput={text_input(|f, v| f.category_code = v)}
                    />
                </div>
                <div class="flex flex-col gap-1">
                    <label class="text-white text-xs font-semibold">{"Brand code"}</label>
                    <input
                        type="text"
                        class="px-3 py-2 rounded-md border border-gray-300 text-sm text-gray-700 w-32"
                        placeholder="All"
                        value={draft.brand_code.clone()}
                        oninput={text_input(|f, v| f.brand_code = v)}
                    />
                </div>
                <div class="flex flex-col gap-1">
                    <label class="text-white text-xs font-semibold">{"Group by"}</label>
                    <select
                        class="px-3 py-2 rounded-md border border-gray-300 text-sm text-gray-700 bg-white"
                        onchange={on_group_change}
                    >
                        <option value="" selected={draft.group_by.is_empty()}>{"Day"}</option>
                        <option value="month" selected={draft.group_by == "month"}>{"Month"}</option>
                        <option value="merchant" selected={draft.group_by == "merchant"}>{"Merchant"}</option>
                    </select>
                </div>
                <button
                    onclick={on_search}
                    class="bg-white text-gray-700 px-6 py-2 rounded-md font-semibold shadow hover:bg-gray-100 transition text-sm"
                >
                    {"Search"}
                </button>
            </div>

            { if let Some(message) = &state.error {
                html! { <p class="text-white bg-red-500/60 rounded-lg px-4 py-2 self-start">{ message.clone() }</p> }
            } else {
                html! {}
            }}

            <DataTable<StatisticsRow>
                columns={columns}
                rows={state.rows.clone()}
                render_row={render_row}
                loading={state.loading}
                empty_message="No statistics for these filters."
                sort={*sort}
                on_sort={on_sort}
            />

            { if !state.rows.is_empty() {
                html! {
                    <div class="self-end text-white text-sm font-semibold flex gap-8">
                        <span>{ format!("Page transactions: {}", format_with_commas(page_transactions)) }</span>
                        <span>{ format!("Page total: {}", format_won(page_amount)) }</span>
                    </div>
                }
            } else {
                html! {}
            }}

            <Pagination
                current_page={state.page}
                total_pages={state.total_pages}
                on_change={on_page_change}
            />
        </div>
    }
}
