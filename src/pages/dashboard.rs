use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::format::{format_with_commas, format_won};
use crate::models::DashboardData;

#[derive(Properties, PartialEq)]
struct StatCardProps {
    label: &'static str,
    value: String,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white rounded-2xl shadow-lg px-6 py-5 flex flex-col gap-1">
            <span class="text-xs uppercase tracking-widest text-gray-400">{ props.label }</span>
            <span class="text-2xl font-bold text-gray-800">{ props.value.clone() }</span>
        </div>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let data = use_state(|| None::<DashboardData>);
    let error = use_state(|| None::<String>);

    {
        let data = data.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::get_json::<DashboardData>("/api/v1/dashboard").await {
                        Ok(fetched) => data.set(Some(fetched)),
                        Err(ApiError::Unauthorized) => {}
                        Err(err) => error.set(Some(err.to_string())),
                    }
                });
                || ()
            },
            (),
        );
    }

    let body = match (&*data, &*error) {
        (_, Some(message)) => html! {
            <p class="text-white bg-red-500/60 rounded-lg px-4 py-3">{ message.clone() }</p>
        },
        (None, None) => html! {
            <p class="text-white/80 py-10">{"Loading..."}</p>
        },
        (Some(data), None) => {
            let category_total: i64 = data.category_ratio.iter().map(|c| c.value).sum();
            html! {
                <div class="flex flex-col gap-8 w-full">
                    <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                        <StatCard label="Members" value={format_with_commas(data.total_members)} />
                        <StatCard label="Merchants" value={format_with_commas(data.total_merchants)} />
                        <StatCard label="API requests" value={format_with_commas(data.total_api_requests)} />
                        <StatCard label="Transactions" value={format_with_commas(data.total_transactions)} />
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                        <div class="bg-white rounded-2xl shadow-lg p-6">
                            <h3 class="font-bold text-gray-800 mb-4">{"Daily volume"}</h3>
                            <table class="w-full text-sm text-gray-700">
                                <tbody class="divide-y divide-gray-100">
                                    { for data.daily_transactions.iter().map(|day| html! {
                                        <tr key={day.date.clone()}>
                                            <td class="py-2">{ day.date.clone() }</td>
                                            <td class="py-2 text-right font-mono">{ format_won(day.amount) }</td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        </div>

                        <div class="bg-white rounded-2xl shadow-lg p-6">
                            <h3 class="font-bold text-gray-800 mb-4">{"Monthly volume"}</h3>
                            <table class="w-full text-sm text-gray-700">
                                <tbody class="divide-y divide-gray-100">
                                    { for data.monthly_transactions.iter().map(|month| html! {
                                        <tr key={month.month.clone()}>
                                            <td class="py-2">{ month.month.clone() }</td>
                                            <td class="py-2 text-right font-mono">{ format_won(month.amount) }</td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        </div>

                        <div class="bg-white rounded-2xl shadow-lg p-6">
                            <h3 class="font-bold text-gray-800 mb-4">{"Category share"}</h3>
                            <table class="w-full text-sm text-gray-700">
                                <tbody class="divide-y divide-gray-100">
                                    { for data.category_ratio.iter().map(|category| {
                                        let percent = if category_total > 0 {
                                            category.value as f64 * 100.0 / category_total as f64
                                        } else {
                                            0.0
                                        };
                                        html! {
                                            <tr key={category.name.clone()}>
                                                <td class="py-2">{ category.name.clone() }</td>
                                                <td class="py-2 text-right font-mono">{ format!("{percent:.1}%") }</td>
                                            </tr>
                                        }
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            }
        }
    };

    html! {
        <div class="w-full flex flex-col items-start gap-6">
            <h2 class="text-2xl font-bold text-white">{"Dashboard"}</h2>
            { body }
        </div>
    }
}
