//! Live monitor for the downstream brand servers. The roster comes from the
//! backend once; every server with complete connection details is then
//! probed directly every ten seconds and the whole status list is replaced
//! atomically, so one cycle never shows a mix of old and new results.

use std::cell::Cell;
use std::rc::Rc;

use futures::future::join_all;
use gloo_net::http::Request;
use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::components::pagination::Pagination;
use crate::components::search::TableSearch;
use crate::components::table::{ColumnDef, DataTable};
use crate::list::{self, DEFAULT_PAGE_SIZE};
use crate::models::{HealthState, PageEnvelope, ServerInfo, ServerStatus};

pub const POLL_INTERVAL_MS: u32 = 10_000;

/// One backend draft wraps this endpoint in the usual page envelope, another
/// returns the bare list. Accept both.
async fn fetch_roster() -> Result<Vec<ServerInfo>, ApiError> {
    let raw = api::get_json::<serde_json::Value>("/api/servers").await?;
    if raw.is_array() {
        serde_json::from_value(raw).map_err(|err| ApiError::Decode(err.to_string()))
    } else {
        serde_json::from_value::<PageEnvelope<ServerInfo>>(raw)
            .map(|envelope| envelope.content)
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

fn now_ms() -> Option<f64> {
    Some(web_sys::window()?.performance()?.now())
}

/// `Some(true)` is a 2xx reply, `Some(false)` any other reply, `None` a
/// transport failure. A failed transport has no meaningful response time.
fn classify(reply_ok: Option<bool>, elapsed: Option<u32>) -> (HealthState, Option<u32>) {
    match reply_ok {
        Some(true) => (HealthState::Up, elapsed),
        Some(false) => (HealthState::Down, elapsed),
        None => (HealthState::Down, None),
    }
}

/// Probes one server's health endpoint without the bearer interceptor; the
/// brand servers are separate hosts with their own auth story, and a 401
/// from one of them must not end the admin session.
async fn probe_one(info: ServerInfo) -> ServerStatus {
    let Some(url) = info.health_url() else {
        return ServerStatus::unknown(info);
    };

    let started = now_ms();
    let result = Request::get(&url).send().await;
    let elapsed = match (started, now_ms()) {
        (Some(start), Some(end)) => Some((end - start).max(0.0) as u32),
        _ => None,
    };

    let (state, response_time_ms) = classify(result.map(|resp| resp.ok()).ok(), elapsed);
    ServerStatus {
        info,
        state,
        response_time_ms,
    }
}

async fn poll_round(roster: Vec<ServerInfo>) -> Vec<ServerStatus> {
    join_all(roster.into_iter().map(probe_one)).await
}

#[function_component(StatusPage)]
pub fn status_page() -> Html {
    let statuses = use_state(Vec::<ServerStatus>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let page = use_state(|| 1u32);
    let keyword = use_state(String::new);

    // the interval closure only ever sees this shared roster, not a state
    // snapshot frozen at mount time
    let roster = use_mut_ref(Vec::<ServerInfo>::new);

    {
        let statuses = statuses.clone();
        let loading = loading.clone();
        let error = error.clone();
        let roster = roster.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));

                {
                    let statuses = statuses.clone();
                    let loading = loading.clone();
                    let error = error.clone();
                    let roster = roster.clone();
                    let alive = alive.clone();
                    spawn_local(async move {
                        match fetch_roster().await {
                            Ok(list) => {
                                *roster.borrow_mut() = list.clone();
                                statuses.set(
                                    list.iter().cloned().map(ServerStatus::unknown).collect(),
                                );
                                loading.set(false);
                                // first probe right away instead of waiting a
                                // full interval
                                let round = poll_round(list).await;
                                if alive.get() {
                                    statuses.set(round);
                                }
                            }
                            Err(ApiError::Unauthorized) => {}
                            Err(err) => {
                                if alive.get() {
                                    error.set(Some(err.to_string()));
                                    loading.set(false);
                                }
                            }
                        }
                    });
                }

                let interval = {
                    let statuses = statuses.clone();
                    let roster = roster.clone();
                    let alive = alive.clone();
                    Interval::new(POLL_INTERVAL_MS, move || {
                        let snapshot = roster.borrow().clone();
                        if snapshot.is_empty() {
                            return;
                        }
                        let statuses = statuses.clone();
                        let alive = alive.clone();
                        spawn_local(async move {
                            let round = poll_round(snapshot).await;
                            if alive.get() {
                                statuses.set(round);
                            }
                        });
                    })
                };

                move || {
                    alive.set(false);
                    drop(interval);
                }
            },
            (),
        );
    }

    let filtered = list::filter_rows(&statuses, &keyword);
    let total_pages = list::client_total_pages(filtered.len(), DEFAULT_PAGE_SIZE as usize);
    let current = (*page).min(total_pages);
    let visible = list::client_page(&filtered, current, DEFAULT_PAGE_SIZE as usize);

    let up_count = statuses.iter().filter(|s| s.state == HealthState::Up).count();
    let down_count = statuses.iter().filter(|s| s.state == HealthState::Down).count();

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    let columns = vec![
        ColumnDef::plain("Brand code"),
        ColumnDef::plain("Brand"),
        ColumnDef::plain("Category"),
        ColumnDef::plain("Endpoint"),
        ColumnDef::plain("State"),
        ColumnDef::plain("Response time"),
    ];

    let render_row = Callback::from(|(_, status): (usize, ServerStatus)| {
        let badge = match status.state {
            HealthState::Up => html! {
                <span class="px-2 py-1 rounded-full text-xs font-semibold bg-green-100 text-green-700">{"UP"}</span>
            },
            HealthState::Down => html! {
                <span class="px-2 py-1 rounded-full text-xs font-semibold bg-red-100 text-red-700">{"DOWN"}</span>
            },
            HealthState::Unknown => html! {
                <span class="px-2 py-1 rounded-full text-xs font-semibold bg-gray-200 text-gray-600">{"UNKNOWN"}</span>
            },
        };
        let response_time = status
            .response_time_ms
            .map(|ms| format!("{ms} ms"))
            .unwrap_or_else(|| "-".to_string());
        html! {
            <tr key={status.info.brand_code.clone()} class="hover:bg-pink-50">
                <td class="px-6 py-4 font-mono">{ status.info.brand_code.clone() }</td>
                <td class="px-6 py-4 font-semibold">{ status.info.brand_name.clone() }</td>
                <td class="px-6 py-4">{ status.info.category_name.clone() }</td>
                <td class="px-6 py-4 font-mono text-xs text-gray-500">
                    { status.info.health_url().unwrap_or_else(|| "not configured".to_string()) }
                </td>
                <td class="px-6 py-4">{ badge }</td>
                <td class="px-6 py-4 text-right font-mono">{ response_time }</td>
            </tr>
        }
    });

    html! {
        <div class="w-full flex flex-col gap-5">
            <div class="flex items-center justify-between w-full">
                <h2 class="text-2xl font-bold text-white">{"Server monitor"}</h2>
                <div class="flex gap-4 text-sm font-semibold">
                    <span class="text-green-100 bg-green-600/60 rounded-full px-4 py-1">
                        { format!("{up_count} up") }
                    </span>
                    <span class="text-red-100 bg-red-600/60 rounded-full px-4 py-1">
                        { format!("{down_count} down") }
                    </span>
                </div>
            </div>

            <TableSearch
                value={(*keyword).clone()}
                on_change={{
                    let keyword = keyword.clone();
                    let page = page.clone();
                    Callback::from(move |value: String| {
                        keyword.set(value);
                        page.set(1);
                    })
                }}
                placeholder="Brand, category..."
            />

            { if let Some(message) = &*error {
                html! { <p class="text-white bg-red-500/60 rounded-lg px-4 py-2 self-start">{ message.clone() }</p> }
            } else {
                html! {}
            }}

            <DataTable<ServerStatus>
                columns={columns}
                rows={visible}
                render_row={render_row}
                loading={*loading}
                empty_message="No servers registered."
            />

            <Pagination
                current_page={current}
                total_pages={total_pages}
                on_change={on_page_change}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_reply_is_up_with_its_timing() {
        assert_eq!(classify(Some(true), Some(42)), (HealthState::Up, Some(42)));
    }

    #[test]
    fn error_reply_is_down_but_keeps_timing() {
        assert_eq!(classify(Some(false), Some(120)), (HealthState::Down, Some(120)));
    }

    #[test]
    fn transport_failure_is_down_without_timing() {
        assert_eq!(classify(None, Some(5)), (HealthState::Down, None));
        assert_eq!(classify(None, None), (HealthState::Down, None));
    }
}
