use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::components::search::TableSearch;
use crate::components::table::{ColumnDef, DataTable};
use crate::list::{self, use_page_query, ListQuery, DEFAULT_PAGE_SIZE};
use crate::models::{Member, NotificationStatus, UserType};
use crate::session::Session;

#[function_component(MembersPage)]
pub fn members_page() -> Html {
    let session = use_context::<Session>();
    let is_admin = session.map(|s| s.is_admin).unwrap_or(false);

    let page = use_state(|| 1u32);
    let keyword = use_state(String::new);
    let refresh = use_state(|| 0u32);
    let pending_delete = use_state(|| None::<Member>);
    let action_error = use_state(|| None::<String>);

    let query = ListQuery::new(*page, DEFAULT_PAGE_SIZE);
    let state = use_page_query::<Member>("/api/members", query, *refresh);

    let visible = list::filter_rows(&state.rows, &keyword);

    let close_modal = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| pending_delete.set(None))
    };

    let on_delete_confirm = {
        let pending_delete = pending_delete.clone();
        let refresh = refresh.clone();
        let action_error = action_error.clone();
        Callback::from(move |member: Member| {
            let pending_delete = pending_delete.clone();
            let refresh = refresh.clone();
            let action_error = action_error.clone();
            spawn_local(async move {
                match api::delete(&format!("/api/members/{}", member.member_code)).await {
                    Ok(()) => {
                        action_error.set(None);
                        pending_delete.set(None);
                        refresh.set(*refresh + 1);
                    }
                    Err(err) => {
                        action_error.set(Some(err.to_string()));
                        pending_delete.set(None);
                    }
                }
            });
        })
    };

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    let mut columns = vec![
        ColumnDef::plain("Code"),
        ColumnDef::plain("Id"),
        ColumnDef::plain("Name"),
        ColumnDef::plain("Phone"),
        ColumnDef::plain("Email"),
        ColumnDef::plain("Type"),
        ColumnDef::plain("Notifications"),
    ];
    if is_admin {
        columns.push(ColumnDef::plain("Actions"));
    }

    let render_row = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |(_, member): (usize, Member)| {
            let type_badge = match member.user_type {
                UserType::Admin => html! {
                    <span class="px-2 py-1 rounded-full text-xs font-semibold bg-purple-100 text-purple-700">{"Admin"}</span>
                },
                UserType::User => html! {
                    <span class="px-2 py-1 rounded-full text-xs font-semibold bg-blue-100 text-blue-700">{"User"}</span>
                },
            };
            let notify = match member.notification_status {
                NotificationStatus::On => "ON",
                NotificationStatus::Off => "OFF",
            };
            let actions = if is_admin {
                let remove = {
                    let pending_delete = pending_delete.clone();
                    let member = member.clone();
                    Callback::from(move |_| pending_delete.set(Some(member.clone())))
                };
                html! {
                    <td class="px-6 py-4">
                        <button onclick={remove} class="text-red-600 hover:underline text-xs font-semibold">{"Delete"}</button>
                    </td>
                }
            } else {
                html! {}
            };
            html! {
                <tr key={member.member_code.clone()} class="hover:bg-pink-50">
                    <td class="px-6 py-4 font-mono">{ member.member_code.clone() }</td>
                    <td class="px-6 py-4">{ member.id.clone() }</td>
                    <td class="px-6 py-4 font-semibold">{ member.name.clone() }</td>
                    <td class="px-6 py-4">{ member.phone_num.clone() }</td>
                    <td class="px-6 py-4">{ member.email.clone() }</td>
                    <td class="px-6 py-4">{ type_badge }</td>
                    <td class="px-6 py-4 text-xs">{ notify }</td>
                    { actions }
                </tr>
            }
        })
    };

    html! {
        <div class="w-full flex flex-col gap-5">
            <h2 class="text-2xl font-bold text-white self-start">{"Members"}</h2>

            <TableSearch
                value={(*keyword).clone()}
                on_change={{
                    let keyword = keyword.clone();
                    Callback::from(move |value: String| keyword.set(value))
                }}
                placeholder="Name, id, email..."
            />

            { for [state.error.clone(), (*action_error).clone()].into_iter().flatten().map(|message| html! {
                <p class="text-white bg-red-500/60 rounded-lg px-4 py-2 self-start">{ message }</p>
            }) }

            <DataTable<Member>
                columns={columns}
                rows={visible}
                render_row={render_row}
                loading={state.loading}
                empty_message="No members found."
            />

            <Pagination
                current_page={state.page}
                total_pages={state.total_pages}
                on_change={on_page_change}
            />

            { if let Some(member) = &*pending_delete {
                let confirm = {
                    let on_delete_confirm = on_delete_confirm.clone();
                    let member = member.clone();
                    Callback::from(move |_| on_delete_confirm.emit(member.clone()))
                };
                let cancel = {
                    let close_modal = close_modal.clone();
                    Callback::from(move |_| close_modal.emit(()))
                };
                html! {
                    <Modal title="Delete member" on_close={close_modal.clone()}>
                        <p class="text-gray-700 mb-6">
                            { format!("Delete {} ({})? This cannot be undone.", member.name, member.member_code) }
                        </p>
                        <div class="flex justify-end gap-3">
                            <button onclick={cancel} class="px-6 py-2 rounded-lg bg-gray-200 text-gray-700 font-semibold">{"Cancel"}</button>
                            <button onclick={confirm} class="px-6 py-2 rounded-lg bg-red-600 text-white font-semibold">{"Delete"}</button>
                        </div>
                    </Modal>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
