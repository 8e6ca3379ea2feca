use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::merchant_form::MerchantForm;
use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::components::search::TableSearch;
use crate::components::table::{ColumnDef, DataTable};
use crate::list::{self, use_page_query, ListQuery, DEFAULT_PAGE_SIZE};
use crate::models::{ContractStatus, Merchant};
use crate::session::Session;

#[derive(Clone, PartialEq)]
enum ModalState {
    Closed,
    Create,
    Update(Merchant),
    Delete(Merchant),
}

#[function_component(MerchantsPage)]
pub fn merchants_page() -> Html {
    let session = use_context::<Session>();
    let is_admin = session.map(|s| s.is_admin).unwrap_or(false);

    let page = use_state(|| 1u32);
    let keyword = use_state(String::new);
    let refresh = use_state(|| 0u32);
    let modal = use_state(|| ModalState::Closed);
    let action_error = use_state(|| None::<String>);

    let query = ListQuery::new(*page, DEFAULT_PAGE_SIZE);
    let state = use_page_query::<Merchant>("/api/merchants", query, *refresh);

    let visible = list::filter_rows(&state.rows, &keyword);

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(ModalState::Closed))
    };

    // saved or deleted: close the dialog and refetch in place
    let on_saved = {
        let modal = modal.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            modal.set(ModalState::Closed);
            refresh.set(*refresh + 1);
        })
    };

    let on_delete_confirm = {
        let modal = modal.clone();
        let refresh = refresh.clone();
        let action_error = action_error.clone();
        Callback::from(move |merchant: Merchant| {
            let modal = modal.clone();
            let refresh = refresh.clone();
            let action_error = action_error.clone();
            spawn_local(async move {
                match api::delete(&format!("/api/merchants/{}", merchant.merchant_code)).await {
                    Ok(()) => {
                        action_error.set(None);
                        modal.set(ModalState::Closed);
                        refresh.set(*refresh + 1);
                    }
                    Err(err) => {
                        action_error.set(Some(err.to_string()));
                        modal.set(ModalState::Closed);
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
        ColumnDef::plain("Name"),
        ColumnDef::plain("Business id"),
        ColumnDef::plain("Category"),
        ColumnDef::plain("Contract"),
        ColumnDef::plain("Contract period"),
    ];
    if is_admin {
        columns.push(ColumnDef::plain("Actions"));
    }

    let render_row = {
        let modal = modal.clone();
        Callback::from(move |(_, merchant): (usize, Merchant)| {
            let status = match merchant.contract_status {
                ContractStatus::Active => html! {
                    <span class="px-2 py-1 rounded-full text-xs font-semibold bg-green-100 text-green-700">{"Active"}</span>
                },
                ContractStatus::Terminated => html! {
                    <span class="px-2 py-1 rounded-full text-xs font-semibold bg-gray-200 text-gray-600">{"Terminated"}</span>
                },
            };
            let actions = if is_admin {
                let edit = {
                    let modal = modal.clone();
                    let merchant = merchant.clone();
                    Callback::from(move |_| modal.set(ModalState::Update(merchant.clone())))
                };
                let remove = {
                    let modal = modal.clone();
                    let merchant = merchant.clone();
                    Callback::from(move |_| modal.set(ModalState::Delete(merchant.clone())))
                };
                html! {
                    <td class="px-6 py-4 flex gap-2">
                        <button onclick={edit} class="text-blue-600 hover:underline text-xs font-semibold">{"Edit"}</button>
                        <button onclick={remove} class="text-red-600 hover:underline text-xs font-semibold">{"Delete"}</button>
                    </td>
                }
            } else {
                html! {}
            };
            html! {
                <tr key={merchant.merchant_code.clone()} class="hover:bg-pink-50">
                    <td class="px-6 py-4 font-mono">{ merchant.merchant_code.clone() }</td>
                    <td class="px-6 py-4 font-semibold">{ merchant.merchant_name.clone() }</td>
                    <td class="px-6 py-4">{ merchant.business_id.clone() }</td>
                    <td class="px-6 py-4">{ merchant.category_name.clone() }</td>
                    <td class="px-6 py-4">{ status }</td>
                    <td class="px-6 py-4 text-xs text-gray-500">
                        { format!("{} ~ {}", merchant.registration_date, merchant.termination_date) }
                    </td>
                    { actions }
                </tr>
            }
        })
    };

    html! {
        <div class="w-full flex flex-col gap-5">
            <div class="flex items-center justify-between w-full">
                <h2 class="text-2xl font-bold text-white">{"Merchants"}</h2>
                { if is_admin {
                    let modal = modal.clone();
                    html! {
                        <button
                            onclick={Callback::from(move |_| modal.set(ModalState::Create))}
                            class="bg-white text-gray-700 px-6 py-2 rounded-md font-semibold shadow hover:bg-gray-100 transition text-sm"
                        >
                            {"+ Register merchant"}
                        </button>
                    }
                } else {
                    html! {}
                }}
            </div>

            <TableSearch
                value={(*keyword).clone()}
                on_change={{
                    let keyword = keyword.clone();
                    Callback::from(move |value: String| keyword.set(value))
                }}
                placeholder="Name, code, business id..."
            />

            { for [state.error.clone(), (*action_error).clone()].into_iter().flatten().map(|message| html! {
                <p class="text-white bg-red-500/60 rounded-lg px-4 py-2 self-start">{ message }</p>
            }) }

            <DataTable<Merchant>
                columns={columns}
                rows={visible}
                render_row={render_row}
                loading={state.loading}
                empty_message="No merchants registered."
            />

            <Pagination
                current_page={state.page}
                total_pages={state.total_pages}
                on_change={on_page_change}
            />

            { match &*modal {
                ModalState::Closed => html! {},
                ModalState::Create => html! {
                    <Modal title="Register merchant" on_close={close_modal.clone()}>
                        <MerchantForm on_saved={on_saved.clone()} />
                    </Modal>
                },
                ModalState::Update(merchant) => html! {
                    <Modal title="Edit merchant" on_close={close_modal.clone()}>
                        <MerchantForm merchant={merchant.clone()} on_saved={on_saved.clone()} />
                    </Modal>
                },
                ModalState::Delete(merchant) => {
                    let confirm = {
                        let on_delete_confirm = on_delete_confirm.clone();
                        let merchant = merchant.clone();
                        Callback::from(move |_| on_delete_confirm.emit(merchant.clone()))
                    };
                    let cancel = {
                        let close_modal = close_modal.clone();
                        Callback::from(move |_| close_modal.emit(()))
                    };
                    html! {
                        <Modal title="Delete merchant" on_close={close_modal.clone()}>
                            <p class="text-gray-700 mb-6">
                                { format!("Delete {} ({})? This cannot be undone.", merchant.merchant_name, merchant.merchant_code) }
                            </p>
                            <div class="flex justify-end gap-3">
                                <button onclick={cancel} class="px-6 py-2 rounded-lg bg-gray-200 text-gray-700 font-semibold">{"Cancel"}</button>
                                <button onclick={confirm} class="px-6 py-2 rounded-lg bg-red-600 text-white font-semibold">{"Delete"}</button>
                            </div>
                        </Modal>
                    }
                }
            }}
        </div>
    }
}
