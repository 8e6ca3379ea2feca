//! Create/update form for merchants. The draft is validated with declared
//! field constraints before anything is sent; an invalid draft never reaches
//! the network. On success the caller is told to refetch its list instead of
//! reloading the whole page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::api;
use crate::models::{ContractStatus, Merchant};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MerchantDraft {
    #[validate(length(min = 1, message = "Merchant code is required."))]
    pub merchant_code: String,
    #[validate(length(min = 2, message = "Merchant name must be at least 2 characters."))]
    pub merchant_name: String,
    #[validate(length(min = 10, message = "Business id must be at least 10 characters."))]
    pub business_id: String,
    #[validate(length(min = 1, message = "Brand code is required."))]
    pub brand_code: String,
    #[validate(length(min = 1, message = "Category name is required."))]
    pub category_name: String,
    #[validate(length(min = 1, message = "Registration date is required."))]
    pub registration_date: String,
    #[validate(length(min = 1, message = "Termination date is required."))]
    pub termination_date: String,
    pub contract_status: ContractStatus,
}

impl MerchantDraft {
    pub fn empty() -> Self {
        MerchantDraft {
            merchant_code: String::new(),
            merchant_name: String::new(),
            business_id: String::new(),
            brand_code: String::new(),
            category_name: String::new(),
            registration_date: String::new(),
            termination_date: String::new(),
            contract_status: ContractStatus::Active,
        }
    }

    pub fn from_merchant(merchant: &Merchant) -> Self {
        MerchantDraft {
            merchant_code: merchant.merchant_code.clone(),
            merchant_name: merchant.merchant_name.clone(),
            business_id: merchant.business_id.clone(),
            brand_code: merchant.brand_code.clone(),
            category_name: merchant.category_name.clone(),
            registration_date: merchant.registration_date.clone(),
            termination_date: merchant.termination_date.clone(),
            contract_status: merchant.contract_status,
        }
    }

    /// First violation message per field, empty when the draft is valid.
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        if let Err(errors) = self.validate() {
            for (field, list) in errors.field_errors() {
                if let Some(first) = list.first() {
                    let message = first
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"));
                    out.insert(field.to_string(), message);
                }
            }
        }
        out
    }
}

#[derive(Properties, PartialEq)]
pub struct MerchantFormProps {
    /// `Some` switches the form to update mode; the code becomes read-only.
    #[prop_or_default]
    pub merchant: Option<Merchant>,
    pub on_saved: Callback<()>,
}

#[function_component(MerchantForm)]
pub fn merchant_form(props: &MerchantFormProps) -> Html {
    let is_update = props.merchant.is_some();
    let draft = use_state(|| {
        props
            .merchant
            .as_ref()
            .map(MerchantDraft::from_merchant)
            .unwrap_or_else(MerchantDraft::empty)
    });
    let field_errors = use_state(BTreeMap::<String, String>::new);
    let server_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let text_field = |apply: fn(&mut MerchantDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };

    let on_status_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.contract_status = if select.value() == "N" {
                ContractStatus::Terminated
            } else {
                ContractStatus::Active
            };
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let field_errors = field_errors.clone();
        let server_error = server_error.clone();
        let saving = saving.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = (*draft).clone();

            let errors = current.field_errors();
            if !errors.is_empty() {
                field_errors.set(errors);
                return;
            }
            field_errors.set(BTreeMap::new());
            server_error.set(None);
            saving.set(true);

            let server_error = server_error.clone();
            let saving = saving.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                let result = if is_update {
                    api::put(&format!("/api/merchants/{}", current.merchant_code), &current).await
                } else {
                    api::post("/api/merchants", &current).await
                };
                match result {
                    Ok(()) => {
                        saving.set(false);
                        on_saved.emit(());
                    }
                    Err(err) => {
                        // the server's own message, verbatim when it sent one
                        server_error.set(Some(err.to_string()));
                        saving.set(false);
                    }
                }
            });
        })
    };

    let field_error = |name: &str| {
        field_errors.get(name).map(|message| {
            html! { <p class="text-red-500 text-xs mt-1">{ message.clone() }</p> }
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex flex-col gap-6">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="flex flex-col gap-2">
                    <label class="text-sm font-medium text-gray-700">{"Merchant code"}</label>
                    <input
                        class="w-full p-3 border border-gray-300 rounded-lg"
                        placeholder="e.g. M000000001"
                        value={draft.merchant_code.clone()}
                        readonly={is_update}
                        oninput={text_field(|d, v| d.merchant_code = v)}
                    />
                    { field_error("merchant_code") }
                </div>

                <div class="flex flex-col gap-2">
                    <label class="text-sm font-medium text-gray-700">{"Brand code"}</label>
                    <input
                        class="w-full p-3 border border-gray-300 rounded-lg"
                        placeholder="e.g. BR0001"
                        value={draft.brand_code.clone()}
                        oninput={text_field(|d, v| d.brand_code = v)}
                    />
                    { field_error("brand_code") }
                </div>

                <div class="flex flex-col gap-2">
                    <label class="text-sm font-medium text-gray-700">{"Merchant name"}</label>
                    <input
                        class="w-full p-3 border border-gray-300 rounded-lg"
                        placeholder="Merchant name"
                        value={draft.merchant_name.clone()}
                        oninput={text_field(|d, v| d.merchant_name = v)}
                    />
                    { field_error("merchant_name") }
                </div>

                <div class="flex flex-col gap-2">
                    <label class="text-sm font-medium text-gray-700">{"Business id"}</label>
                    <input
                        class="w-full p-3 border border-gray-300 rounded-lg"
                        placeholder="000-00-00000"
                        value={draft.business_id.clone()}
                        oninput={text_field(|d, v| d.business_id = v)}
                    />
                    { field_error("business_id") }
                </div>

                <div class="flex flex-col gap-2">
                    <label class="text-sm font-medium text-gray-700">{"Category"}</label>
                    <input
                        class="w-full p-3 border border-gray-300 rounded-lg"
                        placeholder="e.g. Movie, Bike"
                        value={draft.category_name.clone()}
                        oninput={text_field(|d, v| d.category_name = v)}
                    />
                    { field_error("category_name") }
                </div>

                <div class="flex flex-col gap-2">
                    <label class="text-sm font-medium text-gray-700">{"Contract status"}</label>
                    <select
                        class="w-full p-3 border border-gray-300 rounded-lg bg-white"
                        onchange={on_status_change}
                    >
                        <option value="Y" selected={draft.contract_status == ContractStatus::Active}>{"Active"}</option>
                        <option value="N" selected={draft.contract_status == ContractStatus::Terminated}>{"Terminated"}</option>
                    </select>
                </div>

                <div class="flex flex-col gap-2">
                    <label class="text-sm font-medium text-gray-700">{"Contract start"}</label>
                    <input
                        type="date"
                        class="w-full p-3 border border-gray-300 rounded-lg"
                        value={draft.registration_date.clone()}
                        oninput={text_field(|d, v| d.registration_date = v)}
                    />
                    { field_error("registration_date") }
                </div>

                <div class="flex flex-col gap-2">
                    <label class="text-sm font-medium text-gray-700">{"Contract end"}</label>
                    <input
                        type="date"
                        class="w-full p-3 border border-gray-300 rounded-lg"
                        value={draft.termination_date.clone()}
                        oninput={text_field(|d, v| d.termination_date = v)}
                    />
                    { field_error("termination_date") }
                </div>
            </div>

            { if let Some(message) = &*server_error {
                html! { <p class="text-sm text-red-500">{ message.clone() }</p> }
            } else {
                html! {}
            }}

            <div class="flex justify-end">
                <button
                    type="submit"
                    disabled={*saving}
                    class="bg-red-700 hover:bg-red-600 text-white font-semibold py-3 px-8 rounded-lg transition-colors"
                >
                    { if *saving { "Saving..." } else if is_update { "Save changes" } else { "Register" } }
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> MerchantDraft {
        MerchantDraft {
            merchant_code: "M000000001".into(),
            merchant_name: "Cinema One".into(),
            business_id: "123-45-67890".into(),
            brand_code: "BR0001".into(),
            category_name: "Movie".into(),
            registration_date: "2024-01-01".into(),
            termination_date: "2026-01-01".into(),
            contract_status: ContractStatus::Active,
        }
    }

    #[test]
    fn complete_draft_has_no_field_errors() {
        assert!(valid_draft().field_errors().is_empty());
    }

    #[test]
    fn one_character_name_is_rejected_with_a_field_message() {
        let mut draft = valid_draft();
        draft.merchant_name = "X".into();
        let errors = draft.field_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors["merchant_name"].contains("at least 2"));
    }

    #[test]
    fn every_missing_field_gets_its_own_message() {
        let empty = MerchantDraft::empty();
        let errors = empty.field_errors();
        for field in [
            "merchant_code",
            "merchant_name",
            "business_id",
            "brand_code",
            "category_name",
            "registration_date",
            "termination_date",
        ] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
    }

    #[test]
    fn draft_serializes_with_camel_case_wire_names() {
        let json = serde_json::to_value(valid_draft()).unwrap();
        assert_eq!(json["merchantCode"], "M000000001");
        assert_eq!(json["contractStatus"], "Y");
        assert_eq!(json["businessId"], "123-45-67890");
    }
}
