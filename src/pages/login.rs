use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, ApiError};
use crate::session;
use crate::Route;

#[derive(Serialize)]
struct LoginRequest {
    id: String,
    password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    token: String,
    #[serde(default)]
    admin_name: String,
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let id = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let on_submit = {
        let id = id.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let id_val = id.trim().to_string();
            let password_val = (*password).clone();

            if id_val.is_empty() || password_val.is_empty() {
                error.set(Some("Id and password are required.".to_string()));
                return;
            }

            error.set(None);
            loading.set(true);

            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let body = LoginRequest {
                    id: id_val,
                    password: password_val,
                };
                match api::post_json::<_, LoginResponse>("/api/admin/login", &body).await {
                    Ok(resp) => {
                        log::info!("{} signed in", resp.admin_name);
                        session::store_token(&resp.token);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(ApiError::Unauthorized) => {
                        error.set(Some("Invalid id or password.".to_string()));
                    }
                    Err(ApiError::Status { code: 403, .. }) => {
                        error.set(Some("This account is not authorized for admin access.".to_string()));
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="flex flex-col justify-center items-center w-screen min-h-screen bg-gradient-to-br from-[#f77062] to-[#fe5196] overflow-hidden">
            <h1 class="text-4xl font-bold mb-12 select-none">
                <span class="text-white">{"Hulahoop"}</span>
                <span class="text-blue-400 ml-1">{".Red"}</span>
            </h1>

            <div class="bg-white/25 backdrop-blur-md rounded-[2.5rem] shadow-2xl px-20 py-16 text-center flex flex-col items-center w-[620px] max-w-[90%]">
                <h2 class="text-white text-3xl font-semibold mb-10">{"Admin Login"}</h2>

                <form class="flex flex-col gap-6 w-full" onsubmit={on_submit}>
                    <div class="flex items-center bg-white rounded-2xl px-5 py-4">
                        <input
                            type="text"
                            placeholder="Id"
                            class="flex-1 border-none outline-none text-gray-700 text-lg bg-transparent"
                            value={(*id).clone()}
                            oninput={{
                                let id = id.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    id.set(input.value());
                                })
                            }}
                        />
                    </div>

                    <div class="flex items-center bg-white rounded-2xl px-5 py-4">
                        <input
                            type="password"
                            placeholder="Password"
                            class="flex-1 border-none outline-none text-gray-700 text-lg bg-transparent"
                            value={(*password).clone()}
                            oninput={{
                                let password = password.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    password.set(input.value());
                                })
                            }}
                        />
                    </div>

                    { if let Some(message) = &*error {
                        html! { <p class="text-sm text-red-100 bg-red-500/50 rounded-lg py-2">{ message.clone() }</p> }
                    } else {
                        html! {}
                    }}

                    <button
                        type="submit"
                        disabled={*loading}
                        class="bg-gradient-to-r from-pink-400 to-pink-300 text-white font-semibold rounded-2xl py-4 mt-5 text-lg tracking-wide hover:opacity-90 transition w-full"
                    >
                        { if *loading { "Signing in..." } else { "Log in" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
