use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::{self, Session};
use crate::Route;

struct NavItem {
    label: &'static str,
    route: Route,
    admin_only: bool,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        route: Route::Dashboard,
        admin_only: false,
    },
    NavItem {
        label: "Statistics",
        route: Route::Statistics,
        admin_only: false,
    },
    NavItem {
        label: "Transactions",
        route: Route::History,
        admin_only: false,
    },
    NavItem {
        label: "Merchants",
        route: Route::Merchants,
        admin_only: false,
    },
    NavItem {
        label: "Members",
        route: Route::Members,
        admin_only: false,
    },
    NavItem {
        label: "Server Monitor",
        route: Route::Status,
        admin_only: true,
    },
];

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let session = use_context::<Session>();
    let route = use_route::<Route>();
    let navigator = use_navigator();

    let is_admin = session.as_ref().map(|s| s.is_admin).unwrap_or(false);
    let admin_name = session
        .as_ref()
        .map(|s| s.admin_name.clone())
        .unwrap_or_else(|| "Administrator".to_string());

    let on_logout = Callback::from(move |_| {
        session::clear_token();
        if let Some(navigator) = navigator.clone() {
            navigator.push(&Route::Login);
        }
    });

    html! {
        <div class="w-screen min-h-screen flex flex-col items-center justify-start bg-gradient-to-br from-[#f77062] to-[#fe5196] overflow-hidden">
            <div class="flex justify-between items-center w-full px-12 pt-8 text-white">
                <h1 class="text-3xl font-bold select-none">
                    {"Hulahoop"}<span class="text-blue-400">{".Red"}</span>
                </h1>

                <nav class="flex items-center gap-4 text-sm font-semibold">
                    { for NAV_ITEMS.iter().filter(|item| is_admin || !item.admin_only).map(|item| {
                        let active = route.as_ref() == Some(&item.route);
                        let class = if active {
                            "px-3 py-1.5 rounded-full bg-white/30"
                        } else {
                            "px-3 py-1.5 rounded-full hover:bg-white/20 transition"
                        };
                        html! {
                            <Link<Route> to={item.route.clone()} classes={class}>{ item.label }</Link<Route>>
                        }
                    }) }
                </nav>

                <div class="flex items-center gap-4">
                    <span class="text-sm">{ format!("Welcome, {admin_name}") }</span>
                    <button
                        onclick={on_logout}
                        class="bg-white text-gray-700 px-5 py-2 rounded-full font-semibold shadow hover:bg-gray-100 transition"
                    >
                        {"Log out"}
                    </button>
                </div>
            </div>

            <main class="bg-white/20 backdrop-blur-md rounded-3xl shadow-2xl mt-12 px-10 py-8 w-[90%] max-w-[1200px] flex flex-col items-center mb-12">
                { for props.children.iter() }
            </main>
        </div>
    }
}
