//! Admin back office for the Hulahoop.Red merchant network. A browser-side
//! app: every screen talks to the admin REST backend with a bearer token and
//! renders one of the routed pages inside the shared layout.

use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod components;
mod format;
mod list;
mod models;
mod pages;
mod session;

use components::layout::Layout;
use pages::dashboard::DashboardPage;
use pages::login::LoginPage;
use pages::members::MembersPage;
use pages::merchants::MerchantsPage;
use pages::statistics::StatisticsPage;
use pages::status::StatusPage;
use pages::transactions::TransactionsPage;
use session::Session;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/history")]
    History,
    #[at("/merchant")]
    Merchants,
    #[at("/user")]
    Members,
    #[at("/statistics")]
    Statistics,
    #[at("/status")]
    Status,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
struct ProtectedProps {
    children: Children,
}

/// Wraps every page behind the login screen. Without a decodable token the
/// user is bounced to login; with one, the typed session is provided through
/// context so pages never re-parse the token themselves.
#[function_component(Protected)]
fn protected(props: &ProtectedProps) -> Html {
    match session::current() {
        Some(session) => html! {
            <ContextProvider<Session> context={session}>
                <Layout>
                    { for props.children.iter() }
                </Layout>
            </ContextProvider<Session>>
        },
        None => html! { <Redirect<Route> to={Route::Login} /> },
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => html! { <Protected><DashboardPage /></Protected> },
        Route::History => html! { <Protected><TransactionsPage /></Protected> },
        Route::Merchants => html! { <Protected><MerchantsPage /></Protected> },
        Route::Members => html! { <Protected><MembersPage /></Protected> },
        Route::Statistics => html! { <Protected><StatisticsPage /></Protected> },
        Route::Status => html! { <Protected><StatusPage /></Protected> },
        Route::NotFound => html! {
            <div class="flex flex-col items-center justify-center w-screen min-h-screen bg-gradient-to-br from-[#f77062] to-[#fe5196] text-white gap-4">
                <h1 class="text-6xl font-bold">{"404"}</h1>
                <p class="text-lg">{"This page does not exist."}</p>
                <Link<Route> to={Route::Dashboard} classes="bg-white text-gray-700 px-6 py-2 rounded-full font-semibold shadow">
                    {"Back to dashboard"}
                </Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
