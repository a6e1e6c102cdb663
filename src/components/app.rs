use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::dashboard::DashboardPage;
use super::icons::icon_log_in;
use crate::api::{ApiClient, SessionState};
use crate::config::{load_settings, save_settings, AppSettings, SUPPORTED_CURRENCIES};
use crate::presenter::Presenter;

const LOGIN_PATH: &str = "/auth/login";

#[derive(Properties, PartialEq)]
struct LayoutProps {
    children: Children,
    session: SessionState,
}

#[function_component(Layout)]
fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex flex-col h-screen bg-background">
            <Header session={props.session} />
            <main class="flex-1 overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    session: SessionState,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let current_currency = settings
        .as_ref()
        .map(|s| s.currency_code.clone())
        .unwrap_or_else(|| "USD".to_string());

    let on_currency_change = {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            if let Some(settings) = settings.as_ref() {
                let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                let next = settings.with_currency(&select.value());
                save_settings(&next);
                settings.set(next);
            }
        })
    };

    html! {
        <header class="bg-[#D8E1E8] border-b border-border h-16 flex items-center justify-between px-6">
            <span class="text-[#173E63] text-2xl font-black tracking-tight">{"Finance Tracker"}</span>
            <div class="flex items-center gap-4">
                <select onchange={on_currency_change} class="px-3 py-1 bg-input border border-input rounded-lg text-sm text-foreground">
                    { for SUPPORTED_CURRENCIES.iter().map(|code| html! {
                        <option value={*code} selected={*code == current_currency}>{ *code }</option>
                    }) }
                </select>
                if props.session == SessionState::Unauthenticated {
                    <a href={LOGIN_PATH} class="flex items-center gap-2 text-sm font-medium text-[#173E63]">
                        { icon_log_in() }
                        <span>{"Log In"}</span>
                    </a>
                }
            </div>
        </header>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(load_settings);
    let session = use_state(|| SessionState::Checking);
    let client = ApiClient::new(settings.api_base_url.clone());
    let presenter = Presenter::new(settings.currency_symbol.clone());

    {
        let session = session.clone();
        use_effect_with_deps(
            move |client: &ApiClient| {
                let client = client.clone();
                spawn_local(async move {
                    session.set(client.probe_session().await);
                });
                || ()
            },
            client.clone(),
        );
    }

    if *session == SessionState::Checking {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-background text-muted-foreground">
                {"Checking session..."}
            </div>
        };
    }

    html! {
        <ContextProvider<UseStateHandle<AppSettings>> context={settings}>
            <Layout session={*session}>
                <DashboardPage client={client} session={*session} presenter={presenter} />
            </Layout>
        </ContextProvider<UseStateHandle<AppSettings>>>
    }
}
