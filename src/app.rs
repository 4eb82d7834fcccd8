//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::toasts::Toasts;
use crate::net::api::Api;
use crate::pages::{
    admin_orgs::AdminOrgsPage, chat::ChatPage, dashboard::DashboardPage,
    event_detail::EventDetailPage, home::HomePage, login::LoginPage,
    notifications::NotificationsPage, org_home::OrgHomePage, org_profile::OrgProfilePage,
    user_home::UserHomePage,
};
use crate::session::Session;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session-backed API bundle and shared state contexts, then
/// sets up client-side routing. The session token lives in browser storage;
/// everything downstream receives it through the injected `Session` handle
/// rather than reading storage ambiently.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::browser();
    let api = Api::new(session.clone());

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(api.clone());
    provide_context(auth);
    provide_context(toasts);

    // Resolve the stored token (if any) once on startup so the header and
    // public pages know who is visiting. Guarded pages re-verify themselves.
    #[cfg(feature = "hydrate")]
    {
        let auth_client = api.auth.clone();
        auth.set(AuthState::resolving());
        leptos::task::spawn_local(async move {
            let actor = auth_client.verify().await;
            auth.set(AuthState::resolved(actor));
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/sahyog.css"/>
        <Title text="Sahyog"/>

        <Router>
            <Header/>
            <Toasts/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=(StaticSegment("user"), StaticSegment("home")) view=UserHomePage/>
                    <Route path=(StaticSegment("org"), StaticSegment("home")) view=OrgHomePage/>
                    <Route path=(StaticSegment("org"), ParamSegment("id")) view=OrgProfilePage/>
                    <Route path=(StaticSegment("event"), ParamSegment("id")) view=EventDetailPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("chat") view=ChatPage/>
                    <Route path=StaticSegment("notifications") view=NotificationsPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("orgs")) view=AdminOrgsPage/>
                </Routes>
            </main>
        </Router>
    }
}
