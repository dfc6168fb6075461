//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::notice_banner::NoticeBanner;
use crate::config::ApiConfig;
use crate::pages::{
    all_tasks::AllTasksPage,
    dashboard::DashboardPage,
    login::LoginPage,
    my_tasks::{CompletedTasksPage, MyTasksPage, UnfulfilledTasksPage},
    register::RegisterPage,
    root::RootPage,
    users::UsersPage,
};
use crate::state::{auth::AuthState, tasks::TasksState, ui::UiState, users::UsersState};

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
/// Provides all shared state contexts, loads the stored session once in the
/// browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let tasks = RwSignal::new(TasksState::default());
    let users = RwSignal::new(UsersState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(ApiConfig::from_build_env());
    provide_context(auth);
    provide_context(tasks);
    provide_context(users);
    provide_context(ui);

    // Effects only run in the browser, so the server render stays in the
    // loading phase and hydration matches it.
    Effect::new(move || {
        let session = crate::util::session_store::browser_store().read();
        auth.set(AuthState::loaded(session));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/taskdesk.css"/>
        <Title text="Task Desk"/>

        <NoticeBanner/>
        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=RootPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("all-tasks") view=AllTasksPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("tasks") view=MyTasksPage/>
                <Route path=StaticSegment("completed-tasks") view=CompletedTasksPage/>
                <Route path=StaticSegment("unfulfilled-tasks") view=UnfulfilledTasksPage/>
            </Routes>
        </Router>
    }
}
