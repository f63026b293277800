mod cards;
mod featured;
mod footer;
mod hero;
mod homepage;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{portfolio, Portfolio};
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let portfolio: &'static Portfolio = portfolio();
    provide_context(portfolio);
    let name = portfolio.profile.full_name();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Router>
            <main class="min-h-screen bg-black text-zinc-100 p-4 md:p-8 lg:p-12 selection:bg-blue-500/30">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

/// A list of small pill labels, used for stacks, skills and coursework.
#[component]
fn Tags(items: Vec<String>, #[prop(into)] tag_class: String) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {items
                .into_iter()
                .map(|item| view! { <span class=tag_class.clone()>{item}</span> })
                .collect_view()}
        </div>
    }
}
