use chrono::{DateTime, Datelike, Local};
use leptos::prelude::*;

use crate::content::Portfolio;

fn build_date() -> String {
    let build_time_str = env!("BUILD_TIME");
    match DateTime::parse_from_rfc3339(build_time_str) {
        Ok(dt) => dt.with_timezone(&Local).format("%b %e %Y").to_string(),
        Err(_) => build_time_str.to_string(),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let portfolio = expect_context::<&'static Portfolio>();
    let year = Local::now().year();
    view! {
        <footer class="max-w-7xl mx-auto mt-20 py-12 border-t border-zinc-900 flex flex-col md:flex-row justify-between items-center gap-4 text-zinc-600 text-sm font-mono">
            <p>"© " {year} " " {portfolio.profile.full_name()}</p>
            <p>{portfolio.footer.credits.clone()}</p>
            <p>"Built " {build_date()}</p>
        </footer>
    }
}
