use leptos::prelude::*;

use crate::clock::PLACEHOLDER;
use crate::content::{Icon, Portfolio};

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &expect_context::<&'static Portfolio>().profile;
    let (time, set_time) = signal(PLACEHOLDER.to_string());

    // the ticker only runs in the browser; the server renders the placeholder
    #[cfg(feature = "hydrate")]
    {
        use crate::clock::{BrowserInterval, ClockTicker, LocalTime};

        match ClockTicker::start(&BrowserInterval, LocalTime, move |t| set_time.set(t)) {
            Ok(guard) => on_cleanup(move || drop(guard)),
            Err(e) => log::warn!("clock disabled: {e}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_time;

    let (first, rest) = match profile.focus.split_first() {
        Some((first, rest)) => (Some(first.clone()), rest.to_vec()),
        None => (None, Vec::new()),
    };

    view! {
        <section class="col-span-1 md:col-span-2 md:row-span-2 flex flex-col justify-between overflow-hidden relative group h-[420px] bg-zinc-900/50 backdrop-blur-md border border-white/5 rounded-3xl p-6">
            <div class="absolute top-0 right-0 p-6 opacity-50 group-hover:opacity-100 transition-opacity">
                <span class="font-mono text-sm text-zinc-500">
                    {time} " // " {profile.affiliation.clone()}
                </span>
            </div>
            <div class="mt-4 relative z-10">
                <div class="inline-flex items-center gap-2 px-3 py-1 mb-6 rounded-full border border-emerald-500/30 bg-emerald-500/10 text-emerald-400 text-xs font-mono tracking-wide">
                    <span class="w-2 h-2 rounded-full bg-emerald-500 animate-pulse"></span>
                    {profile.availability.clone()}
                </div>
                <h1 class="text-5xl md:text-6xl font-bold tracking-tight text-white mb-4 leading-tight">
                    {profile.name.clone()}
                    <br />
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 via-purple-400 to-blue-400">
                        {profile.surname.clone()}
                    </span>
                </h1>
                <p class="text-zinc-400 text-lg max-w-md leading-relaxed mt-4">
                    {profile.headline.clone()}
                    " "
                    {first.map(|f| view! { <span class="text-white font-medium">{f}</span> })}
                    {rest
                        .into_iter()
                        .map(|f| {
                            view! {
                                " and "
                                <span class="text-white font-medium">{f}</span>
                            }
                        })
                        .collect_view()}
                    " innovation."
                </p>
            </div>
            <div class="flex gap-4 mt-8 relative z-10">
                <a
                    href=profile.mailto()
                    class="p-3 bg-white text-black rounded-full hover:bg-zinc-200 transition-colors"
                    aria-label="Email"
                >
                    <i class=Icon::Mail.class()></i>
                </a>
                <a
                    href=profile.linkedin.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="p-3 bg-[#0077b5] text-white rounded-full hover:bg-[#006396] transition-colors"
                    aria-label="LinkedIn Profile"
                >
                    <i class=Icon::Linkedin.class()></i>
                </a>
                <a
                    href=profile.github.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="p-3 bg-zinc-800 text-white rounded-full hover:bg-zinc-700 transition-colors border border-white/10"
                    aria-label="GitHub Profile"
                >
                    <i class=Icon::Github.class()></i>
                </a>
                <div class="h-12 border-l border-zinc-800 mx-2"></div>
                <div class="flex flex-col justify-center">
                    <span class="text-xs text-zinc-500 uppercase font-mono">"Based in"</span>
                    <span class="text-sm font-medium flex items-center gap-1 text-zinc-200">
                        <i class=format!("{} text-blue-500", Icon::MapPin.class())></i>
                        {profile.location.clone()}
                    </span>
                </div>
            </div>
        </section>
    }
}
