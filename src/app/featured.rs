use leptos::prelude::*;

use super::Tags;
use crate::content::{Icon, Portfolio};

#[component]
pub fn FeaturedProject() -> impl IntoView {
    let featured = &expect_context::<&'static Portfolio>().featured;
    view! {
        <section class="md:col-span-4 mt-12 mb-8">
            <div class="flex items-center gap-4 mb-6">
                <h2 class="text-2xl font-bold text-white flex items-center gap-2">
                    <i class=format!("{} text-purple-500", Icon::Brain.class())></i>
                    "Featured Project"
                </h2>
                <div class="h-px bg-zinc-800 flex-grow"></div>
            </div>
            <div class="relative rounded-3xl overflow-hidden border border-purple-500/20 bg-zinc-900/40 group">
                <div class="absolute inset-0 bg-gradient-to-r from-purple-900/20 to-blue-900/20 opacity-50 group-hover:opacity-70 transition-opacity"></div>
                <div class="grid md:grid-cols-2 gap-8 p-8 md:p-12 relative z-10">
                    <div class="flex flex-col justify-center space-y-6">
                        <div class="inline-block px-3 py-1 rounded-full border border-purple-400/30 bg-purple-400/10 text-purple-300 text-xs font-mono w-fit">
                            {featured.badge.clone()}
                        </div>
                        <h3 class="text-4xl md:text-5xl font-bold text-white">
                            {featured.title.clone()}
                        </h3>
                        <p class="text-zinc-300 text-lg leading-relaxed">
                            {featured.lead.clone()} " "
                            <span class="text-purple-400">{featured.highlight.clone()}</span> " "
                            {featured.description.clone()}
                        </p>
                        <Tags
                            items=featured.stack.clone()
                            tag_class="text-xs px-3 py-1.5 bg-black/40 rounded-lg border border-white/10 text-zinc-400"
                        />
                        <div class="pt-4 flex gap-4">
                            <a
                                href=featured.live_url.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center gap-2 px-6 py-3 bg-purple-600 hover:bg-purple-500 text-white rounded-xl font-medium transition-all hover:translate-x-1"
                            >
                                "Visit Live Site"
                                <i class=Icon::ExternalLink.class()></i>
                            </a>
                            <a
                                href=featured.source_url.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center gap-2 px-6 py-3 bg-zinc-800 hover:bg-zinc-700 text-white rounded-xl font-medium transition-colors border border-white/10"
                            >
                                <i class=Icon::Github.class()></i>
                                "Source"
                            </a>
                        </div>
                    </div>
                    <div class="flex items-center justify-center relative">
                        <div class="w-full aspect-video bg-zinc-950/50 rounded-xl border border-white/10 flex items-center justify-center overflow-hidden group-hover:border-purple-500/30 transition-colors">
                            <div class="text-center p-8">
                                <i class=format!(
                                    "{} text-6xl text-purple-500 opacity-80",
                                    Icon::Brain.class(),
                                )></i>
                                <p class="text-zinc-500 font-mono text-sm">"Interactive Preview"</p>
                            </div>
                            <div class="absolute top-4 left-4 flex gap-2">
                                <div class="w-3 h-3 rounded-full bg-red-500/20"></div>
                                <div class="w-3 h-3 rounded-full bg-yellow-500/20"></div>
                                <div class="w-3 h-3 rounded-full bg-green-500/20"></div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
