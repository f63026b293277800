use leptos::{ev::MouseEvent, prelude::*};

use super::Tags;
use crate::content::{Icon, Project};
use crate::selection::{CardClick, Selection};

#[component]
pub fn ProjectCard(project: &'static Project, selection: RwSignal<Selection>) -> impl IntoView {
    let accent = project.accent;
    view! {
        <div
            on:click=move |_| {
                selection.maybe_update(|s| s.handle_card_click(project, CardClick::OpenDetail));
            }
            class=format!(
                "md:col-span-2 group relative overflow-hidden bg-gradient-to-br {} min-h-[280px] border rounded-3xl p-6 text-white transition-all duration-500 ease-out hover:scale-[1.01] cursor-pointer",
                accent.gradient(),
            )
        >
            <div class=format!(
                "absolute -right-20 -top-20 w-80 h-80 {} blur-[100px] rounded-full pointer-events-none",
                accent.glow(),
            )></div>
            <div class="absolute top-4 right-4 opacity-0 group-hover:opacity-100 transition-opacity flex gap-2">
                <a
                    href=project.source_link.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="Source code"
                    on:click=move |ev: MouseEvent| {
                        // following the link never opens the overlay
                        ev.stop_propagation();
                        selection.maybe_update(|s| {
                            s.handle_card_click(project, CardClick::FollowSourceLink)
                        });
                    }
                    class="p-2 bg-black/40 rounded-full hover:bg-white hover:text-black transition-colors"
                >
                    <i class=Icon::Github.class()></i>
                </a>
                <div class="p-2 bg-black/40 rounded-full hover:bg-white hover:text-black transition-colors">
                    <i class=Icon::Maximize.class()></i>
                </div>
            </div>
            <div class="h-full flex flex-col relative z-10">
                <div class="mb-6 p-3 bg-white/5 w-fit rounded-xl border border-white/10">
                    <i class=project.icon.class()></i>
                </div>
                <h3 class="text-2xl font-bold mb-2">{project.title.clone()}</h3>
                <p class="text-sm text-zinc-300 mb-6 line-clamp-3 leading-relaxed opacity-90">
                    {project.short_description.clone()}
                </p>
                <div class="mt-auto pt-4 border-t border-white/10">
                    <Tags
                        items=project.stack.clone()
                        tag_class="text-xs font-mono px-3 py-1.5 bg-black/30 rounded text-zinc-200 border border-white/10"
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectModal(project: &'static Project, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/80 backdrop-blur-sm"
            role="dialog"
            aria-modal="true"
            aria-labelledby="project-modal-title"
            on:click=move |_| on_close.run(())
        >
            <div
                class="bg-zinc-900 border border-white/10 w-full max-w-2xl rounded-3xl overflow-hidden shadow-2xl relative max-h-[90vh] overflow-y-auto"
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                <button
                    class="absolute top-4 right-4 p-2 bg-black/20 hover:bg-white/10 rounded-full transition-colors text-white z-10"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>
                <div class="h-48 bg-gradient-to-br from-blue-900/40 to-purple-900/40 flex items-center justify-center p-8">
                    <i class=format!("{} text-6xl text-white/80", project.icon.class())></i>
                </div>
                <div class="p-8">
                    <div class="flex justify-between items-start mb-4">
                        <div>
                            <h2 id="project-modal-title" class="text-3xl font-bold text-white mb-2">
                                {project.title.clone()}
                            </h2>
                            <p class="text-zinc-400 text-lg">{project.short_description.clone()}</p>
                        </div>
                        <a
                            href=project.source_link.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Source code"
                            class="p-3 bg-zinc-800 rounded-full hover:bg-white hover:text-black transition-colors"
                        >
                            <i class=Icon::Github.class()></i>
                        </a>
                    </div>
                    <div class="mb-8">
                        <Tags
                            items=project.stack.clone()
                            tag_class="text-xs px-3 py-1.5 bg-blue-500/10 text-blue-300 rounded-full border border-blue-500/20 font-mono"
                        />
                    </div>
                    <div class="space-y-6">
                        <div>
                            <h3 class="text-sm font-bold text-white uppercase tracking-wider mb-3 flex items-center gap-2">
                                <i class=format!("{} text-blue-500", Icon::Terminal.class())></i>
                                "Project Overview"
                            </h3>
                            <p class="text-zinc-300 leading-relaxed">{project.description.clone()}</p>
                        </div>
                        <div>
                            <h3 class="text-sm font-bold text-white uppercase tracking-wider mb-3 flex items-center gap-2">
                                <i class=format!("{} text-amber-500", Icon::Award.class())></i>
                                "Key Achievements"
                            </h3>
                            <ul class="grid gap-3">
                                {project
                                    .details
                                    .iter()
                                    .map(|detail| {
                                        view! {
                                            <li class="flex items-start gap-3 text-zinc-400 text-sm bg-zinc-800/30 p-3 rounded-xl border border-white/5">
                                                <span class="mt-1 w-2 h-2 rounded-full bg-blue-500 shrink-0" />
                                                {detail.clone()}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
