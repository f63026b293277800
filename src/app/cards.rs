use leptos::prelude::*;

use super::Tags;
use crate::content::{Icon, Portfolio, SkillCategory};

const CARD: &str = "bg-zinc-900/50 backdrop-blur-md border border-white/5 rounded-3xl p-6 text-white transition-all duration-500 ease-out";
const CARD_HOVER: &str =
    "hover:scale-[1.01] hover:bg-zinc-800/60 hover:border-white/10 cursor-pointer";

#[component]
pub fn EducationCard() -> impl IntoView {
    let education = &expect_context::<&'static Portfolio>().education;
    view! {
        <section class=format!(
            "{CARD} {CARD_HOVER} md:col-span-2 bg-gradient-to-br from-blue-900/30 to-blue-950/10 border-blue-500/30 relative overflow-hidden group",
        )>
            <div class="absolute -right-20 -top-20 w-80 h-80 bg-blue-500/30 blur-[100px] rounded-full pointer-events-none"></div>
            <div class="absolute top-0 right-0 p-8 opacity-10 group-hover:opacity-20 transition-opacity">
                <img
                    src=education.logo.clone()
                    alt=format!("{} logo", education.school)
                    class="w-40 h-40 object-contain"
                />
            </div>
            <div class="flex flex-col h-full justify-between relative z-10">
                <div class="flex justify-between items-start mb-4">
                    <div class="flex items-center gap-3">
                        <div class="p-2.5 bg-blue-500/20 rounded-xl text-blue-400">
                            <i class=Icon::BookOpen.class()></i>
                        </div>
                        <div>
                            <h3 class="text-xl font-bold">{education.degree.clone()}</h3>
                            <p class="text-zinc-400 text-sm">{education.field.clone()}</p>
                        </div>
                    </div>
                    <div class="text-right">
                        <span class="block text-lg font-bold">{education.school.clone()}</span>
                        <span class="text-xs font-mono text-zinc-500">
                            {education.period.clone()}
                        </span>
                    </div>
                </div>
                <div class="mt-2">
                    <h4 class="text-xs font-bold text-zinc-500 uppercase tracking-wider mb-3">
                        "Relevant Coursework"
                    </h4>
                    <Tags
                        items=education.coursework.clone()
                        tag_class="text-xs px-2 py-1 bg-white/5 text-zinc-300 rounded border border-white/5 hover:border-blue-500/30 transition-colors"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Category(category: &'static SkillCategory) -> impl IntoView {
    let span = if category.wide {
        "col-span-1 sm:col-span-2 border-t border-white/5 pt-4 mt-2 space-y-3"
    } else {
        "space-y-3"
    };
    view! {
        <div class=span>
            <div class=format!("flex items-center gap-2 {}", category.accent.text())>
                <i class=category.icon.class()></i>
                <h4 class="text-sm font-bold uppercase tracking-wider">
                    {category.title.clone()}
                </h4>
            </div>
            <Tags
                items=category.skills.clone()
                tag_class="text-xs px-2.5 py-1 bg-white/5 border border-white/5 rounded-md text-zinc-300 hover:bg-white/10 cursor-default"
            />
        </div>
    }
}

#[component]
pub fn SkillsCard() -> impl IntoView {
    let skills = &expect_context::<&'static Portfolio>().skills;
    view! {
        <section class=format!(
            "{CARD} md:col-span-2 md:row-span-2 bg-gradient-to-br from-cyan-900/30 to-cyan-950/10 border-cyan-500/30 relative overflow-hidden flex flex-col gap-6",
        )>
            <div class="absolute -right-20 -top-20 w-80 h-80 bg-cyan-500/30 blur-[100px] rounded-full pointer-events-none"></div>
            <div class="flex items-center justify-between relative z-10">
                <h3 class="text-lg font-bold flex items-center gap-2">
                    <i class=format!("{} text-purple-500", Icon::Cpu.class())></i>
                    "Technical Skills"
                </h3>
                <span class="text-xs font-mono text-zinc-500">"FULL STACK & AI"</span>
            </div>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-y-6 gap-x-4 relative z-10">
                {skills.iter().map(|category| view! { <Category category /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn AchievementCard() -> impl IntoView {
    let achievement = &expect_context::<&'static Portfolio>().achievement;
    view! {
        <section class=format!(
            "{CARD} {CARD_HOVER} bg-gradient-to-br from-amber-900/40 to-amber-950/20 border-amber-500/30 relative overflow-hidden flex flex-col justify-center min-h-[200px]",
        )>
            <div class="relative z-10">
                <div class="w-12 h-12 bg-amber-500/30 rounded-full flex items-center justify-center mb-4 text-amber-400 border border-amber-500/40">
                    <i class=Icon::Award.class()></i>
                </div>
                <h3 class="text-xl font-bold mb-2">{achievement.title.clone()}</h3>
                <p class="text-amber-100 text-sm font-medium">{achievement.subtitle.clone()}</p>
                <p class="text-amber-200/70 text-xs mt-2 leading-relaxed">
                    {achievement.blurb.clone()}
                </p>
            </div>
        </section>
    }
}

#[component]
pub fn ResumeCard() -> impl IntoView {
    let resume = &expect_context::<&'static Portfolio>().resume;
    view! {
        <a
            href=resume.href.clone()
            download=""
            class=format!(
                "{CARD} {CARD_HOVER} group flex flex-col items-center justify-center text-center gap-4 min-h-[200px]",
            )
        >
            <div class="w-16 h-16 rounded-full bg-zinc-700/50 flex items-center justify-center group-hover:scale-110 transition-transform border border-white/5">
                <i class=Icon::ExternalLink.class()></i>
            </div>
            <div>
                <h3 class="font-bold text-lg">{resume.label.clone()}</h3>
                <p class="text-zinc-400 text-xs mt-1">{resume.caption.clone()}</p>
            </div>
        </a>
    }
}
