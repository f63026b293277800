use leptos::prelude::*;
use leptos_meta::Title;

use super::cards::{AchievementCard, EducationCard, ResumeCard, SkillsCard};
use super::featured::FeaturedProject;
use super::footer::Footer;
use super::hero::Hero;
use super::projects::{ProjectCard, ProjectModal};
use crate::content::Portfolio;
use crate::layout::{compose, Section};
use crate::selection::Selection;

#[component]
pub fn HomePage() -> impl IntoView {
    let portfolio = expect_context::<&'static Portfolio>();
    let selection = RwSignal::new(Selection::default());
    let overlay = Memo::new(move |_| selection.with(|s| compose(portfolio, s).overlay));

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::{keydown, KeyboardEvent};

        let handle = window_event_listener(keydown, move |ev: KeyboardEvent| {
            selection.maybe_update(|s| s.handle_key(&ev.key()));
        });
        on_cleanup(move || handle.remove());
    }

    let (page, footer): (Vec<_>, Vec<_>) = compose(portfolio, &selection.get_untracked())
        .sections
        .into_iter()
        .partition(|s| *s != Section::Footer);

    let render = move |section: Section| match section {
        Section::Hero => view! { <Hero /> }.into_any(),
        Section::Education => view! { <EducationCard /> }.into_any(),
        Section::Skills => view! { <SkillsCard /> }.into_any(),
        Section::Achievement => view! { <AchievementCard /> }.into_any(),
        Section::Resume => view! { <ResumeCard /> }.into_any(),
        Section::Featured => view! { <FeaturedProject /> }.into_any(),
        Section::ProjectsHeader => view! {
            <div class="md:col-span-4 mt-4 mb-2 flex items-center gap-4">
                <div class="h-px bg-zinc-800 flex-grow"></div>
                <h2 class="font-bold text-zinc-400 uppercase tracking-widest text-sm">
                    "Other Works"
                </h2>
                <div class="h-px bg-zinc-800 flex-grow"></div>
            </div>
        }
        .into_any(),
        Section::ProjectCard(id) => portfolio
            .project(id)
            .map(|project| view! { <ProjectCard project selection /> }.into_any())
            .unwrap_or_else(|| ().into_any()),
        Section::Footer => view! { <Footer /> }.into_any(),
    };

    view! {
        <Title text="Portfolio" />
        <div class="fixed inset-0 -z-10">
            <div class="absolute top-0 left-0 w-full h-full bg-[radial-gradient(circle_at_50%_0%,_#111_0%,_#000_100%)]" />
            <div class="absolute top-0 right-0 w-[500px] h-[500px] bg-blue-900/10 rounded-full blur-[128px] opacity-50" />
            <div class="absolute bottom-0 left-0 w-[500px] h-[500px] bg-purple-900/10 rounded-full blur-[128px] opacity-30" />
        </div>
        <div class="max-w-7xl mx-auto grid grid-cols-1 md:grid-cols-4 gap-4 md:gap-6 auto-rows-[minmax(100px,auto)]">
            {page.into_iter().map(render).collect_view()}
        </div>
        {footer.into_iter().map(render).collect_view()}
        {move || {
            overlay
                .get()
                .map(|project| {
                    view! {
                        <ProjectModal
                            project
                            on_close=Callback::new(move |_| {
                                selection.maybe_update(Selection::deselect);
                            })
                        />
                    }
                })
        }}
    }
}
