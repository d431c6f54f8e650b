//! Page-level components. Each page spins the tab title while mounted and
//! renders nothing until the stored language has been loaded.

use crate::components::{
    CounterCard, DotGrid, Footer, Hero, Navigation, Ornament, PixelArt, ProfilePhoto, ProjectCard,
    Sidebar, SkillsTables,
};
use crate::hooks::use_title_animation;
use crate::i18n::use_i18n;
use yew::prelude::*;

/// The pages served by the static host. All paths load the same bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Projects,
    AboutMe,
}

impl Page {
    /// Pick the page for a location path. Unknown paths show the home page.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/').trim_end_matches(".html") {
            "/projects" => Page::Projects,
            "/about-me" => Page::AboutMe,
            _ => Page::Home,
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Projects => "/projects",
            Page::AboutMe => "/about-me",
        }
    }

    /// Name shown in the spinning tab title.
    pub fn title_name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Projects => "projects",
            Page::AboutMe => "about-me",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PageViewProps {
    pub page: Page,
}

#[function_component(PageView)]
pub fn page_view(props: &PageViewProps) -> Html {
    match props.page {
        Page::Home => html! { <HomePage /> },
        Page::Projects => html! { <ProjectsPage /> },
        Page::AboutMe => html! { <AboutMePage /> },
    }
}

const SECTION: &str = "py-12 sm:py-20 px-4 sm:px-6 md:pl-20";

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let i18n = use_i18n();
    use_title_animation(Page::Home.title_name());

    if !i18n.is_ready {
        return html! {};
    }
    let home = &i18n.t.pages.home;

    html! {
        <main class="min-h-screen bg-dark-bg">
            <Sidebar />
            <Navigation current={Page::Home} />
            <Hero />

            <section class={SECTION}>
                <div class="max-w-7xl mx-auto">
                    <div class="max-w-2xl ml-auto relative">
                        <PixelArt ornament={Ornament::Triangle} class={classes!("-top-6", "-left-10")} />
                        <div class="quote-box text-center text-sm sm:text-base md:text-2xl">
                            <p class="font-mono text-gray-300 mb-2 sm:mb-4">{ format!("\"{}\"", home.quote.text) }</p>
                            <p class="text-primary text-right text-sm md:text-base">{ format!("- {}", home.quote.author) }</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="projects" class={SECTION}>
                <div class="max-w-7xl mx-auto">
                    <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4 mb-8 sm:mb-12">
                        <h2 class="section-title mb-0 text-2xl sm:text-3xl">{ format!("#{}", home.projects.title) }</h2>
                        <a href={Page::Projects.href()} class="text-primary hover:text-primary-light text-xs sm:text-sm whitespace-nowrap">
                            { &home.projects.view_all }
                        </a>
                    </div>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6">
                        { for home.projects.items.iter().enumerate().map(|(index, project)| html! {
                            <ProjectCard project={project.clone()} {index} />
                        }) }
                    </div>
                </div>
            </section>

            <section class={SECTION}>
                <div class="max-w-7xl mx-auto">
                    <h2 class="section-title text-2xl sm:text-3xl">{ format!("#{}", home.skills.title) }</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 sm:gap-8">
                        <div class="hidden md:block relative h-64">
                            <PixelArt ornament={Ornament::Diamond} class={classes!("top-0", "left-0")} />
                            <PixelArt ornament={Ornament::Squares} class={classes!("top-24", "left-12")} />
                            <PixelArt ornament={Ornament::Triangle} class={classes!("bottom-0", "left-20")} />
                        </div>
                        <SkillsTables skills={home.skills.clone()} />
                    </div>
                </div>
            </section>

            <section id="about" class={SECTION}>
                <div class="max-w-7xl mx-auto">
                    <h2 class="section-title text-2xl sm:text-3xl">{ format!("#{}", home.about.title) }</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 sm:gap-12 items-center">
                        <div class="space-y-3 sm:space-y-4 order-2 md:order-1">
                            <p class="text-gray-300 text-sm sm:text-base">{ &home.about.intro }</p>
                            <p class="text-gray-400 leading-relaxed text-xs sm:text-sm md:text-base">{ &home.about.description1 }</p>
                            <p class="text-gray-400 leading-relaxed text-xs sm:text-sm md:text-base">{ &home.about.description2 }</p>
                            <div class="grid grid-cols-3 gap-3 sm:gap-4 pt-2">
                                { for home.about.stats.iter().map(|stat| html! {
                                    <CounterCard target={stat.target} label={stat.label.clone()} />
                                }) }
                            </div>
                            <a href={Page::AboutMe.href()} class="inline-block px-4 sm:px-6 py-2 border border-primary text-primary hover:bg-primary/10 transition text-xs sm:text-sm md:text-base">
                                { &home.about.read_more }
                            </a>
                        </div>
                        <div class="relative h-64 sm:h-80 md:h-96 order-1 md:order-2">
                            <ProfilePhoto />
                            <DotGrid rows={4} cols={5} class={classes!("hidden", "sm:block", "absolute", "top-4", "right-4")} />
                            <DotGrid rows={3} cols={3}
                                class={classes!("hidden", "sm:block", "absolute", "bottom-4", "right-4")}
                                cell={classes!("w-2", "h-2", "border", "border-primary/40")} />
                        </div>
                    </div>
                </div>
            </section>

            <section id="contacts" class={SECTION}>
                <div class="max-w-7xl mx-auto">
                    <h2 class="section-title text-2xl sm:text-3xl">{ format!("#{}", home.contacts.title) }</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 sm:gap-12">
                        <div class="space-y-2 sm:space-y-4">
                            <p class="text-gray-300 text-sm sm:text-base">{ &home.contacts.interested }</p>
                            <p class="text-gray-400 text-xs sm:text-sm md:text-base">{ &home.contacts.description }</p>
                        </div>
                        <div class="border border-dark-tertiary p-4 sm:p-6 bg-dark-secondary/50">
                            <p class="text-primary font-semibold mb-3 sm:mb-4 text-sm sm:text-base">{ &home.contacts.message_here }</p>
                            <div class="space-y-2">
                                <p class="text-gray-400 text-xs sm:text-sm">
                                    <span class="text-primary">{ "💬 " }</span>{ &home.contacts.discord }
                                </p>
                                <p class="text-gray-400 text-xs sm:text-sm">
                                    <span class="text-primary">{ "✉️ " }</span>
                                    <a href={format!("mailto:{}", home.contacts.email)}>{ &home.contacts.email }</a>
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <Footer />
        </main>
    }
}

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    let i18n = use_i18n();
    use_title_animation(Page::Projects.title_name());

    if !i18n.is_ready {
        return html! {};
    }
    let projects = &i18n.t.pages.projects;

    html! {
        <main class="min-h-screen bg-dark-bg">
            <Navigation current={Page::Projects} />
            <section class="pt-24 sm:pt-32 pb-12 sm:pb-20 px-4 sm:px-6 md:pl-20">
                <div class="max-w-7xl mx-auto">
                    <h1 class="section-title text-3xl sm:text-4xl md:text-5xl mb-12">{ &projects.title }</h1>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6">
                        { for projects.items.iter().enumerate().map(|(index, project)| html! {
                            <ProjectCard project={project.clone()} {index} />
                        }) }
                    </div>
                </div>
            </section>
            <Footer />
        </main>
    }
}

#[function_component(AboutMePage)]
pub fn about_me_page() -> Html {
    let i18n = use_i18n();
    use_title_animation(Page::AboutMe.title_name());

    if !i18n.is_ready {
        return html! {};
    }
    let about = &i18n.t.pages.about_me;

    let entry = |title: &str, detail: &str| {
        html! {
            <div>
                <p class="font-semibold text-sm sm:text-base">{ title.to_string() }</p>
                <p class="text-gray-300 text-xs sm:text-sm">{ detail.to_string() }</p>
            </div>
        }
    };

    html! {
        <main class="min-h-screen bg-dark-bg">
            <Navigation current={Page::AboutMe} />
            <section class="pt-24 sm:pt-32 pb-12 sm:pb-20 px-4 sm:px-6 md:pl-20">
                <div class="max-w-7xl mx-auto">
                    <h1 class="section-title text-3xl sm:text-4xl md:text-5xl mb-12">{ &about.title }</h1>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 sm:gap-12 items-center">
                        <div class="space-y-3 sm:space-y-4 order-2 md:order-1">
                            <p class="text-gray-300 text-sm sm:text-base font-semibold">{ &about.greeting }</p>
                            <p class="text-gray-300 leading-relaxed text-xs sm:text-sm md:text-base">{ &about.bio1 }</p>
                            <p class="text-gray-300 leading-relaxed text-xs sm:text-sm md:text-base">{ &about.bio2 }</p>
                            <p class="text-gray-300 leading-relaxed text-xs sm:text-sm md:text-base">{ &about.bio3 }</p>
                            <button class="px-4 sm:px-6 py-2 border border-primary text-primary hover:bg-primary/10 transition text-xs sm:text-sm md:text-base">
                                { &about.download_resume }
                            </button>
                        </div>
                        <div class="relative h-64 sm:h-80 md:h-96 order-1 md:order-2">
                            <ProfilePhoto />
                            <PixelArt ornament={Ornament::Diamond} class={classes!("-bottom-4", "-left-4")} />
                        </div>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8 sm:gap-12 mt-16 sm:mt-20">
                        <div>
                            <h2 class="text-xl sm:text-2xl font-semibold mb-4 sm:mb-6 text-primary">{ format!("# {}", about.education) }</h2>
                            <div class="space-y-4">
                                { entry(&about.self_taught, &about.online_courses) }
                                { entry(&about.modern_web, &about.modern_web_desc) }
                            </div>
                        </div>
                        <div>
                            <h2 class="text-xl sm:text-2xl font-semibold mb-4 sm:mb-6 text-primary">{ format!("# {}", about.experience) }</h2>
                            <div class="space-y-4">
                                { entry(&about.freelance_developer, &about.freelance_dates) }
                                { entry(&about.web_projects, &about.web_projects_desc) }
                            </div>
                        </div>
                    </div>
                </div>
            </section>
            <Footer />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::dictionary_for;
    use crate::i18n::I18nContext;
    use crate::locale::Locale;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        page: Page,
        is_ready: bool,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let context = I18nContext {
            locale: Locale::En,
            t: dictionary_for(Locale::En),
            is_ready: props.is_ready,
            set_locale: Callback::noop(),
        };
        html! {
            <ContextProvider<I18nContext> {context}>
                <PageView page={props.page} />
            </ContextProvider<I18nContext>>
        }
    }

    fn render(page: Page, is_ready: bool) -> String {
        let renderer =
            LocalServerRenderer::<Harness>::with_props(HarnessProps { page, is_ready });
        block_on(renderer.hydratable(false).render())
    }

    const PAGES: [Page; 3] = [Page::Home, Page::Projects, Page::AboutMe];

    #[test]
    fn pages_render_nothing_until_ready() {
        for page in PAGES {
            let html = render(page, false);
            assert!(html.trim().is_empty(), "{:?} rendered {}", page, html);
        }
    }

    #[test]
    fn ready_pages_render_their_content() {
        let t = dictionary_for(Locale::En);
        let home = render(Page::Home, true);
        assert!(home.contains("<main"));
        assert!(home.contains(&t.pages.home.quote.author));

        let projects = render(Page::Projects, true);
        for project in &t.pages.projects.items {
            assert!(projects.contains(&project.title), "missing {}", project.title);
        }

        let about = render(Page::AboutMe, true);
        assert!(about.contains(&format!("# {}", t.pages.about_me.education)));
    }

    #[test]
    fn paths_select_pages() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/projects"), Page::Projects);
        assert_eq!(Page::from_path("/projects/"), Page::Projects);
        assert_eq!(Page::from_path("/about-me.html"), Page::AboutMe);
        assert_eq!(Page::from_path("/nowhere"), Page::Home);
    }

    #[test]
    fn hrefs_resolve_back_to_their_page() {
        for page in [Page::Home, Page::Projects, Page::AboutMe] {
            assert_eq!(Page::from_path(page.href()), page);
        }
    }
}
