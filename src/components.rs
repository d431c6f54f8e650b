//! Presentational Yew components shared by the pages.
//!
//! Everything here renders from props or the locale context; the only
//! stateful pieces are the mobile menu toggle and the counter card, which
//! delegates to `use_counter`.

use crate::config::{
    COUNTER_DURATION_MS, GITHUB_URL, INSTAGRAM_URL, LINKEDIN_URL, PROFILE_IMAGE, REVEAL_THRESHOLD,
};
use crate::dictionary::{Project, SkillItems, Skills};
use crate::hooks::{use_counter, use_in_view};
use crate::i18n::use_i18n;
use crate::locale::Locale;
use crate::pages::Page;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

const TILE_COLORS: [&str; 6] = [
    "bg-orange-600/20",
    "bg-green-600/20",
    "bg-purple-600/20",
    "bg-blue-600/20",
    "bg-indigo-600/20",
    "bg-pink-600/20",
];
const TILE_ICONS: [&str; 6] = ["CN", "PX", "KA", "P4", "P5", "P6"];

const GITHUB_PATH: &str = "M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z";
const INSTAGRAM_PATH: &str = "M16 11.37A4 4 0 1112.63 8 4 4 0 0116 11.37z";
const LINKEDIN_PATH: &str = "M16 8a6 6 0 016 6v7h-4v-7a2 2 0 00-2-2 2 2 0 00-2 2v7h-4v-7a6 6 0 016-6zM2 9h4v12H2z";
const MENU_PATH: &str = "M4 6h16M4 12h16M4 18h16";

/// Background colour and monogram for the `idx`-th project tile.
/// Wraps around once the palette is exhausted.
pub fn project_tile(idx: usize) -> (&'static str, &'static str) {
    (
        TILE_COLORS[idx % TILE_COLORS.len()],
        TILE_ICONS[idx % TILE_ICONS.len()],
    )
}

/// Language dropdown. Disabled until the stored preference is loaded.
#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let i18n = use_i18n();

    if !i18n.is_ready {
        return html! {
            <select disabled={true} class="bg-dark-secondary text-gray-300 border border-white px-2 md:px-3 py-1 text-xs md:text-sm cursor-pointer opacity-50">
                <option>{ Locale::En.label() }</option>
            </select>
        };
    }

    let onchange = {
        let set_locale = i18n.set_locale.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_locale.emit(select.value());
        })
    };

    html! {
        <select
            aria-label={i18n.t.nav.language.clone()}
            {onchange}
            class="bg-dark-secondary text-white border border-white px-2 md:px-3 py-1 text-xs md:text-sm hover:border-gray-300 transition cursor-pointer font-semibold"
        >
            { for Locale::ALL.iter().map(|locale| html! {
                <option value={locale.as_str()} selected={*locale == i18n.locale}>
                    { locale.label() }
                </option>
            }) }
        </select>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub current: Page,
}

/// Fixed top bar with page links, language switcher and a mobile menu.
#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let i18n = use_i18n();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let links = [
        (Page::Home, &i18n.t.nav.home),
        (Page::Projects, &i18n.t.nav.projects),
        (Page::AboutMe, &i18n.t.nav.about_me),
    ];
    let link_class = |page: Page, base: &str| {
        if page == props.current {
            classes!(base.to_string(), "text-primary", "font-semibold")
        } else {
            classes!(base.to_string(), "text-gray-300", "hover:text-primary")
        }
    };

    html! {
        <nav class="fixed top-0 right-0 left-0 z-50 backdrop-blur-sm bg-dark-bg/95 border-b border-dark-tertiary">
            <div class="max-w-7xl mx-auto px-4 md:px-6 py-4 flex justify-between items-center">
                <a href={Page::Home.href()} class="text-lg md:text-xl font-bold text-primary hover:text-primary-light flex items-center gap-2">
                    <span>{ "⚫" }</span>
                    <span class="hidden sm:inline">{ "MID" }</span>
                </a>

                <div class="hidden md:flex gap-6 lg:gap-8 items-center">
                    { for links.iter().map(|(page, label)| html! {
                        <a href={page.href()} class={link_class(*page, "text-sm lg:text-base transition")}>
                            { format!("#{}", label) }
                        </a>
                    }) }
                    <LanguageSwitcher />
                </div>

                <button onclick={toggle_menu} class="md:hidden text-gray-300 hover:text-primary" aria-label="menu">
                    <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={MENU_PATH} />
                    </svg>
                </button>
            </div>

            if *menu_open {
                <div class="md:hidden bg-dark-secondary border-t border-dark-tertiary">
                    <div class="px-4 py-4 space-y-4">
                        { for links.iter().map(|(page, label)| html! {
                            <a href={page.href()} class={link_class(*page, "block transition")}>
                                { format!("#{}", label) }
                            </a>
                        }) }
                        <LanguageSwitcher />
                    </div>
                </div>
            }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct SocialLinksProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SocialLinks)]
pub fn social_links(props: &SocialLinksProps) -> Html {
    html! {
        <>
            <a href={GITHUB_URL} target="_blank" rel="noopener noreferrer" class={props.class.clone()}>
                <svg class="w-6 h-6" fill="currentColor" viewBox="0 0 24 24">
                    <path d={GITHUB_PATH} />
                </svg>
            </a>
            <a href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class={props.class.clone()}>
                <svg class="w-6 h-6" fill="currentColor" viewBox="0 0 24 24">
                    <rect x="2" y="2" width="20" height="20" rx="5" ry="5" fill="none" stroke="currentColor" stroke-width="2" />
                    <path d={INSTAGRAM_PATH} fill="currentColor" />
                    <circle cx="17.5" cy="6.5" r="1.5" fill="currentColor" />
                </svg>
            </a>
            <a href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer" class={props.class.clone()}>
                <svg class="w-6 h-6" fill="currentColor" viewBox="0 0 24 24">
                    <path d={LINKEDIN_PATH} />
                    <circle cx="4" cy="4" r="2" />
                </svg>
            </a>
        </>
    }
}

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    html! {
        <aside class="sidebar hidden md:flex md:fixed">
            <SocialLinks class={classes!("sidebar-icon")} />
        </aside>
    }
}

#[derive(Properties, PartialEq)]
pub struct DotGridProps {
    pub rows: usize,
    pub cols: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(classes!("w-1", "h-1", "bg-primary/40"))]
    pub cell: Classes,
}

/// Small grid of identical cells used as a corner ornament.
#[function_component(DotGrid)]
pub fn dot_grid(props: &DotGridProps) -> Html {
    html! {
        <div class={classes!("space-y-1", props.class.clone())}>
            { for (0..props.rows).map(|_| html! {
                <div class="flex gap-1">
                    { for (0..props.cols).map(|_| html! { <div class={props.cell.clone()}></div> }) }
                </div>
            }) }
        </div>
    }
}

/// Landing hero: headline, call to action and profile photo.
#[function_component(Hero)]
pub fn hero() -> Html {
    let i18n = use_i18n();
    let hero = &i18n.t.pages.home.hero;
    let gradient = "text-transparent bg-clip-text bg-gradient-to-r from-primary via-purple-400 to-primary-light";

    html! {
        <section class="pt-24 sm:pt-32 pb-12 sm:pb-20 px-4 sm:px-6 md:pl-20">
            <div class="max-w-7xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-6 md:gap-12 items-center relative">
                <div class="hidden md:block absolute top-20 right-32 w-32 h-32 border border-primary/20"></div>
                <div class="hidden md:block absolute top-40 right-20 w-20 h-20 border border-primary/20"></div>

                <div class="space-y-4 sm:space-y-6 z-10">
                    <h1 class="text-3xl sm:text-4xl md:text-5xl font-bold leading-tight">
                        <span class={gradient}>{ &hero.title1 }</span>
                        <br />
                        <span class={gradient}>{ &hero.title2 }</span>
                        <span class="text-gray-300">{ format!(" {}", hero.title3) }</span>
                        <br />
                        <span class={gradient}>{ &hero.title4 }</span>
                    </h1>
                    <p class="text-base sm:text-lg text-gray-300">{ &hero.description }</p>
                    <a href="#contacts" class="inline-block px-4 sm:px-6 py-2 border border-primary text-primary hover:bg-primary/10 transition text-sm sm:text-base">
                        { &hero.cta }
                    </a>
                    <div class="pt-2 sm:pt-4">
                        <div class="badge inline-flex items-center gap-2">
                            <div class="w-3 h-3 border border-accent-purple"></div>
                            <span class="text-xs sm:text-sm">{ &hero.status }</span>
                        </div>
                    </div>
                </div>

                <div class="relative h-64 sm:h-80 md:h-96 flex items-center justify-center">
                    <ProfilePhoto />
                    <DotGrid rows={4} cols={5} class={classes!("hidden", "sm:block", "absolute", "bottom-4", "right-4")} />
                </div>
            </div>
        </section>
    }
}

#[function_component(ProfilePhoto)]
pub fn profile_photo() -> Html {
    html! {
        <div class="w-full h-full bg-gradient-to-br from-accent-purple/20 via-primary/10 to-accent-purple/5 flex items-center justify-center overflow-hidden relative p-4">
            <div class="relative w-full h-full border-2 border-accent-purple/40 flex items-center justify-center bg-dark-bg/40">
                <img src={PROFILE_IMAGE} alt="Muhamad Irvan Dandung" class="object-contain object-center w-full h-full" />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterCardProps {
    pub target: u32,
    pub label: AttrValue,
}

/// `<n>+` figure that counts up the first time the card scrolls into view.
#[function_component(CounterCard)]
pub fn counter_card(props: &CounterCardProps) -> Html {
    let node = use_node_ref();
    let is_visible = use_in_view(node.clone(), REVEAL_THRESHOLD);
    let count = use_counter(props.target, COUNTER_DURATION_MS, is_visible);

    html! {
        <div ref={node} class="bg-dark-bg/80 border border-accent-purple/40 p-4 text-center">
            <div class="text-2xl font-bold text-accent-purple">{ format!("{}+", count) }</div>
            <div class="text-xs text-gray-400 mt-1">{ props.label.to_string() }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    pub index: usize,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let (color, icon) = project_tile(props.index);
    let project = &props.project;

    html! {
        <a href={project.link.clone()} class="project-card group cursor-pointer">
            <div class={classes!(color, "h-24", "sm:h-32", "mb-4", "flex", "items-center", "justify-center", "group-hover:brightness-110", "transition")}>
                <span class="text-lg sm:text-2xl font-bold text-gray-300">{ icon }</span>
            </div>
            <h3 class="text-base sm:text-xl font-semibold mb-2">{ &project.title }</h3>
            <p class="text-gray-300 text-xs sm:text-sm mb-3 sm:mb-4">{ &project.description }</p>
            <div class="flex flex-wrap gap-2">
                { for project.tags.iter().map(|tag| html! { <span class="badge">{ tag }</span> }) }
            </div>
        </a>
    }
}

/// Rows for the main skills table; shorter columns are padded with blanks.
pub fn skill_rows(items: &SkillItems) -> Vec<[&str; 3]> {
    let columns = [&items.languages, &items.databases, &items.tools];
    let height = columns.iter().map(|c| c.len()).max().unwrap_or(0);
    (0..height)
        .map(|row| columns.map(|column| column.get(row).map(String::as_str).unwrap_or("")))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct SkillsTablesProps {
    pub skills: Skills,
}

#[function_component(SkillsTables)]
pub fn skills_tables(props: &SkillsTablesProps) -> Html {
    let skills = &props.skills;

    html! {
        <div class="overflow-x-auto">
            <table class="skills-table text-xs sm:text-sm">
                <thead>
                    <tr>
                        <th>{ &skills.languages }</th>
                        <th>{ &skills.databases }</th>
                        <th class="hidden sm:table-cell">{ &skills.tools }</th>
                    </tr>
                </thead>
                <tbody>
                    { for skill_rows(&skills.items).into_iter().map(|[language, database, tool]| html! {
                        <tr>
                            <td>{ language }</td>
                            <td>{ database }</td>
                            <td class="hidden sm:table-cell">{ tool }</td>
                        </tr>
                    }) }
                </tbody>
            </table>

            <div class="mt-6 sm:mt-8">
                <h4 class="text-primary font-semibold mb-3 sm:mb-4 text-sm sm:text-base">{ &skills.other }</h4>
                <table class="skills-table text-xs sm:text-sm">
                    <thead>
                        <tr><th>{ &skills.frameworks }</th></tr>
                    </thead>
                    <tbody>
                        { for skills.items.frameworks.iter().map(|framework| html! {
                            <tr><td>{ framework }</td></tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Pixel-art ornaments. Each row is a left indent (in cells) followed by
/// the opacity of every cell, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ornament {
    Triangle,
    Diamond,
    Squares,
}

impl Ornament {
    pub fn rows(self) -> &'static [(u8, &'static [u8])] {
        match self {
            Ornament::Triangle => &[
                (0, &[40, 60, 40]),
                (0, &[60, 100, 80, 60]),
                (0, &[40, 60, 80, 60, 40]),
            ],
            Ornament::Diamond => &[
                (2, &[40]),
                (1, &[50, 60]),
                (0, &[60, 100, 60]),
                (1, &[50, 60]),
                (2, &[40]),
            ],
            Ornament::Squares => &[(0, &[50, 30]), (2, &[40]), (0, &[35, 50, 30])],
        }
    }

    fn wrapper_class(self) -> &'static str {
        match self {
            Ornament::Triangle => "opacity-40 hover:opacity-60",
            Ornament::Diamond => "opacity-30 hover:opacity-50",
            Ornament::Squares => "opacity-25 hover:opacity-45",
        }
    }

    fn cell_size(self) -> &'static str {
        match self {
            Ornament::Squares => "w-3 h-3",
            _ => "w-2 h-2",
        }
    }

    fn gap(self) -> &'static str {
        match self {
            Ornament::Squares => "gap-1",
            _ => "gap-0",
        }
    }
}

fn cell_color(opacity: u8) -> String {
    if opacity >= 100 {
        "bg-accent-purple".to_string()
    } else {
        format!("bg-accent-purple/{}", opacity)
    }
}

#[derive(Properties, PartialEq)]
pub struct PixelArtProps {
    pub ornament: Ornament,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(PixelArt)]
pub fn pixel_art(props: &PixelArtProps) -> Html {
    let ornament = props.ornament;
    html! {
        <div class={classes!("absolute", "pointer-events-none", "transition-opacity", ornament.wrapper_class(), props.class.clone())}>
            <div class={classes!("flex", "flex-col", ornament.gap())}>
                { for ornament.rows().iter().map(|(indent, cells)| html! {
                    <div class={classes!("flex", ornament.gap(), (*indent > 0).then(|| format!("ml-{}", indent)))}>
                        { for cells.iter().map(|opacity| html! {
                            <div class={classes!(ornament.cell_size(), cell_color(*opacity))}></div>
                        }) }
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let i18n = use_i18n();
    let footer = &i18n.t.footer;

    html! {
        <footer class="border-t border-dark-tertiary py-6 sm:py-8 px-4 sm:px-6 md:pl-20 mt-12 sm:mt-20">
            <div class="max-w-7xl mx-auto">
                <div class="flex flex-col sm:flex-row justify-between items-center gap-4 text-center sm:text-left text-xs sm:text-sm flex-wrap">
                    <div class="flex items-center gap-2 justify-center sm:justify-start">
                        <span>{ "⚫" }</span>
                        <p class="text-gray-500">{ &footer.email }</p>
                    </div>
                    <div class="text-gray-500">
                        <p>{ &footer.copyright }</p>
                    </div>
                    <div class="flex gap-4">
                        <SocialLinks class={classes!("text-gray-500", "hover:text-primary", "transition")} />
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(languages: &[&str], databases: &[&str], tools: &[&str]) -> SkillItems {
        let owned = |v: &[&str]| v.iter().map(|s| s.to_string()).collect();
        SkillItems {
            languages: owned(languages),
            databases: owned(databases),
            tools: owned(tools),
            frameworks: Vec::new(),
        }
    }

    #[test]
    fn skill_rows_pad_short_columns() {
        let skill_items = items(&["Rust", "Go", "PHP"], &["PostgreSQL"], &["Docker", "Git"]);
        let rows = skill_rows(&skill_items);
        assert_eq!(
            rows,
            vec![
                ["Rust", "PostgreSQL", "Docker"],
                ["Go", "", "Git"],
                ["PHP", "", ""],
            ]
        );
    }

    #[test]
    fn skill_rows_empty_when_no_items() {
        assert!(skill_rows(&items(&[], &[], &[])).is_empty());
    }

    #[test]
    fn project_tiles_wrap_around() {
        assert_eq!(project_tile(0), ("bg-orange-600/20", "CN"));
        assert_eq!(project_tile(5), ("bg-pink-600/20", "P6"));
        assert_eq!(project_tile(6), project_tile(0));
    }

    #[test]
    fn ornament_cells_map_to_tailwind_opacity() {
        assert_eq!(cell_color(100), "bg-accent-purple");
        assert_eq!(cell_color(40), "bg-accent-purple/40");
        for ornament in [Ornament::Triangle, Ornament::Diamond, Ornament::Squares] {
            assert!(ornament.rows().iter().all(|(_, cells)| !cells.is_empty()));
        }
    }
}
