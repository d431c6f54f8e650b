//! Translation dictionaries, one per locale, embedded at build time.
//!
//! Both files under `locales/` deserialize into the same `Dictionary`
//! shape, so a key missing from one of them is caught by the tests rather
//! than discovered on screen. If the Indonesian file ever fails to parse
//! the whole English dictionary is served instead.

use crate::locale::Locale;
use log::warn;
use once_cell::sync::Lazy;
use serde::Deserialize;

const EN_SOURCE: &str = include_str!("../locales/en.json");
const ID_SOURCE: &str = include_str!("../locales/id.json");

static EN: Lazy<Dictionary> =
    Lazy::new(|| parse_dictionary(EN_SOURCE).expect("embedded en dictionary must be valid"));

static ID: Lazy<Option<Dictionary>> = Lazy::new(|| match parse_dictionary(ID_SOURCE) {
    Ok(dictionary) => Some(dictionary),
    Err(e) => {
        warn!("id dictionary is invalid, falling back to en: {}", e);
        None
    }
});

pub fn parse_dictionary(source: &str) -> Result<Dictionary, serde_json::Error> {
    serde_json::from_str(source)
}

/// The dictionary for `locale`, or English when it is unavailable.
pub fn dictionary_for(locale: Locale) -> &'static Dictionary {
    match locale {
        Locale::En => &*EN,
        Locale::Id => match &*ID {
            Some(dictionary) => dictionary,
            None => &*EN,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dictionary {
    pub nav: Nav,
    pub pages: Pages,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nav {
    pub home: String,
    pub projects: String,
    pub about_me: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pages {
    pub home: HomePage,
    pub projects: ProjectsPage,
    pub about_me: AboutMePage,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HomePage {
    pub hero: Hero,
    pub quote: Quote,
    pub projects: ProjectHighlights,
    pub skills: Skills,
    pub about: About,
    pub contacts: Contacts,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hero {
    pub title1: String,
    pub title2: String,
    pub title3: String,
    pub title4: String,
    pub description: String,
    pub cta: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectHighlights {
    pub title: String,
    pub view_all: String,
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skills {
    pub title: String,
    pub languages: String,
    pub databases: String,
    pub tools: String,
    pub other: String,
    pub frameworks: String,
    pub items: SkillItems,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillItems {
    pub languages: Vec<String>,
    pub databases: Vec<String>,
    pub tools: Vec<String>,
    pub frameworks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub title: String,
    pub intro: String,
    pub description1: String,
    pub description2: String,
    pub read_more: String,
    pub stats: Vec<Stat>,
}

/// A headline number rendered by a counter card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub target: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contacts {
    pub title: String,
    pub interested: String,
    pub description: String,
    pub message_here: String,
    pub discord: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectsPage {
    pub title: String,
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutMePage {
    pub title: String,
    pub greeting: String,
    pub bio1: String,
    pub bio2: String,
    pub bio3: String,
    pub download_resume: String,
    pub education: String,
    pub self_taught: String,
    pub online_courses: String,
    pub modern_web: String,
    pub modern_web_desc: String,
    pub experience: String,
    pub freelance_developer: String,
    pub freelance_dates: String,
    pub web_projects: String,
    pub web_projects_desc: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Footer {
    pub email: String,
    pub copyright: String,
}
