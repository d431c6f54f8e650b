//! Personal portfolio site built with Yew.
//!
//! The interesting behavior lives in three independent pieces:
//! - [`ticker`]: the spinner rotating in the browser tab title,
//! - [`counter`]: count-up figures that start once scrolled into view,
//! - [`locale`]: the English/Indonesian selection, persisted in local storage.
//!
//! They are plain state machines driven by timestamps and signals, bound to
//! the browser by [`hooks`] and [`i18n`]. Everything else is markup.

pub mod components;
pub mod config;
pub mod counter;
pub mod dictionary;
pub mod frame;
pub mod hooks;
pub mod i18n;
pub mod locale;
pub mod pages;
pub mod ticker;

use gloo_utils::window;
use i18n::I18nProvider;
use log::debug;
use pages::{Page, PageView};
use yew::prelude::*;

/// Root component: the locale provider around the page for the current path.
#[function_component(App)]
pub fn app() -> Html {
    let page = use_memo((), |_| {
        let path = window().location().pathname().unwrap_or_default();
        let page = Page::from_path(&path);
        debug!("Rendering {:?} for path '{}'", page, path);
        page
    });

    html! {
        <I18nProvider>
            <PageView page={*page} />
        </I18nProvider>
    }
}
