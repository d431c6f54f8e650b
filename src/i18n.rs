//! Session-wide locale context for Yew components.

use crate::dictionary::Dictionary;
use crate::locale::{BrowserStorage, Locale, LocaleStore};
use yew::prelude::*;

/// What every consumer of the locale context sees.
#[derive(Clone, PartialEq)]
pub struct I18nContext {
    pub locale: Locale,
    pub t: &'static Dictionary,
    pub is_ready: bool,
    /// Takes a raw tag such as `"id"`. Unsupported tags are ignored.
    pub set_locale: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct I18nProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the `LocaleStore` for the whole session and hands it down.
#[function_component(I18nProvider)]
pub fn i18n_provider(props: &I18nProviderProps) -> Html {
    let store = use_state(LocaleStore::new);

    // Effects run after the first paint, so the persisted tag is only read
    // once the shell is on screen.
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            let mut hydrated = (*store).clone();
            hydrated.hydrate(&BrowserStorage);
            store.set(hydrated);
        });
    }

    let set_locale = {
        let store = store.clone();
        Callback::from(move |tag: String| {
            let mut next = (*store).clone();
            if next.set_locale_tag(&tag, &BrowserStorage).is_ok() {
                store.set(next);
            }
        })
    };

    let context = I18nContext {
        locale: store.locale(),
        t: store.dictionary(),
        is_ready: store.is_ready(),
        set_locale,
    };

    html! {
        <ContextProvider<I18nContext> {context}>
            { props.children.clone() }
        </ContextProvider<I18nContext>>
    }
}

/// Read the locale context.
///
/// # Panics
/// Panics when called outside an `I18nProvider`: that is a wiring bug and
/// would otherwise render blank text.
#[hook]
pub fn use_i18n() -> I18nContext {
    require_i18n(use_context::<I18nContext>())
}

/// Unwrap a looked-up context, panicking when there is no provider above.
pub fn require_i18n(context: Option<I18nContext>) -> I18nContext {
    match context {
        Some(context) => context,
        None => panic!("use_i18n must be used within I18nProvider"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::dictionary_for;

    fn context(is_ready: bool) -> I18nContext {
        I18nContext {
            locale: Locale::Id,
            t: dictionary_for(Locale::Id),
            is_ready,
            set_locale: Callback::noop(),
        }
    }

    #[test]
    #[should_panic(expected = "within I18nProvider")]
    fn missing_provider_is_a_fault() {
        require_i18n(None);
    }

    #[test]
    fn provided_context_passes_through() {
        let provided = require_i18n(Some(context(true)));
        assert_eq!(provided.locale, Locale::Id);
        assert!(provided.is_ready);
        assert_eq!(provided.t.nav.projects, "proyek");
    }
}
