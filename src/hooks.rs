use crate::counter::RevealCounter;
use crate::frame::{AnimationFrameLoop, FrameControl};
use crate::ticker::TitleTicker;
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Spin the document title while the calling component is mounted.
///
/// A new `page_name` tears down the running ticker and starts a fresh one.
#[hook]
pub fn use_title_animation(page_name: &str) {
    use_effect_with(page_name.to_string(), move |page_name| {
        let ticker = Rc::new(RefCell::new(TitleTicker::new(page_name.as_str())));

        let frame_loop = {
            let ticker = ticker.clone();
            AnimationFrameLoop::start(move |timestamp| {
                title_frame(&mut ticker.borrow_mut(), timestamp, |title| {
                    gloo_utils::document().set_title(title)
                })
            })
        };

        move || {
            ticker.borrow_mut().cancel();
            drop(frame_loop);
        }
    });
}

/// One display frame of the title loop. Writes through `set_title` only
/// while the ticker is active, and stops the loop once it is cancelled.
fn title_frame(
    ticker: &mut TitleTicker,
    timestamp: f64,
    set_title: impl FnOnce(&str),
) -> FrameControl {
    if ticker.is_cancelled() {
        return FrameControl::Stop;
    }
    if let Some(title) = ticker.on_frame(timestamp) {
        set_title(&title);
    }
    FrameControl::Continue
}

/// Count from 0 to `target` over `duration_ms` once `is_visible` first
/// turns true. Returns the value to display.
#[hook]
pub fn use_counter(target: u32, duration_ms: u32, is_visible: bool) -> u32 {
    let counter = use_mut_ref(|| RevealCounter::new(target, duration_ms));
    let frame_loop = use_mut_ref(|| None::<AnimationFrameLoop>);
    let value = use_state_eq(|| 0u32);

    {
        let counter = counter.clone();
        let frame_loop = frame_loop.clone();
        let value = value.clone();
        use_effect_with(is_visible, move |&is_visible| {
            let started = counter.borrow_mut().on_visibility(is_visible);
            if started {
                let counter = counter.clone();
                let value = value.clone();
                *frame_loop.borrow_mut() = Some(AnimationFrameLoop::start(move |timestamp| {
                    let mut counter = counter.borrow_mut();
                    let control = counter.on_frame(timestamp);
                    value.set(counter.value());
                    control
                }));
            } else {
                value.set(counter.borrow().value());
            }
        });
    }

    // Unmount only: drop whatever frame is still pending.
    use_effect_with((), move |_| {
        move || {
            frame_loop.borrow_mut().take();
        }
    });

    *value
}

/// Report whether `node` has ever crossed `threshold` of its area into the
/// viewport. Latches at `true` and stops observing.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with(node, move |node| {
            let observer = node
                .cast::<web_sys::Element>()
                .and_then(|element| observe_once(&element, threshold, in_view.clone()));
            if observer.is_none() {
                // Nothing to watch: reveal rather than stay hidden forever.
                in_view.set(true);
            }

            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        });
    }

    *in_view
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn observe_once(
    element: &web_sys::Element,
    threshold: f64,
    in_view: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = ObserverCallback::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let revealed = any_intersecting(entries.iter().map(|entry| {
                entry
                    .unchecked_into::<IntersectionObserverEntry>()
                    .is_intersecting()
            }));
            if revealed {
                in_view.set(true);
                observer.disconnect();
            }
        },
    );

    // The observer only fires at `threshold`; the reported ratio can land a
    // hair below it, so the ratio is not checked again.
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable: {:?}", err);
            None
        }
    }
}

fn any_intersecting(entries: impl IntoIterator<Item = bool>) -> bool {
    entries.into_iter().any(|is_intersecting| is_intersecting)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_frames_write_until_cancelled() {
        let mut ticker = TitleTicker::new("home");
        let mut titles = Vec::new();

        let control = title_frame(&mut ticker, 501.0, |t| titles.push(t.to_string()));
        assert_eq!(control, FrameControl::Continue);
        assert_eq!(titles, ["/ home | Dandung"]);

        ticker.cancel();
        for timestamp in [1_002.0, 1_503.0, 5_000.0] {
            let control = title_frame(&mut ticker, timestamp, |t| titles.push(t.to_string()));
            assert_eq!(control, FrameControl::Stop);
        }
        assert_eq!(titles.len(), 1);
    }

    #[test]
    fn throttled_frames_keep_the_loop_alive() {
        let mut ticker = TitleTicker::new("projects");
        let mut writes = 0;
        assert_eq!(title_frame(&mut ticker, 16.0, |_| writes += 1), FrameControl::Continue);
        assert_eq!(writes, 0);
    }

    #[test]
    fn any_intersecting_entry_reveals() {
        assert!(any_intersecting([true]));
        assert!(any_intersecting([false, true]));
        assert!(!any_intersecting([false, false]));
        assert!(!any_intersecting([]));
    }
}
