//! Display-refresh scheduling on top of `requestAnimationFrame`.
//!
//! An `AnimationFrameLoop` re-registers its callback after every frame until
//! the callback asks to stop or the loop is cancelled. Dropping the loop
//! cancels the pending frame, so an owner that goes away can never be
//! written to by a stale frame.

use log::{debug, warn};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// What a frame callback wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

struct LoopShared {
    request_id: Cell<Option<i32>>,
    running: Cell<bool>,
    closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopShared {
    fn schedule(&self) {
        let closure = self.closure.borrow();
        let Some(closure) = closure.as_ref() else {
            return;
        };
        match gloo_utils::window().request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => self.request_id.set(Some(id)),
            Err(err) => {
                warn!("requestAnimationFrame failed, stopping loop: {:?}", err);
                self.running.set(false);
            }
        }
    }
}

/// Handle to a running per-frame callback. Cancels on drop.
pub struct AnimationFrameLoop {
    shared: Rc<LoopShared>,
}

impl AnimationFrameLoop {
    /// Register `on_frame` for the next display frame. It receives the
    /// frame timestamp in milliseconds and is re-registered for as long as
    /// it returns `FrameControl::Continue`.
    pub fn start<F>(mut on_frame: F) -> Self
    where
        F: FnMut(f64) -> FrameControl + 'static,
    {
        let shared = Rc::new(LoopShared {
            request_id: Cell::new(None),
            running: Cell::new(true),
            closure: RefCell::new(None),
        });

        let weak: Weak<LoopShared> = Rc::downgrade(&shared);
        let closure = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            shared.request_id.set(None);
            if !shared.running.get() {
                return;
            }
            match on_frame(timestamp) {
                FrameControl::Continue => shared.schedule(),
                FrameControl::Stop => {
                    debug!("Animation frame loop finished");
                    shared.running.set(false);
                }
            }
        });

        *shared.closure.borrow_mut() = Some(closure);
        shared.schedule();
        Self { shared }
    }

    /// Cancel the pending frame, if any. Idempotent.
    pub fn cancel(&self) {
        self.shared.running.set(false);
        if let Some(id) = self.shared.request_id.take() {
            if let Err(err) = gloo_utils::window().cancel_animation_frame(id) {
                warn!("cancelAnimationFrame failed: {:?}", err);
            }
        }
    }
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        self.cancel();
        self.shared.closure.borrow_mut().take();
    }
}
