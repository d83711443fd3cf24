//! Browser scheduling for an `Animator`: a `requestAnimationFrame` chain that
//! re-arms itself after every frame, plus a window `resize` listener.
//!
//! The chain is explicitly cancellable. `FrameLoop::stop` (also run on drop)
//! detaches the listener, cancels the pending frame request, stops the
//! animator and releases the self-referencing closure, so nothing touches the
//! canvas after teardown.

use crate::animator::{Animator, FrameStatus};
use crate::error::PageResult;
use crate::surface::Surface;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

type Callback = Closure<dyn FnMut()>;

pub struct FrameLoop<S: Surface + 'static> {
    window: Window,
    animator: Rc<RefCell<Animator<S>>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Callback>>>,
    on_resize: Option<Callback>,
}

impl<S: Surface + 'static> FrameLoop<S> {
    pub fn start(window: Window, animator: Animator<S>) -> PageResult<FrameLoop<S>> {
        let animator = Rc::new(RefCell::new(animator));
        let pending = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Callback>>> = Rc::new(RefCell::new(None));

        let callback = {
            let window = window.clone();
            let animator = Rc::clone(&animator);
            let pending = Rc::clone(&pending);
            let tick = Rc::clone(&tick);
            Closure::wrap(Box::new(move || {
                pending.set(None);
                if animator.borrow_mut().frame() == FrameStatus::Stopped {
                    // Breaks the closure's reference cycle once it returns
                    tick.borrow_mut().take();
                    return;
                }
                if let Some(callback) = tick.borrow().as_ref() {
                    match request_frame(&window, callback) {
                        Ok(id) => pending.set(Some(id)),
                        Err(err) => log::warn!("could not schedule next frame: {}", err),
                    }
                }
            }) as Box<dyn FnMut()>)
        };

        let on_resize = {
            let window = window.clone();
            let animator = Rc::clone(&animator);
            Closure::wrap(Box::new(move || match viewport_size(&window) {
                Ok((width, height)) => animator.borrow_mut().resize(width, height),
                Err(err) => log::warn!("ignoring resize: {}", err),
            }) as Box<dyn FnMut()>)
        };

        let first = request_frame(&window, &callback);
        *tick.borrow_mut() = Some(callback);
        let mut frame_loop = FrameLoop {
            window,
            animator,
            pending,
            tick,
            on_resize: None,
        };
        // From here on, an early return drops `frame_loop` and tears down whatever was set up
        frame_loop.pending.set(Some(first?));
        frame_loop
            .window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        frame_loop.on_resize = Some(on_resize);
        Ok(frame_loop)
    }

    /// Tear the loop down. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(on_resize) = self.on_resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        if let Ok(mut animator) = self.animator.try_borrow_mut() {
            animator.stop();
        }
        self.tick.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.animator.borrow().is_running()
    }

    pub fn with_animator<R>(&self, f: impl FnOnce(&Animator<S>) -> R) -> R {
        f(&self.animator.borrow())
    }
}

impl<S: Surface + 'static> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(window: &Window, callback: &Callback) -> PageResult<i32> {
    Ok(window.request_animation_frame(callback.as_ref().unchecked_ref())?)
}

/// Current `innerWidth` x `innerHeight` of the window.
pub fn viewport_size(window: &Window) -> PageResult<(f64, f64)> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}
