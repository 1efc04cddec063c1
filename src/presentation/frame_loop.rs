//! `requestAnimationFrame` driver.

use gloo::render::{AnimationFrame, request_animation_frame};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type PendingFrame = RefCell<Option<AnimationFrame>>;
type FrameCallback = Rc<RefCell<dyn FnMut(f64) -> bool>>;

/// Calls `on_frame` once per display frame until it returns `false`,
/// [`FrameLoop::stop`] is called or the loop is dropped.
pub struct FrameLoop {
    pending: Rc<PendingFrame>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start(on_frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let frame_loop = Self {
            pending: Rc::new(RefCell::new(None)),
            running: Rc::new(Cell::new(true)),
        };
        schedule(
            Rc::downgrade(&frame_loop.pending),
            frame_loop.running.clone(),
            Rc::new(RefCell::new(on_frame)),
        );
        frame_loop
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn stop(&self) {
        self.running.set(false);
        // Dropping the handle cancels the queued callback
        self.pending.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

// The queued callback only holds a weak reference to its own slot, so the
// slot, the handle and the closure never keep each other alive.
fn schedule(pending: Weak<PendingFrame>, running: Rc<Cell<bool>>, on_frame: FrameCallback) {
    let Some(slot) = pending.upgrade() else {
        return;
    };
    if !running.get() {
        return;
    }
    let handle = request_animation_frame(move |timestamp| {
        if !running.get() || pending.strong_count() == 0 {
            return;
        }
        let keep_going = (on_frame.borrow_mut())(timestamp);
        if !keep_going {
            running.set(false);
            return;
        }
        schedule(pending, running, on_frame);
    });
    *slot.borrow_mut() = Some(handle);
}
