use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::window;

/// Runs `redraw` once window resize events settle.
///
/// The intensity charts are rendered into containers measured at draw time,
/// so a resize needs a full re-render. Browsers fire resize continuously
/// while the window is dragged; the redraw only runs after `delay_ms` passes
/// with no further events. Returns `None` outside a browser window context.
/// Dropping the listener cancels both it and any pending redraw.
pub fn on_resize_settled<F>(redraw: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let redraw = Rc::new(redraw);
    let window = window()?;

    Some(EventListener::new(&window, "resize", move |_| {
        let redraw = redraw.clone();
        // Replacing the handle cancels the previous countdown
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || redraw()));
    }))
}
