use leptos::ev;
use leptos::prelude::*;

/// Window-level pointer-down and key-down subscriptions owned by one widget
/// instance.
///
/// [`GlobalListeners::subscribe`] must be called from inside a component body:
/// the handles are released by that component's cleanup, so a widget never
/// leaves handlers behind after it unmounts and two widgets on the same page
/// each only see their own handlers.
pub struct GlobalListeners {
    handles: Vec<WindowListenerHandle>,
}

impl GlobalListeners {
    pub fn subscribe(
        on_pointer_down: impl Fn(web_sys::MouseEvent) + 'static,
        on_key_down: impl Fn(web_sys::KeyboardEvent) + 'static,
    ) {
        let listeners = Self {
            handles: vec![
                window_event_listener(ev::mousedown, on_pointer_down),
                window_event_listener(ev::keydown, on_key_down),
            ],
        };
        on_cleanup(move || listeners.unsubscribe());
    }

    pub fn unsubscribe(self) {
        for handle in self.handles {
            handle.remove();
        }
        log::debug!("MultiSelect: global listeners removed");
    }
}
