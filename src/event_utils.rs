//! Window listeners typed through leptos event descriptors.

use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::window;
use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;

/// Listen for `event` on `window` with a passive listener. Dropping the
/// returned handle detaches it.
pub fn on_window<E>(event: E, mut handler: impl FnMut(E::EventType) + 'static) -> EventListener
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let options = EventListenerOptions::default();
    EventListener::new_with_options(&window(), event.name(), options, move |ev| {
        handler(ev.clone().unchecked_into::<E::EventType>());
    })
}
