use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, EventTarget};

use crate::dom;
use crate::error::HostError;

/// A registered DOM event listener.
///
/// The listener stays attached for as long as this value lives and is removed
/// when it is dropped, so hooks keep it inside their effect destructor.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl EventSubscription {
    pub fn subscribe<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, HostError>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);

        // Handlers never call preventDefault, let the browser scroll without waiting on us.
        let options = AddEventListenerOptions::new();
        options.set_passive(true);

        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| HostError::Listener {
                action: "add",
                event,
                message: format!("{:?}", err),
            })?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn on_window<F>(event: &'static str, handler: F) -> Result<Self, HostError>
    where
        F: FnMut() + 'static,
    {
        let window = dom::window()?;
        Self::subscribe(&window, event, handler)
    }

    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            let err = HostError::Listener {
                action: "remove",
                event: self.event,
                message: format!("{:?}", err),
            };
            warn!("{}", err);
        }
    }
}
