//! `IntersectionObserver` wrapper implementing [`Observer`].

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::PageError;
use crate::observer::{IntersectionEntry, Observer, ObserverOptions};

type BatchCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Handle to a live browser observer.
pub struct ObserverHandle(IntersectionObserver);

impl Observer<Element> for ObserverHandle {
    fn observe(&mut self, target: &Element) {
        self.0.observe(target);
    }

    fn unobserve(&mut self, target: &Element) {
        self.0.unobserve(target);
    }

    fn disconnect(&mut self) {
        self.0.disconnect();
    }
}

/// An observer plus the callback it invokes. Disconnects on drop.
pub struct IntersectionWatcher {
    handle: ObserverHandle,
    _callback: BatchCallback,
}

impl IntersectionWatcher {
    /// Create an observer that hands each batch to `on_batch` in delivery order.
    pub fn new<F>(options: &ObserverOptions, mut on_batch: F) -> Result<Self, PageError>
    where
        F: FnMut(Vec<IntersectionEntry<Element>>, &mut ObserverHandle) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|value| {
                    value
                        .dyn_ref::<IntersectionObserverEntry>()
                        .map(|entry| IntersectionEntry::new(entry.target(), entry.is_intersecting()))
                })
                .collect();
            let mut handle = ObserverHandle(observer);
            on_batch(batch, &mut handle);
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        if !options.root_margin.is_empty() {
            init.set_root_margin(&options.root_margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| PageError::js("IntersectionObserver::new", &err))?;

        Ok(Self { handle: ObserverHandle(observer), _callback: callback })
    }

    pub fn handle(&mut self) -> &mut ObserverHandle {
        &mut self.handle
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        self.handle.disconnect();
    }
}
