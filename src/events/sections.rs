use crate::constants::SECTION_ATTR;
use backdrop_core::SharedSections;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// `IntersectionObserver` feeding visibility ratios into a `SectionTracker`.
pub struct SectionObserver {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
}

fn entry_observation(entry: JsValue) -> Option<(String, f32)> {
    let entry = entry.dyn_into::<web::IntersectionObserverEntry>().ok()?;
    let id = entry.target().get_attribute(SECTION_ATTR)?;
    Some((id, entry.intersection_ratio() as f32))
}

impl SectionObserver {
    pub fn observe(
        elements: &[web::Element],
        tracker: SharedSections,
    ) -> anyhow::Result<Self> {
        let threshold = tracker.state().threshold();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                let batch: Vec<(String, f32)> =
                    entries.iter().filter_map(entry_observation).collect();
                tracker.observe(batch.iter().map(|(id, ratio)| (id.as_str(), *ratio)));
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let options = web::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold as f64));
        let observer = web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
        for el in elements {
            observer.observe(el);
        }
        log::info!(
            "[sections] observing {} sections at threshold {}",
            elements.len(),
            threshold
        );
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
