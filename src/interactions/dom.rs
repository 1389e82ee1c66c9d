//! Best-effort browser helpers. Every lookup is guarded: a missing element
//! or detached DOM degrades to a silent no-op, surfacing at most a debug
//! line in the console.

/// Smooth-scroll the viewport to the element with `id`, leaving room for
/// the fixed navbar.
pub fn scroll_to_anchor(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        use crate::interactions::scroll;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(target) = document.get_element_by_id(id) else {
            log::debug!("no scroll target with id {id:?}");
            return;
        };
        let Ok(target) = target.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(scroll::anchor_scroll_top(f64::from(target.offset_top())));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Resolve a custom property from the document root's computed style.
pub fn css_variable(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let root = window.document()?.document_element()?;
        let style = window.get_computed_style(&root).ok().flatten()?;
        let value = style.get_property_value(name).ok()?;
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Write one inline style property, ignoring failures.
pub fn set_style(el: &web_sys::HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}
