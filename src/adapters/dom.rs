//! Browser wiring over `web-sys`.
//!
//! Call `installFormEnhancer()` once the document has been parsed (for example
//! from a module script after `init()` resolves). Every handler runs to
//! completion on the UI thread, so shared state only needs `Rc<RefCell<_>>`.

use crate::core::enhancer::FormEnhancer;
use crate::core::submenu::SubmenuController;
use crate::domain::model::{FieldEvent, FieldKind, SubmenuItem, SubmenuView};
use crate::domain::ports::{FieldHost, SidebarHost};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
};

enum Control {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl Control {
    fn find(document: &Document, id: &str) -> Option<Self> {
        let element = document.get_element_by_id(id)?;
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Control::Input(input)),
            Err(element) => element.dyn_into::<HtmlTextAreaElement>().ok().map(Control::TextArea),
        }
    }

    fn value(&self) -> String {
        match self {
            Control::Input(e) => e.value(),
            Control::TextArea(e) => e.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Control::Input(e) => e.set_value(value),
            Control::TextArea(e) => e.set_value(value),
        }
    }

    fn read_only(&self) -> bool {
        match self {
            Control::Input(e) => e.read_only(),
            Control::TextArea(e) => e.read_only(),
        }
    }

    fn target(&self) -> &EventTarget {
        match self {
            Control::Input(e) => e.as_ref(),
            Control::TextArea(e) => e.as_ref(),
        }
    }
}

struct DomFields {
    document: Document,
}

impl FieldHost for DomFields {
    fn value(&self, id: &str) -> Option<String> {
        Control::find(&self.document, id).map(|c| c.value())
    }

    fn set_value(&mut self, id: &str, value: &str) {
        if let Some(control) = Control::find(&self.document, id) {
            control.set_value(value);
        }
    }

    fn is_read_only(&self, id: &str) -> bool {
        Control::find(&self.document, id)
            .map(|c| c.read_only())
            .unwrap_or(false)
    }
}

struct DomSidebar {
    items: Vec<Element>,
}

impl SidebarHost for DomSidebar {
    fn submenu_count(&self) -> usize {
        self.items.len()
    }

    fn render_submenu(&mut self, view: &SubmenuView) {
        let Some(item) = self.items.get(view.index) else {
            return;
        };

        if let Some(menu) = query_html(item, ".submenu") {
            if let Err(e) = menu.style().set_property("display", view.display()) {
                tracing::warn!("Submenu {}: could not set display: {:?}", view.index, e);
            }
        }
        if let Some(arrow) = query_html(item, ".submenu-arrow") {
            if let Err(e) = arrow.style().set_property("transform", view.arrow_transform()) {
                tracing::warn!("Submenu {}: could not rotate arrow: {:?}", view.index, e);
            }
        }

        let classes = item.class_list();
        let toggled = if view.parent_active {
            classes.add_1(SubmenuView::ACTIVE_CLASS)
        } else {
            classes.remove_1(SubmenuView::ACTIVE_CLASS)
        };
        if let Err(e) = toggled {
            tracing::warn!("Submenu {}: could not update classList: {:?}", view.index, e);
        }
    }
}

fn query_html(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

#[wasm_bindgen(js_name = installFormEnhancer)]
pub fn install() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    install_fields(&document)?;
    install_sidebar(&document)?;
    Ok(())
}

fn install_fields(document: &Document) -> Result<(), JsValue> {
    let mut enhancer = FormEnhancer::default();
    enhancer.attach(&DomFields {
        document: document.clone(),
    });
    let enhancer = Rc::new(enhancer);

    for rule in enhancer.bindings().to_vec() {
        let Some(control) = Control::find(document, &rule.id) else {
            continue;
        };

        let events: &[&str] = match rule.kind {
            FieldKind::Numeric => &["input", "blur"],
            _ => &["input"],
        };

        for kind in events {
            let enhancer = Rc::clone(&enhancer);
            let document = document.clone();
            let event = match *kind {
                "blur" => FieldEvent::Blur { id: rule.id.clone() },
                _ => FieldEvent::Input { id: rule.id.clone() },
            };

            listen(control.target(), kind, move |_: Event| {
                let mut host = DomFields {
                    document: document.clone(),
                };
                enhancer.handle(&mut host, &event);
            })?;
        }
    }

    Ok(())
}

fn install_sidebar(document: &Document) -> Result<(), JsValue> {
    let nodes = document.query_selector_all(".has-submenu")?;
    let mut elements = Vec::new();
    let mut markers = Vec::new();

    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let active_link = element.query_selector(".submenu a.active")?.is_some();
        markers.push(SubmenuItem {
            label: element.id(),
            active_link,
        });
        elements.push(element);
    }

    let controller = SubmenuController::on_load(&markers);
    let toggles: Vec<Option<Element>> = elements
        .iter()
        .map(|e| e.query_selector(".submenu-toggle").ok().flatten())
        .collect();

    let shared = Rc::new(RefCell::new((controller, DomSidebar { items: elements })));
    {
        let mut guard = shared.borrow_mut();
        let (controller, sidebar) = &mut *guard;
        controller.apply(sidebar);
    }

    for (index, toggle) in toggles.into_iter().enumerate() {
        let Some(toggle) = toggle else {
            continue;
        };
        let shared = Rc::clone(&shared);

        listen(&toggle, "click", move |event: Event| {
            let mut guard = shared.borrow_mut();
            let (controller, sidebar) = &mut *guard;
            let transition = controller.toggle(index);
            if transition.prevents_default() {
                event.prevent_default();
            }
            controller.apply(sidebar);
        })?;
    }

    Ok(())
}
