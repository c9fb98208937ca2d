use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub(crate) const LOADER_ID: &str = "loader";
pub(crate) const LOADER_PROGRESS_ID: &str = "loader--width-by-perc";
pub(crate) const LOADER_STATUS_ID: &str = "loader--status";

/// What the loader needs from the page it draws into.
pub(crate) trait ViewSink {
    fn set_visible(&mut self, visible: bool);
    fn set_width_percent(&mut self, percent: u64);
    fn set_status_text(&mut self, text: &str);
}

/// Presentation attributes of an addressable element of the page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Element {
    pub(crate) visible: bool,
    pub(crate) width_percent: u64,
    pub(crate) text: String,
}

pub(crate) type ElementHandle = Rc<RefCell<Element>>;

/// The elements the gui paints, looked up by id.
#[derive(Debug, Default)]
pub(crate) struct Page {
    elements: HashMap<String, ElementHandle>,
}

impl Page {
    /// The page containing the loader elements.
    pub(crate) fn loader_page() -> Self {
        let mut page = Self::default();
        page.register(LOADER_ID);
        page.register(LOADER_PROGRESS_ID);
        page.register(LOADER_STATUS_ID);
        page
    }

    pub(crate) fn register(&mut self, id: &str) -> ElementHandle {
        self.elements
            .entry(id.to_owned())
            .or_insert_with(|| Rc::new(RefCell::new(Element::default())))
            .clone()
    }

    pub(crate) fn get_element_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.elements.get(id).cloned()
    }

    /// Copy of the element attributes, for painting.
    pub(crate) fn snapshot(&self, id: &str) -> Option<Element> {
        self.elements.get(id).map(|element| element.borrow().clone())
    }
}

/// The three loader elements: container, bar and status line.
#[derive(Debug)]
pub(crate) struct LoaderView {
    container: ElementHandle,
    bar: ElementHandle,
    status: ElementHandle,
}

impl LoaderView {
    pub(crate) fn new(container: ElementHandle, bar: ElementHandle, status: ElementHandle) -> Self {
        Self {
            container,
            bar,
            status,
        }
    }
}

impl ViewSink for LoaderView {
    fn set_visible(&mut self, visible: bool) {
        self.container.borrow_mut().visible = visible;
    }

    fn set_width_percent(&mut self, percent: u64) {
        self.bar.borrow_mut().width_percent = percent;
    }

    fn set_status_text(&mut self, text: &str) {
        let mut status = self.status.borrow_mut();
        status.text.clear();
        status.text.push_str(text);
    }
}
