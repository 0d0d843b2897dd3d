//! `web_sys` implementations of the core capability traits.

use folio_core::{
    ContactFields, FolioError, Result, TestimonialRecord,
    dom::{
        ClassList, ContactForm, Filterable, InlineStyle, ModalSlots, PageTarget, SubmitControl,
        TestimonialSource, TextContent,
    },
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlImageElement, HtmlInputElement,
    HtmlTextAreaElement,
};

use crate::selectors;

/// Convert a thrown JavaScript value into a core error.
pub fn js_error(err: JsValue) -> FolioError {
    FolioError::js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// First element matching `selector`, or a missing element error.
pub fn query(document: &Document, selector: &str) -> Result<ElementNode> {
    document
        .query_selector(selector)
        .map_err(js_error)?
        .map(ElementNode)
        .ok_or_else(|| FolioError::missing(selector))
}

/// First descendant of `parent` matching `selector`.
pub fn query_in(parent: &Element, selector: &str) -> Result<Element> {
    parent
        .query_selector(selector)
        .map_err(js_error)?
        .ok_or_else(|| FolioError::missing(selector))
}

/// Every element matching `selector`, in document order. May be empty.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<ElementNode>> {
    let list = document.query_selector_all(selector).map_err(js_error)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(ElementNode)
        .collect())
}

/// Element by id, cast to the expected type.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| FolioError::missing(format!("#{id}")))
}

/// A page element. Equality is identity.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode(pub Element);

impl ElementNode {
    pub fn element(&self) -> &Element {
        &self.0
    }

    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }
}

impl ClassList for ElementNode {
    fn add_class(&self, name: &str) {
        if let Err(err) = self.0.class_list().add_1(name) {
            log::warn!("add class {name}: {err:?}");
        }
    }

    fn remove_class(&self, name: &str) {
        if let Err(err) = self.0.class_list().remove_1(name) {
            log::warn!("remove class {name}: {err:?}");
        }
    }

    fn has_class(&self, name: &str) -> bool {
        self.0.class_list().contains(name)
    }
}

impl TextContent for ElementNode {
    fn text(&self) -> String {
        match self.html() {
            Some(html) => html.inner_text(),
            None => self.0.text_content().unwrap_or_default(),
        }
    }

    fn set_text(&self, text: &str) {
        match self.html() {
            Some(html) => html.set_inner_text(text),
            None => self.0.set_text_content(Some(text)),
        }
    }
}

impl InlineStyle for ElementNode {
    fn style(&self, property: &str) -> Option<String> {
        self.html()
            .and_then(|html| html.style().get_property_value(property).ok())
            .filter(|value| !value.is_empty())
    }

    fn set_style(&self, property: &str, value: &str) {
        let Some(html) = self.html() else {
            return;
        };
        if let Err(err) = html.style().set_property(property, value) {
            log::warn!("set {property}: {err:?}");
        }
    }
}

impl Filterable for ElementNode {
    fn category(&self) -> Option<String> {
        self.0.get_attribute(selectors::CATEGORY_ATTR)
    }
}

impl PageTarget for ElementNode {
    fn page_key(&self) -> Option<String> {
        self.0.get_attribute(selectors::PAGE_ATTR)
    }
}

impl SubmitControl for ElementNode {
    fn set_disabled(&self, disabled: bool) {
        let result = if disabled {
            self.0.set_attribute("disabled", "")
        } else {
            self.0.remove_attribute("disabled")
        };
        if let Err(err) = result {
            log::warn!("set disabled={disabled}: {err:?}");
        }
    }

    fn is_disabled(&self) -> bool {
        self.0.has_attribute("disabled")
    }
}

/// A testimonial list item.
#[derive(Debug, Clone)]
pub struct TestimonialItem(pub Element);

impl TestimonialSource for TestimonialItem {
    fn record(&self) -> Result<TestimonialRecord> {
        let avatar = query_in(&self.0, selectors::TESTIMONIAL_AVATAR)?;
        let title = query_in(&self.0, selectors::TESTIMONIAL_TITLE)?;
        let text = query_in(&self.0, selectors::TESTIMONIAL_TEXT)?;

        let (avatar_url, avatar_alt) = match avatar.dyn_ref::<HtmlImageElement>() {
            Some(img) => (img.src(), img.alt()),
            None => (
                avatar.get_attribute("src").unwrap_or_default(),
                avatar.get_attribute("alt").unwrap_or_default(),
            ),
        };

        Ok(TestimonialRecord {
            avatar_url,
            avatar_alt,
            title_html: title.inner_html(),
            text_html: text.inner_html(),
        })
    }
}

/// Image, title and body slots of the testimonial modal.
#[derive(Debug, Clone)]
pub struct ModalView {
    pub image: HtmlImageElement,
    pub title: Element,
    pub text: Element,
}

impl ModalView {
    pub fn resolve(document: &Document) -> Result<Self> {
        let image = query(document, selectors::MODAL_IMG)?
            .0
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| FolioError::missing(format!("img{}", selectors::MODAL_IMG)))?;
        Ok(Self {
            image,
            title: query(document, selectors::MODAL_TITLE)?.0,
            text: query(document, selectors::MODAL_TEXT)?.0,
        })
    }
}

impl ModalSlots for ModalView {
    fn fill(&self, record: &TestimonialRecord) {
        self.image.set_src(&record.avatar_url);
        self.image.set_alt(&record.avatar_alt);
        self.title.set_inner_html(&record.title_html);
        self.text.set_inner_html(&record.text_html);
    }
}

/// A single-line input or a textarea.
#[derive(Debug, Clone)]
enum Field {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl Field {
    fn resolve(document: &Document, id: &str) -> Result<Self> {
        if let Ok(input) = by_id::<HtmlInputElement>(document, id) {
            return Ok(Field::Input(input));
        }
        by_id::<HtmlTextAreaElement>(document, id).map(Field::TextArea)
    }

    fn value(&self) -> String {
        match self {
            Field::Input(input) => input.value(),
            Field::TextArea(area) => area.value(),
        }
    }
}

/// The contact form and the fields it submits.
#[derive(Debug, Clone)]
pub struct ContactFormElement {
    form: HtmlFormElement,
    name: Field,
    email: Field,
    subject: Field,
    message: Field,
}

impl ContactFormElement {
    pub fn resolve(document: &Document) -> Result<Self> {
        let form = query(document, selectors::FORM)?
            .0
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| FolioError::missing(format!("form{}", selectors::FORM)))?;

        Ok(Self {
            form,
            name: Field::resolve(document, selectors::FIELD_NAME)?,
            email: Field::resolve(document, selectors::FIELD_EMAIL)?,
            subject: Field::resolve(document, selectors::FIELD_SUBJECT)?,
            message: Field::resolve(document, selectors::FIELD_MESSAGE)?,
        })
    }

    pub fn element(&self) -> &HtmlFormElement {
        &self.form
    }
}

impl ClassList for ContactFormElement {
    fn add_class(&self, name: &str) {
        if let Err(err) = self.form.class_list().add_1(name) {
            log::warn!("add class {name}: {err:?}");
        }
    }

    fn remove_class(&self, name: &str) {
        if let Err(err) = self.form.class_list().remove_1(name) {
            log::warn!("remove class {name}: {err:?}");
        }
    }

    fn has_class(&self, name: &str) -> bool {
        self.form.class_list().contains(name)
    }
}

impl ContactForm for ContactFormElement {
    fn check_validity(&self) -> bool {
        self.form.check_validity()
    }

    fn snapshot(&self) -> ContactFields {
        ContactFields {
            name: self.name.value(),
            email: self.email.value(),
            subject: self.subject.value(),
            message: self.message.value(),
        }
    }

    fn reset(&self) {
        self.form.reset();
    }
}
