//! In-memory implementations of the capability traits.
//!
//! Handles share state through `Rc`, so a test can keep a clone of a node it
//! handed to a controller and inspect it afterwards.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
    time::Duration,
};

use crate::{
    config::ToastConfig,
    dom::{
        ClassList, ContactForm, Filterable, InlineStyle, ModalSlots, PageTarget, SubmitControl,
        TestimonialSource, TextContent,
    },
    error::{FolioError, Result},
    mail::ContactFields,
    schedule::TimerQueue,
    testimonial::TestimonialRecord,
    toast::{Notifier, ToastId, ToastKind, ToastNotifier, ToastTimer},
};

#[derive(Debug, Default)]
struct NodeState {
    classes: BTreeSet<String>,
    class_adds: BTreeMap<String, usize>,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    disabled: bool,
}

/// A fake element. Equality is identity, like DOM nodes.
#[derive(Debug, Clone, Default)]
pub struct FakeNode(Rc<RefCell<NodeState>>);

impl PartialEq for FakeNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FakeNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(self, name: &str) -> Self {
        self.0.borrow_mut().classes.insert(name.to_string());
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = text.to_string();
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attrs
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_style(self, property: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
        self
    }

    pub fn disabled(self) -> Self {
        self.0.borrow_mut().disabled = true;
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.0.borrow().classes.contains(name)
    }

    /// How many times `name` went from absent to present.
    pub fn class_ops(&self, name: &str) -> usize {
        self.0.borrow().class_adds.get(name).copied().unwrap_or(0)
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.get(name).cloned()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn is_disabled(&self) -> bool {
        self.0.borrow().disabled
    }
}

impl ClassList for FakeNode {
    fn add_class(&self, name: &str) {
        let mut state = self.0.borrow_mut();
        if state.classes.insert(name.to_string()) {
            *state.class_adds.entry(name.to_string()).or_default() += 1;
        }
    }

    fn remove_class(&self, name: &str) {
        self.0.borrow_mut().classes.remove(name);
    }

    fn has_class(&self, name: &str) -> bool {
        FakeNode::has_class(self, name)
    }
}

impl TextContent for FakeNode {
    fn text(&self) -> String {
        FakeNode::text(self)
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }
}

impl InlineStyle for FakeNode {
    fn style(&self, property: &str) -> Option<String> {
        FakeNode::style(self, property)
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }
}

impl Filterable for FakeNode {
    fn category(&self) -> Option<String> {
        self.attr("data-category")
    }
}

impl PageTarget for FakeNode {
    fn page_key(&self) -> Option<String> {
        self.attr("data-page")
    }
}

impl SubmitControl for FakeNode {
    fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }

    fn is_disabled(&self) -> bool {
        FakeNode::is_disabled(self)
    }
}

/// The contact form's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

/// A contact form whose constraints mirror the markup: every field
/// required, email shaped like `local@domain`.
#[derive(Debug, Clone, Default)]
pub struct FakeForm {
    fields: Rc<RefCell<ContactFields>>,
    node: FakeNode,
}

impl FakeForm {
    pub fn new(fields: ContactFields) -> Self {
        Self {
            fields: Rc::new(RefCell::new(fields)),
            node: FakeNode::new(),
        }
    }

    pub fn fields(&self) -> ContactFields {
        self.fields.borrow().clone()
    }

    pub fn set_fields(&self, fields: ContactFields) {
        *self.fields.borrow_mut() = fields;
    }

    /// Simulate typing into one field.
    pub fn type_into(&self, field: FormField, value: &str) {
        let mut fields = self.fields.borrow_mut();
        let slot = match field {
            FormField::Name => &mut fields.name,
            FormField::Email => &mut fields.email,
            FormField::Subject => &mut fields.subject,
            FormField::Message => &mut fields.message,
        };
        *slot = value.to_string();
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.node.has_class(name)
    }
}

fn email_shaped(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

impl ClassList for FakeForm {
    fn add_class(&self, name: &str) {
        self.node.add_class(name);
    }

    fn remove_class(&self, name: &str) {
        self.node.remove_class(name);
    }

    fn has_class(&self, name: &str) -> bool {
        self.node.has_class(name)
    }
}

impl ContactForm for FakeForm {
    fn check_validity(&self) -> bool {
        let fields = self.fields.borrow();
        !fields.name.is_empty()
            && !fields.subject.is_empty()
            && !fields.message.is_empty()
            && email_shaped(&fields.email)
    }

    fn snapshot(&self) -> ContactFields {
        self.fields()
    }

    fn reset(&self) {
        self.set_fields(ContactFields::default());
    }
}

/// A testimonial item, or one whose markup is broken.
#[derive(Debug, Clone)]
pub enum FakeTestimonial {
    Item(TestimonialRecord),
    Broken(String),
}

impl FakeTestimonial {
    pub fn new(record: TestimonialRecord) -> Self {
        Self::Item(record)
    }

    /// An item missing the element matched by `selector`.
    pub fn broken(selector: &str) -> Self {
        Self::Broken(selector.to_string())
    }
}

impl TestimonialSource for FakeTestimonial {
    fn record(&self) -> Result<TestimonialRecord> {
        match self {
            FakeTestimonial::Item(record) => Ok(record.clone()),
            FakeTestimonial::Broken(selector) => Err(FolioError::missing(selector.as_str())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeModalSlots(Rc<RefCell<Option<TestimonialRecord>>>);

impl FakeModalSlots {
    /// Record most recently copied into the slots.
    pub fn shown(&self) -> Option<TestimonialRecord> {
        self.0.borrow().clone()
    }
}

impl ModalSlots for FakeModalSlots {
    fn fill(&self, record: &TestimonialRecord) {
        *self.0.borrow_mut() = Some(record.clone());
    }
}

/// Remembers every toast request.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub shown: Vec<(String, Option<String>, ToastKind)>,
}

impl RecordingNotifier {
    pub fn titles(&self) -> Vec<Option<String>> {
        self.shown.iter().map(|(_, title, _)| title.clone()).collect()
    }

    pub fn kinds(&self) -> Vec<ToastKind> {
        self.shown.iter().map(|(_, _, kind)| *kind).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn show_toast(&mut self, message: &str, title: Option<&str>, kind: ToastKind) -> ToastId {
        self.shown
            .push((message.to_string(), title.map(str::to_string), kind));
        ToastId(self.shown.len() as u64)
    }
}

/// A real [`ToastNotifier`] running on virtual time.
#[derive(Debug, Clone)]
pub struct ScheduledToasts {
    pub notifier: ToastNotifier,
    pub queue: TimerQueue<ToastTimer>,
}

impl ScheduledToasts {
    pub fn new(config: &ToastConfig) -> Self {
        Self {
            notifier: ToastNotifier::new(config),
            queue: TimerQueue::new(),
        }
    }

    /// Move virtual time forward, firing due toast timers.
    pub fn advance(&mut self, by: Duration) {
        let notifier = &mut self.notifier;
        self.queue.advance(by, |timer| notifier.handle(timer));
    }
}

impl Notifier for ScheduledToasts {
    fn show_toast(&mut self, message: &str, title: Option<&str>, kind: ToastKind) -> ToastId {
        let (id, commands) = self.notifier.show(message, title, kind);
        self.queue.apply(commands);
        id
    }
}
