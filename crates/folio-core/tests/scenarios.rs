//! End-to-end scenarios for the page controllers.
//!
//! These drive the controllers the way the browser does, with in-memory
//! nodes and virtual time.

use std::time::Duration;

use folio_core::{
    ContactFields, FolioConfig, FormGateway, MailError, MailReceipt, TestimonialModal,
    TestimonialRecord, ToastKind,
    form::{FAILED_TITLE, SENT_TITLE},
    testing::{FakeForm, FakeModalSlots, FakeNode, FakeTestimonial, FormField, ScheduledToasts},
};

fn filled() -> ContactFields {
    ContactFields {
        name: "Jane".to_string(),
        email: "jane@example.com".to_string(),
        subject: "Project".to_string(),
        message: "Let's talk".to_string(),
    }
}

fn contact_gateway(
    fields: ContactFields,
) -> (FormGateway<FakeForm, FakeNode>, FakeForm, FakeNode) {
    let config = FolioConfig::default();
    let form = FakeForm::new(fields);
    let button = FakeNode::new().disabled();
    let gateway = FormGateway::new(form.clone(), button.clone(), config.mail);
    (gateway, form, button)
}

#[test]
fn test_testimonial_opens_modal() {
    let container = FakeNode::new();
    let overlay = FakeNode::new();
    let slots = FakeModalSlots::default();
    let modal = TestimonialModal::new(container.clone(), overlay.clone(), slots.clone());

    let item = FakeTestimonial::new(TestimonialRecord {
        avatar_url: "a.jpg".to_string(),
        avatar_alt: "Jane".to_string(),
        title_html: "Jane".to_string(),
        text_html: "Great work".to_string(),
    });
    modal.open_from(&item).expect("open");

    let shown = slots.shown().expect("slots filled");
    assert_eq!(shown.avatar_url, "a.jpg");
    assert_eq!(shown.title_html, "Jane");
    assert_eq!(shown.text_html, "Great work");
    assert!(container.has_class("active"));
    assert!(overlay.has_class("active"));

    // Overlay click closes both.
    modal.toggle();
    assert!(!container.has_class("active"));
    assert!(!overlay.has_class("active"));
}

#[test]
fn test_invalid_email_keeps_submit_disabled() {
    let (gateway, form, button) = contact_gateway(ContactFields::default());

    for (field, value) in [
        (FormField::Name, "Jane"),
        (FormField::Subject, "Hi"),
        (FormField::Message, "Hello"),
        (FormField::Email, "x"),
    ] {
        form.type_into(field, value);
        gateway.on_input();
    }
    assert!(button.is_disabled());

    form.type_into(FormField::Email, "x@y.com");
    gateway.on_input();
    assert!(!button.is_disabled());
}

#[test]
fn test_successful_send_resets_form() {
    let (mut gateway, form, button) = contact_gateway(filled());
    let mut toasts = ScheduledToasts::new(&FolioConfig::default().toast);

    let request = gateway.begin_submit().expect("valid form");
    assert_eq!(request.template_params.name, "Jane");
    assert!(button.is_disabled());
    assert!(form.has_class("form-loading"));

    gateway.finish_submit(
        Ok(MailReceipt {
            status: 200,
            text: "OK".to_string(),
        }),
        &mut toasts,
    );

    let toast = &toasts.notifier.toasts()[0];
    assert_eq!(toast.title.as_deref(), Some(SENT_TITLE));
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(form.fields(), ContactFields::default());
    assert!(!button.is_disabled());
    assert!(!form.has_class("form-loading"));

    toasts.advance(Duration::from_millis(10));
    assert!(toasts.notifier.toasts()[0].shown);
}

#[test]
fn test_failed_send_keeps_values() {
    let (mut gateway, form, button) = contact_gateway(filled());
    let mut toasts = ScheduledToasts::new(&FolioConfig::default().toast);

    gateway.begin_submit().expect("valid form");
    gateway.finish_submit(
        Err(MailError::Status {
            status: 400,
            text: "The user_id parameter is required".to_string(),
        }),
        &mut toasts,
    );

    let toast = &toasts.notifier.toasts()[0];
    assert_eq!(toast.title.as_deref(), Some(FAILED_TITLE));
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(form.fields(), filled());
    assert!(!button.is_disabled());

    // No automatic retry: a second send needs a new submit.
    assert!(!gateway.is_submitting());
    assert!(gateway.begin_submit().is_some());
}

#[test]
fn test_failure_toast_detaches_on_schedule() {
    let (mut gateway, _, _) = contact_gateway(filled());
    let mut toasts = ScheduledToasts::new(&FolioConfig::default().toast);

    gateway.begin_submit();
    gateway.finish_submit(Err(MailError::Network("offline".to_string())), &mut toasts);

    toasts.advance(Duration::from_millis(5000));
    assert!(toasts.notifier.toasts()[0].hiding);

    toasts.advance(Duration::from_millis(300));
    assert!(toasts.notifier.toasts().is_empty());
}
