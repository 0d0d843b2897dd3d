#![cfg(target_arch = "wasm32")]

use std::{cell::RefCell, rc::Rc, time::Duration};

use folio_core::{
    Command, ContactFields, FilterController, FolioConfig, FolioError, FormGateway, MailError,
    MailReceipt, MailRequest, MailTransport, PageNavigator,
    dom::{ClassList, ContactForm, InlineStyle, SubmitControl, TextContent},
};
use folio_ui::{
    MailClient,
    node::{ContactFormElement, ElementNode, by_id, query, query_all},
    timers::{Fire, TimerDriver},
    wiring::{listen, pressed_button},
};
use js_sys::Promise;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document_with(markup: &str) -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(markup);
    document
}

/// Resolves after `ms` milliseconds of real time.
async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

const CONTACT_FORM: &str = r#"
    <form data-form>
      <input type="text" id="fullname" required data-form-input>
      <input type="email" id="email" required data-form-input>
      <input type="text" id="subject" required data-form-input>
      <textarea id="message" required data-form-input></textarea>
      <button type="submit" data-form-btn disabled>Send</button>
    </form>
"#;

fn fill_contact_form(document: &Document, email: &str) {
    for (id, value) in [("fullname", "Jane"), ("email", email), ("subject", "Hi")] {
        by_id::<HtmlInputElement>(document, id).unwrap().set_value(value);
    }
    by_id::<HtmlTextAreaElement>(document, "message")
        .unwrap()
        .set_value("Hello");
}

fn sample_request() -> MailRequest {
    MailRequest::new(
        &FolioConfig::default().mail,
        ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site".to_string(),
        },
    )
}

#[wasm_bindgen_test]
fn element_node_tracks_classes_and_styles() {
    let document = document_with(r#"<div class="skill-progress-fill" style="--target-width: 80%"></div>"#);
    let bar = query(&document, ".skill-progress-fill").unwrap();

    assert_eq!(bar.style("--target-width").as_deref(), Some("80%"));
    bar.add_class("animated");
    assert!(bar.has_class("animated"));
    assert!(!bar.toggle_class("animated"));
}

#[wasm_bindgen_test]
fn query_reports_missing_selector() {
    let document = document_with("<main></main>");

    match query(&document, "[data-sidebar]") {
        Err(FolioError::MissingElement { selector }) => assert_eq!(selector, "[data-sidebar]"),
        other => panic!("expected missing element, got {other:?}"),
    }
}

#[wasm_bindgen_test]
fn filter_hides_items_outside_category() {
    let document = document_with(
        r#"
        <button data-select><div data-selecct-value>Select category</div></button>
        <button data-select-item>All</button>
        <button data-select-item>Web design</button>
        <button data-filter-btn>All</button>
        <button data-filter-btn>Web design</button>
        <li data-filter-item data-category="web design" class="active"></li>
        <li data-filter-item data-category="applications" class="active"></li>
        "#,
    );
    let mut filter = FilterController::new(
        query(&document, "[data-select]").unwrap(),
        query(&document, "[data-selecct-value]").unwrap(),
        query_all(&document, "[data-select-item]").unwrap(),
        query_all(&document, "[data-filter-btn]").unwrap(),
        query_all(&document, "[data-filter-item]").unwrap(),
    );

    filter.click_button(1);

    let items = query_all(&document, "[data-filter-item]").unwrap();
    assert!(items[0].has_class("active"));
    assert!(!items[1].has_class("active"));
    assert_eq!(
        query(&document, "[data-selecct-value]").unwrap().text(),
        "Web design"
    );
}

#[wasm_bindgen_test]
fn navigation_activates_matching_page() {
    let document = document_with(
        r#"
        <button data-nav-link class="active">About</button>
        <button data-nav-link>Resume</button>
        <article data-page="about" class="active"></article>
        <article data-page="resume"></article>
        "#,
    );
    let links = query_all(&document, "[data-nav-link]").unwrap();
    let pages = query_all(&document, "[data-page]").unwrap();
    let navigator = PageNavigator::new(links.clone(), pages.clone());

    let outcome = navigator.navigate(1);

    assert_eq!(outcome.active, Some(1));
    assert!(outcome.scroll_to_top);
    assert!(pages[1].has_class("active") && links[1].has_class("active"));
    assert!(!pages[0].has_class("active") && !links[0].has_class("active"));
}

#[wasm_bindgen_test]
fn element_node_equality_is_identity() {
    let document = document_with("<p></p><p></p>");
    let nodes = query_all(&document, "p").unwrap();

    assert_eq!(nodes[0], ElementNode(nodes[0].element().clone()));
    assert_ne!(nodes[0], nodes[1]);
}

#[wasm_bindgen_test]
fn invalid_class_token_is_not_applied() {
    let document = document_with("<div></div>");
    let node = query(&document, "div").unwrap();

    node.add_class("two words");
    node.remove_class("");

    assert!(!node.has_class("two words"));
    assert_eq!(node.element().class_name(), "");
}

#[wasm_bindgen_test]
fn click_on_button_descendant_resolves_button() {
    let document = document_with(
        r#"<button id="send"><span id="label">Send</span></button><p id="plain">text</p>"#,
    );
    let pressed = Rc::new(RefCell::new(Vec::new()));
    {
        let pressed = Rc::clone(&pressed);
        listen(&document, "click", move |event| {
            pressed.borrow_mut().push(pressed_button(&event).map(|b| b.id()));
        })
        .unwrap();
    }

    by_id::<HtmlElement>(&document, "label").unwrap().click();
    by_id::<HtmlElement>(&document, "plain").unwrap().click();

    assert_eq!(
        *pressed.borrow(),
        vec![Some("send".to_string()), None::<String>]
    );
}

#[wasm_bindgen_test]
async fn timer_driver_honours_cancel_and_follow_ups() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let fire: Fire<u8> = {
        let fired = Rc::clone(&fired);
        Rc::new(move |timer| {
            fired.borrow_mut().push(timer);
            if timer == 2 {
                vec![Command::schedule(Duration::from_millis(5), 3)]
            } else {
                Vec::new()
            }
        })
    };
    let driver = TimerDriver::new();

    driver.apply(
        vec![
            Command::schedule(Duration::from_millis(10), 1),
            Command::schedule(Duration::from_millis(10), 2),
            Command::Cancel(1),
            // Rescheduling replaces the pending timeout.
            Command::schedule(Duration::from_millis(10), 4),
            Command::schedule(Duration::from_millis(20), 4),
        ],
        &fire,
    );
    sleep(100).await;

    let mut seen = fired.borrow().clone();
    seen.sort();
    assert_eq!(seen, vec![2, 3, 4]);
}

#[wasm_bindgen_test]
fn contact_form_uses_native_constraints() {
    let document = document_with(CONTACT_FORM);
    let form = ContactFormElement::resolve(&document).unwrap();

    assert!(!form.check_validity());

    fill_contact_form(&document, "x");
    assert!(!form.check_validity());

    fill_contact_form(&document, "x@y.com");
    assert!(form.check_validity());
    assert_eq!(
        form.snapshot(),
        ContactFields {
            name: "Jane".to_string(),
            email: "x@y.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    );

    form.reset();
    assert_eq!(form.snapshot(), ContactFields::default());
}

#[wasm_bindgen_test]
fn gateway_enables_submit_on_valid_markup() {
    let document = document_with(CONTACT_FORM);
    let form = ContactFormElement::resolve(&document).unwrap();
    let button = query(&document, "[data-form-btn]").unwrap();
    let gateway = FormGateway::new(form, button.clone(), FolioConfig::default().mail);

    fill_contact_form(&document, "not-an-email");
    assert!(!gateway.on_input());
    assert!(button.is_disabled());

    fill_contact_form(&document, "jane@example.com");
    assert!(gateway.on_input());
    assert!(!button.is_disabled());
    assert!(!button.element().has_attribute("disabled"));
}

#[wasm_bindgen_test]
fn mail_client_requires_key_or_page_sdk() {
    js_sys::eval("delete globalThis.emailjs").unwrap();

    match MailClient::for_config(&FolioConfig::default().mail) {
        Err(FolioError::Config { message }) => assert!(message.contains("public_key")),
        other => panic!("expected config error, got {other:?}"),
    }

    let keyed = folio_core::config::MailConfig {
        public_key: "pk_live".to_string(),
        ..FolioConfig::default().mail
    };
    assert!(matches!(
        MailClient::for_config(&keyed),
        Ok(MailClient::Rest(_))
    ));
}

#[wasm_bindgen_test]
async fn page_sdk_delivers_and_reports_rejections() {
    js_sys::eval(
        r#"globalThis.emailjs = {
            send: (service, template, params) => params.subject === "reject"
                ? Promise.reject({ status: 412, text: "bad template" })
                : Promise.resolve({ status: 200, text: "OK " + service + " " + params.email }),
        };"#,
    )
    .unwrap();

    let client = MailClient::for_config(&FolioConfig::default().mail).unwrap();
    assert!(matches!(client, MailClient::PageSdk(_)));

    let receipt = client.send(&sample_request()).await.unwrap();
    assert_eq!(
        receipt,
        MailReceipt {
            status: 200,
            text: "OK service_mcqdcm7 ada@example.com".to_string(),
        }
    );

    let mut rejected = sample_request();
    rejected.template_params.subject = "reject".to_string();
    assert_eq!(
        client.send(&rejected).await,
        Err(MailError::Status {
            status: 412,
            text: "bad template".to_string(),
        })
    );

    js_sys::eval("delete globalThis.emailjs").unwrap();
}
