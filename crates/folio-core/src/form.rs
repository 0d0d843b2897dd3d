//! Contact form gating and submission.

use crate::{
    config::MailConfig,
    dom::{ContactForm, SubmitControl},
    error::MailError,
    mail::{MailReceipt, MailRequest},
    toast::{Notifier, ToastKind},
};

/// Class marking a submission in flight.
pub const FORM_LOADING: &str = "form-loading";

pub const SENT_TITLE: &str = "Message Sent!";
pub const SENT_MESSAGE: &str = "Your message has been sent successfully! I'll get back to you soon.";
pub const FAILED_TITLE: &str = "Sending Failed";
pub const FAILED_MESSAGE: &str =
    "Failed to send message. Please try again or contact me directly via email.";

pub struct FormGateway<F, B> {
    form: F,
    submit: B,
    mail: MailConfig,
    submitting: bool,
}

impl<F: ContactForm, B: SubmitControl> FormGateway<F, B> {
    pub fn new(form: F, submit: B, mail: MailConfig) -> Self {
        Self {
            form,
            submit,
            mail,
            submitting: false,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Re-check the whole form after a keystroke. The submit control follows
    /// validity, except while a send is in flight. Returns validity.
    pub fn on_input(&self) -> bool {
        let valid = self.form.check_validity();
        if !self.submitting {
            self.submit.set_disabled(!valid);
        }
        valid
    }

    /// Snapshot the fields and enter the loading state. Returns `None` when
    /// a send is already in flight or the form is invalid.
    pub fn begin_submit(&mut self) -> Option<MailRequest> {
        if self.submitting {
            log::debug!("submit ignored: send already in flight");
            return None;
        }
        if !self.form.check_validity() {
            log::debug!("submit ignored: form invalid");
            return None;
        }

        let params = self.form.snapshot();
        self.form.add_class(FORM_LOADING);
        self.submit.set_disabled(true);
        self.submitting = true;

        Some(MailRequest::new(&self.mail, params))
    }

    /// Leave the loading state and report the outcome. Fields are reset
    /// only on success.
    pub fn finish_submit<N: Notifier>(
        &mut self,
        outcome: Result<MailReceipt, MailError>,
        toasts: &mut N,
    ) {
        self.form.remove_class(FORM_LOADING);
        self.submit.set_disabled(false);
        self.submitting = false;

        match outcome {
            Ok(receipt) => {
                log::info!("mail sent: {} {}", receipt.status, receipt.text);
                toasts.show_toast(SENT_MESSAGE, Some(SENT_TITLE), ToastKind::Success);
                self.form.reset();
            }
            Err(err) => {
                log::error!("mail failed: {err}");
                toasts.show_toast(FAILED_MESSAGE, Some(FAILED_TITLE), ToastKind::Error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mail::ContactFields,
        testing::{FakeForm, FakeNode, RecordingNotifier},
    };

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site".to_string(),
        }
    }

    fn gateway(fields: ContactFields) -> (FormGateway<FakeForm, FakeNode>, FakeForm, FakeNode) {
        let form = FakeForm::new(fields);
        let button = FakeNode::new().disabled();
        let gateway = FormGateway::new(form.clone(), button.clone(), MailConfig::default());
        (gateway, form, button)
    }

    #[test]
    fn test_input_toggles_submit() {
        let (gateway, form, button) = gateway(ContactFields::default());

        assert!(!gateway.on_input());
        assert!(button.is_disabled());

        form.set_fields(filled());
        assert!(gateway.on_input());
        assert!(!button.is_disabled());
    }

    #[test]
    fn test_begin_submit_enters_loading() {
        let (mut gateway, form, button) = gateway(filled());

        let request = gateway.begin_submit().expect("request");
        assert_eq!(request.template_params, filled());
        assert_eq!(request.service_id, "service_mcqdcm7");
        assert!(form.has_class(FORM_LOADING));
        assert!(button.is_disabled());

        assert!(gateway.begin_submit().is_none());

        // Keystrokes during the send keep the control disabled.
        gateway.on_input();
        assert!(button.is_disabled());
    }

    #[test]
    fn test_invalid_form_is_not_sent() {
        let (mut gateway, form, _) = gateway(ContactFields::default());

        assert!(gateway.begin_submit().is_none());
        assert!(!form.has_class(FORM_LOADING));
    }

    #[test]
    fn test_success_resets_fields() {
        let (mut gateway, form, button) = gateway(filled());
        let mut toasts = RecordingNotifier::default();

        gateway.begin_submit();
        gateway.finish_submit(
            Ok(MailReceipt {
                status: 200,
                text: "OK".to_string(),
            }),
            &mut toasts,
        );

        assert_eq!(form.fields(), ContactFields::default());
        assert!(!form.has_class(FORM_LOADING));
        assert!(!button.is_disabled());
        assert_eq!(toasts.titles(), vec![Some(SENT_TITLE.to_string())]);
        assert_eq!(toasts.kinds(), vec![ToastKind::Success]);
    }

    #[test]
    fn test_failure_keeps_fields() {
        let (mut gateway, form, button) = gateway(filled());
        let mut toasts = RecordingNotifier::default();

        gateway.begin_submit();
        gateway.finish_submit(
            Err(MailError::Network("offline".to_string())),
            &mut toasts,
        );

        assert_eq!(form.fields(), filled());
        assert!(!button.is_disabled());
        assert!(!gateway.is_submitting());
        assert_eq!(toasts.titles(), vec![Some(FAILED_TITLE.to_string())]);
        assert_eq!(toasts.kinds(), vec![ToastKind::Error]);
    }
}
