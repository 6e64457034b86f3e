use super::super::state::{App, Notice};
use super::Effect;
use tracing::{debug, error};

impl App {
    pub(super) fn handle_contact_submit(&mut self, effects: &mut Vec<Effect>) {
        if self.contact.in_flight {
            debug!("Contact submission already in flight; ignoring");
            return;
        }
        self.contact.in_flight = true;
        self.notice = None;
        effects.push(Effect::SubmitContact(self.contact.form.clone()));
    }

    pub(super) fn handle_contact_submitted(&mut self, error: Option<String>) {
        self.contact.in_flight = false;
        match error {
            None => {
                debug!("Clearing contact form after delivery");
                self.contact.form.reset();
                self.notice = Some(Notice::Delivered);
            }
            Some(err) => {
                error!(error = %err, "Contact form submission failed");
                self.notice = Some(Notice::Failed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::test_support::build_test_app;
    use super::*;
    use crate::contact::{ContactForm, FAILURE_NOTICE, SUCCESS_NOTICE};

    fn filled_app() -> App {
        let mut app = build_test_app(3);
        app.reduce(Message::ContactNameChanged("Ada".to_string()));
        app.reduce(Message::ContactEmailChanged("ada@example.com".to_string()));
        app.reduce(Message::ContactMessageChanged("Hello".to_string()));
        app
    }

    #[test]
    fn submit_sends_a_snapshot_once() {
        let mut app = filled_app();
        let effects = app.reduce(Message::ContactSubmit);
        assert_eq!(
            effects,
            vec![Effect::SubmitContact(ContactForm {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hello".to_string(),
            })]
        );
        assert!(app.reduce(Message::ContactSubmit).is_empty());
    }

    #[test]
    fn delivery_clears_the_form_and_notifies() {
        let mut app = filled_app();
        app.reduce(Message::ContactSubmit);
        app.reduce(Message::ContactSubmitted { error: None });

        assert_eq!(app.contact.form, ContactForm::default());
        assert_eq!(app.notice.map(Notice::text), Some(SUCCESS_NOTICE));
        assert!(!app.contact.in_flight);

        app.reduce(Message::DismissNotice);
        assert!(app.notice.is_none());
    }

    #[test]
    fn server_error_keeps_what_the_user_typed() {
        let mut app = filled_app();
        app.reduce(Message::ContactSubmit);
        app.reduce(Message::ContactSubmitted {
            error: Some("Form endpoint rejected submission (500 Internal Server Error)".to_string()),
        });

        assert_eq!(app.contact.form.name, "Ada");
        assert_eq!(app.contact.form.message, "Hello");
        assert_eq!(app.notice.map(Notice::text), Some(FAILURE_NOTICE));
        assert!(!app.reduce(Message::ContactSubmit).is_empty());
    }
}
