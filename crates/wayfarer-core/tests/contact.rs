use wayfarer_core::contact::{ContactField, ContactForm};

#[test]
fn valid_form_submits() {
    let form = ContactForm::new("  Ada ", "ada@example.com", "Looking forward to Kyoto!");
    assert!(form.validate().is_ok());
    let receipt = form.submit().unwrap();
    assert_eq!(receipt.name, "Ada");
    assert!(receipt.confirmation.contains("Ada"));
}

#[test]
fn empty_form_reports_every_field() {
    let errors = ContactForm::default().validate().unwrap_err();
    assert_eq!(errors.errors.len(), 3);
    assert_eq!(errors.get(ContactField::Name), Some("Name is required"));
    assert_eq!(errors.get(ContactField::Email), Some("Email is required"));
    assert_eq!(errors.get(ContactField::Message), Some("Message is required"));
}

#[test]
fn length_and_format_rules() {
    let errors = ContactForm::new("A", "not-an-email", "too short")
        .validate()
        .unwrap_err();
    assert_eq!(
        errors.get(ContactField::Name),
        Some("Name must be at least 2 characters")
    );
    assert_eq!(
        errors.get(ContactField::Email),
        Some("Please enter a valid email address")
    );
    assert_eq!(
        errors.get(ContactField::Message),
        Some("Message must be at least 10 characters")
    );
}

#[test]
fn email_pattern_edges() {
    let ok = |email: &str| ContactForm::new("Bo", email, "0123456789").validate().is_ok();
    assert!(ok("a@b.co"));
    assert!(ok("  first.last@sub.example.org  "));
    assert!(!ok("a@b"));
    assert!(!ok("a b@c.de"));
    assert!(!ok("a@@b.de"));
}

#[test]
fn whitespace_only_counts_as_missing() {
    let errors = ContactForm::new("   ", "ada@example.com", "          ")
        .validate()
        .unwrap_err();
    assert_eq!(errors.get(ContactField::Name), Some("Name is required"));
    assert_eq!(errors.get(ContactField::Email), None);
    assert_eq!(errors.get(ContactField::Message), Some("Message is required"));
}
