use super::*;
use crate::dev_utils::filled_form;

#[test]
fn field_names_should_match_payload_keys() {
    let names = Field::ALL.map(|field| field.name());
    assert_eq!(["name", "email", "subject", "message"], names);
}

#[test]
fn set_and_get_should_address_the_same_field() {
    let mut form = ContactForm::default();
    for field in Field::ALL {
        form.set(field, field.name().to_uppercase());
    }

    assert_eq!("NAME", form.name);
    assert_eq!("EMAIL", form.email);
    assert_eq!("SUBJECT", form.subject);
    assert_eq!("MESSAGE", form.message);
}

#[test]
fn completeness_should_require_every_field() {
    let complete = filled_form();
    assert!(complete.is_complete());
    assert!(complete.missing_fields().is_empty());

    for field in Field::ALL {
        let mut form = complete.clone();
        form.set(field, "");
        assert!(!form.is_complete(), "{field} empty should be incomplete");
        assert_eq!(vec![field], form.missing_fields());

        form.set(field, "  \n\t");
        assert!(!form.is_complete(), "{field} blank should be incomplete");
    }

    assert_eq!(Field::ALL.to_vec(), ContactForm::default().missing_fields());
}

#[test]
fn clear_should_empty_every_field() {
    let mut form = filled_form();
    form.clear();
    assert_eq!(ContactForm::default(), form);
}

#[test]
fn payload_should_use_field_names() {
    let form = filled_form();
    let payload = serde_json::to_value(&form).unwrap();
    let payload = payload.as_object().unwrap();

    assert_eq!(Field::ALL.len(), payload.len());
    for field in Field::ALL {
        assert_eq!(form.get(field), payload[field.name()].as_str().unwrap());
    }
}
