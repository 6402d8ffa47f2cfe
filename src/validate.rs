//! Form Validation
//!
//! Local checks for the create-coupon form. Invalid submissions are blocked
//! with inline per-field messages and never reach the network.

use std::collections::BTreeMap;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PAST_DATE_MESSAGE: &str = "Date cannot be in the past";
pub const NUMBER_MESSAGE: &str = "Please enter a valid number";

/// Raw create-coupon form input, before any coercion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CouponDraft {
    pub code: String,
    pub name: String,
    pub description: String,
    pub discount_type: String,
    pub discount_value: String,
    pub expiry_date: String,
    pub assigned_to_email: String,
}

/// `local@domain.tld` with no whitespace and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    matches!(domain.rsplit_once('.'), Some((head, tail)) if !head.is_empty() && !tail.is_empty())
}

/// Field-name → message map for everything wrong with the draft.
/// `today` is an ISO `YYYY-MM-DD` date; expiry may be empty (the server
/// defaults it) but must not be in the past.
pub fn validate_draft(draft: &CouponDraft, today: &str) -> BTreeMap<&'static str, String> {
    let mut errors = BTreeMap::new();

    for (field, value) in [
        ("code", &draft.code),
        ("name", &draft.name),
        ("discount_type", &draft.discount_type),
    ] {
        if value.trim().is_empty() {
            errors.insert(field, REQUIRED_MESSAGE.to_string());
        }
    }

    let discount = draft.discount_value.trim();
    if discount.is_empty() {
        errors.insert("discount_value", REQUIRED_MESSAGE.to_string());
    } else if discount.parse::<f64>().is_err() {
        errors.insert("discount_value", NUMBER_MESSAGE.to_string());
    }

    let expiry = draft.expiry_date.trim();
    if !expiry.is_empty() && expiry < today {
        errors.insert("expiry_date", PAST_DATE_MESSAGE.to_string());
    }

    let email = draft.assigned_to_email.trim();
    if !email.is_empty() && !is_valid_email(email) {
        errors.insert("assigned_to_email", EMAIL_MESSAGE.to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> CouponDraft {
        CouponDraft {
            code: "summer10".to_string(),
            name: "Summer sale".to_string(),
            description: String::new(),
            discount_type: "percentage".to_string(),
            discount_value: "10".to_string(),
            expiry_date: "2027-06-01".to_string(),
            assigned_to_email: String::new(),
        }
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate_draft(&valid_draft(), "2026-08-29").is_empty());
    }

    #[test]
    fn required_fields_are_enforced() {
        let draft = CouponDraft::default();
        let errors = validate_draft(&draft, "2026-08-29");
        assert_eq!(errors.get("code").map(String::as_str), Some(REQUIRED_MESSAGE));
        assert_eq!(errors.get("name").map(String::as_str), Some(REQUIRED_MESSAGE));
        assert_eq!(
            errors.get("discount_type").map(String::as_str),
            Some(REQUIRED_MESSAGE)
        );
        assert_eq!(
            errors.get("discount_value").map(String::as_str),
            Some(REQUIRED_MESSAGE)
        );
    }

    #[test]
    fn past_expiry_is_rejected_but_empty_is_allowed() {
        let mut draft = valid_draft();
        draft.expiry_date = "2020-01-01".to_string();
        let errors = validate_draft(&draft, "2026-08-29");
        assert_eq!(
            errors.get("expiry_date").map(String::as_str),
            Some(PAST_DATE_MESSAGE)
        );

        draft.expiry_date = String::new();
        assert!(validate_draft(&draft, "2026-08-29").is_empty());
    }

    #[test]
    fn non_numeric_discount_is_rejected() {
        let mut draft = valid_draft();
        draft.discount_value = "ten".to_string();
        let errors = validate_draft(&draft, "2026-08-29");
        assert_eq!(
            errors.get("discount_value").map(String::as_str),
            Some(NUMBER_MESSAGE)
        );
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.co"));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@@example.com"));
    }

    #[test]
    fn optional_email_validated_when_present() {
        let mut draft = valid_draft();
        draft.assigned_to_email = "not-an-email".to_string();
        let errors = validate_draft(&draft, "2026-08-29");
        assert_eq!(
            errors.get("assigned_to_email").map(String::as_str),
            Some(EMAIL_MESSAGE)
        );
    }
}
