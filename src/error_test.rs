use super::*;

#[test]
fn config_error_names_the_field() {
    let err = ConfigError::RatioOutOfRange { field: "observers.reveal_threshold", value: 1.5 };
    assert_eq!(err.to_string(), "observers.reveal_threshold must be within [0, 1], got 1.5");
}

#[test]
fn page_error_wraps_config_error_transparently() {
    let err = PageError::from(ConfigError::Empty { field: "theme.storage_key" });
    assert_eq!(err.to_string(), "theme.storage_key must not be empty");
}

#[test]
fn missing_theme_hosts_are_told_apart() {
    assert_eq!(PageError::NoBody.to_string(), "document has no body");
    assert_eq!(PageError::NoRoot.to_string(), "document has no root element");
}

#[test]
fn js_variant_formats_context_and_message() {
    let err = PageError::Js { context: "query_selector", message: "SyntaxError".to_owned() };
    assert_eq!(err.to_string(), "query_selector: SyntaxError");
}

#[test]
fn copy_error_messages() {
    assert_eq!(CopyError::Unavailable.to_string(), "clipboard api unavailable");
    assert_eq!(
        CopyError::Rejected("NotAllowedError".to_owned()).to_string(),
        "clipboard write rejected: NotAllowedError"
    );
}
