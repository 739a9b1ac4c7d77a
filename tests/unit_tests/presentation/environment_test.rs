use intake::presentation::Environment;

#[test]
fn given_known_names_when_parsing_then_maps_to_environment() {
    assert_eq!("local".parse(), Ok(Environment::Local));
    assert_eq!("TEST".parse(), Ok(Environment::Test));
    assert_eq!("production".parse(), Ok(Environment::Prod));
}

#[test]
fn given_unknown_name_when_parsing_then_returns_error() {
    let result: Result<Environment, String> = "staging".parse();

    assert!(result.unwrap_err().contains("staging"));
}

#[test]
fn given_environment_when_displayed_then_uses_file_stem() {
    assert_eq!(Environment::Prod.to_string(), "prod");
    assert_eq!(Environment::default(), Environment::Local);
}
