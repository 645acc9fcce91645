use serde_derive::Deserialize;

pub mod books;
pub mod comics;
pub mod errors;

#[derive(Deserialize, Debug, Default)]
pub struct TitleQuery {
    pub title: Option<String>,
}

/// Trimmed value of a required field, or `None` when it is missing or blank.
fn required(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
