use serde_derive::Deserialize;

#[derive(Deserialize, Debug)]
pub struct OpenLibrarySearch {
    #[serde(default)]
    pub docs: Vec<OpenLibraryDoc>,
}

#[derive(Deserialize, Debug, Default)]
pub struct OpenLibraryDoc {
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Vec<String>,
    #[serde(default)]
    pub edition_key: Vec<String>,
}
