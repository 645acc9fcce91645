use serde_derive::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Deserialize, Debug)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Deserialize, Debug)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub struct AniListPageData {
    #[serde(rename = "Page")]
    pub page: AniListPage,
}

#[derive(Deserialize, Debug)]
pub struct AniListPage {
    #[serde(default)]
    pub media: Vec<AniListMedia>,
}

#[derive(Deserialize, Debug, Default)]
pub struct AniListMedia {
    pub id: i64,
    pub title: Option<AniListTitle>,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<AniListCoverImage>,
    pub description: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct AniListTitle {
    pub english: Option<String>,
    pub romaji: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct AniListCoverImage {
    pub large: Option<String>,
}
