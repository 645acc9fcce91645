use serde_derive::Serialize;

pub const ANILIST_SOURCE: &str = "Anilist";

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct KapowarrComicRequest {
    pub title: String,
    pub description: String,
    #[serde(rename = "coverUrl")]
    pub cover_url: Option<String>,
    #[serde(rename = "externalId")]
    pub external_id: i64,
    pub source: &'static str,
}
