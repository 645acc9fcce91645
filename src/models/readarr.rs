use serde_derive::Serialize;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ReadarrBookRequest {
    pub title: String,
    pub author: String,
    #[serde(rename = "foreignId")]
    pub foreign_id: Option<String>,
}
