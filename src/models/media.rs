use serde_derive::Serialize;

use crate::models::anilist::AniListMedia;
use crate::models::kapowarr::{KapowarrComicRequest, ANILIST_SOURCE};
use crate::models::open_library::OpenLibraryDoc;
use crate::models::readarr::ReadarrBookRequest;

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const NO_DESCRIPTION: &str = "No description available.";

const OPEN_LIBRARY_COVERS_URL: &str = "https://covers.openlibrary.org/b/olid";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BookResult {
    pub title: String,
    pub author: String,
    pub olid: Option<String>,
    #[serde(rename = "coverUrl")]
    pub cover_url: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ComicResult {
    pub id: i64,
    pub title: String,
    #[serde(rename = "coverUrl")]
    pub cover_url: Option<String>,
    pub description: String,
}

/// A book the user asked to acquire. Only title and author are mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRequest {
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
}

pub fn cover_url_for_edition(olid: &str) -> String {
    format!("{}/{}-M.jpg", OPEN_LIBRARY_COVERS_URL, olid)
}

impl From<OpenLibraryDoc> for BookResult {
    fn from(doc: OpenLibraryDoc) -> Self {
        let olid = doc.edition_key.into_iter().next().and_then(present);
        let cover_url = olid.as_deref().map(cover_url_for_edition);

        Self {
            title: doc.title.and_then(present).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            author: doc.author_name.into_iter().next().and_then(present)
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            olid,
            cover_url,
        }
    }
}

impl From<AniListMedia> for ComicResult {
    fn from(media: AniListMedia) -> Self {
        let title = media.title.and_then(|title| {
            title.english.and_then(present).or_else(|| title.romaji.and_then(present))
        });

        Self {
            id: media.id,
            title: title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            cover_url: media.cover_image.and_then(|cover| cover.large).and_then(present),
            description: media.description.and_then(present)
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        }
    }
}

impl From<&BookRequest> for ReadarrBookRequest {
    fn from(book: &BookRequest) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            foreign_id: book.isbn.clone(),
        }
    }
}

impl From<&ComicResult> for KapowarrComicRequest {
    fn from(comic: &ComicResult) -> Self {
        Self {
            title: comic.title.clone(),
            description: comic.description.clone(),
            cover_url: comic.cover_url.clone(),
            external_id: comic.id,
            source: ANILIST_SOURCE,
        }
    }
}

// upstreams send "" as often as they omit a field
fn present(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::anilist::{AniListCoverImage, AniListTitle};

    use super::*;

    fn media(english: Option<&str>, romaji: Option<&str>) -> AniListMedia {
        AniListMedia {
            id: 30001,
            title: Some(AniListTitle {
                english: english.map(str::to_string),
                romaji: romaji.map(str::to_string),
            }),
            cover_image: None,
            description: None,
        }
    }

    #[test]
    fn comic_title_prefers_english() {
        let comic = ComicResult::from(media(Some("Berserk"), Some("Beruseruku")));
        assert_eq!(comic.title, "Berserk");
    }

    #[test]
    fn comic_title_falls_back_to_romaji() {
        let comic = ComicResult::from(media(None, Some("Oyasumi Punpun")));
        assert_eq!(comic.title, "Oyasumi Punpun");

        let comic = ComicResult::from(media(Some(""), Some("Oyasumi Punpun")));
        assert_eq!(comic.title, "Oyasumi Punpun");
    }

    #[test]
    fn comic_without_any_title_gets_placeholder() {
        assert_eq!(ComicResult::from(media(None, None)).title, UNKNOWN_TITLE);

        let untitled = AniListMedia { id: 1, ..Default::default() };
        assert_eq!(ComicResult::from(untitled).title, UNKNOWN_TITLE);
    }

    #[test]
    fn comic_defaults_cover_and_description() {
        let comic = ComicResult::from(media(Some("Monster"), None));
        assert_eq!(comic.cover_url, None);
        assert_eq!(comic.description, NO_DESCRIPTION);

        let mut with_cover = media(Some("Monster"), None);
        with_cover.cover_image = Some(AniListCoverImage { large: Some("https://img/monster.jpg".to_string()) });
        with_cover.description = Some("A surgeon saves a boy.".to_string());
        let comic = ComicResult::from(with_cover);
        assert_eq!(comic.cover_url.as_deref(), Some("https://img/monster.jpg"));
        assert_eq!(comic.description, "A surgeon saves a boy.");
    }

    #[test]
    fn book_without_author_gets_placeholder() {
        let book = BookResult::from(OpenLibraryDoc {
            title: Some("Beowulf".to_string()),
            ..Default::default()
        });

        assert_eq!(book.author, UNKNOWN_AUTHOR);
        assert_eq!(book.olid, None);
        assert_eq!(book.cover_url, None);
    }

    #[test]
    fn book_cover_is_derived_from_first_edition() {
        let book = BookResult::from(OpenLibraryDoc {
            title: Some("Dune".to_string()),
            author_name: vec!["Frank Herbert".to_string(), "Someone Else".to_string()],
            edition_key: vec!["OL26242482M".to_string(), "OL1M".to_string()],
        });

        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.olid.as_deref(), Some("OL26242482M"));
        assert_eq!(
            book.cover_url.as_deref(),
            Some("https://covers.openlibrary.org/b/olid/OL26242482M-M.jpg")
        );
    }

    #[test]
    fn book_title_is_never_empty() {
        let book = BookResult::from(OpenLibraryDoc { title: Some(String::new()), ..Default::default() });
        assert_eq!(book.title, UNKNOWN_TITLE);
    }

    #[test]
    fn comic_serializes_with_client_field_names() {
        let comic = ComicResult::from(media(Some("Watchmen"), None));
        let json = serde_json::to_value(&comic).unwrap();

        assert_eq!(json, serde_json::json!({
            "id": 30001,
            "title": "Watchmen",
            "coverUrl": null,
            "description": NO_DESCRIPTION,
        }));
    }

    #[test]
    fn kapowarr_payload_carries_source_tag() {
        let comic = ComicResult::from(media(Some("Watchmen"), None));
        let payload = KapowarrComicRequest::from(&comic);

        assert_eq!(payload.external_id, 30001);
        assert_eq!(payload.source, "Anilist");
        assert_eq!(payload.title, "Watchmen");
    }
}
