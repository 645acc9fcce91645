pub mod anilist;
pub mod errors;
pub mod kapowarr;
pub mod media;
pub mod open_library;
pub mod readarr;
