pub mod pages;

pub use pages::{home_page, HomeQuery, HomeTemplate};
