// HTML rendering for the competition page

pub mod handlers;
