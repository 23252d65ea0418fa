pub mod pages;

pub use pages::search_page;
