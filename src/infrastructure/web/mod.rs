mod html_page_fetcher;
mod html_text;

pub use html_page_fetcher::HtmlPageFetcher;
pub use html_text::{collapse_whitespace, extract_visible_text};
