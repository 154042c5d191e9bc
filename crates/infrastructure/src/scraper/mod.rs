mod browserless;
mod html_extractor;

pub use browserless::BrowserlessFetcher;
pub use html_extractor::HtmlContentExtractor;
