pub trait Stemmer: Send + Sync {
    fn stem(&self, token: &str) -> String;
}
