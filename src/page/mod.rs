mod fetcher;
mod target;

pub use fetcher::Fetcher;
pub use target::parse_target;
