//! The three reply handlers: `/start`, `/help` and the fallback for everything else.

mod fallback;
mod help;
mod start;
pub mod texts;

#[cfg(test)]
mod tests;

pub use fallback::FallbackHandler;
pub use help::HelpHandler;
pub use start::StartHandler;
