//! # wk-insights
//!
//! Reports computed from decoded WaniKani records:
//! - how often each subject has been reviewed, and when reviews go wrong
//! - which reading mnemonics mention a given term, grouped by creation year
//!
//! The computations are pure functions over `wk-core` records; fetching is
//! left to the `wkinsights` binary.

pub mod mnemonics;
pub mod report;
pub mod reviews;
pub mod text;

pub use mnemonics::{MnemonicMentions, mnemonic_mentions};
pub use report::{SubjectCount, render_mentions, render_reviews};
pub use reviews::{IncorrectTally, ReviewStats};
pub use text::strip_tags;
