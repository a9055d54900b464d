//! Built-in keyword tables.
//!
//! All entries are lowercase. Matching is substring containment against the
//! lowercased predicate, so stems like `endorse` cover `endorsed`/`endorses`.
//! Keywords shorter than [`MIN_SUBSTRING_LEN`] characters only match whole
//! words: `met` matches "met at ETHDenver" but not "something".

/// Keywords with fewer characters than this match whole words only.
pub const MIN_SUBSTRING_LEN: usize = 4;

/// Distrust signals. Checked first so they are never shadowed.
pub const NEGATIVE: &[&str] = &[
    "scam",
    "fraud",
    "untrusted",
    "not trusted",
    "distrust",
    "malicious",
    "phishing",
    "rug pull",
    "rugpull",
    "rugged",
    "spam",
    "sybil",
    "impersonat",
    "hacker",
    "exploit",
];

pub const HIGH: &[&str] = &[
    "verified",
    "trusted",
    "trustworthy",
    "core contributor",
    "audited",
    "endorse",
    "expert",
    "reliable",
    "builder",
];

pub const MEDIUM: &[&str] = &[
    "vouch",
    "met",
    "knows",
    "collaborated",
    "worked with",
    "recommend",
    "contributor",
    "colleague",
];

pub const LOW: &[&str] = &[
    "follows",
    "likes",
    "interacted",
    "attended",
    "member",
    "holder",
    "fan",
];

/// Predicates that grant the per-occurrence vouch bonus.
pub const VOUCH_FAMILY: &[&str] = &["vouch"];

/// Predicates that grant the one-time builder bonus.
pub const BUILDER_FAMILY: &[&str] = &["builder", "verified developer", "shipped"];
