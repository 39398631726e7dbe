//! Programmer jokes shown alongside a generated post
//!
//! Purely decorative. A stateless uniform pick from a fixed set, nothing
//! here affects the generation pipeline.

use rand::Rng;

/// The fixed joke set
pub const JOKES: &[&str] = &[
    "Why do programmers prefer dark mode? Because light attracts bugs!",
    "Why do Python developers wear glasses? Because they can't C!",
    "Why was the JavaScript developer sad? Because he didn't Node how to Express himself!",
    "Why do programmers hate nature? Too many bugs!",
];

/// Pick one joke uniformly at random
#[must_use]
pub fn random_joke() -> &'static str {
    let idx = rand::rng().random_range(0..JOKES.len());
    JOKES[idx]
}
