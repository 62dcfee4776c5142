//! Fixed word list for the random word endpoint.

use rand::seq::SliceRandom;

pub const WORDS: &[&str] = &[
    "apple", "anchor", "arrow", "autumn", "badge", "bamboo", "banner", "basket", "beacon", "berry",
    "bison", "blanket", "blossom", "breeze", "bridge", "bubble", "cabin", "cactus", "candle", "canyon",
    "carpet", "castle", "cedar", "cherry", "cinder", "circle", "cloud", "clover", "comet", "copper",
    "coral", "cotton", "crater", "crystal", "dagger", "daisy", "delta", "desert", "diamond", "dolphin",
    "dragon", "dune", "eagle", "echo", "ember", "engine", "falcon", "feather", "fern", "fiddle",
    "flame", "forest", "fossil", "fountain", "galaxy", "garden", "garnet", "glacier", "granite", "gravel",
    "harbor", "hazel", "helmet", "heron", "hollow", "honey", "horizon", "iceberg", "island", "ivory",
    "jacket", "jasmine", "jungle", "kernel", "kettle", "kite", "ladder", "lagoon", "lantern", "lemon",
    "lily", "lizard", "lotus", "magnet", "maple", "marble", "meadow", "meteor", "mirror", "monsoon",
    "mosaic", "mountain", "nectar", "needle", "nickel", "oasis", "ocean", "olive", "orbit", "orchid",
    "otter", "paddle", "panther", "pebble", "pepper", "pillow", "pine", "planet", "prairie", "puzzle",
    "quartz", "quiver", "rabbit", "radar", "rain", "raven", "reef", "ribbon", "river", "rocket",
    "saddle", "saffron", "salmon", "sapphire", "shadow", "shell", "silver", "sparrow", "spiral", "spruce",
    "summit", "sunset", "swan", "tablet", "thistle", "thunder", "tiger", "timber", "topaz", "torch",
    "tulip", "tundra", "valley", "velvet", "violet", "volcano", "walnut", "willow", "window", "winter",
    "wizard", "yarrow", "yonder", "zebra", "zenith", "zephyr",
];

/// Largest number of words one request may ask for.
pub const MAX_WORD_COUNT: i64 = 10_000;

/// `count` independent draws with replacement, at most [`MAX_WORD_COUNT`].
/// Non-positive counts yield none.
pub fn random_words(count: i64) -> Vec<&'static str> {
    let count = usize::try_from(count.min(MAX_WORD_COUNT)).unwrap_or(0);
    let mut rng = rand::thread_rng();
    (0..count)
        .filter_map(|_| WORDS.choose(&mut rng).copied())
        .collect()
}
