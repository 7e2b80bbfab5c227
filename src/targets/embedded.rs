//! Embedded target lists
//!
//! Small curated pools compiled into the binary. Words are 5-letter,
//! uppercase; references stay within two-digit chapters and verses.

/// Guessable 5-letter words.
pub const WORDS: [&str; 50] = [
    "AARON", "ALTAR", "ANGEL", "BREAD", "CAMEL", "CEDAR", "CROSS", "CROWN", "DAVID", "DEVIL",
    "ENOCH", "EXILE", "FAITH", "FEAST", "FLOCK", "GLORY", "GRACE", "HEART", "HEROD", "HOSEA",
    "ISAAC", "JACOB", "JAMES", "JESSE", "JONAH", "JUDAH", "JUDGE", "LEPER", "LIGHT", "LINEN",
    "MANNA", "MERCY", "MICAH", "MOSES", "MOUNT", "NAHUM", "NAOMI", "OLIVE", "PETER", "PSALM",
    "RAVEN", "SARAH", "SHEEP", "SINAI", "STONE", "SWORD", "THORN", "TITUS", "TORAH", "WHEAT",
];

/// Guessable references as (book, chapter, verse).
pub const REFERENCES: [(&str, u32, u32); 20] = [
    ("Genesis", 1, 1),
    ("Joshua", 1, 9),
    ("Psalms", 23, 1),
    ("Proverbs", 3, 5),
    ("Isaiah", 41, 10),
    ("Jeremiah", 29, 11),
    ("Micah", 6, 8),
    ("Zephaniah", 3, 17),
    ("Matthew", 6, 33),
    ("John", 3, 16),
    ("Romans", 8, 28),
    ("1 Corinthians", 13, 4),
    ("Galatians", 5, 22),
    ("Ephesians", 2, 8),
    ("Philippians", 4, 13),
    ("2 Timothy", 1, 7),
    ("Hebrews", 11, 1),
    ("James", 1, 2),
    ("1 Peter", 5, 7),
    ("Revelation", 21, 4),
];
