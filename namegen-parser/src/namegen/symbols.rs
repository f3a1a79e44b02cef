//! Letter-class table for symbol groups
//!
//! Inside `<...>` groups (and at the top level of a pattern) a handful of letters
//! stand for a random pick from a word list rather than for themselves:
//!
//!   s - generic syllable
//!   v - vowel
//!   V - vowel or vowel combination
//!   c - consonant
//!   B - consonant or consonant combination suitable for beginning a word
//!   C - consonant or consonant combination suitable anywhere in a word
//!   i - insult
//!   m - mushy name
//!   M - mushy name ending
//!   D - consonant suited for a stupid person's name
//!   d - syllable suited for a stupid person's name (begins with a vowel)
//!
//! The built-in lists are static data loaded once per process. Callers that want
//! different lists build their own [`SymbolTable`] and hand it to the compiler.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fmt;

const BUILTIN: &[(char, &[&str])] = &[
    ('s', &[
        "ach", "ack", "ad", "age", "ald", "ale", "an", "ang", "ar", "ard", "as", "ash", "at",
        "ath", "augh", "aw", "ban", "bel", "bur", "cer", "cha", "che", "dan", "dar", "del", "den",
        "dra", "dyn", "ech", "eld", "elm", "em", "en", "end", "eng", "enth", "er", "ess", "est",
        "et", "gar", "gha", "hat", "hin", "hon", "ia", "ight", "ild", "im", "ina", "ine", "ing",
        "ir", "is", "iss", "it", "kal", "kel", "kim", "kin", "ler", "lor", "lye", "mor", "mos",
        "nal", "ny", "nys", "old", "om", "on", "or", "orm", "os", "ough", "per", "pol", "qua",
        "que", "rad", "rak", "ran", "ray", "ril", "ris", "rod", "roth", "ryn", "sam", "say", "ser",
        "shy", "skel", "sul", "tai", "tan", "tas", "ther", "tia", "tin", "ton", "tor", "tur", "um",
        "und", "unt", "urn", "usk", "ust", "ver", "ves", "vor", "war", "wor", "yer",
    ]),
    ('v', &["a", "e", "i", "o", "u", "y"]),
    ('V', &[
        "a", "e", "i", "o", "u", "y", "ae", "ai", "au", "ay", "ea", "ee", "ei", "eu", "ey", "ia",
        "ie", "oe", "oi", "oo", "ou", "ui",
    ]),
    ('c', &[
        "b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "n", "p", "q", "r", "s", "t", "v", "w",
        "x", "y", "z",
    ]),
    ('B', &[
        "b", "bl", "br", "c", "ch", "chr", "cl", "cr", "d", "dr", "f", "g", "h", "j", "k", "l",
        "ll", "m", "n", "p", "ph", "qu", "r", "rh", "s", "sch", "sh", "sl", "sm", "sn", "st",
        "str", "sw", "t", "th", "thr", "tr", "v", "w", "wh", "y", "z", "zh",
    ]),
    ('C', &[
        "b", "c", "ch", "ck", "d", "f", "g", "gh", "h", "k", "l", "ld", "ll", "lt", "m", "n",
        "nd", "nn", "nt", "p", "ph", "q", "r", "rd", "rr", "rt", "s", "sh", "ss", "st", "t", "th",
        "v", "w", "y", "z",
    ]),
    ('i', &[
        "air", "ankle", "ball", "beef", "bone", "bum", "bumble", "bump", "cheese", "clod", "clot",
        "clown", "corn", "dip", "dolt", "doof", "dork", "dumb", "face", "finger", "foot",
        "fumble", "goof", "grumble", "head", "knock", "knocker", "knuckle", "loaf", "lump", "lunk",
        "meat", "muck", "munch", "nit", "numb", "pin", "puff", "skull", "snark", "sneeze",
        "thimble", "twerp", "twit", "wad", "wimp", "wipe",
    ]),
    ('m', &[
        "baby", "booble", "bunker", "cuddle", "cuddly", "cutie", "doodle", "foofie", "gooble",
        "honey", "kissie", "lover", "lovey", "moofie", "mooglie", "moopie", "moopsie", "nookum",
        "poochie", "poof", "poofie", "pookie", "schmoopie", "schnoogle", "schnookie", "schnookum",
        "smooch", "smoochie", "smoosh", "snoogle", "snoogy", "snookie", "snookum", "snuggy",
        "sweetie", "woogle", "woogy", "wookie", "wookum", "wuddle", "wuddly", "wuggy", "wunny",
    ]),
    ('M', &[
        "boo", "bunch", "bunny", "cake", "cakes", "cute", "darling", "dumpling", "dumplings",
        "face", "foof", "goo", "head", "kin", "kins", "lips", "love", "mush", "pie", "poo", "pooh",
        "pook", "pums",
    ]),
    ('D', &[
        "b", "bl", "br", "cl", "d", "f", "fl", "fr", "g", "gh", "gl", "gr", "h", "j", "k", "kl",
        "m", "n", "p", "th", "w",
    ]),
    ('d', &[
        "elch", "idiot", "ob", "og", "ok", "olph", "olt", "omph", "ong", "onk", "oo", "oob", "oof",
        "oog", "ook", "ooz", "org", "ork", "orm", "oron", "ub", "uck", "ug", "ulf", "ult", "um",
        "umb", "ump", "umph", "un", "unb", "ung", "unk", "unph", "unt", "uzz",
    ]),
];

static BUILTIN_TABLE: Lazy<SymbolTable> = Lazy::new(|| {
    let mut table = SymbolTable::new();
    for (code, entries) in BUILTIN {
        table.insert(*code, entries.iter().map(|e| e.to_string()));
    }
    table
});

/// Errors raised while building a table from external data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolTableError {
    /// A class key that is not exactly one character
    InvalidCode(String),
}

impl fmt::Display for SymbolTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolTableError::InvalidCode(key) => write!(
                f,
                "Invalid symbol code '{}': codes must be a single character",
                key
            ),
        }
    }
}

impl std::error::Error for SymbolTableError {}

/// Mapping from a single-letter code to the strings it may expand to.
///
/// Entries keep their insertion order so listings are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    classes: BTreeMap<char, Vec<String>>,
}

impl SymbolTable {
    /// An empty table: every letter in a symbol group is literal.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in RinkWorks classes, shared by the whole process.
    pub fn builtin() -> &'static SymbolTable {
        &BUILTIN_TABLE
    }

    /// Define (or redefine) the class for `code`.
    pub fn insert<I, S>(&mut self, code: char, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes
            .insert(code, entries.into_iter().map(Into::into).collect());
    }

    pub fn get(&self, code: char) -> Option<&[String]> {
        self.classes.get(&code).map(Vec::as_slice)
    }

    pub fn contains(&self, code: char) -> bool {
        self.classes.contains_key(&code)
    }

    /// Codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = char> + '_ {
        self.classes.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &[String])> + '_ {
        self.classes.iter().map(|(code, entries)| (*code, entries.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Copy of this table with the given classes replaced or added.
    ///
    /// Keys come from configuration files, so each must be exactly one character.
    pub fn with_overrides<'a, I>(&self, overrides: I) -> Result<SymbolTable, SymbolTableError>
    where
        I: IntoIterator<Item = (&'a String, &'a Vec<String>)>,
    {
        let mut table = self.clone();
        for (key, entries) in overrides {
            let mut chars = key.chars();
            let code = match (chars.next(), chars.next()) {
                (Some(code), None) => code,
                _ => return Err(SymbolTableError::InvalidCode(key.clone())),
            };
            table.insert(code, entries.iter().cloned());
        }
        Ok(table)
    }
}
