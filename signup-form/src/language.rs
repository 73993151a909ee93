//! Languages offered by the optional language selector.

/// A selectable language. Carries no validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub id: u8,
    pub name: &'static str,
}

pub const LANGUAGES: [Language; 10] = [
    Language { id: 1, name: "JavaScript" },
    Language { id: 2, name: "Rust" },
    Language { id: 3, name: "Python" },
    Language { id: 4, name: "C++" },
    Language { id: 5, name: "Swift" },
    Language { id: 6, name: "Ruby" },
    Language { id: 7, name: "C#" },
    Language { id: 8, name: "PHP" },
    Language { id: 9, name: "Soul" },
    Language { id: 10, name: "Haskell" },
];
