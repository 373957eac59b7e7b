//! ORCHID markup definition.
//!
//! The corpus encodes one token or boundary marker per line:
//! - token lines carry a word and its POS tag, separated by `/`,
//! - lines ending in `//` close the current sentence,
//! - lines ending in `\\` mark an in-progress sentence fragment,
//! - `#P<n>` lines delimit paragraphs,
//! - lines starting with `%` or `#` are comments.
//!
//! Punctuation and whitespace inside tokens are escaped as placeholder
//! symbols (`<full_stop>`, `<space>`, ...).

/// Markup conventions of the ORCHID corpus.
///
/// Built once at startup ([Markup::orchid]) and passed by reference to each
/// processing stage.
pub struct Markup {
    eos_marker: &'static str,
    oos_marker: &'static str,
    attr_delim: char,
    paragraph_prefix: &'static str,
    comment_prefixes: &'static [char],
    char_syms: Vec<(&'static str, &'static str)>,
}

impl Markup {
    /// The standard ORCHID markup.
    pub fn orchid() -> Self {
        Self {
            eos_marker: "//",
            oos_marker: "\\\\",
            attr_delim: '/',
            paragraph_prefix: "#P",
            comment_prefixes: &['%', '#'],
            char_syms: orchid_char_syms(),
        }
    }

    /// End of sentence marker (`//`).
    pub fn eos_marker(&self) -> &'static str {
        self.eos_marker
    }

    /// Ongoing of sentence marker (`\\`).
    pub fn oos_marker(&self) -> &'static str {
        self.oos_marker
    }

    /// POS attribute delimiter (`/`).
    pub fn attr_delim(&self) -> char {
        self.attr_delim
    }

    /// Placeholder substitutions, in application order.
    ///
    /// Some placeholder strings are substrings of others, so the order is
    /// part of the decoding semantics and must stay fixed.
    pub fn char_syms(&self) -> &[(&'static str, &'static str)] {
        &self.char_syms
    }

    /// `#P<n>` paragraph delimiter line.
    pub fn is_paragraph_marker(&self, line: &str) -> bool {
        match line.strip_prefix(self.paragraph_prefix) {
            Some(digits) => !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
            None => false,
        }
    }

    /// Comment lines are removed at load time, before parsing.
    pub fn is_comment(&self, line: &str) -> bool {
        self.comment_prefixes
            .iter()
            .any(|sym| line.starts_with(*sym))
    }
}

/// Character symbols used by ORCHID, in substitution order.
///
/// `<space>` stands for token deletion, not for a literal space. The last
/// four symbols carry no angle brackets in the corpus.
fn orchid_char_syms() -> Vec<(&'static str, &'static str)> {
    vec![
        ("<space>", ""),
        ("<exclamation>", "!"),
        ("<quotation>", "\""),
        ("<number>", "#"),
        ("<dollar>", "$"),
        ("<percent>", "%"),
        ("<ampersand>", "&"),
        ("<apostrophe>", "'"),
        ("<left_parenthesis>", "("),
        ("<right_parenthesis>", ")"),
        ("<asterisk>", "*"),
        ("<plus>", "+"),
        ("<comma>", ","),
        ("<minus>", "-"),
        ("<full_stop>", "."),
        ("<slash>", "/"),
        ("<colon>", ":"),
        ("<semi_colon>", ";"),
        ("<less_than>", "<"),
        ("<equal>", "="),
        ("<greater_than>", ">"),
        ("<question_mark>", "?"),
        ("<at_mark>", "@"),
        ("<left_square_bracket>", "["),
        ("<right_square_bracket>", "]"),
        ("<circumflex_accent>", "^"),
        ("low_line", "_"),
        ("left_curly_bracket", "{"),
        ("right_curly_bracket", "}"),
        ("tilde", "~"),
    ]
}
