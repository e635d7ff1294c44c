use std::sync::OnceLock;

use regex::Regex;

/// Template placeholders whose value differs between chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UniquenessPlaceholder {
    /// `[name]`
    Name,
    /// `[id]`
    Id,
    /// `[chunkhash]`, optionally with a length such as `[chunkhash:8]`.
    ChunkHash,
    /// `[contenthash]`, optionally with a length such as `[contenthash:8]`.
    ContentHash,
}

impl UniquenessPlaceholder {
    /// Every placeholder kind, in matching order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Id, Self::ChunkHash, Self::ContentHash];

    /// Keyword between the brackets.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Id => "id",
            Self::ChunkHash => "chunkhash",
            Self::ContentHash => "contenthash",
        }
    }

    fn accepts_length(self) -> bool {
        matches!(self, Self::ChunkHash | Self::ContentHash)
    }

    fn pattern(self) -> String {
        if self.accepts_length() {
            format!(r"\[{}(?::\d+)?\]", self.keyword())
        } else {
            format!(r"\[{}\]", self.keyword())
        }
    }

    /// Returns `true` when `template` contains this placeholder.
    pub fn is_present_in(self, template: &str) -> bool {
        placeholder_matchers()
            .iter()
            .any(|(kind, pattern)| *kind == self && pattern.is_match(template))
    }
}

fn placeholder_matchers() -> &'static [(UniquenessPlaceholder, Regex)] {
    static MATCHERS: OnceLock<Vec<(UniquenessPlaceholder, Regex)>> = OnceLock::new();
    MATCHERS
        .get_or_init(|| {
            UniquenessPlaceholder::ALL
                .iter()
                .map(|&kind| {
                    let pattern = Regex::new(&kind.pattern()).expect("invalid placeholder regex");
                    (kind, pattern)
                })
                .collect()
        })
        .as_slice()
}

/// List the uniqueness placeholders present in a filename template.
pub fn find_uniqueness_placeholders(template: &str) -> Vec<UniquenessPlaceholder> {
    placeholder_matchers()
        .iter()
        .filter(|(_, pattern)| pattern.is_match(template))
        .map(|(kind, _)| *kind)
        .collect()
}

/// Returns `true` when the template already resolves to a distinct path per chunk.
pub fn has_uniqueness_placeholder(template: &str) -> bool {
    placeholder_matchers()
        .iter()
        .any(|(_, pattern)| pattern.is_match(template))
}
