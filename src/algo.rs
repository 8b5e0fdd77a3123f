pub mod longest_word;
pub mod reach;
pub mod self_loops;
pub mod short_words;
pub mod unreachable;

pub use longest_word::{longest_word, LongestWord};
pub use reach::{can_reach, Reach};
pub use self_loops::{print_self_loopers, self_loopers, SelfLoops};
pub use short_words::{print_short_words, short_words, ShortWords};
pub use unreachable::{unreachable, Unreachable};

use crate::core::VertexSet;

/// Returns the start if it is given and present in the graph.
pub(crate) fn present_start<'a, G>(
    graph: &G,
    start: Option<&'a G::VertexId>,
) -> Option<&'a G::VertexId>
where
    G: VertexSet,
{
    start.filter(|start| graph.contains_vertex(start))
}

/// Length of a word in UTF-16 code units.
///
/// A character outside the Basic Multilingual Plane counts as two.
pub(crate) fn word_len(word: &str) -> usize {
    word.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_len_counts_utf16_units() {
        assert_eq!(word_len(""), 0);
        assert_eq!(word_len("cat"), 3);
        assert_eq!(word_len("čaj"), 3);
        assert_eq!(word_len("𝕏"), 2);
    }
}
