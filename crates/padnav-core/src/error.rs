#![forbid(unsafe_code)]

//! Construction-time validation failures.

/// Errors from building a grouped [`crate::FocusCollection`].
///
/// Group indices in the variants refer to positions in the `groups` slice
/// passed to the constructor, in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// A group has zero length.
    ZeroLengthGroup { group: usize },
    /// A group starts before the end of its predecessor.
    GroupOverlap {
        group: usize,
        start: usize,
        expected: usize,
    },
    /// A group starts past the end of its predecessor, leaving items
    /// unreachable by group navigation.
    GroupGap {
        group: usize,
        start: usize,
        expected: usize,
    },
    /// The final group ends before the last item.
    UncoveredTail { covered: usize, items: usize },
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLengthGroup { group } => {
                write!(f, "group {group} has zero length")
            }
            Self::GroupOverlap {
                group,
                start,
                expected,
            } => write!(
                f,
                "group {group} starts at {start}, overlapping its predecessor (expected {expected})"
            ),
            Self::GroupGap {
                group,
                start,
                expected,
            } => write!(
                f,
                "group {group} starts at {start}, leaving a gap (expected {expected})"
            ),
            Self::UncoveredTail { covered, items } => {
                write!(f, "groups cover {covered} of {items} items")
            }
        }
    }
}

impl std::error::Error for CollectionError {}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_offending_group() {
        let err = CollectionError::GroupGap {
            group: 2,
            start: 7,
            expected: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("group 2"));
        assert!(msg.contains('7'));
        assert!(msg.contains('5'));
    }

    #[test]
    fn error_trait_object_compatible() {
        let err: Box<dyn std::error::Error> =
            Box::new(CollectionError::ZeroLengthGroup { group: 0 });
        assert!(err.to_string().contains("zero length"));
    }
}
