use std::sync::atomic::{AtomicU64, Ordering};

use crate::model::Tag;

/// Hands out page-unique tags.
///
/// Values start at 1 and are strictly increasing; there is no reset, so a tag
/// is never reused for the lifetime of the allocator.
#[derive(Debug, Default)]
pub struct TagAllocator {
    last: AtomicU64,
}

impl TagAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_tag(&self) -> Tag {
        Tag::new(self.last.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Allocates `count` consecutive tags.
    pub fn next_tags(&self, count: usize) -> Vec<Tag> {
        (0..count).map(|_| self.next_tag()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tag_is_one() {
        let tags = TagAllocator::new();
        assert_eq!(tags.next_tag(), Tag::new(1));
    }

    #[test]
    fn tags_are_strictly_increasing() {
        let tags = TagAllocator::new();
        let mut previous = tags.next_tag();
        for _ in 0..1_000 {
            let next = tags.next_tag();
            assert!(next > previous, "{next:?} should follow {previous:?}");
            previous = next;
        }
    }

    #[test]
    fn batch_allocation_continues_the_sequence() {
        let tags = TagAllocator::new();
        let first = tags.next_tag();
        let batch = tags.next_tags(3);
        assert_eq!(
            batch,
            vec![
                Tag::new(first.value() + 1),
                Tag::new(first.value() + 2),
                Tag::new(first.value() + 3)
            ]
        );
        assert_eq!(tags.next_tag(), Tag::new(5));
    }

    #[test]
    fn shared_allocator_never_repeats_across_threads() {
        let tags = std::sync::Arc::new(TagAllocator::new());
        let handles = (0..4)
            .map(|_| {
                let tags = std::sync::Arc::clone(&tags);
                std::thread::spawn(move || tags.next_tags(250))
            })
            .collect::<Vec<_>>();
        let mut all = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 1_000);
    }
}
