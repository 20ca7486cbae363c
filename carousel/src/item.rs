use alloc::vec::Vec;

use crate::key::CarouselKey;

/// A value displayed by one card.
///
/// The carousel only looks at the identity key and the display rank. Everything else is
/// opaque and handed back to the renderer as-is.
pub trait CarouselItem {
    type Key: CarouselKey;

    fn key(&self) -> Self::Key;

    /// Display rank; items are sorted ascending by rank once, at mount.
    fn rank(&self) -> i64;
}

impl<K: CarouselKey> CarouselItem for (K, i64) {
    type Key = K;

    fn key(&self) -> K {
        self.0.clone()
    }

    fn rank(&self) -> i64 {
        self.1
    }
}

/// Sorts items by ascending rank. Equal ranks keep their input order.
pub(crate) fn sort_by_rank<T: CarouselItem>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by_key(|it| it.rank());
    items
}

pub(crate) fn same_identity<T: CarouselItem>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.key() == y.key())
}
