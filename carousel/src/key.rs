#[cfg(feature = "std")]
#[doc(hidden)]
pub trait CarouselKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> CarouselKey for K {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait CarouselKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> CarouselKey for K {}
