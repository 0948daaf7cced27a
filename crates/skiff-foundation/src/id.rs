//! Type-safe ids for the render and layer arenas.
//!
//! Both arenas are slab-backed, and ids are the slab index plus one so that
//! `NonZeroUsize` niche optimization applies:
//!
//! - `Option<Id>` is the same size as `Id` (no extra byte needed)
//! - 0 is never a valid id (reserved for sentinel use)
//! - Ids are reused after removal (slab behavior)
//!
//! Ids remain valid until the corresponding slot is removed, at which point
//! the id may be reused. Resolution through the owning arena is the only way
//! to learn whether an id is still live; a stale id resolves to absent.
//!
//! # Examples
//!
//! ```rust
//! use skiff_foundation::{LayerId, RenderId};
//!
//! // Same size as Option<Id> (niche optimization)
//! assert_eq!(
//!     std::mem::size_of::<LayerId>(),
//!     std::mem::size_of::<Option<LayerId>>()
//! );
//!
//! let render = RenderId::new(1);
//! assert_eq!(render.get(), 1);
//!
//! // Safe creation that returns Option
//! assert!(LayerId::new_checked(0).is_none());
//! assert!(LayerId::new_checked(1).is_some());
//! ```

use std::num::NonZeroUsize;

// =========================================================================
// Macro for defining ID types
// =========================================================================

macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        #[must_use = "ids should be used for arena slot identification"]
        $vis struct $name(NonZeroUsize);

        impl $name {
            /// Creates a new id from a non-zero usize.
            ///
            /// # Panics
            ///
            /// Panics if `id` is 0. Zero is reserved for sentinel values;
            /// use [`new_checked()`](Self::new_checked) for potentially-zero
            /// input.
            #[inline]
            #[track_caller]
            pub fn new(id: usize) -> Self {
                match NonZeroUsize::new(id) {
                    Some(nz) => Self(nz),
                    None => panic!(
                        "{}::new() called with 0, which is not a valid id",
                        stringify!($name)
                    ),
                }
            }

            /// Creates a new id from a usize, returning `None` if 0.
            #[inline]
            pub const fn new_checked(id: usize) -> Option<Self> {
                match NonZeroUsize::new(id) {
                    Some(nz) => Some(Self(nz)),
                    None => None,
                }
            }

            /// Returns the inner usize value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0.get()
            }

            /// Creates an id from a slab index (index 0 becomes id 1).
            #[inline]
            pub fn from_index(index: usize) -> Self {
                Self::new(index + 1)
            }

            /// Returns the slab index this id maps to (id 1 becomes index 0).
            #[inline]
            pub const fn index(self) -> usize {
                self.0.get() - 1
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.0.get())
            }
        }
    };
}

define_id! {
    /// Identifies a render object in the render tree arena.
    pub struct RenderId;
}

define_id! {
    /// Identifies a layer in the layer tree arena.
    ///
    /// A repaint boundary's layer id is stable for the boundary's lifetime;
    /// display lists reference child layers by this id and resolution goes
    /// through the arena, so a disposed layer resolves to absent rather than
    /// dangling.
    pub struct LayerId;
}

// =========================================================================
// Platform view id
// =========================================================================

/// Unique identifier for an embedder-owned native platform view.
///
/// The raw value is assigned by the embedder (it is an `i64` on both Android
/// and iOS embeddings) and is opaque to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlatformViewId(i64);

impl PlatformViewId {
    /// Creates a new platform view id.
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PlatformViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PlatformView#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_niche_optimization() {
        assert_eq!(
            std::mem::size_of::<RenderId>(),
            std::mem::size_of::<Option<RenderId>>()
        );
        assert_eq!(
            std::mem::size_of::<LayerId>(),
            std::mem::size_of::<Option<LayerId>>()
        );
    }

    #[test]
    fn test_id_new_and_get() {
        let id = RenderId::new(7);
        assert_eq!(id.get(), 7);
    }

    #[test]
    #[should_panic(expected = "not a valid id")]
    fn test_id_new_zero_panics() {
        let _ = RenderId::new(0);
    }

    #[test]
    fn test_id_new_checked() {
        assert!(LayerId::new_checked(0).is_none());
        assert_eq!(LayerId::new_checked(3).map(LayerId::get), Some(3));
    }

    #[test]
    fn test_id_slab_index_round_trip() {
        let id = LayerId::from_index(0);
        assert_eq!(id.get(), 1);
        assert_eq!(id.index(), 0);

        let id = RenderId::from_index(41);
        assert_eq!(id.index(), 41);
    }

    #[test]
    fn test_platform_view_id() {
        let id = PlatformViewId::new(42);
        assert_eq!(id.value(), 42);
        assert_ne!(id, PlatformViewId::new(43));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(RenderId::new(5).to_string(), "RenderId#5");
        assert_eq!(PlatformViewId::new(-1).to_string(), "PlatformView#-1");
    }
}
