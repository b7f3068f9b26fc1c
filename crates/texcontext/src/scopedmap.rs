//! A map with nested frames such that local mutations are rolled back when a frame closes.
//!
//! The [ScopedMap] type stores the currently visible binding of every key in a single
//! hash map, and keeps one _first-touch record_ per open frame.
//! The first time a key is mutated locally inside a frame, the value it had just before
//! (or the fact that it was unbound) is stored in that frame's record.
//! Closing the frame replays the record, restoring the view the enclosing frame had.
//!
//! Lookups are therefore a single hash map access no matter how deeply frames are nested,
//! and closing a frame costs time proportional to the number of distinct keys the
//! frame changed.
//!
//! ```
//! # use texcontext::scopedmap::{ScopedMap, Scope};
//! let mut registers: ScopedMap<&str, i32> = Default::default();
//! registers.insert("count0", 1, Scope::Local);
//! registers.open_frame(());
//! registers.insert("count0", 2, Scope::Local);
//! registers.insert("count0", 3, Scope::Local);
//! assert_eq!(registers.get(&"count0"), Some(&3));
//! assert_eq!(registers.close_frame(), Ok(()));
//! assert_eq!(registers.get(&"count0"), Some(&1));
//! ```
//!
//! Global insertions write through every open frame: the key is erased from every
//! first-touch record so that no frame closure can revert it.
//! ```
//! # use texcontext::scopedmap::{ScopedMap, Scope};
//! let mut registers: ScopedMap<&str, i32> = Default::default();
//! registers.open_frame(());
//! registers.insert("count0", 5, Scope::Local);
//! registers.open_frame(());
//! registers.insert("count0", 9, Scope::Global);
//! registers.close_frame().unwrap();
//! registers.close_frame().unwrap();
//! assert_eq!(registers.get(&"count0"), Some(&9));
//! ```
//!
//! Every frame carries a payload of type `F`, which is handed back when the frame closes.
//! The [Context](crate::Context) uses this to attach the group type and the queue of
//! after-group actions to each frame.
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Scope is used in the insertion method to determine which frames see the new value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scope {
    /// Insertions in the local scope are rolled back when the current frame closes.
    Local,
    /// Insertions in the global scope erase any shadowing local values and
    /// persist beyond the end of all currently open frames.
    Global,
}

impl Scope {
    /// Returns [Scope::Global] if `global` is true and [Scope::Local] otherwise.
    pub fn from_global_flag(global: bool) -> Scope {
        if global {
            Scope::Global
        } else {
            Scope::Local
        }
    }
}

/// What to do with a key when the frame that first touched it closes.
#[derive(Debug, PartialEq, Eq)]
enum Restore<V> {
    Value(V),
    Unbind,
}

#[derive(Debug)]
struct Frame<K, V, F> {
    first_touch: HashMap<K, Restore<V>>,
    payload: F,
}

/// Error returned if there is no frame to close when [ScopedMap::close_frame] is invoked.
#[derive(Debug, PartialEq, Eq)]
pub struct NoFrameToCloseError;

/// A map with frame semantics.
///
/// See the module docs for more information.
#[derive(Debug)]
pub struct ScopedMap<K, V, F = ()> {
    visible: HashMap<K, V>,
    // The outermost frame has no record, as nothing is ever restored there.
    frames: Vec<Frame<K, V, F>>,
}

impl<K, V, F> Default for ScopedMap<K, V, F> {
    fn default() -> Self {
        Self {
            visible: Default::default(),
            frames: Default::default(),
        }
    }
}

impl<K: Eq + Hash + Clone, V, F> ScopedMap<K, V, F> {
    /// Inserts the key, value pair in the provided scope.
    ///
    /// Returns whether the key was bound before the insertion.
    pub fn insert(&mut self, key: K, mut val: V, scope: Scope) -> bool {
        let frame = match scope {
            Scope::Local => self.frames.last_mut(),
            Scope::Global => {
                for frame in &mut self.frames {
                    frame.first_touch.remove(&key);
                }
                None
            }
        };
        match (self.visible.get_mut(&key), frame) {
            (None, None) => {
                self.visible.insert(key, val);
                false
            }
            (None, Some(frame)) => {
                if let Entry::Vacant(vac) = frame.first_touch.entry(key.clone()) {
                    vac.insert(Restore::Unbind);
                }
                self.visible.insert(key, val);
                false
            }
            (Some(val_ref), None) => {
                *val_ref = val;
                true
            }
            (Some(val_ref), Some(frame)) => {
                std::mem::swap(&mut val, val_ref);
                if let Entry::Vacant(vac) = frame.first_touch.entry(key) {
                    vac.insert(Restore::Value(val));
                }
                true
            }
        }
    }

    /// Returns the value currently visible at the provided key.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.visible.get(key)
    }

    /// Opens a new frame carrying the provided payload.
    pub fn open_frame(&mut self, payload: F) {
        self.frames.push(Frame {
            first_touch: HashMap::new(),
            payload,
        });
    }

    /// Closes the innermost frame, restoring every key it touched, and returns its payload.
    ///
    /// Returns an error and leaves the map untouched if only the outermost frame is open.
    pub fn close_frame(&mut self) -> Result<F, NoFrameToCloseError> {
        let frame = self.frames.pop().ok_or(NoFrameToCloseError)?;
        for (key, restore) in frame.first_touch {
            match restore {
                Restore::Unbind => {
                    self.visible.remove(&key);
                }
                Restore::Value(old_val) => {
                    self.visible.insert(key, old_val);
                }
            }
        }
        Ok(frame.payload)
    }

    /// Returns the number of open frames, not counting the outermost frame.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns a mutable reference to the payload of the innermost frame,
    ///     or `None` if only the outermost frame is open.
    pub fn payload_mut(&mut self) -> Option<&mut F> {
        self.frames.last_mut().map(|frame| &mut frame.payload)
    }

    /// Iterates over the payloads of the open frames, innermost first,
    ///     together with the number of keys each frame has shadowed.
    pub fn frames(&self) -> impl Iterator<Item = (&F, usize)> {
        self.frames
            .iter()
            .rev()
            .map(|frame| (&frame.payload, frame.first_touch.len()))
    }

    /// Iterates over all (key, value) pairs that are currently visible.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.visible.iter()
    }
}
