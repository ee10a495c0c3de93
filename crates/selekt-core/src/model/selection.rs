// ── Selection shape ──
//
// One enum carries both the committed value (`Selection<T>`) and the bare
// keys derived from it (`Selection<T::Key>`), so the two always agree in
// shape: nothing, one, or an ordered list.

use serde::{Deserialize, Serialize};

/// A committed selection, or the keys extracted from one.
///
/// Under single mode only `None` and `Single` occur; under multiple mode
/// the controller always holds `Multiple` (possibly empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection<X> {
    #[default]
    None,
    Single(X),
    Multiple(Vec<X>),
}

impl<X> Selection<X> {
    /// The empty selection for the given mode.
    pub fn empty(multiple: bool) -> Self {
        if multiple {
            Self::Multiple(Vec::new())
        } else {
            Self::None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// View the selected items as a slice regardless of shape.
    pub fn as_slice(&self) -> &[X] {
        match self {
            Self::None => &[],
            Self::Single(x) => std::slice::from_ref(x),
            Self::Multiple(xs) => xs,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, X> {
        self.as_slice().iter()
    }

    pub fn first(&self) -> Option<&X> {
        self.as_slice().first()
    }

    /// Project every item, keeping the shape.
    pub fn map<Y>(&self, f: impl Fn(&X) -> Y) -> Selection<Y> {
        match self {
            Self::None => Selection::None,
            Self::Single(x) => Selection::Single(f(x)),
            Self::Multiple(xs) => Selection::Multiple(xs.iter().map(f).collect()),
        }
    }

    pub fn into_vec(self) -> Vec<X> {
        match self {
            Self::None => Vec::new(),
            Self::Single(x) => vec![x],
            Self::Multiple(xs) => xs,
        }
    }
}

impl<X> From<Option<X>> for Selection<X> {
    fn from(value: Option<X>) -> Self {
        value.map_or(Self::None, Self::Single)
    }
}

impl<X> From<Vec<X>> for Selection<X> {
    fn from(values: Vec<X>) -> Self {
        Self::Multiple(values)
    }
}

impl<'a, X> IntoIterator for &'a Selection<X> {
    type Item = &'a X;
    type IntoIter = std::slice::Iter<'a, X>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
