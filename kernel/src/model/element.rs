//! The sortable / searchable item.

/// One item of a visualized collection.
///
/// `id` is a stable identity used for UI keying and for checking stability;
/// `value` is the key every algorithm orders or searches by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    pub id: u32,
    pub value: i64,
}

impl Element {
    #[must_use]
    pub const fn new(id: u32, value: i64) -> Self {
        Self { id, value }
    }

    /// Build elements from bare values, assigning ids by position.
    #[must_use]
    pub fn from_values(values: &[i64]) -> Vec<Self> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                #[allow(clippy::cast_possible_truncation)]
                let id = i as u32;
                Self { id, value }
            })
            .collect()
    }
}

/// Project a slice of elements onto their values.
#[must_use]
pub fn values_of(elements: &[Element]) -> Vec<i64> {
    elements.iter().map(|e| e.value).collect()
}
