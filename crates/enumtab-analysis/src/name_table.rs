//! Name Table Builder
//!
//! All display names are concatenated, in ascending value order, into one
//! packed string. Each value owns the byte span `start..end` of that string
//! holding its name. Spans partition the packed string: the first starts at
//! 0, each starts where the previous ended, and the last ends at its length.
//! Two values with equal display names still get separate copies.

use serde::Serialize;
use tracing::debug;

use enumtab_common::EnumValue;

use crate::normalize::NormalizedEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NameSpan {
    pub value: EnumValue,
    pub start: usize,
    pub end: usize,
}

impl NameSpan {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameTable {
    packed: String,
    spans: Vec<NameSpan>,
}

impl NameTable {
    /// Fold the ascending entries into a packed string and spans.
    pub fn build(entries: &[NormalizedEntry]) -> Self {
        let capacity = entries.iter().map(|e| e.display_name.len()).sum();
        let mut packed = String::with_capacity(capacity);
        let mut spans = Vec::with_capacity(entries.len());

        for entry in entries {
            let start = packed.len();
            packed.push_str(&entry.display_name);
            spans.push(NameSpan {
                value: entry.value,
                start,
                end: packed.len(),
            });
        }

        debug!(spans = spans.len(), packed_len = packed.len(), "built name table");
        NameTable { packed, spans }
    }

    #[inline]
    pub fn packed(&self) -> &str {
        &self.packed
    }

    #[inline]
    pub fn spans(&self) -> &[NameSpan] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The text a span covers.
    #[inline]
    pub fn name(&self, span: &NameSpan) -> &str {
        &self.packed[span.start..span.end]
    }

    /// Span boundaries: `n + 1` offsets where entry `i` covers
    /// `boundaries[i]..boundaries[i + 1]`.
    pub fn boundaries(&self) -> Vec<usize> {
        let mut boundaries = Vec::with_capacity(self.spans.len() + 1);
        boundaries.push(0);
        boundaries.extend(self.spans.iter().map(|span| span.end));
        boundaries
    }

    /// Check that the spans partition the packed string with no gap or
    /// overlap and that values are strictly ascending.
    pub fn is_partition(&self) -> bool {
        let mut cursor = 0;
        let mut previous: Option<EnumValue> = None;
        for span in &self.spans {
            if span.start != cursor || span.end < span.start {
                return false;
            }
            if previous.is_some_and(|prev| prev >= span.value) {
                return false;
            }
            if !self.packed.is_char_boundary(span.end) {
                return false;
            }
            cursor = span.end;
            previous = Some(span.value);
        }
        cursor == self.packed.len()
    }
}
