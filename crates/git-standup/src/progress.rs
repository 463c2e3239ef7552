//! Progress reporting
//!
//! A cosmetic pass-through wrapper around an iterator. Progress is drawn by
//! the `IndicatifLayer` installed in [`crate::logging`]; without that layer
//! (tests, library use) the span calls are no-ops.

use tracing::info_span;
use tracing::span::EnteredSpan;
use tracing_indicatif::span_ext::IndicatifSpanExt;
use tracing_indicatif::style::ProgressStyle;

const BAR_TEMPLATE: &str = "{msg} [{wide_bar:.cyan/blue}] {pos}/{len}";

/// Iterator that advances a progress bar for each item it yields
pub struct Tracked<I> {
    inner: I,
    span: EnteredSpan,
}

/// Wrap `iter` in a progress bar labelled `label`
pub fn track<I>(iter: I, label: &str) -> Tracked<I>
where
    I: ExactSizeIterator,
{
    let span = info_span!("progress");
    if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
        span.pb_set_style(&style);
    }
    span.pb_set_length(iter.len() as u64);
    span.pb_set_message(label);

    Tracked {
        inner: iter,
        span: span.entered(),
    }
}

impl<I: Iterator> Iterator for Tracked<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next();
        if item.is_some() {
            self.span.pb_inc(1);
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_track_passes_items_through() {
        let items = vec![3, 1, 2];
        let seen: Vec<i32> = track(items.iter(), "counting").copied().collect();
        assert_eq!(seen, items);
    }

    #[test]
    fn test_track_empty() {
        let items: Vec<u8> = Vec::new();
        assert_eq!(track(items.iter(), "nothing").count(), 0);
    }
}
