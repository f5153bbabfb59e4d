//! Stage 3: Budget fitting — keep head and tail, replace the middle with a
//! size marker.

use ag_core::text::{char_len, head_chars, tail_chars};
use tracing::debug;

/// Share of the budget kept from the start, in tenths.
pub const HEAD_TENTHS: usize = 3;
/// Share of the budget kept from the end, in tenths.
pub const TAIL_TENTHS: usize = 2;

/// `floor(n * tenths / 10)` without overflowing on large budgets.
fn tenths_of(n: usize, tenths: usize) -> usize {
    n / 10 * tenths + n % 10 * tenths / 10
}

/// Head/tail split for a budget, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub head: usize,
    pub tail: usize,
}

impl Split {
    pub fn for_budget(max_chars: usize) -> Self {
        Self {
            head: tenths_of(max_chars, HEAD_TENTHS),
            tail: tenths_of(max_chars, TAIL_TENTHS),
        }
    }
}

pub fn compressed_marker(middle_chars: usize) -> String {
    format!("[... {middle_chars} chars compressed ...]")
}

/// Return `text` unchanged when it fits, otherwise head + marker + tail.
///
/// The marker counts every character between head and tail and is not
/// charged against the budget, so a truncated result runs past `max_chars`
/// by roughly the marker's length whenever `head + tail` is close to it.
pub fn fit(text: &str, max_chars: usize) -> String {
    let len = char_len(text);
    if len <= max_chars {
        return text.to_string();
    }

    let split = Split::for_budget(max_chars);
    let middle_chars = len - split.head - split.tail;
    debug!(len, max_chars, middle_chars, "fitting text to budget");

    format!(
        "{}\n{}\n{}",
        head_chars(text, split.head),
        compressed_marker(middle_chars),
        tail_chars(text, split.tail),
    )
}
