use super::{Line, Measure};
use crate::units::Pt;
use tracing::warn;

/// Stretch a line towards `target_width` by widening the gaps between its words.
///
/// The number of extra spaces is found by probing: spaces are prepended to the plain
/// line one at a time until it measures wider than `target_width`. The count is then
/// backed off by two rather than one, so a justified line can end up to one space
/// short of the target but never runs over it for a measure that is additive over
/// characters. The extra spaces are dealt round-robin across the gaps starting with
/// the first, so earlier gaps pick up the remainder and no two gaps differ by more
/// than one space.
///
/// Single-word lines have no gaps and come back unchanged. Callers are expected to
/// leave the last line of a paragraph alone rather than pass it through here.
pub fn distribute<M>(line: &Line, target_width: Pt, measure: &M) -> String
where
    M: Measure + ?Sized,
{
    let plain = line.plain();
    if line.words.len() < 2 {
        return plain;
    }

    let gaps = line.words.len() - 1;
    let extra = extra_spaces(&plain, target_width, measure);
    let spread = spread_spaces(extra, gaps);

    let mut justified = String::with_capacity(plain.len() + extra);
    for (i, word) in line.words.iter().enumerate() {
        if i > 0 {
            justified.push(' ');
            justified.extend(std::iter::repeat(' ').take(spread[i - 1]));
        }
        justified.push_str(word);
    }
    justified
}

/// Consecutive probes that may fail to widen the line before spaces are taken to
/// have no width at all.
const MAX_STALLED_PROBES: usize = 64;

/// How many spaces can be added to `plain` as a whole, using the conservative
/// overflow-minus-two policy.
fn extra_spaces<M>(plain: &str, target_width: Pt, measure: &M) -> usize
where
    M: Measure + ?Sized,
{
    let mut probe = plain.to_string();
    let mut width = measure.measure(&probe);
    let mut overflow = 0usize;
    let mut stalled = 0usize;

    while width <= target_width {
        probe.insert(0, ' ');
        overflow += 1;

        // a rounding measure can swallow a narrow space on one probe and catch
        // up on the next, so only a long run without growth gives up
        let widened = measure.measure(&probe);
        if widened > width {
            stalled = 0;
        } else {
            stalled += 1;
            if stalled >= MAX_STALLED_PROBES {
                warn!(line = plain, "space has no measurable width, not justifying");
                return 0;
            }
        }
        width = widened;
    }

    overflow.saturating_sub(2)
}

/// Deal `extra` spaces across `gaps` gaps, one at a time, starting at gap 0 and
/// wrapping around. Returns the number of extra spaces for each gap.
pub fn spread_spaces(extra: usize, gaps: usize) -> Vec<usize> {
    let mut spread = vec![0; gaps];
    if gaps == 0 {
        return spread;
    }

    let mut gap = 0;
    for _ in 0..extra {
        spread[gap] += 1;
        gap = (gap + 1) % gaps;
    }
    spread
}
