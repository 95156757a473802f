//! Per-channel table scans
//!
//! Both scans fill rows `1..=H` and columns `1..=W` of one channel; row 0
//! and column 0 are left at their zero initialization and act as the base
//! case of the recurrence.
//!
//! `pixel(x, y)` returns the bin index and contribution of the sample at
//! `(x, y)`. The bin index must be below the layout's bin count.

use crate::config::ScanOrder;
use crate::table::Layout;
use inthist_core::Accumulator;

/// Fill one channel of a zeroed table.
pub(crate) fn scan_channel<A, F>(
    hist: &mut [A],
    layout: Layout,
    width: usize,
    height: usize,
    order: ScanOrder,
    pixel: F,
) where
    A: Accumulator,
    F: FnMut(usize, usize) -> (usize, A),
{
    match order {
        ScanOrder::Wavefront => wavefront_scan(hist, layout, width, height, pixel),
        ScanOrder::RowRunningSum => row_running_scan(hist, layout, width, height, pixel),
    }
}

/// Single row-major pass; each cell depends on its upper, left and
/// upper-left neighbours.
fn wavefront_scan<A, F>(hist: &mut [A], layout: Layout, width: usize, height: usize, mut pixel: F)
where
    A: Accumulator,
    F: FnMut(usize, usize) -> (usize, A),
{
    let bins = layout.bins();
    for y in 0..height {
        // Table row y is complete, row y + 1 is being filled
        let (done, rest) = hist.split_at_mut(layout.cell(y + 1, 0));
        let above = &done[layout.cell(y, 0)..];
        let row = &mut rest[..layout.row_len()];

        for x in 0..width {
            let prev = layout.cell(0, x);
            let here = layout.cell(0, x + 1);

            let (left_part, cur_part) = row.split_at_mut(here);
            let left = &left_part[prev..];
            let cur = &mut cur_part[..bins];
            let up = &above[here..here + bins];
            let up_left = &above[prev..here];

            // left >= up_left bin by bin, so the inner difference never
            // underflows and no intermediate exceeds the final value
            for (((c, &u), &l), &ul) in cur.iter_mut().zip(up).zip(left).zip(up_left) {
                *c = u + (l - ul);
            }

            let (bin, contribution) = pixel(x, y);
            cur[bin] += contribution;
        }
    }
}

/// Row running sum reformulation: `T[y+1][x+1] = T[y][x+1] + row[0..=x]`.
fn row_running_scan<A, F>(
    hist: &mut [A],
    layout: Layout,
    width: usize,
    height: usize,
    mut pixel: F,
) where
    A: Accumulator,
    F: FnMut(usize, usize) -> (usize, A),
{
    let bins = layout.bins();
    let mut running = vec![A::ZERO; bins];
    for y in 0..height {
        running.fill(A::ZERO);

        let (done, rest) = hist.split_at_mut(layout.cell(y + 1, 0));
        let above = &done[layout.cell(y, 0)..];
        let row = &mut rest[..layout.row_len()];

        for x in 0..width {
            let (bin, contribution) = pixel(x, y);
            running[bin] += contribution;

            let here = layout.cell(0, x + 1);
            let cur = &mut row[here..here + bins];
            let up = &above[here..here + bins];
            for ((c, &u), &r) in cur.iter_mut().zip(up).zip(&running) {
                *c = u + r;
            }
        }
    }
}
