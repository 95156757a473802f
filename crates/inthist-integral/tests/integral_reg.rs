//! Integral histogram construction regression test
//!
//! Builds tables from small hand-checked grids and from larger synthetic
//! grids, and checks them against directly binned histograms.

use inthist_core::{Grid, Rect};
use inthist_integral::{BinMapper, HistogramConfig, IntegralHistogram, ScanOrder};
use inthist_test::{RegParams, checker_grid, gradient_grid, lcg_grid};

/// Histogram of every sample in `grid`
fn naive_histogram(grid: &Grid<u8>, bins: usize) -> Vec<u32> {
    let mapper = BinMapper::new(bins, u8::MAX);
    let mut hist = vec![0u32; bins];
    for &v in grid.data() {
        hist[mapper.map(v)] += 1;
    }
    hist
}

#[test]
fn integral_reg() {
    let mut rp = RegParams::new("integral");

    // --- Test 1: 2x2 checker, 2 bins ---
    let grid = Grid::from_rows(&[[0u8, 255], [255, 0]]).expect("checker grid");
    let engine =
        IntegralHistogram::<u8, u32>::new(HistogramConfig::new(2, 2, 1, 2)).expect("engine");
    let table = engine.integral_histogram(&[grid]).expect("build");
    for i in 0..=2 {
        rp.compare_slices(&[0, 0], table.cell(0, 0, i).expect("top sentinel"));
        rp.compare_slices(&[0, 0], table.cell(0, i, 0).expect("left sentinel"));
    }
    rp.compare_slices(&[1, 0], table.cell(0, 1, 1).expect("T[1][1]"));
    rp.compare_slices(&[1, 1], table.cell(0, 1, 2).expect("T[1][2]"));
    rp.compare_slices(&[1, 1], table.cell(0, 2, 1).expect("T[2][1]"));
    rp.compare_slices(&[2, 2], table.cell(0, 2, 2).expect("T[2][2]"));
    let whole = table.region_histogram(Rect::full(2, 2)).expect("query");
    rp.compare_slices(&[2, 2], &whole);

    // --- Test 2: whole-grid totals match direct binning ---
    let (w, h, bins) = (37, 23, 16);
    let channels: Vec<Grid<u8>> = (0..3)
        .map(|seed| lcg_grid(w, h, seed, u8::MAX).expect("lcg grid"))
        .collect();
    let engine =
        IntegralHistogram::<u8, u32>::new(HistogramConfig::new(w, h, 3, bins)).expect("engine");
    let table = engine.integral_histogram(&channels).expect("build");
    for (c, grid) in channels.iter().enumerate() {
        let expected = naive_histogram(grid, bins);
        rp.compare_slices(&expected, table.total(c).expect("total"));
        eprintln!("  channel {}: {:?}", c, table.total(c).expect("total"));
    }

    // --- Test 3: every prefix cell counts its samples ---
    let total_ok = (0..=h).all(|row| {
        (0..=w).all(|col| {
            let cell = table.cell(1, row, col).expect("cell");
            cell.iter().sum::<u32>() as usize == row * col
        })
    });
    rp.check(total_ok, "prefix cell sums equal prefix areas");

    // --- Test 4: determinism ---
    let again = engine.integral_histogram(&channels).expect("rebuild");
    rp.check(again == table, "rebuilding gives an identical table");

    // --- Test 5: scan orders agree on structured and random inputs ---
    let inputs = [
        gradient_grid(w, h, u8::MAX).expect("gradient"),
        checker_grid(w, h, 4, 10u8, 240).expect("checker"),
        lcg_grid(w, h, 99, u8::MAX).expect("lcg"),
    ];
    let rows = IntegralHistogram::<u8, u32>::new(
        HistogramConfig::new(w, h, 3, bins).with_scan_order(ScanOrder::RowRunningSum),
    )
    .expect("row engine")
    .integral_histogram(&inputs)
    .expect("row build");
    let wave = engine.integral_histogram(&inputs).expect("wave build");
    rp.check(rows == wave, "row running sum matches wavefront");

    assert!(rp.cleanup(), "integral regression test failed");
}

#[test]
fn integral_parallel_reg() {
    let mut rp = RegParams::new("integral_parallel");

    // Large enough to take the parallel channel path
    let (w, h, bins) = (320, 200, 32);
    let channels: Vec<Grid<u8>> = (10..14)
        .map(|seed| lcg_grid(w, h, seed, u8::MAX).expect("lcg grid"))
        .collect();

    for order in [ScanOrder::Wavefront, ScanOrder::RowRunningSum] {
        let engine = IntegralHistogram::<u8, u64>::new(
            HistogramConfig::new(w, h, channels.len(), bins).with_scan_order(order),
        )
        .expect("engine");
        let table = engine.integral_histogram(&channels).expect("build");
        rp.compare_values(
            (channels.len() * (h + 1) * (w + 1) * bins) as f64,
            table.as_slice().len() as f64,
            0.0,
        );

        for (c, grid) in channels.iter().enumerate() {
            let expected: Vec<u64> = naive_histogram(grid, bins)
                .into_iter()
                .map(u64::from)
                .collect();
            rp.compare_slices(&expected, table.total(c).expect("total"));
        }
        eprintln!("  {:?}: {} accumulators", order, table.as_slice().len());
    }

    assert!(rp.cleanup(), "integral_parallel regression test failed");
}

#[test]
fn integral_weighted_scan_reg() {
    let mut rp = RegParams::new("integral_weighted_scan");

    let (w, h, bins) = (40, 30, 6);
    let build_f64 = |order: ScanOrder, values: &Grid<f64>, weights: &Grid<f64>| {
        IntegralHistogram::<f64, f64>::new(
            HistogramConfig::new(w, h, 1, bins)
                .with_max_value(1.0)
                .with_scan_order(order),
        )
        .expect("engine")
        .integral_histogram_vm(std::slice::from_ref(values), std::slice::from_ref(weights))
        .expect("build")
    };

    // --- Test 1: float accumulators agree within rounding ---
    let values = lcg_grid(w, h, 21, 1.0f64).expect("values");
    let weights = Grid::from_fn(w, h, |x, y| 0.1 + (y * w + x) as f64 * 0.37).expect("weights");
    let wave = build_f64(ScanOrder::Wavefront, &values, &weights);
    let rows = build_f64(ScanOrder::RowRunningSum, &values, &weights);
    let worst = wave
        .as_slice()
        .iter()
        .zip(rows.as_slice())
        .map(|(a, b)| (a - b).abs() / a.abs().max(1.0))
        .fold(0.0f64, f64::max);
    rp.check(worst <= 1e-10, "float scan orders agree within rounding");
    eprintln!("  largest relative difference: {:e}", worst);

    let total_weight: f64 = weights.data().iter().sum();
    let wave_total: f64 = wave.total(0).expect("total").iter().sum();
    let rows_total: f64 = rows.total(0).expect("total").iter().sum();
    rp.compare_values(total_weight, wave_total, 1e-9 * total_weight);
    rp.compare_values(total_weight, rows_total, 1e-9 * total_weight);

    // --- Test 2: integer accumulators are bit-identical ---
    let values = lcg_grid(w, h, 22, u16::MAX).expect("values");
    let weights = lcg_grid(w, h, 23, 5000u16).expect("weights");
    let build_u64 = |order: ScanOrder| {
        IntegralHistogram::<u16, u64>::new(
            HistogramConfig::new(w, h, 1, bins).with_scan_order(order),
        )
        .expect("engine")
        .integral_histogram_vm(std::slice::from_ref(&values), std::slice::from_ref(&weights))
        .expect("build")
    };
    let wave = build_u64(ScanOrder::Wavefront);
    let rows = build_u64(ScanOrder::RowRunningSum);
    rp.compare_slices(wave.as_slice(), rows.as_slice());

    assert!(rp.cleanup(), "integral_weighted_scan regression test failed");
}

#[test]
fn integral_config_reg() {
    let mut rp = RegParams::new("integral_config");

    // Rejected before any table exists
    let bad = [
        HistogramConfig::<u8>::new(0, 4, 1, 4),
        HistogramConfig::<u8>::new(4, 4, 0, 4),
        HistogramConfig::<u8>::new(4, 4, 1, 0),
        HistogramConfig::<u8>::new(4, 4, 1, 4).with_max_value(0),
        HistogramConfig::<u8>::new(4, 4, 1, 9).with_magnitude_bins(2),
    ];
    for config in bad {
        let result = IntegralHistogram::<u8, u32>::new(config);
        rp.check(result.is_err(), "invalid configuration rejected");
    }

    // Grids that disagree with the configuration
    let engine =
        IntegralHistogram::<u8, u32>::new(HistogramConfig::new(4, 4, 2, 4)).expect("engine");
    let grid = Grid::<u8>::new(4, 4).expect("grid");
    let small = Grid::<u8>::new(4, 3).expect("grid");
    rp.check(
        engine.integral_histogram(&[grid.clone()]).is_err(),
        "too few channels",
    );
    rp.check(
        engine.integral_histogram(&[grid, small]).is_err(),
        "wrong grid size",
    );

    assert!(rp.cleanup(), "integral_config regression test failed");
}
