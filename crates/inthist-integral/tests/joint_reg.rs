//! Value-magnitude and joint histogram regression test

use inthist_core::{Grid, Rect};
use inthist_integral::{
    BinMapper, HistogramConfig, IntegralError, IntegralHistogram, JointBinMapper,
};
use inthist_test::{Lcg, RegParams, lcg_grid};

#[test]
fn weighted_reg() {
    let mut rp = RegParams::new("weighted");

    let (w, h, bins) = (30, 20, 10);
    let values = lcg_grid(w, h, 1, 4095u16).expect("values");
    let magnitudes = lcg_grid(w, h, 2, u16::MAX).expect("magnitudes");
    let engine = IntegralHistogram::<u16, u64>::new(
        HistogramConfig::new(w, h, 1, bins).with_max_value(4095),
    )
    .expect("engine");
    let table = engine
        .integral_histogram_vm(
            std::slice::from_ref(&values),
            std::slice::from_ref(&magnitudes),
        )
        .expect("build");

    let mapper = BinMapper::new(bins, 4095u16);
    let mut rng = Lcg::new(77);
    for _ in 0..50 {
        let rect = rng.rect_within(w, h);
        let mut expected = vec![0u64; bins];
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                expected[mapper.map(values.get_unchecked(x, y))] +=
                    u64::from(magnitudes.get_unchecked(x, y));
            }
        }
        let hist = table.region_histogram(rect).expect("query");
        rp.compare_slices(&expected, &hist);
    }

    // Magnitudes of a different depth are rejected
    let wide = Grid::<u32>::new(w, h).expect("grid");
    let err = engine.integral_histogram_vm(&[values], &[wide]);
    rp.check(
        matches!(err, Err(IntegralError::TypeMismatch { .. })),
        "mismatched magnitude depth rejected",
    );

    assert!(rp.cleanup(), "weighted regression test failed");
}

#[test]
fn joint_reg() {
    let mut rp = RegParams::new("joint");

    // --- Test 1: bins=4, magBins=2, one bright strong sample ---
    let config = HistogramConfig::new(1, 1, 1, 4).with_magnitude_bins(2);
    let engine = IntegralHistogram::<u8, u32>::new(config).expect("engine");
    let table = engine
        .integral_histogram_joint(
            &[Grid::from_rows(&[[255u8]]).expect("value")],
            &[Grid::from_rows(&[[255u8]]).expect("magnitude")],
        )
        .expect("build");
    rp.compare_slices(&[0, 0, 0, 1], table.total(0).expect("total"));

    // --- Test 2: random inputs against direct joint binning ---
    let (w, h, bins, mag_bins) = (25, 17, 24, 4);
    let values = vec![
        lcg_grid(w, h, 3, u8::MAX).expect("values"),
        lcg_grid(w, h, 4, u8::MAX).expect("values"),
    ];
    let magnitudes = vec![
        lcg_grid(w, h, 5, 200u8).expect("magnitudes"),
        lcg_grid(w, h, 6, 200u8).expect("magnitudes"),
    ];
    let engine = IntegralHistogram::<u8, u32>::new(
        HistogramConfig::new(w, h, 2, bins)
            .with_magnitude_bins(mag_bins)
            .with_max_magnitude(200),
    )
    .expect("engine");
    let table = engine
        .integral_histogram_joint(&values, &magnitudes)
        .expect("build");

    let mapper = JointBinMapper::new(bins, mag_bins, u8::MAX, 200u8);
    rp.compare_values(6.0, mapper.value_bins() as f64, 0.0);
    let rect = Rect::new(4, 2, 15, 11);
    let mut expected = vec![0u32; 2 * bins];
    for c in 0..2 {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                let bin = mapper.map(
                    values[c].get_unchecked(x, y),
                    magnitudes[c].get_unchecked(x, y),
                );
                expected[c * bins + bin] += 1;
            }
        }
    }
    rp.compare_slices(&expected, &table.region_histogram(rect).expect("query"));

    // Only the maximum magnitude reaches the last magnitude bin
    let total = table.total(0).expect("total");
    let per_mag: Vec<u32> = total.chunks(bins / mag_bins).map(|c| c.iter().sum()).collect();
    let at_max = magnitudes[0].data().iter().filter(|&&m| m == 200).count();
    rp.compare_values(at_max as f64, per_mag[mag_bins - 1] as f64, 0.0);
    rp.compare_values((w * h) as f64, per_mag.iter().sum::<u32>() as f64, 0.0);

    // --- Test 3: joint build without magnitude bins ---
    let plain = IntegralHistogram::<u8, u32>::new(HistogramConfig::new(w, h, 2, bins))
        .expect("engine");
    rp.check(
        matches!(
            plain.integral_histogram_joint(&values, &magnitudes),
            Err(IntegralError::InvalidConfiguration(_))
        ),
        "joint build requires magnitude bins",
    );

    assert!(rp.cleanup(), "joint regression test failed");
}
