use doubleslit_compute::{
    field_intensity, fringe_spacing_mm, wavelength_to_tint, FrameRenderer, OpticalParameters,
    ScreenMapping, ViewportSize, DEFAULT_PHYSICAL_WIDTH_MM,
};

/// Physical x positions (mm) of local intensity maxima along y = 0, sampled
/// finely enough to resolve fringes for the parameters used here.
fn maxima_along_x(params: &OpticalParameters, half_range_mm: f64, step_mm: f64) -> Vec<f64> {
    let n = (2.0 * half_range_mm / step_mm) as usize;
    let samples: Vec<(f64, f64)> = (0..=n)
        .map(|i| {
            let x = -half_range_mm + i as f64 * step_mm;
            (x, field_intensity(x, 0.0, params))
        })
        .collect();

    samples
        .windows(3)
        .filter(|w| w[1].1 > w[0].1 && w[1].1 >= w[2].1)
        .map(|w| w[1].0)
        .collect()
}

fn mean_spacing(maxima: &[f64]) -> f64 {
    let gaps: Vec<f64> = maxima.windows(2).map(|w| w[1] - w[0]).collect();
    gaps.iter().sum::<f64>() / gaps.len() as f64
}

/// Row of intensities (green channel) through the vertical centre.
fn centre_row(buffer: &doubleslit_compute::PixelBuffer) -> Vec<u8> {
    let y = buffer.height() / 2;
    (0..buffer.width())
        .map(|x| buffer.pixel(x, y).unwrap()[1])
        .collect()
}

#[test]
fn green_light_bright_centre_fringe() {
    let params = OpticalParameters::new(500.0, 0.5, 100.0).unwrap();
    let size = ViewportSize::new(400, 300);
    let buffer = FrameRenderer::default().render(&params, size);

    assert_eq!(field_intensity(0.0, 0.0, &params), 1.0);

    let [r, g, b, a] = buffer.pixel(200, 150).unwrap();
    assert_eq!(r, 0);
    assert_eq!(g, 255);
    assert!(b <= 128, "b = {b}");
    assert_eq!(a, 255);
}

#[test]
fn far_red_wavelength_is_dimmed() {
    let params = OpticalParameters::new(780.0, 0.5, 100.0).unwrap();
    let buffer = FrameRenderer::default().render(&params, ViewportSize::new(100, 50));

    let [r, g, b, a] = buffer.pixel(50, 25).unwrap();
    assert!((76..=77).contains(&r), "r = {r}");
    assert_eq!((g, b, a), (0, 0, 255));
}

#[test]
fn out_of_range_wavelength_renders_black_but_opaque() {
    let params = OpticalParameters::new(900.0, 0.5, 100.0).unwrap();
    let buffer = FrameRenderer::default().render(&params, ViewportSize::new(32, 16));
    assert!(buffer.pixels().all(|p| p == [0, 0, 0, 255]));
}

#[test]
fn doubling_wavelength_doubles_fringe_period() {
    let base = OpticalParameters::new(400.0, 0.5, 100.0).unwrap();
    let doubled = base.with_wavelength(800.0);

    let period_base = mean_spacing(&maxima_along_x(&base, 5.0, 0.001));
    let period_doubled = mean_spacing(&maxima_along_x(&doubled, 5.0, 0.001));

    let ratio = period_doubled / period_base;
    assert!((ratio - 2.0).abs() < 0.01, "ratio = {ratio}");

    // And both agree with λL/d.
    assert!((period_base - fringe_spacing_mm(&base)).abs() < 0.01);
}

#[test]
fn rendering_is_idempotent() {
    let renderer = FrameRenderer::default();
    let params = OpticalParameters::new(532.0, 0.25, 80.0).unwrap();
    let size = ViewportSize::new(97, 61);

    let first = renderer.render(&params, size);
    let second = renderer.render(&params, size);
    assert_eq!(first, second);
}

#[test]
fn resize_keeps_spatial_frequency_per_mm() {
    // Coarse fringes (λL/d = 6.5 mm) so both sizes resolve them.
    let params = OpticalParameters::new(650.0, 0.2, 200.0).unwrap();
    let renderer = FrameRenderer::default();

    let small = renderer.render(&params, ViewportSize::new(400, 10));
    let large = renderer.render(&params, ViewportSize::new(800, 10));

    let small_map = ScreenMapping::new(small.size(), DEFAULT_PHYSICAL_WIDTH_MM);
    let large_map = ScreenMapping::new(large.size(), DEFAULT_PHYSICAL_WIDTH_MM);

    // The same physical point has (nearly) the same brightness at both sizes.
    let small_row = centre_row(&small);
    let large_row = centre_row(&large);
    for px in (0..400).step_by(7) {
        let x_mm = small_map.x_mm(px);
        let (large_px, _) = large_map.physical_to_pixel(x_mm, 0.0);
        let a = small_row[px as usize] as i32;
        let b = large_row[large_px.round() as usize] as i32;
        assert!((a - b).abs() <= 1, "x = {x_mm} mm: {a} vs {b}");
    }
}

#[test]
fn every_channel_is_bounded_by_tint() {
    let params = OpticalParameters::new(590.0, 1.0, 50.0).unwrap();
    let tint = wavelength_to_tint(params.wavelength_nm);
    let buffer = FrameRenderer::default().render(&params, ViewportSize::new(120, 80));

    for [r, g, b, a] in buffer.pixels() {
        assert!(r <= tint.r && g <= tint.g && b <= tint.b);
        assert_eq!(a, 255);
    }
}
