mod common;

use common::synthetic_image::{horizontal_ramp_rgba, uniform_rgba};
use raster_lab::pointops::{
    equalize_histogram, gamma_correction, log_transform, negative, Histogram,
};

#[test]
fn negative_is_an_involution_on_a_ramp() {
    let _ = env_logger::builder().is_test(true).try_init();
    let img = horizontal_ramp_rgba(64, 4);
    let twice = negative(&negative(&img));
    assert_eq!(twice.samples, img.samples);
}

#[test]
fn gamma_one_is_identity_within_one_step() {
    let img = horizontal_ramp_rgba(128, 2);
    let out = gamma_correction(&img, 1.0, 1.0);
    for (a, b) in img.samples.iter().zip(out.samples.iter()) {
        assert!((*a as i16 - *b as i16).abs() <= 1);
    }
}

#[test]
fn gamma_below_one_brightens_midtones() {
    let img = uniform_rgba(4, 4, 64);
    let bright = gamma_correction(&img, 0.5, 1.0);
    let dark = gamma_correction(&img, 2.0, 1.0);
    assert!(bright.get_pixel(0, 0).unwrap()[0] > 64);
    assert!(dark.get_pixel(0, 0).unwrap()[0] < 64);
}

#[test]
fn log_transform_expands_dark_values() {
    let img = uniform_rgba(2, 2, 16);
    let out = log_transform(&img, 1.0);
    assert!(out.get_pixel(0, 0).unwrap()[0] > 16);
}

#[test]
fn equalizing_a_uniform_image_yields_one_value() {
    let img = uniform_rgba(8, 8, 77);
    let out = equalize_histogram(&img);
    let first = out.get_pixel(0, 0).unwrap()[0];
    assert!(out
        .samples
        .chunks_exact(4)
        .all(|px| px[0] == first && px[1] == first && px[2] == first));
}

#[test]
fn histogram_totals_match_the_pixel_count() {
    let img = horizontal_ramp_rgba(32, 8);
    let hist = Histogram::of(&img);
    let pixels = 32 * 8;
    assert_eq!(hist.r.iter().sum::<u32>(), pixels);
    assert_eq!(hist.g.iter().sum::<u32>(), pixels);
    assert_eq!(hist.b.iter().sum::<u32>(), pixels);
    assert_eq!(hist.luma.iter().sum::<u32>(), pixels);
}
