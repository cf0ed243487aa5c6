mod common;

use common::synthetic_image::{checkerboard_rgba, uniform_rgba, vertical_split_rgba};
use raster_lab::convolve::{convolve, sobel, Kernel, SobelAxis};
use raster_lab::formula::Formula;
use raster_lab::frequency::magnitude_spectrum_with_stats;
use raster_lab::morphology::{open, threshold, StructElement};

#[test]
fn identity_kernel_reproduces_a_checkerboard() {
    let _ = env_logger::builder().is_test(true).try_init();
    let img = checkerboard_rgba(32, 24, 4);
    let out = convolve(&img, &Kernel::identity(3));
    assert_eq!(out.samples, img.samples);
}

#[test]
fn custom_kernel_matches_synthesized_box() {
    let img = checkerboard_rgba(16, 16, 3);
    let third = 1.0 / 9.0;
    let rows = vec![vec![third; 3]; 3];
    let custom = convolve(&img, &Kernel::from_rows(&rows).unwrap());
    let synthesized = convolve(&img, &Kernel::boxcar(3));
    assert_eq!(custom.samples, synthesized.samples);
}

#[test]
fn sobel_magnitude_peaks_on_the_split_boundary() {
    let img = vertical_split_rgba(16, 16);
    let out = sobel(&img, SobelAxis::Magnitude);
    let edge = out.get_pixel(8, 8).unwrap()[0];
    let flat = out.get_pixel(3, 8).unwrap()[0];
    assert!(edge > flat, "edge={edge} flat={flat}");
    assert_eq!(flat, 0);
}

#[test]
fn opening_a_thresholded_checkerboard_is_idempotent() {
    let binary = threshold(&checkerboard_rgba(24, 24, 4), 128.0);
    let once = open(&binary, &StructElement::FULL_8);
    let twice = open(&once, &StructElement::FULL_8);
    assert_eq!(once.samples, twice.samples);
}

#[test]
fn formula_matches_the_equivalent_point_op() {
    let img = checkerboard_rgba(8, 8, 2);
    let via_formula = Formula::parse("255 - r").unwrap().apply(&img);
    let via_pointop = raster_lab::pointops::negative(&img);
    assert_eq!(via_formula.samples, via_pointop.samples);
}

#[test]
fn spectrum_of_a_uniform_image_is_a_single_center_peak() {
    let img = uniform_rgba(16, 16, 180);
    let (out, stats) = magnitude_spectrum_with_stats(&img);
    assert_eq!((stats.padded_width, stats.padded_height), (16, 16));
    assert_eq!(out.get_pixel(8, 8).unwrap()[0], 255);
    assert_eq!(out.get_pixel(0, 0).unwrap()[0], 0);
    assert_eq!(out.get_pixel(15, 15).unwrap()[3], 255);
}

#[test]
fn spectrum_of_non_power_of_two_input_keeps_its_size() {
    let img = checkerboard_rgba(20, 12, 4);
    let (out, stats) = magnitude_spectrum_with_stats(&img);
    assert_eq!((out.width, out.height), (20, 12));
    assert_eq!((stats.padded_width, stats.padded_height), (32, 16));
}
