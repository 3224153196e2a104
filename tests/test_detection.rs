mod common;

use imageproc::rect::Rect;
use platescan::PlateDetector;

#[test]
fn selects_quadrilateral_in_lower_region() {
    // 30% of 240 = 72; the rectangle starts well below that
    let img = common::scene_with_rectangle(320, 240, Rect::at(80, 150).of_size(120, 40));
    let outcome = PlateDetector::new().detect(&img);

    let plate = outcome
        .plate
        .expect("rectangle in the lower region should be selected");
    let bbox = &plate.candidate.bbox;

    // Edge detection can shift the boundary by a few pixels
    assert!(bbox.x.abs_diff(80) <= 6, "unexpected x: {}", bbox.x);
    assert!(bbox.y.abs_diff(150) <= 6, "unexpected y: {}", bbox.y);
    assert!(bbox.width.abs_diff(120) <= 12, "unexpected width: {}", bbox.width);
    assert!(bbox.height.abs_diff(40) <= 12, "unexpected height: {}", bbox.height);

    assert_eq!(plate.candidate.corners.len(), 4);
    assert_eq!(
        (plate.image.width(), plate.image.height()),
        (bbox.width, bbox.height)
    );
}

#[test]
fn rejects_quadrilateral_in_top_band() {
    // The only rectangle sits entirely inside the top 30% of the frame
    let img = common::scene_with_rectangle(320, 240, Rect::at(80, 8).of_size(120, 40));
    let outcome = PlateDetector::new().detect(&img);

    assert!(outcome.plate.is_none());
}

#[test]
fn blank_scene_produces_no_candidate() {
    let img = common::blank_scene(320, 240);
    let outcome = PlateDetector::new().detect(&img);

    assert!(outcome.plate.is_none());
}

#[test]
fn filter_size_does_not_change_stage_dimensions() {
    let img = common::scene_with_rectangle(320, 240, Rect::at(80, 150).of_size(120, 40));

    for filter_size in [3, 11, 19] {
        let outcome = PlateDetector::new()
            .with_filter_size(filter_size)
            .detect(&img);

        assert_eq!(outcome.grayscale.dimensions(), (320, 240));
        assert_eq!(outcome.edges.dimensions(), (320, 240));
    }
}

#[test]
fn selection_is_deterministic() {
    let img = common::scene_with_rectangle(320, 240, Rect::at(80, 150).of_size(120, 40));

    let first = PlateDetector::new().detect(&img);
    let second = PlateDetector::new().detect(&img);

    match (first.plate, second.plate) {
        (Some(a), Some(b)) => {
            assert_eq!(a.candidate.bbox, b.candidate.bbox);
            assert_eq!(a.candidate.corners, b.candidate.corners);
        }
        (None, None) => panic!("expected a candidate in both runs"),
        _ => panic!("runs disagreed on candidate selection"),
    }
}

#[test]
fn outline_is_drawn_on_detection() {
    let img = common::scene_with_rectangle(320, 240, Rect::at(80, 150).of_size(120, 40));
    let outcome = PlateDetector::new().detect(&img);
    assert!(outcome.plate.is_some());

    // The outlined copy must differ from the original where the outline runs
    let original = img.to_rgb8();
    assert!(
        outcome
            .outlined
            .pixels()
            .zip(original.pixels())
            .any(|(a, b)| a != b)
    );
}
