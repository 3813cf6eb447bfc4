use super::*;
use crate::landmark::{children, Formula, MOVE_COUNT};
use crate::orient::{flip_landmark, Point};

fn sample_landmarks() -> impl Iterator<Item = f64> {
    (1..20).map(|i| i as f64 / 20.0)
}

#[test]
fn quarter_moves_take_two_steps() {
    for op in 0..2 {
        let c = 0.6;
        let out = lines_from_operation(op, c, Orientation::IDENTITY).unwrap();
        assert_eq!(out.new_landmark, flip_landmark(c / 4.0, (op % 2) as u8));
        assert_eq!(out.steps.len(), 2);
    }
}

#[test]
fn out_of_range_operation_is_rejected() {
    assert_eq!(
        lines_from_operation(32, 0.5, Orientation::IDENTITY),
        Err(crate::FoldError::MoveOutOfRange(32))
    );
}

#[test]
fn new_landmark_is_the_matching_child() {
    for c in sample_landmarks() {
        let kids = children(c);
        for op in 0..MOVE_COUNT {
            let out = lines_from_operation(op, c, Orientation::new(1, 1)).unwrap();
            assert_eq!(out.new_landmark.to_bits(), kids[op].to_bits(), "op {op} at {c}");
        }
    }
}

#[test]
fn step_counts_per_construction() {
    let expected = [2, 1, 2, 1, 1, 2, 2, 2, 2, 2, 2, 1, 1, 3, 3, 1];
    for (k, &n) in expected.iter().enumerate() {
        for parity in 0..2 {
            let out = lines_from_operation(2 * k + parity, 0.4, Orientation::IDENTITY).unwrap();
            assert_eq!(out.steps.len(), n, "{:?}", Formula::ALL[k]);
        }
    }
}

#[test]
fn orientation_after_each_family_from_identity() {
    // (rotation, flip) after the even move of each family, starting unflipped.
    let expected = [
        (0, 0),
        (0, 0),
        (0, 0),
        (3, 1),
        (1, 1),
        (0, 0),
        (1, 1),
        (0, 0),
        (1, 1),
        (3, 1),
        (1, 0),
        (0, 0),
        (2, 0),
        (3, 0),
        (3, 0),
        (2, 0),
    ];
    for (k, &(r, f)) in expected.iter().enumerate() {
        let out = lines_from_operation(2 * k, 0.3, Orientation::IDENTITY).unwrap();
        assert_eq!(out.orientation, Orientation::new(r, f), "{:?}", Formula::ALL[k]);
        // The complement move differs only in flip.
        let odd = lines_from_operation(2 * k + 1, 0.3, Orientation::IDENTITY).unwrap();
        assert_eq!(odd.orientation, Orientation::new(r, f + 1));
    }
}

#[test]
fn flipped_frames_turn_the_other_way() {
    let o = Orientation::new(2, 1);
    // Quarter turn under a flip adds three.
    let out = lines_from_operation(8, 0.3, o).unwrap();
    assert_eq!(out.orientation, Orientation::new(1, 0));
    let out = lines_from_operation(6, 0.3, o).unwrap();
    assert_eq!(out.orientation, Orientation::new(3, 0));
}

#[test]
fn piecewise_family_splits_on_half() {
    let lo = lines_from_operation(30, 0.5, Orientation::IDENTITY).unwrap();
    assert_eq!(lo.orientation, Orientation::new(2, 0));
    assert!(lo.steps[0].description.contains("bottom left corner"));
    let hi = lines_from_operation(30, 0.7, Orientation::IDENTITY).unwrap();
    assert_eq!(hi.orientation, Orientation::new(2, 1));
    assert!(hi.steps[0].description.contains("top left corner"));
    assert!((hi.new_landmark - (0.7 - 0.4f64.sqrt())).abs() < 1e-15);
}

#[test]
fn descriptions_name_physical_corners() {
    let out = lines_from_operation(2, 0.5, Orientation::IDENTITY).unwrap();
    assert_eq!(
        out.steps[0].description,
        "Fold the edge perpendicular to the sides||so that the top left corner||lies on the landmark you just made"
    );
    let turned = lines_from_operation(2, 0.5, Orientation::new(1, 0)).unwrap();
    assert!(turned.steps[0].description.contains("the top right corner"));
    let lines: Vec<&str> = out.steps[0].description_lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2], "lies on the landmark you just made");
}

#[test]
fn half_fold_crease_sits_at_half_the_landmark() {
    let out = lines_from_operation(2, 0.8, Orientation::IDENTITY).unwrap();
    assert_eq!(out.steps[0].line, Line::new(0.4, 0.0, 0.4, 1.0));
    assert_eq!(out.new_landmark, 0.4);
}

#[test]
fn corner_to_landmark_crease_bisects_corner_and_landmark() {
    for c in sample_landmarks() {
        let out = lines_from_operation(6, c, Orientation::IDENTITY).unwrap();
        let line = out.steps[0].line;
        let corner = Point::new(0.0, 1.0);
        let mark = Point::new(c, 0.0);
        for p in [line.from, line.to] {
            assert!(((p - corner).norm() - (p - mark).norm()).abs() < 1e-12);
        }
        // The same crease reads (1-c)^2/2 from the bottom on the right edge.
        assert!((1.0 - line.to.y - Formula::CornerToLandmarkFar.eval(c)).abs() < 1e-12);
    }
}

#[test]
fn edge_to_edge_crease_meets_both_landmarks() {
    for c in sample_landmarks() {
        let line = lines_from_operation(22, c, Orientation::IDENTITY).unwrap().steps[0].line;
        assert!((line.from.x - Formula::EdgeToEdge.eval(c)).abs() < 1e-12);
        assert!((1.0 - line.to.x - Formula::EdgeToEdgeFar.eval(c)).abs() < 1e-12);
    }
}

#[test]
fn diagonal_intersection_lands_on_the_diagonal() {
    for c in sample_landmarks() {
        let out = lines_from_operation(26, c, Orientation::IDENTITY).unwrap();
        let mark = out.steps[2].markings[0].position();
        assert!((mark.x - mark.y).abs() < 1e-12);
        // The mark lies on the crease from (c, 0) to (0, 1).
        assert!((mark.x / c + mark.y - 1.0).abs() < 1e-12);
    }
}

#[test]
fn creases_stay_on_the_sheet() {
    for c in sample_landmarks() {
        for op in 0..MOVE_COUNT {
            let out = lines_from_operation(op, c, Orientation::IDENTITY).unwrap();
            for s in &out.steps {
                for p in [s.line.from, s.line.to] {
                    assert!(
                        (-1e-9..=1.0 + 1e-9).contains(&p.x) && (-1e-9..=1.0 + 1e-9).contains(&p.y),
                        "op {op} at {c}: {p:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn rotated_step_moves_geometry_but_not_text() {
    let step = &lines_from_operation(0, 0.5, Orientation::IDENTITY).unwrap().steps[1];
    let o = Orientation::new(1, 0);
    let r = step.rotated(o);
    assert_eq!(r.description, step.description);
    assert_eq!(r.line, Line::new(1.0, 0.125, 0.0, 0.125));
    assert_eq!(r.markings.len(), step.markings.len());
    // Arrow (0, .5) -> (.25, .5) becomes (.5, 0) -> (.5, .25), trimmed 10% per end.
    assert!((r.arrows[0].from - Point::new(0.5, 0.025)).norm() < 1e-12);
    assert!((r.arrows[0].to - Point::new(0.5, 0.225)).norm() < 1e-12);
}
