use std::f64::consts::{FRAC_PI_2, PI};

use super::*;
use proptest::prelude::*;

fn close(a: Point, b: Point) -> bool {
    (a - b).norm() < 1e-12
}

#[test]
fn one_clockwise_turn_moves_top_left_point_to_top_right() {
    let p = rotate_point(0.0, 0.0, Orientation::new(1, 0));
    assert_eq!(p, Point::new(1.0, 0.0));
}

#[test]
fn rotation_table_matches_quarter_turns() {
    let (x, y) = (0.2, 0.7);
    assert_eq!(rotate_point(x, y, Orientation::new(0, 0)), Point::new(x, y));
    assert_eq!(rotate_point(x, y, Orientation::new(1, 0)), Point::new(1.0 - y, x));
    assert_eq!(
        rotate_point(x, y, Orientation::new(2, 0)),
        Point::new(1.0 - x, 1.0 - y)
    );
    assert_eq!(rotate_point(x, y, Orientation::new(3, 0)), Point::new(y, 1.0 - x));
    // Reflection axis depends on rotation parity.
    assert_eq!(rotate_point(x, y, Orientation::new(0, 1)), Point::new(1.0 - x, y));
    assert_eq!(rotate_point(x, y, Orientation::new(1, 1)), Point::new(1.0 - y, 1.0 - x));
}

#[test]
fn new_reduces_modulo_group_order() {
    assert_eq!(Orientation::new(5, 3), Orientation::new(1, 1));
    assert_eq!(Orientation::all().count(), 8);
}

#[test]
fn affine_form_agrees_with_point_map() {
    for o in Orientation::all() {
        let a = o.affine();
        assert_eq!(a.is_orientation_preserving(), !o.is_flipped());
        for i in 0..=4 {
            for j in 0..=4 {
                let (x, y) = (i as f64 / 4.0, j as f64 / 4.0);
                assert!(close(a.apply(Point::new(x, y)), rotate_point(x, y, o)));
            }
        }
    }
}

#[test]
fn group_inverse_matches_affine_inverse() {
    for o in Orientation::all() {
        let inv = o.affine().inverse().expect("isometry is invertible");
        let expected = o.inverse().affine();
        assert!((inv.m - expected.m).norm() < 1e-12);
        assert!((inv.t - expected.t).norm() < 1e-12);
    }
}

#[test]
fn corners_name_after_one_turn() {
    assert_eq!(rotate_corner_description(0, Orientation::new(1, 0)), "top right");
    assert_eq!(rotate_corner_description(3, Orientation::IDENTITY), "bottom left");
    assert_eq!(rotate_edge_description(3, Orientation::new(1, 0)), "top");
}

#[test]
fn flipped_corner_names_follow_reflection() {
    // Flip without rotation mirrors left and right.
    let o = Orientation::new(0, 1);
    assert_eq!(o.corner(Corner::TopLeft), Corner::TopRight);
    assert_eq!(o.corner(Corner::BottomLeft), Corner::BottomRight);
    assert_eq!(o.edge(Edge::Left), Edge::Right);
    assert_eq!(o.edge(Edge::Top), Edge::Top);
}

#[test]
fn names_track_point_map_except_flipped_odd_turns() {
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ];
    let edge_mids = [
        Point::new(0.5, 0.0),
        Point::new(1.0, 0.5),
        Point::new(0.5, 1.0),
        Point::new(0.0, 0.5),
    ];
    for o in Orientation::all().filter(|o| !(o.is_flipped() && o.rotation() % 2 == 1)) {
        for c in Corner::ALL {
            let p = corners[c.index()];
            assert!(close(rotate_point(p.x, p.y, o), corners[o.corner(c).index()]), "{o:?} {c:?}");
        }
        for e in Edge::ALL {
            let p = edge_mids[e.index()];
            assert!(close(rotate_point(p.x, p.y, o), edge_mids[o.edge(e).index()]), "{o:?} {e:?}");
        }
    }
    // Flipped odd turns name corners across the other diagonal than the point map.
    let o = Orientation::new(1, 1);
    assert_eq!(o.corner(Corner::TopLeft), Corner::TopLeft);
    assert_eq!(rotate_point(0.0, 0.0, o), Point::new(1.0, 1.0));
}

#[test]
fn naming_is_total() {
    let corners = ["top left", "top right", "bottom right", "bottom left"];
    let edges = ["top", "right", "bottom", "left"];
    for o in Orientation::all() {
        for i in 0..4 {
            assert!(corners.contains(&rotate_corner_description(i, o)));
            assert!(edges.contains(&rotate_edge_description(i, o)));
        }
    }
}

#[test]
fn naming_is_a_permutation() {
    for o in Orientation::all() {
        let mut cs: Vec<usize> = Corner::ALL.iter().map(|&c| o.corner(c).index()).collect();
        let mut es: Vec<usize> = Edge::ALL.iter().map(|&e| o.edge(e).index()).collect();
        cs.sort_unstable();
        es.sort_unstable();
        assert_eq!(cs, vec![0, 1, 2, 3]);
        assert_eq!(es, vec![0, 1, 2, 3]);
    }
}

#[test]
fn flip_landmark_complements_on_odd() {
    assert_eq!(flip_landmark(0.3, 0), 0.3);
    assert!((flip_landmark(0.3, 1) - 0.7).abs() < 1e-15);
}

#[test]
fn arrow_is_trimmed_after_rotation() {
    let a = rotate_arrow(&Arrow::new(0.0, 0.5, 1.0, 0.5), Orientation::IDENTITY);
    assert!(close(a.from, Point::new(0.1, 0.5)));
    assert!(close(a.to, Point::new(0.9, 0.5)));
    let b = rotate_arrow(&Arrow::new(0.0, 0.5, 1.0, 0.5), Orientation::new(1, 0));
    assert!(close(b.from, Point::new(0.5, 0.1)));
    assert!(close(b.to, Point::new(0.5, 0.9)));
}

#[test]
fn section_angle_rule_depends_on_flip() {
    let m = Marking::section(0.25, 0.5, 0.3);
    match rotate_marking(&m, Orientation::new(1, 0)) {
        Marking::Section { at, angle } => {
            assert!(close(at, Point::new(0.5, 0.25)));
            assert!((angle - (-0.3 - FRAC_PI_2)).abs() < 1e-15);
        }
        other => panic!("expected section, got {other:?}"),
    }
    match rotate_marking(&m, Orientation::new(2, 1)) {
        Marking::Section { angle, .. } => assert!((angle - (0.3 + PI)).abs() < 1e-15),
        other => panic!("expected section, got {other:?}"),
    }
    let dot = rotate_marking(&Marking::point(0.0, 0.0), Orientation::new(3, 0));
    assert_eq!(dot, Marking::point(0.0, 1.0));
}

#[test]
fn advance_applies_turn_and_parity() {
    let o = Orientation::new(1, 1);
    assert_eq!(o.advance(Turn::None, false, 0), o);
    assert_eq!(o.advance(Turn::None, false, 1), Orientation::new(1, 0));
    // Flipped: a quarter turn adds three, three quarters add one.
    assert_eq!(o.advance(Turn::Quarter, false, 0), Orientation::new(0, 1));
    assert_eq!(o.advance(Turn::ThreeQuarter, true, 0), Orientation::new(2, 0));
    assert_eq!(
        Orientation::IDENTITY.advance(Turn::Half, false, 1),
        Orientation::new(2, 1)
    );
}

#[test]
fn wire_shapes_match_renderer() {
    let line = Line::new(0.25, 0.0, 0.25, 1.0);
    assert_eq!(serde_json::to_string(&line).unwrap(), "[0.25,0.0,0.25,1.0]");
    let m: Marking = serde_json::from_str("[0.5,0.0,1.5]").unwrap();
    assert_eq!(m, Marking::section(0.5, 0.0, 1.5));
    assert!(serde_json::from_str::<Marking>("[1.0]").is_err());
    let o = serde_json::to_value(Orientation::new(3, 1)).unwrap();
    assert_eq!(o, serde_json::json!({"rotation": 3, "flip": 1}));
}

proptest! {
    #[test]
    fn rotation_round_trips(x in 0.0f64..=1.0, y in 0.0f64..=1.0, r in 0u32..4, f in 0u32..2) {
        let o = Orientation::new(r, f);
        let p = rotate_point(x, y, o);
        let back = rotate_point(p.x, p.y, o.inverse());
        prop_assert!(close(back, Point::new(x, y)));
        if f == 0 {
            prop_assert_eq!(o.inverse(), Orientation::new((4 - r) % 4, 0));
        }
    }

    #[test]
    fn lines_map_endpoint_by_endpoint(x1 in 0.0f64..=1.0, y1 in 0.0f64..=1.0, x2 in 0.0f64..=1.0, y2 in 0.0f64..=1.0, r in 0u32..4, f in 0u32..2) {
        let o = Orientation::new(r, f);
        let l = rotate_line(&Line::new(x1, y1, x2, y2), o);
        prop_assert!(close(l.from, rotate_point(x1, y1, o)));
        prop_assert!(close(l.to, rotate_point(x2, y2, o)));
    }
}
