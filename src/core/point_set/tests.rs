use super::*;
use crate::core::{Domain, SequentialIds};
use approx::assert_abs_diff_eq;

const WIDE: Domain = Domain::new(-1000.0, 1000.0);

/// Baut eine sortierte Punktliste mit IDs 1..=n.
fn pts(coords: &[(f64, f64)]) -> Vec<CurvePoint> {
    coords
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| CurvePoint::new(PointId(i as u64 + 1), DVec2::new(x, y)))
        .collect()
}

fn sel(ids: &[u64]) -> Selection {
    ids.iter().map(|&i| PointId(i)).collect()
}

fn xs(points: &[CurvePoint]) -> Vec<f64> {
    points.iter().map(|p| p.x()).collect()
}

/// ID-Generator, der nicht mit den Test-IDs kollidiert.
fn fresh_ids() -> SequentialIds {
    let mut ids = SequentialIds::new();
    for _ in 0..100 {
        ids.next_point_id();
    }
    ids
}

// ─── insert / remove ─────────────────────────────────────────────────────────

#[test]
fn insert_keeps_x_order() {
    let points = pts(&[(0.0, 0.0), (10.0, 0.0)]);
    let out = insert(&points, CurvePoint::new(PointId(9), DVec2::new(5.0, 1.0)));
    assert_eq!(xs(&out), vec![0.0, 5.0, 10.0]);

    let out = insert(&out, CurvePoint::new(PointId(10), DVec2::new(-3.0, 1.0)));
    assert_eq!(xs(&out), vec![-3.0, 0.0, 5.0, 10.0]);
}

#[test]
fn insert_with_equal_x_goes_after_existing() {
    let points = pts(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
    let out = insert(&points, CurvePoint::new(PointId(9), DVec2::new(5.0, 3.0)));
    assert_eq!(out[1].id, PointId(2));
    assert_eq!(out[2].id, PointId(9));
}

#[test]
fn remove_unknown_id_is_noop() {
    let points = pts(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
    assert_eq!(remove(&points, PointId(42)), points);
}

#[test]
fn remove_refuses_to_go_below_two_points() {
    let points = pts(&[(0.0, 0.0), (10.0, 0.0)]);
    assert_eq!(remove(&points, PointId(1)).len(), 2);

    let points = pts(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
    let out = remove(&points, PointId(2));
    assert_eq!(xs(&out), vec![0.0, 10.0]);
}

#[test]
fn delete_selected_keeps_minimum_count() {
    let points = pts(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
    assert_eq!(delete_selected(&points, &sel(&[1, 2])), points);

    let out = delete_selected(&points, &sel(&[2]));
    assert_eq!(xs(&out), vec![0.0, 10.0]);
}

// ─── flip ────────────────────────────────────────────────────────────────────

#[test]
fn flip_y_negates_selected_only() {
    let points = pts(&[(-10.0, 1.0), (0.0, 2.0), (10.0, 1.0)]);
    let out = flip_y(&points, &sel(&[2]), Domain::new(-5.0, 5.0), AxisSnap::off());
    assert_eq!(out[0].y(), 1.0);
    assert_eq!(out[1].y(), -2.0);
    assert_eq!(out[2].y(), 1.0);
}

#[test]
fn flip_y_twice_restores_values() {
    let points = pts(&[(0.0, 0.3), (1.0, -1.7), (2.0, 4.2)]);
    let selection = sel(&[1, 2, 3]);
    let once = flip_y(&points, &selection, WIDE, AxisSnap::off());
    let twice = flip_y(&once, &selection, WIDE, AxisSnap::off());
    for (a, b) in points.iter().zip(&twice) {
        assert_abs_diff_eq!(a.y(), b.y(), epsilon = 1e-12);
    }
}

#[test]
fn flip_y_clamps_to_domain() {
    let points = pts(&[(0.0, -4.0), (1.0, 0.0)]);
    let out = flip_y(&points, &sel(&[1]), Domain::new(-5.0, 3.0), AxisSnap::off());
    assert_eq!(out[0].y(), 3.0);
}

#[test]
fn flip_x_mirrors_within_selection_span_and_resorts() {
    let points = pts(&[(0.0, 0.0), (2.0, 1.0), (3.0, 2.0), (8.0, 3.0), (10.0, 4.0)]);
    let out = flip_x(&points, &sel(&[2, 3, 4]), WIDE, AxisSnap::off());
    assert!(is_sorted_by_x(&out));
    // Spanne [2, 8]: 2 -> 8, 3 -> 7, 8 -> 2
    let by_id = |id: u64| out.iter().find(|p| p.id == PointId(id)).unwrap().x();
    assert_eq!(by_id(2), 8.0);
    assert_eq!(by_id(3), 7.0);
    assert_eq!(by_id(4), 2.0);
    assert_eq!(by_id(1), 0.0);
    assert_eq!(by_id(5), 10.0);
}

// ─── trim ────────────────────────────────────────────────────────────────────

#[test]
fn trim_keeps_spatial_window() {
    let points = pts(&[(0.0, 0.0), (2.0, 0.0), (5.0, 0.0), (8.0, 0.0), (10.0, 0.0)]);
    let out = trim(&points, &sel(&[2, 4]));
    assert_eq!(xs(&out), vec![2.0, 5.0, 8.0]);
}

#[test]
fn trim_with_single_selected_is_noop() {
    let points = pts(&[(0.0, 0.0), (2.0, 0.0), (5.0, 0.0)]);
    assert_eq!(trim(&points, &sel(&[2])), points);
    // veraltete ID zählt nicht mit
    assert_eq!(trim(&points, &sel(&[2, 77])), points);
}

// ─── mirror ──────────────────────────────────────────────────────────────────

#[test]
fn mirror_right_reflects_across_max_point() {
    let points = pts(&[(0.0, 1.0), (2.0, 2.0), (4.0, 3.0), (9.0, 0.0)]);
    let mut ids = fresh_ids();
    let result = mirror(&points, &sel(&[1, 2, 3]), Direction::Right, WIDE, WIDE, &mut ids);

    assert!(is_sorted_by_x(&result.points));
    // Anker x=4: 2 -> 6, 0 -> 8; Punkt bei x=9 liegt außerhalb des neuen Bereichs
    assert_eq!(xs(&result.points), vec![0.0, 2.0, 4.0, 6.0, 8.0, 9.0]);
    assert_eq!(result.points[3].y(), 2.0);
    assert_eq!(result.points[4].y(), 1.0);
    assert_eq!(result.selection.len(), 3);
    assert!(result.selection.contains(&PointId(3)));
}

#[test]
fn mirror_produces_k_minus_one_exact_reflections() {
    let points = pts(&[(1.0, 0.0), (1.5, 0.0), (2.25, 0.0), (3.0, 0.0), (20.0, 0.0)]);
    let selection = sel(&[1, 2, 3, 4]);
    let mut ids = fresh_ids();
    let result = mirror(&points, &selection, Direction::Right, WIDE, WIDE, &mut ids);

    let created: Vec<&CurvePoint> = result
        .points
        .iter()
        .filter(|p| !points.iter().any(|o| o.id == p.id))
        .collect();
    assert_eq!(created.len(), 3);
    let anchor_x = 3.0;
    for src in [1.0, 1.5, 2.25] {
        let expected = 2.0 * anchor_x - src;
        assert!(created.iter().any(|p| p.x() == expected), "fehlt: {expected}");
    }
}

#[test]
fn mirror_right_displaces_points_in_claimed_span() {
    let points = pts(&[(0.0, 0.0), (4.0, 1.0), (5.0, 9.0), (7.0, 9.0), (20.0, 0.0)]);
    let mut ids = fresh_ids();
    let result = mirror(&points, &sel(&[1, 2]), Direction::Right, WIDE, WIDE, &mut ids);
    // Anker x=4, neuer Punkt bei x=8 -> Bereich (4, 8] wird beansprucht
    assert_eq!(xs(&result.points), vec![0.0, 4.0, 8.0, 20.0]);
}

#[test]
fn mirror_left_reflects_across_min_point() {
    let points = pts(&[(-9.0, 0.0), (0.0, 1.0), (3.0, 2.0)]);
    let mut ids = fresh_ids();
    let result = mirror(&points, &sel(&[2, 3]), Direction::Left, WIDE, WIDE, &mut ids);
    assert_eq!(xs(&result.points), vec![-9.0, -3.0, 0.0, 3.0]);
    assert_eq!(result.points[1].y(), 2.0);
    assert!(result.selection.contains(&PointId(2)));
}

#[test]
fn mirror_clamps_to_domain_and_drops_collapsed_copies() {
    let points = pts(&[(0.0, 0.0), (1.0, 0.0), (8.0, 0.0)]);
    let mut ids = fresh_ids();
    let result = mirror(
        &points,
        &sel(&[1, 2, 3]),
        Direction::Right,
        Domain::new(0.0, 10.0),
        WIDE,
        &mut ids,
    );
    // 1 -> 15 und 0 -> 16 landen beide auf 10: nur einer bleibt
    assert_eq!(xs(&result.points), vec![0.0, 1.0, 8.0, 10.0]);
    assert!(result.points.iter().all(|p| p.x() <= 10.0));
}

#[test]
fn mirror_needs_two_selected_points() {
    let points = pts(&[(0.0, 0.0), (1.0, 0.0)]);
    let mut ids = fresh_ids();
    let result = mirror(&points, &sel(&[1]), Direction::Right, WIDE, WIDE, &mut ids);
    assert_eq!(result.points, points);
    assert_eq!(result.selection, sel(&[1]));
}

// ─── duplicate ───────────────────────────────────────────────────────────────

#[test]
fn duplicate_right_filters_copy_on_anchor() {
    let points = pts(&[(0.0, 0.0), (10.0, 5.0)]);
    let mut ids = fresh_ids();
    let result = duplicate(&points, &sel(&[1, 2]), Direction::Right, WIDE, WIDE, &mut ids);

    assert_eq!(xs(&result.points), vec![0.0, 10.0, 20.0]);
    assert_eq!(result.points[2].y(), 5.0);
    assert_eq!(result.selection.len(), 1);
    assert!(result.selection.contains(&result.points[2].id));
}

#[test]
fn duplicate_left_shifts_by_span_width() {
    let points = pts(&[(-30.0, 0.0), (-15.0, 7.0), (0.0, 1.0), (5.0, 2.0), (10.0, 3.0)]);
    let mut ids = fresh_ids();
    let result = duplicate(&points, &sel(&[3, 5]), Direction::Left, WIDE, WIDE, &mut ids);
    // Spanne [0, 10] inkl. x=5: Kopien bei -5 und -10, (-10, 0) wird beansprucht
    assert_eq!(xs(&result.points), vec![-30.0, -15.0, -10.0, -5.0, 0.0, 5.0, 10.0]);
    assert_eq!(result.selection.len(), 2);
}

#[test]
fn duplicate_single_point_is_noop() {
    let points = pts(&[(0.0, 0.0), (10.0, 5.0)]);
    let mut ids = fresh_ids();
    let result = duplicate(&points, &sel(&[2]), Direction::Right, WIDE, WIDE, &mut ids);
    assert_eq!(result.points, points);
    assert_eq!(result.selection, sel(&[2]));
}

// ─── paste ───────────────────────────────────────────────────────────────────

#[test]
fn paste_aligns_to_first_selected_and_replaces_span() {
    let points = pts(&[(0.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0), (9.0, 0.0)]);
    let incoming = [
        PlainPoint::new(100.0, 1.0),
        PlainPoint::new(101.0, 2.0),
        PlainPoint::new(102.5, 3.0),
    ];
    let mut ids = fresh_ids();
    let result = replace_selection_with_points(
        &points,
        &sel(&[2, 4]),
        &incoming,
        WIDE,
        Domain::new(-2.5, 2.5),
        &mut ids,
    );

    // Anker x=2, Breite 2.5: [2, 4.5] wird ersetzt
    assert_eq!(xs(&result.points), vec![0.0, 2.0, 3.0, 4.5, 9.0]);
    assert_eq!(result.points[3].y(), 2.5);
    assert_eq!(result.selection.len(), 3);
    assert!(!result.selection.contains(&PointId(2)));
}

#[test]
fn paste_without_selection_or_data_is_noop() {
    let points = pts(&[(0.0, 0.0), (2.0, 0.0)]);
    let mut ids = fresh_ids();
    let incoming = [PlainPoint::new(1.0, 1.0)];
    let empty = replace_selection_with_points(&points, &sel(&[]), &incoming, WIDE, WIDE, &mut ids);
    assert_eq!(empty.points, points);

    let nothing = replace_selection_with_points(&points, &sel(&[1]), &[], WIDE, WIDE, &mut ids);
    assert_eq!(nothing.points, points);
    assert_eq!(nothing.selection, sel(&[1]));
}

// ─── move to coordinate ──────────────────────────────────────────────────────

#[test]
fn move_x_respects_unselected_neighbors() {
    let points = pts(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
    let out = move_selection_to(&points, &sel(&[2]), Axis::X, 50.0, WIDE, AxisSnap::off());
    assert_eq!(xs(&out), vec![0.0, 10.0, 10.0]);
    assert_eq!(out[1].id, PointId(2));
}

#[test]
fn move_x_with_snap_stays_behind_off_grid_neighbor() {
    let points = pts(&[(0.0, 0.0), (5.0, 0.0), (10.5, 0.0)]);
    let out = move_selection_to(
        &points,
        &sel(&[2]),
        Axis::X,
        50.0,
        WIDE,
        AxisSnap::new(true, 4.0),
    );
    // Raster 4 würde 10.5 auf 12 runden, jenseits des festen Nachbarn
    assert_eq!(xs(&out), vec![0.0, 10.5, 10.5]);
    let order: Vec<PointId> = out.iter().map(|p| p.id).collect();
    assert_eq!(order, vec![PointId(1), PointId(2), PointId(3)]);
}

#[test]
fn move_x_with_snap_inside_limits_uses_grid() {
    let points = pts(&[(0.0, 0.0), (5.0, 0.0), (10.5, 0.0)]);
    let out = move_selection_to(
        &points,
        &sel(&[2]),
        Axis::X,
        6.5,
        WIDE,
        AxisSnap::new(true, 4.0),
    );
    assert_eq!(xs(&out), vec![0.0, 8.0, 10.5]);
}

#[test]
fn move_y_moves_centroid_and_snaps() {
    let points = pts(&[(0.0, 1.0), (5.0, 3.0), (10.0, 0.0)]);
    let out = move_selection_to(
        &points,
        &sel(&[1, 2]),
        Axis::Y,
        0.0,
        WIDE,
        AxisSnap::new(true, 0.5),
    );
    assert_eq!(out[0].y(), -1.0);
    assert_eq!(out[1].y(), 1.0);
    assert_eq!(out[2].y(), 0.0);
}

// ─── Invarianten ─────────────────────────────────────────────────────────────

#[test]
fn operation_sequence_keeps_points_sorted() {
    let mut points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, -1.0), (3.0, 0.5), (4.0, 2.0)]);
    let mut ids = fresh_ids();
    let mut selection = sel(&[2, 3]);

    for step in 0..12 {
        let result = match step % 4 {
            0 => duplicate(&points, &selection, Direction::Right, WIDE, WIDE, &mut ids),
            1 => mirror(&points, &selection, Direction::Left, WIDE, WIDE, &mut ids),
            2 => EditResult {
                points: flip_x(&points, &selection, WIDE, AxisSnap::new(true, 0.25)),
                selection: selection.clone(),
            },
            _ => EditResult {
                points: flip_y(&points, &selection, WIDE, AxisSnap::off()),
                selection: selection.clone(),
            },
        };
        points = result.points;
        selection = result.selection;
        assert!(is_sorted_by_x(&points), "Schritt {step}");
        assert!(points.iter().all(|p| WIDE.contains(p.x()) && WIDE.contains(p.y())));
    }
}

#[test]
fn neighbor_limits_skip_selected_points() {
    let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
    let limits = neighbor_limits(&points, &sel(&[2, 3]));
    assert_eq!(limits, vec![(1, Some(0.0), Some(3.0)), (2, Some(0.0), Some(3.0))]);

    let limits = neighbor_limits(&points, &sel(&[1]));
    assert_eq!(limits, vec![(0, None, Some(1.0))]);
}

#[test]
fn points_in_rect_accepts_any_corner_order() {
    let points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 5.0)]);
    let ids = points_in_rect(&points, DVec2::new(2.0, 2.0), DVec2::new(0.5, -1.0));
    assert_eq!(ids, vec![PointId(2)]);
}
