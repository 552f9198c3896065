use glam::IVec2;
use tilecrawl::geometry::*;

fn collect_path(from: IVec2, to: IVec2, elbow: Elbow) -> Vec<IVec2> {
    let mut cells = Vec::new();
    for (start, end) in l_path(from, to, elbow) {
        walk_line(start, end, |p| { cells.push(p); true });
    }
    cells
}

#[test]
fn test_l_path_is_contiguous() {
    for elbow in [Elbow::HorizontalFirst, Elbow::VerticalFirst] {
        let cells = collect_path(IVec2::new(2, 9), IVec2::new(7, 3), elbow);
        assert_eq!(cells.first(), Some(&IVec2::new(2, 9)));
        assert_eq!(cells.last(), Some(&IVec2::new(7, 3)));
        for pair in cells.windows(2) {
            let step = (pair[1] - pair[0]).abs();
            // Consecutive cells are orthogonal neighbours, or the shared elbow repeated.
            assert!(step.x + step.y <= 1, "gap between {:?} and {:?}", pair[0], pair[1]);
        }
    }
}

#[test]
fn test_l_path_visits_expected_cell_count() {
    // 5 horizontal + 6 vertical steps, elbow visited twice.
    let cells = collect_path(IVec2::new(2, 9), IVec2::new(7, 3), Elbow::HorizontalFirst);
    assert_eq!(cells.len(), 6 + 7);
}

#[test]
fn test_l_path_same_row_degenerates() {
    let cells = collect_path(IVec2::new(1, 4), IVec2::new(4, 4), Elbow::VerticalFirst);
    assert!(cells.iter().all(|c| c.y == 4));
    assert!(cells.contains(&IVec2::new(2, 4)));
    assert!(cells.contains(&IVec2::new(3, 4)));
}

#[test]
fn test_overlap_is_symmetric() {
    let a = (3, 3, 4, 5);
    let b = (8, 4, 2, 2);
    for padding in 0..4 {
        assert_eq!(rects_overlap(a, b, padding), rects_overlap(b, a, padding));
    }
}

#[test]
fn test_overlap_contained_rect() {
    assert!(rects_overlap((0, 0, 10, 10), (3, 3, 2, 2), 0));
}
