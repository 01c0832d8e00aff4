use super::split::{partition_y, strip};
use super::*;
use crate::brute::brute;
use crate::cfg::CUTOFF;
use crate::cloud::{draw_cloud, Bounds, CloudCfg, Layout, ReplayToken};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
}

fn cloud(count: usize, seed: u64, layout: Layout) -> Vec<Point> {
    let cfg = CloudCfg {
        count,
        bounds: Bounds::default(),
        layout,
    };
    draw_cloud(cfg, ReplayToken::new(seed, count as u64))
}

fn sorted(mut v: Vec<Point>) -> Vec<Point> {
    v.sort_by(by_x);
    v
}

#[test]
fn fewer_than_two_is_empty() {
    assert!(efficient(&[]).is_empty());
    assert!(efficient(&pts(&[(1, 2)])).is_empty());
    let (o, stats) = efficient_with(&[], SolverCfg::default());
    assert!(o.is_empty());
    assert_eq!(stats, SolveStats::default());
}

#[test]
fn two_points_exact() {
    let o = efficient(&pts(&[(0, 0), (3, 4)]));
    assert_eq!(o.dsq, 25);
    assert!(o.is_pair(Point::new(0, 0), Point::new(3, 4)));
}

#[test]
fn four_points_with_tie() {
    let o = efficient(&pts(&[(0, 0), (1, 0), (0, 1), (10, 10)]));
    assert_eq!(o.dsq, 1);
    assert!(
        o.is_pair(Point::new(0, 0), Point::new(1, 0))
            || o.is_pair(Point::new(0, 0), Point::new(0, 1))
    );
}

#[test]
fn identical_points_give_zero() {
    let same = vec![Point::new(-7, 42); 100];
    assert_eq!(efficient(&same).dsq, 0);
    let (o, _) = efficient_with(&same, SolverCfg::with_cutoff(3));
    assert_eq!(o.dsq, 0);
    assert!(o.is_pair(Point::new(-7, 42), Point::new(-7, 42)));
}

#[test]
fn thousand_uniform_points_match_brute() {
    let p = cloud(1000, 2024, Layout::Uniform);
    let e = efficient(&p);
    let b = brute(&p);
    assert_eq!(e.dsq, b.dsq);
    assert_eq!(e.dsq, crate::distance_squared(&e.a, &e.b));
}

#[test]
fn cutoff_boundary_sizes() {
    for n in [CUTOFF - 1, CUTOFF, CUTOFF + 1, CUTOFF + 2, 2 * CUTOFF + 1] {
        let p = cloud(n, 11, Layout::Uniform);
        let (e, stats) = efficient_with(&p, SolverCfg::default());
        assert_eq!(e.dsq, brute(&p).dsq, "n={n}");
        if n <= CUTOFF {
            assert_eq!(stats.base_cases, 1);
            assert_eq!(stats.max_depth, 0);
        } else {
            assert!(stats.base_cases >= 2);
            assert!(stats.max_depth >= 1);
        }
    }
}

#[test]
fn at_cutoff_result_is_brute_on_x_order() {
    let p = cloud(CUTOFF, 5, Layout::Uniform);
    let e = efficient(&p);
    let b = brute(&sorted(p));
    assert_eq!(e, b);
}

#[test]
fn small_cutoffs_agree_with_brute() {
    for seed in 0..20u64 {
        let p = cloud(200, seed, Layout::Clustered {
            clusters: 4,
            spread: 30,
        });
        let want = brute(&p).dsq;
        for cutoff in [0, 1, 2, 3, 4, 7, CUTOFF, 64] {
            let (o, _) = efficient_with(&p, SolverCfg::with_cutoff(cutoff));
            assert_eq!(o.dsq, want, "seed={seed} cutoff={cutoff}");
        }
    }
}

#[test]
fn degenerate_lines_and_duplicates() {
    for layout in [Layout::VerticalLine, Layout::HorizontalLine] {
        let p = cloud(500, 9, layout);
        let (o, _) = efficient_with(&p, SolverCfg::with_cutoff(3));
        assert_eq!(o.dsq, brute(&p).dsq);
    }
    // Heavy duplication straddling the split index.
    let mut p = vec![Point::new(0, 0); 17];
    p.extend(vec![Point::new(5, 5); 17]);
    p.push(Point::new(100, 100));
    let (o, _) = efficient_with(&p, SolverCfg::with_cutoff(3));
    assert_eq!(o.dsq, 0);
}

#[test]
fn permutation_invariant_and_idempotent() {
    let mut p = cloud(300, 77, Layout::Uniform);
    let first = efficient(&p);
    assert_eq!(first, efficient(&p));
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..5 {
        p.shuffle(&mut rng);
        assert_eq!(efficient(&p).dsq, first.dsq);
    }
}

#[test]
fn caller_input_untouched() {
    let p = cloud(100, 3, Layout::Uniform);
    let copy = p.clone();
    let _ = efficient(&p);
    assert_eq!(p, copy);
}

#[test]
fn partition_conserves_points_and_y_order() {
    // Split point duplicated on both sides of the median index.
    let raw = pts(&[
        (0, 9),
        (2, 2),
        (2, 2),
        (2, 2),
        (2, 2),
        (1, 5),
        (3, 0),
        (2, 7),
    ]);
    let mut xs = raw.clone();
    xs.sort_by(by_x);
    let mut ys = raw.clone();
    ys.sort_by(by_y);
    let mid = xs.len() / 2;
    let (left_x, right_x) = xs.split_at(mid);
    assert_eq!(left_x[mid - 1], Point::new(2, 2));
    let (left_y, right_y) = partition_y(&ys, left_x);

    assert_eq!(left_y.len(), left_x.len());
    assert_eq!(right_y.len(), right_x.len());
    assert_eq!(sorted(left_y.clone()), left_x.to_vec());
    assert_eq!(sorted(right_y.clone()), right_x.to_vec());
    assert!(left_y.windows(2).all(|w| by_y(&w[0], &w[1]).is_le()));
    assert!(right_y.windows(2).all(|w| by_y(&w[0], &w[1]).is_le()));
}

#[test]
fn partition_conserves_random_multisets() {
    let mut rng = StdRng::seed_from_u64(99);
    for n in [4usize, 5, 16, 33, 100] {
        let small = CloudCfg {
            count: n,
            bounds: Bounds { lo: 0, hi: 3 },
            layout: Layout::Uniform,
        };
        let mut raw = draw_cloud(small, ReplayToken::new(n as u64, 0));
        raw.shuffle(&mut rng);
        let mut xs = raw.clone();
        xs.sort_by(by_x);
        let mut ys = raw;
        ys.sort_by(by_y);
        let (left_x, right_x) = xs.split_at(n / 2);
        let (left_y, right_y) = partition_y(&ys, left_x);
        assert_eq!(sorted(left_y), left_x.to_vec(), "n={n}");
        assert_eq!(sorted(right_y), right_x.to_vec(), "n={n}");
    }
}

#[test]
fn strip_keeps_only_points_inside_delta() {
    let ys = pts(&[
        (-1000, 0),
        (1, 1),
        (-2, 2),
        (1000, 3),
        (3, 4),
        (0, 5),
        (-3, 6),
        (500, 7),
    ]);
    let band = strip(&ys, 0, 9);
    assert_eq!(band, pts(&[(1, 1), (-2, 2), (0, 5)]));
    assert!(strip(&ys, 0, 0).is_empty());
}

#[test]
fn far_points_aligned_in_y_stay_out_of_the_strip() {
    // Two tight columns next to the split line plus many far points sharing
    // their y-coordinates. Only the columns can enter any top-level strip.
    let mut p = Vec::new();
    for i in 0..64 {
        p.push(Point::new(-1, 10 * i));
        p.push(Point::new(1, 10 * i + 5));
        p.push(Point::new(-1_000_000, 10 * i));
        p.push(Point::new(1_000_000, 10 * i + 5));
    }
    let (o, stats) = efficient_with(&p, SolverCfg::with_cutoff(3));
    assert_eq!(o.dsq, brute(&p).dsq);
    // Each strip point compares against a bounded number of successors.
    assert!(stats.strip_comparisons <= 7 * stats.strip_points);
    // Far points never fall within delta of a split line placed inside the columns.
    let delta = o.dsq.max(1);
    let top_split_x = sorted(p.clone())[p.len() / 2 - 1].x;
    let mut ys = p.clone();
    ys.sort_by(by_y);
    let band = strip(&ys, top_split_x, delta * 100);
    assert!(band.iter().all(|q| q.x.abs() <= 1));
}

#[test]
fn vertical_spacing_equal_to_delta_skips_scan() {
    // One column with unit spacing: delta == 1 everywhere, so no successor
    // ever satisfies dy² < delta.
    let p: Vec<Point> = (0..200).map(|i| Point::new(0, i)).collect();
    let (o, stats) = efficient_with(&p, SolverCfg::with_cutoff(3));
    assert_eq!(o.dsq, 1);
    assert_eq!(stats.strip_comparisons, 0);
}

#[test]
fn strip_comparisons_respect_packing_bound() {
    for seed in 0..10u64 {
        let mut p = cloud(2000, seed, Layout::Uniform);
        p.sort_by(by_x);
        p.dedup();
        let (o, stats) = efficient_with(&p, SolverCfg::with_cutoff(3));
        assert_eq!(o.dsq, brute(&p).dsq);
        assert!(stats.strip_comparisons <= 7 * stats.strip_points);
    }
}

#[test]
fn left_half_wins_ties() {
    // Equal gaps in both halves; the recursion must report the left one.
    let p = pts(&[(0, 0), (0, 10), (100, 0), (100, 10)]);
    let (o, _) = efficient_with(&p, SolverCfg::with_cutoff(3));
    assert_eq!(o.dsq, 100);
    assert!(o.is_pair(Point::new(0, 0), Point::new(0, 10)));
}

#[test]
fn cross_boundary_pair_found_in_strip() {
    // Closest pair straddles the split line.
    let p = pts(&[(-50, 0), (-50, 60), (-1, 30), (1, 31), (50, 0), (50, 60)]);
    let (o, stats) = efficient_with(&p, SolverCfg::with_cutoff(3));
    assert_eq!(o.dsq, 5);
    assert!(o.is_pair(Point::new(-1, 30), Point::new(1, 31)));
    assert!(stats.strip_comparisons >= 1);
}
