use std::collections::VecDeque;

use hotspot::cluster::{Clustering, Dbscan, IndexKind, NOISE};
use hotspot::{Point, Summary};
use proptest::prelude::*;

fn points_strategy() -> impl Strategy<Value = Vec<Point>> {
    // Integer-ish coordinates make exact-eps ties and duplicates common.
    prop::collection::vec((0u8..20, 0u8..20), 0..60).prop_map(|coords| {
        coords
            .into_iter()
            .map(|(x, y)| Point::new(f64::from(x) * 0.5, f64::from(y) * 0.5))
            .collect()
    })
}

fn neighbors(points: &[Point], i: usize, eps: f64) -> Vec<usize> {
    (0..points.len())
        .filter(|&j| points[i].within(&points[j], eps))
        .collect()
}

proptest! {
    #[test]
    fn prop_every_point_labeled(
        points in points_strategy(),
        eps in 0.1f64..3.0,
        min_samples in 1usize..6
    ) {
        let fit = Dbscan::new(eps, min_samples).fit(&points).unwrap();
        prop_assert_eq!(fit.labels.len(), points.len());
        for &l in &fit.labels {
            prop_assert!(l == NOISE || (0..fit.n_clusters as i32).contains(&l));
        }
    }

    #[test]
    fn prop_idempotent_and_index_independent(
        points in points_strategy(),
        eps in 0.1f64..3.0,
        min_samples in 1usize..6
    ) {
        let dbscan = Dbscan::new(eps, min_samples);
        let first = dbscan.fit_predict(&points).unwrap();
        let second = dbscan.fit_predict(&points).unwrap();
        let grid = dbscan.clone().with_index(IndexKind::Grid).fit_predict(&points).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &grid);
    }

    #[test]
    fn prop_density_reachability(
        points in points_strategy(),
        eps in 0.1f64..3.0,
        min_samples in 1usize..6
    ) {
        let fit = Dbscan::new(eps, min_samples).fit(&points).unwrap();
        let n = points.len();
        let hoods: Vec<Vec<usize>> = (0..n).map(|i| neighbors(&points, i, eps)).collect();
        let is_core: Vec<bool> = hoods.iter().map(|h| h.len() >= min_samples).collect();

        let expected_core: Vec<usize> = (0..n).filter(|&i| is_core[i]).collect();
        prop_assert_eq!(&fit.core_points, &expected_core);

        for i in 0..n {
            let label = fit.labels[i];
            if is_core[i] {
                // Core points are clustered, and everything around them shares the
                // cluster unless it is a border point claimed earlier.
                prop_assert!(label >= 0);
                for &j in &hoods[i] {
                    prop_assert!(fit.labels[j] >= 0);
                    if is_core[j] {
                        prop_assert_eq!(fit.labels[j], label);
                    }
                }
            } else if label == NOISE {
                // Noise is not reachable from any core point.
                prop_assert!(hoods[i].iter().all(|&j| !is_core[j]));
            } else {
                // Border points hang off a core point of their own cluster.
                prop_assert!(hoods[i].iter().any(|&j| is_core[j] && fit.labels[j] == label));
            }
        }

        // Within a cluster, core points form one eps-connected component.
        for id in 0..fit.n_clusters as i32 {
            let cores: Vec<usize> = (0..n).filter(|&i| is_core[i] && fit.labels[i] == id).collect();
            prop_assert!(!cores.is_empty());
            let mut seen = vec![false; n];
            let mut queue = VecDeque::from([cores[0]]);
            seen[cores[0]] = true;
            while let Some(i) = queue.pop_front() {
                for &j in &hoods[i] {
                    if is_core[j] && !seen[j] {
                        seen[j] = true;
                        queue.push_back(j);
                    }
                }
            }
            prop_assert!(cores.iter().all(|&i| seen[i]));
        }
    }

    #[test]
    fn prop_cluster_ids_follow_input_order(
        points in points_strategy(),
        eps in 0.1f64..3.0,
        min_samples in 1usize..6
    ) {
        let fit = Dbscan::new(eps, min_samples).fit(&points).unwrap();
        let first_core: Vec<usize> = (0..fit.n_clusters as i32)
            .map(|id| {
                fit.core_points
                    .iter()
                    .copied()
                    .find(|&i| fit.labels[i] == id)
                    .unwrap_or(usize::MAX)
            })
            .collect();
        prop_assert!(first_core.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_min_samples_one_has_no_noise(
        points in points_strategy(),
        eps in 0.1f64..3.0
    ) {
        let labels = Dbscan::new(eps, 1).fit_predict(&points).unwrap();
        prop_assert!(labels.iter().all(|&l| l >= 0));
        for i in 0..points.len() {
            for j in neighbors(&points, i, eps) {
                prop_assert_eq!(labels[i], labels[j]);
            }
        }
    }

    #[test]
    fn prop_tiny_eps_isolates_distinct_points(
        coords in prop::collection::hash_set((0i32..1000, 0i32..1000), 1..40),
        min_samples in 1usize..4
    ) {
        let points: Vec<Point> = coords
            .into_iter()
            .map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
            .collect();
        let labels = Dbscan::new(0.5, min_samples).fit_predict(&points).unwrap();
        if min_samples == 1 {
            let expected: Vec<i32> = (0..points.len() as i32).collect();
            prop_assert_eq!(labels, expected);
        } else {
            prop_assert!(labels.iter().all(|&l| l == NOISE));
        }
    }

    #[test]
    fn prop_summary_counts_match_labels(
        points in points_strategy(),
        eps in 0.1f64..3.0,
        min_samples in 1usize..6
    ) {
        let fit = Dbscan::new(eps, min_samples).fit(&points).unwrap();
        let summary = Summary::from_labels(&points, &fit.labels).unwrap();
        prop_assert_eq!(summary.n_points, points.len());
        prop_assert_eq!(summary.n_noise, fit.n_noise());
        prop_assert_eq!(summary.n_clusters(), fit.n_clusters);
        let clustered: usize = summary.clusters.iter().map(|c| c.size).sum();
        prop_assert_eq!(clustered + summary.n_noise, points.len());
    }
}

#[test]
fn coincident_points_form_one_cluster() {
    for n in 3..10 {
        let points = vec![Point::new(-121.0, 37.6); n];
        let labels = Dbscan::new(0.001, 3).fit_predict(&points).unwrap();
        assert_eq!(labels, vec![0; n]);
    }
}
