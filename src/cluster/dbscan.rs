//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighbourhood density. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Automatically determines the number of clusters
//! - Identifies noise points (isolated incidents)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbours (inclusive).
//! - **min_samples**: Minimum neighbourhood size, the point itself included, for a
//!   point to be "core".
//! - **Core point**: Has at least `min_samples` points within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. For each unvisited point P, in input order:
//!    - Find neighbours within ε
//!    - If |neighbours| < min_samples, mark as noise (may change later)
//!    - Else P is core: open the next cluster id and grow it breadth-first
//!
//! 2. Growth: pop points from a FIFO frontier:
//!    - Noise is reclaimed as a border point
//!    - Unvisited points join the cluster; if core, their neighbours are queued
//!
//! Cluster ids follow discovery order, so a given input order and parameter set
//! always yields the same labeling. A border point reachable from two clusters stays
//! with the one discovered first.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) with [`IndexKind::BruteForce`], close to O(n·k) with
//!   [`IndexKind::Grid`] for k points per neighbourhood.
//! - **Space**: O(n) for labels and the frontier.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::index::{self, IndexKind, NeighborIndex};
use super::traits::Clustering;
use crate::error::{Error, Result};
use crate::point::{self, Point};

/// Per-point cluster label: a cluster id `>= 0`, or [`NOISE`].
pub type Label = i32;

/// Label given to points that are not density-reachable from any core point.
pub const NOISE: Label = -1;

// Internal only; never escapes a run.
const UNCLASSIFIED: Label = -2;

/// DBSCAN clustering algorithm.
#[derive(Debug, Clone)]
pub struct Dbscan {
    /// Epsilon: maximum distance for neighbourhood.
    eps: f64,
    /// Minimum neighbourhood size (self included) for core classification.
    min_samples: usize,
    index: IndexKind,
    time_limit: Option<Duration>,
}

/// Output of [`Dbscan::fit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbscanFit {
    /// One label per input point, in input order.
    pub labels: Vec<Label>,
    /// Indices of core points, ascending.
    pub core_points: Vec<usize>,
    /// Number of clusters discovered; ids are `0..n_clusters`.
    pub n_clusters: usize,
}

impl DbscanFit {
    /// Number of points labeled [`NOISE`].
    pub fn n_noise(&self) -> usize {
        self.labels.iter().filter(|&&l| l == NOISE).count()
    }

    /// Labels with noise as `None`.
    pub fn labels_with_noise(&self) -> Vec<Option<usize>> {
        self.labels
            .iter()
            .map(|&l| usize::try_from(l).ok())
            .collect()
    }
}

/// Mutable state for a single run.
struct Arena {
    labels: Vec<Label>,
    /// Id of the cluster whose frontier last took this point.
    queued: Vec<Label>,
    core: Vec<bool>,
    scratch: Vec<usize>,
    frontier: VecDeque<usize>,
}

impl Arena {
    fn new(n: usize) -> Self {
        Self {
            labels: vec![UNCLASSIFIED; n],
            queued: vec![UNCLASSIFIED; n],
            core: vec![false; n],
            scratch: Vec::new(),
            frontier: VecDeque::new(),
        }
    }
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `eps` - Maximum distance between two points to be neighbours, in the unit of
    ///   the point coordinates.
    /// * `min_samples` - Minimum neighbourhood size, the point itself included.
    ///
    /// Parameters are validated when the clusterer runs.
    pub fn new(eps: f64, min_samples: usize) -> Self {
        Self {
            eps,
            min_samples,
            index: IndexKind::default(),
            time_limit: None,
        }
    }

    /// Set eps (neighbourhood radius).
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Set minimum neighbourhood size for core classification.
    pub fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = min_samples;
        self
    }

    /// Choose the neighbourhood index. Does not affect the labeling.
    pub fn with_index(mut self, index: IndexKind) -> Self {
        self.index = index;
        self
    }

    /// Abort with [`Error::TimeLimitExceeded`] once a run has used up `limit`.
    ///
    /// Checked before each point is processed, so `Duration::ZERO` fails any non-empty run.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Neighbourhood radius.
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Minimum neighbourhood size for a core point.
    pub fn min_samples(&self) -> usize {
        self.min_samples
    }

    fn validate(&self) -> Result<()> {
        if !self.eps.is_finite() {
            return Err(Error::InvalidParameter {
                name: "eps",
                message: "must be finite",
            });
        }

        if self.eps <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "eps",
                message: "must be positive",
            });
        }

        if self.min_samples == 0 {
            return Err(Error::InvalidParameter {
                name: "min_samples",
                message: "must be at least 1",
            });
        }

        Ok(())
    }

    fn check_time(&self, started: Instant) -> Result<()> {
        match self.time_limit {
            Some(limit) if started.elapsed() >= limit => Err(Error::TimeLimitExceeded { limit }),
            _ => Ok(()),
        }
    }

    /// Cluster `points`, returning labels and core points.
    pub fn fit(&self, points: &[Point]) -> Result<DbscanFit> {
        self.validate()?;
        point::validate(points)?;

        let n = points.len();
        if Label::try_from(n).is_err() {
            return Err(Error::InvalidParameter {
                name: "points",
                message: "too many points for i32 labels",
            });
        }

        let started = Instant::now();
        debug!(
            n_points = n,
            eps = self.eps,
            min_samples = self.min_samples,
            index = ?self.index,
            "dbscan started"
        );

        let index = index::build(self.index, points, self.eps);
        let mut arena = Arena::new(n);
        let mut next_id: Label = 0;

        for point_idx in 0..n {
            self.check_time(started)?;
            if arena.labels[point_idx] != UNCLASSIFIED {
                continue;
            }

            index.neighbors(point_idx, &mut arena.scratch);
            if arena.scratch.len() < self.min_samples {
                // Not enough neighbours: noise for now, may become a border point later.
                arena.labels[point_idx] = NOISE;
                continue;
            }

            let size =
                self.expand_cluster(index.as_ref(), point_idx, next_id, &mut arena, started)?;
            trace!(cluster_id = next_id, seed = point_idx, size, "cluster discovered");
            next_id += 1;
        }

        let Arena { labels, core, .. } = arena;
        let core_points: Vec<usize> = core
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| c.then_some(i))
            .collect();
        let fit = DbscanFit {
            labels,
            core_points,
            n_clusters: next_id as usize,
        };

        debug!(
            n_clusters = fit.n_clusters,
            n_noise = fit.n_noise(),
            elapsed = ?started.elapsed(),
            "dbscan finished"
        );
        Ok(fit)
    }

    /// Grow cluster `cluster_id` from core point `seed`, whose neighbourhood is in
    /// `arena.scratch`. Returns the number of points the cluster ends up with.
    fn expand_cluster(
        &self,
        index: &dyn NeighborIndex,
        seed: usize,
        cluster_id: Label,
        arena: &mut Arena,
        started: Instant,
    ) -> Result<usize> {
        let Arena {
            labels,
            queued,
            core,
            scratch,
            frontier,
        } = arena;

        labels[seed] = cluster_id;
        queued[seed] = cluster_id;
        core[seed] = true;
        let mut size = 1;

        frontier.clear();
        for &nb in scratch.iter() {
            if labels[nb] < 0 && queued[nb] != cluster_id {
                queued[nb] = cluster_id;
                frontier.push_back(nb);
            }
        }

        while let Some(q) = frontier.pop_front() {
            self.check_time(started)?;
            match labels[q] {
                NOISE => {
                    // Already known to be non-core; becomes a border point.
                    labels[q] = cluster_id;
                    size += 1;
                }
                UNCLASSIFIED => {
                    labels[q] = cluster_id;
                    size += 1;

                    index.neighbors(q, scratch);
                    if scratch.len() >= self.min_samples {
                        core[q] = true;
                        for &nb in scratch.iter() {
                            if labels[nb] < 0 && queued[nb] != cluster_id {
                                queued[nb] = cluster_id;
                                frontier.push_back(nb);
                            }
                        }
                    }
                }
                // Already in this or an earlier cluster; ids are never reassigned.
                _ => {}
            }
        }

        Ok(size)
    }
}

impl Default for Dbscan {
    /// 250 m radius with 5 samples: city-block scale hotspots in projected metres.
    fn default() -> Self {
        Self::new(250.0, 5)
    }
}

impl Clustering for Dbscan {
    fn fit_predict(&self, points: &[Point]) -> Result<Vec<Label>> {
        Ok(self.fit(points)?.labels)
    }

    /// DBSCAN discovers clusters dynamically, so this returns 0.
    ///
    /// To get the actual number of clusters, use [`Dbscan::fit`].
    fn n_clusters(&self) -> usize {
        0 // Unknown until fit
    }
}

/// Extended DBSCAN interface with noise detection.
pub trait DbscanExt {
    /// Fit and predict, returning labels where noise is marked as `None`.
    fn fit_predict_with_noise(&self, points: &[Point]) -> Result<Vec<Option<usize>>>;

    /// Check if a label represents noise.
    fn is_noise(label: Label) -> bool {
        label == NOISE
    }
}

impl DbscanExt for Dbscan {
    fn fit_predict_with_noise(&self, points: &[Point]) -> Result<Vec<Option<usize>>> {
        Ok(self.fit(points)?.labels_with_noise())
    }
}
