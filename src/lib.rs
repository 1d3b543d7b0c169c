//! Spatial hotspot detection.
//!
//! `hotspot` finds dense groups of point incidents with DBSCAN. Points are planar
//! coordinates in a metric unit (project longitude/latitude first); the result is one
//! label per point, either a cluster id or [`NOISE`].
//!
//! The public API is under [`cluster`], which provides:
//! - DBSCAN (density clustering, with provisional noise reclaimed as border points)
//! - a choice of neighbourhood index (brute force or uniform grid)
//!
//! and [`summary`], which turns a labeling into per-cluster statistics.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod point;
pub mod summary;

pub use cluster::{Clustering, Dbscan, DbscanExt, DbscanFit, IndexKind, Label, NOISE};
pub use error::{Error, Result};
pub use point::Point;
pub use summary::{ClusterStats, Summary};
