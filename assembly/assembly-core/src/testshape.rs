//! Minimal in-crate geometry kernel for unit tests: a vertex cloud with a
//! tiny axis-extreme selector language and nearest-point queries.

use assembly_types::{Criterion, Pose, SelectKind, Shape};
use nalgebra::Point3;
use thiserror::Error;

/// Selection failure of the test kernel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TestSelectError {
    #[error("unsupported selection kind: {0}")]
    UnsupportedKind(String),
    #[error("unknown selector: '{0}'")]
    UnknownSelector(String),
    #[error("selection matched nothing")]
    Empty,
}

/// A shape made of bare vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct TestShape {
    pub points: Vec<Point3<f64>>,
}

/// Single-vertex shape.
pub fn vertex(x: f64, y: f64, z: f64) -> TestShape {
    TestShape {
        points: vec![Point3::new(x, y, z)],
    }
}

/// Multi-vertex shape.
pub fn vertices(points: &[[f64; 3]]) -> TestShape {
    TestShape {
        points: points.iter().map(|p| Point3::new(p[0], p[1], p[2])).collect(),
    }
}

impl Shape for TestShape {
    type Error = TestSelectError;

    fn transformed(&self, pose: &Pose) -> Self {
        Self {
            points: self.points.iter().map(|p| pose.transform_point(p)).collect(),
        }
    }

    fn select(&self, kind: SelectKind, criterion: &Criterion) -> Result<Self, Self::Error> {
        if kind != SelectKind::Vertices {
            return Err(TestSelectError::UnsupportedKind(kind.to_string()));
        }
        if self.points.is_empty() {
            return Err(TestSelectError::Empty);
        }

        let points = match criterion {
            Criterion::Nearest(target) => self
                .points
                .iter()
                .min_by(|a, b| {
                    let da = (*a - target).norm_squared();
                    let db = (*b - target).norm_squared();
                    da.total_cmp(&db)
                })
                .map(|p| vec![*p])
                .unwrap_or_default(),
            Criterion::Selector(sel) => {
                if !matches!(sel.as_str(), ">X" | "<X" | ">Y" | "<Y" | ">Z" | "<Z") {
                    return Err(TestSelectError::UnknownSelector(sel.clone()));
                }
                let key = |p: &Point3<f64>| match sel.as_str() {
                    ">X" | "<X" => p.x,
                    ">Y" | "<Y" => p.y,
                    _ => p.z,
                };
                let extreme = if sel.starts_with('>') {
                    self.points.iter().map(key).fold(f64::NEG_INFINITY, f64::max)
                } else {
                    self.points.iter().map(key).fold(f64::INFINITY, f64::min)
                };
                // Keep every point at the extreme, like a kernel selecting
                // all faces at max Z
                self.points
                    .iter()
                    .filter(|p| (key(p) - extreme).abs() < 1e-9)
                    .copied()
                    .collect()
            }
        };

        if points.is_empty() {
            return Err(TestSelectError::Empty);
        }
        Ok(TestShape { points })
    }
}
