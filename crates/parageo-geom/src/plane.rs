//! Sketch planes: local 2D frames embedded in 3D.
//!
//! A sketch plane is bounded by two straight edges `P(u)` and `Q(u)` and
//! spans the bilinear surface between them. Curves are sketched "on" a
//! plane and inherit its accumulated offset and rotation at construction
//! time. Planes live in a [`PlaneRegistry`] and are referred to by
//! [`PlaneId`] handles; a plane must outlive every curve created from it.

use parageo_math::{Dir3, Offset, Point3, Transform, Vec3};
use parageo_trace::{sample_curve, Trace};
use slotmap::SlotMap;
use tracing::debug;

use crate::Surface3;

slotmap::new_key_type! {
    /// Non-owning handle to a [`SketchPlane`] in a [`PlaneRegistry`].
    pub struct PlaneId;
}

/// Which cardinal plane a sketch started on.
///
/// Carried only so a UI can label the local 2D axes; it has no effect on
/// the geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Sketch axes map to world X and Y.
    Xy,
    /// Sketch axes map to world Y and Z.
    Yz,
    /// Sketch axes map to world X and Z.
    Xz,
}

impl Orientation {
    /// The axis labels a UI should show for the local sketch axes.
    pub fn axis_labels(&self) -> (&'static str, &'static str) {
        match self {
            Orientation::Xy => ("x", "y"),
            Orientation::Yz => ("y", "z"),
            Orientation::Xz => ("x", "z"),
        }
    }
}

/// A plane's frame state as inherited by curves sketched on it.
///
/// Snapshot taken at curve construction; later plane mutations do not
/// retroactively move existing curves.
#[derive(Debug, Clone)]
pub struct PlaneFrame {
    /// Handle of the originating plane.
    pub plane: PlaneId,
    /// Accumulated translation.
    pub offset: Offset,
    /// Accumulated X rotation in degrees.
    pub alpha: f64,
    /// Accumulated Y rotation in degrees.
    pub beta: f64,
    /// Accumulated Z rotation in degrees.
    pub gamma: f64,
    /// Unit normal of the plane, rotated with it but never translated.
    pub normal: Dir3,
}

impl PlaneFrame {
    /// The frame transform: translate by the offset, then rotate.
    pub fn transform(&self) -> Transform {
        Transform::rotation_zyx(self.alpha, self.beta, self.gamma)
            .then(&Transform::translation(self.offset))
    }
}

/// A local 2D coordinate frame embedded in 3D.
#[derive(Debug, Clone)]
pub struct SketchPlane {
    name: String,
    orientation: Orientation,
    density: usize,
    p0: Point3,
    p1: Point3,
    q0: Point3,
    q1: Point3,
    alpha: f64,
    beta: f64,
    gamma: f64,
    offset: Offset,
    transform: Transform,
    base_normal: Dir3,
    normal: Dir3,
    color: String,
    id: PlaneId,
}

impl SketchPlane {
    /// Build a plane from its boundary corners and initial placement.
    ///
    /// The boundary edges run `p0 -> p1` and `q0 -> q1`; the surface is
    /// the bilinear patch `(1 - w) * P(u) + w * Q(u)`. The initial
    /// offset is applied first, then the rotation.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        orientation: Orientation,
        density: usize,
        p0: Point3,
        p1: Point3,
        q0: Point3,
        q1: Point3,
        alpha: f64,
        beta: f64,
        gamma: f64,
        offset: Offset,
        color: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let base_normal = Dir3::new_normalize((q0 - p0).cross(&(p1 - p0)));
        let transform = Transform::rotation_zyx(alpha, beta, gamma)
            .then(&Transform::translation(offset));
        let normal = Dir3::new_normalize(transform.apply_vec(base_normal.as_ref()));
        debug!(name = %name, density, "built sketch plane");
        Self {
            name,
            orientation,
            density,
            p0,
            p1,
            q0,
            q1,
            alpha,
            beta,
            gamma,
            offset,
            transform,
            base_normal,
            normal,
            color: color.into(),
            id: PlaneId::default(),
        }
    }

    /// Plane name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Initial cardinal orientation tag.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Display color hint.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Accumulated translation.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Accumulated rotation angles `(alpha, beta, gamma)` in degrees.
    pub fn angles(&self) -> (f64, f64, f64) {
        (self.alpha, self.beta, self.gamma)
    }

    /// Registry handle, or the null id if the plane is unregistered.
    pub fn id(&self) -> PlaneId {
        self.id
    }

    /// Unit normal, rotated with the plane.
    pub fn normal(&self) -> Dir3 {
        self.normal
    }

    /// The plane's normal ray `w * n` for `w` in `[0, 1]`.
    pub fn normal_ray(&self, w: f64) -> Vec3 {
        w * self.normal.as_ref()
    }

    /// Boundary edge `P(u)` in world space.
    pub fn edge_p(&self, u: f64) -> Point3 {
        let p = self.p0 + u * (self.p1 - self.p0);
        self.transform.apply_point(&p)
    }

    /// Boundary edge `Q(u)` in world space.
    pub fn edge_q(&self, u: f64) -> Point3 {
        let q = self.q0 + u * (self.q1 - self.q0);
        self.transform.apply_point(&q)
    }

    /// Sampled traces of the two boundary edges.
    pub fn edge_traces(&self) -> (Trace, Trace) {
        (
            sample_curve(|u| self.edge_p(u), self.density),
            sample_curve(|u| self.edge_q(u), self.density),
        )
    }

    /// Frame state curves inherit when sketched on this plane.
    pub fn frame(&self) -> PlaneFrame {
        PlaneFrame {
            plane: self.id,
            offset: self.offset,
            alpha: self.alpha,
            beta: self.beta,
            gamma: self.gamma,
            normal: self.normal,
        }
    }

    /// Translate the plane, accumulating into the inherited offset.
    pub fn translate(&mut self, offset: Offset) {
        self.offset = self.offset.add(offset);
        self.transform = Transform::translation(offset).then(&self.transform);
    }

    /// Rotate the plane, accumulating into the inherited angles.
    ///
    /// The normal turns with the plane but is never translated.
    pub fn rotate(&mut self, alpha: f64, beta: f64, gamma: f64) {
        self.alpha += alpha;
        self.beta += beta;
        self.gamma += gamma;
        self.transform = Transform::rotation_zyx(alpha, beta, gamma).then(&self.transform);
        self.normal = Dir3::new_normalize(self.transform.apply_vec(self.base_normal.as_ref()));
    }

    pub(crate) fn set_id(&mut self, id: PlaneId) {
        self.id = id;
    }
}

impl Surface3 for SketchPlane {
    fn point(&self, u: f64, w: f64) -> Point3 {
        let p = self.p0 + u * (self.p1 - self.p0);
        let q = self.q0 + u * (self.q1 - self.q0);
        let s = p + w * (q - p);
        self.transform.apply_point(&s)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn density(&self) -> usize {
        self.density
    }
}

/// Owning store of sketch planes, keyed by [`PlaneId`].
///
/// Curves keep only the id of the plane they were sketched on; the
/// registry is what actually owns and outlives them.
#[derive(Debug, Default)]
pub struct PlaneRegistry {
    planes: SlotMap<PlaneId, SketchPlane>,
}

impl PlaneRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a plane, assigning it its handle.
    pub fn insert(&mut self, mut plane: SketchPlane) -> PlaneId {
        self.planes.insert_with_key(|id| {
            plane.set_id(id);
            plane
        })
    }

    /// Look up a plane.
    pub fn get(&self, id: PlaneId) -> Option<&SketchPlane> {
        self.planes.get(id)
    }

    /// Look up a plane mutably.
    pub fn get_mut(&mut self, id: PlaneId) -> Option<&mut SketchPlane> {
        self.planes.get_mut(id)
    }

    /// Remove a plane, returning it if present.
    pub fn remove(&mut self, id: PlaneId) -> Option<SketchPlane> {
        self.planes.remove(id)
    }

    /// Iterate over all registered planes.
    pub fn iter(&self) -> impl Iterator<Item = (PlaneId, &SketchPlane)> {
        self.planes.iter()
    }

    /// Number of registered planes.
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }
}
