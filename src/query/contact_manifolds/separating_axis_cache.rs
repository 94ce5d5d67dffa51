/// Frame-to-frame memory of the minimum separating axis found for one
/// collision pair.
///
/// One cache lives per overlapping broad-phase pair, owned by the caller
/// and handed mutably to the narrow-phase drivers, which both read the
/// previous frame's axis (to shortcut the full axis scan) and store the
/// axis selected this frame. A pair is only ever processed by one thread at
/// a time, so this is plain owned data.
///
/// At most one of `axis_is_face1`/`axis_is_face2` is set. When both are
/// `false` the remembered axis is an edge/edge cross product, except for
/// the capsule/polyhedron pair where `axis_is_face1` alone distinguishes a
/// polyhedron face normal from a capsule-segment/edge axis (stored in
/// `edge1_index`).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SeparatingAxisCache {
    /// `true` once some prior frame has populated this record.
    pub valid: bool,
    /// `true` if the prior frame processed the pair with the
    /// separating-axis drivers of this crate.
    pub used_sat: bool,
    /// `true` if the prior frame reported a collision.
    pub colliding: bool,
    /// `true` if the remembered axis is a face normal of the first shape.
    pub axis_is_face1: bool,
    /// `true` if the remembered axis is a face normal of the second shape.
    pub axis_is_face2: bool,
    /// The face whose normal is the remembered axis. Meaningful when either
    /// face flag is set.
    pub face_index: u32,
    /// The first shape's half-edge of the remembered edge/edge axis.
    pub edge1_index: u32,
    /// The second shape's half-edge of the remembered edge/edge axis.
    pub edge2_index: u32,
}

impl SeparatingAxisCache {
    /// Creates an unpopulated cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the end of a narrow-phase call on this pair.
    ///
    /// The drivers call this on every return path, after the previous
    /// frame's flags have been read.
    pub(crate) fn finish_frame(&mut self, colliding: bool) {
        self.valid = true;
        self.used_sat = true;
        self.colliding = colliding;
    }
}
