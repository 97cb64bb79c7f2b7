use crate::foundation::core::Mat2;

/// Role of a phase within the decomposition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    /// `Vᵀ`: rotate/reflect the input basis onto the singular directions.
    Realign,
    /// `Σ`: stretch along the coordinate axes by the singular values.
    Scale,
    /// `U`: rotate/reflect onto the output directions.
    Rotate,
}

impl PhaseKind {
    /// Kinds in application order.
    pub const ORDER: [PhaseKind; 3] = [PhaseKind::Realign, PhaseKind::Scale, PhaseKind::Rotate];

    /// Caption shown while the phase is animating.
    pub fn label(self) -> &'static str {
        match self {
            PhaseKind::Realign => "Apply V\u{1d40}",
            PhaseKind::Scale => "Scale by \u{3a3}",
            PhaseKind::Rotate => "Rotate with U",
        }
    }
}

/// One linear map of the decomposition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phase {
    /// Role of the phase.
    pub kind: PhaseKind,
    /// Matrix applied during the phase.
    pub matrix: Mat2,
}

impl Phase {
    /// Caption shown while the phase is animating.
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// The three decomposition phases in their fixed application order (`Vᵀ`, `Σ`, `U`).
///
/// There is no way to build a sequence with a different order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseSequence {
    phases: [Phase; 3],
}

impl PhaseSequence {
    /// Number of phases.
    pub const LEN: usize = 3;

    /// Build the sequence from the factors by role.
    pub fn new(vt: Mat2, sigma: Mat2, u: Mat2) -> Self {
        let [realign, scale, rotate] = PhaseKind::ORDER;
        Self {
            phases: [
                Phase {
                    kind: realign,
                    matrix: vt,
                },
                Phase {
                    kind: scale,
                    matrix: sigma,
                },
                Phase {
                    kind: rotate,
                    matrix: u,
                },
            ],
        }
    }

    /// Phase at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index >= 3`.
    pub fn get(&self, index: usize) -> &Phase {
        &self.phases[index]
    }

    /// Iterate phases in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, Phase> {
        self.phases.iter()
    }

    /// Product of all phases applied in order: `U·Σ·Vᵀ`.
    pub fn composed(&self) -> Mat2 {
        self.phases
            .iter()
            .fold(Mat2::identity(), |acc, p| p.matrix * acc)
    }
}

impl<'a> IntoIterator for &'a PhaseSequence {
    type Item = &'a Phase;
    type IntoIter = std::slice::Iter<'a, Phase>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
