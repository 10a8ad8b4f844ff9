use serde::{Deserialize, Serialize};

use crate::curriculum::models::ClassLevel;

/// Curriculum phase grouping of grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "Fase A")]
    A,
    #[serde(rename = "Fase B")]
    B,
    #[serde(rename = "Fase C")]
    C,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::A => "Fase A",
            Phase::B => "Fase B",
            Phase::C => "Fase C",
        }
    }
}

/// Grades 1–2 → A, 3–4 → B, 5–6 → C.
pub fn phase_for(class_level: ClassLevel) -> Phase {
    match class_level {
        ClassLevel::Kelas1 | ClassLevel::Kelas2 => Phase::A,
        ClassLevel::Kelas3 | ClassLevel::Kelas4 => Phase::B,
        ClassLevel::Kelas5 | ClassLevel::Kelas6 => Phase::C,
    }
}
