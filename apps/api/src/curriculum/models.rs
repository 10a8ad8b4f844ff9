//! Form data for a single RPM: identities, curriculum fields, meeting plan, profile dimensions.
//!
//! Variant values serialize to the exact strings the form shows and the prompts embed,
//! so the enums double as the fixed catalogs served by `GET /api/v1/catalog`.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const SCHOOL_NAME: &str = "SDN Pekayon 09";
pub const MAX_MEETINGS: u8 = 8;

const DEFAULT_PRINCIPAL_NAME: &str = "Veria Wulandari, S.Pd";
const DEFAULT_PRINCIPAL_NIP: &str = "198102012008012028";
const DEFAULT_DURATION: &str = "2 x 35 menit";

// ────────────────────────────────────────────────────────────────────────────
// Catalog enums
// ────────────────────────────────────────────────────────────────────────────

/// Elementary grade 1–6.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassLevel {
    #[default]
    #[serde(rename = "1")]
    Kelas1,
    #[serde(rename = "2")]
    Kelas2,
    #[serde(rename = "3")]
    Kelas3,
    #[serde(rename = "4")]
    Kelas4,
    #[serde(rename = "5")]
    Kelas5,
    #[serde(rename = "6")]
    Kelas6,
}

impl ClassLevel {
    pub const ALL: [ClassLevel; 6] = [
        ClassLevel::Kelas1,
        ClassLevel::Kelas2,
        ClassLevel::Kelas3,
        ClassLevel::Kelas4,
        ClassLevel::Kelas5,
        ClassLevel::Kelas6,
    ];

    pub fn grade(self) -> u8 {
        match self {
            ClassLevel::Kelas1 => 1,
            ClassLevel::Kelas2 => 2,
            ClassLevel::Kelas3 => 3,
            ClassLevel::Kelas4 => 4,
            ClassLevel::Kelas5 => 5,
            ClassLevel::Kelas6 => 6,
        }
    }

    pub fn from_grade(grade: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.grade() == grade)
    }
}

impl fmt::Display for ClassLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grade())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Semester {
    #[default]
    #[serde(rename = "Ganjil")]
    Ganjil,
    #[serde(rename = "Genap")]
    Genap,
}

impl Semester {
    pub const ALL: [Semester; 2] = [Semester::Ganjil, Semester::Genap];

    pub fn label(self) -> &'static str {
        match self {
            Semester::Ganjil => "Ganjil",
            Semester::Genap => "Genap",
        }
    }
}

/// Fixed subject catalog of the school.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "Pendidikan Agama dan Budi Pekerti")]
    PendidikanAgama,
    #[serde(rename = "Pendidikan Pancasila")]
    PendidikanPancasila,
    #[default]
    #[serde(rename = "Bahasa Indonesia")]
    BahasaIndonesia,
    #[serde(rename = "Matematika")]
    Matematika,
    #[serde(rename = "IPAS")]
    Ipas,
    #[serde(rename = "Seni Rupa")]
    SeniRupa,
    #[serde(rename = "Seni Musik")]
    SeniMusik,
    #[serde(rename = "PJOK")]
    Pjok,
    #[serde(rename = "Bahasa Inggris")]
    BahasaInggris,
}

impl Subject {
    pub const ALL: [Subject; 9] = [
        Subject::PendidikanAgama,
        Subject::PendidikanPancasila,
        Subject::BahasaIndonesia,
        Subject::Matematika,
        Subject::Ipas,
        Subject::SeniRupa,
        Subject::SeniMusik,
        Subject::Pjok,
        Subject::BahasaInggris,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Subject::PendidikanAgama => "Pendidikan Agama dan Budi Pekerti",
            Subject::PendidikanPancasila => "Pendidikan Pancasila",
            Subject::BahasaIndonesia => "Bahasa Indonesia",
            Subject::Matematika => "Matematika",
            Subject::Ipas => "IPAS",
            Subject::SeniRupa => "Seni Rupa",
            Subject::SeniMusik => "Seni Musik",
            Subject::Pjok => "PJOK",
            Subject::BahasaInggris => "Bahasa Inggris",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Instructional model chosen per meeting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PedagogicalPractice {
    #[default]
    #[serde(rename = "Inkuiri-Discovery Learning")]
    InkuiriDiscovery,
    #[serde(rename = "Project Based Learning (PjBL)")]
    ProjectBased,
    #[serde(rename = "Problem Based Learning (PBL)")]
    ProblemBased,
    #[serde(rename = "Game Based Learning")]
    GameBased,
    #[serde(rename = "Station Learning")]
    StationLearning,
    #[serde(rename = "Pembelajaran Kooperatif")]
    Kooperatif,
}

impl PedagogicalPractice {
    pub const ALL: [PedagogicalPractice; 6] = [
        PedagogicalPractice::InkuiriDiscovery,
        PedagogicalPractice::ProjectBased,
        PedagogicalPractice::ProblemBased,
        PedagogicalPractice::GameBased,
        PedagogicalPractice::StationLearning,
        PedagogicalPractice::Kooperatif,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PedagogicalPractice::InkuiriDiscovery => "Inkuiri-Discovery Learning",
            PedagogicalPractice::ProjectBased => "Project Based Learning (PjBL)",
            PedagogicalPractice::ProblemBased => "Problem Based Learning (PBL)",
            PedagogicalPractice::GameBased => "Game Based Learning",
            PedagogicalPractice::StationLearning => "Station Learning",
            PedagogicalPractice::Kooperatif => "Pembelajaran Kooperatif",
        }
    }
}

impl fmt::Display for PedagogicalPractice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The eight graduate-profile dimensions (Dimensi Profil Lulusan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GraduateDimension {
    #[serde(rename = "Keimanan dan Ketakwaan terhadap Tuhan YME")]
    Keimanan,
    #[serde(rename = "Kewargaan")]
    Kewargaan,
    #[serde(rename = "Penalaran Kritis")]
    PenalaranKritis,
    #[serde(rename = "Kreativitas")]
    Kreativitas,
    #[serde(rename = "Kolaborasi")]
    Kolaborasi,
    #[serde(rename = "Kemandirian")]
    Kemandirian,
    #[serde(rename = "Kesehatan")]
    Kesehatan,
    #[serde(rename = "Komunikasi")]
    Komunikasi,
}

impl GraduateDimension {
    pub const ALL: [GraduateDimension; 8] = [
        GraduateDimension::Keimanan,
        GraduateDimension::Kewargaan,
        GraduateDimension::PenalaranKritis,
        GraduateDimension::Kreativitas,
        GraduateDimension::Kolaborasi,
        GraduateDimension::Kemandirian,
        GraduateDimension::Kesehatan,
        GraduateDimension::Komunikasi,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GraduateDimension::Keimanan => "Keimanan dan Ketakwaan terhadap Tuhan YME",
            GraduateDimension::Kewargaan => "Kewargaan",
            GraduateDimension::PenalaranKritis => "Penalaran Kritis",
            GraduateDimension::Kreativitas => "Kreativitas",
            GraduateDimension::Kolaborasi => "Kolaborasi",
            GraduateDimension::Kemandirian => "Kemandirian",
            GraduateDimension::Kesehatan => "Kesehatan",
            GraduateDimension::Komunikasi => "Komunikasi",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Form data
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub meeting_number: u8,
    pub pedagogy: PedagogicalPractice,
}

/// Teacher input for one lesson plan.
///
/// Invariant: `meetings.len() == meeting_count` and `meetings[i].meeting_number == i + 1`.
/// The mutators in `curriculum::form` preserve it; `check_invariants` guards input from the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub teacher_name: String,
    #[serde(rename = "teacherNIP")]
    pub teacher_nip: String,
    pub principal_name: String,
    #[serde(rename = "principalNIP")]
    pub principal_nip: String,
    pub class_level: ClassLevel,
    pub semester: Semester,
    pub subject: Subject,
    /// Capaian Pembelajaran.
    pub cp: String,
    /// Tujuan Pembelajaran.
    pub tp: String,
    pub materi: String,
    pub meeting_count: u8,
    pub duration: String,
    pub meetings: Vec<Meeting>,
    #[serde(default)]
    pub dimensions: BTreeSet<GraduateDimension>,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            teacher_name: String::new(),
            teacher_nip: String::new(),
            principal_name: DEFAULT_PRINCIPAL_NAME.to_string(),
            principal_nip: DEFAULT_PRINCIPAL_NIP.to_string(),
            class_level: ClassLevel::default(),
            semester: Semester::default(),
            subject: Subject::default(),
            cp: String::new(),
            tp: String::new(),
            materi: String::new(),
            meeting_count: 1,
            duration: DEFAULT_DURATION.to_string(),
            meetings: vec![Meeting {
                meeting_number: 1,
                pedagogy: PedagogicalPractice::default(),
            }],
            dimensions: BTreeSet::new(),
        }
    }
}

impl FormData {
    /// Per-meeting labels in prompt form: `"Pertemuan 1: Inkuiri-Discovery Learning, ..."`.
    pub fn pedagogy_prompt_labels(&self) -> String {
        self.meetings
            .iter()
            .map(|m| format!("Pertemuan {}: {}", m.meeting_number, m.pedagogy))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Per-meeting labels in document form: `"P1: ... | P2: ..."`.
    pub fn pedagogy_document_labels(&self) -> String {
        self.meetings
            .iter()
            .map(|m| format!("P{}: {}", m.meeting_number, m.pedagogy))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    pub fn dimension_labels(&self) -> String {
        self.dimensions
            .iter()
            .map(|d| d.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_satisfies_meeting_invariant() {
        let form = FormData::default();
        assert_eq!(form.meetings.len(), form.meeting_count as usize);
        assert_eq!(form.meetings[0].meeting_number, 1);
        assert_eq!(form.principal_name, "Veria Wulandari, S.Pd");
        assert_eq!(form.duration, "2 x 35 menit");
    }

    #[test]
    fn test_form_uses_original_wire_names() {
        let value = serde_json::to_value(FormData::default()).unwrap();
        assert!(value.get("teacherNIP").is_some());
        assert!(value.get("principalNIP").is_some());
        assert_eq!(value["classLevel"], "1");
        assert_eq!(value["semester"], "Ganjil");
        assert_eq!(value["subject"], "Bahasa Indonesia");
        assert_eq!(value["meetings"][0]["meetingNumber"], 1);
        assert_eq!(value["meetings"][0]["pedagogy"], "Inkuiri-Discovery Learning");
    }

    #[test]
    fn test_dimensions_deserialize_as_set() {
        let mut value = serde_json::to_value(FormData::default()).unwrap();
        value["dimensions"] = serde_json::json!(["Kolaborasi", "Kewargaan", "Kolaborasi"]);
        let form: FormData = serde_json::from_value(value).unwrap();
        assert_eq!(form.dimensions.len(), 2);
        assert_eq!(form.dimension_labels(), "Kewargaan, Kolaborasi");
    }

    #[test]
    fn test_pedagogy_labels() {
        let mut form = FormData::default();
        form.meeting_count = 2;
        form.meetings.push(Meeting {
            meeting_number: 2,
            pedagogy: PedagogicalPractice::ProjectBased,
        });
        assert_eq!(
            form.pedagogy_prompt_labels(),
            "Pertemuan 1: Inkuiri-Discovery Learning, Pertemuan 2: Project Based Learning (PjBL)"
        );
        assert_eq!(
            form.pedagogy_document_labels(),
            "P1: Inkuiri-Discovery Learning | P2: Project Based Learning (PjBL)"
        );
    }

    #[test]
    fn test_class_level_grade_round_trip() {
        for level in ClassLevel::ALL {
            assert_eq!(ClassLevel::from_grade(level.grade()), Some(level));
        }
        assert_eq!(ClassLevel::from_grade(7), None);
    }
}
