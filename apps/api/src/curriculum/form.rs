//! Form Model: the edits a teacher makes, applied so the meeting invariant always holds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::curriculum::models::{
    FormData, GraduateDimension, Meeting, PedagogicalPractice, MAX_MEETINGS,
};

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("meeting count must be between 1 and {MAX_MEETINGS}, got {0}")]
    MeetingCountOutOfRange(u8),

    #[error("meeting {0} does not exist in this plan")]
    UnknownMeeting(u8),

    #[error("meetings list is inconsistent with meetingCount={count}")]
    InconsistentMeetings { count: u8 },

    #[error("field '{0}' accepts a single suggestion only")]
    SingleSelectionOnly(&'static str),
}

/// A form field the suggestion flow can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionField {
    /// Capaian Pembelajaran (outcome).
    Cp,
    /// Tujuan Pembelajaran (objective).
    Tp,
    /// Materi (topic).
    Materi,
}

impl SuggestionField {
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionField::Cp => "cp",
            SuggestionField::Tp => "tp",
            SuggestionField::Materi => "materi",
        }
    }

    /// TP and materi accept several picks; CP takes exactly one.
    pub fn allows_multiple(self) -> bool {
        !matches!(self, SuggestionField::Cp)
    }
}

/// What the user picked from the suggestion list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum SuggestionSelection {
    Single(String),
    /// Picks in the order they were selected.
    Multiple(Vec<String>),
}

/// Resizes the meeting plan to `count`.
///
/// Growing appends default-pedagogy meetings and keeps existing choices; shrinking
/// keeps the first `count` entries. Every entry is renumbered by position afterwards,
/// so a misnumbered list from the wire comes back consistent.
pub fn set_meeting_count(form: &mut FormData, count: u8) -> Result<(), FormError> {
    if !(1..=MAX_MEETINGS).contains(&count) {
        return Err(FormError::MeetingCountOutOfRange(count));
    }

    form.meetings.resize_with(count as usize, || Meeting {
        meeting_number: 0,
        pedagogy: PedagogicalPractice::default(),
    });
    for (number, meeting) in (1..=count).zip(form.meetings.iter_mut()) {
        meeting.meeting_number = number;
    }
    form.meeting_count = count;
    Ok(())
}

pub fn set_pedagogy(
    form: &mut FormData,
    meeting_number: u8,
    pedagogy: PedagogicalPractice,
) -> Result<(), FormError> {
    let meeting = form
        .meetings
        .iter_mut()
        .find(|m| m.meeting_number == meeting_number)
        .ok_or(FormError::UnknownMeeting(meeting_number))?;
    meeting.pedagogy = pedagogy;
    Ok(())
}

/// Adds the dimension if absent, removes it if present.
pub fn toggle_dimension(form: &mut FormData, dimension: GraduateDimension) {
    if !form.dimensions.remove(&dimension) {
        form.dimensions.insert(dimension);
    }
}

/// Applies a suggestion pick to its field.
///
/// A single pick replaces the field text. Multiple picks are joined with `\n` in
/// selection order; an empty multiple selection leaves the field unchanged.
pub fn apply_suggestion(
    form: &mut FormData,
    field: SuggestionField,
    selection: SuggestionSelection,
) -> Result<(), FormError> {
    let value = match selection {
        SuggestionSelection::Single(value) => value,
        SuggestionSelection::Multiple(values) => {
            if !field.allows_multiple() {
                return Err(FormError::SingleSelectionOnly(field.as_str()));
            }
            if values.is_empty() {
                return Ok(());
            }
            values.join("\n")
        }
    };

    match field {
        SuggestionField::Cp => form.cp = value,
        SuggestionField::Tp => form.tp = value,
        SuggestionField::Materi => form.materi = value,
    }
    Ok(())
}

/// Rejects wire input whose meeting list does not match `meeting_count`.
pub fn check_invariants(form: &FormData) -> Result<(), FormError> {
    if !(1..=MAX_MEETINGS).contains(&form.meeting_count) {
        return Err(FormError::MeetingCountOutOfRange(form.meeting_count));
    }
    let consistent = form.meetings.len() == form.meeting_count as usize
        && form
            .meetings
            .iter()
            .enumerate()
            .all(|(i, m)| m.meeting_number as usize == i + 1);
    if !consistent {
        return Err(FormError::InconsistentMeetings {
            count: form.meeting_count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pedagogies(form: &FormData) -> Vec<PedagogicalPractice> {
        form.meetings.iter().map(|m| m.pedagogy).collect()
    }

    #[test]
    fn test_meeting_count_change_keeps_length_in_sync() {
        let mut form = FormData::default();
        for count in [3, 8, 1, 5, 2, 2, 7] {
            set_meeting_count(&mut form, count).unwrap();
            assert_eq!(form.meetings.len(), count as usize);
            assert_eq!(form.meeting_count, count);
            check_invariants(&form).unwrap();
        }
    }

    #[test]
    fn test_growing_meetings_retains_existing_choices() {
        let mut form = FormData::default();
        set_meeting_count(&mut form, 2).unwrap();
        set_pedagogy(&mut form, 1, PedagogicalPractice::GameBased).unwrap();
        set_pedagogy(&mut form, 2, PedagogicalPractice::ProblemBased).unwrap();

        set_meeting_count(&mut form, 4).unwrap();

        assert_eq!(
            pedagogies(&form),
            vec![
                PedagogicalPractice::GameBased,
                PedagogicalPractice::ProblemBased,
                PedagogicalPractice::InkuiriDiscovery,
                PedagogicalPractice::InkuiriDiscovery,
            ]
        );
        assert_eq!(form.meetings[3].meeting_number, 4);
    }

    #[test]
    fn test_shrinking_meetings_keeps_first_entries() {
        let mut form = FormData::default();
        set_meeting_count(&mut form, 3).unwrap();
        set_pedagogy(&mut form, 1, PedagogicalPractice::StationLearning).unwrap();
        set_pedagogy(&mut form, 2, PedagogicalPractice::Kooperatif).unwrap();
        let before = form.meetings[..2].to_vec();

        set_meeting_count(&mut form, 2).unwrap();

        assert_eq!(form.meetings, before);
    }

    #[test]
    fn test_meeting_count_out_of_range_rejected() {
        let mut form = FormData::default();
        assert_eq!(
            set_meeting_count(&mut form, 0),
            Err(FormError::MeetingCountOutOfRange(0))
        );
        assert_eq!(
            set_meeting_count(&mut form, 9),
            Err(FormError::MeetingCountOutOfRange(9))
        );
        assert_eq!(form.meetings.len(), 1);
    }

    #[test]
    fn test_resize_renumbers_misnumbered_meetings() {
        let mut form = FormData::default();
        form.meeting_count = 2;
        form.meetings = vec![
            Meeting {
                meeting_number: 1,
                pedagogy: PedagogicalPractice::GameBased,
            },
            Meeting {
                meeting_number: 3,
                pedagogy: PedagogicalPractice::Kooperatif,
            },
        ];

        set_meeting_count(&mut form, 3).unwrap();

        let numbers: Vec<u8> = form.meetings.iter().map(|m| m.meeting_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(form.meetings[1].pedagogy, PedagogicalPractice::Kooperatif);
        check_invariants(&form).unwrap();
    }

    #[test]
    fn test_resize_handles_oversized_wire_list() {
        let mut form = FormData::default();
        form.meetings = (0..300)
            .map(|_| Meeting {
                meeting_number: 1,
                pedagogy: PedagogicalPractice::StationLearning,
            })
            .collect();

        set_meeting_count(&mut form, 4).unwrap();

        assert_eq!(form.meetings.len(), 4);
        check_invariants(&form).unwrap();
    }

    #[test]
    fn test_set_pedagogy_unknown_meeting() {
        let mut form = FormData::default();
        assert_eq!(
            set_pedagogy(&mut form, 3, PedagogicalPractice::GameBased),
            Err(FormError::UnknownMeeting(3))
        );
    }

    #[test]
    fn test_single_suggestion_replaces_field() {
        let mut form = FormData::default();
        form.cp = "teks lama".to_string();
        apply_suggestion(
            &mut form,
            SuggestionField::Cp,
            SuggestionSelection::Single("CP baru".to_string()),
        )
        .unwrap();
        assert_eq!(form.cp, "CP baru");
    }

    #[test]
    fn test_multiple_suggestions_join_in_selection_order() {
        let mut form = FormData::default();
        form.tp = "lama".to_string();
        apply_suggestion(
            &mut form,
            SuggestionField::Tp,
            SuggestionSelection::Multiple(vec![
                "TP ketiga".to_string(),
                "TP pertama".to_string(),
            ]),
        )
        .unwrap();
        assert_eq!(form.tp, "TP ketiga\nTP pertama");

        apply_suggestion(
            &mut form,
            SuggestionField::Materi,
            SuggestionSelection::Multiple(vec!["Pecahan".to_string(), "Desimal".to_string()]),
        )
        .unwrap();
        assert_eq!(form.materi, "Pecahan\nDesimal");
    }

    #[test]
    fn test_multiple_suggestions_rejected_for_cp() {
        let mut form = FormData::default();
        let result = apply_suggestion(
            &mut form,
            SuggestionField::Cp,
            SuggestionSelection::Multiple(vec!["a".to_string(), "b".to_string()]),
        );
        assert_eq!(result, Err(FormError::SingleSelectionOnly("cp")));
        assert!(form.cp.is_empty());
    }

    #[test]
    fn test_empty_multiple_selection_is_noop() {
        let mut form = FormData::default();
        form.materi = "tetap".to_string();
        apply_suggestion(
            &mut form,
            SuggestionField::Materi,
            SuggestionSelection::Multiple(vec![]),
        )
        .unwrap();
        assert_eq!(form.materi, "tetap");
    }

    #[test]
    fn test_toggle_dimension_removes_only_that_dimension() {
        let mut form = FormData::default();
        toggle_dimension(&mut form, GraduateDimension::Kolaborasi);
        toggle_dimension(&mut form, GraduateDimension::Kreativitas);
        toggle_dimension(&mut form, GraduateDimension::Kolaborasi);
        assert_eq!(form.dimensions.len(), 1);
        assert!(form.dimensions.contains(&GraduateDimension::Kreativitas));
    }

    #[test]
    fn test_check_invariants_rejects_misnumbered_meetings() {
        let mut form = FormData::default();
        form.meetings[0].meeting_number = 2;
        assert_eq!(
            check_invariants(&form),
            Err(FormError::InconsistentMeetings { count: 1 })
        );
    }

    #[test]
    fn test_selection_wire_format() {
        let selection: SuggestionSelection =
            serde_json::from_str(r#"{"mode":"multiple","value":["a","b"]}"#).unwrap();
        assert_eq!(
            selection,
            SuggestionSelection::Multiple(vec!["a".to_string(), "b".to_string()])
        );
    }
}
