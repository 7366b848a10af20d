use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

pub const DAYS_PER_WEEK: usize = 7;

/// The shape of a semester: how many weeks it spans and which of them are
/// special. Week numbers are 1-based.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SemesterLayout {
    pub weeks_per_semester: u32,
    pub recess_week: u32,
    pub reading_week: u32,
    pub exam_weeks: Vec<u32>,
    pub first_day_of_week: Weekday,
    pub default_start_date: NaiveDate,
}

impl Default for SemesterLayout {
    fn default() -> Self {
        Self {
            weeks_per_semester: 17,
            recess_week: 7,
            reading_week: 15,
            exam_weeks: vec![16, 17],
            first_day_of_week: Weekday::Mon,
            default_start_date: NaiveDate::from_ymd_opt(2020, 1, 13).unwrap_or_default(),
        }
    }
}

impl SemesterLayout {
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.weeks_per_semester == 0 {
            return Err(CalendarError::InvalidSemester(
                "a semester needs at least one week".to_string(),
            ));
        }
        if self.reading_week == 0 || self.reading_week > self.weeks_per_semester {
            return Err(CalendarError::InvalidSemester(format!(
                "reading week {} is outside of weeks 1..={}",
                self.reading_week, self.weeks_per_semester
            )));
        }
        if self.recess_week >= self.reading_week {
            return Err(CalendarError::InvalidSemester(format!(
                "recess week {} must come before reading week {}",
                self.recess_week, self.reading_week
            )));
        }
        if !(1..=self.weeks_per_semester).any(|week| self.hosts_lessons(week)) {
            return Err(CalendarError::InvalidSemester(
                "no week of the semester hosts lessons".to_string(),
            ));
        }
        if let Some(week) = self.exam_weeks.iter().find(|w| **w == 0 || **w > self.weeks_per_semester) {
            return Err(CalendarError::InvalidSemester(format!(
                "exam week {} is outside of weeks 1..={}",
                week, self.weeks_per_semester
            )));
        }
        if self.default_start_date.weekday() != self.first_day_of_week {
            return Err(CalendarError::InvalidStartDay {
                day: self.default_start_date.weekday(),
                expected: self.first_day_of_week,
            });
        }
        Ok(())
    }

    /// Whether a recurring lesson is held in the given week.
    pub fn hosts_lessons(&self, week_num: u32) -> bool {
        week_num != self.recess_week && week_num < self.reading_week
    }

    pub fn total_days(&self) -> i64 {
        self.weeks_per_semester as i64 * DAYS_PER_WEEK as i64
    }

    /// Describes a 1-based week number in academic terms. Weeks after recess
    /// are renumbered so that recess does not count as a teaching week.
    pub fn label_week(&self, week_num: i64) -> WeekLabel {
        if week_num < 1 {
            return WeekLabel::PreSemester;
        }
        if week_num > self.weeks_per_semester as i64 {
            return WeekLabel::Break;
        }

        let week = week_num as u32;
        if week == self.recess_week {
            WeekLabel::Recess
        } else if week == self.reading_week {
            WeekLabel::Reading
        } else if self.exam_weeks.contains(&week) {
            WeekLabel::Exam
        } else if week > self.recess_week {
            WeekLabel::Academic(week - 1)
        } else {
            WeekLabel::Academic(week)
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekLabel {
    PreSemester,
    Academic(u32),
    Recess,
    Reading,
    Exam,
    Break,
}

impl fmt::Display for WeekLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekLabel::PreSemester => write!(f, "Pre-sem"),
            WeekLabel::Academic(n) => write!(f, "{}", n),
            WeekLabel::Recess => write!(f, "Recess"),
            WeekLabel::Reading => write!(f, "Reading"),
            WeekLabel::Exam => write!(f, "Exam"),
            WeekLabel::Break => write!(f, "Break"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_week() {
        let layout = SemesterLayout::default();

        assert_eq!(layout.label_week(0), WeekLabel::PreSemester);
        assert_eq!(layout.label_week(1), WeekLabel::Academic(1));
        assert_eq!(layout.label_week(6), WeekLabel::Academic(6));
        assert_eq!(layout.label_week(7), WeekLabel::Recess);
        assert_eq!(layout.label_week(8), WeekLabel::Academic(7));
        assert_eq!(layout.label_week(14), WeekLabel::Academic(13));
        assert_eq!(layout.label_week(15), WeekLabel::Reading);
        assert_eq!(layout.label_week(16), WeekLabel::Exam);
        assert_eq!(layout.label_week(17), WeekLabel::Exam);
        assert_eq!(layout.label_week(18), WeekLabel::Break);
        assert_eq!(layout.label_week(8).to_string(), "7");
    }

    #[test]
    fn test_hosts_lessons() {
        let layout = SemesterLayout::default();
        let hosting: Vec<u32> = (1..=17).filter(|w| layout.hosts_lessons(*w)).collect();
        assert_eq!(hosting, vec![1, 2, 3, 4, 5, 6, 8, 9, 10, 11, 12, 13, 14]);
    }

    #[test]
    fn test_validate_rejects_bad_layouts() {
        assert!(SemesterLayout::default().validate().is_ok());

        let late_recess = SemesterLayout { recess_week: 15, ..Default::default() };
        assert!(matches!(late_recess.validate(), Err(CalendarError::InvalidSemester(_))));

        let no_teaching = SemesterLayout { recess_week: 0, reading_week: 1, ..Default::default() };
        assert!(matches!(no_teaching.validate(), Err(CalendarError::InvalidSemester(_))));

        let tuesday_start = SemesterLayout {
            default_start_date: NaiveDate::from_ymd_opt(2020, 1, 14).unwrap(),
            ..Default::default()
        };
        assert_eq!(
            tuesday_start.validate(),
            Err(CalendarError::InvalidStartDay { day: Weekday::Tue, expected: Weekday::Mon })
        );
    }
}
