use chrono::{Datelike, NaiveDate};
use tracing::debug;

use appointment_cell::services::calendar::WEEKDAY_LABELS;
use appointment_cell::MonthView;

use crate::models::{
    AppointmentPreview, AvailabilityWindow, CalendarAppointment, MonthRef, ScheduleDay,
    ScheduleMonth,
};

/// Appointments listed in a day cell before collapsing into "+N more".
pub const PREVIEW_LIMIT: usize = 2;

const fn visit(
    time: &'static str,
    patient: &'static str,
    therapy: &'static str,
    duration_minutes: u32,
) -> CalendarAppointment {
    CalendarAppointment {
        time,
        patient,
        therapy,
        duration_minutes,
    }
}

const SCHEDULE: [(&str, &[CalendarAppointment]); 3] = [
    (
        "2024-12-27",
        &[
            visit("09:00", "Priya Sharma", "Abhyanga", 60),
            visit("10:30", "Amit Patel", "Consultation", 30),
            visit("14:00", "Vikram Singh", "Assessment", 45),
        ],
    ),
    (
        "2024-12-28",
        &[
            visit("09:30", "Sunita Reddy", "Shirodhara", 45),
            visit("11:00", "Meera Joshi", "Consultation", 30),
            visit("15:00", "Raj Kumar", "Panchakarma", 90),
        ],
    ),
    (
        "2024-12-30",
        &[
            visit("10:00", "Anita Sharma", "Abhyanga", 60),
            visit("14:30", "Rohit Patel", "Nasya", 30),
        ],
    ),
];

pub fn appointments_on(key: &str) -> &'static [CalendarAppointment] {
    SCHEDULE
        .iter()
        .find(|(date, _)| *date == key)
        .map(|(_, appointments)| *appointments)
        .unwrap_or(&[])
}

fn first_name(patient: &'static str) -> &'static str {
    patient.split_whitespace().next().unwrap_or(patient)
}

fn month_ref(view: MonthView) -> MonthRef {
    MonthRef {
        year: view.year,
        month: view.month0 + 1,
    }
}

fn weekly_hours() -> Vec<AvailabilityWindow> {
    vec![
        AvailabilityWindow { days: "Monday - Friday", hours: "9:00 AM - 6:00 PM" },
        AvailabilityWindow { days: "Saturday", hours: "9:00 AM - 2:00 PM" },
        AvailabilityWindow { days: "Sunday", hours: "Closed" },
    ]
}

/// The doctor's month calendar: one cell per grid slot, each day with at
/// most [`PREVIEW_LIMIT`] appointments and a count of the rest.
pub fn schedule_month(view: MonthView, today: NaiveDate) -> ScheduleMonth {
    let days = view
        .grid()
        .into_iter()
        .map(|cell| {
            let Some(day) = cell else {
                return ScheduleDay::default();
            };
            let key = view.date_key(day);
            let appointments = appointments_on(&key);

            ScheduleDay {
                day: Some(day),
                is_today: view.date(day) == Some(today),
                preview: appointments
                    .iter()
                    .take(PREVIEW_LIMIT)
                    .map(|a| AppointmentPreview {
                        time: a.time,
                        patient: first_name(a.patient),
                    })
                    .collect(),
                more: appointments.len().saturating_sub(PREVIEW_LIMIT),
                key: Some(key),
            }
        })
        .collect();

    let today_key = MonthView::from_date(today).date_key(today.day());
    debug!("Schedule for {} ({} today)", view.label(), today_key);

    ScheduleMonth {
        year: view.year,
        month: view.month0 + 1,
        label: view.label(),
        weekdays: WEEKDAY_LABELS,
        days,
        previous: month_ref(view.prev()),
        next: month_ref(view.next()),
        today: appointments_on(&today_key).to_vec(),
        availability: weekly_hours(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_dates_have_no_appointments() {
        assert!(appointments_on("2024-12-29").is_empty());
        assert_eq!(appointments_on("2024-12-30").len(), 2);
    }

    #[test]
    fn preview_uses_first_names() {
        assert_eq!(first_name("Sunita Reddy"), "Sunita");
        assert_eq!(first_name("Cher"), "Cher");
    }
}
