use crate::models::{DailyAppointments, DistributionSlice, ProgressPoint, Report, ReportRange, StatCard};

/// Practice analytics. The figures are the same for every range; only the
/// label follows the selection.
pub fn report(range: ReportRange) -> Report {
    let metric = |title, value: &str, note| StatCard { title, value: value.to_string(), note };
    let progress = |month, wellness, stress, energy| ProgressPoint { month, wellness, stress, energy };
    let slice = |name, value, color| DistributionSlice { name, value, color };
    let day = |day, appointments, completed| DailyAppointments { day, appointments, completed };

    Report {
        range,
        range_label: range.label(),
        key_metrics: vec![
            metric("Total Patients", "1,247", "+12% from last month"),
            metric("Active Treatments", "342", "+8% from last month"),
            metric("Avg. Session Duration", "75 min", "+5 min from last month"),
            metric("Success Rate", "94.2%", "+2.1% from last month"),
        ],
        patient_progress: vec![
            progress("Jan", 65, 45, 70),
            progress("Feb", 70, 40, 75),
            progress("Mar", 75, 35, 80),
            progress("Apr", 80, 30, 85),
            progress("May", 85, 25, 90),
            progress("Jun", 88, 20, 92),
        ],
        therapy_distribution: vec![
            slice("Abhyanga", 35, "#22c55e"),
            slice("Shirodhara", 25, "#3b82f6"),
            slice("Panchakarma", 20, "#f59e0b"),
            slice("Nasya", 12, "#ef4444"),
            slice("Basti", 8, "#8b5cf6"),
        ],
        weekly_appointments: vec![
            day("Mon", 12, 10),
            day("Tue", 15, 14),
            day("Wed", 18, 16),
            day("Thu", 14, 13),
            day("Fri", 16, 15),
            day("Sat", 8, 8),
            day("Sun", 5, 5),
        ],
    }
}
