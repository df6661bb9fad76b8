use serde::{Deserialize, Serialize};

// ==============================================================================
// PATIENT DASHBOARD
// ==============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PatientProfile {
    pub name: String,
    pub email: String,
    pub phone: &'static str,
    pub age: u32,
    pub gender: &'static str,
    pub join_date: &'static str,
    pub doctor: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TherapyProgress {
    pub current_therapy: &'static str,
    /// Percent complete.
    pub progress: u32,
    pub completed_sessions: u32,
    pub total_sessions: u32,
    pub next_session: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Confirmed,
    Pending,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpcomingSession {
    pub id: u32,
    pub therapy: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub duration: &'static str,
    pub doctor: &'static str,
    pub status: SessionStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub id: u32,
    pub kind: &'static str,
    pub title: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthMetric {
    pub name: &'static str,
    pub value: f32,
    pub unit: &'static str,
    pub progress: u32,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyProgress {
    pub week: &'static str,
    pub wellness: f32,
    pub energy: f32,
    pub sleep: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientDashboard {
    pub profile: PatientProfile,
    pub therapy: TherapyProgress,
    pub upcoming_sessions: Vec<UpcomingSession>,
    pub recent_activities: Vec<Activity>,
    pub health_metrics: Vec<HealthMetric>,
    pub weekly_progress: Vec<WeeklyProgress>,
}

// ==============================================================================
// DOCTOR DASHBOARD
// ==============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct DoctorProfile {
    pub name: String,
    pub email: String,
    pub specialization: &'static str,
    pub phone: &'static str,
    pub license: &'static str,
    pub experience: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub note: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduledAppointment {
    pub id: u32,
    pub patient: &'static str,
    pub time: &'static str,
    pub therapy: &'static str,
    pub duration: &'static str,
    pub status: SessionStatus,
    pub kind: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentPatient {
    pub id: u32,
    pub name: &'static str,
    pub age: u32,
    pub last_visit: &'static str,
    pub condition: &'static str,
    pub progress: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyOverview {
    pub month: &'static str,
    pub patients: u32,
    pub sessions: u32,
    pub revenue: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TherapyShare {
    pub therapy: &'static str,
    pub count: u32,
    pub percentage: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorDashboard {
    pub profile: DoctorProfile,
    pub stats: Vec<StatCard>,
    pub today_schedule: Vec<ScheduledAppointment>,
    pub recent_patients: Vec<RecentPatient>,
    pub monthly_overview: Vec<MonthlyOverview>,
    pub therapy_distribution: Vec<TherapyShare>,
}

// ==============================================================================
// PATIENT LIST
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn admits(self, status: PatientStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == PatientStatus::Active,
            StatusFilter::Inactive => status == PatientStatus::Inactive,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientListEntry {
    pub id: u32,
    pub name: &'static str,
    pub age: u32,
    pub gender: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub condition: &'static str,
    pub last_visit: &'static str,
    pub next_appointment: &'static str,
    pub status: PatientStatus,
    pub progress: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct PatientListQuery {
    #[serde(default)]
    pub status: StatusFilter,
}

// ==============================================================================
// REPORTS
// ==============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportRange {
    #[serde(rename = "last-7-days")]
    LastSevenDays,
    #[default]
    #[serde(rename = "last-30-days")]
    LastThirtyDays,
    #[serde(rename = "last-3-months")]
    LastThreeMonths,
    #[serde(rename = "last-year")]
    LastYear,
}

impl ReportRange {
    pub fn label(self) -> &'static str {
        match self {
            ReportRange::LastSevenDays => "Last 7 Days",
            ReportRange::LastThirtyDays => "Last 30 Days",
            ReportRange::LastThreeMonths => "Last 3 Months",
            ReportRange::LastYear => "Last Year",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub range: ReportRange,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressPoint {
    pub month: &'static str,
    pub wellness: u32,
    pub stress: u32,
    pub energy: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DistributionSlice {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyAppointments {
    pub day: &'static str,
    pub appointments: u32,
    pub completed: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub range: ReportRange,
    pub range_label: &'static str,
    pub key_metrics: Vec<StatCard>,
    pub patient_progress: Vec<ProgressPoint>,
    pub therapy_distribution: Vec<DistributionSlice>,
    pub weekly_appointments: Vec<DailyAppointments>,
}

// ==============================================================================
// SCHEDULE CALENDAR
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarAppointment {
    pub time: &'static str,
    pub patient: &'static str,
    pub therapy: &'static str,
    pub duration_minutes: u32,
}

/// What a day cell shows for one appointment: the time and the patient's
/// first name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentPreview {
    pub time: &'static str,
    pub patient: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleDay {
    pub day: Option<u32>,
    pub key: Option<String>,
    pub is_today: bool,
    pub preview: Vec<AppointmentPreview>,
    /// Appointments on this day beyond the preview.
    pub more: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityWindow {
    pub days: &'static str,
    pub hours: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthRef {
    pub year: i32,
    /// One-based.
    pub month: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleMonth {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub weekdays: [&'static str; 7],
    pub days: Vec<ScheduleDay>,
    pub previous: MonthRef,
    pub next: MonthRef,
    pub today: Vec<CalendarAppointment>,
    pub availability: Vec<AvailabilityWindow>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    pub year: Option<i32>,
    /// One-based; defaults to the current month.
    pub month: Option<u32>,
}
