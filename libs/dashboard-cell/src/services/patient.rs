use auth_cell::display_name;
use shared_models::auth::UserRecord;

use crate::models::{
    Activity, HealthMetric, PatientDashboard, PatientProfile, SessionStatus, TherapyProgress,
    UpcomingSession, WeeklyProgress,
};

pub const PLACEHOLDER_NAME: &str = "Priya Sharma";
pub const PLACEHOLDER_EMAIL: &str = "priya.sharma@email.com";

pub fn patient_dashboard(user: Option<&UserRecord>) -> PatientDashboard {
    let profile = PatientProfile {
        name: user.map_or_else(|| PLACEHOLDER_NAME.to_string(), display_name),
        email: user.map_or_else(|| PLACEHOLDER_EMAIL.to_string(), |u| u.email.clone()),
        phone: "+91 98765 43210",
        age: 34,
        gender: "Female",
        join_date: "March 2024",
        doctor: "Dr. Rajesh Kumar",
    };

    let session = |id, therapy, date, time, duration, status| UpcomingSession {
        id,
        therapy,
        date,
        time,
        duration,
        doctor: "Dr. Rajesh Kumar",
        status,
    };

    PatientDashboard {
        profile,
        therapy: TherapyProgress {
            current_therapy: "Panchakarma Detox Program",
            progress: 65,
            completed_sessions: 13,
            total_sessions: 20,
            next_session: "Tomorrow, 10:00 AM",
        },
        upcoming_sessions: vec![
            session(1, "Abhyanga Massage", "Tomorrow", "10:00 AM", "60 min", SessionStatus::Confirmed),
            session(2, "Shirodhara", "Dec 28", "2:00 PM", "45 min", SessionStatus::Confirmed),
            session(3, "Consultation", "Dec 30", "11:00 AM", "30 min", SessionStatus::Pending),
        ],
        recent_activities: vec![
            Activity { id: 1, kind: "session", title: "Completed Abhyanga Massage", time: "2 hours ago" },
            Activity { id: 2, kind: "reminder", title: "Medication reminder: Take Triphala", time: "4 hours ago" },
            Activity { id: 3, kind: "appointment", title: "Next session scheduled", time: "1 day ago" },
            Activity { id: 4, kind: "progress", title: "Therapy progress updated", time: "2 days ago" },
        ],
        health_metrics: vec![
            HealthMetric { name: "Heart Rate", value: 72.0, unit: "bpm", progress: 75, status: "Normal" },
            HealthMetric { name: "Energy Level", value: 8.0, unit: "/10", progress: 80, status: "Good" },
            HealthMetric { name: "Sleep Quality", value: 8.2, unit: "/10", progress: 82, status: "Excellent" },
            HealthMetric { name: "Hydration", value: 2.1, unit: "L", progress: 70, status: "Good" },
        ],
        weekly_progress: vec![
            WeeklyProgress { week: "Week 1", wellness: 6.2, energy: 5.8, sleep: 6.0 },
            WeeklyProgress { week: "Week 2", wellness: 6.8, energy: 6.2, sleep: 6.5 },
            WeeklyProgress { week: "Week 3", wellness: 7.2, energy: 6.8, sleep: 7.0 },
            WeeklyProgress { week: "Week 4", wellness: 7.8, energy: 7.5, sleep: 7.8 },
            WeeklyProgress { week: "Week 5", wellness: 8.2, energy: 8.0, sleep: 8.2 },
        ],
    }
}
