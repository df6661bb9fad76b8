use auth_cell::display_name;
use shared_models::auth::UserRecord;

use crate::models::{
    DoctorDashboard, DoctorProfile, MonthlyOverview, PatientListEntry, PatientStatus,
    RecentPatient, ScheduledAppointment, SessionStatus, StatCard, StatusFilter, TherapyShare,
};

pub const PLACEHOLDER_NAME: &str = "Dr. Rajesh Kumar";
pub const PLACEHOLDER_EMAIL: &str = "dr.rajesh@ayursutra.com";

const TOTAL_PATIENTS: u32 = 156;
const TODAY_APPOINTMENTS: u32 = 8;
const WEEKLY_HOURS: u32 = 42;
const RATING: f32 = 4.8;

pub fn doctor_dashboard(user: Option<&UserRecord>) -> DoctorDashboard {
    let appointment = |id, patient, time, therapy, duration, status, kind| ScheduledAppointment {
        id,
        patient,
        time,
        therapy,
        duration,
        status,
        kind,
    };

    DoctorDashboard {
        profile: DoctorProfile {
            name: user.map_or_else(|| PLACEHOLDER_NAME.to_string(), display_name),
            email: user.map_or_else(|| PLACEHOLDER_EMAIL.to_string(), |u| u.email.clone()),
            specialization: "Panchakarma Specialist",
            phone: "+91 98765 43210",
            license: "AYU-2019-MH-1234",
            experience: "15 years",
        },
        stats: vec![
            StatCard { title: "Total Patients", value: TOTAL_PATIENTS.to_string(), note: "+12 this month" },
            StatCard { title: "Today's Appointments", value: TODAY_APPOINTMENTS.to_string(), note: "Next at 9:00 AM" },
            StatCard { title: "Weekly Hours", value: WEEKLY_HOURS.to_string(), note: "6 hours today" },
            StatCard { title: "Patient Rating", value: RATING.to_string(), note: "+0.2 this month" },
        ],
        today_schedule: vec![
            appointment(1, "Priya Sharma", "09:00 AM", "Abhyanga Massage", "60 min", SessionStatus::Confirmed, "follow-up"),
            appointment(2, "Amit Patel", "10:30 AM", "Consultation", "30 min", SessionStatus::Confirmed, "new"),
            appointment(3, "Sunita Reddy", "11:30 AM", "Shirodhara", "45 min", SessionStatus::Pending, "follow-up"),
            appointment(4, "Vikram Singh", "02:00 PM", "Panchakarma Assessment", "45 min", SessionStatus::Confirmed, "assessment"),
            appointment(5, "Meera Joshi", "03:00 PM", "Nasya Therapy", "30 min", SessionStatus::Confirmed, "follow-up"),
        ],
        recent_patients: PATIENTS
            .iter()
            .take(4)
            .map(|p| RecentPatient {
                id: p.id,
                name: p.name,
                age: p.age,
                last_visit: p.last_visit,
                condition: p.condition,
                progress: p.progress,
                avatar: p.avatar,
            })
            .collect(),
        monthly_overview: vec![
            MonthlyOverview { month: "Aug", patients: 45, sessions: 120, revenue: 85000 },
            MonthlyOverview { month: "Sep", patients: 52, sessions: 135, revenue: 92000 },
            MonthlyOverview { month: "Oct", patients: 48, sessions: 128, revenue: 88000 },
            MonthlyOverview { month: "Nov", patients: 58, sessions: 145, revenue: 98000 },
            MonthlyOverview { month: "Dec", patients: 62, sessions: 156, revenue: 105000 },
        ],
        therapy_distribution: vec![
            TherapyShare { therapy: "Abhyanga", count: 45, percentage: 28 },
            TherapyShare { therapy: "Shirodhara", count: 38, percentage: 24 },
            TherapyShare { therapy: "Consultation", count: 32, percentage: 20 },
            TherapyShare { therapy: "Panchakarma", count: 25, percentage: 16 },
            TherapyShare { therapy: "Nasya", count: 20, percentage: 12 },
        ],
    }
}

macro_rules! patient {
    ($id:expr, $name:expr, $age:expr, $gender:expr, $phone:expr, $email:expr, $condition:expr,
     $last_visit:expr, $next:expr, $status:ident, $progress:expr, $avatar:expr) => {
        PatientListEntry {
            id: $id,
            name: $name,
            age: $age,
            gender: $gender,
            phone: $phone,
            email: $email,
            condition: $condition,
            last_visit: $last_visit,
            next_appointment: $next,
            status: PatientStatus::$status,
            progress: $progress,
            avatar: $avatar,
        }
    };
}

const PATIENTS: [PatientListEntry; 5] = [
    patient!(1, "Priya Sharma", 34, "Female", "+91 98765 43210", "priya.sharma@email.com",
        "Stress Management", "Today", "Tomorrow, 10:00 AM", Active, "Improving", "PS"),
    patient!(2, "Amit Patel", 42, "Male", "+91 98765 43211", "amit.patel@email.com",
        "Digestive Issues", "Yesterday", "Dec 28, 2:00 PM", Active, "Good", "AP"),
    patient!(3, "Sunita Reddy", 38, "Female", "+91 98765 43212", "sunita.reddy@email.com",
        "Joint Pain", "2 days ago", "Dec 30, 11:00 AM", Active, "Excellent", "SR"),
    patient!(4, "Vikram Singh", 45, "Male", "+91 98765 43213", "vikram.singh@email.com",
        "Insomnia", "3 days ago", "Jan 2, 9:00 AM", Active, "Improving", "VS"),
    patient!(5, "Meera Joshi", 29, "Female", "+91 98765 43214", "meera.joshi@email.com",
        "Skin Issues", "1 week ago", "Not scheduled", Inactive, "Stable", "MJ"),
];

pub fn patient_list(filter: StatusFilter) -> Vec<PatientListEntry> {
    PATIENTS
        .iter()
        .filter(|p| filter.admits(p.status))
        .cloned()
        .collect()
}
