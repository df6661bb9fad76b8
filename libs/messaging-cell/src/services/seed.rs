use shared_models::auth::UserType;

use crate::models::{Conversation, Message};

/// The signed-in side of a seeded conversation.
pub struct Me<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

struct Line {
    from_me: bool,
    content: &'static str,
    timestamp: &'static str,
    read: bool,
}

const fn line(from_me: bool, content: &'static str, timestamp: &'static str, read: bool) -> Line {
    Line { from_me, content, timestamp, read }
}

struct Thread {
    id: &'static str,
    other_id: &'static str,
    other_name: &'static str,
    avatar: &'static str,
    last_message: &'static str,
    last_message_time: &'static str,
    lines: &'static [Line],
}

const DOCTOR_THREADS: [Thread; 3] = [
    Thread {
        id: "conv-1",
        other_id: "patient-1",
        other_name: "Priya Sharma",
        avatar: "PS",
        last_message: "Thank you for the session today. I'm feeling much better!",
        last_message_time: "2 hours ago",
        lines: &[
            line(false, "Hello Dr. Kumar, I wanted to ask about the Abhyanga massage frequency.", "10:30 AM", true),
            line(true, "Hello Priya! For your current condition, I recommend 3 sessions per week for optimal results.", "10:45 AM", true),
            line(false, "That sounds perfect. Should I continue with the herbal supplements as well?", "11:00 AM", true),
            line(true, "Yes, please continue with the Triphala supplements. Take them 30 minutes before meals.", "11:15 AM", true),
            line(false, "Thank you for the session today. I'm feeling much better!", "2:30 PM", false),
        ],
    },
    Thread {
        id: "conv-2",
        other_id: "patient-2",
        other_name: "Amit Patel",
        avatar: "AP",
        last_message: "When should I schedule my next consultation?",
        last_message_time: "1 day ago",
        lines: &[
            line(false, "Dr. Kumar, the digestive issues have improved significantly after the Panchakarma treatment.", "Yesterday 3:00 PM", true),
            line(true, "That's wonderful to hear, Amit! The treatment is working well for you.", "Yesterday 3:15 PM", true),
            line(false, "When should I schedule my next consultation?", "Yesterday 4:00 PM", false),
        ],
    },
    Thread {
        id: "conv-3",
        other_id: "patient-3",
        other_name: "Sunita Reddy",
        avatar: "SR",
        last_message: "The Shirodhara session was amazing!",
        last_message_time: "2 days ago",
        lines: &[
            line(false, "The Shirodhara session was amazing! I slept so well last night.", "2 days ago 6:00 PM", true),
            line(true, "I'm so glad to hear that! Shirodhara is excellent for improving sleep quality and reducing stress.", "2 days ago 6:30 PM", true),
        ],
    },
];

const PATIENT_THREADS: [Thread; 1] = [Thread {
    id: "conv-1",
    other_id: "doctor-1",
    other_name: "Dr. Rajesh Kumar",
    avatar: "RK",
    last_message: "Yes, please continue with the Triphala supplements. Take them 30 minutes before meals.",
    last_message_time: "2 hours ago",
    lines: &[
        line(true, "Hello Dr. Kumar, I wanted to ask about the Abhyanga massage frequency.", "10:30 AM", true),
        line(false, "Hello Priya! For your current condition, I recommend 3 sessions per week for optimal results.", "10:45 AM", true),
        line(true, "That sounds perfect. Should I continue with the herbal supplements as well?", "11:00 AM", true),
        line(false, "Yes, please continue with the Triphala supplements. Take them 30 minutes before meals.", "11:15 AM", false),
    ],
}];

fn opposite(user_type: UserType) -> UserType {
    match user_type {
        UserType::Doctor => UserType::Patient,
        UserType::Patient => UserType::Doctor,
    }
}

/// Starting inbox for a user. Doctors see their patients, patients see
/// their doctor.
pub fn inbox_for(user_type: UserType, me: &Me<'_>) -> Vec<Conversation> {
    let threads: &[Thread] = match user_type {
        UserType::Doctor => &DOCTOR_THREADS,
        UserType::Patient => &PATIENT_THREADS,
    };
    let other_type = opposite(user_type);

    threads
        .iter()
        .map(|thread| {
            let messages: Vec<Message> = thread
                .lines
                .iter()
                .zip(1..)
                .map(|(line, id)| {
                    let (sender_id, sender_name, sender_type) = if line.from_me {
                        (me.id.to_string(), me.name.to_string(), user_type)
                    } else {
                        (thread.other_id.to_string(), thread.other_name.to_string(), other_type)
                    };
                    Message {
                        id,
                        sender_id,
                        sender_name,
                        sender_type,
                        content: line.content.to_string(),
                        timestamp: line.timestamp.to_string(),
                        read: line.read,
                    }
                })
                .collect();

            Conversation {
                id: thread.id.to_string(),
                participant_name: thread.other_name.to_string(),
                participant_type: other_type,
                participant_avatar: thread.avatar.to_string(),
                last_message: thread.last_message.to_string(),
                last_message_time: thread.last_message_time.to_string(),
                unread_count: messages.iter().filter(|m| !m.read).count() as u32,
                messages,
            }
        })
        .collect()
}
