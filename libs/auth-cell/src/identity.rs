use shared_models::auth::{UserRecord, UserType};

/// Full names for the demo accounts. Anyone else is named after their email.
const KNOWN_USERS: [(&str, &str); 4] = [
    ("priya.sharma@email.com", "Priya Sharma"),
    ("dr.rajesh@ayursutra.com", "Dr. Rajesh Kumar"),
    ("amit.patel@gmail.com", "Amit Patel"),
    ("sunita.reddy@yahoo.com", "Sunita Reddy"),
];

/// `"priya.sharma@email.com"` becomes `"Priya Sharma"`. Returns `"User"`
/// when there is no `@`.
pub fn extract_username_from_email(email: &str) -> String {
    let Some((local, _)) = email.split_once('@') else {
        return "User".to_string();
    };

    let mut name = String::with_capacity(local.len());
    let mut at_word_start = true;
    for c in local.chars() {
        let c = if matches!(c, '.' | '_' | '-') { ' ' } else { c };
        if c.is_ascii_alphanumeric() {
            if at_word_start {
                name.push(c.to_ascii_uppercase());
            } else {
                name.push(c);
            }
            at_word_start = false;
        } else {
            name.push(c);
            at_word_start = true;
        }
    }

    name.trim().to_string()
}

pub fn display_name(user: &UserRecord) -> String {
    if !user.full_name.is_empty() {
        user.full_name.clone()
    } else if !user.username.is_empty() {
        user.username.clone()
    } else {
        extract_username_from_email(&user.email)
    }
}

/// At most two letters for the avatar, `"U"` if the name is blank.
pub fn user_initials(user: &UserRecord) -> String {
    let name = display_name(user);
    let words: Vec<&str> = name.split(' ').filter(|w| !w.is_empty()).collect();

    match words.as_slice() {
        [first, second, ..] => first
            .chars()
            .take(1)
            .chain(second.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
        [only] => only.chars().take(2).collect::<String>().to_uppercase(),
        [] => "U".to_string(),
    }
}

/// Builds the identity record for a sign-in. No credentials are checked.
pub fn simulate_login(email: &str, user_type: UserType) -> UserRecord {
    let username = extract_username_from_email(email);
    let full_name = KNOWN_USERS
        .iter()
        .find(|(known, _)| *known == email)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| username.clone());

    UserRecord {
        email: email.to_string(),
        username,
        full_name,
        user_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(full_name: &str, username: &str, email: &str) -> UserRecord {
        UserRecord {
            email: email.to_string(),
            username: username.to_string(),
            full_name: full_name.to_string(),
            user_type: UserType::Patient,
        }
    }

    #[test]
    fn username_from_email() {
        assert_eq!(extract_username_from_email("priya.sharma@email.com"), "Priya Sharma");
        assert_eq!(extract_username_from_email("john_doe-99@x.org"), "John Doe 99");
        assert_eq!(extract_username_from_email("no-at-sign"), "User");
        assert_eq!(extract_username_from_email(""), "User");
    }

    #[test]
    fn display_name_falls_back() {
        assert_eq!(display_name(&record("Sunita Reddy", "sr", "s@x.com")), "Sunita Reddy");
        assert_eq!(display_name(&record("", "Sunny", "s@x.com")), "Sunny");
        assert_eq!(display_name(&record("", "", "sunita.reddy@x.com")), "Sunita Reddy");
    }

    #[test]
    fn initials() {
        assert_eq!(user_initials(&record("Dr. Rajesh Kumar", "", "")), "DR");
        assert_eq!(user_initials(&record("amit", "", "")), "AM");
        assert_eq!(user_initials(&record("", "", "@x.com")), "U");
    }

    #[test]
    fn known_and_unknown_logins() {
        let known = simulate_login("dr.rajesh@ayursutra.com", UserType::Doctor);
        assert_eq!(known.full_name, "Dr. Rajesh Kumar");
        assert_eq!(known.username, "Dr Rajesh");

        let unknown = simulate_login("meera.iyer@mail.com", UserType::Patient);
        assert_eq!(unknown.full_name, "Meera Iyer");
        assert_eq!(unknown.user_type, UserType::Patient);
    }
}
