use std::env;

/// Looks up the login name, trying `USER` first and then `USERNAME`.
pub fn get_user_name() -> Option<String> {
    user_name_from(|key| env::var(key).ok())
}

pub fn user_name_from<F: Fn(&str) -> Option<String>>(lookup: F) -> Option<String> {
    lookup("USER").or_else(|| lookup("USERNAME"))
}

pub fn greet(user: Option<&str>, guessed: Option<&str>) -> String {
    match user {
        Some(user) => format!("Hi, {}!", user),
        None => format!("Hi! Are you {}?", guessed.unwrap_or("None")),
    }
}
