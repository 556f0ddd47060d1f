//! Registered users: customers and cafe staff.
//!
//! Passwords are held and compared in plain text against the in-memory list.
//! This is a mock sign-in flow, not a security boundary.

/// Whether an account belongs to a customer or to cafe staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Staff,
}

/// A registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub matric_no: Option<String>,
    pub staff_no: Option<String>,
}

impl User {
    /// Login accepts email, matric number or staff number interchangeably.
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        self.email == identifier
            || self.matric_no.as_deref() == Some(identifier)
            || self.staff_no.as_deref() == Some(identifier)
    }
}

/// Payload from the registration form.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub matric_no: Option<String>,
    pub staff_no: Option<String>,
}

/// The two accounts every fresh boot starts with.
pub fn demo_users() -> Vec<UserCreate> {
    vec![
        UserCreate {
            name: "Ahmad Student".to_string(),
            email: "student@iium.edu.my".to_string(),
            password: "123".to_string(),
            confirm_password: "123".to_string(),
            role: Role::Customer,
            matric_no: Some("2012345".to_string()),
            staff_no: None,
        },
        UserCreate {
            name: "Cafe Staff".to_string(),
            email: "staff@iium.edu.my".to_string(),
            password: "123".to_string(),
            confirm_password: "123".to_string(),
            role: Role::Staff,
            matric_no: None,
            staff_no: Some("STF001".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_matches_email_matric_or_staff_no() {
        let users = demo_users();
        let student = User {
            id: "user_1".to_string(),
            name: users[0].name.clone(),
            email: users[0].email.clone(),
            password: users[0].password.clone(),
            role: Role::Customer,
            matric_no: users[0].matric_no.clone(),
            staff_no: None,
        };
        assert!(student.matches_identifier("student@iium.edu.my"));
        assert!(student.matches_identifier("2012345"));
        assert!(!student.matches_identifier("STF001"));
        assert!(!student.matches_identifier(""));
    }
}
