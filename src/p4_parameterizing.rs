// Pattern 4: Parameterized Tests
// Demonstrates table-driven tests: one test body, many (input, expected) rows.

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_UNAUTHORIZED: u16 = 401;

const ALLOWED_USERS: &[(&str, &str)] = &[("john", "supersecret")];

/// Returns the HTTP-like status for a login attempt against the allowlist.
pub fn log_in(username: &str, password: &str) -> u16 {
    if username.is_empty() || password.is_empty() {
        return STATUS_BAD_REQUEST;
    }

    let accepted = ALLOWED_USERS
        .iter()
        .any(|&(user, pass)| user == username && pass == password);

    if accepted {
        STATUS_OK
    } else {
        STATUS_UNAUTHORIZED
    }
}

#[cfg(test)]
mod table_tests {
    use super::*;

    #[test]
    fn test_login() {
        let cases = [
            ("john", "supersecret", 200),
            ("john", "wrongpassword", 401),
            ("wronguser", "supersecret", 401),
        ];

        for (username, password, expected_status_code) in cases {
            assert_eq!(
                log_in(username, password),
                expected_status_code,
                "log_in({:?}, {:?})",
                username,
                password
            );
        }
    }

    #[test]
    fn test_missing_fields() {
        let cases = [("", "supersecret"), ("john", ""), ("", "")];

        for (username, password) in cases {
            assert_eq!(log_in(username, password), STATUS_BAD_REQUEST);
        }
    }

    // A macro generates one named test per row, so a failing row is reported
    // on its own.
    macro_rules! login_cases {
        ($($name:ident: ($user:expr, $pass:expr) => $expected:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(log_in($user, $pass), $expected);
                }
            )*
        };
    }

    login_cases! {
        valid_credentials: ("john", "supersecret") => STATUS_OK,
        wrong_password: ("john", "wrongpassword") => STATUS_UNAUTHORIZED,
        wrong_user: ("wronguser", "supersecret") => STATUS_UNAUTHORIZED,
        case_sensitive_user: ("John", "supersecret") => STATUS_UNAUTHORIZED,
    }
}
