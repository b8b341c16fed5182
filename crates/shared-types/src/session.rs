use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the auth provider.
///
/// Every field is optional: the provider may hand out a partially loaded
/// profile, and consumers render whatever is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SessionUser {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
        }
    }

    /// First and last name joined by a single space.
    ///
    /// Missing or blank parts are skipped, so a user with only a first name
    /// yields just that name with no trailing space. Other parts are kept
    /// exactly as given.
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The email address, or an empty string when unknown.
    pub fn email_or_blank(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}

/// Display name for an optional user; blank when nobody is signed in.
pub fn display_name_of(user: Option<&SessionUser>) -> String {
    user.map(SessionUser::display_name).unwrap_or_default()
}

/// Email for an optional user; blank when nobody is signed in.
pub fn email_of(user: Option<&SessionUser>) -> String {
    user.map(|u| u.email_or_blank().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_with_single_space() {
        let user = SessionUser::new("Ada", "Lovelace", "ada@example.com");
        assert_eq!(user.display_name(), "Ada Lovelace");
        assert_eq!(user.email_or_blank(), "ada@example.com");
    }

    #[test]
    fn first_name_only_has_no_trailing_space() {
        let user = SessionUser {
            first_name: Some("Grace".into()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "Grace");
        assert_eq!(user.email_or_blank(), "");
    }

    #[test]
    fn last_name_only_has_no_leading_space() {
        let user = SessionUser {
            last_name: Some("Hopper".into()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "Hopper");
    }

    #[test]
    fn blank_parts_collapse() {
        let user = SessionUser {
            first_name: Some("  ".into()),
            last_name: Some("Turing".into()),
            email: None,
        };
        assert_eq!(user.display_name(), "Turing");
    }

    #[test]
    fn non_blank_parts_are_kept_as_given() {
        let user = SessionUser {
            first_name: Some(" Ada".into()),
            last_name: Some("Lovelace ".into()),
            email: None,
        };
        assert_eq!(user.display_name(), " Ada Lovelace ");
    }

    #[test]
    fn absent_user_is_blank() {
        assert_eq!(display_name_of(None), "");
        assert_eq!(email_of(None), "");
    }

    #[test]
    fn deserializes_camel_case_payload_with_missing_fields() {
        let user: SessionUser = serde_json::from_str(r#"{"firstName":"Grace"}"#).unwrap();
        assert_eq!(user.first_name.as_deref(), Some("Grace"));
        assert_eq!(user.last_name, None);
        assert_eq!(user.email, None);
    }

    #[test]
    fn null_payload_is_no_user() {
        let user: Option<SessionUser> = serde_json::from_str("null").unwrap();
        assert_eq!(display_name_of(user.as_ref()), "");
    }
}
