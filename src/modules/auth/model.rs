use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The closed set of portal roles.
///
/// Role checks never apply a hierarchy: a gate that admits tutors does
/// not implicitly admit admins. Every allow-list spells out each role.
/// Tokens carrying any other role string fail to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Tutor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Tutor => "tutor",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT claim set: subject id, portal role, and the issue/expiry pair.
///
/// Decoded fresh on every request and attached to it for the duration
/// of the handler; nothing is persisted server-side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub sub: String, // user_id
    pub role: Role,
    pub iat: usize,
    pub exp: usize,
}
