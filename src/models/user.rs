use serde::{Deserialize, Serialize};

/// Sector a scoped admin is responsible for
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Sector {
    Hardware,
    Software,
    Network,
    Security,
}

impl Sector {
    pub const ALL: [Sector; 4] = [
        Sector::Hardware,
        Sector::Software,
        Sector::Network,
        Sector::Security,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Sector::Hardware => "Hardware",
            Sector::Software => "Software",
            Sector::Network => "Network",
            Sector::Security => "Security",
        }
    }

    pub fn from_label(label: &str) -> Option<Sector> {
        match label {
            "Hardware" => Some(Sector::Hardware),
            "Software" => Some(Sector::Software),
            "Network" => Some(Sector::Network),
            "Security" => Some(Sector::Security),
            _ => None,
        }
    }
}

/// Closed role variant decoded from the backend's role tag.
///
/// Anything the parser does not recognize collapses to `Role::User`, so
/// every consumer can match exhaustively and an unexpected tag can never
/// grant more than the plain-user view.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    System,
    Sector(Sector),
    User,
}

impl Role {
    pub fn from_tag(tag: &str) -> Role {
        match tag {
            "admin_system" => Role::System,
            "admin_hardware" => Role::Sector(Sector::Hardware),
            "admin_software" => Role::Sector(Sector::Software),
            "admin_network" => Role::Sector(Sector::Network),
            "admin_security" => Role::Sector(Sector::Security),
            // Unknown tags fail closed to the least-privileged view
            _ => Role::User,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Role::System => "admin_system",
            Role::Sector(Sector::Hardware) => "admin_hardware",
            Role::Sector(Sector::Software) => "admin_software",
            Role::Sector(Sector::Network) => "admin_network",
            Role::Sector(Sector::Security) => "admin_security",
            Role::User => "user",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::System | Role::Sector(_))
    }

    pub fn is_sector_admin(&self) -> bool {
        matches!(self, Role::Sector(_))
    }

    /// Role tag stored for a registration form selection.
    ///
    /// "admin" + a known sector maps to the scoped admin tag; "admin" with
    /// no (or an unknown) sector is the system admin catch-all. Everything
    /// else registers as a plain user.
    pub fn registration_tag(role_choice: &str, sector_label: &str) -> &'static str {
        if role_choice != "admin" {
            return Role::User.as_tag();
        }
        match Sector::from_label(sector_label) {
            Some(sector) => Role::Sector(sector).as_tag(),
            None => Role::System.as_tag(),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl User {
    pub fn role(&self) -> Role {
        Role::from_tag(&self.role)
    }
}

/// Payload for POST /users/create
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub sector: String,
}

/// Payload for PUT /users/{id}; password empty means unchanged
#[derive(Clone, PartialEq, Serialize, Debug, Default)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub role: String,
    pub sector: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_tag_maps_to_exactly_one_variant() {
        assert_eq!(Role::from_tag("user"), Role::User);
        assert_eq!(Role::from_tag("admin_system"), Role::System);
        assert_eq!(Role::from_tag("admin_hardware"), Role::Sector(Sector::Hardware));
        assert_eq!(Role::from_tag("admin_software"), Role::Sector(Sector::Software));
        assert_eq!(Role::from_tag("admin_network"), Role::Sector(Sector::Network));
        assert_eq!(Role::from_tag("admin_security"), Role::Sector(Sector::Security));
    }

    #[test]
    fn unknown_tags_fail_closed_to_plain_user() {
        assert_eq!(Role::from_tag(""), Role::User);
        assert_eq!(Role::from_tag("root"), Role::User);
        assert_eq!(Role::from_tag("admin"), Role::User);
        assert_eq!(Role::from_tag("admin_datacenter"), Role::User);
        assert_eq!(Role::from_tag("ADMIN_SYSTEM"), Role::User);
    }

    #[test]
    fn parse_is_inverse_of_as_tag() {
        for role in [
            Role::System,
            Role::User,
            Role::Sector(Sector::Hardware),
            Role::Sector(Sector::Software),
            Role::Sector(Sector::Network),
            Role::Sector(Sector::Security),
        ] {
            assert_eq!(Role::from_tag(role.as_tag()), role);
        }
    }

    #[test]
    fn registration_maps_admin_plus_sector_to_scoped_tag() {
        assert_eq!(Role::registration_tag("admin", "Network"), "admin_network");
        assert_eq!(Role::registration_tag("admin", "Hardware"), "admin_hardware");
        assert_eq!(Role::registration_tag("admin", "Software"), "admin_software");
        assert_eq!(Role::registration_tag("admin", "Security"), "admin_security");
    }

    #[test]
    fn registration_admin_without_sector_is_system_admin() {
        assert_eq!(Role::registration_tag("admin", ""), "admin_system");
        assert_eq!(Role::registration_tag("admin", "Facilities"), "admin_system");
    }

    #[test]
    fn registration_non_admin_is_always_user() {
        assert_eq!(Role::registration_tag("user", "Network"), "user");
        assert_eq!(Role::registration_tag("user", ""), "user");
    }

    #[test]
    fn registration_tag_round_trips_through_role_parse() {
        // The stored tag must decode back to the view the form promised
        assert_eq!(
            Role::from_tag(Role::registration_tag("admin", "Network")),
            Role::Sector(Sector::Network)
        );
        assert_eq!(Role::from_tag(Role::registration_tag("admin", "")), Role::System);
        assert_eq!(Role::from_tag(Role::registration_tag("user", "")), Role::User);
    }
}
