//! Role and capability model for the admin panel.
//!
//! Roles are flat. Every operation requires exactly one capability, and a
//! role set grants it iff it contains `Admin` or the matching contact role.

use serde::{Deserialize, Serialize};

/// A role granted to a configured user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
  Admin,
  ContactRead,
  ContactWrite,
  ContactUpdate,
  ContactDelete,
}

/// What an operation needs from the actor's role set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
  Read,
  Write,
  Update,
  Delete,
}

impl Capability {
  /// The non-admin role that grants this capability.
  pub fn role(self) -> Role {
    match self {
      Capability::Read => Role::ContactRead,
      Capability::Write => Role::ContactWrite,
      Capability::Update => Role::ContactUpdate,
      Capability::Delete => Role::ContactDelete,
    }
  }
}

/// True iff `roles` satisfies `capability`. `Admin` satisfies every check.
pub fn granted(roles: &[Role], capability: Capability) -> bool {
  roles.contains(&Role::Admin) || roles.contains(&capability.role())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn admin_satisfies_every_capability() {
    let roles = [Role::Admin];
    for cap in [
      Capability::Read,
      Capability::Write,
      Capability::Update,
      Capability::Delete,
    ] {
      assert!(granted(&roles, cap));
    }
  }

  #[test]
  fn capabilities_are_independent() {
    let reader = [Role::ContactRead];
    assert!(granted(&reader, Capability::Read));
    assert!(!granted(&reader, Capability::Write));
    assert!(!granted(&reader, Capability::Update));
    assert!(!granted(&reader, Capability::Delete));

    let deleter = [Role::ContactDelete];
    assert!(granted(&deleter, Capability::Delete));
    assert!(!granted(&deleter, Capability::Read));
  }

  #[test]
  fn empty_role_set_grants_nothing() {
    assert!(!granted(&[], Capability::Read));
  }
}
