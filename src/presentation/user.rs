use crate::model::responses::{RawVisibleGroup, RawVisibleUser, UserInfo};
use crate::presentation::serialization::value_to_label;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// ENT user.
///
/// Only `id` is guaranteed; the other fields are filled by whichever
/// endpoint produced the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct User {
    /// User id
    pub id: String,
    /// Display name
    pub name: Option<String>,
    /// Profile, e.g. `Student`, `Teacher`
    pub kind: Option<String>,
    /// School level
    pub level: Option<String>,
    /// Group ids
    pub groups: Vec<String>,
    /// Class ids
    pub classes: Vec<String>,
    /// School ids
    pub schools: Vec<String>,
}

impl User {
    /// User known only by its id
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// User known by id and display name
    pub fn named(id: impl Into<String>, name: Option<String>) -> Self {
        Self {
            id: id.into(),
            name,
            ..Self::default()
        }
    }
}

impl From<RawVisibleUser> for User {
    fn from(raw: RawVisibleUser) -> Self {
        Self {
            id: raw.id,
            name: raw.display_name,
            kind: raw.profile.as_ref().and_then(value_to_label),
            ..Self::default()
        }
    }
}

impl From<UserInfo> for User {
    fn from(info: UserInfo) -> Self {
        Self {
            id: info.user_id,
            name: info.username,
            kind: info.kind.as_ref().and_then(value_to_label),
            level: info.level,
            groups: info.groups_ids,
            classes: info.classes,
            schools: info.structures,
        }
    }
}

/// Directory group
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct Group {
    /// Group id
    pub id: String,
    /// Technical name
    pub name: Option<String>,
    /// Display name
    pub title: Option<String>,
    /// Member count
    pub length: Option<u64>,
    /// Profile of the members
    pub profile: Option<String>,
    /// Sort key
    pub sort_name: Option<String>,
}

impl From<RawVisibleGroup> for Group {
    fn from(raw: RawVisibleGroup) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            title: raw.group_display_name,
            length: raw.nb_users,
            profile: raw.profile.as_ref().and_then(value_to_label),
            sort_name: raw.sort_name.as_ref().and_then(value_to_label),
        }
    }
}
