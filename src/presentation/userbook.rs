use crate::model::responses::RawPerson;
use crate::presentation::user::User;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

const PRIVATE_VISIBILITY: &str = "PRIVE";

/// Userbook hobby
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct Hobby {
    /// False for hobbies marked private
    pub visible: bool,
    /// Category, e.g. `sport`
    pub category: Option<String>,
    /// Free text
    pub content: Option<String>,
}

/// Contact details
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct Contact {
    /// Phone
    pub tel: Option<String>,
    /// Mail address
    pub email: Option<String>,
    /// Mobile phone
    pub mobile: Option<String>,
}

/// Social profile of a user
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct UserbookData {
    /// Mood keyword
    pub mood: Option<String>,
    /// Health notes
    pub health: Option<String>,
    /// Motto
    pub motto: Option<String>,
    /// Postal address
    pub address: Option<String>,
    /// Birth date as sent
    pub birthdate: Option<String>,
    /// Contact details
    pub contact: Contact,
    /// Hobbies
    pub hobbies: Vec<Hobby>,
    /// Related users (parents, children)
    pub relations: Vec<User>,
    /// Picture URL
    pub picture_url: Option<String>,
}

impl UserbookData {
    /// Builds a profile from the rows of `userbook/api/person`.
    ///
    /// The first row carries the profile; relations come from every row
    /// when the first one has a related id.
    pub fn from_rows(rows: Vec<RawPerson>) -> Self {
        let has_relations = rows.first().is_some_and(|row| row.related_id.is_some());
        let relations = if has_relations {
            rows.iter()
                .filter_map(|row| {
                    row.related_id
                        .clone()
                        .map(|id| User::named(id, row.related_name.clone()))
                })
                .collect()
        } else {
            Vec::new()
        };

        let Some(person) = rows.into_iter().next() else {
            return Self::default();
        };

        Self {
            mood: person.mood,
            health: person.health,
            motto: person.motto,
            address: person.address,
            birthdate: person.birthdate,
            contact: Contact {
                tel: person.tel,
                email: person.email,
                mobile: person.mobile,
            },
            hobbies: person
                .hobbies
                .into_iter()
                .map(|hobby| Hobby {
                    visible: hobby.visibility.as_deref() != Some(PRIVATE_VISIBILITY),
                    category: hobby.category,
                    content: hobby.values,
                })
                .collect(),
            relations,
            picture_url: person.photo,
        }
    }
}
