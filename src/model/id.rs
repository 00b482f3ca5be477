use rusqlite::types::FromSql;
use rusqlite::types::FromSqlError;
use rusqlite::types::FromSqlResult;
use rusqlite::types::ToSqlOutput;
use rusqlite::types::ValueRef;
use rusqlite::Result;
use rusqlite::ToSql;
use uuid::Uuid;

/// Row identifier, generated fresh per insert and never derived from the
/// quote content.
#[derive(Clone, Debug, PartialEq)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Id {
        Uuid::new_v4().into()
    }
}

impl ToSql for Id {
    fn to_sql(&self) -> Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned(self.to_string().into()))
    }
}

impl FromSql for Id {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(value
            .as_str()?
            .parse::<Id>()
            .map_err(|e| FromSqlError::Other(e.into()))?)
    }
}

impl std::str::FromStr for Id {
    type Err = <uuid::Uuid as std::str::FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse::<uuid::Uuid>()?))
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.to_hyphenated().fmt(f)
    }
}

impl From<uuid::Uuid> for Id {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod test {
    use super::Id;

    #[test]
    fn new_ids_are_distinct() {
        assert_ne!(Id::new(), Id::new());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        let id = Id::new();
        assert_eq!(id, id.to_string().parse::<Id>().unwrap());
    }
}
