//! Collection handles: one table of JSON documents per root entity.

use std::marker::PhantomData;

use rusqlite::types::Value as SqlValue;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

use super::{Database, DbError, DbResult};
use crate::models::{AuthenticationDevice, Authorization, PersonUnderCare, PhysicalPerson, Professional};
use crate::serialization::{Document, MosSerializer, PERSISTED_ID};

/// An entity stored in its own collection.
pub trait RootEntity: MosSerializer {
    /// Table name of the collection.
    const COLLECTION: &'static str;
}

impl RootEntity for PhysicalPerson {
    const COLLECTION: &'static str = "physical_persons";
}

impl RootEntity for Professional {
    const COLLECTION: &'static str = "professionals";
}

impl RootEntity for PersonUnderCare {
    const COLLECTION: &'static str = "persons_under_care";
}

impl RootEntity for Authorization {
    const COLLECTION: &'static str = "authorizations";
}

impl RootEntity for AuthenticationDevice {
    const COLLECTION: &'static str = "authentication_devices";
}

/// Typed handle on one collection.
///
/// Documents go in and come out as stored: no sanitization happens here.
pub struct Collection<'db, E> {
    conn: &'db Connection,
    _entity: PhantomData<E>,
}

impl Database {
    pub fn collection<E: RootEntity>(&self) -> Collection<'_, E> {
        Collection {
            conn: &self.conn,
            _entity: PhantomData,
        }
    }

    pub fn physical_persons(&self) -> Collection<'_, PhysicalPerson> {
        self.collection()
    }

    pub fn professionals(&self) -> Collection<'_, Professional> {
        self.collection()
    }

    pub fn persons_under_care(&self) -> Collection<'_, PersonUnderCare> {
        self.collection()
    }

    pub fn authorizations(&self) -> Collection<'_, Authorization> {
        self.collection()
    }

    pub fn authentication_devices(&self) -> Collection<'_, AuthenticationDevice> {
        self.collection()
    }
}

impl<'db, E: RootEntity> Collection<'db, E> {
    pub fn name(&self) -> &'static str {
        E::COLLECTION
    }

    /// Insert a document and return its identity.
    ///
    /// A string `_id` already present on the document is kept; otherwise a
    /// UUID v4 is generated.
    pub fn insert_one(&self, document: &Document) -> DbResult<String> {
        let mut body = document.clone();
        let id = match body.remove(PERSISTED_ID) {
            None | Some(Value::Null) => uuid::Uuid::new_v4().to_string(),
            Some(Value::String(id)) => id,
            Some(other) => {
                return Err(DbError::Constraint(format!(
                    "{PERSISTED_ID} must be a string, found {other}"
                )))
            }
        };

        let sql = format!("INSERT INTO {} (id, body) VALUES (?1, ?2)", E::COLLECTION);
        self.conn
            .execute(&sql, params![id, serde_json::to_string(&body)?])
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    DbError::Constraint(format!("duplicate id {id} in {}", E::COLLECTION))
                }
                other => DbError::Sqlite(other),
            })?;

        tracing::debug!(collection = E::COLLECTION, %id, "Inserted document");
        Ok(id)
    }

    /// Get a document by identity, with `_id` attached.
    pub fn find_by_id(&self, id: &str) -> DbResult<Option<Document>> {
        let sql = format!("SELECT id, body FROM {} WHERE id = ?", E::COLLECTION);
        let row = self
            .conn
            .query_row(&sql, [id], |row| {
                Ok(DocumentRow {
                    id: row.get(0)?,
                    body: row.get(1)?,
                })
            })
            .optional()?;

        row.map(Document::try_from).transpose()
    }

    /// Get a document by identity, failing when absent.
    pub fn get(&self, id: &str) -> DbResult<Document> {
        self.find_by_id(id)?
            .ok_or_else(|| DbError::NotFound(format!("{} {}", E::COLLECTION, id)))
    }

    /// List every document, oldest first.
    pub fn find_all(&self) -> DbResult<Vec<Document>> {
        let sql = format!(
            "SELECT id, body FROM {} ORDER BY created_at, rowid",
            E::COLLECTION
        );
        self.query_documents(&sql, params![])
    }

    /// List documents whose value at `path` (dot separated) equals `value`.
    pub fn find_by_path(&self, path: &str, value: &Value) -> DbResult<Vec<Document>> {
        let sql = format!(
            "SELECT id, body FROM {} WHERE json_extract(body, ?1) = ?2 ORDER BY created_at, rowid",
            E::COLLECTION
        );
        let json_path = json_path(path)?;
        let value = scalar(value)?;
        self.query_documents(&sql, params![json_path, value])
    }

    /// Replace a whole document. Returns false when no document has this id.
    pub fn replace_one(&self, id: &str, document: &Document) -> DbResult<bool> {
        let mut body = document.clone();
        body.remove(PERSISTED_ID);

        let sql = format!(
            "UPDATE {} SET body = ?2, updated_at = datetime('now') WHERE id = ?1",
            E::COLLECTION
        );
        let rows_affected = self
            .conn
            .execute(&sql, params![id, serde_json::to_string(&body)?])?;

        tracing::debug!(collection = E::COLLECTION, %id, replaced = rows_affected > 0, "Replaced document");
        Ok(rows_affected > 0)
    }

    pub fn delete_one(&self, id: &str) -> DbResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?", E::COLLECTION);
        let rows_affected = self.conn.execute(&sql, [id])?;
        tracing::debug!(collection = E::COLLECTION, %id, deleted = rows_affected > 0, "Deleted document");
        Ok(rows_affected > 0)
    }

    /// Delete documents whose value at `path` equals `value`.
    pub fn delete_by_path(&self, path: &str, value: &Value) -> DbResult<usize> {
        let sql = format!(
            "DELETE FROM {} WHERE json_extract(body, ?1) = ?2",
            E::COLLECTION
        );
        let json_path = json_path(path)?;
        let value = scalar(value)?;
        let rows_affected = self.conn.execute(&sql, params![json_path, value])?;
        tracing::debug!(collection = E::COLLECTION, path, deleted = rows_affected, "Deleted documents");
        Ok(rows_affected)
    }

    pub fn count(&self) -> DbResult<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", E::COLLECTION);
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn query_documents<P: rusqlite::Params>(&self, sql: &str, params: P) -> DbResult<Vec<Document>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| {
            Ok(DocumentRow {
                id: row.get(0)?,
                body: row.get(1)?,
            })
        })?;

        let mut documents = Vec::new();
        for row in rows {
            documents.push(Document::try_from(row?)?);
        }
        Ok(documents)
    }
}

/// Intermediate row struct for document mapping.
struct DocumentRow {
    id: String,
    body: String,
}

impl TryFrom<DocumentRow> for Document {
    type Error = DbError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        let mut document = match serde_json::from_str::<Value>(&row.body)? {
            Value::Object(document) => document,
            _ => {
                return Err(DbError::Constraint(format!(
                    "document {} is not a JSON object",
                    row.id
                )))
            }
        };
        document.insert(PERSISTED_ID.to_string(), Value::String(row.id));
        Ok(document)
    }
}

/// Convert `a.b.0.c` into the SQLite JSON path `$.a.b[0].c`.
///
/// An all-digit segment indexes an array. Wrap it in double quotes
/// (`codes."0"`) to name an object key instead.
fn json_path(path: &str) -> DbResult<String> {
    let invalid = || DbError::Constraint(format!("invalid document path '{path}'"));
    let mut json_path = String::from("$");
    for segment in path.split('.') {
        let (name, quoted) = match segment
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
        {
            Some(name) => (name, true),
            None => (segment, false),
        };
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid());
        }
        if quoted {
            json_path.push_str(&format!(".\"{name}\""));
        } else if name.chars().all(|c| c.is_ascii_digit()) {
            json_path.push_str(&format!("[{name}]"));
        } else {
            json_path.push('.');
            json_path.push_str(name);
        }
    }
    Ok(json_path)
}

/// SQL value comparable with the result of `json_extract`.
fn scalar(value: &Value) -> DbResult<SqlValue> {
    match value {
        Value::String(s) => Ok(SqlValue::Text(s.clone())),
        Value::Bool(b) => Ok(SqlValue::Integer(i64::from(*b))),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(SqlValue::Integer(i))
            } else if let Some(f) = n.as_f64().filter(|_| n.is_f64()) {
                Ok(SqlValue::Real(f))
            } else {
                Err(DbError::Constraint(format!(
                    "number {n} is outside the range SQLite can compare"
                )))
            }
        }
        other => Err(DbError::Constraint(format!(
            "document paths compare against scalars only, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::document_from_value;
    use serde_json::json;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    fn doc(value: Value) -> Document {
        document_from_value(value).unwrap()
    }

    #[test]
    fn test_insert_generates_identity() {
        let db = setup_db();
        let persons = db.physical_persons();

        let id = persons
            .insert_one(&doc(json!({"birthFamilyName": "Dupont", "givenNames": ["Jean"]})))
            .unwrap();
        assert!(uuid::Uuid::parse_str(&id).is_ok());

        let found = persons.find_by_id(&id).unwrap().unwrap();
        assert_eq!(found.get("_id"), Some(&json!(id)));
        assert_eq!(found.get("birthFamilyName"), Some(&json!("Dupont")));
    }

    #[test]
    fn test_insert_keeps_given_identity() {
        let db = setup_db();
        let id = db
            .professionals()
            .insert_one(&doc(json!({"_id": "prof-1", "practices": []})))
            .unwrap();
        assert_eq!(id, "prof-1");

        let err = db
            .professionals()
            .insert_one(&doc(json!({"_id": "prof-1"})))
            .unwrap_err();
        assert!(matches!(err, DbError::Constraint(_)));
    }

    #[test]
    fn test_insert_rejects_non_string_identity() {
        let db = setup_db();
        let err = db.authorizations().insert_one(&doc(json!({"_id": 7}))).unwrap_err();
        assert!(matches!(err, DbError::Constraint(_)));
    }

    #[test]
    fn test_find_missing() {
        let db = setup_db();
        assert!(db.authorizations().find_by_id("nope").unwrap().is_none());
        assert!(matches!(
            db.authorizations().get("nope"),
            Err(DbError::NotFound(_))
        ));
    }

    #[test]
    fn test_replace_one() {
        let db = setup_db();
        let patients = db.persons_under_care();
        let id = patients
            .insert_one(&doc(json!({"communicationPreference": {"value": "MAIL"}})))
            .unwrap();

        let replaced = patients
            .replace_one(&id, &doc(json!({"telecoms": []})))
            .unwrap();
        assert!(replaced);

        let found = patients.get(&id).unwrap();
        assert!(!found.contains_key("communicationPreference"));
        assert_eq!(found.get("telecoms"), Some(&json!([])));

        assert!(!patients.replace_one("missing", &Document::new()).unwrap());
    }

    #[test]
    fn test_find_and_delete_by_path() {
        let db = setup_db();
        let devices = db.authentication_devices();
        let tagged = doc(json!({"cards": [], "provenance": {"version": {"value": "sample-data"}}}));
        devices.insert_one(&tagged).unwrap();
        devices.insert_one(&tagged).unwrap();
        devices.insert_one(&doc(json!({"cards": []}))).unwrap();

        let found = devices
            .find_by_path("provenance.version.value", &json!("sample-data"))
            .unwrap();
        assert_eq!(found.len(), 2);

        let deleted = devices
            .delete_by_path("provenance.version.value", &json!("sample-data"))
            .unwrap();
        assert_eq!(deleted, 2);
        assert_eq!(devices.count().unwrap(), 1);
    }

    #[test]
    fn test_path_on_bool_and_number() {
        let db = setup_db();
        let authorizations = db.authorizations();
        authorizations
            .insert_one(&doc(json!({"flag": {"value": true}, "n": {"value": 12}})))
            .unwrap();

        assert_eq!(authorizations.find_by_path("flag.value", &json!(true)).unwrap().len(), 1);
        assert_eq!(authorizations.find_by_path("n.value", &json!(12)).unwrap().len(), 1);
        assert_eq!(authorizations.find_by_path("n.value", &json!(13)).unwrap().len(), 0);
    }

    #[test]
    fn test_invalid_path_rejected() {
        let db = setup_db();
        let persons = db.physical_persons();
        assert!(matches!(
            persons.find_by_path("a..b", &json!("x")),
            Err(DbError::Constraint(_))
        ));
        assert!(matches!(
            persons.find_by_path("a') OR 1=1 --", &json!("x")),
            Err(DbError::Constraint(_))
        ));
        assert!(matches!(
            persons.find_by_path("a", &json!({"b": 1})),
            Err(DbError::Constraint(_))
        ));
    }

    #[test]
    fn test_path_with_array_index() {
        assert_eq!(json_path("cards.0.cardNumber").unwrap(), "$.cards[0].cardNumber");

        let db = setup_db();
        let devices = db.authentication_devices();
        devices
            .insert_one(&doc(json!({"cards": [{"cardNumber": {"value": "99887766"}}]})))
            .unwrap();
        let found = devices
            .find_by_path("cards.0.cardNumber.value", &json!("99887766"))
            .unwrap();
        assert_eq!(found.len(), 1);
        assert!(devices
            .find_by_path("cards.1.cardNumber.value", &json!("99887766"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_quoted_digit_segment_names_object_key() {
        assert_eq!(json_path(r#"codes."0""#).unwrap(), r#"$.codes."0""#);
        assert!(matches!(json_path(r#"codes."""#), Err(DbError::Constraint(_))));
        assert!(matches!(json_path(r#"codes."0"#), Err(DbError::Constraint(_))));

        let db = setup_db();
        let persons = db.physical_persons();
        persons.insert_one(&doc(json!({"codes": {"0": "x"}}))).unwrap();

        assert!(persons.find_by_path("codes.0", &json!("x")).unwrap().is_empty());
        assert_eq!(
            persons
                .find_by_path(r#"codes."0""#, &json!("x"))
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn test_out_of_range_integer_rejected() {
        let db = setup_db();
        let persons = db.physical_persons();
        assert!(matches!(
            persons.find_by_path("count", &json!(u64::MAX)),
            Err(DbError::Constraint(_))
        ));
        assert!(matches!(
            persons.delete_by_path("count", &json!(u64::MAX)),
            Err(DbError::Constraint(_))
        ));

        persons.insert_one(&doc(json!({"count": 2.5}))).unwrap();
        assert_eq!(persons.find_by_path("count", &json!(2.5)).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_one_and_count() {
        let db = setup_db();
        let persons = db.physical_persons();
        let id = persons.insert_one(&Document::new()).unwrap();
        assert_eq!(persons.count().unwrap(), 1);
        assert!(persons.delete_one(&id).unwrap());
        assert!(!persons.delete_one(&id).unwrap());
        assert_eq!(persons.count().unwrap(), 0);
    }

    #[test]
    fn test_find_all_in_insertion_order() {
        let db = setup_db();
        let persons = db.physical_persons();
        let first = persons.insert_one(&doc(json!({"n": 1}))).unwrap();
        let second = persons.insert_one(&doc(json!({"n": 2}))).unwrap();

        let ids: Vec<Value> = persons
            .find_all()
            .unwrap()
            .into_iter()
            .filter_map(|d| d.get("_id").cloned())
            .collect();
        assert_eq!(ids, vec![json!(first), json!(second)]);
        assert_eq!(persons.name(), "physical_persons");
    }
}
