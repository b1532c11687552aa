use actix_web::{web, HttpResponse};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory train schedules, keyed by id
///
/// Records are kept as JSON so the server does not need to know more of
/// their shape than the `id` field.
#[derive(Default)]
pub struct ScheduleStore {
    records: RwLock<HashMap<i64, Value>>,
}

fn record_id(record: &Value) -> Option<i64> {
    record.get("id").and_then(Value::as_i64)
}

impl ScheduleStore {
    /// Build a store from a JSON array of records
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not an array or a record has no integer `id`.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let records: Vec<Value> = serde_json::from_str(json).map_err(|e| format!("Invalid schedules file: {e}"))?;
        let mut by_id = HashMap::new();
        for record in records {
            let id = record_id(&record).ok_or_else(|| format!("Record without an integer id: {record}"))?;
            by_id.insert(id, record);
        }
        Ok(Self {
            records: RwLock::new(by_id),
        })
    }

    /// Load the store from the file named by `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, String> {
        let json = std::fs::read_to_string(path).map_err(|e| format!("Failed to read {path}: {e}"))?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.records.read().map_or(0, |records| records.len())
    }

    fn get(&self, id: i64) -> Result<Option<Value>, String> {
        let records = self.records.read().map_err(|e| format!("Schedule store poisoned: {e}"))?;
        Ok(records.get(&id).cloned())
    }

    /// Replace an existing record; returns false if there was none
    fn replace(&self, id: i64, record: Value) -> Result<bool, String> {
        let mut records = self.records.write().map_err(|e| format!("Schedule store poisoned: {e}"))?;
        match records.get_mut(&id) {
            Some(existing) => {
                *existing = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

async fn get_schedule(store: web::Data<ScheduleStore>, id: web::Path<i64>) -> HttpResponse {
    let id = id.into_inner();
    match store.get(id) {
        Ok(Some(record)) => HttpResponse::Ok().json(record),
        Ok(None) => HttpResponse::NotFound().body(format!("Train schedule {id} not found")),
        Err(e) => {
            log::error!("{e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

async fn put_schedule(store: web::Data<ScheduleStore>, id: web::Path<i64>, body: web::Json<Value>) -> HttpResponse {
    let id = id.into_inner();
    let record = body.into_inner();

    if record_id(&record) != Some(id) {
        return HttpResponse::BadRequest().body(format!("Body id does not match train schedule {id}"));
    }

    match store.replace(id, record.clone()) {
        Ok(true) => {
            log::info!("Train schedule {id} updated");
            HttpResponse::Ok().json(record)
        }
        Ok(false) => HttpResponse::NotFound().body(format!("Train schedule {id} not found")),
        Err(e) => {
            log::error!("{e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Register the `/train_schedule/{id}/` resource
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/train_schedule/{id}/")
            .route(web::get().to(get_schedule))
            .route(web::put().to(put_schedule)),
    );
}
