//! Shared wiring for the `/jeeps` integration suites.
//!
//! Requests run through `actix_web::test` against an app assembled the same
//! way the server binary assembles it, with a fixed clock so payload
//! timestamps are predictable.

use std::sync::Arc;

use actix_web::{App, test, web};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use jeep_sales::Trace;
use jeep_sales::domain::ports::{JeepRepository, JeepRepositoryError};
use jeep_sales::domain::{Jeep, JeepModel, JeepSalesService, TRACE_ID_HEADER};
use jeep_sales::inbound::http::jeeps::fetch_jeeps;
use jeep_sales::inbound::http::state::HttpState;
use mockable::Clock;
use serde_json::Value;
use url::form_urlencoded;

pub const FIXTURE_TIMESTAMP: &str = "2026-01-05T09:15:00.000Z";

pub struct FixtureClock;

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, 9, 15, 0)
            .single()
            .expect("valid fixture timestamp")
    }
}

/// Repository whose every read fails with a query error.
pub struct FailingJeepRepository {
    pub message: String,
}

#[async_trait]
impl JeepRepository for FailingJeepRepository {
    async fn find_jeeps(
        &self,
        _model: JeepModel,
        _trim: &str,
    ) -> Result<Vec<Jeep>, JeepRepositoryError> {
        Err(JeepRepositoryError::query(self.message.clone()))
    }
}

/// What a `/jeeps` call returned.
pub struct JeepsResponse {
    pub status: u16,
    pub trace_id: Option<String>,
    pub raw: Vec<u8>,
    pub body: Value,
}

/// Form-encode a query parameter value.
pub fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

pub fn jeeps_uri(model: &str, trim: &str) -> String {
    format!("/jeeps?model={}&trim={}", encode(model), encode(trim))
}

/// Issue `GET uri` against an app backed by `repository`.
pub async fn get_jeeps(repository: Arc<dyn JeepRepository>, uri: &str) -> JeepsResponse {
    let service = JeepSalesService::new(repository);
    let state = HttpState::new(Arc::new(service), Arc::new(FixtureClock));
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .service(fetch_jeeps),
    )
    .await;

    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = res.status().as_u16();
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let raw = test::read_body(res).await.to_vec();
    let body = serde_json::from_slice(&raw).expect("JSON response body");
    JeepsResponse {
        status,
        trace_id,
        raw,
        body,
    }
}
