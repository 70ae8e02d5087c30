//! HTTP client for the lesson-plan backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

use super::Oracle;
use crate::curriculum::Curriculum;
use crate::duration::DurationConstraint;
use crate::error::OracleError;
use crate::schedule::{default_strategy, ScheduleEntry, StudyPlan};

const SMART_DURATION_PATH: &str = "ai/smart-duration";
const STUDY_PLAN_PATH: &str = "ai/study-plan";
const GENERATE_PLAN_PATH: &str = "generate-plan";

/// Oracle backed by the JSON API under `base_url`.
pub struct HttpOracle {
    client: Client,
    base_url: Url,
}

impl HttpOracle {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, OracleError> {
        // Url::join drops the last path segment unless it ends in '/'.
        let mut base = base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, OracleError> {
        Ok(self.base_url.join(path)?)
    }

    /// POST `body` and return the decoded JSON payload.
    ///
    /// Non-2xx statuses and payloads carrying an `error` field are errors.
    async fn post(&self, path: &str, body: Value) -> Result<Value, OracleError> {
        let url = self.endpoint(path)?;
        debug!(%url, "oracle request");

        let resp = self.client.post(url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(OracleError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = resp
            .json()
            .await
            .map_err(|e| OracleError::Malformed(e.to_string()))?;
        if let Some(message) = payload.get("error").and_then(remote_error) {
            return Err(OracleError::Remote(message));
        }
        Ok(payload)
    }
}

/// Message for an `error` field, if it signals a failure.
///
/// `null`, `false`, `0` and `""` are how the backend says "no error".
fn remote_error(err: &Value) -> Option<String> {
    match err {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

fn field<T: DeserializeOwned>(payload: &mut Value, key: &str) -> Result<T, OracleError> {
    let value = payload
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| OracleError::Malformed(format!("missing `{key}`")))?;
    serde_json::from_value(value).map_err(|e| OracleError::Malformed(format!("`{key}`: {e}")))
}

/// The backend has answered with the schedule both bare and wrapped
/// together with its strategy and tips.
#[derive(Deserialize)]
#[serde(untagged)]
enum SchedulePayload {
    Bare(Vec<ScheduleEntry>),
    Wrapped(ScheduleBody),
}

#[derive(Deserialize)]
struct ScheduleBody {
    #[serde(default)]
    study_plan: Vec<ScheduleEntry>,
    learning_strategy: Option<String>,
    success_tips: Option<Vec<String>>,
}

#[async_trait]
impl Oracle for HttpOracle {
    fn name(&self) -> &str {
        "http"
    }

    async fn smart_duration(&self, goal: &str) -> Result<DurationConstraint, OracleError> {
        let mut payload = self
            .post(SMART_DURATION_PATH, json!({ "learning_goal": goal }))
            .await?;
        field(&mut payload, "duration_constraint")
    }

    async fn study_plan(
        &self,
        goal: &str,
        constraint: &DurationConstraint,
    ) -> Result<StudyPlan, OracleError> {
        let mut payload = self
            .post(
                STUDY_PLAN_PATH,
                json!({ "learning_goal": goal, "duration_constraint": constraint }),
            )
            .await?;

        let body = match field::<SchedulePayload>(&mut payload, "study_plan")? {
            SchedulePayload::Wrapped(body) => body,
            SchedulePayload::Bare(study_plan) => ScheduleBody {
                study_plan,
                learning_strategy: field(&mut payload, "learning_strategy").ok(),
                success_tips: field(&mut payload, "success_tips").ok(),
            },
        };

        let fallback = StudyPlan::basic(constraint);
        Ok(StudyPlan {
            study_plan: body.study_plan,
            learning_strategy: body
                .learning_strategy
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| default_strategy(constraint).to_string()),
            success_tips: body
                .success_tips
                .filter(|t| !t.is_empty())
                .unwrap_or(fallback.success_tips),
            ai_optimized: true,
        })
    }

    async fn generate_curriculum(
        &self,
        goal: &str,
        constraint: &DurationConstraint,
    ) -> Result<Curriculum, OracleError> {
        let payload = self
            .post(
                GENERATE_PLAN_PATH,
                json!({ "goal": goal, "duration_constraint": constraint }),
            )
            .await?;
        let curriculum: Curriculum =
            serde_json::from_value(payload).map_err(|e| OracleError::Malformed(e.to_string()))?;
        if curriculum.comprehensive_lesson_plan.is_empty() {
            return Err(OracleError::Malformed("curriculum has no units".into()));
        }
        Ok(curriculum)
    }
}
