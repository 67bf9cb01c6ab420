use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};
use crate::render::Renderer;

use super::{EngineSnapshot, TimelineEngine};

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned v1 contract payload.
    ///
    /// Both forms must describe a reachable engine state: focus inside the
    /// bounds and a tick index that points at it.
    pub fn from_json_compat_str(input: &str) -> TimelineResult<Self> {
        let snapshot = match serde_json::from_str::<EngineSnapshot>(input) {
            Ok(snapshot) => snapshot,
            Err(_) => parse_contract_v1(input)?,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }
}

fn parse_contract_v1(input: &str) -> TimelineResult<EngineSnapshot> {
    let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
        TimelineError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
    })?;
    if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
        return Err(TimelineError::InvalidData(format!(
            "unsupported snapshot schema version: {}",
            payload.schema_version
        )));
    }
    Ok(payload.snapshot)
}

impl<R: Renderer> TimelineEngine<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
