use super::error::GameError;
use super::face::FaceValue;
use serde::{Deserialize, Serialize};

/// Body of the outbound roll report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollReport {
    pub face_value: u8,
}

impl RollReport {
    pub fn new(face: FaceValue) -> Self {
        Self {
            face_value: face.get(),
        }
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string(self).map_err(|e| GameError::MalformedReply(e.to_string()))
    }
}

/// Expected reply from the reward endpoint. Extra fields are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct RollReply {
    pub balance: f64,
}

impl RollReply {
    pub fn from_json(body: &str) -> Result<Self, GameError> {
        serde_json::from_str(body).map_err(|e| GameError::MalformedReply(e.to_string()))
    }
}
