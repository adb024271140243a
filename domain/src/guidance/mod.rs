//! Professional guidance: who to call and what to ask them

use crate::core::language::{LocalizedList, LocalizedText};
use serde::{Deserialize, Serialize};

/// Display-only advice about a kind of professional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalGuidance {
    pub id: String,
    pub role: LocalizedText,
    pub description: LocalizedText,
    pub when_to_call: LocalizedText,
    pub what_to_ask: LocalizedList,
}
