//! JSON endpoint for programmatic classification.

use axum::Json;
use segment_core::{classify, Relationship, Segment};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::form::FormError;

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyRequest {
    pub segment1: [f64; 4],
    pub segment2: [f64; 4],
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
    pub relationship: Relationship,
    pub summary: String,
}

impl ClassifyRequest {
    fn segments(&self) -> Result<(Segment, Segment), FormError> {
        let first = Segment::try_from_coords(self.segment1)
            .map_err(|source| FormError::Segment { segment: 1, source })?;
        let second = Segment::try_from_coords(self.segment2)
            .map_err(|source| FormError::Segment { segment: 2, source })?;
        Ok((first, second))
    }
}

pub async fn classify_handler(
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, FormError> {
    let (first, second) = request.segments().map_err(|e| {
        warn!("Rejected API input: {}", e);
        e
    })?;

    let relationship = classify(&first, &second);
    debug!(kind = relationship.kind(), "API classified {:?} / {:?}", request.segment1, request.segment2);

    Ok(Json(ClassifyResponse {
        relationship,
        summary: relationship.summary(),
    }))
}
