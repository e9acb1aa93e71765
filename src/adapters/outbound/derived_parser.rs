//! Derived Reference Parser
//!
//! Resolves references that point at a parent location, optionally at an
//! offset along the parent's line (`parent_id@offset`).

use crate::domain::entities::GeocodeReport;
use crate::domain::ports::{FormatParser, ParentLocationRepository};
use crate::domain::services::SpatialMath;
use crate::domain::value_objects::{DistanceUnit, UnitConverter};
use async_trait::async_trait;
use std::sync::Arc;

/// Parser for the `derived` format.
///
/// Offsets are read in `offset_unit` and converted into the parent's
/// coordinate space through the decimal-degree approximation.
pub struct DerivedParser {
    parents: Arc<dyn ParentLocationRepository>,
    offset_unit: DistanceUnit,
}

impl DerivedParser {
    pub fn new(parents: Arc<dyn ParentLocationRepository>, offset_unit: DistanceUnit) -> Self {
        Self {
            parents,
            offset_unit,
        }
    }
}

#[async_trait]
impl FormatParser for DerivedParser {
    async fn parse(&self, raw_reference: &str) -> anyhow::Result<GeocodeReport> {
        let raw = raw_reference.trim();
        let (parent_id, offset) = match raw.split_once('@') {
            Some((id, offset)) => (id.trim(), Some(offset.trim())),
            None => (raw, None),
        };

        if parent_id.is_empty() {
            return Ok(GeocodeReport::failure(
                "derived reference is missing a parent id",
            ));
        }

        let Some(parent) = self.parents.get(parent_id).await else {
            return Ok(GeocodeReport::failure(format!(
                "parent location '{}' not found",
                parent_id
            )));
        };

        let Some(offset_text) = offset else {
            return Ok(
                GeocodeReport::success(parent.formatted_reference, parent.coordinates)
                    .with_nodes(parent.from_node, parent.to_node),
            );
        };

        let offset = match offset_text.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => v,
            _ => {
                return Ok(GeocodeReport::failure(format!(
                    "invalid offset '{}': expected a non-negative number",
                    offset_text
                )))
            }
        };

        let offset_native =
            UnitConverter::convert(offset, self.offset_unit, DistanceUnit::DecimalDegree);
        let Some(point) = SpatialMath::interpolate_along_line(&parent.coordinates, offset_native)
        else {
            return Ok(GeocodeReport::failure(format!(
                "parent location '{}' has no coordinates",
                parent_id
            )));
        };

        let mut report = GeocodeReport::success(
            format!(
                "{} {} along {}",
                offset, self.offset_unit, parent.formatted_reference
            ),
            vec![point],
        )
        .with_nodes(parent.from_node, parent.to_node);

        let length = SpatialMath::line_length(&parent.coordinates);
        if offset_native > length {
            tracing::debug!("offset {} past end of parent {}", offset, parent_id);
            report.push_warning(format!(
                "offset {} {} exceeds the length of '{}'; clamped to its end",
                offset, self.offset_unit, parent_id
            ));
        }

        Ok(report)
    }
}
