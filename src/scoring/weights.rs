//! @ai:module:intent Resolve preference sliders into per-metric weights
//! @ai:module:layer domain
//! @ai:module:public_api resolve_weights
//! @ai:module:stateless true

use crate::error::Result;
use crate::scoring::types::{MetricWeights, PreferenceWeights};

/// @ai:intent Turn sliders into weights, falling back to the default profile
/// @ai:pre defaults is already normalized
/// @ai:post result.sum() is 1, or 0 when every supplied slider is 0
/// @ai:effects pure
///
/// Sliders drive runtime (speed), memory (memory) and core_loc (ease). The
/// cpu and total_loc metrics are only weighted by the default profile.
pub fn resolve_weights(
    preferences: Option<&PreferenceWeights>,
    defaults: &MetricWeights,
) -> Result<MetricWeights> {
    let prefs = match preferences {
        Some(p) if !p.is_empty() => p,
        _ => return Ok(*defaults),
    };

    prefs.validate()?;

    let speed = prefs.speed.unwrap_or(0.0);
    let memory = prefs.memory.unwrap_or(0.0);
    let ease = prefs.ease.unwrap_or(0.0);

    let sum = speed + memory + ease;
    if sum <= 0.0 {
        return Ok(MetricWeights::zero());
    }

    Ok(MetricWeights {
        runtime: speed / sum,
        cpu: 0.0,
        memory: memory / sum,
        core_loc: ease / sum,
        total_loc: 0.0,
    })
}
