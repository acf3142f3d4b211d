mod cost_projection;
mod industry_adjustment;
mod overall_score;

pub use cost_projection::{CostProjection, DEVICE_GROWTH_RATE, INFLATION_RATE};
pub use industry_adjustment::IndustryAdjustment;
pub use overall_score::{OverallScore, ScoreFactors};
