pub mod mood_trend_chart;
pub mod stress_chart;

pub use mood_trend_chart::MoodTrendChart;
pub use stress_chart::StressChart;
