use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::MoodLevel;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::mock_data::DailyMoodCounts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Week,
    Month,
    Semester,
}

impl TimeRange {
    fn label(&self) -> &'static str {
        match self {
            TimeRange::Week => "Week",
            TimeRange::Month => "Month",
            TimeRange::Semester => "Semester",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MoodTrendChartProps {
    pub data: Vec<DailyMoodCounts>,
}

pub enum Msg {
    SetTimeRange(TimeRange),
}

/// Stacked bar chart of mood check-ins per day, one color band per mood
/// level, rendered onto a canvas with plotters.
pub struct MoodTrendChart {
    canvas_ref: NodeRef,
    selected_range: TimeRange,
}

impl Component for MoodTrendChart {
    type Message = Msg;
    type Properties = MoodTrendChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            selected_range: TimeRange::Week,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTimeRange(range) => {
                self.selected_range = range;
                self.draw_chart(&ctx.props().data);
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().data != old_props.data {
            self.draw_chart(&ctx.props().data);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().data.is_empty() {
            self.draw_chart(&ctx.props().data);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="chart-card">
                <div class="chart-card-header">
                    <div>
                        <h3 class="chart-card-title">{"Mood Trends"}</h3>
                        <p class="chart-card-subtitle">{"Your mood patterns over time"}</p>
                    </div>
                    <div class="chart-range-selector">
                        {for [TimeRange::Week, TimeRange::Month, TimeRange::Semester]
                            .into_iter()
                            .map(|range| {
                                let is_active = range == self.selected_range;
                                let onclick = link.callback(move |_| Msg::SetTimeRange(range));
                                html! {
                                    <button
                                        class={classes!(
                                            "range-button",
                                            is_active.then_some("range-button-active"),
                                        )}
                                        {onclick}
                                    >
                                        {range.label()}
                                    </button>
                                }
                            })}
                    </div>
                </div>

                {if ctx.props().data.is_empty() {
                    html! {
                        <div class="chart-empty">
                            <p>{"No mood data recorded yet"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="chart-content">
                            <canvas
                                ref={self.canvas_ref.clone()}
                                class="mood-trend-canvas"
                                width="700"
                                height="300"
                            ></canvas>
                        </div>
                    }
                }}
            </div>
        }
    }
}

impl MoodTrendChart {
    fn draw_chart(&self, data: &[DailyMoodCounts]) {
        if data.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        canvas.set_width(700);
        canvas.set_height(300);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let max_total = data
            .iter()
            .map(|day| day.counts.iter().sum::<u32>())
            .max()
            .unwrap_or(0)
            .max(1);

        let day_labels: Vec<&str> = data.iter().map(|day| day.day).collect();

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(40)
            .build_cartesian_2d(0f64..data.len() as f64, 0f64..(max_total as f64 + 0.5))
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("Check-ins")
            .x_label_formatter(&|x| {
                let idx = x.floor() as usize;
                day_labels.get(idx).copied().unwrap_or("").to_string()
            })
            .x_labels(data.len())
            .y_labels(max_total as usize + 1)
            .label_style(("sans-serif", 12, &RGBColor(100, 116, 139)))
            .axis_style(&RGBColor(230, 230, 230))
            .light_line_style(&RGBColor(245, 245, 245))
            .draw()
            .is_err()
        {
            return;
        }

        // One stacked rectangle per level, bottom-up in MoodLevel::all order.
        for (day_index, day) in data.iter().enumerate() {
            let mut base = 0u32;
            for (level, &count) in MoodLevel::all().iter().zip(day.counts.iter()) {
                if count == 0 {
                    continue;
                }
                let (r, g, b) = level.rgb();
                let x0 = day_index as f64 + 0.2;
                let x1 = day_index as f64 + 0.8;
                let bar = Rectangle::new(
                    [(x0, base as f64), (x1, (base + count) as f64)],
                    RGBColor(r, g, b).filled(),
                );
                if chart.draw_series(std::iter::once(bar)).is_err() {
                    return;
                }
                base += count;
            }
        }

        let _ = root.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_handles_empty_data() {
        let chart = MoodTrendChart {
            canvas_ref: NodeRef::default(),
            selected_range: TimeRange::Week,
        };
        chart.draw_chart(&[]);
    }

    #[test]
    fn test_default_range_is_week() {
        let chart = MoodTrendChart {
            canvas_ref: NodeRef::default(),
            selected_range: TimeRange::Week,
        };
        assert_eq!(chart.selected_range, TimeRange::Week);
    }
}
