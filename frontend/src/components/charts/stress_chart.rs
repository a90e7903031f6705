use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StressChartProps {
    /// Week label and stress level on a 0-10 scale.
    pub data: Vec<(&'static str, f64)>,
}

pub enum Msg {}

/// Line chart of self-reported stress levels per week.
pub struct StressChart {
    canvas_ref: NodeRef,
}

impl Component for StressChart {
    type Message = Msg;
    type Properties = StressChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
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
        html! {
            <div class="chart-card">
                <div class="chart-card-header">
                    <div>
                        <h3 class="chart-card-title">{"Stress Level Trends"}</h3>
                        <p class="chart-card-subtitle">{"Changes in your stress levels"}</p>
                    </div>
                </div>

                {if ctx.props().data.is_empty() {
                    html! {
                        <div class="chart-empty">
                            <p>{"No stress data recorded yet"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="chart-content">
                            <canvas
                                ref={self.canvas_ref.clone()}
                                class="stress-chart-canvas"
                                width="500"
                                height="250"
                            ></canvas>
                        </div>
                    }
                }}
            </div>
        }
    }
}

impl StressChart {
    fn draw_chart(&self, data: &[(&'static str, f64)]) {
        if data.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        canvas.set_width(500);
        canvas.set_height(250);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let labels: Vec<&str> = data.iter().map(|(label, _)| *label).collect();

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(35)
            .build_cartesian_2d(0f64..(data.len() as f64 - 1.0).max(1.0), 0f64..10f64)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .y_desc("Stress Level")
            .x_label_formatter(&|x| {
                let idx = x.round() as usize;
                labels.get(idx).copied().unwrap_or("").to_string()
            })
            .x_labels(data.len())
            .y_labels(6)
            .label_style(("sans-serif", 12, &RGBColor(100, 116, 139)))
            .axis_style(&RGBColor(230, 230, 230))
            .light_line_style(&RGBColor(245, 245, 245))
            .draw()
            .is_err()
        {
            return;
        }

        let line_color = RGBColor(225, 29, 72);

        if chart
            .draw_series(LineSeries::new(
                data.iter()
                    .enumerate()
                    .map(|(i, (_, level))| (i as f64, *level)),
                line_color.stroke_width(2),
            ))
            .is_err()
        {
            return;
        }

        for (i, (_, level)) in data.iter().enumerate() {
            let point = Circle::new((i as f64, *level), 4, line_color.filled());
            if chart.draw_series(std::iter::once(point)).is_err() {
                continue;
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
        let chart = StressChart {
            canvas_ref: NodeRef::default(),
        };
        chart.draw_chart(&[]);
    }
}
