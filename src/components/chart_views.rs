//! SVG rendering of the charts held in [`ChartSlots`](crate::charts::ChartSlots).

use yew::prelude::*;

use crate::charts::{LineChart, PieChart, SliceShape, LINE_FILL, LINE_STROKE, PAD_LEFT};

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub chart: Option<PieChart>,
}

#[function_component(CategoryChart)]
pub fn category_chart(props: &PieChartProps) -> Html {
    let Some(chart) = &props.chart else {
        return html! { <p class="text-sm text-muted-foreground">{"No expenses to chart yet."}</p> };
    };
    let size = chart.size;
    let center = size / 2.0;
    let radius = size / 2.0 - 1.0;

    html! {
        <div class="flex items-center gap-6">
            <svg id="categoryChart" width={size.to_string()} height={size.to_string()} viewBox={format!("0 0 {} {}", size, size)}>
                { for chart.slices.iter().map(|slice| match &slice.shape {
                    SliceShape::Arc(path) => html! {
                        <path d={path.clone()} fill={slice.color.clone()} stroke="#fff" stroke-width="1">
                            <title>{ slice.title.clone() }</title>
                        </path>
                    },
                    SliceShape::Full => html! {
                        <circle cx={center.to_string()} cy={center.to_string()} r={radius.to_string()} fill={slice.color.clone()} stroke="#fff" stroke-width="1">
                            <title>{ slice.title.clone() }</title>
                        </circle>
                    },
                    SliceShape::Empty => html! {},
                }) }
            </svg>
            <ul class="space-y-2 text-xs">
                { for chart.slices.iter().map(|slice| html! {
                    <li class="flex items-center gap-2" title={slice.title.clone()}>
                        <span class="inline-block w-3 h-3 rounded-full" style={format!("background-color: {}", slice.color)}></span>
                        <span class="text-foreground">{ slice.legend.clone() }</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub chart: Option<LineChart>,
}

#[function_component(MonthlyChart)]
pub fn monthly_chart(props: &LineChartProps) -> Html {
    let Some(chart) = &props.chart else {
        return html! { <p class="text-sm text-muted-foreground">{"No monthly data yet."}</p> };
    };
    let baseline = chart.height - 8.0;

    html! {
        <svg id="monthlyChart" class="w-full" viewBox={format!("0 0 {} {}", chart.width, chart.height)} preserveAspectRatio="none">
            { for chart.ticks.iter().map(|tick| html! {
                <g>
                    <line x1={PAD_LEFT.to_string()} x2={chart.width.to_string()} y1={tick.y.to_string()} y2={tick.y.to_string()} stroke="rgba(0, 0, 0, 0.1)" />
                    <text x={tick.label_x.to_string()} y={(tick.y + 4.0).to_string()} text-anchor="end" font-size="11" fill="currentColor">{ tick.label.clone() }</text>
                </g>
            }) }
            <path d={chart.area.clone()} fill={LINE_FILL} stroke="none" />
            <polyline points={chart.line.clone()} fill="none" stroke={LINE_STROKE} stroke-width="2" />
            { for chart.points.iter().map(|point| html! {
                <g>
                    <circle cx={point.x.to_string()} cy={point.y.to_string()} r="4" fill={LINE_STROKE}>
                        <title>{ point.title.clone() }</title>
                    </circle>
                    <text x={point.x.to_string()} y={baseline.to_string()} text-anchor="middle" font-size="11" fill="currentColor">{ point.label.clone() }</text>
                </g>
            }) }
        </svg>
    }
}
