use contracts::dashboards::d400_sales_overview::{ChartKind, ChartPoint, ChartScale, MonthlyPoint};
use contracts::domain::a002_order::format_money;
use leptos::prelude::*;

fn n(v: f64) -> String {
    format!("{:.1}", v)
}

/// Monthly revenue as an inline SVG; line or bars.
#[component]
pub fn SalesChart(
    #[prop(into)] series: Signal<Vec<MonthlyPoint>>,
    #[prop(into)] kind: Signal<ChartKind>,
) -> impl IntoView {
    let scale = ChartScale::default();

    let points = Memo::new(move |_| {
        let values: Vec<(String, f64)> = series.with(|s| {
            s.iter().map(|p| (p.label.clone(), p.revenue)).collect()
        });
        scale.place(&values)
    });

    let view_box = format!("0 0 {} {}", scale.width, scale.height);
    let baseline = scale.baseline();

    let body = move || {
        let pts = points.get();
        if pts.is_empty() {
            return view! {
                <text x=n(scale.width / 2.0) y=n(scale.height / 2.0) text-anchor="middle" class="chart__empty">
                    "No orders yet"
                </text>
            }
            .into_any();
        }

        let labels = pts
            .iter()
            .map(|p: &ChartPoint| view! {
                <text x=n(p.x) y=n(baseline + 18.0) text-anchor="middle" class="chart__label">{p.label.clone()}</text>
            })
            .collect_view();

        let marks = match kind.get() {
            ChartKind::Line => {
                let line = ChartScale::polyline(&pts);
                let dots = pts
                    .iter()
                    .map(|p| view! {
                        <circle cx=n(p.x) cy=n(p.y) r="4" class="chart__dot">
                            <title>{format!("{}: {}", p.label, format_money(p.value))}</title>
                        </circle>
                    })
                    .collect_view();
                view! {
                    <polyline points=line fill="none" class="chart__line" />
                    {dots}
                }
                .into_any()
            }
            ChartKind::Bar => {
                let width = scale.bar_width(pts.len());
                pts.iter()
                    .map(|p| view! {
                        <rect
                            x=n(p.x - width / 2.0)
                            y=n(p.y)
                            width=n(width)
                            height=n((baseline - p.y).max(0.0))
                            class="chart__bar"
                        >
                            <title>{format!("{}: {}", p.label, format_money(p.value))}</title>
                        </rect>
                    })
                    .collect_view()
                    .into_any()
            }
        };

        view! { {marks} {labels} }.into_any()
    };

    view! {
        <svg class="chart" viewBox=view_box preserveAspectRatio="xMidYMid meet" role="img">
            <line
                x1=n(scale.padding)
                y1=n(baseline)
                x2=n(scale.width - scale.padding)
                y2=n(baseline)
                class="chart__axis"
            />
            {body}
        </svg>
    }
}
