use serde_json::{json, Value};

use super::{AxisLabels, ChartError, ChartKind, MetricSeries, PerDayData, PieSlice};

pub const PALETTE: [&str; 7] = [
    "#058DC7", "#50b432", "#ED561B", "#EDEF00", "#24CBE5", "#64E572", "#FF9655",
];

const CHART_HEIGHT: u32 = 200;
const WIDGET_WIDTH: u32 = 270;

/// Global options shared by every chart; `None` when the page has no chart.
pub fn theme_options(present: &[ChartKind]) -> Option<Value> {
    if present.is_empty() {
        return None;
    }
    Some(json!({
        "colors": PALETTE,
        "title": { "text": "" },
        "legend": {
            "layout": "vertical",
            "backgroundColor": "#FFF",
            "borderWidth": 0,
            "shadow": false,
            "symbolPadding": 12,
            "symbolWidth": 10,
            "itemStyle": { "cursor": "pointer", "color": "#000", "lineHeight": "18px" },
            "itemHoverStyle": { "color": "#666" }
        }
    }))
}

/// Cuts a percentage to at most two decimals without rounding.
pub fn format_percentage(percentage: f64) -> String {
    let text = percentage.to_string();
    match text.find('.') {
        Some(dot) => text[..(dot + 3).min(text.len())].to_string(),
        None => text,
    }
}

pub fn pie_tooltip(name: &str, y: i64, percentage: f64) -> String {
    format!("<b>{name}</b>: {y} ({}%)", format_percentage(percentage))
}

pub fn per_day_tooltip(series: &str, full_date: &str, y: i64) -> String {
    format!("<b>{series}</b><br/>{full_date}: {y}")
}

pub fn pie_options(slices: &[PieSlice], container_width: u32) -> Value {
    let total: i64 = slices.iter().map(|slice| slice.value).sum();
    let data: Vec<Value> = slices
        .iter()
        .map(|slice| {
            let share = if total == 0 {
                0.0
            } else {
                slice.value as f64 * 100.0 / total as f64
            };
            json!({
                "name": slice.label,
                "y": slice.value,
                "percentage": slice.percentage,
                "tooltip": pie_tooltip(&slice.label, slice.value, share),
            })
        })
        .collect();

    json!({
        "chart": {
            "height": CHART_HEIGHT,
            "width": container_width,
            "margin": [0, 160, 0, 0],
            "backgroundColor": "transparent"
        },
        "credits": { "enabled": false },
        "tooltip": { "borderWidth": 2, "shadow": false },
        "plotOptions": {
            "pie": {
                "allowPointSelect": true,
                "dataLabels": { "enabled": false },
                "showInLegend": true
            }
        },
        "legend": { "align": "right" },
        "series": [ { "type": "pie", "data": data } ]
    })
}

/// Options for the three per-day line/area charts.
///
/// `container_width` is ignored by the widget, which always renders at a
/// fixed width.
pub fn per_day_options(
    kind: ChartKind,
    data: &PerDayData,
    container_width: u32,
) -> Result<Value, ChartError> {
    if kind == ChartKind::Pie {
        return Err(ChartError::NotPerDay(kind));
    }
    if data.metrics.len() != kind.metric_count() {
        return Err(ChartError::MetricCount {
            kind,
            expected: kind.metric_count(),
            actual: data.metrics.len(),
        });
    }

    let axis = AxisLabels::from_days(&data.days);
    let mut series: Vec<Value> = data
        .metrics
        .iter()
        .map(|metric| series_json(metric, &axis))
        .collect();
    if kind != ChartKind::SingleMetricPerDay {
        if let Some(first) = series.first_mut() {
            first["type"] = json!("area");
        }
    }

    let marker = json!({
        "marker": {
            "enabled": false,
            "states": { "hover": { "enabled": true, "radius": 5, "lineWidth": 1 } }
        }
    });
    let mut plot_options = json!({
        "area": marker.clone(),
        "column": { "pointPadding": 0.2, "borderWidth": 0 },
        "series": { "fillOpacity": 0.3 }
    });
    if kind != ChartKind::SingleMetricPerDay {
        plot_options["line"] = marker;
    }

    let y_axis = |title: Value| {
        json!({
            "min": 0,
            "max": data.max_y,
            "tickInterval": data.tick_interval,
            "title": title
        })
    };

    let options = match kind {
        ChartKind::Widget => json!({
            "chart": {
                "defaultSeriesType": "line",
                "margin": [30, 0, 30, 0],
                "height": CHART_HEIGHT,
                "width": WIDGET_WIDTH,
                "backgroundColor": "transparent"
            },
            "xAxis": { "categories": axis.categories },
            "yAxis": y_axis(json!({ "enabled": false })),
            "credits": { "enabled": false },
            "plotOptions": plot_options,
            "series": series,
            "legend": { "enabled": false }
        }),
        _ => {
            let series_type = if kind == ChartKind::SingleMetricPerDay {
                "area"
            } else {
                "line"
            };
            json!({
                "chart": {
                    "height": CHART_HEIGHT,
                    "width": container_width,
                    "margin": [60, 0, 30, 40],
                    "defaultSeriesType": series_type,
                    "backgroundColor": "transparent"
                },
                "xAxis": { "lineColor": "#CCC", "lineWidth": 1, "categories": axis.categories },
                "yAxis": y_axis(json!({ "text": "" })),
                "credits": { "enabled": false },
                "plotOptions": plot_options,
                "series": series,
                "legend": { "layout": "horizontal", "verticalAlign": "top" }
            })
        }
    };
    Ok(options)
}

fn series_json(metric: &MetricSeries, axis: &AxisLabels) -> Value {
    let points: Vec<Value> = metric
        .values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let full_date = axis.full_dates.get(index).map(String::as_str).unwrap_or("");
            json!({ "y": value, "tooltip": per_day_tooltip(&metric.name, full_date, *value) })
        })
        .collect();
    json!({ "name": metric.name, "data": points })
}
