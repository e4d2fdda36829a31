//! The price distribution bar chart.
//!
//! The chart is generated as JSON configuration for the ECharts library and
//! rendered as an HTML container followed by the script that initialises it.

use charming::{
    Chart,
    component::{Axis, Legend},
    element::{AxisPointer, AxisPointerType, AxisType, ItemStyle, Tooltip, Trigger},
    series::bar,
};
use maud::{Markup, PreEscaped, html};

use crate::mock_data::HistogramBucket;

/// The HTML element ID of the chart container.
pub(super) const PRICE_CHART_ID: &str = "price-chart";

/// The HTML element ID of the section holding the chart.
pub(super) const CHART_SECTION_ID: &str = "chart-section";

const SERIES_NAME: &str = "Number of Items";
const BAR_COLOR: &str = "rgba(75, 192, 192, 0.6)";
const ANIMATION_DURATION_MS: u32 = 1500;
const ANIMATION_EASING: &str = "bounceInOut";

/// Global holding the live ECharts instance between swaps.
const CHART_INSTANCE_VAR: &str = "priceChart";
const RESIZE_LISTENER_FLAG: &str = "priceChartResizeListener";

/// Builds the bar chart with one bar per histogram bucket.
pub(super) fn price_range_chart(histogram: &[HistogramBucket]) -> Chart {
    let labels: Vec<&str> = histogram.iter().map(|bucket| bucket.label).collect();
    let counts: Vec<f64> = histogram
        .iter()
        .map(|bucket| f64::from(bucket.count))
        .collect();

    Chart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(Legend::new().top("1%"))
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(
            bar::Bar::new()
                .name(SERIES_NAME)
                .item_style(
                    ItemStyle::new()
                        .color(BAR_COLOR)
                        .border_radius(5),
                )
                .data(counts),
        )
}

/// Renders the chart section.
///
/// When `histogram` is empty a loading message is shown instead of the chart.
/// Set `out_of_band` when the section is returned alongside another fragment
/// so htmx swaps it into the existing section.
pub(super) fn chart_section(histogram: &[HistogramBucket], out_of_band: bool) -> Markup {
    html!(
        section
            id=(CHART_SECTION_ID)
            class="chart-container"
            hx-swap-oob=[out_of_band.then_some("true")]
        {
            h2 { "Transactions Price Range" }

            @if histogram.is_empty() {
                p { "Loading chart data..." }
            } @else {
                div id=(PRICE_CHART_ID) class="chart" {}
                script { (chart_script(&price_range_chart(histogram))) }
            }
        }
    )
}

/// Generates the JavaScript that initialises the ECharts instance.
///
/// The script runs as soon as it is parsed, so it must come after the chart
/// container. It runs again every time htmx swaps the section in, so the
/// previous chart is disposed and the resize listener is only added once.
fn chart_script(chart: &Chart) -> PreEscaped<String> {
    PreEscaped(format!(
        r#"(function() {{
            const chartDom = document.getElementById("{PRICE_CHART_ID}");
            window.{CHART_INSTANCE_VAR}?.dispose();
            const chart = echarts.init(chartDom);
            window.{CHART_INSTANCE_VAR} = chart;

            const option = {options};
            option.animationDuration = {ANIMATION_DURATION_MS};
            option.animationEasing = "{ANIMATION_EASING}";
            chart.setOption(option);

            if (!window.{RESIZE_LISTENER_FLAG}) {{
                window.{RESIZE_LISTENER_FLAG} = true;
                window.addEventListener('resize', () => window.{CHART_INSTANCE_VAR}?.resize());
            }}
        }})();"#,
        options = chart
    ))
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::mock_data::{HistogramBucket, PRICE_RANGE_LABELS};

    use super::{chart_section, price_range_chart};

    fn get_script_text(markup: &str) -> String {
        let fragment = Html::parse_fragment(markup);
        let script = Selector::parse("section#chart-section script").unwrap();

        fragment
            .select(&script)
            .next()
            .expect("chart script missing")
            .text()
            .collect()
    }

    fn get_test_histogram() -> Vec<HistogramBucket> {
        PRICE_RANGE_LABELS
            .iter()
            .zip([3, 1, 10, 7, 2])
            .map(|(&label, count)| HistogramBucket { label, count })
            .collect()
    }

    #[test]
    fn chart_options_contain_labels_and_series() {
        let options = price_range_chart(&get_test_histogram()).to_string();

        for label in PRICE_RANGE_LABELS {
            assert!(options.contains(label), "{label} missing from {options}");
        }
        assert!(options.contains("Number of Items"));
        assert!(options.contains("rgba(75, 192, 192, 0.6)"));
        // The section heading already names the chart.
        assert!(!options.contains("Transactions Price Range"));
    }

    #[test]
    fn renders_chart_container_and_script() {
        let markup = chart_section(&get_test_histogram(), false).into_string();
        let fragment = Html::parse_fragment(&markup);

        let chart = Selector::parse("section#chart-section div#price-chart").unwrap();
        assert!(fragment.select(&chart).next().is_some());

        let script = Selector::parse("section#chart-section script").unwrap();
        let script_text = fragment
            .select(&script)
            .next()
            .expect("chart script missing")
            .text()
            .collect::<String>();
        assert!(script_text.contains("echarts.init"));
        assert!(script_text.contains("option.animationDuration = 1500"));
    }

    #[test]
    fn shows_loading_message_without_data() {
        let markup = chart_section(&[], false).into_string();
        let fragment = Html::parse_fragment(&markup);

        let chart = Selector::parse("#price-chart").unwrap();
        assert!(fragment.select(&chart).next().is_none());

        let paragraph = Selector::parse("section#chart-section p").unwrap();
        let text = fragment
            .select(&paragraph)
            .next()
            .expect("loading message missing")
            .text()
            .collect::<String>();
        assert_eq!(text, "Loading chart data...");
    }

    #[test]
    fn marks_section_out_of_band() {
        let markup = chart_section(&get_test_histogram(), true).into_string();

        assert!(markup.contains(r#"hx-swap-oob="true""#));

        let markup = chart_section(&get_test_histogram(), false).into_string();

        assert!(!markup.contains("hx-swap-oob"));
    }

    #[test]
    fn swapped_in_chart_replaces_previous_instance() {
        let histogram = get_test_histogram();
        let first_swap = get_script_text(&chart_section(&histogram, true).into_string());
        let second_swap = get_script_text(&chart_section(&histogram, true).into_string());

        assert_eq!(first_swap, second_swap);

        let dispose_at = second_swap
            .find("window.priceChart?.dispose()")
            .expect("previous chart is not disposed");
        let init_at = second_swap.find("echarts.init").expect("chart is not initialised");
        assert!(dispose_at < init_at);

        assert_eq!(second_swap.matches("addEventListener").count(), 1);
        assert!(second_swap.contains("if (!window.priceChartResizeListener)"));
    }
}
