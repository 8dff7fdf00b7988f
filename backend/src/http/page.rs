//! HTML rendering of the dashboard layout.
//!
//! The page is self-contained apart from Plotly.js, which is loaded from the
//! CDN. A small inline script posts every control change to `/v1/update` and
//! hands the returned figures to `Plotly.react`.

use crate::dashboard::{Component, Layout};

/// Plotly.js bundle used by the page.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Render the full dashboard page.
pub fn render_page(layout: &Layout) -> String {
    let body: String = layout.components.iter().map(render_component).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{plotly}"></script>
    <style>{css}</style>
</head>
<body>
    <div class="container">
{body}    </div>
    <script>{js}</script>
</body>
</html>"#,
        title = html_escape(&layout.title),
        plotly = PLOTLY_CDN,
        css = inline_css(),
        body = body,
        js = inline_javascript(),
    )
}

fn render_component(component: &Component) -> String {
    match component {
        Component::Heading { text, style } => format!(
            "        <h1 style=\"text-align: {}; color: {}; font-size: {}px\">{}</h1>\n",
            html_escape(&style.text_align),
            html_escape(&style.color),
            style.font_size,
            html_escape(text)
        ),
        Component::Dropdown {
            id,
            options,
            value,
            placeholder,
            searchable,
        } => {
            let options: String = options
                .iter()
                .map(|opt| {
                    format!(
                        "<option value=\"{}\"{}>{}</option>",
                        html_escape(&opt.value),
                        if &opt.value == value { " selected" } else { "" },
                        html_escape(&opt.label)
                    )
                })
                .collect();
            format!(
                "        <select id=\"{}\" class=\"control\" data-input=\"dropdown\" data-searchable=\"{}\" title=\"{}\">{}</select>\n",
                html_escape(id),
                searchable,
                html_escape(placeholder),
                options
            )
        }
        Component::Graph { id } => {
            format!("        <div id=\"{}\" class=\"graph\"></div>\n", html_escape(id))
        }
        Component::Paragraph { text } => format!("        <p>{}</p>\n", html_escape(text)),
        Component::RangeSlider {
            id,
            min,
            max,
            step,
            marks,
            value,
        } => {
            let id = html_escape(id);
            let ticks: String = marks
                .iter()
                .map(|m| format!("<option value=\"{}\" label=\"{}\"></option>", m.value, html_escape(&m.label)))
                .collect();
            let labels: String = marks
                .iter()
                .map(|m| format!("<span>{}</span>", html_escape(&m.label)))
                .collect();
            format!(
                concat!(
                    "        <div id=\"{id}\" class=\"control range-slider\" data-input=\"range\">\n",
                    "            <input type=\"range\" id=\"{id}-low\" min=\"{min}\" max=\"{max}\" step=\"{step}\" value=\"{low}\" list=\"{id}-marks\">\n",
                    "            <input type=\"range\" id=\"{id}-high\" min=\"{min}\" max=\"{max}\" step=\"{step}\" value=\"{high}\" list=\"{id}-marks\">\n",
                    "            <datalist id=\"{id}-marks\">{ticks}</datalist>\n",
                    "            <div class=\"marks\">{labels}</div>\n",
                    "            <output id=\"{id}-value\">{low} – {high}</output>\n",
                    "        </div>\n"
                ),
                id = id,
                min = min,
                max = max,
                step = step,
                low = value.low,
                high = value.high,
                ticks = ticks,
                labels = labels,
            )
        }
        Component::Break => "        <br>\n".to_string(),
    }
}

fn inline_css() -> &'static str {
    r#"
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; }
.container { max-width: 1100px; margin: 0 auto; padding: 16px; }
select.control { width: 100%; padding: 8px; font-size: 15px; }
.graph { min-height: 450px; }
.range-slider { position: relative; padding: 8px 0 24px; }
.range-slider input[type=range] { width: 100%; display: block; }
.range-slider .marks { display: flex; justify-content: space-between; font-size: 12px; color: #666; }
.range-slider output { display: block; text-align: center; font-size: 13px; margin-top: 4px; }
"#
}

fn inline_javascript() -> &'static str {
    r#"
(function () {
    const dropdown = document.querySelector('[data-input="dropdown"]');
    const slider = document.querySelector('[data-input="range"]');
    const low = document.getElementById(slider.id + '-low');
    const high = document.getElementById(slider.id + '-high');
    const readout = document.getElementById(slider.id + '-value');

    function currentState() {
        let lo = Number(low.value), hi = Number(high.value);
        if (lo > hi) { [lo, hi] = [hi, lo]; }
        readout.textContent = lo + ' – ' + hi;
        return { site: dropdown.value, payload_range: [lo, hi] };
    }

    async function update(changed) {
        const response = await fetch('/v1/update', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ changed: changed, state: currentState() }),
        });
        if (!response.ok) { return; }
        const body = await response.json();
        for (const output of body.outputs) {
            Plotly.react(output.id, output.figure.data, output.figure.layout);
        }
    }

    dropdown.addEventListener('change', () => update(dropdown.id));
    low.addEventListener('change', () => update(slider.id));
    high.addEventListener('change', () => update(slider.id));
    update(null);
})();
"#
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DashboardConfig, LaunchTable};
    use crate::models::{LaunchRecord, OutcomeClass};

    fn layout() -> Layout {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, OutcomeClass::Failure, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 9600.0, OutcomeClass::Success, "FT"),
        ]);
        Layout::build(&DashboardConfig::default(), &table)
    }

    #[test]
    fn test_page_contains_controls_and_graphs() {
        let html = render_page(&layout());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("SpaceX Launch Records Dashboard"));
        assert!(html.contains("id=\"site-dropdown\""));
        assert!(html.contains("<option value=\"ALL\" selected>All Sites</option>"));
        assert!(html.contains("id=\"success-pie-chart\""));
        assert!(html.contains("id=\"success-payload-scatter-chart\""));
        assert!(html.contains("id=\"payload-slider-high\""));
        assert!(html.contains("value=\"9600\""));
        assert!(html.contains(PLOTLY_CDN));
    }

    #[test]
    fn test_heading_style() {
        let html = render_page(&layout());
        assert!(html.contains("text-align: center; color: #503D36; font-size: 40px"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<a href=\"x\">&</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }
}
