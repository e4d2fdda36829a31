use maud::{DOCTYPE, Markup, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

// Form styles
pub const FORM_LABEL_STYLE: &str = "form-label";
pub const FORM_TEXT_INPUT_STYLE: &str = "form-input";
pub const FORM_SELECT_STYLE: &str = "form-select";

// Button styles
pub const BUTTON_STYLE: &str = "button";

// Table styles
pub const TABLE_STYLE: &str = "table";
pub const TABLE_HEADER_STYLE: &str = "table-header";
pub const TABLE_ROW_STYLE: &str = "table-row";
pub const TABLE_CELL_STYLE: &str = "table-cell";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "container";

pub const HTMX_SCRIPT_URL: &str = "https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js";
pub const HTMX_RESPONSE_TARGETS_URL: &str =
    "https://unpkg.com/htmx-ext-response-targets@2.0.4/response-targets.js";
pub const ECHARTS_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Transactions Dashboard" }
                link href="/static/main.css" rel="stylesheet";

                script src=(HTMX_SCRIPT_URL) {}
                script src=(HTMX_RESPONSE_TARGETS_URL) {}

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body hx-ext="response-targets"
            {
                (content)

                // Alert container for out-of-band swaps
                div id="alert-container" class="alert-container" {}
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="error-page"
        {
            h1 class="error-code" { (header) }

            p class="error-description" { (description) }

            p class="error-fix" { (fix) }

            a href="/" class=(BUTTON_STYLE) { "Back to Dashboard" }
        }
    );

    base(title, &[], &content)
}

/// Format a whole-dollar price with a currency prefix, e.g. "$275".
pub fn format_price(price: u32) -> String {
    static FMT: OnceLock<Formatter> = OnceLock::new();

    let fmt = FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    if price == 0 {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0".to_owned()
    } else {
        fmt.fmt_string(price)
    }
}
