//! HTML rendering for the dashboard page and the fragments htmx swaps in.

use maud::{Markup, html};

use crate::{
    dashboard::{
        charts::chart_section,
        state::DashboardState,
        table::{TRANSACTIONS_TABLE_ID, transactions_table},
    },
    endpoints,
    html::{
        BUTTON_STYLE, ECHARTS_SCRIPT_URL, FORM_LABEL_STYLE, FORM_SELECT_STYLE,
        FORM_TEXT_INPUT_STYLE, HeadElement, PAGE_CONTAINER_STYLE, base,
    },
    month::MONTHS,
    pagination::PageNumber,
};

/// The HTML element ID of the pagination controls.
const PAGINATION_ID: &str = "pagination";

/// Renders the full dashboard page.
pub(super) fn dashboard_view(state: &DashboardState) -> Markup {
    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 { "Transactions Dashboard" }

            (controls(state))

            (transactions_table(state.visible_transactions()))

            (pagination_controls(state.page()))

            (chart_section(state.histogram(), false))
        }
    );

    let scripts = [HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned())];

    base("Dashboard", &scripts, &content)
}

/// Renders the table and the chart after the data has been regenerated.
///
/// The table is the main swap target and the chart is swapped out of band.
pub(super) fn regenerated_data_partial(state: &DashboardState) -> Markup {
    html!(
        (transactions_table(state.visible_transactions()))
        (chart_section(state.histogram(), true))
    )
}

/// Renders the month selector and the search box.
fn controls(state: &DashboardState) -> Markup {
    let selected_month = state.month();
    let table_target = format!("#{TRANSACTIONS_TABLE_ID}");

    html!(
        div class="controls"
        {
            label for="month" class=(FORM_LABEL_STYLE) { "Select Month:" }

            select
                id="month"
                name="month"
                autocomplete="off"
                class=(FORM_SELECT_STYLE)
                hx-post=(endpoints::DASHBOARD_MONTH)
                hx-trigger="change"
                hx-target=(table_target)
                hx-target-error="#alert-container"
                hx-swap="outerHTML"
            {
                @for month in MONTHS {
                    @let name = month.to_string();
                    option value=(name) selected[month == selected_month] { (name) }
                }
            }

            input
                type="text"
                id="search"
                name="search"
                autocomplete="off"
                class=(FORM_TEXT_INPUT_STYLE)
                placeholder="Search transactions..."
                value=(state.search_text())
                hx-post=(endpoints::DASHBOARD_SEARCH)
                hx-trigger="input changed"
                hx-target=(table_target)
                hx-target-error="#alert-container"
                hx-swap="outerHTML";
        }
    )
}

/// Renders the "Previous" and "Next" buttons with the current page number.
///
/// "Previous" is disabled on the first page.
pub(super) fn pagination_controls(page: PageNumber) -> Markup {
    let target = format!("#{PAGINATION_ID}");

    html!(
        div id=(PAGINATION_ID) class="pagination"
        {
            button
                type="button"
                class=(BUTTON_STYLE)
                disabled[!page.has_previous()]
                hx-post=(endpoints::DASHBOARD_PREVIOUS_PAGE)
                hx-target=(target)
                hx-target-error="#alert-container"
                hx-swap="outerHTML"
            {
                "Previous"
            }

            span class="page-number" { "Page " (page.get()) }

            button
                type="button"
                class=(BUTTON_STYLE)
                hx-post=(endpoints::DASHBOARD_NEXT_PAGE)
                hx-target=(target)
                hx-target-error="#alert-container"
                hx-swap="outerHTML"
            {
                "Next"
            }
        }
    )
}
