//! The UI state of the dashboard and the transitions that update it.

use rand::{SeedableRng, rngs::StdRng};
use time::Month;

use crate::{
    filter::filter_transactions,
    mock_data::{HistogramBucket, generate_price_histogram, generate_transactions},
    month::DEFAULT_MONTH,
    pagination::PageNumber,
    transaction::Transaction,
};

/// Everything the dashboard page displays.
///
/// Fields are only changed through the transition methods. Changing the
/// month regenerates the data, and changing the search text or the data
/// refilters the visible transactions.
#[derive(Debug, Clone)]
pub struct DashboardState {
    month: Month,
    search_text: String,
    page: PageNumber,
    transactions: Vec<Transaction>,
    visible_transactions: Vec<Transaction>,
    histogram: Vec<HistogramBucket>,
    rng: StdRng,
}

impl DashboardState {
    /// Create a dashboard in its initial state with no data.
    ///
    /// Call [DashboardState::mount] to generate the first set of data.
    /// If `seed` is `None` the random number generator is seeded from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            month: DEFAULT_MONTH,
            search_text: String::new(),
            page: PageNumber::default(),
            transactions: Vec::new(),
            visible_transactions: Vec::new(),
            histogram: Vec::new(),
            rng,
        }
    }

    /// Reset the UI state to its defaults and generate fresh data.
    ///
    /// This is what happens when the page is loaded.
    pub fn mount(&mut self) {
        self.month = DEFAULT_MONTH;
        self.search_text.clear();
        self.page = PageNumber::default();
        self.regenerate();
    }

    /// Select `month` and regenerate the data.
    pub fn set_month(&mut self, month: Month) {
        tracing::debug!("month changed from {} to {month}", self.month);
        self.month = month;
        self.regenerate();
    }

    /// Update the search text and refilter the visible transactions.
    pub fn set_search_text(&mut self, search_text: String) {
        self.search_text = search_text;
        self.refilter();
    }

    /// Go to the previous page, unless already on the first page.
    pub fn previous_page(&mut self) {
        self.page = self.page.previous();
    }

    /// Go to the next page.
    pub fn next_page(&mut self) {
        self.page = self.page.next();
    }

    /// Replace the transactions and the histogram with newly generated data.
    ///
    /// The visible transactions are refiltered with the current search text.
    /// The page number is left unchanged.
    pub fn regenerate(&mut self) {
        tracing::debug!("generating mock data for {}", self.month);
        self.transactions = generate_transactions(&mut self.rng);
        self.histogram = generate_price_histogram(&mut self.rng);
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible_transactions = filter_transactions(&self.transactions, &self.search_text);
    }

    /// The selected month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// The text in the search box.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The page number shown under the table.
    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// All generated transactions.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The transactions that match the search text.
    pub fn visible_transactions(&self) -> &[Transaction] {
        &self.visible_transactions
    }

    /// The price distribution for the bar chart.
    pub fn histogram(&self) -> &[HistogramBucket] {
        &self.histogram
    }
}
