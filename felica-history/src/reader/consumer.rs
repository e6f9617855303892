/// Receives the decoded history of one read, in card order.
pub trait HistoryConsumer<T> {
    fn on_history(&mut self, records: Vec<T>);
}

impl<T, F> HistoryConsumer<T> for F
where
    F: FnMut(Vec<T>),
{
    fn on_history(&mut self, records: Vec<T>) {
        self(records)
    }
}

/// Consumer that keeps every delivered batch; handy in tests and for
/// callers that poll for results.
#[derive(Debug)]
pub struct HistoryCollector<T> {
    batches: Vec<Vec<T>>,
}

impl<T> Default for HistoryCollector<T> {
    fn default() -> Self {
        Self {
            batches: Vec::new(),
        }
    }
}

impl<T> HistoryCollector<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batches(&self) -> &[Vec<T>] {
        &self.batches
    }

    pub fn last(&self) -> Option<&[T]> {
        self.batches.last().map(Vec::as_slice)
    }

    pub fn into_batches(self) -> Vec<Vec<T>> {
        self.batches
    }
}

impl<T> HistoryConsumer<T> for HistoryCollector<T> {
    fn on_history(&mut self, records: Vec<T>) {
        self.batches.push(records);
    }
}
