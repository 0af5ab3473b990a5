//! State of the header search box and its results dropdown.

use common::file_document::FileDocument;

use crate::routes::Route;

/// What the search box must do after its query changed.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchCommand {
    /// Query is empty: drop the query from the URL.
    ClearUrlQuery,
    /// Fetch files matching `search_text`, tagged with the request generation.
    Fetch { generation: u64, search_text: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<FileDocument>,
    pub open: bool,
    /// Bumped on every query change; only the latest fetch may fill the dropdown.
    generation: u64,
}

impl SearchState {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_query(&mut self, query: String) -> SearchCommand {
        self.generation += 1;
        self.query = query;
        if self.query.is_empty() {
            self.results.clear();
            self.open = false;
            return SearchCommand::ClearUrlQuery;
        }
        SearchCommand::Fetch { generation: self.generation, search_text: self.query.clone() }
    }

    /// Apply a fetch result. Results of a superseded query are dropped.
    pub fn apply_results(&mut self, generation: u64, results: Vec<FileDocument>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.results = results;
        self.open = true;
        true
    }

    pub fn apply_error(&mut self, generation: u64) {
        if generation == self.generation {
            self.open = false;
        }
    }

    /// The URL lost its `query` parameter: reset the box unless it is already empty.
    pub fn sync_url_query(&mut self, url_query: &str) -> Option<SearchCommand> {
        if url_query.is_empty() && !self.query.is_empty() {
            return Some(self.set_query(String::new()));
        }
        None
    }

    /// Close the dropdown and return the listing page for the chosen file.
    pub fn select(&mut self, file: &FileDocument) -> Route {
        self.open = false;
        self.results.clear();
        Route::for_search_result(file, self.query.clone())
    }
}

#[cfg(test)]
#[path = "search_state_test.rs"]
mod tests;
