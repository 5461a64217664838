//! Generic table model for the paginated list pages.
//!
//! A page declares its columns once; the table renders exactly one of four
//! body states and decides whether the pagination strip appears.

use serde::Serialize;

use crate::pagination::PageControls;
use crate::search::SearchState;

/// One column of a list table: a stable key, a header label, and a cell
/// renderer. Keys are expected to be unique within a table but are not
/// validated at runtime.
pub struct Column<T> {
    key: &'static str,
    header: String,
    class: Option<String>,
    render: Box<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T> Column<T> {
    pub fn new<F>(key: &'static str, header: impl Into<String>, render: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            key,
            header: header.into(),
            class: None,
            render: Box::new(render),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn key(&self) -> &'static str {
        self.key
    }
}

/// The mutually exclusive body states, in precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    Error(String),
    Empty(String),
    Rows(Vec<Vec<String>>),
}

/// Header cell handed to templates.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: &'static str,
    pub label: String,
    pub class: Option<String>,
}

/// Fully rendered table for one request, serialized into the tera context.
#[derive(Debug, Serialize)]
pub struct TableContext {
    pub headers: Vec<HeaderCell>,
    /// `"loading" | "error" | "empty" | "rows"`.
    pub state: &'static str,
    pub message: Option<String>,
    pub rows: Vec<Vec<String>>,
    pub pagination: Option<PageControls>,
}

pub struct DataTable<T> {
    columns: Vec<Column<T>>,
    empty_message: String,
    show_pagination: bool,
}

impl<T> DataTable<T> {
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            empty_message: "Nothing found".to_string(),
            show_pagination: true,
        }
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn without_pagination(mut self) -> Self {
        self.show_pagination = false;
        self
    }

    /// Resolves the body state with precedence `loading > error > empty >
    /// rows`; exactly one state is ever produced.
    pub fn body(&self, state: &SearchState<T>) -> TableBody {
        if state.is_loading {
            return TableBody::Loading;
        }
        if let Some(error) = &state.error {
            return TableBody::Error(error.clone());
        }
        if state.rows.is_empty() {
            return TableBody::Empty(self.empty_message.clone());
        }

        let rows = state
            .rows
            .iter()
            .map(|item| {
                self.columns
                    .iter()
                    .map(|column| (column.render)(item))
                    .collect()
            })
            .collect();
        TableBody::Rows(rows)
    }

    /// The strip is rendered only for a populated body.
    pub fn pagination(&self, state: &SearchState<T>) -> Option<PageControls> {
        let populated =
            !state.is_loading && state.error.is_none() && !state.rows.is_empty();
        (self.show_pagination && populated).then(|| PageControls::new(&state.pagination))
    }

    pub fn headers(&self) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key,
                label: column.header.clone(),
                class: column.class.clone(),
            })
            .collect()
    }

    pub fn render(&self, state: &SearchState<T>) -> TableContext {
        let (state_name, message, rows) = match self.body(state) {
            TableBody::Loading => ("loading", None, Vec::new()),
            TableBody::Error(message) => ("error", Some(message), Vec::new()),
            TableBody::Empty(message) => ("empty", Some(message), Vec::new()),
            TableBody::Rows(rows) => ("rows", None, rows),
        };

        TableContext {
            headers: self.headers(),
            state: state_name,
            message,
            rows,
            pagination: self.pagination(state),
        }
    }
}
