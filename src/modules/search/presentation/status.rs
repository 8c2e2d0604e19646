/// Visual treatment a front end should give the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Busy,
    Success,
    Warning,
    Error,
}

/// Status indicator state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    InProgress,
    Found { count: usize },
    Empty,
    Failed { message: String },
}

impl SearchStatus {
    pub fn message(&self) -> String {
        match self {
            SearchStatus::Idle => "Enter an anime name to search".to_string(),
            SearchStatus::InProgress => "Searching...".to_string(),
            SearchStatus::Found { count } => format!("Found {} result(s)", count),
            SearchStatus::Empty => "No results found".to_string(),
            SearchStatus::Failed { message } => format!("Search failed: {}", message),
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            SearchStatus::Idle => StatusTone::Neutral,
            SearchStatus::InProgress => StatusTone::Busy,
            SearchStatus::Found { .. } => StatusTone::Success,
            SearchStatus::Empty => StatusTone::Warning,
            SearchStatus::Failed { .. } => StatusTone::Error,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SearchStatus::Found { .. } | SearchStatus::Empty | SearchStatus::Failed { .. }
        )
    }
}
