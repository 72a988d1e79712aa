#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Lookup task finished; `ticket` identifies which search it answers
    LookupFinished {
        ticket: u64,
        result: Result<WordResult, String>,
    },
    Render(ViewSnapshot),
    Notice(String),
    Shutdown,
}

/// User intents coming from the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SetSearchTerm(String),
    Search,
    SelectHistory(String),
    RemoveHistory(String),
    ClearHistory,
    SelectSynonym(String),
    Resize { width: u32 },
    ToggleDrawer,
    Quit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordResult {
    pub word: String,
    pub part_of_speech: String,
    pub definition: String,
    pub examples: Vec<String>,
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub term: String,
    pub date: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Open,
    Closed,
}

impl DrawerState {
    pub fn is_open(self) -> bool {
        matches!(self, DrawerState::Open)
    }

    pub fn flipped(self) -> Self {
        match self {
            DrawerState::Open => DrawerState::Closed,
            DrawerState::Closed => DrawerState::Open,
        }
    }
}

/// Everything the front end needs to draw one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub search_term: String,
    pub word: WordResult,
    pub error: Option<String>,
    pub history: Vec<HistoryEntry>,
    pub drawer: DrawerState,
    pub loading: bool,
}
